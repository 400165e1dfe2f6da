mod docker_build_check;

use std::path::PathBuf;
use std::process;
use std::sync::Arc;
use std::thread;

use docker_build_check::api;
use docker_build_check::check;
use docker_build_check::config;
use docker_build_check::docker;
use docker_build_check::environment;

fn main() {
    env_logger::init();
    let config = prepare_config();

    let server = match tiny_http::Server::http(config.server.listen_addr_with_port()) {
        Ok(server) => {
            Arc::new(server)
        }

        Err(err) => {
            log::error!("Failed to bind {}: {}", config.server.listen_addr_with_port(), err);
            process::exit(1)
        }
    };

    log::info!("Listening on {}", config.server.listen_addr_with_port());

    let mut handles = Vec::new();

    for _ in 0..config.server.worker_threads {
        let server = server.clone();
        let config = config.clone();

        handles.push(thread::spawn(move || {
            for request in server.incoming_requests() {
                handle_request(&config, request);
            }
        }));
    }

    for handle in handles {
        handle.join().unwrap();
    }
}

fn handle_request(config: &config::Config, mut request: tiny_http::Request) {
    log_request(&request);

    // Route on the path only, the query string is ignored
    let path = request.url().split('?').next().unwrap_or("");

    let result = match path {
        "/" => api::root::handle(config, &mut request),
        _ => api::not_found::handle(config, &mut request),
    };

    match result {
        Ok(data) => {
            success_response(request, &data)
        }

        Err(err) => {
            error_response(request, err)
        }
    }
}

fn log_request(request: &tiny_http::Request) {
    let remote_addr = request
        .remote_addr()
        .map(|addr| addr.to_string())
        .unwrap_or_else(|| "unknown".to_string());

    log::info!("Handling {} request for {} from {}", request.method(), request.url(), remote_addr);
}

fn success_response(request: tiny_http::Request, data: &[u8]) {
    let response = tiny_http::Response::new(
        tiny_http::StatusCode(200),
        vec![json_content_type()],
        data,
        Some(data.len()),
        None,
    );

    if let Err(err) = request.respond(response) {
        log::error!("Failed to write response: {}", err);
    }
}

fn error_response(request: tiny_http::Request, error: api::ErrorResponse) {
    let data = error.body.as_slice();

    let response = tiny_http::Response::new(
        tiny_http::StatusCode(error.status_code),
        vec![json_content_type()],
        data,
        Some(data.len()),
        None,
    );

    if let Err(err) = request.respond(response) {
        log::error!("Failed to write response: {}", err);
    }
}

fn json_content_type() -> tiny_http::Header {
    tiny_http::Header::from_bytes(&b"Content-Type"[..], &b"application/json"[..]).unwrap()
}

fn prepare_config() -> config::Config {
    let env = environment::get_environment();

    match build_config(&env) {
        Ok(cfg) => {
            cfg
        }

        Err(err) => {
            log::error!("Failed to build config: {}", err);
            process::exit(1)
        }
    }
}

fn build_config(env: &environment::Environment) -> Result<config::Config, environment::Error> {
    let server = build_server_config(env)?;
    let check = build_check_config(env)?;

    Ok(config::Config {
        server,
        check,
    })
}

fn build_server_config(env: &environment::Environment) -> Result<config::ServerConfig, environment::Error> {
    let listen_addr = environment::lookup_optional(env, "SERVER_LISTEN_ADDR")?
        .unwrap_or_else(|| "0.0.0.0".to_string());
    let listen_port = environment::lookup_optional(env, "SERVER_LISTEN_PORT")?
        .unwrap_or(8080);
    let worker_threads = environment::lookup_optional(env, "SERVER_WORKER_THREADS")?
        .unwrap_or(10);

    Ok(config::ServerConfig {
        listen_addr,
        listen_port,
        worker_threads,
    })
}

fn build_check_config(env: &environment::Environment) -> Result<check::Config, environment::Error> {
    let binary = environment::lookup_optional(env, "ENGINE_BINARY")?
        .unwrap_or_else(|| "docker".to_string());
    let context_dir = environment::lookup_optional(env, "ENGINE_BUILD_CONTEXT")?
        .unwrap_or_else(|| PathBuf::from("./resources"));

    Ok(check::Config {
        engine: docker::Config { binary },
        context_dir,
    })
}
