use crate::docker_build_check::api;
use crate::docker_build_check::check;
use crate::docker_build_check::config;

#[derive(Debug, serde::Serialize)]
struct Response {
    #[serde(rename = "dockerVersion", skip_serializing_if = "Option::is_none")]
    docker_version: Option<String>,
    success: String,
    output: String,
}

pub fn handle(config: &config::Config, _: &mut tiny_http::Request) -> Result<Vec<u8>, api::ErrorResponse> {
    match check::run(&config.check) {
        Ok(check::Outcome::Built { version, output }) => {
            to_json(Response {
                docker_version: Some(version),
                success: "true".to_string(),
                output,
            })
        }

        Ok(check::Outcome::VersionCheckFailed { output }) => {
            Err(failure_response(output)?)
        }

        Ok(check::Outcome::BuildFailed { output }) => {
            Err(failure_response(output)?)
        }

        Err(err) => {
            log::error!("Build check failed: {}", err);
            Err(api::ErrorResponse {
                status_code: 500,
                body: serde_json::to_vec(&api::ErrorBody {
                    error: "check.internal".to_string(),
                    message: err.to_string(),
                }).unwrap_or_else(|_| err.to_string().as_bytes().to_vec()),
            })
        }
    }
}

fn failure_response(output: String) -> Result<api::ErrorResponse, api::ErrorResponse> {
    let body = to_json(Response {
        docker_version: None,
        success: "false".to_string(),
        output,
    })?;

    Ok(api::ErrorResponse {
        status_code: 404,
        body,
    })
}

fn to_json(response: Response) -> Result<Vec<u8>, api::ErrorResponse> {
    serde_json::to_vec(&response).map_err(|err| {
        api::ErrorResponse {
            status_code: 500,
            body: serde_json::to_vec(&api::ErrorBody {
                error: "response.serialize".to_string(),
                message: format!("Failed to serialize response: {}", err),
            }).unwrap_or_else(|_| err.to_string().as_bytes().to_vec()),
        }
    })
}
