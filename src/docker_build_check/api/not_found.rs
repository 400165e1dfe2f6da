use crate::docker_build_check::api;
use crate::docker_build_check::config;

pub fn handle(_: &config::Config, _: &mut tiny_http::Request) -> Result<Vec<u8>, api::ErrorResponse> {
    let body = api::ErrorBody {
        error: "route.not_found".to_string(),
        message: "Route not found".to_string(),
    };

    Err(api::ErrorResponse {
        status_code: 404,
        body: serde_json::to_vec(&body)
            .unwrap_or_else(|_| b"Route not found".to_vec()),
    })
}
