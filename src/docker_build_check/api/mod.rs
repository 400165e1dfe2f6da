pub mod not_found;
pub mod root;

#[derive(Debug)]
pub struct ErrorResponse {
    pub status_code: u16,
    pub body: Vec<u8>,
}

#[derive(Debug, serde::Serialize)]
pub struct ErrorBody {
    pub error: String,
    pub message: String,
}
