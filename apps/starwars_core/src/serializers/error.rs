use serde::Serialize;

/// Wire form of every error: `{"error": <kind>, "message": <string>}`.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: &'static str,
    pub message: String,
}
