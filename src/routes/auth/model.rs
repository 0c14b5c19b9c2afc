use serde::{Deserialize, Serialize};

/// Missing and wrong passwords are handled identically, so the field is
/// optional at the wire level rather than a deserialization failure.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub password: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub success: bool,
}
