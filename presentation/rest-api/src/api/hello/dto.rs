use poem_openapi::Object;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct HelloRequest {
    /// Text to echo back
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct HelloResponse {
    /// The request text with a server acknowledgement appended
    pub message: String,
}
