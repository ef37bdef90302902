use poem_openapi::{OpenApi, payload::Json};

use crate::api::hello::dto::{HelloRequest, HelloResponse};
use crate::api::tags::ApiTags;

const ACKNOWLEDGEMENT: &str = " - reached the server";

/// Connectivity probe that echoes the caller's message.
pub struct HelloApi;

impl HelloApi {
    pub fn new() -> Self {
        Self
    }
}

#[OpenApi]
impl HelloApi {
    /// Echo a message
    ///
    /// Returns the received message followed by " - reached the server".
    #[oai(path = "/hello", method = "post", tag = "ApiTags::Hello")]
    async fn hello(&self, body: Json<HelloRequest>) -> Json<HelloResponse> {
        Json(HelloResponse {
            message: format!("{}{}", body.0.message, ACKNOWLEDGEMENT),
        })
    }
}
