use std::error::Error;

use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::product::errors::ProductError;

use crate::api::error::{ErrorResponse, IntoErrorResponse, status_for};

impl IntoErrorResponse for ProductError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let code = self.code();

        if !self.is_business() {
            let cause = cause_chain(&self).join(": ");
            tracing::error!(code = %code, error = %self, cause = %cause, "unclassified failure");
        }

        (
            status_for(code),
            Json(ErrorResponse {
                name: code.as_str().to_string(),
                message: self.to_string(),
            }),
        )
    }
}

/// Messages of every error below `err` in its `source()` chain, outermost first.
fn cause_chain(err: &dyn Error) -> Vec<String> {
    let mut causes = Vec::new();
    let mut current = err.source();
    while let Some(source) = current {
        causes.push(source.to_string());
        current = source.source();
    }
    causes
}
