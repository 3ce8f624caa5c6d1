use std::path::PathBuf;

use axum::extract::rejection::PathRejection;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use serde_json::json;
use serde_json::Value;

/// Fatal problems while reading the dataset. The server never starts with a
/// partially loaded dataset.
#[derive(Debug, thiserror::Error)]
pub enum DataLoadError {
    #[error("data directory {0} does not exist")]
    MissingDirectory(PathBuf),

    #[error("required table `{table}` not found at {path}")]
    MissingTable { table: &'static str, path: PathBuf },

    #[error("failed to read table `{table}`: {source}")]
    Io {
        table: &'static str,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed row in table `{table}`: {source}")]
    Csv {
        table: &'static str,
        #[source]
        source: csv::Error,
    },
}

#[derive(Debug)]
pub struct Error {
    pub code: StatusCode,
    pub body: Json<Value>,
}

impl Error {
    pub fn new(code: StatusCode, message: &str) -> Self {
        Self {
            code,
            body: Json(json!({"message": message})),
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        (self.code, self.body).into_response()
    }
}

impl From<(StatusCode, &str)> for Error {
    fn from((code, msg): (StatusCode, &str)) -> Self {
        Self::new(code, msg)
    }
}

impl From<PathRejection> for Error {
    fn from(rejection: PathRejection) -> Self {
        Self::new(StatusCode::BAD_REQUEST, &rejection.body_text())
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, &error.to_string())
    }
}
