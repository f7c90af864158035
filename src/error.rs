use std::io;

use http::status::StatusCode;
use serde::{Deserialize, Serialize};
use serde_json::Error as JsonError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
pub enum AdminError {
    #[error("Association unchanged: the update neither inserts nor deletes any row")]
    NoChange,
    #[error("Parent chain cycle through record(s) {0:?}")]
    Cycle(Vec<String>),
    #[error("Tree depth limit of {limit} exceeded at record {id}")]
    DepthExceeded { id: String, limit: usize },
    #[error("Invalid record: {0}")]
    InvalidRecord(String),
    #[error("Item Not Found: {0}")]
    NotFound(String),
    #[error("File System error: {0}")]
    Io(String),
    #[error("(De)Serialization error: {0}")]
    Serialization(String),
    #[error("Custom error: {0}")]
    Custom(String),
}

impl AdminError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AdminError::NoChange => StatusCode::BAD_REQUEST,
            AdminError::Cycle(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AdminError::DepthExceeded { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            AdminError::InvalidRecord(_) => StatusCode::BAD_REQUEST,
            AdminError::NotFound(_) => StatusCode::NOT_FOUND,
            AdminError::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AdminError::Serialization(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AdminError::Custom(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<toml::de::Error> for AdminError {
    fn from(src: toml::de::Error) -> AdminError {
        AdminError::Serialization(format!("Toml deserialization error: {src}"))
    }
}

impl From<toml::ser::Error> for AdminError {
    fn from(src: toml::ser::Error) -> AdminError {
        AdminError::Serialization(format!("Toml serialization error: {src}"))
    }
}

impl From<JsonError> for AdminError {
    fn from(src: JsonError) -> AdminError {
        AdminError::Serialization(format!("JSON (de)serialization error: {src}"))
    }
}

impl From<io::Error> for AdminError {
    fn from(x: io::Error) -> Self {
        match x.kind() {
            io::ErrorKind::NotFound => AdminError::NotFound(format!("{x}")),
            _ => AdminError::Io(format!("IOError: {}", x.kind())),
        }
    }
}
