use serde::{Deserialize, Serialize};

pub mod auth;
pub mod clients;
pub mod sales;
pub mod stats;

/// Body returned by endpoints that create a row.
#[derive(Debug, Deserialize, Serialize)]
pub struct Created {
    pub id: i64,
}

/// Body returned by endpoints that only acknowledge.
#[derive(Debug, Deserialize, Serialize)]
pub struct Acknowledgement {
    pub message: String,
}

impl Acknowledgement {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
