use serde::{Deserialize, Serialize};

/// `CreateNewsResponse` used on news create handler
#[derive(Serialize, Deserialize, Debug, PartialEq, Eq)]
pub struct CreateNewsResponse {
    pub message: String,
    pub id: i64,
}

/// `DeleteNewsResponse` used on news delete handler
#[derive(Serialize, Deserialize, Debug, PartialEq, Eq)]
pub struct DeleteNewsResponse {
    pub message: String,
}
