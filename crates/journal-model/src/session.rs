use serde::{Deserialize, Serialize};

/// An authenticated identity. Only `user_id` is used to scope data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub user_id: String,
    pub email: String,
}
