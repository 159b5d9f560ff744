mod auth;
mod gateway;
mod sqlite;

pub use auth::StaticAuthenticator;
pub use gateway::{GatewayCall, MemoryGateway};
pub use sqlite::*;
