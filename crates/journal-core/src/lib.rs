pub mod auth;
pub mod error;
pub mod gateway;
pub mod session;
pub mod subscription;

pub use auth::{Authenticator, DbAuthenticator};
pub use error::{AuthError, GatewayError};
pub use gateway::{DbGateway, Gateway};
pub use session::SessionState;
pub use subscription::{ChangeFeed, Subscription};
