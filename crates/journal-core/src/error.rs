use sea_orm::DbErr;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GatewayError {
    #[error(transparent)]
    Backend(#[from] DbErr),

    #[error("Missing or insufficient permissions.")]
    PermissionDenied,

    #[error("{0}")]
    Unavailable(String),
}

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("The email or password is invalid.")]
    InvalidCredentials,

    #[error("The email address is already in use by another account.")]
    EmailTaken,

    #[error(transparent)]
    Backend(#[from] DbErr),

    #[error("Password hashing failed: {0}")]
    Hashing(#[from] argon2::password_hash::Error),
}
