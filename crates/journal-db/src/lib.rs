pub mod account;
pub mod convert;
pub mod journal;
pub mod schema;
pub mod util;

pub use sea_orm;
