mod mutation;
mod query;

pub use mutation::{DeleteOutcome, Mutation};
pub use query::Query;
