use journal_entity::account::{self, Entity as Account, Model as AccountModel};
use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter};
use std::error::Error;

pub struct Query;

impl Query {
    pub async fn find_by_email<C: ConnectionTrait>(conn: &C, email: &str) -> Result<Option<AccountModel>, DbErr> {
        Account::find()
            .filter(account::Column::Email.eq(email))
            .one(conn)
            .await
            .inspect_err(|error| tracing::error!(error = error as &dyn Error, "failed to load account"))
    }
}
