use chrono::Utc;
use journal_entity::account::{ActiveModel, Model};
use sea_orm::{ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr};
use uuid::Uuid;

pub struct Mutation;

impl Mutation {
    pub async fn create_account<C: ConnectionTrait>(
        conn: &C,
        email: String,
        password_hash: String,
    ) -> Result<Model, DbErr> {
        let account = ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            email: ActiveValue::Set(email),
            password_hash: ActiveValue::Set(password_hash),
            created_at: ActiveValue::Set(Utc::now().fixed_offset()),
        };

        account.insert(conn).await
    }
}
