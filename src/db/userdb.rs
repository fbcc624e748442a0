use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    db::db::DBClient,
    models::usermodel::{UserRole, UserRoleRecord},
};

#[async_trait]
pub trait UserExt {
    /// The stored role for a user. Read-only: callers treat None as the
    /// buyer_seller default.
    async fn get_user_role(&self, user_id: Uuid) -> Result<Option<UserRole>, sqlx::Error>;

    /// The stored role, inserting the buyer_seller default row on first
    /// access.
    async fn ensure_user_role(&self, user_id: Uuid) -> Result<UserRoleRecord, sqlx::Error>;

    async fn set_user_role(
        &self,
        user_id: Uuid,
        role: UserRole,
    ) -> Result<UserRoleRecord, sqlx::Error>;
}

#[async_trait]
impl UserExt for DBClient {
    async fn get_user_role(&self, user_id: Uuid) -> Result<Option<UserRole>, sqlx::Error> {
        let record = sqlx::query_as::<_, UserRoleRecord>(
            "SELECT id, user_id, role, created_at, updated_at
             FROM user_roles
             WHERE user_id = $1",
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(record.map(|r| r.role))
    }

    async fn ensure_user_role(&self, user_id: Uuid) -> Result<UserRoleRecord, sqlx::Error> {
        // The no-op DO UPDATE makes RETURNING yield the existing row
        // instead of nothing on conflict.
        sqlx::query_as::<_, UserRoleRecord>(
            "INSERT INTO user_roles (user_id)
             VALUES ($1)
             ON CONFLICT (user_id) DO UPDATE SET user_id = EXCLUDED.user_id
             RETURNING id, user_id, role, created_at, updated_at",
        )
        .bind(user_id)
        .fetch_one(&self.pool)
        .await
    }

    async fn set_user_role(
        &self,
        user_id: Uuid,
        role: UserRole,
    ) -> Result<UserRoleRecord, sqlx::Error> {
        sqlx::query_as::<_, UserRoleRecord>(
            "INSERT INTO user_roles (user_id, role)
             VALUES ($1, $2)
             ON CONFLICT (user_id) DO UPDATE SET role = EXCLUDED.role, updated_at = NOW()
             RETURNING id, user_id, role, created_at, updated_at",
        )
        .bind(user_id)
        .bind(role)
        .fetch_one(&self.pool)
        .await
    }
}
