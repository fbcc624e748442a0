use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    db::db::DBClient,
    models::propertymodel::{Favorite, Property},
};

#[async_trait]
pub trait FavoriteExt {
    async fn get_favorite(
        &self,
        user_id: Uuid,
        property_id: Uuid,
    ) -> Result<Option<Favorite>, sqlx::Error>;

    /// Idempotent: saving an already-saved property changes nothing.
    async fn add_favorite(&self, user_id: Uuid, property_id: Uuid) -> Result<(), sqlx::Error>;

    async fn remove_favorite(&self, user_id: Uuid, property_id: Uuid)
        -> Result<bool, sqlx::Error>;

    /// The user's saved properties, most recently saved first.
    async fn get_favorite_properties(&self, user_id: Uuid)
        -> Result<Vec<Property>, sqlx::Error>;
}

#[async_trait]
impl FavoriteExt for DBClient {
    async fn get_favorite(
        &self,
        user_id: Uuid,
        property_id: Uuid,
    ) -> Result<Option<Favorite>, sqlx::Error> {
        sqlx::query_as::<_, Favorite>(
            "SELECT id, user_id, property_id, created_at
             FROM favorites
             WHERE user_id = $1 AND property_id = $2",
        )
        .bind(user_id)
        .bind(property_id)
        .fetch_optional(&self.pool)
        .await
    }

    async fn add_favorite(&self, user_id: Uuid, property_id: Uuid) -> Result<(), sqlx::Error> {
        sqlx::query(
            "INSERT INTO favorites (user_id, property_id)
             VALUES ($1, $2)
             ON CONFLICT (user_id, property_id) DO NOTHING",
        )
        .bind(user_id)
        .bind(property_id)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn remove_favorite(
        &self,
        user_id: Uuid,
        property_id: Uuid,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM favorites WHERE user_id = $1 AND property_id = $2")
            .bind(user_id)
            .bind(property_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn get_favorite_properties(
        &self,
        user_id: Uuid,
    ) -> Result<Vec<Property>, sqlx::Error> {
        sqlx::query_as::<_, Property>(
            "SELECT
                p.id, p.agent_id, p.title, p.description, p.price, p.property_type,
                p.bedrooms, p.bathrooms, p.square_feet, p.address, p.city, p.state, p.zip_code,
                p.latitude, p.longitude, p.images, p.status, p.is_featured,
                p.created_at, p.updated_at
             FROM favorites f
             JOIN properties p ON p.id = f.property_id
             WHERE f.user_id = $1
             ORDER BY f.created_at DESC",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
    }
}
