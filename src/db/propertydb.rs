use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    db::db::DBClient,
    dtos::propertydtos::{CreateListingDto, UpdateListingDto},
    models::propertymodel::Property,
};

#[async_trait]
pub trait PropertyExt {
    /// Every active listing, newest first. Filtering and ordering beyond
    /// that happen in the search engine, not in SQL.
    async fn get_active_properties(&self) -> Result<Vec<Property>, sqlx::Error>;

    async fn get_featured_properties(&self, limit: i64) -> Result<Vec<Property>, sqlx::Error>;

    async fn get_property(&self, property_id: Uuid) -> Result<Option<Property>, sqlx::Error>;

    async fn get_properties_by_agent(&self, agent_id: Uuid)
        -> Result<Vec<Property>, sqlx::Error>;

    async fn create_property(
        &self,
        agent_id: Uuid,
        listing: CreateListingDto,
    ) -> Result<Property, sqlx::Error>;

    /// Update a listing owned by `agent_id`. Absent fields keep their
    /// current value; returns None when the row does not exist or belongs
    /// to someone else.
    async fn update_property(
        &self,
        property_id: Uuid,
        agent_id: Uuid,
        listing: UpdateListingDto,
    ) -> Result<Option<Property>, sqlx::Error>;

    async fn delete_property(&self, property_id: Uuid, agent_id: Uuid)
        -> Result<bool, sqlx::Error>;
}

const PROPERTY_COLUMNS: &str = r#"
    id, agent_id, title, description, price, property_type,
    bedrooms, bathrooms, square_feet, address, city, state, zip_code,
    latitude, longitude, images, status, is_featured, created_at, updated_at
"#;

#[async_trait]
impl PropertyExt for DBClient {
    async fn get_active_properties(&self) -> Result<Vec<Property>, sqlx::Error> {
        let query = format!(
            "SELECT {PROPERTY_COLUMNS} FROM properties WHERE status = 'active' ORDER BY created_at DESC"
        );

        sqlx::query_as::<_, Property>(&query)
            .fetch_all(&self.pool)
            .await
    }

    async fn get_featured_properties(&self, limit: i64) -> Result<Vec<Property>, sqlx::Error> {
        let query = format!(
            "SELECT {PROPERTY_COLUMNS} FROM properties
             WHERE status = 'active' AND is_featured = TRUE
             ORDER BY created_at DESC
             LIMIT $1"
        );

        sqlx::query_as::<_, Property>(&query)
            .bind(limit)
            .fetch_all(&self.pool)
            .await
    }

    async fn get_property(&self, property_id: Uuid) -> Result<Option<Property>, sqlx::Error> {
        let query = format!("SELECT {PROPERTY_COLUMNS} FROM properties WHERE id = $1");

        sqlx::query_as::<_, Property>(&query)
            .bind(property_id)
            .fetch_optional(&self.pool)
            .await
    }

    async fn get_properties_by_agent(
        &self,
        agent_id: Uuid,
    ) -> Result<Vec<Property>, sqlx::Error> {
        let query = format!(
            "SELECT {PROPERTY_COLUMNS} FROM properties WHERE agent_id = $1 ORDER BY created_at DESC"
        );

        sqlx::query_as::<_, Property>(&query)
            .bind(agent_id)
            .fetch_all(&self.pool)
            .await
    }

    async fn create_property(
        &self,
        agent_id: Uuid,
        listing: CreateListingDto,
    ) -> Result<Property, sqlx::Error> {
        let query = format!(
            "INSERT INTO properties (
                agent_id, title, description, price, property_type,
                bedrooms, bathrooms, square_feet, address, city, state, zip_code,
                latitude, longitude, images, status, is_featured
            ) VALUES (
                $1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15,
                'active', COALESCE($16, FALSE)
            )
            RETURNING {PROPERTY_COLUMNS}"
        );

        sqlx::query_as::<_, Property>(&query)
            .bind(agent_id)
            .bind(listing.title)
            .bind(listing.description)
            .bind(listing.price)
            .bind(listing.property_type)
            .bind(listing.bedrooms)
            .bind(listing.bathrooms)
            .bind(listing.square_feet)
            .bind(listing.address)
            .bind(listing.city)
            .bind(listing.state)
            .bind(listing.zip_code)
            .bind(listing.latitude)
            .bind(listing.longitude)
            .bind(listing.images.unwrap_or_default())
            .bind(listing.is_featured)
            .fetch_one(&self.pool)
            .await
    }

    async fn update_property(
        &self,
        property_id: Uuid,
        agent_id: Uuid,
        listing: UpdateListingDto,
    ) -> Result<Option<Property>, sqlx::Error> {
        let query = format!(
            "UPDATE properties SET
                title = COALESCE($3, title),
                description = COALESCE($4, description),
                price = COALESCE($5, price),
                property_type = COALESCE($6, property_type),
                bedrooms = COALESCE($7, bedrooms),
                bathrooms = COALESCE($8, bathrooms),
                square_feet = COALESCE($9, square_feet),
                address = COALESCE($10, address),
                city = COALESCE($11, city),
                state = COALESCE($12, state),
                zip_code = COALESCE($13, zip_code),
                latitude = COALESCE($14, latitude),
                longitude = COALESCE($15, longitude),
                images = COALESCE($16, images),
                status = COALESCE($17, status),
                is_featured = COALESCE($18, is_featured),
                updated_at = NOW()
            WHERE id = $1 AND agent_id = $2
            RETURNING {PROPERTY_COLUMNS}"
        );

        sqlx::query_as::<_, Property>(&query)
            .bind(property_id)
            .bind(agent_id)
            .bind(listing.title)
            .bind(listing.description)
            .bind(listing.price)
            .bind(listing.property_type)
            .bind(listing.bedrooms)
            .bind(listing.bathrooms)
            .bind(listing.square_feet)
            .bind(listing.address)
            .bind(listing.city)
            .bind(listing.state)
            .bind(listing.zip_code)
            .bind(listing.latitude)
            .bind(listing.longitude)
            .bind(listing.images)
            .bind(listing.status)
            .bind(listing.is_featured)
            .fetch_optional(&self.pool)
            .await
    }

    async fn delete_property(
        &self,
        property_id: Uuid,
        agent_id: Uuid,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM properties WHERE id = $1 AND agent_id = $2")
            .bind(property_id)
            .bind(agent_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
