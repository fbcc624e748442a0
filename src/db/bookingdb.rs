use async_trait::async_trait;
use chrono::NaiveDate;
use uuid::Uuid;

use crate::{db::db::DBClient, models::bookingmodel::VisitBooking};

#[async_trait]
pub trait VisitExt {
    async fn create_visit(
        &self,
        user_id: Uuid,
        property_id: Uuid,
        visitor_name: String,
        visitor_phone: String,
        visit_date: NaiveDate,
        visit_time: String,
        message: Option<String>,
    ) -> Result<VisitBooking, sqlx::Error>;

    async fn get_visits_by_user(&self, user_id: Uuid)
        -> Result<Vec<VisitBooking>, sqlx::Error>;
}

#[async_trait]
impl VisitExt for DBClient {
    async fn create_visit(
        &self,
        user_id: Uuid,
        property_id: Uuid,
        visitor_name: String,
        visitor_phone: String,
        visit_date: NaiveDate,
        visit_time: String,
        message: Option<String>,
    ) -> Result<VisitBooking, sqlx::Error> {
        sqlx::query_as::<_, VisitBooking>(
            "INSERT INTO visits (
                user_id, property_id, visitor_name, visitor_phone,
                visit_date, visit_time, message, status
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, 'pending')
            RETURNING
                id, user_id, property_id, visitor_name, visitor_phone,
                visit_date, visit_time, message, status, created_at",
        )
        .bind(user_id)
        .bind(property_id)
        .bind(visitor_name)
        .bind(visitor_phone)
        .bind(visit_date)
        .bind(visit_time)
        .bind(message)
        .fetch_one(&self.pool)
        .await
    }

    async fn get_visits_by_user(
        &self,
        user_id: Uuid,
    ) -> Result<Vec<VisitBooking>, sqlx::Error> {
        sqlx::query_as::<_, VisitBooking>(
            "SELECT
                id, user_id, property_id, visitor_name, visitor_phone,
                visit_date, visit_time, message, status, created_at
             FROM visits
             WHERE user_id = $1
             ORDER BY visit_date DESC, created_at DESC",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
    }
}
