use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// The ten bookable slots offered for every visit day.
pub const TIME_SLOTS: [&str; 10] = [
    "09:00 AM", "10:00 AM", "11:00 AM", "12:00 PM", "01:00 PM", "02:00 PM", "03:00 PM", "04:00 PM",
    "05:00 PM", "06:00 PM",
];

/// A visit request persisted to the `visits` table.
///
/// Rows are written once with status "pending"; confirmation or cancellation
/// happens out of band (the agent phones the visitor) and is never mutated
/// through this service.
#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct VisitBooking {
    pub id: Uuid,
    pub user_id: Uuid,
    pub property_id: Uuid,
    pub visitor_name: String,
    pub visitor_phone: String,
    pub visit_date: NaiveDate,
    pub visit_time: String,
    pub message: Option<String>,
    pub status: String,
    pub created_at: DateTime<Utc>,
}
