use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A property listing as stored in the `properties` table.
///
/// `property_type` and `status` are open strings rather than database enums:
/// listings arrive from several upstream sources and new categories appear
/// without schema changes. `images` keeps display order; the first entry is
/// the primary thumbnail.
#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct Property {
    pub id: Uuid,
    pub agent_id: Option<Uuid>,

    pub title: String,
    pub description: Option<String>,
    pub price: i64,
    pub property_type: String,

    pub bedrooms: Option<i32>,
    pub bathrooms: Option<i32>,
    pub square_feet: Option<i32>,

    pub address: String,
    pub city: String,
    pub state: String,
    pub zip_code: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,

    pub images: Vec<String>,
    pub status: String,
    pub is_featured: bool,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct Favorite {
    pub id: Uuid,
    pub user_id: Uuid,
    pub property_id: Uuid,
    pub created_at: DateTime<Utc>,
}
