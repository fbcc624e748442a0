use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Deserialize, Serialize, Clone, Copy, sqlx::Type, PartialEq)]
#[sqlx(type_name = "user_role", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    Agent,
    BuyerSeller,
}

#[derive(Debug, Deserialize, Serialize, FromRow, Clone)]
pub struct UserRoleRecord {
    pub id: Uuid,
    pub user_id: Uuid,
    pub role: UserRole,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Public-facing profile for a user, read-mostly and edited only by its
/// owner. The business fields (license, experience, areas, specializations)
/// are only meaningful for agents but live on the same row.
#[derive(Debug, Deserialize, Serialize, FromRow, Clone)]
pub struct AgentProfile {
    pub id: Uuid,
    pub user_id: Uuid,
    pub full_name: Option<String>,
    pub phone: Option<String>,
    pub avatar_url: Option<String>,
    pub business_name: Option<String>,
    pub license_number: Option<String>,
    pub years_experience: Option<i32>,
    pub service_areas: Option<Vec<String>>,
    pub specializations: Option<Vec<String>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
