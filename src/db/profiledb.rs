use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    db::db::DBClient, dtos::userdtos::UpdateProfileDto, models::usermodel::AgentProfile,
};

const PROFILE_COLUMNS: &str = r#"
    id, user_id, full_name, phone, avatar_url, business_name, license_number,
    years_experience, service_areas, specializations, created_at, updated_at
"#;

#[async_trait]
pub trait ProfileExt {
    async fn get_profile_by_user(
        &self,
        user_id: Uuid,
    ) -> Result<Option<AgentProfile>, sqlx::Error>;

    async fn upsert_profile(
        &self,
        user_id: Uuid,
        profile: UpdateProfileDto,
    ) -> Result<AgentProfile, sqlx::Error>;

    /// Profiles of every user holding the agent role, newest first.
    async fn get_agent_profiles(&self) -> Result<Vec<AgentProfile>, sqlx::Error>;
}

#[async_trait]
impl ProfileExt for DBClient {
    async fn get_profile_by_user(
        &self,
        user_id: Uuid,
    ) -> Result<Option<AgentProfile>, sqlx::Error> {
        let query = format!("SELECT {PROFILE_COLUMNS} FROM profiles WHERE user_id = $1");

        sqlx::query_as::<_, AgentProfile>(&query)
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await
    }

    async fn upsert_profile(
        &self,
        user_id: Uuid,
        profile: UpdateProfileDto,
    ) -> Result<AgentProfile, sqlx::Error> {
        let query = format!(
            "INSERT INTO profiles (
                user_id, full_name, phone, avatar_url, business_name, license_number,
                years_experience, service_areas, specializations
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            ON CONFLICT (user_id) DO UPDATE SET
                full_name = COALESCE(EXCLUDED.full_name, profiles.full_name),
                phone = COALESCE(EXCLUDED.phone, profiles.phone),
                avatar_url = COALESCE(EXCLUDED.avatar_url, profiles.avatar_url),
                business_name = COALESCE(EXCLUDED.business_name, profiles.business_name),
                license_number = COALESCE(EXCLUDED.license_number, profiles.license_number),
                years_experience = COALESCE(EXCLUDED.years_experience, profiles.years_experience),
                service_areas = COALESCE(EXCLUDED.service_areas, profiles.service_areas),
                specializations = COALESCE(EXCLUDED.specializations, profiles.specializations),
                updated_at = NOW()
            RETURNING {PROFILE_COLUMNS}"
        );

        sqlx::query_as::<_, AgentProfile>(&query)
            .bind(user_id)
            .bind(profile.full_name)
            .bind(profile.phone)
            .bind(profile.avatar_url)
            .bind(profile.business_name)
            .bind(profile.license_number)
            .bind(profile.years_experience)
            .bind(profile.service_areas)
            .bind(profile.specializations)
            .fetch_one(&self.pool)
            .await
    }

    async fn get_agent_profiles(&self) -> Result<Vec<AgentProfile>, sqlx::Error> {
        sqlx::query_as::<_, AgentProfile>(
            "SELECT
                p.id, p.user_id, p.full_name, p.phone, p.avatar_url, p.business_name,
                p.license_number, p.years_experience, p.service_areas, p.specializations,
                p.created_at, p.updated_at
             FROM profiles p
             JOIN user_roles r ON r.user_id = p.user_id
             WHERE r.role = 'agent'
             ORDER BY p.created_at DESC",
        )
        .fetch_all(&self.pool)
        .await
    }
}
