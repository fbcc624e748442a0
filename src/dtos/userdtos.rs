use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::usermodel::UserRole;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RoleUpdateDto {
    pub role: UserRole,
}

#[derive(Debug, Default, Serialize, Deserialize, Validate)]
pub struct UpdateProfileDto {
    #[validate(length(min = 1, max = 100, message = "Full name must be between 1 and 100 characters"))]
    pub full_name: Option<String>,

    #[validate(length(max = 20, message = "Phone number is too long"))]
    pub phone: Option<String>,

    #[validate(url(message = "Avatar must be a valid URL"))]
    pub avatar_url: Option<String>,

    #[validate(length(max = 200, message = "Business name is too long"))]
    pub business_name: Option<String>,

    #[validate(length(max = 100, message = "License number is too long"))]
    pub license_number: Option<String>,

    #[validate(range(min = 0, max = 80, message = "Years of experience is out of range"))]
    pub years_experience: Option<i32>,

    pub service_areas: Option<Vec<String>>,
    pub specializations: Option<Vec<String>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_update_is_valid() {
        assert!(UpdateProfileDto::default().validate().is_ok());
    }

    #[test]
    fn avatar_must_be_a_url() {
        let dto = UpdateProfileDto {
            avatar_url: Some("not a url".to_string()),
            ..Default::default()
        };
        assert!(dto.validate().is_err());
    }
}
