use chrono::NaiveDate;
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::{Validate, ValidationError};

use crate::models::bookingmodel::TIME_SLOTS;

lazy_static! {
    static ref INDIAN_MOBILE: Regex = Regex::new(r"^[6-9]\d{9}$").unwrap();
}

#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct BookVisitDto {
    pub property_id: Uuid,

    #[validate(length(min = 2, message = "Name must be at least 2 characters"))]
    #[validate(length(max = 100, message = "Name must be at most 100 characters"))]
    pub visitor_name: String,

    #[validate(custom = "validate_indian_mobile")]
    pub visitor_phone: String,

    // Required, but checked in the handler so a missing field gets the
    // combined "Please select date and time" message.
    pub visit_date: Option<NaiveDate>,

    #[validate(custom = "validate_time_slot")]
    pub visit_time: Option<String>,

    #[validate(length(max = 500, message = "Message must be at most 500 characters"))]
    pub message: Option<String>,
}

fn validate_indian_mobile(phone: &str) -> Result<(), ValidationError> {
    if INDIAN_MOBILE.is_match(phone) {
        Ok(())
    } else {
        let mut error = ValidationError::new("invalid_phone");
        error.message = Some("Enter valid 10-digit Indian mobile number".into());
        Err(error)
    }
}

fn validate_time_slot(visit_time: &str) -> Result<(), ValidationError> {
    if TIME_SLOTS.contains(&visit_time) {
        Ok(())
    } else {
        let mut error = ValidationError::new("invalid_time_slot");
        error.message = Some("Selected time is not an available slot".into());
        Err(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn booking() -> BookVisitDto {
        BookVisitDto {
            property_id: Uuid::new_v4(),
            visitor_name: "Asha Rao".to_string(),
            visitor_phone: "9876543210".to_string(),
            visit_date: Some(NaiveDate::from_ymd_opt(2026, 9, 4).unwrap()),
            visit_time: Some("10:00 AM".to_string()),
            message: None,
        }
    }

    #[test]
    fn valid_booking_passes() {
        assert!(booking().validate().is_ok());
    }

    #[test]
    fn name_shorter_than_two_characters_is_rejected() {
        let mut dto = booking();
        dto.visitor_name = "A".to_string();
        let errors = dto.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("visitor_name"));
    }

    #[test]
    fn phone_must_be_ten_digits_starting_six_to_nine() {
        for phone in ["12345", "5876543210", "98765432100", "98765abcde", ""] {
            let mut dto = booking();
            dto.visitor_phone = phone.to_string();
            assert!(dto.validate().is_err(), "accepted {:?}", phone);
        }

        for phone in ["6000000000", "7123456789", "8999999999", "9876543210"] {
            let mut dto = booking();
            dto.visitor_phone = phone.to_string();
            assert!(dto.validate().is_ok(), "rejected {:?}", phone);
        }
    }

    #[test]
    fn time_outside_published_slots_is_rejected() {
        let mut dto = booking();
        dto.visit_time = Some("07:30 AM".to_string());
        let errors = dto.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("visit_time"));
    }

    #[test]
    fn two_violations_surface_a_single_message() {
        let mut dto = booking();
        dto.visitor_name = "A".to_string();
        dto.visitor_phone = "1234567890".to_string();

        let err = crate::error::HttpError::validation(dto.validate().unwrap_err());
        let single_rule_messages = [
            "Name must be at least 2 characters",
            "Enter valid 10-digit Indian mobile number",
        ];
        assert!(
            single_rule_messages.contains(&err.message.as_str()),
            "expected one rule's message, got {:?}",
            err.message
        );
        assert_eq!(err.status, axum::http::StatusCode::BAD_REQUEST);
    }

    #[test]
    fn message_over_500_characters_is_rejected() {
        let mut dto = booking();
        dto.message = Some("x".repeat(501));
        assert!(dto.validate().is_err());

        dto.message = Some("x".repeat(500));
        assert!(dto.validate().is_ok());
    }
}
