use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::propertymodel::Property;
use crate::models::usermodel::AgentProfile;
use crate::service::geocoding::Coordinates;
use crate::service::search::{SearchFilters, SortOrder};

#[derive(Debug, Default, Deserialize, Validate)]
pub struct SearchQueryDto {
    pub location: Option<String>,

    #[validate(range(min = 0, message = "Minimum price cannot be negative"))]
    pub min_price: Option<i64>,

    #[validate(range(min = 0, message = "Maximum price cannot be negative"))]
    pub max_price: Option<i64>,

    pub property_type: Option<String>,
    pub min_bedrooms: Option<i32>,
    pub min_bathrooms: Option<i32>,
    pub sort: Option<SortOrder>,

    #[validate(range(min = 1, max = 100, message = "Limit must be between 1 and 100"))]
    pub limit: Option<usize>,
}

impl SearchQueryDto {
    pub fn filters(&self) -> SearchFilters {
        SearchFilters {
            location: self.location.clone(),
            min_price: self.min_price,
            max_price: self.max_price,
            property_type: self.property_type.clone(),
            min_bedrooms: self.min_bedrooms,
            min_bathrooms: self.min_bathrooms,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct CreateListingDto {
    #[validate(length(min = 3, max = 200, message = "Title must be between 3 and 200 characters"))]
    pub title: String,

    #[validate(length(max = 5000, message = "Description is too long"))]
    pub description: Option<String>,

    #[validate(range(min = 1, message = "Price must be positive"))]
    pub price: i64,

    #[validate(length(min = 1, message = "Property type is required"))]
    pub property_type: String,

    pub bedrooms: Option<i32>,
    pub bathrooms: Option<i32>,
    pub square_feet: Option<i32>,

    #[validate(length(min = 1, max = 500, message = "Address is required"))]
    pub address: String,

    #[validate(length(min = 1, max = 100, message = "City is required"))]
    pub city: String,

    #[validate(length(min = 1, max = 100, message = "State is required"))]
    pub state: String,

    pub zip_code: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub images: Option<Vec<String>>,
    pub is_featured: Option<bool>,
}

#[derive(Debug, Default, Serialize, Deserialize, Validate)]
pub struct UpdateListingDto {
    #[validate(length(min = 3, max = 200, message = "Title must be between 3 and 200 characters"))]
    pub title: Option<String>,

    #[validate(length(max = 5000, message = "Description is too long"))]
    pub description: Option<String>,

    #[validate(range(min = 1, message = "Price must be positive"))]
    pub price: Option<i64>,

    pub property_type: Option<String>,
    pub bedrooms: Option<i32>,
    pub bathrooms: Option<i32>,
    pub square_feet: Option<i32>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip_code: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub images: Option<Vec<String>>,
    pub status: Option<String>,
    pub is_featured: Option<bool>,
}

/// Detail view: the listing plus everything the map and contact card need.
#[derive(Debug, Serialize)]
pub struct PropertyDetailDto {
    #[serde(flatten)]
    pub property: Property,
    pub full_address: String,
    pub coordinates: Option<Coordinates>,
    pub agent: Option<AgentProfile>,
}

#[derive(Debug, Deserialize)]
pub struct ToggleFavoriteDto {
    pub property_id: uuid::Uuid,
}

#[derive(Debug, Serialize)]
pub struct ToggleFavoriteResponseDto {
    pub property_id: uuid::Uuid,
    pub favorited: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_query_maps_onto_filters() {
        let query = SearchQueryDto {
            location: Some("Mumbai".to_string()),
            min_price: Some(100),
            sort: Some(SortOrder::PriceAsc),
            ..Default::default()
        };
        let filters = query.filters();
        assert_eq!(filters.location.as_deref(), Some("Mumbai"));
        assert_eq!(filters.min_price, Some(100));
        assert!(filters.max_price.is_none());
    }

    #[test]
    fn limit_outside_range_fails_validation() {
        let query = SearchQueryDto {
            limit: Some(0),
            ..Default::default()
        };
        assert!(query.validate().is_err());

        let query = SearchQueryDto {
            limit: Some(100),
            ..Default::default()
        };
        assert!(query.validate().is_ok());
    }

    #[test]
    fn create_listing_requires_title_and_positive_price() {
        let listing = CreateListingDto {
            title: "ab".to_string(),
            description: None,
            price: 0,
            property_type: "apartment".to_string(),
            bedrooms: None,
            bathrooms: None,
            square_feet: None,
            address: "12 MG Road".to_string(),
            city: "Mumbai".to_string(),
            state: "Maharashtra".to_string(),
            zip_code: None,
            latitude: None,
            longitude: None,
            images: None,
            is_featured: None,
        };
        let errors = listing.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("title"));
        assert!(errors.field_errors().contains_key("price"));
    }
}
