use serde::{Deserialize, Serialize};

use crate::models::propertymodel::Property;

/// Conjunction of optional predicates applied to a property list. An absent
/// field never rejects anything.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct SearchFilters {
    pub location: Option<String>,
    pub min_price: Option<i64>,
    pub max_price: Option<i64>,
    pub property_type: Option<String>,
    pub min_bedrooms: Option<i32>,
    pub min_bathrooms: Option<i32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum SortOrder {
    PriceAsc,
    PriceDesc,
    #[default]
    Newest,
    Oldest,
}

/// True when `property` satisfies every supplied predicate.
///
/// Location matching is a case-insensitive substring test against city,
/// state and address; any one match suffices. Price bounds are inclusive.
/// A listing with no bedroom (or bathroom) count fails a min-bedrooms
/// (min-bathrooms) filter rather than passing vacuously.
pub fn matches(property: &Property, filters: &SearchFilters) -> bool {
    if let Some(location) = &filters.location {
        let needle = location.to_lowercase();
        let matches_location = property.city.to_lowercase().contains(&needle)
            || property.state.to_lowercase().contains(&needle)
            || property.address.to_lowercase().contains(&needle);
        if !matches_location {
            return false;
        }
    }

    if let Some(min_price) = filters.min_price {
        if property.price < min_price {
            return false;
        }
    }
    if let Some(max_price) = filters.max_price {
        if property.price > max_price {
            return false;
        }
    }

    if let Some(property_type) = &filters.property_type {
        if &property.property_type != property_type {
            return false;
        }
    }

    if let Some(min_bedrooms) = filters.min_bedrooms {
        match property.bedrooms {
            Some(bedrooms) if bedrooms >= min_bedrooms => {}
            _ => return false,
        }
    }
    if let Some(min_bathrooms) = filters.min_bathrooms {
        match property.bathrooms {
            Some(bathrooms) if bathrooms >= min_bathrooms => {}
            _ => return false,
        }
    }

    true
}

/// Filter then order a property list. Pure: same input, same output.
/// Sorting is stable, so ties keep their input order.
pub fn filter_and_sort(
    properties: Vec<Property>,
    filters: &SearchFilters,
    sort: SortOrder,
) -> Vec<Property> {
    let mut result: Vec<Property> = properties
        .into_iter()
        .filter(|p| matches(p, filters))
        .collect();

    match sort {
        SortOrder::PriceAsc => result.sort_by(|a, b| a.price.cmp(&b.price)),
        SortOrder::PriceDesc => result.sort_by(|a, b| b.price.cmp(&a.price)),
        SortOrder::Newest => result.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
        SortOrder::Oldest => result.sort_by(|a, b| a.created_at.cmp(&b.created_at)),
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use uuid::Uuid;

    fn property(price: i64, created: i64) -> Property {
        Property {
            id: Uuid::new_v4(),
            agent_id: None,
            title: format!("Listing at {}", price),
            description: None,
            price,
            property_type: "apartment".to_string(),
            bedrooms: Some(2),
            bathrooms: Some(2),
            square_feet: Some(900),
            address: "12 MG Road".to_string(),
            city: "Mumbai".to_string(),
            state: "Maharashtra".to_string(),
            zip_code: Some("400001".to_string()),
            latitude: None,
            longitude: None,
            images: vec![],
            status: "active".to_string(),
            is_featured: false,
            created_at: Utc.timestamp_opt(created, 0).unwrap(),
            updated_at: Utc.timestamp_opt(created, 0).unwrap(),
        }
    }

    #[test]
    fn empty_filter_keeps_everything() {
        let input = vec![property(100, 1), property(50, 2)];
        let out = filter_and_sort(input.clone(), &SearchFilters::default(), SortOrder::Oldest);
        assert_eq!(out.len(), input.len());
    }

    #[test]
    fn result_is_subset_satisfying_all_predicates() {
        let mut input = vec![];
        for (i, price) in [30, 80, 120, 500, 90].iter().enumerate() {
            let mut p = property(*price, i as i64);
            if i % 2 == 0 {
                p.property_type = "house".to_string();
            }
            input.push(p);
        }
        let filters = SearchFilters {
            min_price: Some(50),
            max_price: Some(200),
            property_type: Some("apartment".to_string()),
            ..Default::default()
        };
        let out = filter_and_sort(input.clone(), &filters, SortOrder::Newest);
        assert!(out.len() < input.len());
        for p in &out {
            assert!(matches(p, &filters));
            assert!(input.iter().any(|i| i.id == p.id));
        }
    }

    #[test]
    fn location_matches_city_state_or_address_case_insensitively() {
        let mut by_state = property(100, 1);
        by_state.city = "Thane".to_string();
        by_state.state = "Mumbai Metropolitan Region".to_string();
        by_state.address = "7 Ghodbunder Road".to_string();
        let mut by_address = property(100, 2);
        by_address.city = "Pune".to_string();
        by_address.state = "MH".to_string();
        by_address.address = "4 Mumbai Highway".to_string();
        let mut no_match = property(100, 3);
        no_match.city = "Delhi".to_string();
        no_match.state = "Delhi".to_string();
        no_match.address = "1 Ring Road".to_string();

        let filters = SearchFilters {
            location: Some("mumBAI".to_string()),
            ..Default::default()
        };
        assert!(matches(&property(100, 0), &filters)); // city
        assert!(matches(&by_state, &filters)); // state
        assert!(matches(&by_address, &filters)); // address
        assert!(!matches(&no_match, &filters));
    }

    #[test]
    fn price_bounds_are_inclusive() {
        let filters = SearchFilters {
            min_price: Some(100),
            max_price: Some(200),
            ..Default::default()
        };
        assert!(matches(&property(100, 0), &filters));
        assert!(matches(&property(200, 0), &filters));
        assert!(!matches(&property(99, 0), &filters));
        assert!(!matches(&property(201, 0), &filters));
    }

    #[test]
    fn null_bedrooms_fails_min_bedrooms_filter() {
        let mut unknown = property(100, 0);
        unknown.bedrooms = None;
        let filters = SearchFilters {
            min_bedrooms: Some(1),
            ..Default::default()
        };
        assert!(!matches(&unknown, &filters));
        assert!(matches(&property(100, 0), &filters));
    }

    #[test]
    fn null_bathrooms_fails_min_bathrooms_filter() {
        let mut unknown = property(100, 0);
        unknown.bathrooms = None;
        let filters = SearchFilters {
            min_bathrooms: Some(2),
            ..Default::default()
        };
        assert!(!matches(&unknown, &filters));
    }

    #[test]
    fn predicate_order_is_irrelevant() {
        // Applying the conjunction in two passes gives the same set as one.
        let input = vec![
            property(30, 1),
            property(80, 2),
            property(120, 3),
            property(500, 4),
        ];
        let price_only = SearchFilters {
            min_price: Some(50),
            ..Default::default()
        };
        let location_only = SearchFilters {
            location: Some("mumbai".to_string()),
            ..Default::default()
        };
        let both = SearchFilters {
            min_price: Some(50),
            location: Some("mumbai".to_string()),
            ..Default::default()
        };

        let combined: Vec<_> = filter_and_sort(input.clone(), &both, SortOrder::Oldest)
            .iter()
            .map(|p| p.id)
            .collect();
        let staged: Vec<_> = filter_and_sort(
            filter_and_sort(input.clone(), &location_only, SortOrder::Oldest),
            &price_only,
            SortOrder::Oldest,
        )
        .iter()
        .map(|p| p.id)
        .collect();
        let staged_reversed: Vec<_> = filter_and_sort(
            filter_and_sort(input, &price_only, SortOrder::Oldest),
            &location_only,
            SortOrder::Oldest,
        )
        .iter()
        .map(|p| p.id)
        .collect();

        assert_eq!(combined, staged);
        assert_eq!(combined, staged_reversed);
    }

    #[test]
    fn price_sorts_reverse_each_other_for_distinct_prices() {
        let input = vec![property(300, 1), property(100, 2), property(200, 3)];
        let asc: Vec<_> = filter_and_sort(input.clone(), &SearchFilters::default(), SortOrder::PriceAsc)
            .iter()
            .map(|p| p.price)
            .collect();
        let mut desc: Vec<_> =
            filter_and_sort(input, &SearchFilters::default(), SortOrder::PriceDesc)
                .iter()
                .map(|p| p.price)
                .collect();
        desc.reverse();
        assert_eq!(asc, vec![100, 200, 300]);
        assert_eq!(asc, desc);
    }

    #[test]
    fn price_ties_keep_input_order() {
        let a = property(100, 1);
        let b = property(100, 2);
        let ids = vec![a.id, b.id];
        let out = filter_and_sort(vec![a, b], &SearchFilters::default(), SortOrder::PriceAsc);
        assert_eq!(out.iter().map(|p| p.id).collect::<Vec<_>>(), ids);
    }

    #[test]
    fn min_price_then_newest_end_to_end() {
        let input = vec![property(100, 1), property(50, 2)];

        let filters = SearchFilters {
            min_price: Some(60),
            ..Default::default()
        };
        let filtered = filter_and_sort(input.clone(), &filters, SortOrder::Newest);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].price, 100);

        let newest = filter_and_sort(input, &SearchFilters::default(), SortOrder::Newest);
        let stamps: Vec<_> = newest.iter().map(|p| p.created_at.timestamp()).collect();
        assert_eq!(stamps, vec![2, 1]);
    }

    #[test]
    fn filtering_twice_is_idempotent() {
        let input = vec![property(30, 1), property(80, 2), property(120, 3)];
        let filters = SearchFilters {
            min_price: Some(50),
            ..Default::default()
        };
        let once = filter_and_sort(input, &filters, SortOrder::PriceAsc);
        let twice = filter_and_sort(once.clone(), &filters, SortOrder::PriceAsc);
        assert_eq!(
            once.iter().map(|p| p.id).collect::<Vec<_>>(),
            twice.iter().map(|p| p.id).collect::<Vec<_>>()
        );
    }
}
