use lazy_static::lazy_static;
use serde::Serialize;
use std::collections::HashMap;

/// Fixed centroids for Indian cities, keyed by normalized (trimmed,
/// lowercased) name. Lookup only: an unknown city resolves to nothing, never
/// to a guessed coordinate.
lazy_static! {
    static ref CITY_COORDINATES: HashMap<&'static str, Coordinates> = {
        let mut m = HashMap::new();
        let mut put = |name: &'static str, lat: f64, lng: f64| {
            m.insert(name, Coordinates { lat, lng });
        };

        // Major cities
        put("mumbai", 19.0760, 72.8777);
        put("delhi", 28.7041, 77.1025);
        put("bangalore", 12.9716, 77.5946);
        put("bengaluru", 12.9716, 77.5946);
        put("hyderabad", 17.3850, 78.4867);
        put("chennai", 13.0827, 80.2707);
        put("kolkata", 22.5726, 88.3639);
        put("pune", 18.5204, 73.8567);
        put("ahmedabad", 23.0225, 72.5714);
        put("jaipur", 26.9124, 75.7873);
        put("surat", 21.1702, 72.8311);
        put("lucknow", 26.8467, 80.9462);
        put("kanpur", 26.4499, 80.3319);
        put("nagpur", 21.1458, 79.0882);
        put("indore", 22.7196, 75.8577);
        put("thane", 19.2183, 72.9781);
        put("bhopal", 23.2599, 77.4126);
        put("visakhapatnam", 17.6868, 83.2185);
        put("pimpri-chinchwad", 18.6298, 73.7997);
        put("patna", 25.5941, 85.1376);
        put("vadodara", 22.3072, 73.1812);
        put("ghaziabad", 28.6692, 77.4538);
        put("ludhiana", 30.9010, 75.8573);
        put("agra", 27.1767, 78.0081);
        put("nashik", 19.9975, 73.7898);
        put("faridabad", 28.4089, 77.3178);
        put("meerut", 28.9845, 77.7064);
        put("rajkot", 22.3039, 70.8022);
        put("kalyan-dombivli", 19.2403, 73.1305);
        put("vasai-virar", 19.4612, 72.7985);
        put("varanasi", 25.3176, 82.9739);
        put("srinagar", 34.0837, 74.7973);
        put("aurangabad", 19.8762, 75.3433);
        put("dhanbad", 23.7957, 86.4304);
        put("amritsar", 31.6340, 74.8723);
        put("navi mumbai", 19.0330, 73.0297);
        put("allahabad", 25.4358, 81.8463);
        put("prayagraj", 25.4358, 81.8463);
        put("ranchi", 23.3441, 85.3096);
        put("howrah", 22.5958, 88.2636);
        put("coimbatore", 11.0168, 76.9558);
        put("jabalpur", 23.1815, 79.9864);
        put("gwalior", 26.2183, 78.1828);
        put("vijayawada", 16.5062, 80.6480);
        put("jodhpur", 26.2389, 73.0243);
        put("madurai", 9.9252, 78.1198);
        put("raipur", 21.2514, 81.6296);
        put("kota", 25.2138, 75.8648);
        put("chandigarh", 30.7333, 76.7794);
        put("guwahati", 26.1445, 91.7362);

        // NCR
        put("noida", 28.5355, 77.3910);
        put("greater noida", 28.4744, 77.5040);
        put("gurugram", 28.4595, 77.0266);
        put("gurgaon", 28.4595, 77.0266);

        // Other frequently listed cities
        put("mysore", 12.2958, 76.6394);
        put("mysuru", 12.2958, 76.6394);
        put("dehradun", 30.3165, 78.0322);
        put("kochi", 9.9312, 76.2673);
        put("cochin", 9.9312, 76.2673);
        put("thiruvananthapuram", 8.5241, 76.9366);
        put("trivandrum", 8.5241, 76.9366);
        put("bhubaneswar", 20.2961, 85.8245);
        put("mangalore", 12.9141, 74.8560);
        put("mangaluru", 12.9141, 74.8560);
        put("shimla", 31.1048, 77.1734);
        put("udaipur", 24.5854, 73.7125);

        m
    };
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

/// Look up the fixed centroid for a city name.
pub fn city_coordinates(city: &str) -> Option<Coordinates> {
    let normalized = city.trim().to_lowercase();
    if normalized.is_empty() {
        return None;
    }
    CITY_COORDINATES.get(normalized.as_str()).copied()
}

/// Coordinates for a listing: explicit data wins, the city centroid is the
/// fallback, and an unknown city stays unresolved. Deterministic.
pub fn resolve_coordinates(
    latitude: Option<f64>,
    longitude: Option<f64>,
    city: Option<&str>,
) -> Option<Coordinates> {
    if let (Some(lat), Some(lng)) = (latitude, longitude) {
        return Some(Coordinates { lat, lng });
    }

    city.and_then(city_coordinates)
}

/// Join the non-empty address parts with ", " for display.
pub fn format_full_address(
    address: Option<&str>,
    city: Option<&str>,
    state: Option<&str>,
    zip_code: Option<&str>,
) -> String {
    [address, city, state, zip_code]
        .iter()
        .filter_map(|part| *part)
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_coordinates_take_precedence() {
        let resolved = resolve_coordinates(Some(19.0760), Some(72.8777), Some("anything"));
        assert_eq!(
            resolved,
            Some(Coordinates {
                lat: 19.0760,
                lng: 72.8777
            })
        );
    }

    #[test]
    fn city_fallback_is_normalized() {
        let expected = city_coordinates("mumbai").unwrap();
        assert_eq!(resolve_coordinates(None, None, Some("Mumbai")), Some(expected));
        assert_eq!(
            resolve_coordinates(None, None, Some("  MUMBAI  ")),
            Some(expected)
        );
    }

    #[test]
    fn partial_coordinates_fall_back_to_city() {
        let expected = city_coordinates("pune").unwrap();
        assert_eq!(
            resolve_coordinates(Some(18.0), None, Some("Pune")),
            Some(expected)
        );
    }

    #[test]
    fn unknown_city_stays_unresolved() {
        assert_eq!(resolve_coordinates(None, None, Some("Atlantis")), None);
        assert_eq!(resolve_coordinates(None, None, None), None);
        assert_eq!(city_coordinates("   "), None);
    }

    #[test]
    fn lookup_is_deterministic() {
        let first = resolve_coordinates(None, None, Some("Delhi"));
        for _ in 0..10 {
            assert_eq!(resolve_coordinates(None, None, Some("Delhi")), first);
        }
    }

    #[test]
    fn full_address_skips_missing_parts() {
        assert_eq!(
            format_full_address(Some("12 MG Road"), Some("Mumbai"), Some("Maharashtra"), None),
            "12 MG Road, Mumbai, Maharashtra"
        );
        assert_eq!(format_full_address(None, Some("Pune"), None, Some("411001")), "Pune, 411001");
        assert_eq!(format_full_address(None, None, None, None), "");
    }
}
