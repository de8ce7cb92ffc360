// Unit tests for SasaDoc Search

use sasadoc_search::core::{
    distance::{compute_distance, calculate_bounding_box, is_within_bounding_box, format_distance, EARTH_RADIUS_KM},
    filters::{specialty_matches, is_recommended, SpecialistFilter},
    specialty::{recommend_specialty, parse_analysis, fallback_analysis, DEFAULT_SPECIALTY},
};
use sasadoc_search::models::{Point, Specialist};
use geo::HaversineDistance;

const NEW_YORK: Point = Point::new(40.7128, -74.0060);
const BROOKLYN: Point = Point::new(40.7306, -73.9352);
const LOS_ANGELES: Point = Point::new(34.0522, -118.2437);
const LONDON: Point = Point::new(51.5074, -0.1278);

fn create_specialist(name: &str, specialty: &str, years: u32) -> Specialist {
    Specialist {
        id: name.to_string(),
        name: name.to_string(),
        specialty: specialty.to_string(),
        location: NEW_YORK,
        years_of_experience: years,
        rating: 4.0,
        is_available: true,
        bio: None,
    }
}

#[test]
fn test_distance_zero_for_same_point() {
    for p in [NEW_YORK, LOS_ANGELES, LONDON, Point::new(-89.9, 179.9)] {
        assert_eq!(compute_distance(p, p), 0.0);
    }
}

#[test]
fn test_distance_is_symmetric() {
    let pairs = [(NEW_YORK, LOS_ANGELES), (LONDON, BROOKLYN), (LOS_ANGELES, LONDON)];

    for (a, b) in pairs {
        assert!((compute_distance(a, b) - compute_distance(b, a)).abs() < 1e-9);
    }
}

#[test]
fn test_triangle_inequality() {
    let points = [NEW_YORK, BROOKLYN, LOS_ANGELES, LONDON, Point::new(-33.8688, 151.2093)];

    for a in points {
        for b in points {
            for c in points {
                let direct = compute_distance(a, c);
                let via = compute_distance(a, b) + compute_distance(b, c);
                assert!(direct <= via + 1e-6, "{} > {}", direct, via);
            }
        }
    }
}

#[test]
fn test_new_york_to_los_angeles() {
    let distance = compute_distance(NEW_YORK, LOS_ANGELES);
    assert!((distance - 3936.0).abs() < 5.0, "Expected ~3936km, got {}", distance);
}

#[test]
fn test_matches_geo_crate() {
    // geo works in meters with a slightly different Earth radius
    let ours = compute_distance(LONDON, LOS_ANGELES);
    let theirs = geo::Point::new(LONDON.longitude, LONDON.latitude)
        .haversine_distance(&geo::Point::new(LOS_ANGELES.longitude, LOS_ANGELES.latitude))
        / 1000.0;

    assert!((ours - theirs).abs() / theirs < 0.001, "ours {} vs geo {}", ours, theirs);
}

/// Point at `distance_km` from `origin` along `bearing_deg` (spherical destination formula)
fn destination(origin: Point, bearing_deg: f64, distance_km: f64) -> Point {
    let angular = distance_km / EARTH_RADIUS_KM;
    let lat1 = origin.latitude.to_radians();
    let bearing = bearing_deg.to_radians();

    let lat2 = (lat1.sin() * angular.cos() + lat1.cos() * angular.sin() * bearing.cos()).asin();
    let lon2 = origin.longitude.to_radians()
        + (bearing.sin() * angular.sin() * lat1.cos()).atan2(angular.cos() - lat1.sin() * lat2.sin());

    // Normalize to [-180, 180)
    let lon2 = (lon2.to_degrees() + 540.0).rem_euclid(360.0) - 180.0;
    Point::new(lat2.to_degrees(), lon2)
}

#[test]
fn test_bounding_box_contains_radius() {
    let origins = [
        NEW_YORK,
        Point::new(0.0, 0.0),
        Point::new(60.0, 10.0),
        Point::new(80.0, -45.0),
        Point::new(-75.0, 120.0),
        Point::new(89.5, 0.0),
        Point::new(-17.0, 179.9),
        Point::new(65.0, -179.8),
    ];

    for origin in origins {
        for radius_km in [1.0, 25.0, 100.0, 500.0] {
            let bbox = calculate_bounding_box(origin, radius_km);

            for step in 0..360 {
                let edge = destination(origin, step as f64, radius_km * 0.999);
                assert!(compute_distance(origin, edge) <= radius_km);
                assert!(
                    is_within_bounding_box(edge, &bbox),
                    "{:?} at {}km from {:?} is outside {:?}",
                    edge,
                    radius_km,
                    origin,
                    bbox
                );
            }
        }
    }

    assert!(!is_within_bounding_box(LOS_ANGELES, &calculate_bounding_box(NEW_YORK, 25.0)));
}

#[test]
fn test_half_circumference() {
    let distance = compute_distance(Point::new(0.0, 0.0), Point::new(0.0, 180.0));
    assert!((distance - std::f64::consts::PI * EARTH_RADIUS_KM).abs() < 1e-6);
}

#[test]
fn test_distance_labels() {
    assert_eq!(format_distance(0.05), "50m away");
    assert_eq!(format_distance(12.345), "12.3km away");
}

#[test]
fn test_specialty_filters() {
    assert!(specialty_matches("Orthopedic Surgery", "orthopedic"));
    assert!(is_recommended(&create_specialist("A", "Cardiology", 1), "cardiology"));

    let filter = SpecialistFilter {
        specialty: Some("Cardiology".to_string()),
        search_term: None,
        min_experience: Some(5),
    };
    assert!(filter.matches(&create_specialist("A", "Cardiology", 5)));
    assert!(!filter.matches(&create_specialist("B", "Cardiology", 4)));
    assert!(!filter.matches(&create_specialist("C", "Dermatology", 20)));
}

#[test]
fn test_symptom_heuristic() {
    assert_eq!(recommend_specialty("my child has a fever"), Some("Pediatrics"));
    assert_eq!(recommend_specialty("blurry vision in one eye"), Some("Ophthalmology"));
    assert_eq!(fallback_analysis("no idea", None).recommended_specialty, DEFAULT_SPECIALTY);
    assert!(parse_analysis("not json").is_none());
}
