use crate::geo::models::LatLng;
use crate::geo::{distance_km, offset};

const PARIS: LatLng = LatLng {
    lat: 48.8566,
    lng: 2.3522,
};
const LONDON: LatLng = LatLng {
    lat: 51.5074,
    lng: -0.1278,
};
const SYDNEY: LatLng = LatLng {
    lat: -33.8688,
    lng: 151.2093,
};

#[test]
fn test_paris_to_london_is_about_343_km() {
    let distance = distance_km(PARIS, LONDON);
    assert!((distance - 343.5).abs() < 1.0, "got {distance}");
}

#[test]
fn test_distance_is_symmetric() {
    let pairs = [(PARIS, LONDON), (LONDON, SYDNEY), (SYDNEY, PARIS)];
    for (a, b) in pairs {
        assert!((distance_km(a, b) - distance_km(b, a)).abs() < 1e-9);
    }
}

#[test]
fn test_distance_to_itself_is_zero() {
    for point in [PARIS, LONDON, SYDNEY, LatLng::new(90.0, 0.0)] {
        assert_eq!(distance_km(point, point), 0.0);
    }
}

#[test]
fn test_antipodal_points_are_half_the_circumference_apart() {
    let distance = distance_km(LatLng::new(0.0, 0.0), LatLng::new(0.0, 180.0));
    assert!(distance.is_finite());
    assert!((distance - std::f64::consts::PI * 6371.0).abs() < 1e-6);
}

#[test]
fn test_distance_grows_with_angular_separation() {
    let origin = LatLng::new(0.0, 0.0);
    let mut previous = 0.0;
    for lng in [1.0, 10.0, 45.0, 90.0, 135.0, 179.0] {
        let distance = distance_km(origin, LatLng::new(0.0, lng));
        assert!(distance > previous);
        previous = distance;
    }
}

#[test]
fn test_validity_checks_ranges_and_finiteness() {
    assert!(PARIS.is_valid());
    assert!(LatLng::new(-90.0, 180.0).is_valid());
    assert!(!LatLng::new(90.5, 0.0).is_valid());
    assert!(!LatLng::new(0.0, -180.1).is_valid());
    assert!(!LatLng::new(f64::NAN, 0.0).is_valid());
}

#[test]
fn test_offset_clamps_latitude_and_wraps_longitude() {
    let moved = offset(LatLng::new(85.0, 175.0), 10.0, 10.0);
    assert_eq!(moved.lat, 90.0);
    assert!((moved.lng - -175.0).abs() < 1e-9);

    let moved = offset(LatLng::new(-85.0, -175.0), -10.0, -10.0);
    assert_eq!(moved.lat, -90.0);
    assert!((moved.lng - 175.0).abs() < 1e-9);
}
