use consts::{EARTH_RADIUS_KM, MAX_LATITUDE, MAX_LONGITUDE};
use models::LatLng;

pub mod consts;
pub mod models;
#[cfg(test)]
mod tests;

/// Great-circle distance between two points, in kilometers (haversine formula).
pub fn distance_km(from: LatLng, to: LatLng) -> f64 {
    let phi_1 = from.lat.to_radians();
    let phi_2 = to.lat.to_radians();
    let delta_phi = (to.lat - from.lat).to_radians();
    let delta_lambda = (to.lng - from.lng).to_radians();
    let a = (delta_phi / 2.0).sin().powi(2)
        + phi_1.cos() * phi_2.cos() * (delta_lambda / 2.0).sin().powi(2);
    // Rounding can push `a` slightly outside of `[0, 1]` near antipodal points.
    let a = a.clamp(0.0, 1.0);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
    EARTH_RADIUS_KM * c
}

/// Moves `origin` by the given amount of degrees, clamping latitude to the poles and
/// wrapping longitude around the antimeridian.
pub fn offset(origin: LatLng, delta_lat: f64, delta_lng: f64) -> LatLng {
    let lat = (origin.lat + delta_lat).clamp(-MAX_LATITUDE, MAX_LATITUDE);
    let mut lng = origin.lng + delta_lng;
    if lng > MAX_LONGITUDE {
        lng -= 2.0 * MAX_LONGITUDE;
    } else if lng < -MAX_LONGITUDE {
        lng += 2.0 * MAX_LONGITUDE;
    }
    LatLng::new(lat, lng)
}
