use crate::models::{BoundingBox, Point};

/// Earth's mean radius in kilometers
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Calculate the Haversine distance between two points in kilometers
///
/// Treats the Earth as a sphere. Coordinates are not range-checked; out of
/// range input yields a defined but meaningless distance.
#[inline]
pub fn compute_distance(a: Point, b: Point) -> f64 {
    let lat1_rad = a.latitude.to_radians();
    let lat2_rad = b.latitude.to_radians();
    let delta_lat = (b.latitude - a.latitude).to_radians();
    let delta_lon = (b.longitude - a.longitude).to_radians();

    let h = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lon / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    EARTH_RADIUS_KM * c
}

/// Calculate a bounding box around a center point
///
/// Much cheaper than Haversine and used to narrow the backend query. The box
/// contains every point within `radius_km` of `center`:
/// - latitude spans the angular radius `r / R` either side
/// - longitude spans `asin(sin(r / R) / cos(lat))`, the widest point of the circle
/// - a circle reaching a pole spans every longitude
///
/// A box crossing the antimeridian has `min_lon > max_lon`, see
/// [`BoundingBox::crosses_antimeridian`].
pub fn calculate_bounding_box(center: Point, radius_km: f64) -> BoundingBox {
    let angular_radius = radius_km / EARTH_RADIUS_KM;
    let lat_delta = angular_radius.to_degrees();

    let min_lat = center.latitude - lat_delta;
    let max_lat = center.latitude + lat_delta;

    if max_lat >= 90.0 || min_lat <= -90.0 {
        return BoundingBox {
            min_lat: min_lat.max(-90.0),
            max_lat: max_lat.min(90.0),
            min_lon: -180.0,
            max_lon: 180.0,
        };
    }

    // Away from the poles cos(lat) > sin(r / R), the min only absorbs rounding
    let ratio = (angular_radius.sin() / center.latitude.to_radians().cos()).min(1.0);
    let lon_delta = ratio.asin().to_degrees();

    let mut min_lon = center.longitude - lon_delta;
    let mut max_lon = center.longitude + lon_delta;
    if max_lon - min_lon >= 360.0 {
        min_lon = -180.0;
        max_lon = 180.0;
    } else if min_lon < -180.0 {
        min_lon += 360.0;
    } else if max_lon > 180.0 {
        max_lon -= 360.0;
    }

    BoundingBox {
        min_lat,
        max_lat,
        min_lon,
        max_lon,
    }
}

/// Check if a point is within a bounding box
#[inline]
pub fn is_within_bounding_box(point: Point, bbox: &BoundingBox) -> bool {
    let within_lon = if bbox.crosses_antimeridian() {
        point.longitude >= bbox.min_lon || point.longitude <= bbox.max_lon
    } else {
        point.longitude >= bbox.min_lon && point.longitude <= bbox.max_lon
    };

    point.latitude >= bbox.min_lat && point.latitude <= bbox.max_lat && within_lon
}

/// Human readable distance label
pub fn format_distance(distance_km: f64) -> String {
    if distance_km < 1.0 {
        format!("{}m away", (distance_km * 1000.0).round() as i64)
    } else {
        format!("{:.1}km away", distance_km)
    }
}
