//! Great-circle distance on a spherical Earth model.

use geo::Point;

/// Mean Earth radius in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Haversine distance in kilometers between two points given as
/// (longitude, latitude) degree pairs.
///
/// Symmetric by construction and zero for identical inputs. Coordinates
/// are not range-checked here; that is the loader's concern. NaN inputs
/// propagate to a NaN result.
#[must_use]
pub fn haversine_distance(a: Point<f64>, b: Point<f64>) -> f64 {
    let lat1 = a.y().to_radians();
    let lat2 = b.y().to_radians();

    let dlat = lat2 - lat1;
    let dlon = (b.x() - a.x()).to_radians();

    let h = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);

    EARTH_RADIUS_KM * 2.0 * h.sqrt().asin()
}
