use geo::{GeodesicDistance, HaversineDistance, Point};
use std::cmp::Ordering;

/// Earth model used to measure the distance between two coordinate pairs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum DistanceModel {
    /// Karney's geodesic on the WGS-84 ellipsoid.
    #[default]
    Geodesic,
    /// Great circle on a sphere with the mean earth radius.
    Haversine,
}

impl DistanceModel {
    /// Distance in kilometres between `(lat1, lon1)` and `(lat2, lon2)`.
    ///
    /// The endpoints are put in a canonical order before measuring, so the
    /// result is bit-for-bit identical when the arguments are swapped.
    pub fn distance_km(self, lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
        if lat1 == lat2 && lon1 == lon2 {
            return 0.0;
        }

        let (a, b) = match lat1.total_cmp(&lat2).then(lon1.total_cmp(&lon2)) {
            Ordering::Greater => (point(lat2, lon2), point(lat1, lon1)),
            _ => (point(lat1, lon1), point(lat2, lon2)),
        };

        let meters = match self {
            DistanceModel::Geodesic => a.geodesic_distance(&b),
            DistanceModel::Haversine => a.haversine_distance(&b),
        };
        meters / 1000.0
    }
}

/// Geodesic distance in kilometres on the WGS-84 ellipsoid.
pub fn distance_km(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    DistanceModel::Geodesic.distance_km(lat1, lon1, lat2, lon2)
}

// geo points are (x, y) = (longitude, latitude)
fn point(lat: f64, lon: f64) -> Point<f64> {
    Point::new(lon, lat)
}
