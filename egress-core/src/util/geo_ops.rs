use geo::{Distance, Haversine, LineString, Point};
use serde::Serialize;
use uom::si::f64::{Length, Time, Velocity};

/// assumed average travel speed when estimating duration for a direct
/// (straight-line) route, in km/h
pub const DIRECT_ROUTE_SPEED_KMH: f64 = 50.0;

/// a straight-line evacuation route between two coordinates, produced when
/// no richer routing service is available. pure math, always succeeds.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct DirectRoute {
    pub distance_km: f64,
    pub duration_minutes: f64,
    pub polyline: LineString<f64>,
}

/// great-circle route between two points. distance is haversine over the
/// mean earth radius; duration assumes [`DIRECT_ROUTE_SPEED_KMH`].
///
/// coordinates follow the geo crate convention: x is longitude, y latitude,
/// in degrees. non-finite coordinates are not validated here.
pub fn direct_route(start: Point<f64>, end: Point<f64>) -> DirectRoute {
    let distance = Length::new::<uom::si::length::meter>(Haversine.distance(start, end));
    let speed = Velocity::new::<uom::si::velocity::kilometer_per_hour>(DIRECT_ROUTE_SPEED_KMH);
    let duration: Time = distance / speed;
    DirectRoute {
        distance_km: distance.get::<uom::si::length::kilometer>(),
        duration_minutes: duration.get::<uom::si::time::minute>(),
        polyline: LineString::from(vec![start, end]),
    }
}
