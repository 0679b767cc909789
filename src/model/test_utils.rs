use std::sync::Arc;

use super::aircraft::Aircraft;
use super::airport::Airport;

pub fn make_airport(code: &str, latitude: f64, longitude: f64) -> Arc<Airport> {
    Arc::new(Airport::new(
        code.to_string(),
        format!("{} International", code),
        "Testville".to_string(),
        "Testland".to_string(),
        latitude,
        longitude,
    ))
}

pub fn make_aircraft(manufacturer: &str, model: &str, range: f64) -> Arc<Aircraft> {
    Arc::new(Aircraft::new(
        manufacturer.to_string(),
        model.to_string(),
        range,
        false,
    ))
}
