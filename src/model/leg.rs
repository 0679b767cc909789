use std::sync::Arc;

use crate::earth::antimeridian::{self, LegSegment};
use crate::error::Error;
use crate::model::location::Location;

use super::airport::Airport;

/// One leg of the route. Derived from a consecutive pair of route points;
/// carries the endpoints, the great circle distance and the polyline
/// pieces to draw. Both pieces of a date-line crossing leg belong to this
/// one leg, so a consumer can present them as a single hop.
#[derive(Debug, Clone, PartialEq)]
pub struct Leg {
    from: Arc<Airport>,
    to: Arc<Airport>,
    distance: f64,
    segments: Vec<LegSegment>,
}

impl Leg {
    pub fn between(from: Arc<Airport>, to: Arc<Airport>) -> Result<Self, Error> {
        let distance = from.get_loc().distance_to(to.get_loc())?;
        let segments = antimeridian::split(from.get_loc(), to.get_loc());
        Ok(Self {
            from,
            to,
            distance,
            segments,
        })
    }

    pub fn get_from(&self) -> &Arc<Airport> {
        &self.from
    }

    pub fn get_to(&self) -> &Arc<Airport> {
        &self.to
    }

    /// Great circle distance in kilometres.
    pub fn get_distance(&self) -> f64 {
        self.distance
    }

    pub fn get_segments(&self) -> &[LegSegment] {
        &self.segments
    }

    pub fn crosses_antimeridian(&self) -> bool {
        self.segments.len() > 1
    }
}

#[cfg(test)]
mod tests {
    use crate::model::test_utils::make_airport;

    use super::Leg;

    #[test]
    fn test_plain_leg() {
        let jfk = make_airport("JFK", 40.64, -73.78);
        let lhr = make_airport("LHR", 51.47, -0.45);
        let leg = Leg::between(jfk.clone(), lhr.clone()).unwrap();
        assert!(!leg.crosses_antimeridian());
        assert_eq!(leg.get_segments().len(), 1);
        assert!((leg.get_distance() - 5540.0).abs() < 40.0);
        assert_eq!(leg.get_from(), &jfk);
        assert_eq!(leg.get_to(), &lhr);
    }

    #[test]
    fn test_date_line_leg() {
        let syd = make_airport("SYD", -33.95, 151.18);
        let scl = make_airport("SCL", -33.39, -70.79);
        let leg = Leg::between(syd, scl).unwrap();
        assert!(leg.crosses_antimeridian());
        assert_eq!(leg.get_segments().len(), 2);
        assert_eq!(leg.get_segments()[0].get_end().get_longitude(), 180.0);
        assert_eq!(leg.get_segments()[1].get_start().get_longitude(), -180.0);
    }
}
