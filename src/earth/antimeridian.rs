//! Splitting of route lines at the ±180° meridian.
//!
//! A leg whose endpoints sit either side of the date line must be drawn as
//! two polyline pieces, otherwise the renderer draws the long way around
//! the world.

use crate::earth::coordinate::Coordinate;

/// One straight polyline piece of a leg. A leg that stays clear of the
/// date line yields a single segment; a crossing leg yields two, broken at
/// +180° and -180° with a shared interpolated latitude.
#[derive(Debug, Clone, PartialEq)]
pub struct LegSegment {
    start: Coordinate,
    end: Coordinate,
}

impl LegSegment {
    pub fn new(start: Coordinate, end: Coordinate) -> Self {
        Self { start, end }
    }

    pub fn get_start(&self) -> &Coordinate {
        &self.start
    }

    pub fn get_end(&self) -> &Coordinate {
        &self.end
    }
}

/// Split the line from `from` to `to` at the date line if the short way
/// round crosses it.
pub fn split(from: &Coordinate, to: &Coordinate) -> Vec<LegSegment> {
    let from_lon = from.get_longitude();
    let to_lon = to.get_longitude();

    if (to_lon - from_lon).abs() <= 180.0 {
        return vec![LegSegment::new(from.clone(), to.clone())];
    }

    // Shift the destination longitude by a full turn so the two values are
    // numerically continuous; the sign of the shift gives the direction of
    // travel.
    let to_lon_adj = if from_lon > to_lon {
        to_lon + 360.0 // eastbound across the seam
    } else {
        to_lon - 360.0 // westbound
    };

    let break_lon = if to_lon_adj > from_lon { 180.0 } else { -180.0 };
    let break_lat = if to_lon_adj == from_lon {
        // antipodal-seam coincidence; no usable gradient
        (from.get_latitude() + to.get_latitude()) / 2.0
    } else {
        from.get_latitude()
            + (to.get_latitude() - from.get_latitude()) * (break_lon - from_lon)
                / (to_lon_adj - from_lon)
    };

    vec![
        LegSegment::new(from.clone(), Coordinate::new(break_lat, break_lon)),
        LegSegment::new(Coordinate::new(break_lat, -break_lon), to.clone()),
    ]
}
