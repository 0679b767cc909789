/*
 * Copyright (c) 2024-2025. Rob Hartley and others.
 *
 * This file is part of Osprey Route Planner.
 *
 * Osprey Route Planner is free software; you can redistribute it and/or modify
 * it under the terms of the GNU General Public License as published by
 * the Free Software Foundation; either version 2 of the License, or
 * (at your option) any later version.
 *
 * Osprey Route Planner is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 * GNU General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with Osprey Route Planner; if not, write to the Free Software
 * Foundation, Inc., 59 Temple Place, Suite 330, Boston, MA  02111-1307  USA
 *
 * Contributors:
 *      Rob Hartley
 *
 */

// Filters for narrowing the airport catalog to what the operator can pick

use regex_lite::{Regex, RegexBuilder};

use crate::earth::coordinate::Coordinate;
use crate::model::location::Location;

/// Kilometres per degree of latitude, for the rough prefilter.
const KM_PER_DEGREE: f64 = 111.2;

pub trait Filter {
    fn filter(&self, location: &dyn Location) -> bool;
}

/// Passes locations within `range` kilometres of a fixed point. Used to
/// offer only the airports the selected aircraft can actually reach.
pub struct RangeFilter {
    this: Coordinate,
    range: f64,
    rough_lat_sep: f64,
    rough_long_sep: f64,
}

impl RangeFilter {
    pub fn new(lat: f64, lon: f64, range: f64) -> Self {
        // We do a little optimization here rather than calculating
        // all distances accurately; we make a quick rough calculation to exclude many coordinates
        let rough_lat_sep = range / KM_PER_DEGREE;
        let x = lat.to_radians().cos();
        let rough_long_sep = if x < 0.01 {
            181.0
        } else {
            range / (KM_PER_DEGREE * x)
        };

        Self {
            this: Coordinate::new(lat, lon),
            range,
            rough_lat_sep,
            rough_long_sep,
        }
    }
}

impl Filter for RangeFilter {
    // returns true if the coordinate passes the filter
    fn filter(&self, location: &dyn Location) -> bool {
        let other = location.get_loc();
        if ((self.this.get_latitude() - other.get_latitude()).abs() < self.rough_lat_sep)
            & ((self.this.get_longitude() - other.get_longitude()).abs() < self.rough_long_sep)
        {
            self.this
                .distance_to(other)
                .map(|d| d < self.range)
                .unwrap_or(false)
        } else {
            false
        }
    }
}

pub struct NilFilter {}

impl NilFilter {
    pub fn new() -> Self {
        Self {}
    }
}

impl Filter for NilFilter {
    fn filter(&self, _location: &dyn Location) -> bool {
        false
    }
}

/// Matches an exact ident, or the name against a case-insensitive pattern.
pub struct NameIdFilter {
    term: String,
    regex: Regex,
}

impl NameIdFilter {
    pub fn new(term: &str) -> Option<Self> {
        match RegexBuilder::new(term).case_insensitive(true).build() {
            Ok(regex) => Some(Self {
                term: term.to_string(),
                regex,
            }),
            Err(_) => None,
        }
    }
}

impl Filter for NameIdFilter {
    fn filter(&self, location: &dyn Location) -> bool {
        location.get_id().eq_ignore_ascii_case(&self.term)
            || self.regex.is_match(location.get_name())
    }
}

pub struct IdFilter {
    term: String,
}

impl IdFilter {
    pub fn new(term: &str) -> Self {
        Self {
            term: term.to_string(),
        }
    }
}

impl Filter for IdFilter {
    fn filter(&self, location: &dyn Location) -> bool {
        location.get_id().eq_ignore_ascii_case(&self.term)
    }
}

pub struct CombinedFilter {
    filters: Vec<Box<dyn Filter>>,
}

impl CombinedFilter {
    pub fn new() -> Self {
        Self {
            filters: Vec::new(),
        }
    }

    pub fn add(&mut self, filter: Box<dyn Filter>) {
        self.filters.push(filter);
    }
}

impl Filter for CombinedFilter {
    fn filter(&self, location: &dyn Location) -> bool {
        for f in &self.filters {
            if !f.filter(location) {
                return false;
            }
        }
        true
    }
}

impl Default for CombinedFilter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use crate::model::location::Location;
    use crate::model::test_utils::make_airport;

    use super::{CombinedFilter, Filter, IdFilter, NameIdFilter, NilFilter, RangeFilter};

    #[test]
    fn test_range_filter() {
        let sydney = make_airport("SYD", -33.95, 151.18);
        let melbourne = make_airport("MEL", -37.67, 144.84);
        let london = make_airport("LHR", 51.47, -0.45);

        let filter = RangeFilter::new(-33.95, 151.18, 1000.0);
        assert!(filter.filter(&*sydney as &dyn Location));
        assert!(filter.filter(&*melbourne as &dyn Location));
        assert!(!filter.filter(&*london as &dyn Location));
    }

    #[test]
    fn test_range_filter_near_the_pole() {
        let alert = make_airport("YLT", 82.52, -62.28);
        let filter = RangeFilter::new(89.9, 0.0, 2000.0);
        // the rough longitude separation must not exclude near-pole points
        assert!(filter.filter(&*alert as &dyn Location));
    }

    #[test]
    fn test_name_id_filter() {
        let sydney = make_airport("SYD", -33.95, 151.18);
        let filter = NameIdFilter::new("syd").unwrap();
        assert!(filter.filter(&*sydney as &dyn Location));
        let filter = NameIdFilter::new("SYD Inter.*").unwrap();
        assert!(filter.filter(&*sydney as &dyn Location));
        let filter = NameIdFilter::new("heathrow").unwrap();
        assert!(!filter.filter(&*sydney as &dyn Location));
    }

    #[test]
    fn test_id_filter() {
        let sydney = make_airport("SYD", -33.95, 151.18);
        assert!(IdFilter::new("syd").filter(&*sydney as &dyn Location));
        assert!(!IdFilter::new("MEL").filter(&*sydney as &dyn Location));
    }

    #[test]
    fn test_combined_filter() {
        let sydney = make_airport("SYD", -33.95, 151.18);

        let mut filter = CombinedFilter::new();
        filter.add(Box::new(RangeFilter::new(-33.95, 151.18, 100.0)));
        filter.add(Box::new(IdFilter::new("SYD")));
        assert!(filter.filter(&*sydney as &dyn Location));

        filter.add(Box::new(NilFilter::new()));
        assert!(!filter.filter(&*sydney as &dyn Location));
    }
}
