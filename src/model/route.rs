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

use std::cell::{Cell, RefCell};
use std::sync::Arc;

use log::{info, warn};

use crate::error::Error;
use crate::event::{self, Event};
use crate::model::location::Location;
use crate::preference::SAFETY_MARGIN;

use super::aircraft::Aircraft;
use super::airport::Airport;
use super::leg::Leg;
use super::range_circle::RangeCircle;

/// Fraction of the rated range usable for a single leg, reserving headroom
/// for routing imprecision and operational reserves. Overridden by the
/// `Planner.safetyMargin` preference or per instance.
pub const DEFAULT_MARGIN_FACTOR: f64 = 0.95;

/// What a mutation did to the route, so a renderer can update
/// incrementally instead of rebuilding every feature.
#[derive(Debug, Clone, PartialEq)]
pub enum RouteChange {
    AircraftSelected {
        aircraft: Arc<Aircraft>,
        route_cleared: bool,
    },
    OriginSet {
        airport: Arc<Airport>,
    },
    PointAppended {
        index: usize,
        airport: Arc<Airport>,
        leg_distance: f64,
    },
    TruncatedTo {
        index: usize,
    },
    Cleared,
    Unchanged,
}

/// The route being planned: the ordered airports, the selected aircraft
/// and the margin factor. One instance per planning session; all mutation
/// rules live here.
///
/// The points hold these invariants: the first entry is the origin, no two
/// consecutive entries share a code, and every consecutive pair was within
/// the derated range of the aircraft selected at the time it was appended.
pub struct Route {
    points: RefCell<Vec<Arc<Airport>>>,
    aircraft: RefCell<Option<Arc<Aircraft>>>,
    margin_factor: Cell<f64>,
}

impl Route {
    pub fn new() -> Self {
        let pref = crate::preference::manager();
        let margin = pref
            .get::<f64>(SAFETY_MARGIN)
            .unwrap_or(DEFAULT_MARGIN_FACTOR);
        Self::with_margin_factor(margin)
    }

    pub fn with_margin_factor(margin_factor: f64) -> Self {
        Self {
            points: RefCell::new(Vec::with_capacity(4)),
            aircraft: RefCell::new(None),
            margin_factor: Cell::new(margin_factor),
        }
    }

    pub fn get_margin_factor(&self) -> f64 {
        self.margin_factor.get()
    }

    pub fn set_margin_factor(&self, margin_factor: f64) {
        self.margin_factor.set(margin_factor);
    }

    pub fn get_aircraft(&self) -> Option<Arc<Aircraft>> {
        self.aircraft.borrow().clone()
    }

    /// Rated range of the selected aircraft in kilometres; 0 with no
    /// aircraft selected.
    pub fn get_range(&self) -> f64 {
        self.aircraft
            .borrow()
            .as_ref()
            .map(|a| a.get_range())
            .unwrap_or(0.0)
    }

    /// Range usable for a single leg once the safety margin is applied.
    pub fn get_usable_range(&self) -> f64 {
        self.get_range() * self.margin_factor.get()
    }

    pub fn get_points(&self) -> Vec<Arc<Airport>> {
        self.points.borrow().clone()
    }

    pub fn get_point_count(&self) -> usize {
        self.points.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.borrow().is_empty()
    }

    /// Select the aircraft to plan with. Picking a different aircraft
    /// throws away the points, since their legs were validated against the
    /// old range; re-picking the current aircraft leaves the route alone.
    pub fn set_aircraft(&self, aircraft: Arc<Aircraft>) -> RouteChange {
        let same = self
            .aircraft
            .borrow()
            .as_ref()
            .map(|current| **current == *aircraft)
            .unwrap_or(false);
        if same {
            return RouteChange::Unchanged;
        }

        let route_cleared = !self.points.borrow().is_empty();
        if route_cleared {
            self.points.borrow_mut().clear();
        }
        self.aircraft.replace(Some(aircraft.clone()));
        info!(
            "Aircraft set to {} {} with range {:.0}km",
            aircraft.get_manufacturer(),
            aircraft.get_model(),
            aircraft.get_range()
        );

        let change = RouteChange::AircraftSelected {
            aircraft,
            route_cleared,
        };
        self.notify(&change);
        change
    }

    /// Set the origin of an empty route. An aircraft with a positive range
    /// must already be selected.
    pub fn set_origin(&self, airport: Arc<Airport>) -> Result<RouteChange, Error> {
        if !self.points.borrow().is_empty() {
            return Err(Error::Precondition("the route already has an origin"));
        }
        if self.get_range() <= 0.0 {
            return Err(Error::Precondition(
                "an aircraft must be selected before picking an origin",
            ));
        }

        self.points.borrow_mut().push(airport.clone());
        let change = RouteChange::OriginSet { airport };
        self.notify(&change);
        Ok(change)
    }

    /// Handle the operator picking an airport, wherever it falls relative
    /// to the route so far:
    /// on an empty route it becomes the origin; re-picking the last point
    /// is ignored; picking an earlier point rewinds the route back to it;
    /// anything else is validated against the usable range and appended.
    pub fn select_or_append(&self, airport: Arc<Airport>) -> Result<RouteChange, Error> {
        if self.points.borrow().is_empty() {
            return self.set_origin(airport);
        }

        let last = self
            .points
            .borrow()
            .last()
            .cloned()
            .ok_or(Error::Precondition("the route has no points"))?;

        if last.get_code() == airport.get_code() {
            return Ok(RouteChange::Unchanged);
        }

        let earlier = self
            .points
            .borrow()
            .iter()
            .position(|p| p.get_code() == airport.get_code());
        if let Some(index) = earlier {
            self.points.borrow_mut().truncate(index + 1);
            info!("Route rewound to {} at position {}", airport.get_code(), index);
            let change = RouteChange::TruncatedTo { index };
            self.notify(&change);
            return Ok(change);
        }

        let leg_distance = last.get_loc().distance_to(airport.get_loc())?;
        let allowed = self.get_usable_range();
        if leg_distance > allowed {
            warn!(
                "Rejected leg {} -> {}: {:.0}km against {:.0}km usable",
                last.get_code(),
                airport.get_code(),
                leg_distance,
                allowed
            );
            return Err(Error::OutOfRange {
                distance: leg_distance,
                allowed,
                deficit: leg_distance - allowed,
            });
        }

        let index = {
            let mut points = self.points.borrow_mut();
            points.push(airport.clone());
            points.len() - 1
        };
        info!(
            "Leg {} -> {} added, {:.0}km",
            last.get_code(),
            airport.get_code(),
            leg_distance
        );
        let change = RouteChange::PointAppended {
            index,
            airport,
            leg_distance,
        };
        self.notify(&change);
        Ok(change)
    }

    /// Drop all points; the aircraft selection survives.
    pub fn clear(&self) -> RouteChange {
        self.points.borrow_mut().clear();
        let change = RouteChange::Cleared;
        self.notify(&change);
        change
    }

    /// Full recompute of the leg geometry, for a renderer that redraws
    /// from scratch rather than applying the incremental changes.
    pub fn get_legs(&self) -> Result<Vec<Leg>, Error> {
        let points = self.points.borrow();
        let mut legs = Vec::with_capacity(points.len().saturating_sub(1));
        for pair in points.windows(2) {
            legs.push(Leg::between(pair[0].clone(), pair[1].clone())?);
        }
        Ok(legs)
    }

    /// One reachability circle per route point, all at the current range.
    pub fn get_range_circles(&self) -> Vec<RangeCircle> {
        let range = self.get_range();
        self.points
            .borrow()
            .iter()
            .map(|p| RangeCircle::new(p.clone(), range))
            .collect()
    }

    pub fn get_total_distance(&self) -> Result<f64, Error> {
        let points = self.points.borrow();
        let mut total = 0.0;
        for pair in points.windows(2) {
            total += pair[0].get_loc().distance_to(pair[1].get_loc())?;
        }
        Ok(total)
    }

    fn notify(&self, change: &RouteChange) {
        event::manager().notify_listeners(Event::RouteChanged(change.clone()));
    }
}

impl Default for Route {
    fn default() -> Self {
        Self::new()
    }
}
