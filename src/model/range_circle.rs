use std::fmt;
use std::sync::Arc;

use super::airport::Airport;

/// Styling category for a reachability circle. Advisory metadata only; the
/// renderer picks colours and, if it tessellates circles itself, a point
/// density from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeCategory {
    Normal,
    Medium,
    Long,
    Extreme,
}

impl RangeCategory {
    pub fn for_range(range: f64) -> Self {
        if range >= 20000.0 {
            RangeCategory::Extreme
        } else if range >= 12000.0 {
            RangeCategory::Long
        } else if range >= 8000.0 {
            RangeCategory::Medium
        } else {
            RangeCategory::Normal
        }
    }

    /// Suggested point count should a renderer build the circle as a
    /// polygon. Fewer points for the huge circles, which deform badly in
    /// projected maps anyway.
    pub fn suggested_tessellation(&self) -> u32 {
        match self {
            RangeCategory::Extreme => 16,
            RangeCategory::Long => 24,
            RangeCategory::Medium => 32,
            RangeCategory::Normal => 48,
        }
    }
}

impl fmt::Display for RangeCategory {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            RangeCategory::Normal => "normal",
            RangeCategory::Medium => "medium",
            RangeCategory::Long => "long",
            RangeCategory::Extreme => "extreme",
        };
        write!(f, "{}", name)
    }
}

/// Reachability circle around one route point. Derived on demand from the
/// route; never stored.
#[derive(Debug, Clone, PartialEq)]
pub struct RangeCircle {
    centre: Arc<Airport>,
    radius: f64,
    category: RangeCategory,
}

impl RangeCircle {
    pub fn new(centre: Arc<Airport>, radius: f64) -> Self {
        Self {
            centre,
            radius,
            category: RangeCategory::for_range(radius),
        }
    }

    pub fn get_centre(&self) -> &Arc<Airport> {
        &self.centre
    }

    /// Radius in kilometres; the full rated range, not the derated one.
    pub fn get_radius(&self) -> f64 {
        self.radius
    }

    pub fn get_category(&self) -> RangeCategory {
        self.category
    }
}

#[cfg(test)]
mod tests {
    use super::RangeCategory;

    #[test]
    fn test_category_thresholds() {
        assert_eq!(RangeCategory::for_range(1852.0), RangeCategory::Normal);
        assert_eq!(RangeCategory::for_range(7999.0), RangeCategory::Normal);
        assert_eq!(RangeCategory::for_range(8000.0), RangeCategory::Medium);
        assert_eq!(RangeCategory::for_range(11999.0), RangeCategory::Medium);
        assert_eq!(RangeCategory::for_range(12000.0), RangeCategory::Long);
        assert_eq!(RangeCategory::for_range(19999.0), RangeCategory::Long);
        assert_eq!(RangeCategory::for_range(20000.0), RangeCategory::Extreme);
        assert_eq!(RangeCategory::for_range(21570.0), RangeCategory::Extreme);
    }

    #[test]
    fn test_tessellation_density_shrinks_with_range() {
        assert_eq!(RangeCategory::Normal.suggested_tessellation(), 48);
        assert_eq!(RangeCategory::Medium.suggested_tessellation(), 32);
        assert_eq!(RangeCategory::Long.suggested_tessellation(), 24);
        assert_eq!(RangeCategory::Extreme.suggested_tessellation(), 16);
    }
}
