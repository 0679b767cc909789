/*
 * Copyright (c) 2024-2025. Rob Hartley and others.
 */
pub struct DistanceFormat {
    conversion_factor: f64,
    distance_unit: String,
}

impl DistanceFormat {
    /// Distances inside the planner are kilometres; this converts for
    /// display only.
    pub fn new(unit: &str) -> Self {
        Self {
            conversion_factor: match unit {
                "Km" => 1.0,
                "Nm" => 1.0 / 1.852,
                "Mi" => 1.0 / 1.609344,
                _ => 1.0,
            },
            distance_unit: unit.to_string(),
        }
    }

    pub fn format(&self, distance: &f64) -> String {
        let converted_distance = distance * self.conversion_factor;
        format!("{:.0}{}", converted_distance, self.distance_unit)
    }
}

#[cfg(test)]
mod tests {
    use super::DistanceFormat;

    #[test]
    fn test_fmt_distance() {
        assert_eq!(DistanceFormat::new("Km").format(&5556.0), "5556Km");
        assert_eq!(DistanceFormat::new("Nm").format(&1852.0), "1000Nm");
        assert_eq!(DistanceFormat::new("Mi").format(&1609.344), "1000Mi");
    }
}
