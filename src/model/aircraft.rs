/// Immutable aircraft reference data. The range is the manufacturer's
/// rated maximum in kilometres; leg validation derates it by the safety
/// margin factor, never here.
#[derive(Debug, Clone)]
pub struct Aircraft {
    manufacturer: String,
    model: String,
    range: f64,
    is_default: bool,
}

impl Aircraft {
    pub fn new(manufacturer: String, model: String, range: f64, is_default: bool) -> Self {
        Aircraft {
            manufacturer,
            model,
            range,
            is_default,
        }
    }

    pub fn get_manufacturer(&self) -> &str {
        &self.manufacturer
    }

    pub fn get_model(&self) -> &str {
        &self.model
    }

    /// Rated maximum range in kilometres.
    pub fn get_range(&self) -> f64 {
        self.range
    }

    pub fn is_default(&self) -> bool {
        self.is_default
    }
}

impl PartialEq for Aircraft {
    fn eq(&self, other: &Self) -> bool {
        self.manufacturer == other.manufacturer && self.model == other.model
    }
}
