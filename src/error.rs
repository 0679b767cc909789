use std::io;

/// Route planning and catalog errors.
///
/// Every variant is a recoverable, one-shot validation failure; the route is
/// left unmodified and the host presents the condition to the operator.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Operation invoked from a state that forbids it. The caller must fix
    /// the ordering, e.g. select an aircraft before picking an origin.
    #[error("Operation not permitted: {0}")]
    Precondition(&'static str),

    /// A leg is longer than the safety-derated range of the selected
    /// aircraft.
    #[error("Leg of {distance:.0}km exceeds the usable range of {allowed:.0}km by {deficit:.0}km")]
    OutOfRange {
        distance: f64,
        allowed: f64,
        deficit: f64,
    },

    /// A non-finite coordinate reached the geodesic math.
    #[error("Coordinate is not finite: latitude {latitude}, longitude {longitude}")]
    InvalidGeometry { latitude: f64, longitude: f64 },

    /// A catalog record could not be parsed.
    #[error("Bad catalog record: {0}")]
    BadCatalog(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
