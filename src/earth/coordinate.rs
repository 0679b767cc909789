use std::f64::consts::PI;

use crate::error::Error;
use crate::util::lat_long_format::LatLongFormat;

#[derive(Debug, Clone, PartialEq)]
pub struct Coordinate {
    latitude: f64,
    longitude: f64,
}

impl Coordinate {
    /// Mean Earth radius in kilometres; all distances in the planner are km.
    pub const EARTH_RADIUS: f64 = 6371.0;

    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    pub fn is_finite(&self) -> bool {
        self.latitude.is_finite() && self.longitude.is_finite()
    }

    fn checked(&self) -> Result<(), Error> {
        if self.is_finite() {
            Ok(())
        } else {
            Err(Error::InvalidGeometry {
                latitude: self.latitude,
                longitude: self.longitude,
            })
        }
    }

    /// Great circle distance to `l` in kilometres, by the haversine formula.
    /// Symmetric, and 0 for coincident points. Non-finite coordinates are
    /// rejected rather than letting NaN leak into leg validation.
    pub fn distance_to(&self, l: &Coordinate) -> Result<f64, Error> {
        self.checked()?;
        l.checked()?;

        let lat1 = self.latitude.to_radians();
        let lat2 = l.latitude.to_radians();
        let d_lat = (l.latitude - self.latitude).to_radians();
        let d_lon = (l.longitude - self.longitude).to_radians();

        let a = (d_lat / 2.0).sin().powi(2)
            + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2);
        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

        Ok(Self::EARTH_RADIUS * c)
    }

    /// Initial bearing towards `l` in radians, in [0, 2π). Not meaningful
    /// when the points coincide; callers must not rely on it at zero
    /// distance.
    pub fn bearing_to(&self, l: &Coordinate) -> Result<f64, Error> {
        self.checked()?;
        l.checked()?;

        let lat1 = self.latitude.to_radians();
        let lat2 = l.latitude.to_radians();
        let d_lon = (l.longitude - self.longitude).to_radians();

        let y = d_lon.sin() * lat2.cos();
        let x = lat1.cos() * lat2.sin() - lat1.sin() * lat2.cos() * d_lon.cos();
        let mut heading = y.atan2(x);

        if heading < 0.0 {
            heading += 2.0 * PI;
        }

        Ok(heading)
    }

    pub fn bearing_to_deg(&self, l: &Coordinate) -> Result<f64, Error> {
        Ok(self.bearing_to(l)?.to_degrees() % 360.0)
    }

    /// The point reached travelling `distance` kilometres from here on the
    /// initial `heading` (degrees clockwise from north).
    ///
    /// Fails soft: any non-finite input returns this coordinate unchanged,
    /// so one bad value cannot corrupt a whole rendering pass. The distance
    /// is clamped to half the Earth's circumference to keep the inverse
    /// trigonometry in domain, and the resulting longitude is normalised
    /// into (-180, 180].
    pub fn coordinate_at(&self, distance: f64, heading: f64) -> Coordinate {
        if !self.is_finite() || !distance.is_finite() || !heading.is_finite() {
            return self.clone();
        }

        let d = distance.min(Self::EARTH_RADIUS * PI) / Self::EARTH_RADIUS;
        let lat1 = self.latitude.to_radians();
        let lon1 = self.longitude.to_radians();
        let tc = heading.to_radians();

        let lat = (lat1.sin() * d.cos() + lat1.cos() * d.sin() * tc.cos()).asin();
        let d_lon = (tc.sin() * d.sin() * lat1.cos()).atan2(d.cos() - lat1.sin() * lat.sin());

        let mut lon = (lon1 + d_lon).to_degrees();
        while lon > 180.0 {
            lon -= 360.0;
        }
        while lon <= -180.0 {
            lon += 360.0;
        }

        let result = Coordinate::new(lat.to_degrees(), lon);
        if result.is_finite() {
            result
        } else {
            self.clone()
        }
    }

    pub fn get_latitude(&self) -> f64 {
        self.latitude
    }

    pub fn get_latitude_as_string(&self) -> String {
        let formatter = LatLongFormat::lat_format();
        formatter.format(self.latitude)
    }

    pub fn get_longitude(&self) -> f64 {
        self.longitude
    }

    pub fn get_longitude_as_string(&self) -> String {
        let formatter = LatLongFormat::long_format();
        formatter.format(self.longitude)
    }
}
