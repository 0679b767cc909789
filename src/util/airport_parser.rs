/*
 * Copyright (c) 2024-2025. Rob Hartley and others.
 */
use std::io::BufRead;
use std::sync::Arc;

use crate::error::Error;
use crate::model::airport::Airport;

/// Parser for the airport catalog.
///
/// The catalog is a line-oriented text file, one airport per line, fields
/// separated by semicolons:
///
/// `CODE;NAME;CITY;COUNTRY;LATITUDE;LONGITUDE`
///
/// Blank lines and lines starting with `#` are ignored.
pub struct AirportParser;

impl AirportParser {
    pub fn new() -> Self {
        Self
    }

    pub fn load_airports<R: BufRead>(
        &self,
        airports: &mut Vec<Arc<Airport>>,
        reader: &mut R,
    ) -> Result<(), Error> {
        let mut buf = String::new();
        let mut line_no = 0;
        loop {
            buf.clear();
            line_no += 1;
            match reader.read_line(&mut buf) {
                Ok(0) => return Ok(()), // EOF
                Ok(_) => {
                    let record = buf.trim();
                    if record.is_empty() || record.starts_with('#') {
                        continue;
                    }
                    airports.push(Arc::new(self.parse_record(record, line_no)?));
                }
                Err(e) => return Err(e.into()),
            }
        }
    }

    fn parse_record(&self, record: &str, line_no: usize) -> Result<Airport, Error> {
        let fields: Vec<&str> = record.split(';').map(str::trim).collect();
        if fields.len() != 6 {
            return Err(Error::BadCatalog(format!(
                "line {}: expected 6 fields, found {}",
                line_no,
                fields.len()
            )));
        }

        let code = fields[0];
        if code.is_empty() {
            return Err(Error::BadCatalog(format!("line {}: empty airport code", line_no)));
        }

        let latitude = fields[4].parse::<f64>().map_err(|_| {
            Error::BadCatalog(format!("line {}: bad latitude '{}'", line_no, fields[4]))
        })?;
        let longitude = fields[5].parse::<f64>().map_err(|_| {
            Error::BadCatalog(format!("line {}: bad longitude '{}'", line_no, fields[5]))
        })?;

        if !(-90.0..=90.0).contains(&latitude) {
            return Err(Error::BadCatalog(format!(
                "line {}: latitude {} out of range",
                line_no, latitude
            )));
        }
        if !(-180.0..=180.0).contains(&longitude) {
            return Err(Error::BadCatalog(format!(
                "line {}: longitude {} out of range",
                line_no, longitude
            )));
        }

        Ok(Airport::new(
            code.to_string(),
            fields[1].to_string(),
            fields[2].to_string(),
            fields[3].to_string(),
            latitude,
            longitude,
        ))
    }
}

impl Default for AirportParser {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::io::BufReader;
    use std::sync::Arc;

    use crate::error::Error;
    use crate::model::airport::Airport;
    use crate::model::location::Location;

    use super::AirportParser;

    const CATALOG: &str = "\
# code;name;city;country;lat;lon
CDG;Paris-Charles de Gaulle;Paris;France;48.86;2.35

LHR;London Heathrow;London;United Kingdom;51.47;-0.45
SYD;Kingsford Smith;Sydney;Australia;-33.95;151.18
";

    fn parse(catalog: &str) -> Result<Vec<Arc<Airport>>, Error> {
        let parser = AirportParser::new();
        let mut airports = Vec::new();
        let mut reader = BufReader::new(catalog.as_bytes());
        parser.load_airports(&mut airports, &mut reader)?;
        Ok(airports)
    }

    #[test]
    fn test_load_airports() {
        let airports = parse(CATALOG).unwrap();
        assert_eq!(airports.len(), 3);
        assert_eq!(airports[0].get_id(), "CDG");
        assert_eq!(airports[0].get_city(), "Paris");
        assert_eq!(airports[0].get_lat(), 48.86);
        assert_eq!(airports[2].get_country(), "Australia");
        assert_eq!(airports[2].get_long(), 151.18);
    }

    #[test]
    fn test_rejects_short_record() {
        let result = parse("CDG;Paris-Charles de Gaulle;Paris;France;48.86");
        assert!(matches!(result, Err(Error::BadCatalog(_))));
    }

    #[test]
    fn test_rejects_bad_numbers() {
        let result = parse("CDG;Paris;Paris;France;north;2.35");
        assert!(matches!(result, Err(Error::BadCatalog(_))));
    }

    #[test]
    fn test_rejects_out_of_range_coordinates() {
        let result = parse("BAD;Nowhere;Nowhere;Atlantis;95.0;2.35");
        assert!(matches!(result, Err(Error::BadCatalog(_))));
        let result = parse("BAD;Nowhere;Nowhere;Atlantis;45.0;181.0");
        assert!(matches!(result, Err(Error::BadCatalog(_))));
    }

    #[test]
    fn test_error_names_the_line() {
        let catalog = "CDG;Paris-Charles de Gaulle;Paris;France;48.86;2.35\nbroken line\n";
        match parse(catalog) {
            Err(Error::BadCatalog(msg)) => assert!(msg.contains("line 2")),
            other => panic!("unexpected result {:?}", other),
        }
    }
}
