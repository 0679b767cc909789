use std::fs;
use std::io::BufReader;
use std::sync::{Arc, LazyLock, RwLock};

use flate2::read;
use log::info;

use crate::error::Error;
use crate::event::{self, Event};
use crate::model::airport::Airport;
use crate::model::location::Location;
use crate::util::airport_parser::AirportParser;
use crate::util::location_filter::Filter;

pub mod antimeridian;
pub mod coordinate;

static EARTH: LazyLock<Earth> = LazyLock::new(|| Earth {
    airports: Arc::new(RwLock::new(Vec::new())),
});

/// The airport catalog. Populated once at startup from the catalog file;
/// read-only reference data afterwards.
pub struct Earth {
    airports: Arc<RwLock<Vec<Arc<Airport>>>>,
}

impl Earth {
    pub fn get_airports(&self) -> &Arc<RwLock<Vec<Arc<Airport>>>> {
        &self.airports
    }

    pub fn get_airport_by_code(&self, code: &str) -> Option<Arc<Airport>> {
        self.airports
            .read()
            .unwrap()
            .iter()
            .find(|airport| airport.get_id().eq_ignore_ascii_case(code))
            .cloned()
    }

    pub fn set_airports(&self, airports: Vec<Arc<Airport>>) {
        let mut lock = self.airports.write().unwrap();
        lock.clear();
        lock.extend(airports);
    }

    /// All airports passing `filter`.
    pub fn search(&self, filter: &dyn Filter) -> Vec<Arc<Airport>> {
        self.airports
            .read()
            .unwrap()
            .iter()
            .filter(|airport| filter.filter(airport.as_ref()))
            .cloned()
            .collect()
    }

    /// Distinct country names, sorted, for the country picker.
    pub fn get_countries(&self) -> Vec<String> {
        let mut countries: Vec<String> = self
            .airports
            .read()
            .unwrap()
            .iter()
            .map(|airport| airport.get_country().to_string())
            .collect();
        countries.sort();
        countries.dedup();
        countries
    }

    /// The airports of one country, sorted by city, for the airport picker.
    pub fn get_airports_for_country(&self, country: &str) -> Vec<Arc<Airport>> {
        let mut airports: Vec<Arc<Airport>> = self
            .airports
            .read()
            .unwrap()
            .iter()
            .filter(|airport| airport.get_country().eq_ignore_ascii_case(country))
            .cloned()
            .collect();
        airports.sort_by(|a, b| a.get_city().cmp(b.get_city()));
        airports
    }
}

pub fn get_earth_model() -> &'static Earth {
    &EARTH
}

/// Load the airport catalog named by the `Airports.Path` preference.
pub fn initialise() -> Result<(), Error> {
    let timer = std::time::Instant::now();
    let pref = crate::preference::manager();
    match pref.get::<String>(crate::preference::AIRPORTS_PATH) {
        Some(p) => load_airports(&p)?,
        None => {
            return Err(Error::Precondition(
                "path to the airport catalog is not configured",
            ));
        }
    }
    info!("Airports loaded in {:?}", timer.elapsed());
    Ok(())
}

pub fn load_airports(path: &str) -> Result<(), Error> {
    let mut airports: Vec<Arc<Airport>> = Vec::new();
    let file = fs::File::open(path)?;

    let parser = AirportParser::new();
    // catalogs are commonly shipped gzipped
    if path.ends_with(".gz") {
        let decoder = read::GzDecoder::new(file);
        let mut reader = BufReader::new(decoder);
        parser.load_airports(&mut airports, &mut reader)?;
    } else {
        let mut reader = BufReader::new(file);
        parser.load_airports(&mut airports, &mut reader)?;
    }

    get_earth_model().set_airports(airports);
    event::manager().notify_listeners(Event::AirportsLoaded);
    Ok(())
}
