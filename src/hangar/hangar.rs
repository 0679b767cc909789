/*
 * Copyright (c) 2024-2025. Rob Hartley and others.
 */
use std::fs::File;
use std::io::{Read, Write};
use std::path::PathBuf;
use std::sync::{Arc, LazyLock, RwLock};

use log::{error, warn};
use yaml_rust::yaml::Hash;
use yaml_rust::{Yaml, YamlEmitter, YamlLoader};

use crate::model::aircraft::Aircraft;
use crate::preference::AIRCRAFT_PATH;

// This is where all the planes live.
static HANGAR: LazyLock<Hangar> = LazyLock::new(Hangar::new);

static DEFAULT_AIRCRAFT: &str = "---
- is-default: false
  manufacturer: Airbus Corporate Jets
  model: ACJ319neo
  range-km: 13334
- is-default: false
  manufacturer: Boeing Business Jets
  model: BBJ 787-8 Dreamliner
  range-km: 18519
- is-default: false
  manufacturer: Bombardier
  model: Challenger 350
  range-km: 5926
- is-default: false
  manufacturer: Bombardier
  model: Global 7500
  range-km: 14260
- is-default: false
  manufacturer: Cirrus
  model: SF50 Vision Jet
  range-km: 1852
- is-default: true
  manufacturer: Dassault
  model: Falcon 2000
  range-km: 5556
- is-default: false
  manufacturer: Dassault
  model: Falcon 8X
  range-km: 11945
";

const KEY_MANUFACTURER: &str = "manufacturer";
const KEY_MODEL: &str = "model";
const KEY_RANGE_KM: &str = "range-km";
const KEY_IS_DEFAULT: &str = "is-default";

pub struct Hangar {
    aircraft: Arc<RwLock<Vec<Arc<Aircraft>>>>,
}

impl Hangar {
    fn new() -> Hangar {
        Hangar {
            aircraft: Arc::new(RwLock::new(load_hangar())),
        }
    }

    pub fn get_all(&self) -> Arc<RwLock<Vec<Arc<Aircraft>>>> {
        self.aircraft.clone()
    }

    pub fn get_default_aircraft(&self) -> Option<Arc<Aircraft>> {
        let aircraft = self
            .aircraft
            .read()
            .expect("Unable to get a lock on the aircraft hangar");
        for a in aircraft.iter() {
            if a.is_default() {
                return Some(a.clone());
            }
        }
        None
    }

    pub fn get(&self, manufacturer: &str, model: &str) -> Option<Arc<Aircraft>> {
        for aircraft in self
            .aircraft
            .read()
            .expect("Can't get aircraft lock")
            .iter()
        {
            if aircraft.get_manufacturer().eq_ignore_ascii_case(manufacturer)
                && aircraft.get_model().eq_ignore_ascii_case(model)
            {
                return Some(aircraft.clone());
            }
        }
        None
    }

    /// Distinct manufacturer names, sorted, for building a picker.
    pub fn get_manufacturers(&self) -> Vec<String> {
        let aircraft = self
            .aircraft
            .read()
            .expect("Can't get aircraft lock");
        let mut names: Vec<String> = aircraft
            .iter()
            .map(|a| a.get_manufacturer().to_string())
            .collect();
        names.sort();
        names.dedup();
        names
    }

    /// The models of one manufacturer, in hangar order.
    pub fn get_models_for(&self, manufacturer: &str) -> Vec<Arc<Aircraft>> {
        self.aircraft
            .read()
            .expect("Can't get aircraft lock")
            .iter()
            .filter(|a| a.get_manufacturer().eq_ignore_ascii_case(manufacturer))
            .cloned()
            .collect()
    }
}

pub fn get_hangar() -> &'static Hangar {
    &HANGAR
}

// Load aircraft from yaml file, falling back to the built-in fleet
pub fn load_hangar() -> Vec<Arc<Aircraft>> {
    let path = get_hangar_path();

    let mut contents = String::new();
    match File::open(path) {
        Ok(mut file) => {
            if let Err(e) = file.read_to_string(&mut contents) {
                warn!("Unable to read aircraft config : {}", e);
                contents = DEFAULT_AIRCRAFT.to_string();
            }
        }
        Err(_) => {
            contents = DEFAULT_AIRCRAFT.to_string();
        }
    }

    let hangar = parse_hangar(&contents);
    if hangar.is_empty() {
        parse_hangar(DEFAULT_AIRCRAFT)
    } else {
        hangar
    }
}

fn parse_hangar(contents: &str) -> Vec<Arc<Aircraft>> {
    let mut hangar: Vec<Arc<Aircraft>> = Vec::new();

    let docs = match YamlLoader::load_from_str(contents) {
        Ok(docs) => docs,
        Err(e) => {
            warn!("Unable to parse aircraft config : {}", e);
            return hangar;
        }
    };
    for doc in docs {
        if let Some(all) = doc.as_vec() {
            for each in all {
                if let Some(map) = each.as_hash() {
                    let aircraft = Aircraft::new(
                        get_string(map, KEY_MANUFACTURER),
                        get_string(map, KEY_MODEL),
                        get_f64(map, KEY_RANGE_KM),
                        get_bool(map, KEY_IS_DEFAULT),
                    );
                    hangar.push(Arc::new(aircraft));
                }
            }
        }
    }
    hangar
}

fn get_bool(map: &Hash, key: &str) -> bool {
    map.get(&Yaml::String(key.to_string()))
        .unwrap_or(&Yaml::Boolean(false))
        .as_bool()
        .unwrap_or(false)
}

fn get_f64(map: &Hash, key: &str) -> f64 {
    // yaml-rust keeps integers and reals apart
    let value = map
        .get(&Yaml::String(key.to_string()))
        .unwrap_or(&Yaml::Integer(0));
    match value {
        Yaml::Integer(i) => *i as f64,
        _ => value.as_f64().unwrap_or(0.0),
    }
}

fn get_string(map: &Hash, key: &str) -> String {
    map.get(&Yaml::String(key.to_string()))
        .unwrap_or(&Yaml::String("".to_string()))
        .as_str()
        .unwrap_or("")
        .to_string()
}

pub fn save_hangar() {
    let path = get_hangar_path();

    let hangar = get_hangar().get_all();
    let all = hangar.read().expect("Unable to get read lock on hangar");

    let out_str = emit_hangar(&all);

    if let Some(parent) = path.parent() {
        let _ = std::fs::create_dir_all(parent);
    }
    match File::create(path) {
        Ok(mut f) => match f.write_all(out_str.as_bytes()) {
            Ok(_) => {}
            Err(err) => {
                warn!("Unable to save aircraft config : {}", err);
            }
        },
        Err(err) => {
            error!("Unable to save aircraft config : {}", err);
        }
    }
}

fn emit_hangar(all: &[Arc<Aircraft>]) -> String {
    let mut vec = Vec::new();

    for a in all.iter() {
        let mut inner_map = Hash::new();
        put_bool(&mut inner_map, KEY_IS_DEFAULT, a.is_default());
        put_string(&mut inner_map, KEY_MANUFACTURER, a.get_manufacturer());
        put_string(&mut inner_map, KEY_MODEL, a.get_model());
        put_f64(&mut inner_map, KEY_RANGE_KM, a.get_range());

        vec.push(Yaml::Hash(inner_map));
    }
    let doc = Yaml::Array(vec);

    let mut out_str = String::new();
    let mut emitter = YamlEmitter::new(&mut out_str);
    emitter.dump(&doc).expect("Unable to emit aircraft yaml");
    out_str
}

fn put_bool(map: &mut Hash, key: &str, v: bool) {
    map.insert(Yaml::String(key.to_string()), Yaml::Boolean(v));
}

fn put_f64(map: &mut Hash, key: &str, v: f64) {
    map.insert(Yaml::String(key.to_string()), Yaml::Real(format!("{}", v)));
}

fn put_string(map: &mut Hash, key: &str, v: &str) {
    map.insert(Yaml::String(key.to_string()), Yaml::String(v.to_string()));
}

pub fn get_hangar_path() -> PathBuf {
    if let Some(path) = crate::preference::manager().get::<String>(AIRCRAFT_PATH) {
        return PathBuf::from(path);
    }
    dirs_next::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("osprey-route-planner")
        .join("aircraft.yaml")
}
