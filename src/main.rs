use std::io::{self, BufRead, Write};
use std::sync::Arc;

use log::warn;
use rolling_file::{BasicRollingFileAppender, RollingConditionBasic};
use simplelog::*;

use osprey_route_planner::earth;
use osprey_route_planner::error::Error;
use osprey_route_planner::hangar::hangar::get_hangar;
use osprey_route_planner::model::airport::Airport;
use osprey_route_planner::model::location::Location;
use osprey_route_planner::model::route::Route;
use osprey_route_planner::preference::{self, SAFETY_MARGIN, UNITS};
use osprey_route_planner::util::distance_format::DistanceFormat;
use osprey_route_planner::util::location_filter::{NameIdFilter, RangeFilter};

fn main() {
    init_logger();

    // Allow the catalog path on the command line to override the preference
    if let Some(path) = std::env::args().nth(1) {
        preference::manager().put(preference::AIRPORTS_PATH, path);
    }
    if let Err(e) = earth::initialise() {
        warn!("No airport catalog loaded: {}", e);
        println!("No airport catalog loaded ({}); airport lookups will fail.", e);
    }

    let route = Route::new();
    if let Some(aircraft) = get_hangar().get_default_aircraft() {
        route.set_aircraft(aircraft);
    }

    print_help();
    print_status(&route);

    let stdin = io::stdin();
    loop {
        print!("> ");
        let _ = io::stdout().flush();
        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) => break,
            Ok(_) => {}
            Err(e) => {
                warn!("stdin closed: {}", e);
                break;
            }
        }
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let (command, argument) = match line.split_once(' ') {
            Some((c, a)) => (c, a.trim()),
            None => (line, ""),
        };

        match command {
            "quit" | "exit" => break,
            "help" => print_help(),
            "aircraft" => do_aircraft(&route, argument),
            "go" => do_go(&route, argument),
            "clear" => {
                route.clear();
                println!("Route cleared.");
            }
            "route" => print_route(&route),
            "near" => do_near(&route),
            "find" => do_find(argument),
            "countries" => {
                for country in earth::get_earth_model().get_countries() {
                    println!("{}", country);
                }
            }
            "airports" => {
                for airport in earth::get_earth_model().get_airports_for_country(argument) {
                    print_airport(&airport);
                }
            }
            "margin" => do_margin(&route, argument),
            _ => println!("Unknown command '{}'; try 'help'.", command),
        }
    }
}

fn init_logger() {
    let file_appender = BasicRollingFileAppender::new(
        "osprey-planner.log",
        RollingConditionBasic::new().max_size(1024 * 1024),
        3,
    )
    .expect("Unable to create log file.");

    CombinedLogger::init(vec![
        TermLogger::new(
            LevelFilter::Warn,
            Config::default(),
            TerminalMode::Mixed,
            ColorChoice::Auto,
        ),
        WriteLogger::new(LevelFilter::Info, Config::default(), file_appender),
    ])
    .expect("Unable to initiate logger.");
}

fn print_help() {
    println!("Commands:");
    println!("  aircraft                     list the hangar");
    println!("  aircraft <maker>/<model>     select an aircraft");
    println!("  go <code>                    set origin, append, or rewind to an airport");
    println!("  route                        show the planned route");
    println!("  near                         airports reachable from the last point");
    println!("  find <pattern>               search airports by ident or name");
    println!("  countries                    list catalog countries");
    println!("  airports <country>           list a country's airports");
    println!("  margin <factor>              set the safety margin factor");
    println!("  clear                        drop all route points");
    println!("  quit");
}

fn print_status(route: &Route) {
    match route.get_aircraft() {
        Some(a) => println!(
            "Aircraft: {} {} ({:.0}km rated, {:.0}km usable)",
            a.get_manufacturer(),
            a.get_model(),
            a.get_range(),
            route.get_usable_range()
        ),
        None => println!("No aircraft selected."),
    }
}

fn do_aircraft(route: &Route, argument: &str) {
    if argument.is_empty() {
        for manufacturer in get_hangar().get_manufacturers() {
            for aircraft in get_hangar().get_models_for(&manufacturer) {
                println!(
                    "{}/{} ({:.0}km)",
                    aircraft.get_manufacturer(),
                    aircraft.get_model(),
                    aircraft.get_range()
                );
            }
        }
        return;
    }
    match argument.split_once('/') {
        Some((manufacturer, model)) => {
            match get_hangar().get(manufacturer.trim(), model.trim()) {
                Some(aircraft) => {
                    route.set_aircraft(aircraft);
                    print_status(route);
                }
                None => println!("No such aircraft in the hangar."),
            }
        }
        None => println!("Usage: aircraft <maker>/<model>"),
    }
}

fn do_go(route: &Route, code: &str) {
    let airport = match earth::get_earth_model().get_airport_by_code(code) {
        Some(a) => a,
        None => {
            println!("Unknown airport '{}'.", code);
            return;
        }
    };
    match route.select_or_append(airport) {
        Ok(_) => print_route(route),
        Err(e @ Error::OutOfRange { .. }) => {
            println!("{}", e);
            println!("Pick an intermediate airport and try again.");
        }
        Err(e) => println!("{}", e),
    }
}

fn do_near(route: &Route) {
    let points = route.get_points();
    let last = match points.last() {
        Some(p) => p,
        None => {
            println!("No route yet; pick an origin first.");
            return;
        }
    };
    let filter = RangeFilter::new(
        last.get_lat(),
        last.get_long(),
        route.get_usable_range(),
    );
    for airport in earth::get_earth_model().search(&filter) {
        if airport.get_id() != last.get_id() {
            print_airport(&airport);
        }
    }
}

fn do_find(pattern: &str) {
    match NameIdFilter::new(pattern) {
        Some(filter) => {
            for airport in earth::get_earth_model().search(&filter) {
                print_airport(&airport);
            }
        }
        None => println!("Bad search pattern."),
    }
}

fn do_margin(route: &Route, argument: &str) {
    match argument.parse::<f64>() {
        Ok(factor) if factor > 0.0 && factor <= 1.0 => {
            route.set_margin_factor(factor);
            preference::manager().put(SAFETY_MARGIN, factor);
            println!("Safety margin factor set to {}.", factor);
        }
        _ => println!("The margin factor must be a number in (0, 1]."),
    }
}

fn print_airport(airport: &Arc<Airport>) {
    println!(
        "{} {} ({}, {}) {} {}",
        airport.get_id(),
        airport.get_name(),
        airport.get_city(),
        airport.get_country(),
        airport.get_lat_as_string(),
        airport.get_long_as_string()
    );
}

fn print_route(route: &Route) {
    let points = route.get_points();
    if points.is_empty() {
        println!("No route defined.");
        return;
    }

    let units = preference::manager()
        .get::<String>(UNITS)
        .unwrap_or("Km".to_string());
    let distance_format = DistanceFormat::new(&units);

    let legs = match route.get_legs() {
        Ok(legs) => legs,
        Err(e) => {
            println!("{}", e);
            return;
        }
    };

    println!("1. {} ({})", points[0].get_city(), points[0].get_id());
    for (i, leg) in legs.iter().enumerate() {
        let seam = if leg.crosses_antimeridian() {
            " [crosses the date line]"
        } else {
            ""
        };
        println!(
            "{}. {} ({}) ({}){}",
            i + 2,
            leg.get_to().get_city(),
            leg.get_to().get_id(),
            distance_format.format(&leg.get_distance()),
            seam
        );
    }
    if legs.len() > 1 {
        if let Ok(total) = route.get_total_distance() {
            println!("Total distance: {}", distance_format.format(&total));
        }
    }
}
