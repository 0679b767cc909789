pub mod airport_parser;
pub mod distance_format;
pub mod lat_long_format;
pub mod location_filter;
