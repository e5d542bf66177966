use std::time::Duration;

/// Domestic dialing prefix put in front of the national destination code.
pub const TRUNK_PREFIX: &'static str = "0";
pub const PLUS_SIGN: &'static str = "+";

// Longest digit run tried against the country table before the scanner
// gives up on finding a country code.
pub const MAX_LENGTH_COUNTRY_CODE: usize = 5;
// Same for national destination codes.
pub const MAX_LENGTH_NDC: usize = 3;

/// Shortest and longest accepted E.164 rendering, counting the plus sign.
pub const MIN_LENGTH_E164: usize = 6;
pub const MAX_LENGTH_E164: usize = 16;

// Characters removed before digits are grouped for display.
pub const LAYOUT_WHITESPACE: &'static str = "[\n \t]";

pub const PTS_COUNTRY_CODE: u32 = 46;
pub const PTS_ENDPOINT: &'static str =
    "http://api.pts.se/ptsnumber/ptsnumber.asmx/SearchByNumber";
pub const PTS_OPERATOR_NODE: &'static str = "Operator";
/// Values the PTS service puts in the operator node when it has no answer.
pub const PTS_NO_OPERATOR_SENTINELS: [&'static str; 2] = [
    "Ogiltigt värde",
    "Finns ingen operatör med detta nummer",
];
pub const DEFAULT_CARRIER_TIMEOUT: Duration = Duration::from_secs(10);

/// Table name used in cache keys of the country directory.
pub const DEFAULT_COUNTRY_TABLE: &'static str = "lookup__Iso3166";
