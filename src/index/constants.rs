/// The 20 symbols used as base-20 digits, in digit-value order.
pub const CODE_ALPHABET: &[u8; 20] = b"23456789CFGHJMPQRVWX";

/// Base used to convert numbers to/from digits
pub const ENCODING_BASE: i64 = 20;

/// Separator between the first four digit pairs and the remainder of a code
pub const SEPARATOR: char = '+';

/// Number of digits placed before the separator
pub const SEPARATOR_POSITION: usize = 8;

/// Character used to pad codes shorter than the separator position
pub const PADDING_CHARACTER: char = '0';

/// Default code length (roughly 14x14 meters at the equator)
pub const CODE_PRECISION_NORMAL: usize = 10;

/// One grid digit beyond the default (roughly 3x3 meters)
pub const CODE_PRECISION_EXTRA: usize = 11;

/// Maximum number of significant digits in a code
pub const MAX_DIGIT_COUNT: usize = 15;

/// Number of digits produced by the latitude/longitude pair phase
pub const PAIR_CODE_LENGTH: usize = 10;

/// Number of digits produced by the grid phase
pub const GRID_CODE_LENGTH: usize = MAX_DIGIT_COUNT - PAIR_CODE_LENGTH;

/// Columns in the grid refinement (longitude)
pub const GRID_COLUMNS: i64 = 4;

/// Rows in the grid refinement (latitude)
pub const GRID_ROWS: i64 = 5;

/// Minimum number of significant digits a code needs before it can be shortened
pub const MIN_TRIMMABLE_CODE_LEN: usize = 6;

pub const LATITUDE_MAX: f64 = 90.0;
pub const LONGITUDE_MAX: f64 = 180.0;

/// Degree place value of each digit pair (0-4)
pub const PAIR_RESOLUTIONS: [f64; 5] = [20.0, 1.0, 0.05, 0.0025, 0.000125];

/// Place value of the most significant pair when the least significant pair is 1
pub(crate) const PAIR_FIRST_PLACE_VALUE: i64 =
    ENCODING_BASE.pow((PAIR_CODE_LENGTH / 2 - 1) as u32);

/// Inverse of the degree precision of the pair phase
pub(crate) const PAIR_PRECISION: i64 = ENCODING_BASE.pow(3);

/// Place value of the first grid row digit when the last one is 1
pub(crate) const GRID_LAT_FIRST_PLACE_VALUE: i64 = GRID_ROWS.pow((GRID_CODE_LENGTH - 1) as u32);

/// Place value of the first grid column digit when the last one is 1
pub(crate) const GRID_LNG_FIRST_PLACE_VALUE: i64 =
    GRID_COLUMNS.pow((GRID_CODE_LENGTH - 1) as u32);

/// Latitude multiplier giving an integer at the finest supported resolution
pub(crate) const FINAL_LAT_PRECISION: i64 = PAIR_PRECISION * GRID_ROWS.pow(GRID_CODE_LENGTH as u32);

/// Longitude multiplier giving an integer at the finest supported resolution
pub(crate) const FINAL_LNG_PRECISION: i64 =
    PAIR_PRECISION * GRID_COLUMNS.pow(GRID_CODE_LENGTH as u32);

/// Returns the digit value of an alphabet symbol, ignoring case.
pub(crate) fn digit_value(c: char) -> Option<i64> {
    let upper = c.to_ascii_uppercase();
    CODE_ALPHABET
        .iter()
        .position(|&b| b as char == upper)
        .map(|v| v as i64)
}

/// Returns the alphabet symbol for a digit value in `0..20`.
pub(crate) fn digit_char(value: i64) -> char {
    CODE_ALPHABET[value as usize] as char
}
