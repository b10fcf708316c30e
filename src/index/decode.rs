use crate::area::CodeArea;
use crate::error::PlusCodeError;
use crate::index::constants::{
    ENCODING_BASE, FINAL_LAT_PRECISION, FINAL_LNG_PRECISION, GRID_COLUMNS,
    GRID_LAT_FIRST_PLACE_VALUE, GRID_LNG_FIRST_PLACE_VALUE, GRID_ROWS, LATITUDE_MAX,
    LONGITUDE_MAX, MAX_DIGIT_COUNT, PADDING_CHARACTER, PAIR_CODE_LENGTH, PAIR_FIRST_PLACE_VALUE,
    PAIR_PRECISION, SEPARATOR, digit_value,
};
use crate::index::validation::is_full;

/// Decodes a full Plus Code into the area it represents.
///
/// The pair and grid sections are accumulated separately as integers and only
/// converted to degrees at the end. Bounds are rounded to 14 decimal places.
/// Digits beyond the fifteenth are ignored.
///
/// # Example
/// ```
/// use plus_codes_rs::decode;
///
/// # fn main() -> Result<(), plus_codes_rs::PlusCodeError> {
/// let area = decode("7FG49QCJ+2V")?;
/// assert_eq!(area.code_length, 10);
/// assert!((area.latitude_lo - 20.37).abs() < 1e-10);
/// assert!((area.longitude_hi - 2.78225).abs() < 1e-10);
/// # Ok(())
/// # }
/// ```
///
/// # Errors
///
/// - [`PlusCodeError::InvalidFullCode`] - the code is not a valid full code
pub fn decode(code: &str) -> Result<CodeArea, PlusCodeError> {
    if !is_full(code) {
        return Err(PlusCodeError::InvalidFullCode(code.to_string()));
    }

    let digits: Vec<i64> = code
        .chars()
        .filter(|&c| c != SEPARATOR && c != PADDING_CHARACTER)
        .map(|c| digit_value(c).ok_or_else(|| PlusCodeError::InvalidFullCode(code.to_string())))
        .collect::<Result<_, _>>()?;

    let mut normal_lat = -(LATITUDE_MAX as i64) * PAIR_PRECISION;
    let mut normal_lng = -(LONGITUDE_MAX as i64) * PAIR_PRECISION;
    let mut grid_lat: i64 = 0;
    let mut grid_lng: i64 = 0;

    let pair_digits = digits.len().min(PAIR_CODE_LENGTH);
    let mut place_value = PAIR_FIRST_PLACE_VALUE;
    for (position, pair) in digits[..pair_digits].chunks(2).enumerate() {
        normal_lat += pair[0] * place_value;
        if let Some(&lng_digit) = pair.get(1) {
            normal_lng += lng_digit * place_value;
        }
        if position * 2 < pair_digits.saturating_sub(2) {
            place_value /= ENCODING_BASE;
        }
    }

    let mut lat_precision = place_value as f64 / PAIR_PRECISION as f64;
    let mut lng_precision = place_value as f64 / PAIR_PRECISION as f64;

    if digits.len() > PAIR_CODE_LENGTH {
        let mut row_place_value = GRID_LAT_FIRST_PLACE_VALUE;
        let mut col_place_value = GRID_LNG_FIRST_PLACE_VALUE;
        let grid_end = digits.len().min(MAX_DIGIT_COUNT);
        for (i, &digit) in digits.iter().enumerate().take(grid_end).skip(PAIR_CODE_LENGTH) {
            let row = digit / GRID_COLUMNS;
            let col = digit % GRID_COLUMNS;
            grid_lat += row * row_place_value;
            grid_lng += col * col_place_value;
            if i < grid_end - 1 {
                row_place_value /= GRID_ROWS;
                col_place_value /= GRID_COLUMNS;
            }
        }
        lat_precision = row_place_value as f64 / FINAL_LAT_PRECISION as f64;
        lng_precision = col_place_value as f64 / FINAL_LNG_PRECISION as f64;
    }

    let lat = normal_lat as f64 / PAIR_PRECISION as f64 + grid_lat as f64 / FINAL_LAT_PRECISION as f64;
    let lng = normal_lng as f64 / PAIR_PRECISION as f64 + grid_lng as f64 / FINAL_LNG_PRECISION as f64;

    Ok(CodeArea::new(
        round_degrees(lat),
        round_degrees(lng),
        round_degrees(lat + lat_precision),
        round_degrees(lng + lng_precision),
        digits.len().min(MAX_DIGIT_COUNT),
    ))
}

/// Rounds to 14 decimal places to drop residual floating point error.
fn round_degrees(value: f64) -> f64 {
    (value * 1e14).round() / 1e14
}
