use crate::coord::{check_finite, clip_latitude, normalize_longitude};
use crate::error::PlusCodeError;
use crate::index::constants::{MIN_TRIMMABLE_CODE_LEN, PAIR_RESOLUTIONS};
use crate::index::decode::decode;
use crate::index::validation::{is_full, is_padded};
use tracing::debug;

/// Removes leading digits from a full code using a reference location.
///
/// The closer the reference is to the code's center, the more digits can go:
/// two digits per pair level, trimmed only while the reference lies within 0.3
/// of that level's resolution (less than the 0.5 that would strictly suffice,
/// so the short code still recovers to the same full code).
///
/// # Example
/// ```
/// use plus_codes_rs::shorten;
///
/// # fn main() -> Result<(), plus_codes_rs::PlusCodeError> {
/// assert_eq!(shorten("9C3W9QCJ+2VX", 51.3701125, -1.217765625)?, "+2VX");
/// assert_eq!(shorten("9C3W9QCJ+2VX", 51.3708675, -1.217765625)?, "CJ+2VX");
/// # Ok(())
/// # }
/// ```
///
/// # Errors
///
/// - [`PlusCodeError::InvalidFullCode`] - the code is not a valid full code
/// - [`PlusCodeError::PaddedCodeNotShortenable`] - the code contains padding
/// - [`PlusCodeError::CodeTooShortToShorten`] - fewer than 6 significant digits
/// - [`PlusCodeError::InvalidCoordinate`] - NaN or infinite reference location
pub fn shorten(code: &str, latitude: f64, longitude: f64) -> Result<String, PlusCodeError> {
    if !is_full(code) {
        return Err(PlusCodeError::InvalidFullCode(code.to_string()));
    }
    if is_padded(code) {
        return Err(PlusCodeError::PaddedCodeNotShortenable(code.to_string()));
    }
    check_finite(latitude, longitude)?;

    let code_upper = code.to_ascii_uppercase();
    let area = decode(&code_upper)?;
    if area.code_length < MIN_TRIMMABLE_CODE_LEN {
        return Err(PlusCodeError::CodeTooShortToShorten(area.code_length));
    }

    let latitude = clip_latitude(latitude);
    let longitude = normalize_longitude(longitude);

    let range = (area.latitude_center() - latitude)
        .abs()
        .max((area.longitude_center() - longitude).abs());

    for i in (1..PAIR_RESOLUTIONS.len() - 1).rev() {
        if range < PAIR_RESOLUTIONS[i] * 0.3 {
            let trim = (i + 1) * 2;
            debug!(code = %code_upper, range, trim, "shortening code");
            return Ok(code_upper[trim..].to_string());
        }
    }

    debug!(code = %code_upper, range, "reference too far away to shorten");
    Ok(code_upper)
}
