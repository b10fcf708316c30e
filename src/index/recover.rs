use crate::coord::{check_finite, clip_latitude, normalize_longitude};
use crate::error::PlusCodeError;
use crate::index::constants::{
    CODE_PRECISION_NORMAL, ENCODING_BASE, LATITUDE_MAX, SEPARATOR, SEPARATOR_POSITION,
};
use crate::index::decode::decode;
use crate::index::encode::encode;
use crate::index::validation::{is_full, is_short};
use tracing::debug;

/// Recovers the full code nearest to a reference location from a short code.
///
/// Full codes are returned unchanged.
///
/// # Process
///
/// 1. Works out how many leading digits are missing from the separator position
/// 2. Borrows those digits from the reference location's own code and decodes
///    the padded candidate
/// 3. If the candidate's center is more than half a cell away from the
///    reference on either axis, moves it one cell towards the reference (never
///    past a pole)
/// 4. Re-encodes the corrected center at the candidate's length
///
/// # Example
/// ```
/// use plus_codes_rs::recover_nearest;
///
/// # fn main() -> Result<(), plus_codes_rs::PlusCodeError> {
/// assert_eq!(recover_nearest("9QCJ+2VX", 51.3852125, -1.217765625)?, "9C3W9QCJ+2VX");
/// // Near the south pole the nearest cell is not across the pole
/// assert_eq!(recover_nearest("XXXXXX+XX", -81.0, 0.0)?, "2CXXXXXX+XX");
/// # Ok(())
/// # }
/// ```
///
/// # Errors
///
/// - [`PlusCodeError::InvalidShortCode`] - the code is neither short nor full
/// - [`PlusCodeError::InvalidCoordinate`] - NaN or infinite reference location
pub fn recover_nearest(
    short_code: &str,
    latitude: f64,
    longitude: f64,
) -> Result<String, PlusCodeError> {
    if !is_short(short_code) {
        if is_full(short_code) {
            return Ok(short_code.to_string());
        }
        return Err(PlusCodeError::InvalidShortCode(short_code.to_string()));
    }
    check_finite(latitude, longitude)?;

    let reference_latitude = clip_latitude(latitude);
    let reference_longitude = normalize_longitude(longitude);
    let short_upper = short_code.to_ascii_uppercase();

    let separator = short_upper
        .find(SEPARATOR)
        .ok_or_else(|| PlusCodeError::InvalidShortCode(short_code.to_string()))?;
    let padding_length = SEPARATOR_POSITION - separator;
    // Height and width in degrees of the area covered by the missing digits
    let resolution = (ENCODING_BASE as f64).powi(2 - (padding_length / 2) as i32);
    let half_resolution = resolution / 2.0;

    let reference_code = encode(reference_latitude, reference_longitude, CODE_PRECISION_NORMAL)?;
    let candidate = format!("{}{}", &reference_code[..padding_length], short_upper);
    let area = decode(&candidate)?;

    let mut center_latitude = area.latitude_center();
    let mut center_longitude = area.longitude_center();

    if reference_latitude + half_resolution < center_latitude
        && center_latitude - resolution >= -LATITUDE_MAX
    {
        debug!(%candidate, resolution, "moving recovered code one cell south");
        center_latitude -= resolution;
    } else if reference_latitude - half_resolution > center_latitude
        && center_latitude + resolution <= LATITUDE_MAX
    {
        debug!(%candidate, resolution, "moving recovered code one cell north");
        center_latitude += resolution;
    }

    if reference_longitude + half_resolution < center_longitude {
        debug!(%candidate, resolution, "moving recovered code one cell west");
        center_longitude -= resolution;
    } else if reference_longitude - half_resolution > center_longitude {
        debug!(%candidate, resolution, "moving recovered code one cell east");
        center_longitude += resolution;
    }

    encode(center_latitude, center_longitude, area.code_length)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::shorten::shorten;

    #[test]
    fn test_recovery_near_south_pole() -> Result<(), PlusCodeError> {
        assert_eq!(recover_nearest("XXXXXX+XX", -81.0, 0.0)?, "2CXXXXXX+XX");
        Ok(())
    }

    #[test]
    fn test_recovery_near_north_pole() -> Result<(), PlusCodeError> {
        assert_eq!(recover_nearest("2222+22", 89.6, 0.0)?, "CFX22222+22");
        Ok(())
    }

    #[test]
    fn test_recovery_across_antimeridian() -> Result<(), PlusCodeError> {
        // The padded candidate sits at 179 east; the nearest match wraps to -180
        assert_eq!(recover_nearest("2222+22", 0.01, 179.99)?, "62G22222+22");
        Ok(())
    }

    #[test]
    fn test_recover_lowercase_short_code() -> Result<(), PlusCodeError> {
        assert_eq!(
            recover_nearest("fff4+w7fh", 47.474812, -0.544313)?,
            "8CVXFFF4+W7FH"
        );
        Ok(())
    }

    #[test]
    fn test_full_code_is_returned_unchanged() -> Result<(), PlusCodeError> {
        assert_eq!(recover_nearest("9C3W9QCJ+2VX", 0.0, 0.0)?, "9C3W9QCJ+2VX");
        assert_eq!(recover_nearest("8fwc2345+", 0.0, 0.0)?, "8fwc2345+");
        Ok(())
    }

    #[test]
    fn test_invalid_code_is_rejected() {
        assert_eq!(
            recover_nearest("WC2300+", 0.0, 0.0),
            Err(PlusCodeError::InvalidShortCode("WC2300+".to_string()))
        );
        assert!(recover_nearest("F2222222+", 0.0, 0.0).is_err());
    }

    #[test]
    fn test_shorten_then_recover() -> Result<(), PlusCodeError> {
        let cases: &[(&str, f64, f64)] = &[
            ("9C3W9QCJ+2VX", 51.3701125, -1.217765625),
            ("9C3W9QCJ+2VX", 51.3708675, -1.217765625),
            ("9C3W9QCJ+2VX", 51.3693575, -1.217765625),
            ("9C3W9QCJ+2VX", 51.3701125, -1.218520625),
            ("9C3W9QCJ+2VX", 51.3701125, -1.217010625),
            ("9C3W9QCJ+2VX", 51.3852125, -1.217765625),
            ("9C3W9QCJ+2VX", 51.3550125, -1.217765625),
            ("9C3W9QCJ+2VX", 51.3701125, -1.232865625),
            ("9C3W9QCJ+2VX", 51.3701125, -1.202665625),
            ("8FJFW222+", 42.899, 9.012),
            ("796RXG22+", 14.95125, -23.5001),
        ];
        for &(code, lat, lng) in cases {
            let short = shorten(code, lat, lng)?;
            assert_eq!(recover_nearest(&short, lat, lng)?, code, "via {}", short);
        }
        Ok(())
    }
}
