use crate::coord::{check_finite, clip_latitude, normalize_longitude};
use crate::error::PlusCodeError;
use crate::index::constants::{
    ENCODING_BASE, FINAL_LAT_PRECISION, FINAL_LNG_PRECISION, GRID_CODE_LENGTH, GRID_COLUMNS,
    GRID_ROWS, LATITUDE_MAX, LONGITUDE_MAX, MAX_DIGIT_COUNT, PADDING_CHARACTER, PAIR_CODE_LENGTH,
    SEPARATOR, SEPARATOR_POSITION, digit_char,
};

/// Encodes a location into a Plus Code of the requested length.
///
/// The latitude is clipped to -90..=90 and the longitude normalized to
/// -180..180. Lengths above 15 produce the 15-digit code.
///
/// # Process
///
/// 1. Shifts both coordinates into positive ranges and scales them to integers
///    at the finest grid resolution (rounded before truncating, so values such
///    as `80.0099999999` land in the right cell)
/// 2. Extracts five grid digits (`row * 4 + col`) when more than ten digits are
///    requested, otherwise drops the grid precision
/// 3. Extracts five latitude/longitude digit pairs in base 20
/// 4. Inserts the separator after the eighth digit and truncates or pads
///
/// # Example
/// ```
/// use plus_codes_rs::encode;
///
/// # fn main() -> Result<(), plus_codes_rs::PlusCodeError> {
/// assert_eq!(encode(20.375, 2.775, 6)?, "7FG49Q00+");
/// assert_eq!(encode(47.0000625, 8.0000625, 10)?, "8FVC2222+22");
/// # Ok(())
/// # }
/// ```
///
/// # Errors
///
/// - [`PlusCodeError::InvalidCodeLength`] - length below 2, or odd and below 10
/// - [`PlusCodeError::InvalidCoordinate`] - NaN or infinite input
pub fn encode(latitude: f64, longitude: f64, code_length: usize) -> Result<String, PlusCodeError> {
    if code_length < 2 || (code_length < PAIR_CODE_LENGTH && code_length % 2 == 1) {
        return Err(PlusCodeError::InvalidCodeLength(code_length));
    }
    check_finite(latitude, longitude)?;

    let code_length = code_length.min(MAX_DIGIT_COUNT);

    let mut latitude = clip_latitude(latitude);
    let longitude = normalize_longitude(longitude);
    // The top edge is exclusive, so the pole itself belongs to the cell below it
    if latitude == LATITUDE_MAX {
        latitude -= latitude_precision(code_length);
    }

    let mut lat_val = to_fixed_point(latitude + LATITUDE_MAX, FINAL_LAT_PRECISION);
    let mut lng_val = to_fixed_point(longitude + LONGITUDE_MAX, FINAL_LNG_PRECISION);

    // Digits are produced least significant first and reversed at the end
    let mut reversed: Vec<char> = Vec::with_capacity(MAX_DIGIT_COUNT);

    if code_length > PAIR_CODE_LENGTH {
        for _ in 0..GRID_CODE_LENGTH {
            let lat_digit = lat_val % GRID_ROWS;
            let lng_digit = lng_val % GRID_COLUMNS;
            reversed.push(digit_char(lat_digit * GRID_COLUMNS + lng_digit));
            lat_val /= GRID_ROWS;
            lng_val /= GRID_COLUMNS;
        }
    } else {
        lat_val /= GRID_ROWS.pow(GRID_CODE_LENGTH as u32);
        lng_val /= GRID_COLUMNS.pow(GRID_CODE_LENGTH as u32);
    }

    for _ in 0..PAIR_CODE_LENGTH / 2 {
        reversed.push(digit_char(lng_val % ENCODING_BASE));
        reversed.push(digit_char(lat_val % ENCODING_BASE));
        lat_val /= ENCODING_BASE;
        lng_val /= ENCODING_BASE;
    }

    let digits: String = reversed.into_iter().rev().collect();

    let mut code = String::with_capacity(MAX_DIGIT_COUNT + 1);
    if code_length >= SEPARATOR_POSITION {
        code.push_str(&digits[..SEPARATOR_POSITION]);
        code.push(SEPARATOR);
        code.push_str(&digits[SEPARATOR_POSITION..code_length]);
    } else {
        code.push_str(&digits[..code_length]);
        code.extend(std::iter::repeat_n(
            PADDING_CHARACTER,
            SEPARATOR_POSITION - code_length,
        ));
        code.push(SEPARATOR);
    }

    Ok(code)
}

/// Returns the height in degrees of a cell for the given code length.
///
/// Lengths up to 10 have equal latitude and longitude precision. Beyond that
/// the grid has five rows per step, so latitude precision shrinks by 5.
/// Lengths above 15 give the 15-digit precision.
pub fn latitude_precision(code_length: usize) -> f64 {
    let code_length = code_length.min(MAX_DIGIT_COUNT);
    if code_length <= PAIR_CODE_LENGTH {
        let exponent = (2.0 - code_length as f64 / 2.0).floor() as i32;
        return (ENCODING_BASE as f64).powi(exponent);
    }
    (ENCODING_BASE as f64).powi(-3) / (GRID_ROWS as f64).powi((code_length - PAIR_CODE_LENGTH) as i32)
}

/// Scales a non-negative degree value to an integer multiple of the finest resolution.
fn to_fixed_point(degrees: f64, precision: i64) -> i64 {
    ((degrees * precision as f64 * 1e6).round() / 1e6).floor() as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    // latitude, longitude, length, expected code
    const ENCODING_CASES: &[(f64, f64, usize, &str)] = &[
        (20.375, 2.775, 6, "7FG49Q00+"),
        (20.3700625, 2.7821875, 10, "7FG49QCJ+2V"),
        (20.3701125, 2.782234375, 11, "7FG49QCJ+2VX"),
        (20.3701135, 2.78223535156, 13, "7FG49QCJ+2VXGJ"),
        (47.0000625, 8.0000625, 10, "8FVC2222+22"),
        (-41.2730625, 174.7859375, 10, "4VCPPQGP+Q9"),
        (0.5, -179.5, 4, "62G20000+"),
        (-89.5, -179.5, 4, "22220000+"),
        (20.5, 2.5, 4, "7FG40000+"),
        (-89.9999375, -179.9999375, 10, "22222222+22"),
        (0.5, 179.5, 4, "6VGX0000+"),
        (1.0, 1.0, 11, "6FH32222+222"),
        (90.0, 1.0, 4, "CFX30000+"),
        (92.0, 1.0, 4, "CFX30000+"),
        (1.0, 180.0, 4, "62H20000+"),
        (1.0, 181.0, 4, "62H30000+"),
        (90.0, 1.0, 10, "CFX3X2X2+X2"),
        (1.2, 3.4, 10, "6FH56C22+22"),
        (37.539669125, -122.375069724, 15, "849VGJQF+VX7QR3J"),
        (37.539669125, -122.375069724, 16, "849VGJQF+VX7QR3J"),
        (37.539669125, -122.375069724, 100, "849VGJQF+VX7QR3J"),
        (35.6, 3.033, 10, "8F75J22M+26"),
        (-48.71, 142.78, 8, "4R347QRJ+"),
        (-70.0, 163.7, 8, "3V252P22+"),
        (-2.804, 7.003, 13, "6F9952W3+C6222"),
        (13.9, 164.88, 12, "7V56WV2J+2222"),
        (-13.23, 172.77, 8, "5VRJQQCC+"),
        (40.6, 129.7, 8, "8QGFJP22+"),
        (-52.166, 13.694, 14, "3FVMRMMV+JJ2222"),
        (-14.0, 106.9, 6, "5PR82W00+"),
        (70.3, -87.64, 13, "C62J8926+22222"),
        (66.89, -106.0, 10, "95RPV2R2+22"),
        (2.5, -64.23, 11, "67JQGQ2C+222"),
        (-56.7, -47.2, 14, "38MJ8R22+222222"),
        (-34.45, -93.719, 6, "46Q8H700+"),
        (-35.849, -93.75, 12, "46P85722+C222"),
        (65.748, 24.316, 12, "9GQ6P8X8+6C22"),
        (-57.32, 130.43, 12, "3QJGMCJJ+2222"),
        (17.6, -44.4, 6, "789QJJ00+"),
        (-27.6, -104.8, 6, "554QC600+"),
        (41.87, -145.59, 13, "83HPVCC6+22222"),
        (-4.542, 148.638, 13, "6R7CFJ5Q+66222"),
        (-37.014, -159.936, 10, "43J2X3P7+CJ"),
        (-57.25, 125.49, 15, "3QJ7QF2R+2222222"),
        (48.89, -80.52, 13, "86WXVFRJ+22222"),
        (53.66, 170.97, 14, "9V5GMX6C+222222"),
        (0.49, -76.97, 15, "67G5F2RJ+2222222"),
        (40.44, -36.7, 12, "89G5C8R2+2222"),
        (58.73, 69.95, 8, "9JCFPXJ2+"),
        (16.179, 150.075, 12, "7R8G53HG+J222"),
        (-55.574, -70.061, 12, "37PFCWGQ+CJ22"),
        (76.1, -82.5, 15, "C68V4G22+2222222"),
        (58.66, 149.17, 10, "9RCFM56C+22"),
        (-67.2, 48.6, 6, "3H4CRJ00+"),
        (-5.6, -54.5, 14, "6867CG22+222222"),
        (-34.0, 145.5, 14, "4RR72G22+222222"),
        (-34.2, 66.4, 12, "4JQ8RC22+2222"),
        (17.8, -108.5, 6, "759HRG00+"),
        (10.734, -168.294, 10, "722HPPM4+JC"),
        (-28.732, 54.32, 8, "5H3P789C+"),
        (64.1, 107.9, 12, "9PP94W22+2222"),
        (79.7525, 6.9623, 8, "CFF8QX36+"),
        (-63.6449, -25.1475, 8, "398P9V43+"),
        (35.019, 148.827, 11, "8R7C2R9G+JR2"),
        (71.132, -98.584, 15, "C6334CJ8+RC22222"),
        (53.38, -51.34, 12, "985C9MJ6+2222"),
        (-1.2, 170.2, 12, "6VCGR622+2222"),
        (50.2, -162.8, 11, "922V6622+222"),
        (-25.798, -59.812, 10, "5862652Q+R6"),
        (81.654, -162.422, 14, "C2HVMH3H+J62222"),
        (-75.7, -35.4, 8, "29P68J22+"),
        (67.2, 115.1, 11, "9PVQ6422+222"),
        (-78.137, -42.995, 12, "28HVV274+6222"),
        (-56.3, 114.5, 11, "3PMPPG22+222"),
        (10.767, -62.787, 13, "772VQ687+R6222"),
        (-19.212, 107.423, 10, "5PG9QCQF+66"),
        (21.192, -45.145, 15, "78HP5VR4+R222222"),
        (16.701, 148.648, 14, "7R8CPJ2X+C62222"),
        (52.25, -77.45, 15, "97447H22+2222222"),
        (-68.54504, -62.81725, 11, "373VF53M+X4J"),
        (76.7, -86.172, 12, "C68MPR2H+2622"),
        (-6.2, 96.6, 13, "6M5RRJ22+22222"),
        (59.32, -157.21, 12, "93F48QCR+2222"),
        (29.7, 39.6, 12, "7GXXPJ22+2222"),
        (-18.32, 96.397, 10, "5MHRM9JW+2R"),
        (-30.3, 76.5, 11, "4JXRPG22+222"),
        (50.342, -112.534, 15, "95298FR8+RC22222"),
        (80.0100000001, 58.57, 15, "CHGW2H6C+2222222"),
        (80.0099999999, 58.57, 15, "CHGW2H5C+X2RRRRR"),
        (-80.0099999999, 58.57, 15, "2HFWXHRC+2222222"),
        (-80.0100000001, 58.57, 15, "2HFWXHQC+X2RRRRR"),
        (47.00000008, 8.00022229, 15, "8FVC2222+235235C"),
        (68.3500147997595, 113.625636875353, 15, "9PWM9J2G+272FWJV"),
        (38.1176000887231, 165.441989844555, 15, "8VC74C9R+2QX445C"),
        (-28.1217794010122, -154.066811473758, 15, "5337VWHM+77PR2GR"),
    ];

    #[test]
    fn test_encoding_table() -> Result<(), PlusCodeError> {
        for &(lat, lng, length, expected) in ENCODING_CASES {
            assert_eq!(
                encode(lat, lng, length)?,
                expected,
                "encode({}, {}, {})",
                lat,
                lng,
                length
            );
        }
        Ok(())
    }

    #[test]
    fn test_invalid_code_lengths() {
        assert_eq!(encode(1.0, 1.0, 0), Err(PlusCodeError::InvalidCodeLength(0)));
        assert_eq!(encode(1.0, 1.0, 1), Err(PlusCodeError::InvalidCodeLength(1)));
        assert_eq!(encode(1.0, 1.0, 7), Err(PlusCodeError::InvalidCodeLength(7)));
        assert_eq!(encode(1.0, 1.0, 9), Err(PlusCodeError::InvalidCodeLength(9)));
        assert!(encode(1.0, 1.0, 11).is_ok());
        assert!(encode(1.0, 1.0, 2).is_ok());
    }

    #[test]
    fn test_clipping() -> Result<(), PlusCodeError> {
        assert_eq!(encode(-90.0, 5.0, 10)?, encode(-91.0, 5.0, 10)?);
        assert_eq!(encode(90.0, 5.0, 10)?, encode(91.0, 5.0, 10)?);
        assert_eq!(encode(5.0, 175.0, 10)?, encode(5.0, -185.0, 10)?);
        assert_eq!(encode(5.0, 175.0, 10)?, encode(5.0, -905.0, 10)?);
        assert_eq!(encode(5.0, -175.0, 10)?, encode(5.0, 905.0, 10)?);
        Ok(())
    }

    #[test]
    fn test_non_finite_coordinates() {
        assert!(matches!(
            encode(f64::NAN, 0.0, 10),
            Err(PlusCodeError::InvalidCoordinate { .. })
        ));
        assert!(matches!(
            encode(0.0, f64::NEG_INFINITY, 10),
            Err(PlusCodeError::InvalidCoordinate { .. })
        ));
    }

    #[test]
    fn test_short_lengths_are_padded() -> Result<(), PlusCodeError> {
        let lat = 47.474812;
        let lng = -0.544313;
        assert_eq!(encode(lat, lng, 2)?, "8C000000+");
        assert_eq!(encode(lat, lng, 4)?, "8CVX0000+");
        assert_eq!(encode(lat, lng, 6)?, "8CVXFF00+");
        assert_eq!(encode(lat, lng, 8)?, "8CVXFFF4+");
        assert_eq!(encode(lat, lng, 12)?, "8CVXFFF4+W7FH");
        Ok(())
    }

    #[test]
    fn test_latitude_precision() {
        assert_eq!(latitude_precision(2), 20.0);
        assert_eq!(latitude_precision(4), 1.0);
        assert!((latitude_precision(10) - 0.000125).abs() < 1e-15);
        assert!((latitude_precision(11) - 0.000025).abs() < 1e-15);
    }

    #[test]
    fn test_latitude_precision_is_capped_at_fifteen_digits() {
        assert_eq!(latitude_precision(16), latitude_precision(15));
        assert_eq!(latitude_precision(100), latitude_precision(15));
    }
}
