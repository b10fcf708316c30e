pub mod constants;
mod decode;
mod encode;
mod recover;
mod shorten;
mod validation;

pub use constants::{
    CODE_ALPHABET, CODE_PRECISION_EXTRA, CODE_PRECISION_NORMAL, GRID_COLUMNS, GRID_ROWS,
    MAX_DIGIT_COUNT, PADDING_CHARACTER, PAIR_CODE_LENGTH, SEPARATOR, SEPARATOR_POSITION,
};
pub use decode::decode;
pub use encode::{encode, latitude_precision};
pub use recover::recover_nearest;
pub use shorten::shorten;
pub use validation::{is_full, is_padded, is_short, is_valid};
