mod convert;
mod tables;

pub use convert::{
    can_convert, convert, format_quantity, normalize_ingredient, normalize_unit,
    parse_ingredient_line, parse_quantity,
};
pub use tables::{is_count_unit, volume_factor, weight_factor};
