//! Display formatting for dashboard values.
//!
//! Handles f64 values with comma grouping and suffix notation. Pure string
//! work — no locale tables.

mod date;
mod num;

pub use date::{format_date_long, format_date_short};
pub use num::{
    format_crypto_amount, format_currency, format_large_number, format_percentage,
    format_percentage_with,
};
