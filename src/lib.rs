//! A recursive-descent JSON parser that builds an owned, order-preserving
//! value tree.
//!
//! ```
//! let value = fstjson::from_str(r#"{"a":1,"b":[true,false]}"#).unwrap();
//! assert_eq!(value["a"].as_f64(), Some(1.0));
//! assert_eq!(value["b"][1].as_bool(), Some(false));
//! ```

pub mod arena;
pub mod constants;
pub mod decode;
pub mod error;
pub mod num;
pub mod options;
pub mod text;
pub mod types;

use std::ffi::CStr;

pub use crate::error::{Error, ErrorKind, Location, Status};
pub use crate::options::{NumberOverflow, ParseOptions};
pub use crate::types::{Member, Stats, Value, ValueKind};

pub type Result<T> = std::result::Result<T, Error>;

pub fn from_slice(input: &[u8]) -> Result<Value> {
    from_slice_with_options(input, &ParseOptions::default())
}

pub fn from_slice_with_options(input: &[u8], options: &ParseOptions) -> Result<Value> {
    decode::from_slice(input, options)
}

pub fn from_str(input: &str) -> Result<Value> {
    from_str_with_options(input, &ParseOptions::default())
}

pub fn from_str_with_options(input: &str, options: &ParseOptions) -> Result<Value> {
    decode::from_slice(input.as_bytes(), options)
}

/// Parses a NUL-terminated buffer; input ends at the first NUL byte.
pub fn from_c_str(input: &CStr) -> Result<Value> {
    from_c_str_with_options(input, &ParseOptions::default())
}

pub fn from_c_str_with_options(input: &CStr, options: &ParseOptions) -> Result<Value> {
    decode::from_slice(input.to_bytes(), options)
}

/// Status-code form of [`from_slice`]: `out` holds the tree on [`Status::Ok`]
/// and is `Null` otherwise.
pub fn parse_into(out: &mut Value, input: &[u8]) -> Status {
    parse_into_with_options(out, input, &ParseOptions::default())
}

pub fn parse_into_with_options(out: &mut Value, input: &[u8], options: &ParseOptions) -> Status {
    decode::parse_into(out, input, options)
}

pub fn validate_slice(input: &[u8]) -> Result<()> {
    validate_slice_with_options(input, &ParseOptions::default())
}

pub fn validate_slice_with_options(input: &[u8], options: &ParseOptions) -> Result<()> {
    decode::validate_slice(input, options)
}
