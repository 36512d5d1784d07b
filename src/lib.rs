pub mod decode;
pub mod error;
mod num;
pub mod options;
pub mod value;

use std::io::Read;

pub use crate::error::{Error, ErrorKind, Location};
pub use crate::options::ParseOptions;
pub use crate::value::{JsonValue, Object};

pub type Result<T> = std::result::Result<T, Error>;

pub fn from_str(input: &str) -> Result<JsonValue> {
    from_str_with_options(input, &ParseOptions::default())
}

pub fn from_str_with_options(input: &str, options: &ParseOptions) -> Result<JsonValue> {
    decode::from_str(input, options)
}

pub fn from_slice(input: &[u8]) -> Result<JsonValue> {
    from_slice_with_options(input, &ParseOptions::default())
}

pub fn from_slice_with_options(input: &[u8], options: &ParseOptions) -> Result<JsonValue> {
    decode::from_slice(input, options)
}

pub fn from_reader<R: Read>(reader: R) -> Result<JsonValue> {
    from_reader_with_options(reader, &ParseOptions::default())
}

pub fn from_reader_with_options<R: Read>(reader: R, options: &ParseOptions) -> Result<JsonValue> {
    decode::from_reader(reader, options)
}

pub fn validate_str(input: &str) -> Result<()> {
    validate_str_with_options(input, &ParseOptions::default())
}

pub fn validate_str_with_options(input: &str, options: &ParseOptions) -> Result<()> {
    decode::validate_str(input, options)
}
