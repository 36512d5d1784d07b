mod cursor;
mod parser;

use std::io::Read;

use crate::{Error, JsonValue, ParseOptions, Result};

pub fn from_str(input: &str, options: &ParseOptions) -> Result<JsonValue> {
    parser::Parser::new(input, options).parse_document()
}

pub fn from_slice(input: &[u8], options: &ParseOptions) -> Result<JsonValue> {
    let text =
        std::str::from_utf8(input).map_err(|err| Error::input(format!("invalid utf-8: {err}")))?;
    from_str(text, options)
}

pub fn from_reader<R: Read>(mut reader: R, options: &ParseOptions) -> Result<JsonValue> {
    let mut buf = String::new();
    reader
        .read_to_string(&mut buf)
        .map_err(|err| Error::input(format!("read failed: {err}")))?;
    from_str(&buf, options)
}

pub fn validate_str(input: &str, options: &ParseOptions) -> Result<()> {
    from_str(input, options).map(|_| ())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;

    #[rstest::rstest]
    fn test_from_slice_rejects_invalid_utf8() {
        let err = from_slice(&[0x22, 0xFF, 0x22], &ParseOptions::default()).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Input);
        assert!(err.to_string().starts_with("invalid utf-8:"));
        assert_eq!(err.location, None);
    }

    #[rstest::rstest]
    fn test_from_slice_accepts_valid_utf8() {
        let value = from_slice("[true]".as_bytes(), &ParseOptions::default()).unwrap();
        assert_eq!(value, JsonValue::Array(vec![JsonValue::Bool(true)]));
    }

    #[rstest::rstest]
    fn test_from_reader() {
        let value = from_reader("{\"a\": null}".as_bytes(), &ParseOptions::default()).unwrap();
        assert_eq!(value["a"], JsonValue::Null);
    }

    #[rstest::rstest]
    fn test_validate_str_discards_the_value() {
        assert!(validate_str("[1, 2, 3]", &ParseOptions::default()).is_ok());
        assert!(validate_str("[1, 2,", &ParseOptions::default()).is_err());
    }
}
