use crate::num::number::classify_literal;
use crate::options::ParseOptions;
use crate::value::{JsonValue, Object};
use crate::Result;

use super::cursor::Cursor;

pub(crate) struct Parser<'a> {
    cursor: Cursor<'a>,
    reject_duplicate_keys: bool,
    max_depth: usize,
    depth: usize,
}

impl<'a> Parser<'a> {
    pub(crate) fn new(input: &'a str, options: &ParseOptions) -> Self {
        Self {
            cursor: Cursor::new(input),
            reject_duplicate_keys: options.reject_duplicate_keys,
            max_depth: options.max_depth,
            depth: 0,
        }
    }

    pub(crate) fn parse_document(mut self) -> Result<JsonValue> {
        let value = self.parse_value()?;
        self.cursor.skip_whitespace();
        if !self.cursor.at_end() {
            return Err(self
                .cursor
                .error("Trailing characters after valid JSON value"));
        }
        Ok(value)
    }

    fn parse_value(&mut self) -> Result<JsonValue> {
        self.cursor.skip_whitespace();
        let Some(ch) = self.cursor.peek() else {
            return Err(self
                .cursor
                .error("Unexpected end of input while expecting a value"));
        };
        match ch {
            '{' => self.parse_object(),
            '[' => self.parse_array(),
            '"' => self.parse_string().map(JsonValue::String),
            't' => {
                self.cursor.expect_literal("true")?;
                Ok(JsonValue::Bool(true))
            }
            'f' => {
                self.cursor.expect_literal("false")?;
                Ok(JsonValue::Bool(false))
            }
            'n' => {
                self.cursor.expect_literal("null")?;
                Ok(JsonValue::Null)
            }
            '-' | '0'..='9' => self.parse_number(),
            other => Err(self
                .cursor
                .error(format!("Unexpected character '{other}' while parsing a value"))),
        }
    }

    fn descend(&mut self) -> Result<()> {
        self.depth += 1;
        if self.depth > self.max_depth {
            return Err(self.cursor.error("Recursion depth limit exceeded"));
        }
        Ok(())
    }

    fn parse_object(&mut self) -> Result<JsonValue> {
        self.descend()?;
        self.cursor.expect('{')?;
        self.cursor.skip_whitespace();
        let mut entries = Object::new();
        if self.cursor.try_consume('}') {
            self.depth -= 1;
            return Ok(JsonValue::Object(entries));
        }
        loop {
            self.cursor.skip_whitespace();
            if self.cursor.peek() != Some('"') {
                return Err(self
                    .cursor
                    .error("Object keys must be strings starting with '\"'"));
            }
            let key_offset = self.cursor.offset();
            let key = self.parse_string()?;
            if self.reject_duplicate_keys && entries.contains_key(&key) {
                return Err(self
                    .cursor
                    .error_at(key_offset, format!("Duplicate object key \"{key}\"")));
            }
            self.cursor.expect(':')?;
            let value = self.parse_value()?;
            // Last write wins; the key keeps its original position.
            entries.insert(key, value);
            self.cursor.skip_whitespace();
            if self.cursor.try_consume('}') {
                break;
            }
            self.cursor.expect(',')?;
        }
        self.depth -= 1;
        Ok(JsonValue::Object(entries))
    }

    fn parse_array(&mut self) -> Result<JsonValue> {
        self.descend()?;
        self.cursor.expect('[')?;
        self.cursor.skip_whitespace();
        let mut items = Vec::new();
        if self.cursor.try_consume(']') {
            self.depth -= 1;
            return Ok(JsonValue::Array(items));
        }
        loop {
            items.push(self.parse_value()?);
            self.cursor.skip_whitespace();
            if self.cursor.try_consume(']') {
                break;
            }
            self.cursor.expect(',')?;
        }
        self.depth -= 1;
        Ok(JsonValue::Array(items))
    }

    fn parse_string(&mut self) -> Result<String> {
        self.cursor.expect('"')?;
        let mut out = String::new();
        loop {
            let Some(ch) = self.cursor.advance() else {
                return Err(self.cursor.error("Unterminated string literal"));
            };
            match ch {
                '"' => return Ok(out),
                '\\' => {
                    let Some(escape) = self.cursor.advance() else {
                        return Err(self.cursor.error("Unterminated escape sequence in string"));
                    };
                    match escape {
                        '"' => out.push('"'),
                        '\\' => out.push('\\'),
                        '/' => out.push('/'),
                        'b' => out.push('\u{0008}'),
                        'f' => out.push('\u{000C}'),
                        'n' => out.push('\n'),
                        'r' => out.push('\r'),
                        't' => out.push('\t'),
                        'u' => out.push(self.parse_unicode_escape()?),
                        other => {
                            return Err(self
                                .cursor
                                .error(format!("Invalid escape character '\\{other}'")));
                        }
                    }
                }
                ch if (ch as u32) <= 0x1F => {
                    return Err(self.cursor.error("Unescaped control character in string"));
                }
                ch => out.push(ch),
            }
        }
    }

    // Rust strings hold Unicode scalar values, so a high surrogate escape must
    // be completed by a low surrogate escape and the pair becomes one scalar.
    fn parse_unicode_escape(&mut self) -> Result<char> {
        let unit = self.read_hex_unit()?;
        match unit {
            0xD800..=0xDBFF => {
                if !(self.cursor.try_consume('\\') && self.cursor.try_consume('u')) {
                    return Err(self.cursor.error("Unpaired surrogate in \\u escape"));
                }
                let low = self.read_hex_unit()?;
                if !(0xDC00..=0xDFFF).contains(&low) {
                    return Err(self.cursor.error("Unpaired surrogate in \\u escape"));
                }
                let scalar =
                    0x10000 + ((u32::from(unit) - 0xD800) << 10) + (u32::from(low) - 0xDC00);
                char::from_u32(scalar)
                    .ok_or_else(|| self.cursor.error("Unpaired surrogate in \\u escape"))
            }
            0xDC00..=0xDFFF => Err(self.cursor.error("Unpaired surrogate in \\u escape")),
            unit => char::from_u32(u32::from(unit))
                .ok_or_else(|| self.cursor.error("Invalid hex digit in \\u escape")),
        }
    }

    fn read_hex_unit(&mut self) -> Result<u16> {
        if self.cursor.remaining() < 4 {
            return Err(self.cursor.error("Incomplete \\u escape"));
        }
        let mut unit: u16 = 0;
        for _ in 0..4 {
            let Some(digit) = self.cursor.peek().and_then(|ch| ch.to_digit(16)) else {
                return Err(self.cursor.error("Invalid hex digit in \\u escape"));
            };
            self.cursor.advance();
            unit = (unit << 4) | digit as u16;
        }
        Ok(unit)
    }

    fn parse_number(&mut self) -> Result<JsonValue> {
        let start = self.cursor.offset();
        self.cursor.try_consume('-');
        match self.cursor.peek() {
            Some('0') => {
                self.cursor.advance();
                if matches!(self.cursor.peek(), Some('0'..='9')) {
                    return Err(self
                        .cursor
                        .error_at(start, "Numbers with leading zero are invalid"));
                }
            }
            Some('1'..='9') => {
                self.consume_digits();
            }
            _ => return Err(self.cursor.error("Expected digits")),
        }
        let mut integral = true;
        if self.cursor.try_consume('.') {
            integral = false;
            if !self.consume_digits() {
                return Err(self.cursor.error("Expected digits after decimal point"));
            }
        }
        if matches!(self.cursor.peek(), Some('e' | 'E')) {
            self.cursor.advance();
            integral = false;
            if !self.cursor.try_consume('+') {
                self.cursor.try_consume('-');
            }
            if !self.consume_digits() {
                return Err(self.cursor.error("Expected digits in exponent"));
            }
        }
        Ok(classify_literal(self.cursor.slice_from(start), integral))
    }

    fn consume_digits(&mut self) -> bool {
        let mut any = false;
        while matches!(self.cursor.peek(), Some('0'..='9')) {
            self.cursor.advance();
            any = true;
        }
        any
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use super::*;

    fn parse(input: &str) -> Result<JsonValue> {
        Parser::new(input, &ParseOptions::default()).parse_document()
    }

    #[rstest::rstest]
    fn test_parse_literals() {
        assert_eq!(parse("null").unwrap(), JsonValue::Null);
        assert_eq!(parse("true").unwrap(), JsonValue::Bool(true));
        assert_eq!(parse("false").unwrap(), JsonValue::Bool(false));
    }

    #[rstest::rstest]
    fn test_parse_empty_containers() {
        assert_eq!(parse("{}").unwrap(), JsonValue::Object(Object::new()));
        assert_eq!(parse("[]").unwrap(), JsonValue::Array(Vec::new()));
        assert_eq!(parse(" [ ] ").unwrap(), JsonValue::Array(Vec::new()));
    }

    #[rstest::rstest]
    fn test_parse_nested_structure_with_whitespace() {
        let value = parse("  { \"x\" : [1,2,3]  }  ").unwrap();
        let items = value["x"].as_array().unwrap();
        assert_eq!(
            items,
            &vec![
                JsonValue::Integer(1),
                JsonValue::Integer(2),
                JsonValue::Integer(3)
            ]
        );
    }

    #[rstest::rstest]
    fn test_duplicate_keys_last_write_wins() {
        let value = parse("{\"a\":1,\"a\":2}").unwrap();
        let entries = value.as_object().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries.get("a"), Some(&JsonValue::Integer(2)));
    }

    #[rstest::rstest]
    fn test_duplicate_keys_rejected_when_configured() {
        let options = ParseOptions::new().with_reject_duplicate_keys(true);
        let err = Parser::new("{\"a\":1,\"a\":2}", &options)
            .parse_document()
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Duplicate object key \"a\" at line 1, col 8"
        );
    }

    #[rstest::rstest]
    fn test_depth_limit() {
        let options = ParseOptions::new().with_max_depth(3);
        assert!(Parser::new("[[[1]]]", &options).parse_document().is_ok());
        let err = Parser::new("[[[[1]]]]", &options)
            .parse_document()
            .unwrap_err();
        assert!(err.to_string().contains("Recursion depth limit exceeded"));
    }

    #[rstest::rstest]
    fn test_unicode_escape_decoding() {
        assert_eq!(
            parse("\"\\u0041\"").unwrap(),
            JsonValue::String("A".to_string())
        );
        assert_eq!(
            parse("\"\\ud83d\\ude00\"").unwrap(),
            JsonValue::String("😀".to_string())
        );
    }

    #[rstest::rstest]
    #[case("\"\\ud800\"")]
    #[case("\"\\ud800x\"")]
    #[case("\"\\ud800\\n\"")]
    #[case("\"\\ud800\\u0041\"")]
    #[case("\"\\udc00\"")]
    fn test_unpaired_surrogates_rejected(#[case] input: &str) {
        let err = parse(input).unwrap_err();
        assert!(err.to_string().contains("Unpaired surrogate in \\u escape"));
    }

    #[rstest::rstest]
    fn test_number_classification_through_parser() {
        assert_eq!(parse("42").unwrap(), JsonValue::Integer(42));
        assert_eq!(
            parse("42.5").unwrap(),
            JsonValue::Decimal(Decimal::new(425, 1))
        );
        assert_eq!(parse("1e400").unwrap(), JsonValue::Float(f64::INFINITY));
    }

    #[rstest::rstest]
    fn test_leading_zero_rejected_at_number_start() {
        let err = parse("01").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Numbers with leading zero are invalid at line 1, col 1"
        );
        assert!(parse("0").is_ok());
        assert!(parse("0.5").is_ok());
    }

    #[rstest::rstest]
    fn test_trailing_characters_rejected() {
        let err = parse("truex").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Trailing characters after valid JSON value at line 1, col 5"
        );
    }

    #[rstest::rstest]
    fn test_trailing_comma_rejected_at_closing_brace() {
        let err = parse("{\"a\":1,}").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Object keys must be strings starting with '\"' at line 1, col 8"
        );
    }
}
