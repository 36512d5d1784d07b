use rust_decimal::Decimal;

use crate::value::JsonValue;

// Three-tier classification: a literal without fraction or exponent markers
// becomes Integer when it fits i64; otherwise the literal is tried as a
// 96-bit decimal (28-29 significant digits, |value| < 7.9e28); anything left
// over becomes a double. Classification depends only on the literal text.
pub(crate) fn classify_literal(literal: &str, integral: bool) -> JsonValue {
    if integral {
        if let Ok(value) = literal.parse::<i64>() {
            return JsonValue::Integer(value);
        }
        if let Ok(value) = Decimal::from_str_exact(literal) {
            return JsonValue::Decimal(value);
        }
    } else if let Some(value) = decimal_from_literal(literal) {
        return JsonValue::Decimal(value);
    }
    // The f64 grammar is a superset of the JSON number grammar, so this parse
    // accepts every literal the scanner does; out-of-range magnitudes saturate
    // to an infinity or flush to zero.
    JsonValue::Float(literal.parse::<f64>().unwrap_or(f64::NAN))
}

fn decimal_from_literal(literal: &str) -> Option<Decimal> {
    match literal.find(['e', 'E']) {
        Some(idx) => {
            // rust_decimal's scientific form wants a bare exponent digit run.
            let mantissa = &literal[..idx];
            let exponent = literal[idx + 1..].trim_start_matches('+');
            Decimal::from_scientific(&format!("{mantissa}e{exponent}")).ok()
        }
        None => Decimal::from_str_exact(literal).ok(),
    }
}

pub(crate) fn format_integer(value: i64) -> String {
    let mut buffer = itoa::Buffer::new();
    buffer.format(value).to_string()
}

pub(crate) fn format_float(value: f64) -> String {
    if !value.is_finite() {
        return "null".to_string();
    }
    let mut buffer = ryu::Buffer::new();
    buffer.format(value).to_string()
}
