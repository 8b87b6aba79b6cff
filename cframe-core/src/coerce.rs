/// Number coercion for arguments that arrive from a host as text
///
/// Hosts hand every block argument over as a string. These helpers turn such
/// strings into `f64` with the permissive host rules (anything unparseable is
/// NaN, blank is zero) and render results back to text.
use log::warn;
use nom::{
    branch::alt,
    bytes::complete::{tag, tag_no_case, take_while1},
    character::complete::{char, digit0, digit1, one_of},
    combinator::{all_consuming, map, map_res, opt, recognize},
    sequence::{pair, preceded, tuple},
    IResult,
};

/// Coerce a host string to a number.
///
/// Surrounding whitespace is ignored and blank input is `0`. Accepted forms
/// are decimal literals with optional sign, fraction and exponent, signed
/// `Infinity`, and unsigned `0x`/`0o`/`0b` integers. Everything else is NaN.
pub fn parse_number(input: &str) -> f64 {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return 0.0;
    }
    match all_consuming(number)(trimmed) {
        Ok((_, value)) => value,
        Err(_) => {
            warn!("`{}` is not a number, using NaN", input);
            f64::NAN
        }
    }
}

/// Coerce three arguments at once, e.g. the x, y, z of a block.
pub fn parse_triple(a: &str, b: &str, c: &str) -> (f64, f64, f64) {
    (parse_number(a), parse_number(b), parse_number(c))
}

/// Render a number the way hosts display it: integral values without a
/// fraction, `NaN`, `Infinity`, exponent form outside `[1e-6, 1e21)`.
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if value == 0.0 {
        // covers -0.0
        return "0".to_string();
    }
    let magnitude = value.abs();
    if (1e-6..1e21).contains(&magnitude) {
        format!("{}", value)
    } else {
        let text = format!("{:e}", value);
        match text.split_once('e') {
            Some((mantissa, exponent)) if !exponent.starts_with('-') => {
                format!("{}e+{}", mantissa, exponent)
            }
            _ => text,
        }
    }
}

fn number(input: &str) -> IResult<&str, f64> {
    alt((radix_integer, infinity, decimal))(input)
}

fn radix_integer(input: &str) -> IResult<&str, f64> {
    alt((
        map(
            preceded(tag_no_case("0x"), take_while1(|c: char| c.is_ascii_hexdigit())),
            |digits| fold_digits(digits, 16),
        ),
        map(
            preceded(tag_no_case("0o"), take_while1(|c: char| c.is_digit(8))),
            |digits| fold_digits(digits, 8),
        ),
        map(
            preceded(tag_no_case("0b"), take_while1(|c: char| c == '0' || c == '1')),
            |digits| fold_digits(digits, 2),
        ),
    ))(input)
}

/// Accumulate in `f64` so long literals lose precision instead of overflowing.
fn fold_digits(digits: &str, radix: u32) -> f64 {
    digits
        .chars()
        .filter_map(|c| c.to_digit(radix))
        .fold(0.0, |acc, d| acc * f64::from(radix) + f64::from(d))
}

fn infinity(input: &str) -> IResult<&str, f64> {
    map(pair(opt(one_of("+-")), tag("Infinity")), |(sign, _)| {
        if sign == Some('-') {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        }
    })(input)
}

fn decimal(input: &str) -> IResult<&str, f64> {
    map_res(
        recognize(tuple((
            opt(one_of("+-")),
            alt((
                recognize(pair(digit1, opt(pair(char('.'), digit0)))),
                recognize(pair(char('.'), digit1)),
            )),
            opt(tuple((one_of("eE"), opt(one_of("+-")), digit1))),
        ))),
        |text: &str| text.parse::<f64>(),
    )(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decimal_literals() {
        assert_eq!(parse_number("42"), 42.0);
        assert_eq!(parse_number("-1.5"), -1.5);
        assert_eq!(parse_number("+2"), 2.0);
        assert_eq!(parse_number(".5"), 0.5);
        assert_eq!(parse_number("5."), 5.0);
        assert_eq!(parse_number("1e3"), 1000.0);
        assert_eq!(parse_number("2.5E-2"), 0.025);
        assert_eq!(parse_number("  7  "), 7.0);
    }

    #[test]
    fn test_blank_is_zero() {
        assert_eq!(parse_number(""), 0.0);
        assert_eq!(parse_number("   \t"), 0.0);
    }

    #[test]
    fn test_radix_literals() {
        assert_eq!(parse_number("0x1F"), 31.0);
        assert_eq!(parse_number("0XfF"), 255.0);
        assert_eq!(parse_number("0o17"), 15.0);
        assert_eq!(parse_number("0b101"), 5.0);
        assert!(parse_number("-0x10").is_nan());
        assert!(parse_number("0x").is_nan());
    }

    #[test]
    fn test_infinity() {
        assert_eq!(parse_number("Infinity"), f64::INFINITY);
        assert_eq!(parse_number("+Infinity"), f64::INFINITY);
        assert_eq!(parse_number("-Infinity"), f64::NEG_INFINITY);
        assert!(parse_number("inf").is_nan());
        assert!(parse_number("infinity").is_nan());
    }

    #[test]
    fn test_garbage_is_nan() {
        assert!(parse_number("abc").is_nan());
        assert!(parse_number("12abc").is_nan());
        assert!(parse_number("1.2.3").is_nan());
        assert!(parse_number("NaN").is_nan());
        assert!(parse_number("-").is_nan());
        assert!(parse_number(".").is_nan());
        assert!(parse_number("1e").is_nan());
        assert!(parse_number("1 2").is_nan());
    }

    #[test]
    fn test_parse_triple() {
        let (x, y, z) = parse_triple("1", "oops", "");
        assert_eq!(x, 1.0);
        assert!(y.is_nan());
        assert_eq!(z, 0.0);
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(3.0), "3");
        assert_eq!(format_number(-0.25), "-0.25");
        assert_eq!(format_number(0.1), "0.1");
        assert_eq!(format_number(-0.0), "0");
        assert_eq!(format_number(f64::NAN), "NaN");
        assert_eq!(format_number(f64::INFINITY), "Infinity");
        assert_eq!(format_number(f64::NEG_INFINITY), "-Infinity");
        assert_eq!(format_number(1e21), "1e+21");
        assert_eq!(format_number(1.5e-7), "1.5e-7");
        assert_eq!(format_number(123456.0), "123456");
    }
}
