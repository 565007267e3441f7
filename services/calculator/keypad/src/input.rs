use nom::IResult;
use nom::{
    character::complete::{char, digit0, digit1},
    combinator::{all_consuming, map_res, opt, recognize},
    sequence::{pair, tuple},
};

/// A single key press
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Key<'a> {
    Operand(f64),
    Symbol(&'a str),
}

fn parse_operand(i: &str) -> IResult<&str, f64> {
    let decimal = tuple((opt(char('-')), digit1, opt(pair(char('.'), digit0))));

    map_res(recognize(decimal), |digit_str: &str| digit_str.parse::<f64>())(i)
}

/// Words that are entirely a decimal number are operands, anything else is a symbol
pub fn parse_key(word: &str) -> Key<'_> {
    match all_consuming(parse_operand)(word) {
        Ok((_, operand)) => Key::Operand(operand),
        Err(_) => Key::Symbol(word),
    }
}

pub fn parse_line(line: &str) -> impl Iterator<Item = Key<'_>> {
    line.split_whitespace().map(parse_key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_operand() -> Result<(), Box<dyn std::error::Error>> {
        let (r1, v1) = parse_operand("442")?;
        let (r2, v2) = parse_operand("-34")?;
        let (r3, v3) = parse_operand("442.78")?;
        let (r4, v4) = parse_operand("7.×")?;

        assert_eq!(r1, "");
        assert_eq!(r2, "");
        assert_eq!(r3, "");
        assert_eq!(r4, "×");
        assert_eq!(v1, 442.);
        assert_eq!(v2, -34.);
        assert_eq!(v3, 442.78);
        assert_eq!(v4, 7.);
        assert!(parse_operand("π").is_err());
        Ok(())
    }

    #[test]
    fn test_parse_key() {
        assert_eq!(parse_key("12.5"), Key::Operand(12.5));
        assert_eq!(parse_key("×"), Key::Symbol("×"));
        assert_eq!(parse_key("e"), Key::Symbol("e"));
        assert_eq!(parse_key("2e"), Key::Symbol("2e"));
        assert_eq!(parse_key("-"), Key::Symbol("-"));
        assert_eq!(parse_key("inf"), Key::Symbol("inf"));
    }

    #[test]
    fn test_parse_line() {
        let keys: Vec<_> = parse_line("  3 × \t4.5\n= ").collect();

        assert_eq!(
            keys,
            vec![
                Key::Operand(3.),
                Key::Symbol("×"),
                Key::Operand(4.5),
                Key::Symbol("="),
            ]
        );
        assert_eq!(parse_line("   ").count(), 0);
    }
}
