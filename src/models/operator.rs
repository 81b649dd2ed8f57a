//! Comparison operator applied between the two version operands
use std::str::FromStr;
use std::fmt;

use anyhow::anyhow;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operator {
    Equal,
    NotEqual,
    GreaterThan,
    LessThan,
    GreaterThanOrEqual,
    LessThanOrEqual,
}

impl FromStr for Operator {
    type Err = anyhow::Error;

    fn from_str(input: &str) -> Result<Operator, Self::Err> {
        match input {
            "==" => Ok(Self::Equal),
            "!=" => Ok(Self::NotEqual),
            ">" => Ok(Self::GreaterThan),
            "<" => Ok(Self::LessThan),
            ">=" => Ok(Self::GreaterThanOrEqual),
            "<=" => Ok(Self::LessThanOrEqual),
            _ => Err(anyhow!(
                "Invalid operator '{}'. Available values: == != > < >= <=",
                input
            )),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Equal => write!(f, "=="),
            Self::NotEqual => write!(f, "!="),
            Self::GreaterThan => write!(f, ">"),
            Self::LessThan => write!(f, "<"),
            Self::GreaterThanOrEqual => write!(f, ">="),
            Self::LessThanOrEqual => write!(f, "<="),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_all_six_symbols() {
        assert_eq!("==".parse::<Operator>().unwrap(), Operator::Equal);
        assert_eq!("!=".parse::<Operator>().unwrap(), Operator::NotEqual);
        assert_eq!(">".parse::<Operator>().unwrap(), Operator::GreaterThan);
        assert_eq!("<".parse::<Operator>().unwrap(), Operator::LessThan);
        assert_eq!(">=".parse::<Operator>().unwrap(), Operator::GreaterThanOrEqual);
        assert_eq!("<=".parse::<Operator>().unwrap(), Operator::LessThanOrEqual);
    }

    #[test]
    fn test_rejects_unknown_tokens() {
        for token in ["<>", "=>", "=", "", "eq", ">>"] {
            let err = token.parse::<Operator>().unwrap_err();
            assert!(err.to_string().contains("== != > < >= <="));
        }
    }

    #[test]
    fn test_display_round_trips() {
        for op in [
            Operator::Equal,
            Operator::NotEqual,
            Operator::GreaterThan,
            Operator::LessThan,
            Operator::GreaterThanOrEqual,
            Operator::LessThanOrEqual,
        ] {
            assert_eq!(op.to_string().parse::<Operator>().unwrap(), op);
        }
    }
}
