use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::ValidationError;

/// Longest raw ticker accepted; covers exchange-suffixed forms like BRK.B
/// and share-class dashes, not arbitrary identifier strings.
const MAX_SYMBOL_LEN: usize = 10;

/// Normalized market ticker.
///
/// Screener input arrives as free text, so construction trims, uppercases,
/// and validates in one pass. Use [`Symbol::parse_list`] for the
/// comma-separated form the UI collects.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Symbol(String);

impl Symbol {
    /// Parse and normalize a single ticker to uppercase.
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let normalized = input.trim().to_ascii_uppercase();
        if normalized.is_empty() {
            return Err(ValidationError::EmptySymbol);
        }

        let len = normalized.chars().count();
        if len > MAX_SYMBOL_LEN {
            return Err(ValidationError::SymbolTooLong {
                len,
                max: MAX_SYMBOL_LEN,
            });
        }

        for (index, ch) in normalized.chars().enumerate() {
            match ch {
                ch if ch.is_ascii_alphabetic() => {}
                ch if index == 0 => return Err(ValidationError::SymbolInvalidStart { ch }),
                ch if ch.is_ascii_digit() || ch == '.' || ch == '-' => {}
                ch => return Err(ValidationError::SymbolInvalidChar { ch, index }),
            }
        }

        Ok(Self(normalized))
    }

    /// Split free-text comma-separated ticker input into validated symbols.
    ///
    /// Blank entries are dropped; invalid entries are kept aside in input
    /// order so callers can surface them as warnings instead of failing
    /// the whole screen.
    pub fn parse_list(input: &str) -> TickerList {
        let mut list = TickerList::default();
        for raw in input.split(',') {
            let trimmed = raw.trim();
            if trimmed.is_empty() {
                continue;
            }
            match Self::parse(trimmed) {
                Ok(symbol) => list.symbols.push(symbol),
                Err(_) => list.rejected.push(trimmed.to_owned()),
            }
        }
        list
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Parsed free-text ticker input.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TickerList {
    pub symbols: Vec<Symbol>,
    /// Raw entries that failed symbol validation, in input order.
    pub rejected: Vec<String>,
}

impl Display for Symbol {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<String> for Symbol {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Symbol> for String {
    fn from(value: Symbol) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_watchlist_entries() {
        let parsed = Symbol::parse(" sndl ").expect("symbol should parse");
        assert_eq!(parsed.as_str(), "SNDL");

        let suffixed = Symbol::parse("brk.b").expect("suffixed symbol should parse");
        assert_eq!(suffixed.as_str(), "BRK.B");
    }

    #[test]
    fn rejects_invalid_start() {
        let err = Symbol::parse(".SNDL").expect_err("must fail");
        assert!(matches!(err, ValidationError::SymbolInvalidStart { ch: '.' }));
    }

    #[test]
    fn rejects_invalid_chars() {
        let err = Symbol::parse("AMC$").expect_err("must fail");
        assert!(matches!(
            err,
            ValidationError::SymbolInvalidChar { ch: '$', index: 3 }
        ));
    }

    #[test]
    fn rejects_over_long_tickers() {
        let err = Symbol::parse("TOOLONGTICKER").expect_err("must fail");
        assert!(matches!(
            err,
            ValidationError::SymbolTooLong { len: 13, max: 10 }
        ));
    }

    #[test]
    fn splits_free_text_input_and_keeps_rejects_in_order() {
        let list = Symbol::parse_list(" sndl, NOK ,, bb$ig , 9zom , tlry ");

        let parsed: Vec<&str> = list.symbols.iter().map(Symbol::as_str).collect();
        assert_eq!(parsed, vec!["SNDL", "NOK", "TLRY"]);
        assert_eq!(
            list.rejected,
            vec![String::from("bb$ig"), String::from("9zom")]
        );
    }
}
