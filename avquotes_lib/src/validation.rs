use crate::error::AvQuotesError;

pub const MAX_SYMBOL_LENGTH: usize = 20;

/// Punctuation that appears in provider tickers: share classes (`BRK.B`),
/// exchange suffixes (`TSCO.LON`), index and FX prefixes (`^GSPC`, `EUR=X`).
const SYMBOL_PUNCTUATION: &[char] = &['.', '-', '^', '=', ':'];

/// Validate a ticker symbol typed by a user.
///
/// Trims surrounding whitespace and checks length and character set. Case is
/// left untouched; the provider expects the exact ticker.
pub fn validate_symbol(input: &str) -> Result<String, AvQuotesError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(AvQuotesError::InvalidInput("symbol is empty".to_string()));
    }
    if trimmed.len() > MAX_SYMBOL_LENGTH {
        return Err(AvQuotesError::InvalidInput(format!(
            "symbol exceeds maximum length of {} bytes",
            MAX_SYMBOL_LENGTH
        )));
    }
    if let Some(bad) = trimmed
        .chars()
        .find(|c| !c.is_ascii_alphanumeric() && !SYMBOL_PUNCTUATION.contains(c))
    {
        return Err(AvQuotesError::InvalidInput(format!(
            "symbol '{}' contains invalid character {:?}",
            trimmed, bad
        )));
    }
    Ok(trimmed.to_string())
}

/// Validate a bar limit (must be >= 1).
pub fn validate_limit(limit: usize) -> Result<usize, AvQuotesError> {
    if limit == 0 {
        return Err(AvQuotesError::InvalidInput(
            "limit must be >= 1".to_string(),
        ));
    }
    Ok(limit)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symbol_plain() {
        assert_eq!(validate_symbol("IBM").unwrap(), "IBM");
    }

    #[test]
    fn symbol_trimmed() {
        assert_eq!(validate_symbol("  AAPL\n").unwrap(), "AAPL");
    }

    #[test]
    fn symbol_case_preserved() {
        assert_eq!(validate_symbol("brk.b").unwrap(), "brk.b");
    }

    #[test]
    fn symbol_with_exchange_suffix() {
        assert_eq!(validate_symbol("TSCO.LON").unwrap(), "TSCO.LON");
        assert_eq!(validate_symbol("^GSPC").unwrap(), "^GSPC");
    }

    #[test]
    fn symbol_empty() {
        assert!(validate_symbol("").is_err());
        assert!(validate_symbol("   ").is_err());
    }

    #[test]
    fn symbol_too_long() {
        assert!(validate_symbol(&"A".repeat(MAX_SYMBOL_LENGTH + 1)).is_err());
        assert!(validate_symbol(&"A".repeat(MAX_SYMBOL_LENGTH)).is_ok());
    }

    #[test]
    fn symbol_rejects_query_characters() {
        for bad in ["IBM&apikey=x", "A B", "IBM?", "IBM/US", "ÄPPL"] {
            let err = validate_symbol(bad).unwrap_err();
            assert!(err.to_string().contains("Invalid input"), "{bad}");
        }
    }

    #[test]
    fn limit_zero() {
        assert!(validate_limit(0).is_err());
        assert_eq!(validate_limit(5).unwrap(), 5);
    }
}
