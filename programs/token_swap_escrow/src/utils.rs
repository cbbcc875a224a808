use anchor_lang::prelude::*;

use crate::errors::EscrowError;

/// Unwraps the IDL rendering of a byte-string constant, `b"<payload>"`,
/// returning the payload. Off-chain consumers use this to recover the PDA
/// seeds this crate exports; a constant missing from the IDL surfaces as
/// `None`.
pub fn extract_const_value(raw: Option<&str>) -> Result<&str> {
    raw.and_then(|value| value.strip_prefix("b\""))
        .and_then(|rest| rest.strip_suffix('"'))
        .ok_or_else(|| error!(EscrowError::InvalidConstantFormat))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{VAULT_ACCOUNT_SEED, VAULT_AUTHORITY_SEED};

    #[test]
    fn extracts_the_wrapped_payload() {
        assert_eq!(extract_const_value(Some("b\"hoge\"")).unwrap(), "hoge");
    }

    #[test]
    fn accepts_an_empty_payload() {
        assert_eq!(extract_const_value(Some("b\"\"")).unwrap(), "");
    }

    #[test]
    fn rejects_a_missing_constant() {
        assert!(extract_const_value(None).is_err());
    }

    #[test]
    fn rejects_an_empty_string() {
        assert!(extract_const_value(Some("")).is_err());
    }

    #[test]
    fn rejects_an_unterminated_literal() {
        assert!(extract_const_value(Some("b\"hoge")).is_err());
    }

    #[test]
    fn recovers_the_exported_seeds() {
        for seed in [VAULT_ACCOUNT_SEED, VAULT_AUTHORITY_SEED] {
            let rendered = format!("b\"{}\"", core::str::from_utf8(seed).unwrap());
            let decoded = extract_const_value(Some(&rendered)).unwrap();
            assert_eq!(decoded.as_bytes(), seed);
        }
    }
}
