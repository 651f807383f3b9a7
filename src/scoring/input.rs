use regex::Regex;
use std::sync::OnceLock;

use crate::models::{AirdropCheckError, Result};

pub const MISSING_INPUT_MESSAGE: &str = "Input is required";
pub const INVALID_INPUT_MESSAGE: &str =
    "Invalid input. Please provide a valid wallet address (0x...) or Farcaster FID (number)";

/// What a raw request string resolves to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckInput {
    Address(String),
    Fid(u64),
}

fn address_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^0x[0-9a-fA-F]{40}$").expect("address pattern compiles"))
}

fn fid_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^\d+$").expect("fid pattern compiles"))
}

pub fn classify(input: &str) -> Result<CheckInput> {
    if input.is_empty() {
        return Err(AirdropCheckError::InvalidInput(MISSING_INPUT_MESSAGE.to_string()));
    }

    if address_pattern().is_match(input) {
        return Ok(CheckInput::Address(input.to_string()));
    }

    if fid_pattern().is_match(input) {
        // Digit strings too large for an id are rejected like any other junk.
        if let Ok(fid) = input.parse::<u64>() {
            return Ok(CheckInput::Fid(fid));
        }
    }

    Err(AirdropCheckError::InvalidInput(INVALID_INPUT_MESSAGE.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_address() {
        let input = "0x742d35Cc6634C0532925a3b844Bc9e7595f6e842";
        assert_eq!(classify(input).unwrap(), CheckInput::Address(input.to_string()));
    }

    #[test]
    fn test_fid() {
        assert_eq!(classify("3").unwrap(), CheckInput::Fid(3));
        assert_eq!(classify("0042").unwrap(), CheckInput::Fid(42));
    }

    #[test]
    fn test_rejects_everything_else() {
        for input in [
            "vitalik.eth",
            "0x742d35Cc6634C0532925a3b844Bc9e7595f6e84",
            "0x742d35Cc6634C0532925a3b844Bc9e7595f6e8422",
            "0xZZ2d35Cc6634C0532925a3b844Bc9e7595f6e842",
            "12a",
            "-5",
            " 12",
            "99999999999999999999999",
        ] {
            let err = classify(input).unwrap_err();
            assert!(err.is_user_error(), "{} should be rejected", input);
            assert_eq!(err.user_message(), INVALID_INPUT_MESSAGE);
        }
    }

    #[test]
    fn test_empty_input() {
        let err = classify("").unwrap_err();
        assert_eq!(err.user_message(), MISSING_INPUT_MESSAGE);
    }
}
