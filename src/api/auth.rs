// SPDX-License-Identifier: MPL-2.0
//! Login value types.

use crate::config::{MAX_PHONE_DIGITS, OTP_LENGTH};
use crate::error::{Error, Result};
use std::fmt;

/// Phone number as typed, without the dial code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Accepts 1 to 10 digits, ignoring surrounding whitespace.
    pub fn parse(input: &str) -> Result<Self> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(Error::InvalidInput("phone number is empty".to_string()));
        }
        if !trimmed.chars().all(|c| c.is_ascii_digit()) {
            return Err(Error::InvalidInput(format!(
                "phone number must contain digits only: {trimmed}"
            )));
        }
        if trimmed.len() > MAX_PHONE_DIGITS {
            return Err(Error::InvalidInput(format!(
                "phone number has more than {MAX_PHONE_DIGITS} digits"
            )));
        }
        Ok(Self(trimmed.to_string()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One-time password; non-digit characters are dropped on entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OtpCode(String);

impl OtpCode {
    pub fn parse(input: &str) -> Result<Self> {
        let digits: String = input.chars().filter(char::is_ascii_digit).collect();
        if digits.len() != OTP_LENGTH {
            return Err(Error::InvalidInput(format!(
                "OTP must be {OTP_LENGTH} digits, got {}",
                digits.len()
            )));
        }
        Ok(Self(digits))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phone_is_trimmed() {
        let phone = PhoneNumber::parse("  9876543210 ").expect("valid");
        assert_eq!(phone.as_str(), "9876543210");
        assert_eq!(phone.to_string(), "9876543210");
    }

    #[test]
    fn phone_rejects_bad_input() {
        assert!(matches!(PhoneNumber::parse(""), Err(Error::InvalidInput(_))));
        assert!(PhoneNumber::parse("98765-43210").is_err());
        assert!(PhoneNumber::parse("12345678901").is_err());
    }

    #[test]
    fn otp_strips_non_digits() {
        assert_eq!(OtpCode::parse("12 34-56").expect("valid").as_str(), "123456");
    }

    #[test]
    fn otp_requires_exact_length() {
        assert!(OtpCode::parse("12345").is_err());
        assert!(OtpCode::parse("1234567").is_err());
        assert!(OtpCode::parse("abcdef").is_err());
    }
}
