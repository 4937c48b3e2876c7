use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AddressError {
    #[error("address must start with 0x")]
    MissingPrefix,
    #[error("address must be 40 hex characters, got {0}")]
    BadLength(usize),
    #[error("address contains non-hex characters")]
    NotHex,
}

/// Validate a wallet address and normalize it to lowercase `0x` form.
pub fn normalize_address(input: &str) -> Result<String, AddressError> {
    let trimmed = input.trim();
    let hex = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .ok_or(AddressError::MissingPrefix)?;
    if hex.len() != 40 {
        return Err(AddressError::BadLength(hex.len()));
    }
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(AddressError::NotHex);
    }
    Ok(format!("0x{}", hex.to_ascii_lowercase()))
}

/// Session state for the connected wallet. Address possession is the only
/// authentication; there is no signing and no transaction submission.
#[derive(Debug, Default)]
pub struct WalletSession {
    address: Option<String>,
}

impl WalletSession {
    pub fn connect(&mut self, input: &str) -> Result<String, AddressError> {
        let address = normalize_address(input)?;
        self.address = Some(address.clone());
        Ok(address)
    }

    pub fn disconnect(&mut self) {
        self.address = None;
    }

    pub fn address(&self) -> Option<&str> {
        self.address.as_deref()
    }

    pub fn is_connected(&self) -> bool {
        self.address.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_checksummed_address() {
        let normalized = normalize_address("0xD127d434266eBF4CB4F861071ebA50A799A23d9d").unwrap();
        assert_eq!(normalized, "0xd127d434266ebf4cb4f861071eba50a799a23d9d");
    }

    #[test]
    fn test_normalize_trims_whitespace() {
        let normalized = normalize_address("  0Xd127d434266ebf4cb4f861071eba50a799a23d9d ");
        assert!(normalized.is_ok());
    }

    #[test]
    fn test_rejects_bad_input() {
        assert_eq!(
            normalize_address("d127d434266ebf4cb4f861071eba50a799a23d9d"),
            Err(AddressError::MissingPrefix)
        );
        assert_eq!(normalize_address("0x1234"), Err(AddressError::BadLength(4)));
        assert_eq!(
            normalize_address("0xZ127d434266ebf4cb4f861071eba50a799a23d9d"),
            Err(AddressError::NotHex)
        );
    }

    #[test]
    fn test_session_lifecycle() {
        let mut session = WalletSession::default();
        assert!(!session.is_connected());

        session
            .connect("0xD127d434266eBF4CB4F861071ebA50A799A23d9d")
            .unwrap();
        assert!(session.is_connected());
        assert_eq!(
            session.address(),
            Some("0xd127d434266ebf4cb4f861071eba50a799a23d9d")
        );

        session.disconnect();
        assert!(!session.is_connected());
        assert!(session.address().is_none());
    }

    #[test]
    fn test_failed_connect_leaves_session_untouched() {
        let mut session = WalletSession::default();
        assert!(session.connect("nope").is_err());
        assert!(!session.is_connected());
    }
}
