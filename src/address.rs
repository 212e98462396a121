use std::fmt;

use crate::errors::Error;

/// A 20-byte account or contract address.
///
/// Record ids and store keys use the lowercase `0x`-prefixed hex form
/// produced by [`Address::to_hex`] and `Display`. Comparisons are on the
/// raw bytes, so mixed-case input can never defeat an allowlist check.
///
/// # Examples
///
/// ```
/// use volt_holders::Address;
///
/// let addr = Address::from_hex("0x97a6e78c9208c21afaDa67e7E61d7ad27688eFd1").unwrap();
/// assert_eq!(addr.to_hex(), "0x97a6e78c9208c21afada67e7e61d7ad27688efd1");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Address([u8; 20]);

impl Address {
    /// The canonical zero address: mint source and burn sink, never a
    /// tracked holder.
    pub const ZERO: Address = Address([0u8; 20]);

    pub const fn new(bytes: [u8; 20]) -> Address {
        Address(bytes)
    }

    /// Wraps raw event bytes, which must be exactly 20 bytes long.
    pub fn from_slice(bytes: &[u8]) -> Result<Address, Error> {
        match bytes.try_into() {
            Ok(array) => Ok(Address(array)),
            Err(_) => Err(Error::InvalidAddress(hex::encode(bytes))),
        }
    }

    /// Parses a hex string, with or without the `0x` prefix, any case.
    pub fn from_hex(input: &str) -> Result<Address, Error> {
        let digits = input.strip_prefix("0x").unwrap_or(input);
        let bytes = hex::decode(digits).map_err(|_| Error::InvalidAddress(input.to_string()))?;
        Address::from_slice(&bytes).map_err(|_| Error::InvalidAddress(input.to_string()))
    }

    pub fn as_bytes(&self) -> &[u8; 20] {
        &self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == [0u8; 20]
    }

    /// Lowercase `0x`-prefixed hex, the record-id form.
    pub fn to_hex(&self) -> String {
        format!("0x{:x}", self)
    }
}

impl From<[u8; 20]> for Address {
    fn from(bytes: [u8; 20]) -> Address {
        Address(bytes)
    }
}

impl AsRef<[u8]> for Address {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("0x")?;
        write_lower_hex(&self.0, f)
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl fmt::LowerHex for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_lower_hex(&self.0, f)
    }
}

const HEX_DIGITS: &[u8; 16] = b"0123456789abcdef";

fn write_lower_hex(input: &[u8], mut w: impl fmt::Write) -> fmt::Result {
    for byte in input {
        w.write_char(HEX_DIGITS[(byte >> 4) as usize] as char)?;
        w.write_char(HEX_DIGITS[(byte & 0x0f) as usize] as char)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::Address;

    #[test]
    fn it_formats_lower_prefixed_hex() {
        let addr = Address::new([0xab; 20]);
        assert_eq!(addr.to_hex(), format!("0x{}", "ab".repeat(20)));
        assert_eq!(format!("{}", addr), addr.to_hex());
        assert_eq!(format!("{:?}", addr), addr.to_hex());
        assert_eq!(format!("{:x}", addr), "ab".repeat(20));
    }

    #[test]
    fn it_parses_any_case_and_optional_prefix() {
        let mixed = Address::from_hex("0x97a6e78c9208c21afaDa67e7E61d7ad27688eFd1").unwrap();
        let lower = Address::from_hex("97a6e78c9208c21afada67e7e61d7ad27688efd1").unwrap();
        assert_eq!(mixed, lower);
    }

    #[test]
    fn it_rejects_wrong_lengths() {
        assert!(Address::from_hex("0xabcd").is_err());
        assert!(Address::from_slice(&[0u8; 19]).is_err());
        assert!(Address::from_slice(&[0u8; 21]).is_err());
        assert!(Address::from_hex("0xzz6e78c9208c21afada67e7e61d7ad27688efd1").is_err());
    }

    #[test]
    fn zero_address_is_zero() {
        assert!(Address::ZERO.is_zero());
        assert!(!Address::new([1u8; 20]).is_zero());
        assert_eq!(
            Address::ZERO.to_hex(),
            "0x0000000000000000000000000000000000000000"
        );
    }
}
