use crate::address::Address;
use crate::errors::Error;
use crate::scalar::BigInt;

pub mod volt {
    pub mod v1 {
        include!("volt.v1.rs");
    }
}

impl volt::v1::SystemInfo {
    /// Fresh record for a token contract never seen before.
    pub fn new(token: &Address) -> Self {
        Self {
            id: token.to_hex(),
            user_count: 0,
            last_ordinal: 0,
        }
    }
}

impl volt::v1::AddressBalance {
    /// Fresh zero-balance record for `owner`.
    pub fn new(owner: &Address) -> Self {
        Self {
            id: owner.to_hex(),
            owner: owner.as_bytes().to_vec(),
            balance: "0".to_string(),
        }
    }
}

impl volt::v1::Transfer {
    /// The emitting token contract.
    pub fn token_address(&self) -> Result<Address, Error> {
        Address::from_slice(&self.token)
    }

    pub fn sender(&self) -> Result<Address, Error> {
        Address::from_slice(&self.from)
    }

    pub fn receiver(&self) -> Result<Address, Error> {
        Address::from_slice(&self.to)
    }

    /// Transferred amount. Zero is legal; negative or malformed decimal
    /// strings mean the host decode layer broke its contract.
    pub fn amount(&self) -> Result<BigInt, Error> {
        let value = BigInt::from_decimal(&self.value)?;
        if value.is_negative() {
            return Err(Error::InvalidValue(self.value.clone()));
        }
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::volt::v1::{AddressBalance, SystemInfo, Transfer};
    use crate::address::Address;

    #[test]
    fn fresh_records_start_at_zero() {
        let token = Address::new([0x11u8; 20]);
        let system = SystemInfo::new(&token);
        assert_eq!(system.id, token.to_hex());
        assert_eq!(system.user_count, 0);
        assert_eq!(system.last_ordinal, 0);

        let owner = Address::new([0x22u8; 20]);
        let record = AddressBalance::new(&owner);
        assert_eq!(record.id, owner.to_hex());
        assert_eq!(record.owner, owner.as_bytes().to_vec());
        assert_eq!(record.balance, "0");
    }

    #[test]
    fn transfer_accessors_parse_event_fields() {
        let transfer = Transfer {
            token: vec![0x11u8; 20],
            from: vec![0x22u8; 20],
            to: vec![0x33u8; 20],
            value: "1500".to_string(),
            ..Default::default()
        };
        assert_eq!(transfer.token_address().unwrap(), Address::new([0x11u8; 20]));
        assert_eq!(transfer.sender().unwrap(), Address::new([0x22u8; 20]));
        assert_eq!(transfer.receiver().unwrap(), Address::new([0x33u8; 20]));
        assert_eq!(transfer.amount().unwrap().to_decimal(), "1500");
    }

    #[test]
    fn truncated_address_is_rejected() {
        let transfer = Transfer {
            from: vec![0x22u8; 19],
            ..Default::default()
        };
        assert!(transfer.sender().is_err());
    }

    #[test]
    fn negative_amount_is_rejected() {
        let transfer = Transfer {
            value: "-5".to_string(),
            ..Default::default()
        };
        assert!(transfer.amount().is_err());
    }
}
