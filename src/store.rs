//! Interfaces between the ledger and the host platform's keyed store.
//!
//! The host owns storage: durability, transactions, and query serving all
//! live on its side of [`StateStore`]. The ledger only reads the latest
//! committed value of a key and upserts whole records back.

use prost::Message;

use crate::address::Address;
use crate::errors::Error;
use crate::proto;

/// Host-implemented keyed byte store.
///
/// Contract: `get_last` must observe every `set` issued earlier in the same
/// event (read-your-writes), and `ord` is the ordinal of the event
/// responsible for a write. Hosts that journal for undo can key their
/// journal on it; others may ignore it.
pub trait StateStore {
    /// Latest committed value under `key`, if any.
    fn get_last(&self, key: &str) -> Option<Vec<u8>>;

    /// Upserts `value` under `key` at ordinal `ord`.
    fn set(&mut self, ord: u64, key: String, value: Vec<u8>);
}

/// Typed protobuf access over any [`StateStore`].
pub trait ProtoStoreExt: StateStore {
    /// Decodes the record under `key`. `Ok(None)` means the key was never
    /// written; a present-but-undecodable value is an error the host must
    /// see, not an empty read.
    fn get_proto<T: Default + Message>(&self, key: &str) -> Result<Option<T>, Error> {
        match self.get_last(key) {
            Some(bytes) => proto::decode(&bytes).map(Some).map_err(|source| Error::Decode {
                key: key.to_string(),
                source,
            }),
            None => Ok(None),
        }
    }

    /// Encodes and upserts a record under `key`.
    fn set_proto<T: Message>(&mut self, ord: u64, key: String, value: &T) {
        self.set(ord, key, proto::encode(value));
    }
}

impl<S: StateStore + ?Sized> ProtoStoreExt for S {}

/// Key of the per-token `SystemInfo` record.
pub fn system_key(token: &Address) -> String {
    format!("system:{}", token)
}

/// Key of an address's `AddressBalance` record.
pub fn balance_key(address: &Address) -> String {
    format!("balance:{}", address)
}
