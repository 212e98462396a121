//! Per-address balances and a distinct-holder count for an ERC-20 style
//! token, maintained incrementally from decoded `Transfer` events.
//!
//! The crate is the accounting half of an indexing pipeline. A host is
//! expected to extract and decode the token's transfer logs, assign each
//! event an ordinal that is strictly increasing in canonical chain order,
//! and hand the events to [`BalanceLedger::apply`] together with a keyed
//! byte store implementing [`StateStore`]. The ledger keeps one
//! [`AddressBalance`](pb::volt::v1::AddressBalance) record per observed
//! address and one [`SystemInfo`](pb::volt::v1::SystemInfo) record per
//! token holding the number of addresses with a positive balance.
//!
//! Balances are floored at zero rather than allowed to go negative, since
//! the tracked ledger can undercount deposits that happened before
//! indexing started or through excluded contracts. Transfers touching a
//! custodial address (staking contracts, liquidity pools) are skipped
//! entirely, and the zero address is treated as mint source and burn sink
//! rather than a holder. Delivery is assumed at-least-once: a replayed
//! ordinal is recognized and dropped, so reapplying a committed batch
//! leaves the store unchanged.
//!
//! # Examples
//!
//! ```
//! use volt_holders::pb::volt::v1::{AddressBalance, SystemInfo, Transfer};
//! use volt_holders::store::{balance_key, system_key, ProtoStoreExt};
//! use volt_holders::{Address, BalanceLedger, MemoryStore};
//!
//! let token = Address::from_hex("0x34ef2cc892a88415e9f02b91bfa9c91fc0be6bd4")?;
//! let holder = Address::from_hex("0x52908400098527886e0f7030069857d2e4169ee7")?;
//!
//! // A mint of one whole token, as the host would deliver it.
//! let event = Transfer {
//!     evt_tx_hash: "0xdeadbeef".to_string(),
//!     evt_index: 0,
//!     evt_block_time: None,
//!     evt_block_number: 18_520_301,
//!     token: token.as_bytes().to_vec(),
//!     from: Address::ZERO.as_bytes().to_vec(),
//!     to: holder.as_bytes().to_vec(),
//!     value: "1000000000000000000".to_string(),
//!     ordinal: 1,
//! };
//!
//! let ledger = BalanceLedger::default();
//! let mut store = MemoryStore::new();
//! ledger.apply(&mut store, &event)?;
//!
//! let record = store
//!     .get_proto::<AddressBalance>(&balance_key(&holder))?
//!     .unwrap();
//! assert_eq!(record.balance, "1000000000000000000");
//!
//! let system = store.get_proto::<SystemInfo>(&system_key(&token))?.unwrap();
//! assert_eq!(system.user_count, 1);
//! # Ok::<(), volt_holders::Error>(())
//! ```

pub mod address;
pub mod errors;
pub mod ledger;
pub mod memory;
pub mod pb;
pub mod proto;
pub mod scalar;
pub mod store;

pub use crate::address::Address;
pub use crate::errors::Error;
pub use crate::ledger::BalanceLedger;
pub use crate::memory::MemoryStore;
pub use crate::scalar::BigInt;
pub use crate::store::{ProtoStoreExt, StateStore};
