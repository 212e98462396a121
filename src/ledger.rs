//! Balance and holder-count accounting over decoded transfer events.

use std::collections::BTreeSet;

use hex_literal::hex;

use crate::address::Address;
use crate::errors::Error;
use crate::pb::volt::v1::{AddressBalance, SystemInfo, Transfer, Transfers};
use crate::scalar::BigInt;
use crate::store::{balance_key, system_key, ProtoStoreExt, StateStore};

/// xVOLT staking contract.
const XVOLT_STAKING: [u8; 20] = hex!("97a6e78c9208c21afada67e7e61d7ad27688efd1");
/// WFUSE/VOLT liquidity pair.
const WFUSE_VOLT_PAIR: [u8; 20] = hex!("a670b12f8485aa379e99cf097017785b6aca5968");
/// FUSD/VOLT liquidity pair.
const FUSD_VOLT_PAIR: [u8; 20] = hex!("4e6b54f8dee787b16d8cdba4f759342b19239c2c");

/// Applies transfer events to the host store, maintaining one
/// `AddressBalance` record per observed address and the token's
/// `SystemInfo` record counting addresses with a positive balance.
///
/// Tokens parked in custodial contracts (staking, liquidity pools) remain
/// economically owned by the depositing user, so a transfer touching a
/// custodial address on either side is skipped entirely: crediting the
/// contract or debiting the user would misattribute ownership.
///
/// The ledger itself is stateless across events; everything it maintains
/// lives in the store behind [`StateStore`].
pub struct BalanceLedger {
    custodial: BTreeSet<Address>,
}

impl BalanceLedger {
    /// Ledger with a caller-provided custodial allowlist.
    pub fn new<I>(custodial: I) -> BalanceLedger
    where
        I: IntoIterator<Item = Address>,
    {
        BalanceLedger {
            custodial: custodial.into_iter().collect(),
        }
    }

    /// Whether `address` is excluded from balance effects.
    pub fn is_custodial(&self, address: &Address) -> bool {
        self.custodial.contains(address)
    }

    /// Applies one transfer: debit the sender, credit the receiver, adjust
    /// the holder count on zero crossings.
    ///
    /// Ordinals must be assigned by the host strictly increasing from 1 in
    /// canonical chain order (block, then transaction, then log index). An
    /// ordinal at or below the last applied one is treated as an
    /// at-least-once redelivery and skipped, so replaying a committed event
    /// cannot corrupt the holder count.
    ///
    /// Errors mean the decode layer or the store broke its contract; the
    /// event is left unapplied for the host to retry.
    pub fn apply<S: StateStore>(&self, store: &mut S, transfer: &Transfer) -> Result<(), Error> {
        let token = transfer.token_address()?;
        let from = transfer.sender()?;
        let to = transfer.receiver()?;
        let value = transfer.amount()?;
        if transfer.ordinal == 0 {
            return Err(Error::MissingOrdinal {
                tx_hash: transfer.evt_tx_hash.clone(),
                log_index: transfer.evt_index,
            });
        }

        if self.is_custodial(&from) || self.is_custodial(&to) {
            log::debug!(
                "transfer {}:{} touches a custodial address, skipped",
                transfer.evt_tx_hash,
                transfer.evt_index
            );
            return Ok(());
        }

        let skey = system_key(&token);
        let mut system = match store.get_proto::<SystemInfo>(&skey)? {
            Some(system) => system,
            None => {
                let system = SystemInfo::new(&token);
                store.set_proto(transfer.ordinal, skey.clone(), &system);
                system
            }
        };

        if transfer.ordinal <= system.last_ordinal {
            log::debug!(
                "ordinal {} already applied to {} (last {}), skipped",
                transfer.ordinal,
                system.id,
                system.last_ordinal
            );
            return Ok(());
        }
        system.last_ordinal = transfer.ordinal;

        self.apply_delta(store, &skey, &mut system, &from, -value.clone(), transfer.ordinal)?;
        self.apply_delta(store, &skey, &mut system, &to, value, transfer.ordinal)?;
        Ok(())
    }

    /// Applies a decoded batch in order, stopping at the first error.
    pub fn apply_all<S: StateStore>(
        &self,
        store: &mut S,
        transfers: &Transfers,
    ) -> Result<(), Error> {
        for transfer in &transfers.transfers {
            self.apply(store, transfer)?;
        }
        Ok(())
    }

    /// One side of a transfer: load-or-create the balance record, add
    /// `delta` floored at zero, move the holder count on zero crossings,
    /// then persist the system record followed by the balance record.
    ///
    /// The zero address is mint source and burn sink, not a holder; its
    /// side is dropped without touching the store.
    fn apply_delta<S: StateStore>(
        &self,
        store: &mut S,
        skey: &str,
        system: &mut SystemInfo,
        address: &Address,
        delta: BigInt,
        ord: u64,
    ) -> Result<(), Error> {
        if address.is_zero() {
            return Ok(());
        }

        let bkey = balance_key(address);
        let mut record = match store.get_proto::<AddressBalance>(&bkey)? {
            Some(record) => record,
            None => {
                let record = AddressBalance::new(address);
                store.set_proto(ord, bkey.clone(), &record);
                record
            }
        };

        let old = BigInt::from_decimal(&record.balance)?;
        let sum = old.clone() + delta;
        let new = if sum.is_negative() {
            // Undercounted deposits (custodial exclusions, pre-tracking
            // history) can make a debit exceed the tracked balance; the
            // floor keeps the invariant instead of failing the stream.
            log::debug!("balance of {} would go negative, floored at zero", record.id);
            BigInt::zero()
        } else {
            sum
        };

        if old.is_zero() && new.is_positive() {
            system.user_count += 1;
        }
        if new.is_zero() && old.is_positive() {
            system.user_count = system.user_count.saturating_sub(1);
        }

        record.balance = new.to_decimal();
        store.set_proto(ord, skey.to_string(), system);
        store.set_proto(ord, bkey, &record);
        Ok(())
    }
}

impl Default for BalanceLedger {
    /// Allowlist of the VOLT deployment on Fuse: the xVOLT staking
    /// contract plus the WFUSE/VOLT and FUSD/VOLT liquidity pairs.
    fn default() -> BalanceLedger {
        BalanceLedger::new([
            Address::new(XVOLT_STAKING),
            Address::new(WFUSE_VOLT_PAIR),
            Address::new(FUSD_VOLT_PAIR),
        ])
    }
}
