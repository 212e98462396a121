use thiserror::Error;

/// Errors surfaced to the host platform. The crate performs no retries of
/// its own: an `Err` aborts the event being applied and the host decides
/// whether to retry it.
#[derive(Error, Debug)]
pub enum Error {
    /// The bytes stored under a record key do not decode as the expected
    /// record type. Either the store was corrupted out-of-band or another
    /// writer shares the key space.
    #[error("value under `{key}` is not a valid record: {source}")]
    Decode {
        key: String,
        source: prost::DecodeError,
    },

    /// An event field that must hold a 20-byte address did not.
    #[error("invalid address `{0}`: expected 20 bytes of hex")]
    InvalidAddress(String),

    /// An amount field was not a non-negative decimal integer.
    #[error("invalid amount `{0}`: expected a non-negative decimal integer")]
    InvalidValue(String),

    /// The host assigned no ordinal to the event. Ordinals must be strictly
    /// increasing starting from 1; zero marks a stream that never applied.
    #[error("transfer at tx `{tx_hash}` log {log_index} carries ordinal 0")]
    MissingOrdinal { tx_hash: String, log_index: u32 },
}
