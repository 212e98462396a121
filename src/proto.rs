//! Protobuf helpers shared by the typed store layer and hosts that persist
//! or inspect records directly.

use prost::DecodeError;

/// Decodes a record from its stored wire bytes.
pub fn decode<T: Default + prost::Message>(buf: &[u8]) -> Result<T, DecodeError> {
    prost::Message::decode(buf)
}

/// Encodes a record into the bytes the store persists.
pub fn encode<M: prost::Message>(msg: &M) -> Vec<u8> {
    msg.encode_to_vec()
}
