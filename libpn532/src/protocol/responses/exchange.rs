// libpn532/src/protocol/responses/exchange.rs

use crate::protocol::parser::byte_at;
use crate::Result;

/// Decode InDataExchange payload: Status [DataIn...]
///
/// The low six bits of the status byte carry the error code; bit 6 (MI) and
/// bit 7 (NAD) are informational and masked off.
pub fn decode_data_exchange(payload: &[u8]) -> Result<(u8, Vec<u8>)> {
    let status = byte_at(payload, 0)? & 0x3F;
    Ok((status, payload[1..].to_vec()))
}
