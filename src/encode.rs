use crate::error::EncodeError;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

/// Scales a portfolio value to minor currency units (cents), rounding
/// half-up, and encodes the result as a big-endian unsigned 256-bit integer.
///
/// Negative input and values whose cents representation overflows are
/// rejected rather than wrapped.
pub fn encode_balance(value: Decimal) -> Result<[u8; 32], EncodeError> {
    if value < Decimal::ZERO {
        return Err(EncodeError::NegativeBalance(value));
    }
    let cents = value
        .checked_mul(Decimal::ONE_HUNDRED)
        .ok_or(EncodeError::Overflow(value))?
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_u128()
        .ok_or(EncodeError::Overflow(value))?;

    let mut bytes = [0u8; 32];
    bytes[16..].copy_from_slice(&cents.to_be_bytes());
    Ok(bytes)
}

/// Reads an encoded balance back for local display. Returns `None` when the
/// value is wider than the simulator can represent.
pub fn decode_uint256(bytes: &[u8; 32]) -> Option<u128> {
    if bytes[..16].iter().any(|&byte| byte != 0) {
        return None;
    }
    let low: [u8; 16] = bytes[16..].try_into().ok()?;
    Some(u128::from_be_bytes(low))
}
