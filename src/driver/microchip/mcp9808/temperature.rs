//! Conversions between the ambient temperature register and scaled Celsius
//! (1/16 °C units).

use super::registers::temp::{ABS_MASK, SCALE, SIGN_BIT};
use crate::driver::sensor::SensorValue;

/// Decode a register value to a signed temperature in scaled Celsius.
/// Status flags in bits 13-15 are ignored.
pub fn decode(raw: u16) -> i32 {
    let magnitude = (raw & ABS_MASK) as i32;

    if raw & SIGN_BIT != 0 {
        // 12-bit 2s complement with the sign kept in its own bit
        -(1 + (magnitude ^ ABS_MASK as i32))
    } else {
        magnitude
    }
}

/// Encode a signed temperature in scaled Celsius to the register format.
pub fn encode(temp: i32) -> u16 {
    let mut raw = (temp & ABS_MASK as i32) as u16;

    if temp < 0 {
        raw |= SIGN_BIT;
    }

    raw
}

/// Split scaled Celsius into whole degrees and millionths. Both parts truncate
/// toward zero, so a negative reading has a negative fraction.
pub fn to_public(temp: i32) -> SensorValue {
    let integer = temp / SCALE;
    let rem = temp - integer * SCALE;

    SensorValue {
        integer,
        micro: rem * 1_000_000 / SCALE,
    }
}
