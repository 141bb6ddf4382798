use std::time::Duration;

use num_derive::{FromPrimitive, ToPrimitive};

pub const DEFAULT_ADDRESS: u8 = 0x18;

pub const CONFIG: u8 = 0x01;
pub const TEMP_AMBIENT: u8 = 0x05;
pub const RESOLUTION: u8 = 0x08;

pub mod temp {
    /// Units per degree Celsius in the ambient temperature register.
    pub const SCALE: i32 = 16;
    pub const SIGN_BIT: u16 = 1 << 12;
    pub const ABS_MASK: u16 = 0x0FFF;
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, FromPrimitive, ToPrimitive)]
#[repr(u8)]
pub enum Resolution {
    /// +0.5 °C
    Half = 0x00,

    /// +0.25 °C
    Quarter = 0x01,

    /// +0.125 °C
    Eighth = 0x02,

    /// +0.0625 °C, the power-on default
    Sixteenth = 0x03,
}

impl Resolution {
    pub fn code(self) -> u8 {
        self as u8
    }

    /// Typical time the sensor needs to complete one conversion.
    pub fn conversion_time(self) -> Duration {
        use Resolution::*;

        Duration::from_millis(match self {
            Half => 30,
            Quarter => 65,
            Eighth => 130,
            Sixteenth => 250,
        })
    }
}

impl Default for Resolution {
    fn default() -> Self {
        Resolution::Sixteenth
    }
}
