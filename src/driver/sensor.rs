//! Fetch-then-read contract shared by the sensor drivers.

use std::fmt;

/// A physical quantity a sensor can be asked about.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SensorChannel {
    /// Every channel the sensor provides. Only meaningful for fetching.
    All,
    AmbientTemp,
    DieTemp,
    Humidity,
    Pressure,
}

/// A fixed-point reading: `integer` plus `micro` millionths.
///
/// Both parts carry the sign of the reading, so -24.5 is stored as
/// `{ integer: -24, micro: -500000 }`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct SensorValue {
    pub integer: i32,
    pub micro: i32,
}

impl SensorValue {
    pub fn as_f64(&self) -> f64 {
        self.integer as f64 + self.micro as f64 / 1_000_000.0
    }
}

impl fmt::Display for SensorValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.integer < 0 || self.micro < 0 {
            "-"
        } else {
            ""
        };

        write!(
            f,
            "{sign}{}.{:06}",
            self.integer.unsigned_abs(),
            self.micro.unsigned_abs()
        )
    }
}

pub trait Sensor {
    type Error;

    /// Read the requested channel(s) from the device into the driver.
    fn sample_fetch(&mut self, channel: SensorChannel) -> Result<(), Self::Error>;

    /// Convert the last fetched sample for `channel`.
    fn channel_get(&self, channel: SensorChannel) -> Result<SensorValue, Self::Error>;
}
