//! Driver for the Microchip MCP9808 digital temperature sensor.

use embedded_hal::blocking::i2c::{Write, WriteRead};
use thiserror::Error;
use tracing::{debug, error, trace};

use crate::driver::{
    sensor::{Sensor, SensorChannel, SensorValue},
    BusReady,
};

pub mod registers;
pub mod temperature;

pub use registers::Resolution;

#[derive(Debug, Error)]
pub enum Error<E> {
    #[error("i2c bus is not ready")]
    DeviceNotReady,
    #[error("could not set the resolution of the mcp9808")]
    InitializationFailed(#[source] E),
    #[error("channel {0:?} is not supported")]
    UnsupportedChannel(SensorChannel),
    #[error("could not read the ambient temperature register")]
    FetchFailed(#[source] E),
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Config {
    pub address: u8,
    pub resolution: Resolution,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            address: registers::DEFAULT_ADDRESS,
            resolution: Resolution::default(),
        }
    }
}

/// An initialized MCP9808. Constructed only through [`Mcp9808::init`].
pub struct Mcp9808<I2C> {
    i2c: I2C,
    config: Config,
    raw: u16,
}

impl<I2C, E> Mcp9808<I2C>
where
    I2C: Write<Error = E> + WriteRead<Error = E>,
{
    /// Check the bus and program the configured resolution.
    pub fn init(i2c: I2C, config: Config) -> Result<Self, Error<E>>
    where
        I2C: BusReady,
    {
        debug!("initializing mcp9808 at {:#04x}", config.address);

        if !i2c.is_ready() {
            error!("bus device is not ready");
            return Err(Error::DeviceNotReady);
        }

        let mut dev = Self { i2c, config, raw: 0 };

        debug!("setting resolution to {:?}", config.resolution);
        dev.write8(registers::RESOLUTION, config.resolution.code())
            .map_err(|e| {
                error!("could not set the resolution of the mcp9808");
                Error::InitializationFailed(e)
            })?;

        Ok(dev)
    }

    pub fn read16(&mut self, reg: u8) -> Result<u16, E> {
        let mut buf = [0u8; 2];
        self.i2c.write_read(self.config.address, &[reg], &mut buf)?;
        Ok(u16::from_be_bytes(buf))
    }

    pub fn write8(&mut self, reg: u8, val: u8) -> Result<(), E> {
        self.i2c.write(self.config.address, &[reg, val])
    }

    pub fn write16(&mut self, reg: u8, val: u16) -> Result<(), E> {
        let [hi, lo] = val.to_be_bytes();
        self.i2c.write(self.config.address, &[reg, hi, lo])
    }

    pub fn address(&self) -> u8 {
        self.config.address
    }

    pub fn resolution(&self) -> Resolution {
        self.config.resolution
    }

    /// Raw ambient temperature register from the last successful fetch.
    pub fn raw(&self) -> u16 {
        self.raw
    }

    pub fn release(self) -> I2C {
        self.i2c
    }
}

impl<I2C, E> Sensor for Mcp9808<I2C>
where
    I2C: Write<Error = E> + WriteRead<Error = E>,
{
    type Error = Error<E>;

    fn sample_fetch(&mut self, channel: SensorChannel) -> Result<(), Self::Error> {
        if !matches!(channel, SensorChannel::All | SensorChannel::AmbientTemp) {
            return Err(Error::UnsupportedChannel(channel));
        }

        let raw = self
            .read16(registers::TEMP_AMBIENT)
            .map_err(Error::FetchFailed)?;
        trace!("ambient temperature register = {raw:#06x}");

        self.raw = raw;
        Ok(())
    }

    fn channel_get(&self, channel: SensorChannel) -> Result<SensorValue, Self::Error> {
        if channel != SensorChannel::AmbientTemp {
            return Err(Error::UnsupportedChannel(channel));
        }

        Ok(temperature::to_public(temperature::decode(self.raw)))
    }
}
