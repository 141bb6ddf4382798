use std::io;

use embedded_hal::blocking::i2c::{Write, WriteRead};
use rppal::i2c::I2c;
use tracing::warn;

pub mod microchip;
pub mod sensor;

/// Readiness of the bus endpoint a driver sits on.
pub trait BusReady {
    fn is_ready(&self) -> bool;
}

/// Linux `/dev/i2c-N` adapter. Opening never fails; an adapter that could not
/// be opened reports not ready and errors on every transfer.
pub struct LinuxI2c {
    bus: u8,
    inner: Option<I2c>,
}

impl LinuxI2c {
    pub fn open(bus: u8) -> Self {
        let inner = match I2c::with_bus(bus) {
            Ok(i2c) => Some(i2c),
            Err(e) => {
                warn!("failed to open i2c bus {bus}: {e}");
                None
            }
        };

        Self { bus, inner }
    }

    pub fn bus(&self) -> u8 {
        self.bus
    }

    fn inner(&mut self) -> Result<&mut I2c, rppal::i2c::Error> {
        self.inner
            .as_mut()
            .ok_or_else(|| rppal::i2c::Error::Io(io::ErrorKind::NotConnected.into()))
    }
}

impl BusReady for LinuxI2c {
    fn is_ready(&self) -> bool {
        self.inner.is_some()
    }
}

impl Write for LinuxI2c {
    type Error = rppal::i2c::Error;

    fn write(&mut self, address: u8, bytes: &[u8]) -> Result<(), Self::Error> {
        Write::write(self.inner()?, address, bytes)
    }
}

impl WriteRead for LinuxI2c {
    type Error = rppal::i2c::Error;

    fn write_read(
        &mut self,
        address: u8,
        bytes: &[u8],
        buffer: &mut [u8],
    ) -> Result<(), Self::Error> {
        WriteRead::write_read(self.inner()?, address, bytes, buffer)
    }
}
