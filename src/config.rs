use std::{env, time::Duration};

use anyhow::{bail, Context};
use mcp9808::driver::microchip::mcp9808::{Config, Resolution};
use num_traits::FromPrimitive;
use tracing::warn;

pub const BUS_VAR: &str = "MCP9808_I2C_BUS";
pub const ADDRESS_VAR: &str = "MCP9808_ADDRESS";
pub const RESOLUTION_VAR: &str = "MCP9808_RESOLUTION";
pub const INTERVAL_VAR: &str = "MCP9808_INTERVAL_MS";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollConfig {
    pub bus: u8,
    pub device: Config,
    pub interval: Duration,
}

impl Default for PollConfig {
    fn default() -> Self {
        Self {
            bus: 1,
            device: Config::default(),
            interval: Duration::from_secs(1),
        }
    }
}

impl PollConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let mut cfg = Self::default();

        if let Some(bus) = lookup(BUS_VAR) {
            cfg.bus = bus
                .trim()
                .parse()
                .with_context(|| format!("invalid {BUS_VAR} {bus:?}"))?;
        }

        if let Some(address) = lookup(ADDRESS_VAR) {
            cfg.device.address =
                parse_address(&address).with_context(|| format!("invalid {ADDRESS_VAR}"))?;
        }

        if let Some(resolution) = lookup(RESOLUTION_VAR) {
            let code: u8 = resolution
                .trim()
                .parse()
                .with_context(|| format!("invalid {RESOLUTION_VAR} {resolution:?}"))?;
            cfg.device.resolution = Resolution::from_u8(code)
                .with_context(|| format!("{RESOLUTION_VAR} must be 0..=3, got {code}"))?;
        }

        if let Some(interval) = lookup(INTERVAL_VAR) {
            let ms: u64 = interval
                .trim()
                .parse()
                .with_context(|| format!("invalid {INTERVAL_VAR} {interval:?}"))?;
            cfg.interval = Duration::from_millis(ms);
        }

        if cfg.interval < cfg.device.resolution.conversion_time() {
            warn!(
                "poll interval {:?} is shorter than the {:?} conversion time {:?}",
                cfg.interval,
                cfg.device.resolution,
                cfg.device.resolution.conversion_time()
            );
        }

        Ok(cfg)
    }
}

fn parse_address(s: &str) -> anyhow::Result<u8> {
    let s = s.trim();
    let address = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some(hex) => u8::from_str_radix(hex, 16),
        None => s.parse(),
    }
    .with_context(|| format!("{s:?} is not a number"))?;

    if address > 0x7F {
        bail!("{address:#04x} is not a 7-bit address");
    }

    Ok(address)
}
