use std::thread::JoinHandle;

use anyhow::Context;
use mcp9808::driver::{
    microchip::mcp9808::Mcp9808,
    sensor::{Sensor, SensorChannel, SensorValue},
    LinuxI2c,
};
use tracing::{debug, trace};

use crate::config::PollConfig;

#[derive(Debug, Clone, Copy)]
pub enum Event {
    Reading(SensorValue),
}

/// Fetch then read the ambient temperature every `interval` until `stop_rx`
/// fires or disconnects. The first driver error ends the thread.
pub fn run<S>(
    sensor: &mut S,
    cfg: &PollConfig,
    stop_rx: &flume::Receiver<()>,
    evt_tx: &flume::Sender<Event>,
) -> anyhow::Result<()>
where
    S: Sensor,
    S::Error: std::error::Error + Send + Sync + 'static,
{
    loop {
        sensor
            .sample_fetch(SensorChannel::AmbientTemp)
            .context("sample fetch failed")?;

        let temp = sensor
            .channel_get(SensorChannel::AmbientTemp)
            .context("channel get failed")?;
        trace!("read {temp}");

        if evt_tx.send(Event::Reading(temp)).is_err() {
            break;
        }

        match stop_rx.recv_timeout(cfg.interval) {
            Ok(()) | Err(flume::RecvTimeoutError::Disconnected) => break,
            Err(flume::RecvTimeoutError::Timeout) => {}
        }
    }

    Ok(())
}

pub fn spawn_thread(
    cfg: PollConfig,
    stop_rx: flume::Receiver<()>,
    evt_tx: flume::Sender<Event>,
) -> JoinHandle<anyhow::Result<()>> {
    std::thread::spawn(move || {
        let i2c = LinuxI2c::open(cfg.bus);
        let mut mcp = Mcp9808::init(i2c, cfg.device)
            .with_context(|| format!("failed to initialize mcp9808 on i2c bus {}", cfg.bus))?;
        debug!(
            "initialized mcp9808 at {:#04x}, resolution = {:?}",
            mcp.address(),
            mcp.resolution()
        );

        run(&mut mcp, &cfg, &stop_rx, &evt_tx)
    })
}
