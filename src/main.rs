use anyhow::Context;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod config;
mod poll;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .pretty()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cfg = config::PollConfig::from_env().context("failed to load configuration")?;
    info!("polling mcp9808 on i2c bus {} every {:?}", cfg.bus, cfg.interval);

    let (stop_tx, stop_rx) = flume::bounded(1);
    let (evt_tx, evt_rx) = flume::bounded(256);

    ctrlc::set_handler(move || {
        info!("received ctrl+c, exiting");
        let _ = stop_tx.try_send(());
    })?;

    let poll_join = poll::spawn_thread(cfg, stop_rx, evt_tx);

    // ends once the poll thread drops its sender
    for evt in evt_rx.iter() {
        match evt {
            poll::Event::Reading(temp) => info!("Temperature: {temp}"),
        }
    }

    poll_join.join().unwrap()?;

    info!("exit");

    Ok(())
}
