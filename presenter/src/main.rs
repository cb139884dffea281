mod config;
mod driver;
mod error;
mod headless;

use std::{env, io};

use log::info;
use machine_learning::RngSource;
use tokio::signal;

use crate::{config::PresenterConfig, headless::LogPresenter};

#[tokio::main(flavor = "current_thread")]
async fn main() -> io::Result<()> {
    env_logger::init();

    let path = env::args().nth(1);
    let cfg = PresenterConfig::load(path.as_deref())?;
    info!(
        side = cfg.side,
        tick_ms = cfg.tick_ms,
        report_every = cfg.report_every;
        "starting training session"
    );

    let mut presenter = LogPresenter::new(cfg.report_every);
    let metrics = match cfg.seed {
        Some(seed) => {
            info!("seeding random source with {seed}");
            let source = RngSource::seeded(seed);
            driver::run(&cfg, source, &mut presenter, signal::ctrl_c()).await?
        }
        None => {
            let source = RngSource::from_entropy();
            driver::run(&cfg, source, &mut presenter, signal::ctrl_c()).await?
        }
    };

    presenter.report(&metrics);
    info!("wrapping up");

    Ok(())
}
