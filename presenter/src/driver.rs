use std::io;

use log::{info, warn};
use machine_learning::{Presenter, RandomSource, TrainingLoop, TrainingMetrics};
use tokio::time::{self, MissedTickBehavior};

use crate::config::PresenterConfig;

/// Steps a fresh training loop once per tick until `quit` resolves or the configured amount of
/// steps is reached.
///
/// # Arguments
/// * `cfg` - The session's configuration.
/// * `source` - The random source for the training loop.
/// * `presenter` - Receives every completed step.
/// * `quit` - The quit signal, it takes precedence over a pending tick.
///
/// # Returns
/// The session's final metrics.
///
/// # Errors
/// Whatever error `quit` resolves to.
pub async fn run<S, P, Q>(
    cfg: &PresenterConfig,
    source: S,
    presenter: &mut P,
    quit: Q,
) -> io::Result<TrainingMetrics>
where
    S: RandomSource,
    P: Presenter,
    Q: Future<Output = io::Result<()>>,
{
    let mut training = TrainingLoop::new(cfg.side, cfg.sampling(), source);

    let mut ticker = time::interval(cfg.tick());
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    tokio::pin!(quit);

    let mut ticks = 0;
    loop {
        tokio::select! {
            biased;

            ret = &mut quit => {
                ret?;
                warn!("received quit signal after {ticks} steps");
                break;
            }
            _ = ticker.tick() => {
                training.tick(presenter);
                ticks += 1;

                if cfg.steps.is_some_and(|steps| ticks >= steps.get()) {
                    info!("completed {ticks} steps");
                    break;
                }
            }
        }
    }

    Ok(training.metrics().clone())
}
