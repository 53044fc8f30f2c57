//! Timed playback loop for the `play` command.

use nature_core::{AudioSink, PlayerSession, Result};
use std::future::Future;
use std::time::Duration;
use tokio::time::{interval, MissedTickBehavior};

/// Play `url` until `seconds` have elapsed or `shutdown` resolves.
///
/// `on_tick` runs after every counted second. The session is stopped before
/// returning.
pub async fn play_for<S, F>(
    session: &mut PlayerSession<S>,
    url: String,
    seconds: Option<u64>,
    shutdown: impl Future<Output = ()>,
    mut on_tick: F,
) -> Result<()>
where
    S: AudioSink,
    F: FnMut(&PlayerSession<S>),
{
    session.start(url).await?;

    let mut ticker = interval(Duration::from_secs(1));
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    // First tick completes immediately
    ticker.tick().await;

    tokio::pin!(shutdown);
    loop {
        tokio::select! {
            _ = ticker.tick() => {
                session.tick();
                on_tick(session);
                if seconds.is_some_and(|limit| session.elapsed() >= limit) {
                    break;
                }
            }
            () = &mut shutdown => {
                tracing::info!("Playback interrupted");
                break;
            }
        }
    }

    session.stop().await
}
