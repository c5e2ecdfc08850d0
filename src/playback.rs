/*!
 * Cooperative playback scheduler.
 *
 * Drives a [`TimelineEngine`] in real time: while the engine is playing the
 * driver sleeps for the configured tick interval, advances the engine by one
 * tick and hands it to a redraw callback. Stop requests travel over a `watch`
 * channel and are polled ahead of the tick timer, so no tick is issued once a
 * stop has been requested for the running session.
 */

use log::{debug, trace};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;

use crate::timeline::TimelineEngine;

/// What the redraw callback wants to happen next
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickControl {
    Continue,
    Stop,
}

/// Why a playback run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackOutcome {
    /// The buffer was empty, so playback never started
    NotStarted,
    /// A stop was requested through a [`PlaybackHandle`]
    StopRequested,
    /// The redraw callback returned [`TickControl::Stop`]
    StoppedByCallback,
    /// The configured tick budget ran out
    TickBudgetExhausted,
}

/// Summary of a playback run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaybackReport {
    pub outcome: PlaybackOutcome,
    pub ticks: u64,
}

/// Cloneable handle used to stop a running playback from another task
#[derive(Debug, Clone)]
pub struct PlaybackHandle {
    stop_tx: Arc<watch::Sender<bool>>,
}

impl PlaybackHandle {
    /// Request a stop; takes effect before the next tick
    pub fn stop(&self) {
        self.stop_tx.send_replace(true);
    }

    pub fn is_stop_requested(&self) -> bool {
        *self.stop_tx.borrow()
    }
}

/// Real-time tick loop over a timeline engine
pub struct PlaybackDriver {
    tick_interval: Duration,
    max_ticks: Option<u64>,
    handle: PlaybackHandle,
    stop_rx: watch::Receiver<bool>,
}

impl PlaybackDriver {
    pub fn new(tick_interval: Duration) -> Self {
        let (stop_tx, stop_rx) = watch::channel(false);
        Self {
            tick_interval,
            max_ticks: None,
            handle: PlaybackHandle { stop_tx: Arc::new(stop_tx) },
            stop_rx,
        }
    }

    /// Limit the number of ticks a single run may issue
    pub fn with_max_ticks(mut self, max_ticks: u64) -> Self {
        self.max_ticks = Some(max_ticks);
        self
    }

    pub fn handle(&self) -> PlaybackHandle {
        self.handle.clone()
    }

    pub fn tick_interval(&self) -> Duration {
        self.tick_interval
    }

    /// Start the engine and tick it until a stop condition is met
    ///
    /// Stop requests made before this call belong to an earlier run and are
    /// cleared. The engine is left Stopped when the run ends.
    pub async fn run<F>(&mut self, engine: &mut TimelineEngine, mut on_tick: F) -> PlaybackReport
    where
        F: FnMut(&TimelineEngine) -> TickControl,
    {
        self.handle.stop_tx.send_replace(false);

        engine.start();
        if !engine.is_playing() {
            return PlaybackReport { outcome: PlaybackOutcome::NotStarted, ticks: 0 };
        }

        debug!("Playback started at {} ms, tick every {:?}", engine.position(), self.tick_interval);

        let mut ticks = 0u64;
        let outcome = loop {
            if self.max_ticks.is_some_and(|max| ticks >= max) {
                break PlaybackOutcome::TickBudgetExhausted;
            }

            tokio::select! {
                biased;
                // The driver owns a sender, so this only resolves on a stop request
                _ = self.stop_rx.wait_for(|stop| *stop) => {
                    break PlaybackOutcome::StopRequested;
                }
                _ = tokio::time::sleep(self.tick_interval) => {}
            }

            if self.handle.is_stop_requested() {
                break PlaybackOutcome::StopRequested;
            }

            engine.tick();
            ticks += 1;
            trace!("Tick {} -> {} ms", ticks, engine.position());

            if on_tick(engine) == TickControl::Stop {
                break PlaybackOutcome::StoppedByCallback;
            }
        };

        engine.stop();
        debug!("Playback ended after {} ticks: {:?}", ticks, outcome);
        PlaybackReport { outcome, ticks }
    }
}
