// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Progress timer driving carousel auto-advance.
//!
//! The timer runs a background thread that reports wall-clock deltas at a
//! fixed interval. Each arming gets a new generation number so that ticks
//! already queued by a previous arming can be recognised and dropped.
//!
//! At most one worker thread is alive per timer. Cancelling, re-arming and
//! dropping the timer all stop the current worker and wait for it to exit,
//! so no tick is produced after any of those calls return.

use std::{
    sync::{
        Arc,
        mpsc::{self, RecvTimeoutError, Sender},
    },
    thread::{self, JoinHandle},
    time::{Duration, Instant},
};

use log::{debug, error};

/// Default interval between progress ticks.
pub(crate) const TICK_INTERVAL: Duration = Duration::from_millis(50);

/// One report from the timer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct TimerTick {
    pub(crate) generation: u64,
    pub(crate) elapsed_ms: f64,
}

/// Receives ticks. Returning `false` means nobody is listening any more and
/// the worker stops.
pub(crate) type TickSink = Arc<dyn Fn(TimerTick) -> bool + Send + Sync>;

struct Worker {
    // Dropping this wakes the worker and makes it exit.
    stop_tx: Sender<()>,
    handle: JoinHandle<()>,
}

pub(crate) struct ProgressTimer {
    interval: Duration,
    sink: TickSink,
    generation: u64,
    worker: Option<Worker>,
}

impl ProgressTimer {
    pub(crate) fn new(interval: Duration, sink: TickSink) -> Self {
        Self {
            interval,
            sink,
            generation: 0,
            worker: None,
        }
    }

    pub(crate) fn generation(&self) -> u64 {
        self.generation
    }

    #[cfg(test)]
    pub(crate) fn is_armed(&self) -> bool {
        self.worker.is_some()
    }

    /// Starts a new tick cycle, cancelling any cycle already running.
    pub(crate) fn arm(&mut self) {
        self.cancel();

        self.generation += 1;
        let generation = self.generation;
        let interval = self.interval;
        let sink = Arc::clone(&self.sink);
        let (stop_tx, stop_rx) = mpsc::channel::<()>();

        let handle = thread::spawn(move || {
            let mut last = Instant::now();
            loop {
                match stop_rx.recv_timeout(interval) {
                    Err(RecvTimeoutError::Timeout) => {}
                    _ => break,
                }

                let now = Instant::now();
                let elapsed_ms = now.duration_since(last).as_secs_f64() * 1000.0;
                last = now;

                if !sink(TimerTick {
                    generation,
                    elapsed_ms,
                }) {
                    break;
                }
            }
        });

        debug!("Progress timer armed, generation {}", generation);
        self.worker = Some(Worker { stop_tx, handle });
    }

    /// Stops the current tick cycle, if any, and waits for it to finish.
    pub(crate) fn cancel(&mut self) {
        if let Some(Worker { stop_tx, handle }) = self.worker.take() {
            drop(stop_tx);
            if handle.join().is_err() {
                error!("Progress timer worker panicked");
            }
            debug!("Progress timer cancelled, generation {}", self.generation);
        }
    }
}

impl Drop for ProgressTimer {
    fn drop(&mut self) {
        self.cancel();
    }
}
