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

//! MPV-backed media engine and event processing.
//!
//! The worker bridges the carousel's request based interface and MPV's event
//! stream. A play request is only answered once MPV reports that the file
//! loaded, or that it could not be played.
//!
//! # Architecture
//!
//! The engine operates using a dual-channel communication pattern:
//! 1. **Command Channel**: Receives [`MediaPlayerCommand`]s from the
//!    carousel (play, pause, stop).
//! 2. **Event Channel**: Sends [`AppEvent::MediaSettled`] results and errors
//!    back to the application.
//!
//! If MPV cannot be initialised the worker keeps running, answering every
//! play request with [`MediaError::Unavailable`] so that the carousel carries
//! on without video.

use anyhow::{Context, Result};
use log::{debug, error, warn};
use std::{
    sync::mpsc::{Receiver, Sender, TryRecvError},
    thread,
};

use crate::{carousel::media::MediaError, events::AppEvent};

/// Which slide's media MPV currently holds.
///
/// MPV reports file events without saying which `loadfile` they belong to.
/// It starts files in request order, so counting issued loads against
/// `StartFile` events tells whether later events are for the newest file.
#[derive(Debug, Default)]
struct Slot {
    /// Slide whose media is loaded, or being loaded.
    loaded: Option<usize>,
    /// Slide whose play request has not been answered yet.
    pending: Option<usize>,
    loads_issued: u64,
    starts_seen: u64,
}

impl Slot {
    fn load_issued(&mut self, index: usize) {
        self.loads_issued += 1;
        self.loaded = Some(index);
        self.pending = Some(index);
    }

    fn file_started(&mut self) {
        self.starts_seen = (self.starts_seen + 1).min(self.loads_issued);
    }

    fn is_current(&self) -> bool {
        self.starts_seen == self.loads_issued
    }

    /// The request answered by a `FileLoaded` event, if it is for the newest
    /// file.
    fn file_loaded(&mut self) -> Option<usize> {
        if self.is_current() {
            self.pending.take()
        } else {
            None
        }
    }

    /// The request answered by a failed `EndFile` event, if it is for the
    /// newest file.
    fn file_failed(&mut self) -> Option<usize> {
        if !self.is_current() {
            return None;
        }
        self.loaded = None;
        self.pending.take()
    }

    fn clear(&mut self) {
        self.loaded = None;
        self.pending = None;
    }
}

#[derive(Debug)]
pub(crate) enum MediaPlayerCommand {
    Play { index: usize, src: String },
    Pause(usize),
    Stop,
    Shutdown,
}

/// Spawns the media worker thread to process playback commands.
///
/// # Arguments
///
/// * `command_rx` - The receiving end of the player command channel.
/// * `event_tx` - The channel used to report play results and errors.
pub(crate) fn spawn_player_worker(command_rx: Receiver<MediaPlayerCommand>, event_tx: Sender<AppEvent>) {
    thread::spawn(move || {
        if let Err(e) = media_player_worker(&command_rx, &event_tx) {
            error!("MPV worker failure: {:?}", e);
            let _ = event_tx.send(AppEvent::Error(format!("Video playback unavailable: {}", e)));
            reject_commands(&command_rx, &event_tx, &e.to_string());
        }
    });
}

/// The primary execution loop for the media backend.
///
/// Returns once the player handle is dropped or asks for shutdown.
///
/// # Errors
///
/// Returns an error if the MPV context fails to initialize or if the event
/// channel is closed.
fn media_player_worker(command_rx: &Receiver<MediaPlayerCommand>, event_tx: &Sender<AppEvent>) -> Result<()> {
    let mut handler = (|| {
        let mut builder = mpv::MpvHandlerBuilder::new().context("Failed to create MPV builder")?;
        builder
            .set_option("keep-open", "yes")
            .context("Failed to set keep-open")?;
        builder
            .set_option("loop-file", "inf")
            .context("Failed to set loop-file")?;
        builder.build().context("Failed to build MPV handler")
    })()?;

    let mut slot = Slot::default();

    while process_commands(&mut handler, command_rx, event_tx, &mut slot)? {
        process_mpv_events(&mut handler, event_tx, &mut slot)?;
    }

    debug!("MPV worker shutting down");
    Ok(())
}

/// Drains and executes all pending commands.
///
/// Returns `false` when the worker should stop.
fn process_commands(
    handler: &mut mpv::MpvHandler,
    command_rx: &Receiver<MediaPlayerCommand>,
    event_tx: &Sender<AppEvent>,
    slot: &mut Slot,
) -> Result<bool> {
    loop {
        let command = match command_rx.try_recv() {
            Ok(command) => command,
            Err(TryRecvError::Empty) => return Ok(true),
            Err(TryRecvError::Disconnected) => return Ok(false),
        };

        match command {
            MediaPlayerCommand::Play { index, src } => {
                // A newer request supersedes one that never settled.
                if let Some(previous) = slot.pending.take() {
                    settle(event_tx, previous, Err(MediaError::Rejected("superseded".to_string())))?;
                }

                match handler.command(&["loadfile", &src, "replace"]) {
                    Ok(()) => {
                        slot.load_issued(index);
                        if let Err(e) = handler.set_property("pause", false) {
                            warn!("Failed to unpause video for slide {}: {:?}", index, e);
                        }
                    }
                    Err(e) => {
                        slot.loaded = None;
                        settle(event_tx, index, Err(MediaError::Rejected(format!("{:?}", e))))?
                    }
                }
            }
            // Another slide's media may have replaced this one already.
            MediaPlayerCommand::Pause(index) if slot.loaded == Some(index) => {
                debug!("Pausing video for slide {}", index);
                if let Err(e) = handler.set_property("pause", true) {
                    warn!("Failed to pause video for slide {}: {:?}", index, e);
                }
            }
            MediaPlayerCommand::Pause(_) => {}
            MediaPlayerCommand::Stop => {
                slot.clear();
                if let Err(e) = handler.command(&["stop"]) {
                    warn!("Failed to stop video: {:?}", e);
                }
            }
            MediaPlayerCommand::Shutdown => return Ok(false),
        }
    }
}

/// Polls for MPV events and settles the pending play request.
///
/// This function waits for up to 50ms for an event from the MPV context.
fn process_mpv_events(
    handler: &mut mpv::MpvHandler,
    event_tx: &Sender<AppEvent>,
    slot: &mut Slot,
) -> Result<()> {
    if let Some(mpv_event) = handler.wait_event(0.05) {
        match mpv_event {
            mpv::Event::StartFile => slot.file_started(),
            mpv::Event::FileLoaded => {
                if let Some(index) = slot.file_loaded() {
                    settle(event_tx, index, Ok(()))?;
                }
            }
            mpv::Event::EndFile(result) => {
                let failed = match result {
                    Ok(reason) => matches!(reason, mpv::EndFileReason::MPV_END_FILE_REASON_ERROR),
                    Err(_) => true,
                };

                if failed {
                    if let Some(index) = slot.file_failed() {
                        settle(event_tx, index, Err(MediaError::Rejected("failed to open media".to_string())))?;
                    }
                }
            }
            _ => {}
        }
    }

    Ok(())
}

/// Answers every play request with an error until the handle goes away.
fn reject_commands(command_rx: &Receiver<MediaPlayerCommand>, event_tx: &Sender<AppEvent>, reason: &str) {
    while let Ok(command) = command_rx.recv() {
        match command {
            MediaPlayerCommand::Play { index, .. } => {
                let result = Err(MediaError::Unavailable(reason.to_string()));
                if settle(event_tx, index, result).is_err() {
                    break;
                }
            }
            MediaPlayerCommand::Shutdown => break,
            _ => {}
        }
    }
}

fn settle(event_tx: &Sender<AppEvent>, index: usize, result: Result<(), MediaError>) -> Result<()> {
    event_tx
        .send(AppEvent::MediaSettled(index, result))
        .context("Failed to send media result")
}
