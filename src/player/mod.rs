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

//! Video playback for video slides.
//!
//! This module provides the [`MediaPlayer`] handle the carousel uses to start
//! and stop slide videos. It manages a background worker thread that
//! interfaces with the underlying media library (MPV), so that loading media
//! never blocks the main application thread. Videos open in MPV's own window.
//!
//! Starting playback is asynchronous: the outcome of each play request comes
//! back to the application as an [`AppEvent::MediaSettled`] event.

mod commands;

use std::sync::mpsc;

use log::debug;

use crate::{
    carousel::media::{MediaError, MediaHandle},
    events::AppEvent,
    player::commands::MediaPlayerCommand,
};

/// A handle to the media playback engine.
///
/// This struct acts as a command proxy; it does not decode media itself but
/// instead sends instructions to a background worker thread.
pub(crate) struct MediaPlayer {
    /// Channel for sending commands to the background worker thread.
    command_tx: mpsc::Sender<MediaPlayerCommand>,
}

impl MediaPlayer {
    /// Spawns the media worker thread and returns a new player handle.
    ///
    /// # Arguments
    ///
    /// * `event_tx` - A channel to send play results and errors back to the
    ///   main event loop.
    pub(crate) fn new(event_tx: mpsc::Sender<AppEvent>) -> Self {
        let (command_tx, command_rx) = mpsc::channel::<MediaPlayerCommand>();

        commands::spawn_player_worker(command_rx, event_tx);

        Self { command_tx }
    }

    fn send(&self, command: MediaPlayerCommand) -> Result<(), MediaError> {
        self.command_tx
            .send(command)
            .map_err(|_| MediaError::WorkerGone)
    }
}

impl MediaHandle for MediaPlayer {
    fn play(&mut self, index: usize, src: &str) -> Result<(), MediaError> {
        debug!("Requesting playback of slide {} from {}", index, src);
        self.send(MediaPlayerCommand::Play {
            index,
            src: src.to_string(),
        })
    }

    fn pause(&mut self, index: usize) -> Result<(), MediaError> {
        self.send(MediaPlayerCommand::Pause(index))
    }

    fn release(&mut self) {
        let _ = self.send(MediaPlayerCommand::Stop);
    }
}

impl Drop for MediaPlayer {
    fn drop(&mut self) {
        let _ = self.send(MediaPlayerCommand::Shutdown);
    }
}
