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

//! Command-line input logic and state management.
//!
//! This module implements a small vi-style command line: `:` opens it, the
//! typed text is managed by a text input component, and on `Enter` the
//! command is parsed and dispatched as an [`AppEvent`].

use std::sync::mpsc::Sender;

use anyhow::Result;
use crossterm::event::{Event, KeyCode};
use log::debug;
use tui_input::{Input, backend::crossterm::EventHandler};

use crate::events::{AppEvent, Navigation};

pub(crate) struct Commander {
    active: bool,
    pub(crate) input: Input,
}

impl Commander {
    pub(crate) fn new() -> Self {
        Self {
            active: false,
            input: Input::default(),
        }
    }

    pub(crate) fn active(&self) -> bool {
        self.active
    }

    /// Offers an input event to the command line.
    ///
    /// Returns `true` if the event was consumed, in which case it must not be
    /// handled anywhere else.
    pub(crate) fn handle_event(&mut self, event: &Event, event_tx: &Sender<AppEvent>) -> bool {
        let Event::Key(key_event) = event else {
            return false;
        };

        if !self.active {
            if key_event.code == KeyCode::Char(':') {
                self.active = true;
                return true;
            }
            return false;
        }

        match key_event.code {
            KeyCode::Esc => {
                self.active = false;
                self.input.reset();
            }

            KeyCode::Enter => {
                let buffer = self.input.value().trim().to_string();
                self.active = false;
                self.input.reset();

                if !buffer.is_empty() {
                    debug!("Running command '{}'", buffer);
                    // Only fails once the event loop has gone.
                    let _ = run_command(&buffer, event_tx);
                }
            }

            // Delegate everything else to the managed input component.
            _ => {
                self.input.handle_event(event);
            }
        }

        true
    }
}

fn run_command(buffer: &str, event_tx: &Sender<AppEvent>) -> Result<()> {
    let parts: Vec<&str> = buffer.split_whitespace().collect();

    match parts.as_slice() {
        ["q"] => event_tx.send(AppEvent::ExitApplication)?,

        ["n"] => event_tx.send(AppEvent::Navigate(Navigation::Next))?,
        ["p"] => event_tx.send(AppEvent::Navigate(Navigation::Previous))?,
        ["pp"] => event_tx.send(AppEvent::Navigate(Navigation::TogglePlayPause))?,

        ["g", number] => match number.parse::<usize>() {
            Ok(n) if n > 0 => event_tx.send(AppEvent::Navigate(Navigation::GoTo(n - 1)))?,
            _ => event_tx.send(AppEvent::Error(format!("Invalid slide number: {}", number)))?,
        },

        ["save"] => event_tx.send(AppEvent::SaveConfig)?,

        [] => {}

        [cmd, ..] => event_tx.send(AppEvent::Error(format!("Unknown command: {}", cmd)))?,
    }

    Ok(())
}
