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

//! Application event distribution and orchestration.
//!
//! This module defines the central event-handling logic for the application,
//! bridging user input (keyboard and mouse), the carousel's progress timer,
//! the media worker and the UI rendering pipeline.
//!
//! # Architecture
//!
//! The system follows a reactive event-loop pattern:
//!
//! 1. **Capture**: Events are received via the [`AppEvent`] enum through an
//!    `mpsc` channel.
//! 2. **Process**: The [`process_events`] function updates the [`App`] state,
//!    mostly by driving the carousel controller.
//! 3. **Render**: After each event is processed, the UI is re-drawn using the
//!    `ratatui` terminal.

mod handlers;
mod key_handlers;
mod mouse_handlers;

use handlers::*;
use key_handlers::process_key_event;
use mouse_handlers::{abandon_drag, process_mouse_event};

use std::io::Stdout;

use anyhow::{Result, anyhow};
use crossterm::event::{KeyEvent, MouseEvent};
use log::error;
use ratatui::{Terminal, prelude::CrosstermBackend};

use crate::{
    App,
    carousel::{media::MediaError, timer::TimerTick},
    render::draw,
};

/// A request to move the carousel, from keys or the command line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum Navigation {
    Next,
    Previous,
    GoTo(usize),
    TogglePlayPause,
}

#[derive(Debug)]
pub(crate) enum AppEvent {
    Key(KeyEvent),
    Mouse(MouseEvent),
    Resize,

    Tick(TimerTick),

    Navigate(Navigation),
    SlideChanged(usize),

    MediaSettled(usize, Result<(), MediaError>),

    SaveConfig,

    ExitApplication,

    Error(String),
    FatalError(String),
}

/// Runs the main application loop, handling events and rendering the UI in the
/// terminal.
///
/// This function loops until a 'quit' event is received or the event channel
/// is closed.
pub(crate) fn process_events(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    terminal.draw(|f| draw(f, app))?;

    while let Ok(event) = app.event_rx.recv() {
        match event {
            AppEvent::Key(key) => process_key_event(app, key)?,
            AppEvent::Mouse(mouse) => process_mouse_event(app, mouse),
            // Cell positions from before the resize no longer line up.
            AppEvent::Resize => abandon_drag(app),

            AppEvent::Tick(tick) => app.carousel.on_timer_tick(tick),

            AppEvent::Navigate(navigation) => handle_navigation(app, navigation),
            AppEvent::SlideChanged(index) => handle_slide_changed(app, index),

            AppEvent::MediaSettled(index, result) => app.carousel.media_settled(index, result),

            AppEvent::SaveConfig => handle_save_config(app),

            AppEvent::ExitApplication => break,

            AppEvent::Error(message) => handle_error(app, message),
            AppEvent::FatalError(message) => {
                error!("Fatal error: {}", message);
                return Err(anyhow!(message));
            }
        }

        terminal.draw(|f| draw(f, app))?;
    }

    Ok(())
}
