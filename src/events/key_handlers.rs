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

use anyhow::Result;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind};

use crate::{
    App,
    events::{AppEvent, Navigation, handlers::handle_navigation},
};

/// Maps keyboard input to carousel navigation and application actions.
///
/// The command line gets the first look at every key; anything it does not
/// consume is handled here:
///
/// * **Application Control**: `q` and `Esc` exit.
/// * **Navigation**: arrows or `h`/`l` step between slides, `1`-`9` jump to a
///   slide.
/// * **Playback**: space toggles auto-advance.
///
/// # Errors
///
/// Returns an error if an event cannot be sent to the event loop.
pub(super) fn process_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    if key.kind != KeyEventKind::Press {
        return Ok(());
    }

    if app.commander.handle_event(&Event::Key(key), &app.event_tx) {
        return Ok(());
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.event_tx.send(AppEvent::ExitApplication)?,

        KeyCode::Char('h') | KeyCode::Left => handle_navigation(app, Navigation::Previous),
        KeyCode::Char('l') | KeyCode::Right => handle_navigation(app, Navigation::Next),

        KeyCode::Char(' ') => handle_navigation(app, Navigation::TogglePlayPause),

        KeyCode::Char(c @ '1'..='9') => {
            let index = c as usize - '1' as usize;
            handle_navigation(app, Navigation::GoTo(index));
        }

        _ => {}
    }

    Ok(())
}
