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

//! User interface rendering logic.
//!
//! This module handles the translation of the [`App`] state into visual
//! widgets using the `ratatui` framework. It is responsible for layout
//! management, widget styling, and terminal frame composition.
//!
//! # Rendering Pipeline
//!
//! The primary entry point is the [`draw`] function, which is called after
//! every processed event to provide a reactive user interface.

mod commander;
mod controls;
mod icons;
mod slide;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
};

use crate::{
    App,
    carousel::drag::CELL_WIDTH_PX,
    render::{commander::draw_commander, controls::draw_controls, slide::draw_slide},
};

/// Renders the user interface to the terminal frame.
///
/// The screen is split into the slide card, the control row and a single
/// status/command line.
///
/// Drawing also records where the carousel sits on screen, so that mouse
/// events can be hit-tested, and tells the carousel how wide a slide is for
/// drag resolution.
///
/// # Arguments
///
/// * `f` - The current terminal frame used for drawing.
/// * `app` - A mutable reference to the application state.
pub(crate) fn draw(f: &mut Frame, app: &mut App) {
    let area = f.area();

    let outer = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(3),
            Constraint::Length(1),
        ])
        .split(area);

    if app.carousel_area != outer[0] {
        app.carousel_area = outer[0];
        app.carousel
            .set_slide_width(f64::from(outer[0].width.max(1)) * CELL_WIDTH_PX);
    }

    draw_slide(f, outer[0], app);

    draw_controls(f, outer[1], app);

    draw_commander(f, outer[2], app);
}
