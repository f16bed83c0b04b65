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

//! Pointer input for the carousel: hover pausing and drag gestures.

use std::time::Instant;

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Position;

use crate::App;

pub(super) fn process_mouse_event(app: &mut App, mouse: MouseEvent) {
    process_mouse_event_at(app, mouse, Instant::now());
}

fn process_mouse_event_at(app: &mut App, mouse: MouseEvent, now: Instant) {
    let inside = app
        .carousel_area
        .contains(Position::new(mouse.column, mouse.row));

    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) if inside => {
            // A gesture whose release never arrived snaps back first.
            abandon_drag(app);
            app.drag.press(mouse.column, now);
        }
        MouseEventKind::Drag(MouseButton::Left) => {
            if app.drag.drag(mouse.column, now) {
                app.carousel.begin_drag();
            }
        }
        MouseEventKind::Up(MouseButton::Left) => {
            if let Some(release) = app.drag.release(mouse.column, now) {
                app.carousel
                    .on_drag_end(release.offset_px, release.velocity_px_per_s);
            }
        }
        _ => {}
    }

    if inside != app.hovering {
        app.hovering = inside;
        app.carousel.set_hover(inside);
    }
}

/// Drops any gesture in progress, snapping the carousel back to its slide.
pub(super) fn abandon_drag(app: &mut App) {
    app.drag.cancel();
    if app.carousel.is_dragging() {
        app.carousel.on_drag_end(0.0, 0.0);
    }
}
