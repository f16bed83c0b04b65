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

//! Visual styling and color configuration for the TUI.
//!
//! This module defines the application's color palette and provides utilities
//! for converting colors between Ratatui's internal representation and external
//! formats (such as hexadecimal strings) used for terminal emulator styling.

use ratatui::style::Color;

#[derive(Clone, Copy)]
pub(crate) struct Theme {
    pub(crate) background_colour: Color,
    pub(crate) accent_colour: Color,
    pub(crate) border_colour: Color,
    pub(crate) gauge_track_colour: Color,

    pub(crate) text_colour: Color,
    pub(crate) muted_colour: Color,
    pub(crate) highlight_colour: Color,

    pub(crate) cta_colours: [Color; 3],

    pub(crate) commander_colour: Color,
}

impl Default for Theme {
    // Returns the standard application theme.
    fn default() -> Self {
        Self::default_theme()
    }
}

impl Theme {
    // Constructs the default theme, earthy greens with a harvest amber.
    pub(crate) const fn default_theme() -> Self {
        Self {
            background_colour: Color::Rgb(18, 32, 24),
            accent_colour: Color::Rgb(250, 189, 47),
            border_colour: Color::Rgb(84, 110, 90),
            gauge_track_colour: Color::Rgb(34, 52, 40),

            text_colour: Color::Rgb(240, 240, 232),
            muted_colour: Color::Rgb(120, 136, 124),
            highlight_colour: Color::Rgb(255, 140, 66),

            cta_colours: [
                Color::Rgb(250, 189, 47),
                Color::Rgb(129, 199, 132),
                Color::Rgb(240, 240, 232),
            ],

            commander_colour: Color::Rgb(240, 240, 232),
        }
    }

    /// Converts a [`ratatui::style::Color`] into a CSS-style hexadecimal
    /// string.
    ///
    /// This is primarily used to set the terminal emulator's background color
    /// via escape sequences. Colours that are not [`Color::Rgb`] have no hex
    /// form and yield `None`.
    pub(crate) fn to_hex(colour: Color) -> Option<String> {
        match colour {
            Color::Rgb(r, g, b) => Some(format!("#{:02x}{:02x}{:02x}", r, g, b)),
            _ => None,
        }
    }
}
