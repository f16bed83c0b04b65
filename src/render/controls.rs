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

//! Render the carousel controls.
//!
//! Previous and next buttons, the play/pause toggle, and one progress
//! indicator per slide: a filled dot for slides already shown, a gauge for
//! the active slide and an empty dot for each upcoming slide.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Gauge, Padding, Paragraph},
};

use crate::{
    App,
    render::icons::{DOT_DONE, DOT_UPCOMING, ICON_NEXT, ICON_PAUSE, ICON_PLAY, ICON_PREV},
};

pub(super) fn draw_controls(f: &mut Frame, area: Rect, app: &App) {
    let carousel = &app.carousel;
    if !carousel.is_navigable() || !carousel.options().show_controls {
        return;
    }

    let theme = &app.theme;
    let state = carousel.render_state();

    let block = Block::default()
        .borders(Borders::TOP | Borders::BOTTOM)
        .border_style(Style::default().fg(theme.border_colour))
        .padding(Padding::horizontal(1));

    let inner_area = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(inner_area);

    let button = |icon: &'static str, enabled: bool| {
        let colour = if enabled { theme.text_colour } else { theme.muted_colour };
        let mut style = Style::default().fg(colour);
        if !enabled {
            style = style.add_modifier(Modifier::DIM);
        }
        Paragraph::new(Span::styled(icon, style))
    };

    f.render_widget(button(ICON_PREV, carousel.can_go_previous()), chunks[0]);

    let toggle_icon = if state.is_playing { ICON_PAUSE } else { ICON_PLAY };
    f.render_widget(
        Paragraph::new(Span::styled(
            toggle_icon,
            Style::default().fg(theme.accent_colour).add_modifier(Modifier::BOLD),
        )),
        chunks[1],
    );

    let done = state.current_index;
    let upcoming = state.len.saturating_sub(state.current_index + 1);

    let indicators = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(dots_width(done)),
            Constraint::Min(0),
            Constraint::Length(dots_width(upcoming)),
        ])
        .split(chunks[2]);

    let dots = |symbol: &str, count: usize| {
        Paragraph::new(Span::styled(
            format!("{} ", symbol).repeat(count),
            Style::default().fg(theme.muted_colour),
        ))
    };

    f.render_widget(dots(DOT_DONE, done), indicators[0]);

    let gauge = Gauge::default()
        .gauge_style(
            Style::default()
                .fg(theme.accent_colour)
                .bg(theme.gauge_track_colour),
        )
        .ratio((state.progress / 100.0).clamp(0.0, 1.0))
        .label("")
        .use_unicode(true);
    f.render_widget(gauge, indicators[1]);

    // Leading space separates the gauge from the first upcoming dot.
    f.render_widget(
        Paragraph::new(Span::styled(
            format!(" {}", format!("{} ", DOT_UPCOMING).repeat(upcoming).trim_end()),
            Style::default().fg(theme.muted_colour),
        )),
        indicators[2],
    );

    f.render_widget(button(ICON_NEXT, carousel.can_go_next()), chunks[3]);
}

fn dots_width(count: usize) -> u16 {
    u16::try_from(count * 2).unwrap_or(u16::MAX)
}
