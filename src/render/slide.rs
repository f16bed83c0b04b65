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

//! Render the active slide as a card.
//!
//! Only the active slide is drawn, its neighbours stay off screen.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Padding, Paragraph, Wrap},
};

use crate::{
    App,
    carousel::{CarouselMode, slide::Slide},
    highlight::{Segment, parse_highlighted},
    render::icons::ICON_VIDEO,
    theme::Theme,
};

pub(super) fn draw_slide(f: &mut Frame, area: Rect, app: &App) {
    let Some(slide) = app.carousel.current_slide() else {
        return;
    };
    let state = app.carousel.render_state();
    let theme = &app.theme;

    let title = match state.mode {
        CarouselMode::Playing => format!(" {}/{} ", state.current_index + 1, state.len),
        CarouselMode::Paused => format!(" {}/{} paused ", state.current_index + 1, state.len),
        CarouselMode::Dragging => format!(" {}/{} dragging ", state.current_index + 1, state.len),
        CarouselMode::Static | CarouselMode::Idle => String::new(),
    };

    let border_colour = if app.hovering {
        theme.accent_colour
    } else {
        theme.border_colour
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border_colour))
        .title(Span::styled(title, Style::default().fg(theme.muted_colour)))
        .padding(Padding::new(2, 2, 1, 1));

    let paragraph = Paragraph::new(slide_lines(slide, theme))
        .block(block)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });

    f.render_widget(paragraph, area);
}

fn slide_lines<'a>(slide: &'a Slide, theme: &Theme) -> Vec<Line<'a>> {
    let mut lines = vec![headline(&slide.headline, theme), Line::default()];

    if !slide.subheading.is_empty() {
        lines.push(Line::styled(
            slide.subheading.as_str(),
            Style::default().fg(theme.muted_colour),
        ));
        lines.push(Line::default());
    }

    if !slide.ctas.is_empty() {
        let mut spans = Vec::with_capacity(slide.ctas.len() * 2);
        for (i, cta) in slide.ctas.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw("  "));
            }
            let colour = theme.cta_colours[i % theme.cta_colours.len()];
            spans.push(Span::styled(
                format!("[ {} ]", cta),
                Style::default().fg(colour).add_modifier(Modifier::BOLD),
            ));
        }
        lines.push(Line::from(spans));
    }

    if let Some(src) = slide.media_source() {
        lines.push(Line::default());
        lines.push(Line::styled(
            format!("{} {}", ICON_VIDEO, src),
            Style::default().fg(theme.muted_colour).add_modifier(Modifier::ITALIC),
        ));
    }

    lines
}

fn headline<'a>(text: &'a str, theme: &Theme) -> Line<'a> {
    let spans: Vec<Span> = parse_highlighted(text)
        .into_iter()
        .map(|segment| match segment {
            Segment::Plain(s) => Span::styled(
                s,
                Style::default().fg(theme.text_colour).add_modifier(Modifier::BOLD),
            ),
            Segment::Highlight(s) => Span::styled(
                s,
                Style::default().fg(theme.highlight_colour).add_modifier(Modifier::BOLD),
            ),
        })
        .collect();

    Line::from(spans)
}
