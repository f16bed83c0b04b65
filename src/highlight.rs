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

//! Highlight markers in slide text.
//!
//! Headlines mark the words to emphasise with `<>` and `</>`, for example
//! `"When the Clouds Speak, <>She Listens</>"`. Each opening marker pairs
//! with the nearest closing marker after it.

const OPEN: &str = "<>";
const CLOSE: &str = "</>";

#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Segment<'a> {
    Plain(&'a str),
    Highlight(&'a str),
}

/// Splits `text` into plain and highlighted segments.
///
/// An opening marker without a matching close is left in the text as is.
pub(crate) fn parse_highlighted(text: &str) -> Vec<Segment<'_>> {
    let mut segments = Vec::new();
    let mut rest = text;

    while let Some(start) = rest.find(OPEN) {
        let after_open = &rest[start + OPEN.len()..];
        let Some(len) = after_open.find(CLOSE) else {
            break;
        };

        if start > 0 {
            segments.push(Segment::Plain(&rest[..start]));
        }
        segments.push(Segment::Highlight(&after_open[..len]));

        rest = &after_open[len + CLOSE.len()..];
    }

    if !rest.is_empty() {
        segments.push(Segment::Plain(rest));
    }

    segments
}

/// The text with all markers removed.
pub(crate) fn strip_markers(text: &str) -> String {
    parse_highlighted(text)
        .into_iter()
        .map(|segment| match segment {
            Segment::Plain(s) | Segment::Highlight(s) => s,
        })
        .collect()
}
