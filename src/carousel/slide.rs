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

//! Slide descriptors and carousel options.
//!
//! These types are plain serde-friendly data so that the whole deck, and the
//! behaviour of the carousel, can be described in the configuration file.

use serde::{Deserialize, Deserializer, Serialize};

/// Video slides never stay on screen longer than this, whatever they ask for.
pub(crate) const MAX_VIDEO_DURATION_MS: u64 = 30_000;

/// Durations are clamped to at least this, so progress stays finite.
pub(crate) const MIN_SLIDE_DURATION_MS: u64 = 1;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq)]
#[serde(rename_all = "lowercase")]
pub(crate) enum SlideKind {
    #[default]
    Image,
    Video,
}

/// One unit of carousel content.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub(crate) struct Slide {
    pub(crate) id: String,
    pub(crate) kind: SlideKind,

    /// Image or video location. Only video sources are ever opened.
    pub(crate) src: String,

    /// Headline, may contain `<>...</>` highlight markers.
    pub(crate) headline: String,
    pub(crate) subheading: String,
    pub(crate) ctas: Vec<String>,

    /// How long the slide stays active before auto-advancing.
    #[serde(deserialize_with = "clamped_optional_duration")]
    pub(crate) duration_ms: Option<u64>,
}

impl Slide {
    pub(crate) fn image(id: &str, headline: &str, subheading: &str) -> Self {
        Self {
            id: id.to_string(),
            kind: SlideKind::Image,
            headline: headline.to_string(),
            subheading: subheading.to_string(),
            ..Default::default()
        }
    }

    pub(crate) fn video(id: &str, src: &str, headline: &str) -> Self {
        Self {
            id: id.to_string(),
            kind: SlideKind::Video,
            src: src.to_string(),
            headline: headline.to_string(),
            ..Default::default()
        }
    }

    #[cfg(test)]
    pub(crate) fn with_duration(mut self, duration_ms: u64) -> Self {
        self.duration_ms = Some(duration_ms);
        self
    }

    pub(crate) fn with_ctas(mut self, ctas: &[&str]) -> Self {
        self.ctas = ctas.iter().map(|label| label.to_string()).collect();
        self
    }

    pub(crate) fn is_video(&self) -> bool {
        self.kind == SlideKind::Video
    }

    /// The media source to hand to the player, for video slides only.
    pub(crate) fn media_source(&self) -> Option<&str> {
        match self.kind {
            SlideKind::Video if !self.src.is_empty() => Some(&self.src),
            _ => None,
        }
    }

    /// Resolves how long this slide should stay active.
    ///
    /// The slide's own duration wins over the carousel default, video slides
    /// are capped at [`MAX_VIDEO_DURATION_MS`], and the result is never zero.
    pub(crate) fn effective_duration_ms(&self, default_ms: u64) -> u64 {
        let duration = self.duration_ms.unwrap_or(default_ms);
        let duration = if self.is_video() {
            duration.min(MAX_VIDEO_DURATION_MS)
        } else {
            duration
        };
        duration.max(MIN_SLIDE_DURATION_MS)
    }
}

/// Behaviour switches for a carousel.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
#[serde(default)]
pub(crate) struct CarouselOptions {
    pub(crate) auto_play: bool,
    #[serde(deserialize_with = "clamped_duration")]
    pub(crate) slide_duration_ms: u64,
    pub(crate) loop_slides: bool,
    pub(crate) pause_on_hover: bool,
    pub(crate) show_controls: bool,
}

impl Default for CarouselOptions {
    fn default() -> Self {
        Self {
            auto_play: true,
            slide_duration_ms: 10_000,
            loop_slides: true,
            pause_on_hover: true,
            show_controls: true,
        }
    }
}

fn clamp_duration(duration_ms: i64) -> u64 {
    u64::try_from(duration_ms)
        .unwrap_or(0)
        .max(MIN_SLIDE_DURATION_MS)
}

// Durations of zero or below in the configuration become the minimum, they
// do not make the whole file unreadable.
fn clamped_duration<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u64, D::Error> {
    i64::deserialize(deserializer).map(clamp_duration)
}

fn clamped_optional_duration<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<u64>, D::Error> {
    Option::<i64>::deserialize(deserializer).map(|duration| duration.map(clamp_duration))
}
