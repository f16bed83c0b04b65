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

//! Auto-advancing carousel controller.
//!
//! The [`CarouselController`] owns which slide is active, whether slides
//! auto-advance, and how far through its duration the active slide is. It is
//! driven from the outside by timer ticks and by navigation, hover and drag
//! input, and exposes a [`RenderState`] for drawing.
//!
//! # Degenerate decks
//!
//! * An empty deck is inert: every operation is a no-op and nothing renders.
//! * A single slide is static: navigation, ticks, drags and hover do nothing.
//!
//! # Auto-advance
//!
//! Progress only accumulates while the carousel is playing, not paused by
//! hover and not being dragged. A tick performs at most one transition, no
//! matter how much time it reports. Every change of the active slide resets
//! progress to zero.

pub(crate) mod drag;
pub(crate) mod media;
pub(crate) mod slide;
pub(crate) mod timer;

use log::debug;

use crate::carousel::{
    drag::{DragOutcome, resolve_drag},
    media::{MediaCoordinator, MediaError, MediaHandle},
    slide::{CarouselOptions, Slide},
    timer::{ProgressTimer, TimerTick},
};

/// Slide width assumed until the host reports one (the desktop card width).
pub(crate) const DEFAULT_SLIDE_WIDTH_PX: f64 = 720.0;

/// Invoked with the new index whenever the active slide changes.
pub(crate) type SlideChangeCallback = Box<dyn FnMut(usize)>;

/// The observable state of a carousel.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) enum CarouselMode {
    /// No slides, nothing is shown.
    Idle,
    /// A single slide, shown without controls.
    Static,
    Playing,
    /// Manually paused, stopped at the end, or suspended by hover.
    Paused,
    Dragging,
}

/// Snapshot for the host to draw controls and progress indicators.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct RenderState {
    pub(crate) current_index: usize,
    pub(crate) progress: f64,
    pub(crate) is_playing: bool,
    pub(crate) mode: CarouselMode,
    pub(crate) len: usize,
}

pub(crate) struct CarouselController {
    slides: Vec<Slide>,
    options: CarouselOptions,

    current_index: usize,
    is_playing: bool,
    is_paused: bool,
    is_dragging: bool,
    progress: f64,

    slide_width_px: f64,

    on_slide_change: Option<SlideChangeCallback>,
    media: MediaCoordinator,
    timer: Option<ProgressTimer>,
}

impl CarouselController {
    pub(crate) fn new(slides: Vec<Slide>, options: CarouselOptions) -> Self {
        let sources = slides
            .iter()
            .map(|slide| slide.media_source().map(str::to_string))
            .collect();

        let is_playing = options.auto_play && slides.len() > 1;

        Self {
            slides,
            options,
            current_index: 0,
            is_playing,
            is_paused: false,
            is_dragging: false,
            progress: 0.0,
            slide_width_px: DEFAULT_SLIDE_WIDTH_PX,
            on_slide_change: None,
            media: MediaCoordinator::new(sources),
            timer: None,
        }
    }

    pub(crate) fn with_slide_change(mut self, callback: SlideChangeCallback) -> Self {
        self.on_slide_change = Some(callback);
        self
    }

    /// Attaches a media player and starts the active slide's media if the
    /// carousel is playing.
    pub(crate) fn with_media(mut self, handle: Box<dyn MediaHandle>) -> Self {
        self.media.attach(handle);
        self.sync_media();
        self
    }

    /// Hands the carousel its progress timer, armed straight away if the
    /// carousel is playing.
    pub(crate) fn with_timer(mut self, timer: ProgressTimer) -> Self {
        self.timer = Some(timer);
        self.sync_timer();
        self
    }

    pub(crate) fn slides(&self) -> &[Slide] {
        &self.slides
    }

    pub(crate) fn options(&self) -> &CarouselOptions {
        &self.options
    }

    pub(crate) fn current_slide(&self) -> Option<&Slide> {
        self.slides.get(self.current_index)
    }

    pub(crate) fn current_index(&self) -> usize {
        self.current_index
    }

    pub(crate) fn progress(&self) -> f64 {
        self.progress
    }

    pub(crate) fn is_playing(&self) -> bool {
        self.is_playing
    }

    #[cfg(test)]
    pub(crate) fn is_paused(&self) -> bool {
        self.is_paused
    }

    pub(crate) fn is_dragging(&self) -> bool {
        self.is_dragging
    }

    /// Navigation and auto-advance only make sense with two or more slides.
    pub(crate) fn is_navigable(&self) -> bool {
        self.slides.len() > 1
    }

    pub(crate) fn mode(&self) -> CarouselMode {
        match self.slides.len() {
            0 => CarouselMode::Idle,
            1 => CarouselMode::Static,
            _ if self.is_dragging => CarouselMode::Dragging,
            _ if !self.is_playing || self.is_paused => CarouselMode::Paused,
            _ => CarouselMode::Playing,
        }
    }

    pub(crate) fn render_state(&self) -> RenderState {
        RenderState {
            current_index: self.current_index,
            progress: self.progress,
            is_playing: self.is_playing,
            mode: self.mode(),
            len: self.slides.len(),
        }
    }

    /// Effective duration of the active slide, in milliseconds.
    pub(crate) fn active_duration_ms(&self) -> u64 {
        self.current_slide()
            .map(|slide| slide.effective_duration_ms(self.options.slide_duration_ms))
            .unwrap_or(self.options.slide_duration_ms)
    }

    /// Time left on the active slide, in milliseconds.
    pub(crate) fn remaining_ms(&self) -> u64 {
        let duration = self.active_duration_ms() as f64;
        (duration * (1.0 - self.progress / 100.0)).max(0.0).round() as u64
    }

    /// Whether a step backwards is possible, for dimming the control.
    pub(crate) fn can_go_previous(&self) -> bool {
        self.is_navigable() && (self.options.loop_slides || self.current_index > 0)
    }

    /// Whether a step forwards is possible, for dimming the control.
    pub(crate) fn can_go_next(&self) -> bool {
        self.is_navigable()
            && (self.options.loop_slides || self.current_index + 1 < self.slides.len())
    }

    /// Advances progress by `elapsed_ms` of wall-clock time.
    pub(crate) fn tick(&mut self, elapsed_ms: f64) {
        if !self.is_playing || self.is_paused || self.is_dragging || !self.is_navigable() {
            return;
        }

        let duration = self.active_duration_ms() as f64;
        self.progress += (elapsed_ms.max(0.0) / duration) * 100.0;

        if self.progress < 100.0 {
            return;
        }

        let last = self.slides.len() - 1;
        if !self.options.loop_slides && self.current_index == last {
            debug!("Reached the last slide, auto-advance stopped");
            self.progress = 0.0;
            self.set_playing(false);
            return;
        }

        self.go_to(self.current_index as isize + 1);
    }

    /// Handles a tick from the progress timer, ignoring stale generations.
    pub(crate) fn on_timer_tick(&mut self, tick: TimerTick) {
        let current = self.timer.as_ref().map(ProgressTimer::generation);
        if current == Some(tick.generation) {
            self.tick(tick.elapsed_ms);
        }
    }

    /// Makes `index` the active slide.
    ///
    /// Out of range indices wrap when looping and are clamped otherwise.
    /// Progress always restarts, even if the index did not change, but the
    /// change callback only fires when it did.
    pub(crate) fn go_to(&mut self, index: isize) {
        if !self.is_navigable() {
            return;
        }

        let len = self.slides.len() as isize;
        let target = if self.options.loop_slides {
            index.rem_euclid(len)
        } else {
            index.clamp(0, len - 1)
        } as usize;

        let previous = self.current_index;
        self.current_index = target;
        self.progress = 0.0;

        if target != previous {
            debug!("Slide changed from {} to {}", previous, target);
            if let Some(callback) = self.on_slide_change.as_mut() {
                callback(target);
            }
        }

        self.sync_media();
        self.sync_timer();
    }

    pub(crate) fn next(&mut self) {
        if !self.is_navigable() {
            return;
        }

        self.go_to(self.current_index as isize + 1);

        if !self.options.loop_slides && self.current_index == self.slides.len() - 1 {
            self.set_playing(false);
        }
    }

    pub(crate) fn previous(&mut self) {
        if !self.is_navigable() {
            return;
        }

        self.go_to(self.current_index as isize - 1);
    }

    pub(crate) fn toggle_play_pause(&mut self) {
        if !self.is_navigable() {
            return;
        }

        self.set_playing(!self.is_playing);
    }

    /// Suspends or resumes auto-advance while the pointer is over the
    /// carousel, independently of the play state.
    pub(crate) fn set_hover(&mut self, active: bool) {
        if self.options.pause_on_hover && self.is_navigable() {
            self.is_paused = active;
        }
    }

    /// Host reported slide width, used for the drag offset threshold.
    pub(crate) fn set_slide_width(&mut self, width_px: f64) {
        if width_px > 0.0 {
            self.slide_width_px = width_px;
        }
    }

    pub(crate) fn begin_drag(&mut self) {
        if self.is_navigable() {
            self.is_dragging = true;
        }
    }

    /// Resolves a finished drag into a slide change or a snap back.
    ///
    /// `offset_px` and `velocity_px_per_s` are positive when the content was
    /// dragged rightward, which goes to the previous slide.
    pub(crate) fn on_drag_end(&mut self, offset_px: f64, velocity_px_per_s: f64) {
        self.is_dragging = false;

        if !self.is_navigable() {
            return;
        }

        let current = self.current_index as isize;
        let target = match resolve_drag(offset_px, velocity_px_per_s, self.slide_width_px) {
            DragOutcome::Previous => current - 1,
            DragOutcome::Next => current + 1,
            DragOutcome::SnapBack => current,
        };

        self.go_to(target);
    }

    /// Feeds back the outcome of an asynchronous media play.
    pub(crate) fn media_settled(&mut self, index: usize, result: Result<(), MediaError>) {
        self.media.settled(index, result);
    }

    fn set_playing(&mut self, playing: bool) {
        if self.is_playing == playing {
            return;
        }

        self.is_playing = playing;
        self.media.update(self.current_index, playing);
        self.sync_timer();
    }

    // Pauses every other slide's media first, then plays the active slide's
    // media if playing.
    fn sync_media(&mut self) {
        let current = self.current_index;
        for index in (0..self.slides.len()).filter(|&i| i != current) {
            self.media.update(index, false);
        }
        self.media.update(current, self.is_playing);
    }

    // Restarts the timer cycle while playing, releases it otherwise.
    fn sync_timer(&mut self) {
        let should_run = self.is_playing && self.is_navigable();
        if let Some(timer) = self.timer.as_mut() {
            if should_run {
                timer.arm();
            } else {
                timer.cancel();
            }
        }
    }
}

impl Drop for CarouselController {
    fn drop(&mut self) {
        self.on_slide_change = None;
        if let Some(mut timer) = self.timer.take() {
            timer.cancel();
        }
        self.media.release();
    }
}

#[cfg(test)]
mod tests {
    use std::{
        cell::RefCell,
        rc::Rc,
        sync::{
            Arc,
            mpsc::{self, RecvTimeoutError},
        },
        time::Duration,
    };

    use super::*;
    use crate::carousel::{
        media::{
            MediaPlayback,
            tests::{Call, RecordingMedia},
        },
        timer::TickSink,
    };

    fn deck(n: usize) -> Vec<Slide> {
        (0..n)
            .map(|i| Slide::image(&format!("s{}", i), &format!("Slide {}", i), ""))
            .collect()
    }

    fn options(loop_slides: bool) -> CarouselOptions {
        CarouselOptions {
            slide_duration_ms: 1_000,
            loop_slides,
            ..Default::default()
        }
    }

    fn recording(
        controller: CarouselController,
    ) -> (CarouselController, Rc<RefCell<Vec<usize>>>) {
        let changes = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&changes);
        let controller =
            controller.with_slide_change(Box::new(move |index| sink.borrow_mut().push(index)));
        (controller, changes)
    }

    #[test]
    fn starts_on_first_slide_playing() {
        let carousel = CarouselController::new(deck(3), options(true));
        assert_eq!(carousel.current_index(), 0);
        assert_eq!(carousel.progress(), 0.0);
        assert!(carousel.is_playing());
        assert_eq!(carousel.mode(), CarouselMode::Playing);
    }

    #[test]
    fn auto_play_off_starts_paused() {
        let opts = CarouselOptions {
            auto_play: false,
            ..options(true)
        };
        let carousel = CarouselController::new(deck(3), opts);
        assert!(!carousel.is_playing());
        assert_eq!(carousel.mode(), CarouselMode::Paused);
    }

    #[test]
    fn next_n_times_returns_to_start_when_looping() {
        for n in 2..6 {
            let mut carousel = CarouselController::new(deck(n), options(true));
            carousel.go_to(1);
            for _ in 0..n {
                carousel.next();
            }
            assert_eq!(carousel.current_index(), 1, "deck of {}", n);
        }
    }

    #[test]
    fn previous_wraps_when_looping() {
        let mut carousel = CarouselController::new(deck(3), options(true));
        carousel.previous();
        assert_eq!(carousel.current_index(), 2);
    }

    #[test]
    fn next_at_end_without_loop_stops_playing() {
        let (mut carousel, changes) = recording(CarouselController::new(deck(3), options(false)));
        carousel.go_to(2);
        carousel.toggle_play_pause();
        carousel.toggle_play_pause();
        assert!(carousel.is_playing());

        carousel.next();
        assert_eq!(carousel.current_index(), 2);
        assert!(!carousel.is_playing());
        assert_eq!(*changes.borrow(), vec![2]);
    }

    #[test]
    fn next_onto_last_slide_without_loop_stops_playing() {
        let mut carousel = CarouselController::new(deck(3), options(false));
        carousel.next();
        assert!(carousel.is_playing());
        carousel.next();
        assert_eq!(carousel.current_index(), 2);
        assert!(!carousel.is_playing());
    }

    #[test]
    fn previous_at_start_without_loop_clamps() {
        let mut carousel = CarouselController::new(deck(3), options(false));
        carousel.previous();
        assert_eq!(carousel.current_index(), 0);
        assert!(!carousel.can_go_previous());
        assert!(carousel.can_go_next());
    }

    #[test]
    fn go_to_wraps_or_clamps() {
        let mut looping = CarouselController::new(deck(3), options(true));
        looping.go_to(7);
        assert_eq!(looping.current_index(), 1);
        looping.go_to(-1);
        assert_eq!(looping.current_index(), 2);

        let mut clamped = CarouselController::new(deck(3), options(false));
        clamped.go_to(7);
        assert_eq!(clamped.current_index(), 2);
        clamped.go_to(-4);
        assert_eq!(clamped.current_index(), 0);
    }

    #[test]
    fn go_to_always_resets_progress() {
        let mut carousel = CarouselController::new(deck(3), options(true));
        carousel.tick(730.0);
        assert!(carousel.progress() > 70.0);

        carousel.go_to(0);
        assert_eq!(carousel.progress(), 0.0);

        carousel.tick(250.0);
        carousel.go_to(2);
        assert_eq!(carousel.progress(), 0.0);
    }

    #[test]
    fn callback_fires_only_on_real_changes() {
        let (mut carousel, changes) = recording(CarouselController::new(deck(3), options(true)));
        carousel.go_to(0);
        carousel.next();
        carousel.go_to(1);
        carousel.previous();
        assert_eq!(*changes.borrow(), vec![1, 0]);
    }

    #[test]
    fn two_half_ticks_advance_one_slide() {
        let (mut carousel, changes) = recording(CarouselController::new(deck(3), options(true)));
        carousel.tick(500.0);
        assert_eq!(carousel.progress(), 50.0);
        assert_eq!(carousel.current_index(), 0);

        carousel.tick(500.0);
        assert_eq!(carousel.current_index(), 1);
        assert_eq!(carousel.progress(), 0.0);
        assert_eq!(*changes.borrow(), vec![1]);
    }

    #[test]
    fn huge_tick_advances_at_most_one_slide() {
        let mut carousel = CarouselController::new(deck(5), options(true));
        carousel.tick(1_000_000.0);
        assert_eq!(carousel.current_index(), 1);
        assert_eq!(carousel.progress(), 0.0);
    }

    #[test]
    fn tick_wraps_to_first_slide_when_looping() {
        let mut carousel = CarouselController::new(deck(2), options(true));
        carousel.go_to(1);
        carousel.tick(1_000.0);
        assert_eq!(carousel.current_index(), 0);
        assert!(carousel.is_playing());
    }

    #[test]
    fn tick_on_last_slide_without_loop_stops() {
        let (mut carousel, changes) = recording(CarouselController::new(deck(2), options(false)));
        carousel.tick(1_000.0);
        assert_eq!(carousel.current_index(), 1);
        assert!(carousel.is_playing());

        carousel.tick(1_000.0);
        assert_eq!(carousel.current_index(), 1);
        assert!(!carousel.is_playing());
        assert_eq!(*changes.borrow(), vec![1]);

        // Terminal until someone navigates or resumes.
        carousel.tick(5_000.0);
        assert_eq!(carousel.current_index(), 1);
        assert_eq!(carousel.progress(), 0.0);
    }

    #[test]
    fn tick_is_suspended_while_paused_hovered_or_dragging() {
        let mut carousel = CarouselController::new(deck(3), options(true));

        carousel.toggle_play_pause();
        carousel.tick(400.0);
        assert_eq!(carousel.progress(), 0.0);
        carousel.toggle_play_pause();

        carousel.set_hover(true);
        assert_eq!(carousel.mode(), CarouselMode::Paused);
        carousel.tick(400.0);
        assert_eq!(carousel.progress(), 0.0);
        carousel.set_hover(false);

        carousel.begin_drag();
        assert_eq!(carousel.mode(), CarouselMode::Dragging);
        carousel.tick(400.0);
        assert_eq!(carousel.progress(), 0.0);

        carousel.on_drag_end(0.0, 0.0);
        carousel.tick(400.0);
        assert_eq!(carousel.progress(), 40.0);
    }

    #[test]
    fn hover_is_ignored_when_disabled() {
        let opts = CarouselOptions {
            pause_on_hover: false,
            ..options(true)
        };
        let mut carousel = CarouselController::new(deck(3), opts);
        carousel.set_hover(true);
        assert!(!carousel.is_paused());
        carousel.tick(100.0);
        assert_eq!(carousel.progress(), 10.0);
    }

    #[test]
    fn per_slide_duration_and_minimum_clamp() {
        let mut slides = deck(3);
        slides[0].duration_ms = Some(0);
        slides[1].duration_ms = Some(4_000);
        let mut carousel = CarouselController::new(slides, options(true));

        carousel.tick(1.0);
        assert_eq!(carousel.current_index(), 1);
        assert!(carousel.progress().is_finite());

        carousel.tick(1_000.0);
        assert_eq!(carousel.progress(), 25.0);
        assert_eq!(carousel.remaining_ms(), 3_000);
    }

    #[test]
    fn fast_swipe_with_small_offset_changes_slide() {
        let mut carousel = CarouselController::new(deck(3), options(true));
        carousel.go_to(1);

        carousel.begin_drag();
        carousel.on_drag_end(5.0, 600.0);
        assert_eq!(carousel.current_index(), 0);
        assert!(!carousel.is_dragging());

        carousel.begin_drag();
        carousel.on_drag_end(-5.0, -600.0);
        assert_eq!(carousel.current_index(), 1);
    }

    #[test]
    fn slow_short_drag_snaps_back() {
        let (mut carousel, changes) = recording(CarouselController::new(deck(3), options(true)));
        carousel.tick(300.0);

        carousel.begin_drag();
        carousel.on_drag_end(10.0, 50.0);
        assert_eq!(carousel.current_index(), 0);
        assert_eq!(carousel.progress(), 0.0);
        assert!(changes.borrow().is_empty());
    }

    #[test]
    fn slow_long_drag_uses_slide_width() {
        let mut carousel = CarouselController::new(deck(3), options(false));
        carousel.set_slide_width(300.0);

        carousel.begin_drag();
        carousel.on_drag_end(-101.0, -20.0);
        assert_eq!(carousel.current_index(), 1);

        // Clamped at the start when not looping.
        carousel.go_to(0);
        carousel.begin_drag();
        carousel.on_drag_end(250.0, 20.0);
        assert_eq!(carousel.current_index(), 0);
    }

    #[test]
    fn drag_returns_to_prior_play_state() {
        let mut carousel = CarouselController::new(deck(3), options(true));
        carousel.toggle_play_pause();
        carousel.begin_drag();
        carousel.on_drag_end(0.0, -900.0);
        assert_eq!(carousel.current_index(), 1);
        assert!(!carousel.is_playing());
        assert_eq!(carousel.mode(), CarouselMode::Paused);
    }

    #[test]
    fn single_slide_is_static() {
        let (mut carousel, changes) = recording(CarouselController::new(deck(1), options(true)));
        assert_eq!(carousel.mode(), CarouselMode::Static);
        assert!(!carousel.is_playing());

        carousel.next();
        carousel.previous();
        carousel.tick(10_000.0);
        carousel.begin_drag();
        carousel.on_drag_end(-500.0, -900.0);
        carousel.set_hover(true);
        carousel.toggle_play_pause();
        carousel.go_to(3);

        assert_eq!(carousel.current_index(), 0);
        assert_eq!(carousel.progress(), 0.0);
        assert!(!carousel.is_paused());
        assert!(!carousel.is_dragging());
        assert!(changes.borrow().is_empty());
    }

    #[test]
    fn empty_deck_is_inert() {
        let mut carousel = CarouselController::new(Vec::new(), options(true));
        assert_eq!(carousel.mode(), CarouselMode::Idle);
        assert!(carousel.current_slide().is_none());

        carousel.next();
        carousel.previous();
        carousel.tick(1_000.0);
        carousel.go_to(2);
        carousel.begin_drag();
        carousel.on_drag_end(-900.0, -900.0);
        carousel.media_settled(0, Ok(()));

        assert_eq!(carousel.render_state().len, 0);
        assert_eq!(carousel.current_index(), 0);
    }

    fn video_deck() -> Vec<Slide> {
        let mut slides = deck(3);
        slides[0] = Slide::video("v0", "intro.mp4", "Intro");
        slides[2] = Slide::video("v2", "farm.mp4", "Farm");
        slides
    }

    #[test]
    fn media_follows_the_active_slide() {
        let media = RecordingMedia::default();
        let calls = Rc::clone(&media.calls);
        let mut carousel =
            CarouselController::new(video_deck(), options(true)).with_media(Box::new(media));

        assert_eq!(*calls.borrow(), vec![Call::Play(0)]);
        carousel.media_settled(0, Ok(()));

        carousel.go_to(2);
        assert_eq!(*calls.borrow(), vec![Call::Play(0), Call::Pause(0), Call::Play(2)]);
    }

    #[test]
    fn pause_while_play_pending_is_deferred() {
        let media = RecordingMedia::default();
        let calls = Rc::clone(&media.calls);
        let mut carousel =
            CarouselController::new(video_deck(), options(true)).with_media(Box::new(media));

        carousel.toggle_play_pause();
        assert_eq!(*calls.borrow(), vec![Call::Play(0)]);

        carousel.media_settled(0, Ok(()));
        assert_eq!(*calls.borrow(), vec![Call::Play(0), Call::Pause(0)]);
        assert_eq!(carousel.media.state(0), MediaPlayback::Idle);
    }

    #[test]
    fn rejected_play_does_not_disturb_the_carousel() {
        let media = RecordingMedia::default();
        let mut carousel =
            CarouselController::new(video_deck(), options(true)).with_media(Box::new(media));

        carousel.media_settled(0, Err(MediaError::Rejected("autoplay blocked".to_string())));
        assert!(carousel.is_playing());
        assert_eq!(carousel.media.state(0), MediaPlayback::Idle);

        carousel.tick(1_000.0);
        assert_eq!(carousel.current_index(), 1);
    }

    #[test]
    fn destroying_releases_media() {
        let media = RecordingMedia::default();
        let calls = Rc::clone(&media.calls);
        let carousel =
            CarouselController::new(video_deck(), options(true)).with_media(Box::new(media));
        drop(carousel);

        assert_eq!(calls.borrow().last(), Some(&Call::Release));
    }

    fn channel_timer() -> (ProgressTimer, mpsc::Receiver<TimerTick>) {
        let (tx, rx) = mpsc::channel();
        let sink: TickSink = Arc::new(move |tick| tx.send(tick).is_ok());
        (ProgressTimer::new(Duration::from_millis(5), sink), rx)
    }

    #[test]
    fn timer_is_released_when_playback_stops() {
        let (timer, _rx) = channel_timer();
        let mut carousel = CarouselController::new(deck(3), options(true)).with_timer(timer);
        assert!(carousel.timer.as_ref().is_some_and(ProgressTimer::is_armed));

        carousel.toggle_play_pause();
        assert!(carousel.timer.as_ref().is_some_and(|t| !t.is_armed()));

        carousel.toggle_play_pause();
        assert!(carousel.timer.as_ref().is_some_and(ProgressTimer::is_armed));
    }

    #[test]
    fn single_slide_never_arms_the_timer() {
        let (timer, _rx) = channel_timer();
        let carousel = CarouselController::new(deck(1), options(true)).with_timer(timer);
        assert!(carousel.timer.as_ref().is_some_and(|t| !t.is_armed()));
    }

    #[test]
    fn stale_timer_ticks_are_ignored() {
        let (timer, _rx) = channel_timer();
        let mut carousel = CarouselController::new(deck(3), options(true)).with_timer(timer);
        let generation = carousel.timer.as_ref().map(ProgressTimer::generation).unwrap_or(0);

        carousel.next();
        carousel.on_timer_tick(TimerTick {
            generation,
            elapsed_ms: 600.0,
        });
        assert_eq!(carousel.progress(), 0.0);

        carousel.on_timer_tick(TimerTick {
            generation: generation + 1,
            elapsed_ms: 600.0,
        });
        assert_eq!(carousel.progress(), 60.0);
    }

    #[test]
    fn destroying_stops_ticks_and_callbacks() {
        let (timer, rx) = channel_timer();
        let (carousel, changes) = recording(CarouselController::new(deck(3), options(true)));
        let carousel = carousel.with_timer(timer);

        let _ = rx.recv_timeout(Duration::from_secs(2));
        drop(carousel);

        while rx.try_recv().is_ok() {}
        assert_eq!(
            rx.recv_timeout(Duration::from_millis(50)),
            Err(RecvTimeoutError::Disconnected)
        );
        assert!(changes.borrow().is_empty());
    }
}
