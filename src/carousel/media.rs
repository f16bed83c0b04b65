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

//! Coordination of media playback for video slides.
//!
//! Media is owned by an external player. Starting playback is asynchronous:
//! [`MediaHandle::play`] only issues the request, and the outcome arrives
//! later through [`MediaCoordinator::settled`]. A pause requested while a
//! play is still in flight is deferred until that play settles, so the two
//! requests never overlap.

use log::{debug, warn};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub(crate) enum MediaError {
    /// The player refused or failed to start the media.
    #[error("playback rejected: {0}")]
    Rejected(String),

    /// There is no player backend to talk to.
    #[error("media playback unavailable: {0}")]
    Unavailable(String),

    /// The player worker has gone away.
    #[error("media worker is no longer running")]
    WorkerGone,
}

/// An externally owned media player.
///
/// A successful `play` only means the request was accepted. The caller must
/// feed the eventual result back with [`MediaCoordinator::settled`].
pub(crate) trait MediaHandle {
    fn play(&mut self, index: usize, src: &str) -> Result<(), MediaError>;
    fn pause(&mut self, index: usize) -> Result<(), MediaError>;

    /// Drops any outstanding requests, no further results are expected.
    fn release(&mut self) {}
}

/// Playback state of one slide's media.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) enum MediaPlayback {
    Idle,
    PlayPending { pause_requested: bool },
    Playing,
}

/// Tracks per-slide playback and drives a [`MediaHandle`].
pub(crate) struct MediaCoordinator {
    handle: Option<Box<dyn MediaHandle>>,
    sources: Vec<Option<String>>,
    states: Vec<MediaPlayback>,
}

impl MediaCoordinator {
    pub(crate) fn new(sources: Vec<Option<String>>) -> Self {
        let states = vec![MediaPlayback::Idle; sources.len()];
        Self {
            handle: None,
            sources,
            states,
        }
    }

    pub(crate) fn attach(&mut self, handle: Box<dyn MediaHandle>) {
        self.handle = Some(handle);
    }

    #[cfg(test)]
    pub(crate) fn state(&self, index: usize) -> MediaPlayback {
        self.states.get(index).copied().unwrap_or(MediaPlayback::Idle)
    }

    /// Moves the media for `index` towards playing or paused.
    pub(crate) fn update(&mut self, index: usize, should_play: bool) {
        let Some(handle) = self.handle.as_mut() else {
            return;
        };
        let Some(Some(src)) = self.sources.get(index) else {
            return;
        };
        let state = &mut self.states[index];

        match (*state, should_play) {
            (MediaPlayback::Idle, true) => match handle.play(index, src) {
                Ok(()) => {
                    *state = MediaPlayback::PlayPending {
                        pause_requested: false,
                    }
                }
                Err(e) => warn!("Video play failed for slide {}: {}", index, e),
            },
            (MediaPlayback::PlayPending { .. }, true) => {
                *state = MediaPlayback::PlayPending {
                    pause_requested: false,
                };
            }
            (MediaPlayback::PlayPending { .. }, false) => {
                debug!("Deferring pause of slide {} until play settles", index);
                *state = MediaPlayback::PlayPending {
                    pause_requested: true,
                };
            }
            (MediaPlayback::Playing, false) => {
                if let Err(e) = handle.pause(index) {
                    warn!("Video pause failed for slide {}: {}", index, e);
                }
                *state = MediaPlayback::Idle;
            }
            (MediaPlayback::Playing, true) | (MediaPlayback::Idle, false) => {}
        }
    }

    /// Applies the outcome of an earlier play request.
    ///
    /// Results for slides that are not waiting on a play are stale and are
    /// ignored.
    pub(crate) fn settled(&mut self, index: usize, result: Result<(), MediaError>) {
        let Some(handle) = self.handle.as_mut() else {
            return;
        };
        let Some(state) = self.states.get_mut(index) else {
            return;
        };
        let MediaPlayback::PlayPending { pause_requested } = *state else {
            return;
        };

        match result {
            Ok(()) if pause_requested => {
                if let Err(e) = handle.pause(index) {
                    warn!("Deferred pause failed for slide {}: {}", index, e);
                }
                *state = MediaPlayback::Idle;
            }
            Ok(()) => *state = MediaPlayback::Playing,
            Err(e) => {
                // Nothing started, so there is nothing to pause either.
                warn!("Video play failed for slide {}: {}", index, e);
                *state = MediaPlayback::Idle;
            }
        }
    }

    /// Cancels pending waits and detaches the player.
    pub(crate) fn release(&mut self) {
        if let Some(mut handle) = self.handle.take() {
            handle.release();
        }
        self.states.fill(MediaPlayback::Idle);
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use std::{cell::RefCell, rc::Rc};

    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    pub(crate) enum Call {
        Play(usize),
        Pause(usize),
        Release,
    }

    /// Records every call made to the player.
    #[derive(Clone, Default)]
    pub(crate) struct RecordingMedia {
        pub(crate) calls: Rc<RefCell<Vec<Call>>>,
        pub(crate) reject_play: bool,
    }

    impl MediaHandle for RecordingMedia {
        fn play(&mut self, index: usize, _src: &str) -> Result<(), MediaError> {
            self.calls.borrow_mut().push(Call::Play(index));
            if self.reject_play {
                Err(MediaError::Rejected("autoplay blocked".to_string()))
            } else {
                Ok(())
            }
        }

        fn pause(&mut self, index: usize) -> Result<(), MediaError> {
            self.calls.borrow_mut().push(Call::Pause(index));
            Ok(())
        }

        fn release(&mut self) {
            self.calls.borrow_mut().push(Call::Release);
        }
    }

    fn coordinator() -> (MediaCoordinator, Rc<RefCell<Vec<Call>>>) {
        let media = RecordingMedia::default();
        let calls = Rc::clone(&media.calls);
        let mut coordinator = MediaCoordinator::new(vec![Some("a.mp4".to_string()), None]);
        coordinator.attach(Box::new(media));
        (coordinator, calls)
    }

    #[test]
    fn play_is_pending_until_settled() {
        let (mut media, calls) = coordinator();
        media.update(0, true);
        assert_eq!(
            media.state(0),
            MediaPlayback::PlayPending {
                pause_requested: false
            }
        );

        media.settled(0, Ok(()));
        assert_eq!(media.state(0), MediaPlayback::Playing);
        assert_eq!(*calls.borrow(), vec![Call::Play(0)]);
    }

    #[test]
    fn pause_during_pending_play_is_deferred() {
        let (mut media, calls) = coordinator();
        media.update(0, true);
        media.update(0, false);

        assert_eq!(*calls.borrow(), vec![Call::Play(0)]);

        media.settled(0, Ok(()));
        assert_eq!(*calls.borrow(), vec![Call::Play(0), Call::Pause(0)]);
        assert_eq!(media.state(0), MediaPlayback::Idle);
    }

    #[test]
    fn rejected_play_needs_no_pause() {
        let (mut media, calls) = coordinator();
        media.update(0, true);
        media.update(0, false);
        media.settled(0, Err(MediaError::Rejected("blocked".to_string())));

        assert_eq!(*calls.borrow(), vec![Call::Play(0)]);
        assert_eq!(media.state(0), MediaPlayback::Idle);
    }

    #[test]
    fn synchronous_rejection_stays_idle() {
        let media = RecordingMedia {
            reject_play: true,
            ..Default::default()
        };
        let mut coordinator = MediaCoordinator::new(vec![Some("a.mp4".to_string())]);
        coordinator.attach(Box::new(media));

        coordinator.update(0, true);
        assert_eq!(coordinator.state(0), MediaPlayback::Idle);
    }

    #[test]
    fn slides_without_media_are_ignored() {
        let (mut media, calls) = coordinator();
        media.update(1, true);
        media.update(1, false);
        assert!(calls.borrow().is_empty());
    }

    #[test]
    fn release_drops_pending_waits() {
        let (mut media, calls) = coordinator();
        media.update(0, true);
        media.release();
        media.settled(0, Ok(()));

        assert_eq!(*calls.borrow(), vec![Call::Play(0), Call::Release]);
        assert_eq!(media.state(0), MediaPlayback::Idle);
    }
}
