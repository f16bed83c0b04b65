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

//! # SIWA banner carousel.
//!
//! A terminal rendition of the SIWA landing page hero: an auto-advancing
//! carousel of slides telling the story of the women farmers of Ghana.
//!
//! This application coordinates a TUI frontend built with `ratatui` and a
//! small set of background threads.
//!
//! It uses an event-driven architecture where:
//!
//! * The **Main Thread** manages the terminal lifecycle, owns the carousel
//!   controller and renders the UI.
//! * **Background Workers** drive the carousel's progress timer and, when the
//!   deck has video slides, the MPV media engine.
//! * **Event Loops** capture keyboard and mouse input to drive the UI state.
//!
//! ## Architecture
//!
//! The application follows a strict setup-run-teardown pattern to ensure the
//! terminal state is preserved even in the event of a crash. Communication
//! between the UI and background workers is handled via `std::sync::mpsc`
//! channels.

mod carousel;
mod commander;
mod config;
mod events;
mod highlight;
mod logging;
mod player;
mod render;
mod theme;
mod util;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use log::{info, warn};
use ratatui::{Terminal, backend::CrosstermBackend, layout::Rect};
use std::{
    io::{self},
    sync::{
        Arc,
        mpsc::{self, Receiver, Sender},
    },
    thread,
};

use crate::{
    carousel::{
        CarouselController,
        drag::DragTracker,
        timer::{ProgressTimer, TICK_INTERVAL, TimerTick},
    },
    commander::Commander,
    config::AppConfig,
    events::{AppEvent, process_events},
    player::MediaPlayer,
    theme::Theme,
};

/// Application state.
pub(crate) struct App {
    pub(crate) config: AppConfig,
    /// False when the configuration file could not be read and the defaults
    /// are in use. Saving would then overwrite the user's file.
    pub(crate) config_loaded: bool,

    pub(crate) theme: Theme,

    pub(crate) event_tx: Sender<AppEvent>,
    pub(crate) event_rx: Receiver<AppEvent>,

    pub(crate) carousel: CarouselController,

    pub(crate) commander: Commander,

    /// Pointer gesture in progress over the carousel.
    pub(crate) drag: DragTracker,
    /// Where the carousel was last drawn, for mouse hit-testing.
    pub(crate) carousel_area: Rect,
    pub(crate) hovering: bool,

    pub(crate) status: Option<String>,
}

impl App {
    /// Create a new instance of application state.
    ///
    /// The carousel reports slide changes and timer ticks through the event
    /// channel. A media player is only started when the deck has video.
    pub(crate) fn new(config: AppConfig) -> Self {
        let (event_tx, event_rx) = mpsc::channel();

        let slide_tx = event_tx.clone();
        let tick_tx = event_tx.clone();

        let mut carousel = CarouselController::new(config.slides.clone(), config.carousel)
            .with_slide_change(Box::new(move |index| {
                let _ = slide_tx.send(AppEvent::SlideChanged(index));
            }));

        if config.has_video() {
            carousel = carousel.with_media(Box::new(MediaPlayer::new(event_tx.clone())));
        }

        let carousel = carousel.with_timer(ProgressTimer::new(
            TICK_INTERVAL,
            Arc::new(move |tick: TimerTick| tick_tx.send(AppEvent::Tick(tick)).is_ok()),
        ));

        Self {
            config,
            config_loaded: true,
            theme: Theme::default(),
            event_tx,
            event_rx,
            carousel,
            commander: Commander::new(),
            drag: DragTracker::new(),
            carousel_area: Rect::default(),
            hovering: false,
            status: None,
        }
    }
}

/// The entry point of the application.
///
/// Loads the configuration, installs the logger, manages the terminal
/// lifecycle, and returns an error if any part of the execution fails.
fn main() -> Result<()> {
    let loaded = config::load_config();
    let config = match &loaded {
        Ok(config) => config.clone(),
        Err(_) => AppConfig::default(),
    };

    // Without a log file the application still runs, it just runs silently.
    let log_path = logging::init(&config);

    if let Ok(path) = &log_path {
        info!("Logging to {}", path.display());
    }
    if let Err(e) = &loaded {
        warn!("Failed to load configuration, using defaults: {}", e);
    }
    info!("Starting with {} slides", config.slides.len());

    let mut app = App::new(config);
    app.config_loaded = loaded.is_ok();

    let mut terminal = setup_terminal(&app)?;
    let res = run(&mut terminal, &mut app);
    restore_terminal(&mut terminal);

    res.context("Application error occurred")
}

/// Prepares the terminal for the TUI application.
///
/// This function performs the following side effects:
/// * Sets the terminal background color based on the provided theme.
/// * Enables raw mode to capture all keyboard input.
/// * Switches the terminal to the alternate screen buffer.
/// * Enables mouse capture for drag and hover.
///
/// # Errors
///
/// Returns an error if raw mode cannot be enabled or if the alternate screen
/// cannot be entered.
fn setup_terminal(app: &App) -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    // Set the background of the entire terminal window, without this we'd get
    // a thin black outline
    if let Some(hex) = Theme::to_hex(app.theme.background_colour) {
        util::term::set_terminal_bg(&hex).context("Failed to set terminal background")?;
    }

    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture).context("Failed to enter alternate screen")?;

    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;

    Ok(terminal)
}

/// Restores the terminal to its original state.
///
/// This reverses the changes made by [`setup_terminal`], including disabling
/// raw mode and mouse capture, leaving the alternate screen, and resetting the
/// background color. It also ensures the cursor is made visible again.
///
/// This function is "best-effort" and does not return a result, as it is
/// typically called during cleanup.
fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) {
    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), DisableMouseCapture, LeaveAlternateScreen).ok();
    util::term::reset_terminal_bg().ok();
    terminal.show_cursor().ok();
}

/// Starts the input thread and enters the main event loop.
///
/// The carousel's own timer thread is already running by now, it was armed
/// when the [`App`] was created.
///
/// # Errors
///
/// Returns an error if the event processing loop encounters an unrecoverable
/// application error.
fn run(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    // Spawn a thread to translate raw terminal events to application events.
    let tx_input = app.event_tx.clone();
    thread::spawn(move || {
        loop {
            let forwarded = match event::read() {
                Ok(event::Event::Key(key)) => tx_input.send(AppEvent::Key(key)),
                Ok(event::Event::Mouse(mouse)) => tx_input.send(AppEvent::Mouse(mouse)),
                Ok(event::Event::Resize(_, _)) => tx_input.send(AppEvent::Resize),
                Ok(_) => Ok(()),
                Err(e) => {
                    let _ = tx_input.send(AppEvent::FatalError(format!("Failed to read input: {}", e)));
                    break;
                }
            };

            if forwarded.is_err() {
                break;
            }
        }
    });

    // Application event loop, process events until the user quits
    process_events(terminal, app)
}
