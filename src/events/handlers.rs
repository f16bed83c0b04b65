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

use log::{debug, error, warn};

use crate::{App, config, events::Navigation, highlight::strip_markers};

pub(super) fn handle_navigation(app: &mut App, navigation: Navigation) {
    match navigation {
        Navigation::Next => app.carousel.next(),
        Navigation::Previous => app.carousel.previous(),
        Navigation::TogglePlayPause => app.carousel.toggle_play_pause(),
        Navigation::GoTo(index) => {
            // Only existing slides can be jumped to, unlike drags and steps
            // which wrap or clamp.
            if index < app.carousel.slides().len() {
                app.carousel.go_to(index as isize);
            } else {
                app.status = Some(format!("No slide {}", index + 1));
            }
        }
    }
}

pub(super) fn handle_slide_changed(app: &mut App, index: usize) {
    if let Some(slide) = app.carousel.slides().get(index) {
        debug!("Showing slide {} ({}): {}", index + 1, slide.id, strip_markers(&slide.headline));
    }
    app.status = None;
}

pub(super) fn handle_save_config(app: &mut App) {
    if !app.config_loaded {
        warn!("Not saving defaults over an unreadable configuration file");
        app.status = Some("Configuration file could not be read, not saving".to_string());
        return;
    }

    match config::save_config(&app.config) {
        Ok(()) => app.status = Some("Configuration saved".to_string()),
        Err(e) => {
            error!("Failed to save configuration: {}", e);
            app.status = Some(format!("Failed to save configuration: {}", e));
        }
    }
}

pub(super) fn handle_error(app: &mut App, message: String) {
    error!("{}", message);
    app.status = Some(message);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;

    #[test]
    fn go_to_ignores_missing_slides() {
        let mut app = App::new(AppConfig::default());
        handle_navigation(&mut app, Navigation::GoTo(2));
        assert_eq!(app.carousel.current_index(), 2);

        handle_navigation(&mut app, Navigation::GoTo(7));
        assert_eq!(app.carousel.current_index(), 2);
        assert_eq!(app.status.as_deref(), Some("No slide 8"));
    }

    #[test]
    fn save_is_refused_when_the_file_could_not_be_read() {
        let mut app = App::new(AppConfig::default());
        app.config_loaded = false;

        handle_save_config(&mut app);

        assert_eq!(
            app.status.as_deref(),
            Some("Configuration file could not be read, not saving")
        );
    }

    #[test]
    fn slide_change_clears_status() {
        let mut app = App::new(AppConfig::default());
        handle_error(&mut app, "boom".to_string());
        assert_eq!(app.status.as_deref(), Some("boom"));

        handle_slide_changed(&mut app, 1);
        assert_eq!(app.status, None);
    }
}
