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

//! Application configuration.
//!
//! This module manages the application configuration file, which holds the
//! carousel options and the slide deck.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::carousel::slide::{CarouselOptions, Slide};

pub(crate) const CONFIG_NAME: &str = "siwa";

const HERO_CTAS: [&str; 3] = ["Read Our Story", "Meet the Women", "Join the Movement"];

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub(crate) struct AppConfig {
    pub(crate) version: u32,
    pub(crate) log_level: String,
    pub(crate) carousel: CarouselOptions,
    pub(crate) slides: Vec<Slide>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: 1,
            log_level: "info".to_string(),
            carousel: CarouselOptions::default(),
            slides: default_slides(),
        }
    }
}

impl AppConfig {
    pub(crate) fn has_video(&self) -> bool {
        self.slides.iter().any(Slide::is_video)
    }
}

fn default_slides() -> Vec<Slide> {
    vec![
        Slide::image(
            "hero-1",
            "When the Clouds Speak, <>She Listens</>",
            "Meet the women farmers of Ghana who are teaching artificial intelligence to \
             understand the language of nature, and transforming climate resilience for rural \
             Africa in the process.",
        )
        .with_ctas(&HERO_CTAS),
        Slide::image(
            "hero-2",
            "Empowering Farmers, <>One Forecast at a Time</>",
            "Discover how SIWA leverages indigenous knowledge and cutting-edge AI to deliver \
             accurate, climate-smart weather forecasts tailored for smallholder farmers in Ghana.",
        )
        .with_ctas(&HERO_CTAS),
        Slide::image(
            "hero-3",
            "Bridging Tradition and Technology for <>Climate Resilience</>",
            "Explore how SIWA combines the wisdom of Ghanaian women farmers with advanced AI to \
             create a weather app that supports sustainable agriculture and food security.",
        )
        .with_ctas(&HERO_CTAS),
    ]
}

/// Loads the configuration, creating it with defaults on first run.
pub(crate) fn load_config() -> Result<AppConfig, confy::ConfyError> {
    confy::load(CONFIG_NAME, None)
}

pub(crate) fn save_config(cfg: &AppConfig) -> Result<(), confy::ConfyError> {
    confy::store(CONFIG_NAME, None, cfg)
}

/// Location of the configuration file, the log file lives beside it.
pub(crate) fn config_path() -> Result<PathBuf, confy::ConfyError> {
    confy::get_configuration_file_path(CONFIG_NAME, None)
}
