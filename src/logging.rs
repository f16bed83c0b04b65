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

//! Log file setup.
//!
//! The terminal belongs to the UI, so log output goes to `siwa.log` in the
//! configuration directory. The level comes from the configuration and can
//! be overridden with `RUST_LOG`.

use std::{fs, path::PathBuf, str::FromStr};

use anyhow::{Context, Result};
use env_logger::{Builder, Target};
use log::LevelFilter;

use crate::config::{self, AppConfig};

const LOG_FILE_NAME: &str = "siwa.log";

/// Installs the global logger.
///
/// # Errors
///
/// Returns an error if the log file cannot be created or a logger is already
/// installed.
pub(crate) fn init(config: &AppConfig) -> Result<PathBuf> {
    let path = config::config_path()
        .context("Failed to locate configuration directory")?
        .with_file_name(LOG_FILE_NAME);

    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir).with_context(|| format!("Failed to create {}", dir.display()))?;
    }

    let file = fs::File::create(&path).with_context(|| format!("Failed to create {}", path.display()))?;

    let mut builder = Builder::new();
    builder
        .target(Target::Pipe(Box::new(file)))
        .filter_level(level_filter(&config.log_level));

    if let Ok(filters) = std::env::var("RUST_LOG") {
        builder.parse_filters(&filters);
    }

    builder.try_init().context("Failed to install logger")?;

    Ok(path)
}

/// The configured level, `info` if it is not a level name.
fn level_filter(level: &str) -> LevelFilter {
    LevelFilter::from_str(level).unwrap_or(LevelFilter::Info)
}
