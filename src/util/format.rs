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

/// Formats a duration in seconds into a human-readable `MM:SS` string.
pub(crate) fn format_time(total_seconds: u64) -> String {
    let mins = total_seconds / 60;
    let secs = total_seconds % 60;
    format!("{:02}:{:02}", mins, secs)
}

/// Formats the time left on a slide as `MM:SS`.
///
/// Partial seconds count as a whole one, so the display only reaches
/// `00:00` when the slide is about to change.
pub(crate) fn format_remaining(remaining_ms: u64) -> String {
    format_time(remaining_ms.div_ceil(1000))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_minutes_and_seconds() {
        assert_eq!(format_time(65), "01:05");
        assert_eq!(format_time(3600), "60:00");
    }

    #[test]
    fn remaining_time_rounds_up() {
        assert_eq!(format_remaining(0), "00:00");
        assert_eq!(format_remaining(1), "00:01");
        assert_eq!(format_remaining(9_001), "00:10");
        assert_eq!(format_remaining(10_000), "00:10");
    }
}
