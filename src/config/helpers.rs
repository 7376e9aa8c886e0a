use std::path::{Path, PathBuf};

use once_cell::sync::Lazy;
use regex::Regex;

static SECTION_HEADER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*\[\s*([^\]]*?)\s*\]").expect("valid section header pattern"));

static ASSIGNMENT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*([^=;#\[]+?)\s*=").expect("valid assignment pattern"));

/// Split a `section.key` path. A path without a dot addresses the unnamed section.
pub(super) fn split_path(path: &str) -> (&str, &str) {
    path.split_once('.').unwrap_or(("", path))
}

/// Expand `~/` to the home directory.
pub(super) fn resolve_path(raw_path: &Path) -> PathBuf {
    if let Ok(rest) = raw_path.strip_prefix("~") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    }
    raw_path.to_path_buf()
}

/// Find the source line that assigns `key` in `section`, for error reporting.
///
/// The last matching line wins, mirroring last-write-wins in the builder.
/// Returns `(0, "<key not found>")` when nothing matches.
pub(super) fn find_key_line(section: &str, key: &str, raw_content: &str) -> (u32, String) {
    let mut current = "";
    let mut found = (0, "<key not found>".to_string());

    for (idx, line) in raw_content.lines().enumerate() {
        if let Some(caps) = SECTION_HEADER.captures(line) {
            current = caps.get(1).map_or("", |m| m.as_str());
            continue;
        }

        let Some(caps) = ASSIGNMENT.captures(line) else {
            continue;
        };
        let line_key = caps.get(1).map_or("", |m| m.as_str());

        if current == section && line_key == key {
            found = (idx as u32 + 1, line.trim().to_string());
        }
    }

    found
}
