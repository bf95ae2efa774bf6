// src/file.rs

use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::config::consts::DEFAULT_TITLE;
use crate::config::options::{ExportFormat, ExportOptions};
use crate::core::sanitize::sanitize_filename;
use crate::engine::WeekView;
use crate::render::render_export;

/// Render `view` per ExportOptions and write it to `export.out_path()`.
/// Returns the final path written to.
pub fn write_export(
    export: &ExportOptions,
    view: &WeekView,
) -> Result<PathBuf, Box<dyn std::error::Error>> {
    let path = export.out_path();
    write_export_to(&path, export.format, view, export.include_headers)?;
    Ok(path)
}

/// Same as `write_export` with an explicit path (CLI `-o`).
pub fn write_export_to(
    path: &Path,
    format: ExportFormat,
    view: &WeekView,
    include_headers: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }

    let contents = render_export(format, view, include_headers)?;
    fs::write(path, contents)?;
    logf!("Export: {:?} → {} ({})", format, path.display(), view.week.label);
    Ok(())
}

/// `-o` handling: empty → default file name, directory (or trailing separator) → join.
pub fn resolve_single_out_path(user_o: &str, default_filename: &str) -> Result<PathBuf, Box<dyn std::error::Error>> {
    if user_o.is_empty() { return Ok(PathBuf::from(default_filename)); }
    let p = PathBuf::from(normalize_separators(user_o));
    if looks_like_dir_hint(user_o) || p.is_dir() {
        ensure_directory(&p)?; Ok(p.join(default_filename))
    } else {
        Ok(p)
    }
}

/// File name for a schedule export: `<sanitized title><suffix>.<ext>`.
pub fn default_file_name(title: &str, format: ExportFormat) -> String {
    let stem = sanitize_filename(title, DEFAULT_TITLE);
    join!(&stem, format.stem_suffix(), ".", format.ext())
}

pub fn normalize_separators(p: &str) -> String {
    let sep = std::path::MAIN_SEPARATOR;
    p.chars().map(|c| if c=='/'||c=='\\' { sep } else { c }).collect()
}

pub fn ensure_directory(dir: &Path) -> Result<(), Box<dyn std::error::Error>> {
    if dir.exists() && !dir.is_dir() {
        return Err(format!("Path exists but is not a directory: {}", dir.display()).into());
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}

pub fn looks_like_dir_hint(p: &str) -> bool {
    p.ends_with('/') || p.ends_with('\\')
}
