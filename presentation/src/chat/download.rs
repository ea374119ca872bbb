//! Transcript download

use chrono::{DateTime, TimeZone};
use mentor_domain::export_file_name;
use std::io;
use std::path::{Path, PathBuf};

/// Write `text` to a timestamped file in `dir`, returning the file path.
///
/// The directory is created if needed.
pub fn write_transcript<Tz: TimeZone>(
    dir: &Path,
    text: &str,
    now: &DateTime<Tz>,
) -> io::Result<PathBuf>
where
    Tz::Offset: std::fmt::Display,
{
    std::fs::create_dir_all(dir)?;
    let path = dir.join(export_file_name(now));
    std::fs::write(&path, text)?;
    Ok(path)
}
