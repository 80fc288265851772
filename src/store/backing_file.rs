// src/store/backing_file.rs
//
// Whole-file I/O for a line-oriented backing file.
//
// Every call opens, drains or replaces, and closes the file. Rewrites go
// through a temporary sibling that is synced and renamed over the target, so
// a reader sees either the old file or the new one, never a torn write.

use std::ffi::OsString;
use std::fs::{self, File, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use uuid::Uuid;

/// Create the file (and its parent directories) if it does not exist.
/// Returns `true` when the file was created.
pub fn ensure_exists(path: &Path) -> io::Result<bool> {
    if path.exists() {
        return Ok(false);
    }

    create_parent_dir(path)?;
    match OpenOptions::new().write(true).create_new(true).open(path) {
        Ok(_) => Ok(true),
        Err(err) if err.kind() == io::ErrorKind::AlreadyExists => Ok(false),
        Err(err) => Err(err),
    }
}

/// All lines of the file as raw bytes, in order, without their `\n` or
/// `\r\n` terminators. A missing file reads as empty.
///
/// Lines are not required to be UTF-8; decoding is left to the caller so one
/// bad line cannot make the rest of the file unreadable.
pub fn read_lines(path: &Path) -> io::Result<Vec<Vec<u8>>> {
    let content = match fs::read(path) {
        Ok(content) => content,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(err) => return Err(err),
    };

    let mut lines: Vec<Vec<u8>> = content
        .split(|byte| *byte == b'\n')
        .map(|line| line.strip_suffix(b"\r").unwrap_or(line).to_vec())
        .collect();
    // A terminated last line leaves one empty trailing piece
    if content.last() == Some(&b'\n') || content.is_empty() {
        lines.pop();
    }
    Ok(lines)
}

/// Replace the whole file with `lines`, one per line.
pub fn rewrite<S: AsRef<[u8]>>(path: &Path, lines: &[S]) -> io::Result<()> {
    create_parent_dir(path)?;

    let tmp_path = tmp_write_path(path);
    let write_result = (|| -> io::Result<()> {
        let file = File::create(&tmp_path)?;
        let mut writer = BufWriter::new(file);
        for line in lines {
            writer.write_all(line.as_ref())?;
            writer.write_all(b"\n")?;
        }
        writer.flush()?;
        let file = writer.into_inner().map_err(|e| e.into_error())?;
        file.sync_all()
    })();

    if let Err(err) = write_result {
        let _ = fs::remove_file(&tmp_path);
        return Err(err);
    }

    if let Err(err) = fs::rename(&tmp_path, path) {
        let _ = fs::remove_file(&tmp_path);
        return Err(err);
    }

    sync_parent_dir(path)
}

fn create_parent_dir(path: &Path) -> io::Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => fs::create_dir_all(parent),
        _ => Ok(()),
    }
}

#[cfg(unix)]
fn sync_parent_dir(path: &Path) -> io::Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => File::open(parent)?.sync_all(),
        _ => Ok(()),
    }
}

#[cfg(not(unix))]
fn sync_parent_dir(_path: &Path) -> io::Result<()> {
    Ok(())
}

fn tmp_write_path(path: &Path) -> PathBuf {
    let mut tmp: OsString = path.as_os_str().to_os_string();
    tmp.push(format!(".tmp.{}", Uuid::new_v4().simple()));
    PathBuf::from(tmp)
}
