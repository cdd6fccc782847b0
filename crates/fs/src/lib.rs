mod log;

#[cfg(test)]
mod tests;

pub use crate::log::{initialize_log_file, set_log_file_path, write_log};

use std::fmt;
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::Path;

/// ```nohighlight
///       File Already Exists    File Does not Exist
///
///    AoC       Append                 Create
///    CoT      Truncate                Create
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum WriteMode {
    AppendOrCreate,
    CreateOrTruncate,
}

impl From<WriteMode> for OpenOptions {
    fn from(m: WriteMode) -> OpenOptions {
        let mut result = OpenOptions::new();

        match m {
            WriteMode::AppendOrCreate => { result.append(true).create(true); },
            WriteMode::CreateOrTruncate => { result.write(true).truncate(true).create(true); },
        }

        result
    }
}

pub fn read_bytes(path: &str) -> Result<Vec<u8>, FileError> {
    fs::read(path).map_err(|e| FileError::from_std(e, path))
}

pub fn read_string(path: &str) -> Result<String, FileError> {
    let bytes = read_bytes(path)?;

    String::from_utf8(bytes).map_err(
        |_| FileError {
            kind: FileErrorKind::InvalidUtf8,
            given_path: Some(path.to_string()),
        }
    )
}

pub fn write_bytes(path: &str, bytes: &[u8], write_mode: WriteMode) -> Result<(), FileError> {
    let option: OpenOptions = write_mode.into();

    match option.open(path) {
        Ok(mut f) => f.write_all(bytes).map_err(|e| FileError::from_std(e, path)),
        Err(e) => Err(FileError::from_std(e, path)),
    }
}

pub fn write_string(path: &str, s: &str, write_mode: WriteMode) -> Result<(), FileError> {
    write_bytes(path, s.as_bytes(), write_mode)
}

pub fn exists(path: &str) -> bool {
    Path::new(path).exists()
}

/// `a/b/c.d` -> `a/b`, `c.d` -> ``
pub fn parent(path: &str) -> Result<String, FileError> {
    Path::new(path).parent().map(
        |p| p.to_string_lossy().to_string()
    ).ok_or_else(
        || FileError::unknown(
            String::from("path has no parent"),
            Some(path.to_string()),
        )
    )
}

pub fn create_dir_all(path: &str) -> Result<(), FileError> {
    fs::create_dir_all(path).map_err(|e| FileError::from_std(e, path))
}

/// creates the parent directories of `path`, if there are any
pub fn create_parent_dirs(path: &str) -> Result<(), FileError> {
    let parent = parent(path)?;

    if parent.is_empty() || exists(&parent) {
        Ok(())
    }

    else {
        create_dir_all(&parent)
    }
}

pub fn remove_file(path: &str) -> Result<(), FileError> {
    fs::remove_file(path).map_err(|e| FileError::from_std(e, path))
}

#[derive(Clone, PartialEq)]
pub struct FileError {
    pub kind: FileErrorKind,
    pub given_path: Option<String>,
}

impl FileError {
    pub fn from_std(e: io::Error, given_path: &str) -> Self {
        let kind = match e.kind() {
            io::ErrorKind::NotFound => FileErrorKind::FileNotFound,
            io::ErrorKind::PermissionDenied => FileErrorKind::PermissionDenied,
            io::ErrorKind::AlreadyExists => FileErrorKind::AlreadyExists,
            e => FileErrorKind::Unknown(format!("unknown error: {e:?}")),
        };

        FileError {
            kind,
            given_path: Some(given_path.to_string()),
        }
    }

    pub fn unknown(msg: String, path: Option<String>) -> Self {
        FileError {
            kind: FileErrorKind::Unknown(msg),
            given_path: path,
        }
    }

    pub fn render_error(&self) -> String {
        let path = self.given_path.clone().unwrap_or_default();

        match &self.kind {
            FileErrorKind::FileNotFound => format!("file not found: `{path}`"),
            FileErrorKind::PermissionDenied => format!("permission denied: `{path}`"),
            FileErrorKind::AlreadyExists => format!("file already exists: `{path}`"),
            FileErrorKind::InvalidUtf8 => format!("not a valid utf-8 file: `{path}`"),
            FileErrorKind::Unknown(msg) => format!("unknown file error at `{path}`: {msg}"),
        }
    }
}

impl fmt::Debug for FileError {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        write!(fmt, "{}", self.render_error())
    }
}

impl fmt::Display for FileError {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        write!(fmt, "{}", self.render_error())
    }
}

impl std::error::Error for FileError {}

#[derive(Clone, Debug, PartialEq)]
pub enum FileErrorKind {
    FileNotFound,
    PermissionDenied,
    AlreadyExists,
    InvalidUtf8,
    Unknown(String),
}
