use crate::{
    FileError,
    WriteMode,
    exists,
    write_string,
};
use chrono::offset::Local;
use std::sync::Mutex;

// `None` disables logging
static LOG_FILE_PATH: Mutex<Option<String>> = Mutex::new(None);

pub fn set_log_file_path(path: Option<String>) {
    if let Ok(mut log_file_path) = LOG_FILE_PATH.lock() {
        *log_file_path = path;
    }
}

fn get_log_file_path() -> Option<String> {
    LOG_FILE_PATH.lock().ok().and_then(|path| path.clone())
}

pub fn initialize_log_file(path: &str, remove_existing_file: bool) -> Result<(), FileError> {
    if remove_existing_file && exists(path) {
        if let Err(e) = std::fs::copy(path, &format!("{path}-backup")) {
            return Err(FileError::from_std(e, path));
        }
    }

    let mode = if remove_existing_file {
        WriteMode::CreateOrTruncate
    } else {
        WriteMode::AppendOrCreate
    };

    write_string(path, "", mode)
}

/// It does nothing if `set_log_file_path` was never called. A failure to
/// write a log never aborts the caller.
pub fn write_log(owner: &str, msg: &str) {
    if let Some(path) = get_log_file_path() {
        let _ = write_string(
            &path,
            &format!(
                "{} | {owner:>24} | {msg}\n",
                Local::now().to_rfc2822(),
            ),
            WriteMode::AppendOrCreate,
        );
    }
}
