use crate::error::Error;
use chrono::Local;
use lazy_static::lazy_static;
use regex::Regex;
use std::{
    fmt::Debug,
    fs,
    path::{Path, PathBuf},
};
use tracing::{info, warn};

lazy_static! {
    static ref UNSAFE_FILENAME_CHARACTERS: Regex = Regex::new(r"[^A-Za-z0-9_\-]+").unwrap();
}

/// Receives human-readable diagnostic dumps. Never consulted by the engine.
pub trait Log: Debug {
    fn write(&self, source: &str, content: &str);
}

/// Writes every dump into a new file inside a directory.
#[derive(Debug, Clone)]
pub struct FileLog {
    directory: PathBuf,
}

impl FileLog {
    pub fn new<P: AsRef<Path>>(directory: P) -> Self {
        Self {
            directory: directory.as_ref().to_path_buf(),
        }
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    fn write_file(&self, source: &str, content: &str) -> Result<PathBuf, Error> {
        fs::create_dir_all(&self.directory)?;

        let path = self.directory.join(Self::file_name(source));
        fs::write(&path, content)?;

        Ok(path)
    }

    fn file_name(source: &str) -> String {
        let source = UNSAFE_FILENAME_CHARACTERS.replace_all(source, "_");
        format!("{}{}.log", source, Local::now().format("%Y%m%d%H%M%S%f"))
    }
}

impl Log for FileLog {
    fn write(&self, source: &str, content: &str) {
        match self.write_file(source, content) {
            Ok(path) => info!(source, path = %path.display(), "wrote diagnostic log"),
            Err(e) => warn!(source, error = %e, "couldn't write diagnostic log"),
        }
    }
}

/// Emits every dump as a tracing event.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLog;

impl Log for TracingLog {
    fn write(&self, source: &str, content: &str) {
        info!(source, "{}", content);
    }
}
