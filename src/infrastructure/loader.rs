use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::application::ports::LineSource;
use crate::config::Config;

/// An adapter that implements the `LineSource` port.
///
/// Reads the configured cities file line by line and returns the lines
/// trimmed of surrounding whitespace. The file handle is released as soon
/// as the load finishes, on success and on failure alike.
pub struct FileLineSource {
    path: PathBuf,
}

impl FileLineSource {
    /// Creates a new `FileLineSource` from the application config.
    pub fn new(config: &Config) -> Self {
        Self {
            path: config.paths.cities_file.clone(),
        }
    }
}

impl LineSource for FileLineSource {
    fn load(&self) -> Result<Vec<String>> {
        let file = File::open(&self.path)
            .with_context(|| format!("Failed to open cities file: {:?}", self.path))?;

        let mut lines = Vec::new();
        for line in BufReader::new(file).lines() {
            let line =
                line.with_context(|| format!("Failed to read cities file: {:?}", self.path))?;
            lines.push(line.trim().to_string());
        }
        Ok(lines)
    }
}
