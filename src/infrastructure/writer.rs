use std::fs::File;
use std::path::PathBuf;

use anyhow::{Context, Result};
use csv::{QuoteStyle, WriterBuilder};

use crate::application::ports::GroupSink;
use crate::config::Config;
use crate::model::GroupTable;

/// An adapter that implements the `GroupSink` port.
///
/// Writes one `CODE;NAME` line per record, states in first-seen order and
/// cities in the order the table holds them. Any file already at the output
/// path is truncated.
pub struct FileGroupSink {
    path: PathBuf,
}

impl FileGroupSink {
    /// Creates a new `FileGroupSink` from the application config.
    pub fn new(config: &Config) -> Self {
        Self {
            path: config.paths.output_file.clone(),
        }
    }
}

impl GroupSink for FileGroupSink {
    fn write(&self, table: &GroupTable) -> Result<()> {
        let file = File::create(&self.path)
            .with_context(|| format!("Failed to create output file: {:?}", self.path))?;

        // The input format carries no quoting, so none is written back.
        let mut writer = WriterBuilder::new()
            .delimiter(b';')
            .quote_style(QuoteStyle::Never)
            .from_writer(file);

        for (code, cities) in table.iter() {
            for city in cities {
                writer
                    .write_record([code, city.as_str()])
                    .with_context(|| format!("Failed to write output file: {:?}", self.path))?;
            }
        }
        writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use tempdir::TempDir;

    use super::FileGroupSink;
    use crate::application::ports::GroupSink;
    use crate::model::GroupTable;

    fn sink_for(path: &Path) -> FileGroupSink {
        FileGroupSink {
            path: path.to_path_buf(),
        }
    }

    #[test]
    fn writes_one_line_per_record() -> anyhow::Result<()> {
        let dir = TempDir::new("city-formatter-writer")?;
        let path = dir.path().join("out.txt");

        let mut table = GroupTable::from_lines(["AB;city_name_z", "AB;city_name_xxx", "CA;foo"])?;
        table.sort_by_length();
        sink_for(&path).write(&table)?;

        let written = std::fs::read_to_string(&path)?;
        assert_eq!(written, "AB;city_name_xxx\nAB;city_name_z\nCA;foo\n");
        Ok(())
    }

    #[test]
    fn truncates_an_existing_output_file() -> anyhow::Result<()> {
        let dir = TempDir::new("city-formatter-writer")?;
        let path = dir.path().join("out.txt");
        std::fs::write(&path, "stale contents from a previous run\n")?;

        let table = GroupTable::from_lines(["WA;Seattle"])?;
        sink_for(&path).write(&table)?;

        assert_eq!(std::fs::read_to_string(&path)?, "WA;Seattle\n");
        Ok(())
    }

    #[test]
    fn empty_table_leaves_an_empty_file() -> anyhow::Result<()> {
        let dir = TempDir::new("city-formatter-writer")?;
        let path = dir.path().join("out.txt");

        sink_for(&path).write(&GroupTable::default())?;

        assert_eq!(std::fs::read_to_string(&path)?, "");
        Ok(())
    }

    #[test]
    fn unwritable_path_is_an_error() {
        let sink = sink_for(Path::new("no/such/dir/out.txt"));
        let err = sink
            .write(&GroupTable::default())
            .err()
            .expect("create must fail");
        assert!(format!("{err:#}").contains("output file"));
    }
}
