use super::ports::{GroupSink, LineSource};
use crate::model::GroupTable;

/// The main application service that orchestrates the formatting pipeline.
/// It is generic over the LineSource and GroupSink traits, allowing for
/// dependency injection.
pub struct FormatterService<S: LineSource, W: GroupSink> {
    source: S,
    sink: W,
}

impl<S: LineSource, W: GroupSink> FormatterService<S, W> {
    /// Creates a new service with concrete implementations of the ports.
    pub fn new(source: S, sink: W) -> Self {
        Self { source, sink }
    }

    /// Executes the entire pipeline: load, group, sort, write.
    ///
    /// Grouping finishes before the sink is touched, so a malformed input
    /// line never truncates an existing output file.
    pub fn run(&self) -> anyhow::Result<()> {
        tracing::info!("Starting Stage 1: Loading");
        let lines = self.source.load()?;
        tracing::info!("Stage 1: loaded {} lines", lines.len());

        tracing::info!("Starting Stage 2: Grouping");
        let mut table = GroupTable::from_lines(lines.iter().map(String::as_str))?;
        tracing::info!(
            "Stage 2: grouped {} records into {} states",
            table.record_count(),
            table.group_count()
        );

        tracing::info!("Starting Stage 3: Sorting");
        table.sort_by_length();
        tracing::info!("Stage 3: Sorting finished successfully");

        tracing::info!("Starting Stage 4: Writing");
        self.sink.write(&table)?;
        tracing::info!("Stage 4: Writing finished successfully");

        Ok(())
    }
}
