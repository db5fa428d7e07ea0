use crate::model::GroupTable;

/// A contract for a service that performs Stage 1:
/// reading the raw city list into an ordered sequence of lines.
pub trait LineSource {
    fn load(&self) -> anyhow::Result<Vec<String>>;
}

/// A contract for a service that performs Stage 4:
/// flushing the grouped and sorted records to their destination.
pub trait GroupSink {
    fn write(&self, table: &GroupTable) -> anyhow::Result<()>;
}
