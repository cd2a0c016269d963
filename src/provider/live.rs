//! Live data provider for real-time host information.

use crate::collector::{Collector, CollectorTiming, CommandRunner, Environment, FileSystem};
use crate::model::Snapshot;

use super::SnapshotProvider;

/// Provider that collects a fresh snapshot from the host on every advance.
pub struct LiveProvider<F: FileSystem, R: CommandRunner, E: Environment> {
    collector: Collector<F, R, E>,
}

impl<F: FileSystem, R: CommandRunner, E: Environment> LiveProvider<F, R, E> {
    /// Creates a new live provider.
    ///
    /// # Arguments
    /// * `collector` - The collector to use for gathering host facts
    pub fn new(collector: Collector<F, R, E>) -> Self {
        Self { collector }
    }
}

impl<F: FileSystem, R: CommandRunner, E: Environment> SnapshotProvider for LiveProvider<F, R, E> {
    fn advance(&mut self) -> Snapshot {
        self.collector.collect_snapshot()
    }

    fn collector_timing(&self) -> Option<&CollectorTiming> {
        self.collector.last_timing()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collector::ProbeConfig;
    use crate::collector::mock::{MockEnv, MockFs, MockRunner};

    fn provider() -> LiveProvider<MockFs, MockRunner, MockEnv> {
        let collector = Collector::new(
            MockFs::typical_system(),
            MockRunner::typical_system(),
            MockEnv::typical_system(),
            ProbeConfig::default(),
        );
        LiveProvider::new(collector)
    }

    #[test]
    fn test_live_provider_advance() {
        let mut provider = provider();

        // No timing before the first collection
        assert!(provider.collector_timing().is_none());

        let snapshot = provider.advance();
        assert_eq!(snapshot.hostname, "devbox");
        assert!(provider.collector_timing().is_some());
    }

    #[test]
    fn test_live_provider_fresh_snapshot_each_advance() {
        let mut provider = provider();
        let first = provider.advance();
        let second = provider.advance();
        assert_eq!(first.os_name, second.os_name);
        assert_eq!(
            provider.collector_timing().map(|t| t.total),
            Some(second.fetch_duration)
        );
    }
}
