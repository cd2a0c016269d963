//! Provider abstraction for snapshot data sources.
//!
//! This module defines the `SnapshotProvider` trait that lets the refresh
//! controller obtain snapshots without knowing how they are produced.

mod live;

pub use live::LiveProvider;

use crate::collector::CollectorTiming;
use crate::model::Snapshot;

/// Abstraction for snapshot data sources.
///
/// The trait is object-safe and can be used as `Box<dyn SnapshotProvider>`.
pub trait SnapshotProvider {
    /// Produces the next snapshot.
    ///
    /// The caller owns the returned value; providers keep no history.
    fn advance(&mut self) -> Snapshot;

    /// Returns timing information from the last snapshot collection.
    fn collector_timing(&self) -> Option<&CollectorTiming> {
        None
    }
}

impl<P: SnapshotProvider + ?Sized> SnapshotProvider for Box<P> {
    fn advance(&mut self) -> Snapshot {
        (**self).advance()
    }

    fn collector_timing(&self) -> Option<&CollectorTiming> {
        (**self).collector_timing()
    }
}
