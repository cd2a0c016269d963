//! hostfetch - host information snapshot library.
//!
//! This library provides the pieces used by the `hostfetch` binary:
//! - `collector` - probes, package counters and the aggregating `Collector`
//! - `model` - the immutable `Snapshot` produced by one collection pass
//! - `provider` - snapshot source abstraction (live collection)
//! - `refresh` - one-shot / follow refresh controller
//! - `fmt` - plain-text report rendering
//! - `tui` - interactive terminal front end for follow mode
//! - `logging` - log file setup

pub mod collector;
pub mod fmt;
pub mod logging;
pub mod model;
pub mod provider;
pub mod refresh;
pub mod tui;
