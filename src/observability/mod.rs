//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! FabricConnection operations produce:
//!     → logging.rs (structured log events via tracing)
//!     → metrics.rs (counters, gauges, histograms via metrics)
//!
//! Consumers:
//!     → whatever subscriber / recorder the embedding application installs
//! ```
//!
//! # Design Decisions
//! - The library never installs a metrics exporter itself
//! - Private key material never reaches either sink

pub mod logging;
pub mod metrics;
