//! kansa-types: Pure data types for the kansa validation pipeline.
//!
//! This crate provides:
//!
//! - **Targets**: `TargetKind` and `ValidationTarget`, the units of work
//! - **Results**: `ValidationResult` and `ValidationReport`, the outcomes
//! - **Errors**: `FatalError`, the abort-the-run taxonomy
//!
//! All types are immutable once constructed and carry no behavior beyond
//! construction and accessors. Everything serializes with serde so tests
//! and downstream tooling can assert on reports structurally.

pub mod error;
pub mod report;
pub mod target;

pub use error::FatalError;
pub use report::{ResultAggregator, Status, ValidationReport, ValidationResult};
pub use target::{TargetKind, ValidationTarget};
