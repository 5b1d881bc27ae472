//! Command handler layer.
//!
//! This module owns CLI-oriented orchestration and output wiring.
//!
//! ## Files
//! - `pipeline.rs` — generate/scan.
//! - `inspect.rs` — installed/mapping.
//!
//! ## Principles
//! - Parse/match CLI inputs here.
//! - Delegate business logic to `services/*`.
//! - Keep behavior and output schema stable.

pub mod inspect;
pub mod pipeline;

pub use inspect::handle_inspect_commands;
pub use pipeline::handle_pipeline_commands;
