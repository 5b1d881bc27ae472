//! Service layer containing business logic and side-effect helpers.
//!
//! ## Service map
//! - `scanner.rs` — walk the tree and extract imports (AST or legacy regex).
//! - `stdlib.rs` — standard-library module filter.
//! - `project.rs` — project-root validation and internal-module detection.
//! - `mapping.rs` — module -> package table persistence.
//! - `pip.rs` — installer and installed-package index over `pip`.
//! - `index.rs` — package index existence probe.
//! - `prompt.rs` — operator prompt.
//! - `resolver.rs` — per-module decision procedure.
//! - `manifest.rs` — `name==version` manifest rendering/writing.
//! - `pipeline.rs` — scan -> resolve -> write sequencing.
//! - `config.rs` — TOML configuration lookup.
//! - `logging.rs` — stderr log dispatch.
//! - `output.rs` — JSON/text output helpers.
//!
//! ## Conventions
//! - External tools sit behind the traits in `pip.rs`, `index.rs` and
//!   `prompt.rs`; tests swap in the fakes from `testing.rs`.
//! - Keep command handlers thin; delegate to services.

pub mod config;
pub mod index;
pub mod logging;
pub mod manifest;
pub mod mapping;
pub mod output;
pub mod pip;
pub mod pipeline;
pub mod project;
pub mod prompt;
pub mod resolver;
pub mod scanner;
pub mod stdlib;
#[cfg(test)]
pub mod testing;
