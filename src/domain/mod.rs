//! Shared data model layer (structs/enums only).
//!
//! ## Purpose
//! - Keep report/table types in one place so services and command handlers
//!   agree on a single definition.
//! - Make `--json` output schema changes explicit and reviewable.
//!
//! ## Files
//! - `models.rs` — mapping table, installed index, scan/resolution reports.
//! - `errors.rs` — operator-facing domain errors.
//!
//! ## Rule of thumb
//! Domain types should be data-only: no filesystem/network/process side effects.

pub mod errors;
pub mod models;
