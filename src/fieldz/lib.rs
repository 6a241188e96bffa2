//! # Fieldz Architecture
//!
//! Fieldz is a **UI-agnostic schema-building library**. This is not a CLI
//! application that happens to have some library code—it's a library that
//! happens to have a CLI client.
//!
//! ## The Two-Layer Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Owns the session's Forest, parses input, renders output  │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Core Layer (model, commands/, validate, generate, index)   │
//! │  - Pure functions from (Forest, arguments) to new values    │
//! │  - No I/O, no shared state, no failure modes                │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## The Forest Is Owned by the Caller
//!
//! The core holds no state of its own. Every mutation
//! (`commands::add::root`, `commands::add::child`, `commands::update::run`,
//! `commands::delete::run`) takes the current forest by reference and
//! returns a new one; the calling session threads that value through its
//! event loop and re-renders from it. `validate` and `generate` read the
//! forest without touching it.
//!
//! ## No Failure Modes in Core
//!
//! An operation aimed at an id that is not in the forest returns the forest
//! unchanged — a silent no-op, not an error. Clients are expected to pass
//! only ids resolved from the currently rendered forest (see [`index`]).
//! The [`error`] module exists for the outer layers: parse mistakes and
//! terminal I/O, nothing in the core can fail.
//!
//! ## Module Overview
//!
//! - [`model`]: Core data types (`Field`, `FieldType`, `FieldId`, `Forest`)
//! - [`commands`]: The four mutation operations, one module each
//! - [`validate`]: Structural validation, returns advisory issues
//! - [`generate`]: Name → type-tag JSON template for preview
//! - [`index`]: Display-ordinal flattening for UI clients
//! - [`error`]: Error types for the outer layers
//! - `cli`: Input parsing and terminal rendering for the binary (not part
//!   of the lib API)

pub mod commands;
pub mod error;
pub mod generate;
pub mod index;
pub mod model;
pub mod validate;
