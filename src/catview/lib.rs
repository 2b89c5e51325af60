//! # Catview Architecture
//!
//! Catview is a **UI-agnostic product-catalog library** with a terminal client.
//! It fetches a product list, keeps it as the session's canonical list, and
//! derives a filtered table from it as the user deletes rows, renames
//! products and changes filters. Edits live only as long as the session.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, prints tables, runs the shell          │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over the catalog view and product service    │
//! │  - Returns structured CmdResult values                      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  View (view.rs) + Commands (commands/*.rs)                  │
//! │  - Catalog: canonical list, criteria, recomputed rows       │
//! │  - Pure filter / delete / edit / option functions           │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Source + Cache (source/, cache/)                           │
//! │  - ProductSource trait: HTTP, file, static                  │
//! │  - SnapshotCache trait: file, memory                        │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Recompute, never patch
//!
//! The displayed rows are always `filter(canonical, criteria)`. Every trigger
//! rebuilds them from scratch, so clearing a filter brings rows back and an
//! edit can never leave a stale copy behind.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`view`]: Session state and the load lifecycle
//! - [`commands`]: Filter predicates, list mutations, option derivation, config
//! - [`source`]: Product sources and the caching product service
//! - [`cache`]: Snapshot cache abstraction and implementations
//! - [`model`]: `Product`, `FilterCriteria`, `FilterField`
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod cache;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod source;
pub mod view;
