//! # Lojinha Architecture
//!
//! Lojinha is a **UI-agnostic inventory and point-of-sale library** with a CLI
//! shipped on top. Everything a front end needs (catalog management, the stock
//! ledger, derived views) lives behind plain Rust functions; the binary only
//! parses arguments and renders tables.
//!
//! ## The Layered Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (args.rs + main.rs)                              │
//! │  - Parses arguments, formats tables, handles terminal I/O   │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Normalizes inputs (SKUs/names → stable ids)              │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Business logic: ledger transactions and derived views    │
//! │  - Operates on Rust types, returns structured CmdResults    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - Store owning the four collections, loaded at startup     │
//! │  - StorageBackend port: FsBackend (prod), MemBackend (test) │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward (API, commands, storage), code:
//! - Takes regular Rust function arguments
//! - Returns regular Rust types (`Result<CmdResult>`)
//! - **Never** writes to stdout/stderr
//! - **Never** calls `std::process::exit`
//!
//! ## The Single-Writer Model
//!
//! There is exactly one logical writer (the interactive user). Every mutating
//! command rewrites the whole persisted state as its final step, so persistence
//! is never optional, batched or debounced, and no locking exists anywhere.
//! Derived views (dashboard, report, export) are recomputed from the live
//! collections on every read.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade—entry point for all operations
//! - [`commands`]: Ledger transactions, catalog management and derived views
//! - [`store`]: Storage port and the collection-owning `Store`
//! - [`model`]: Core data types (`Product`, `Sale`, `Purchase`, `Customer`)
//! - [`money`]: Integer-centavo money type
//! - [`config`]: Presentation configuration
//! - [`error`]: Error types
//! - `cli` concerns live in `args.rs`/`main.rs` (not part of the lib API)

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod money;
pub mod store;

/// Products at or below this stock level show up in the low-stock alerts and
/// the restock ranking. Zero-stock products are counted separately.
pub const LOW_STOCK_THRESHOLD: i64 = 5;
