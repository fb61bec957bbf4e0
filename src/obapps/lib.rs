//! # obapps
//!
//! obapps is a **UI-agnostic editor core** for Openbox per-application
//! window rules, the `<application>` elements of the rc file. It is not a
//! GUI application that happens to have some library code; it's a library a
//! GUI (or anything else) drives.
//!
//! ## The layers
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │  API facade (api.rs)                                         │
//! │  - One entry point per operation; owns store + document      │
//! │  - Returns structured Result types, never touches a terminal │
//! └──────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌──────────────────────────────────────────────────────────────┐
//! │  Command layer (commands/*.rs)                               │
//! │  - Pure business logic: add, update, delete, reorder, list   │
//! │  - Validates first, mutates only on success (atomic)         │
//! └──────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌──────────────────────────────────────────────────────────────┐
//! │  Core (document, attrspec, matcher, serializer)              │
//! │  - Span-preserving parse, field table, precedence fold       │
//! └──────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌──────────────────────────────────────────────────────────────┐
//! │  Storage (store/)                                            │
//! │  - DocumentStore trait                                       │
//! │  - FileStore (production), InMemoryStore (testing)           │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## The round-trip guarantee
//!
//! The document is an ordered sequence of parsed rules and opaque foreign
//! spans (comments, wrapper tags, unknown elements, whitespace). Untouched
//! entries are re-emitted byte-identically; only rules you added or changed
//! are regenerated. `write(load(x))` is `x` for any well-formed input with
//! no pending edits. Openbox gives no runtime feedback when a rule file is
//! subtly wrong, which is why fidelity and edit-time validation carry the
//! weight here.
//!
//! ## Module overview
//!
//! - [`api`]: the facade, entry point for all operations
//! - [`commands`]: business logic for each operation
//! - [`document`]: parsing and the rule/foreign node sequence
//! - [`attrspec`]: declarative field domains and validation
//! - [`matcher`]: glob matching and effective-settings precedence
//! - [`serializer`]: verbatim + canonical output
//! - [`store`]: storage abstraction and implementations
//! - [`model`]: core data types (`Rule`, `MatchCriterion`, ...)
//! - [`config`]: editor preferences
//! - [`error`]: error types

pub mod api;
pub mod attrspec;
pub mod commands;
pub mod config;
pub mod document;
pub mod error;
pub mod matcher;
pub mod model;
pub mod serializer;
pub mod store;
