//! Core analysis pipeline.
//!
//! A check run flows through three phases:
//! 1. `collect` - parse Go files into [`GoFile`] data
//! 2. `resolve` - chase literal types through the `symbols` tables
//! 3. the rules in `crate::rules` - turn literals and directives into issues
//!
//! `context` owns file discovery and parsing, and `associate` pairs
//! directives with the literals they sit in between phases 1 and 2.

pub mod associate;
pub mod collect;
pub mod context;
pub mod data;
pub mod file_scanner;
pub mod parsers;
pub mod resolve;
pub mod symbols;

pub use associate::{Associations, associate};
pub use context::CheckContext;
pub use data::*;
pub use resolve::{LiteralType, resolve_literals};
pub use symbols::{ProjectTables, Unit, UnitKind, units};
