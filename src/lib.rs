//! Allset - exhaustive struct literal checker for Go
//!
//! Allset is a CLI tool and library that checks Go composite literals
//! marked with an `//allset` comment. A marked literal must assign every
//! accessible field of its struct type, minus an explicit ignore list.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (user-facing commands and output)
//! - `config`: `.allsetrc.json` discovery, parsing, and validation
//! - `core`: Core analysis engine (collection, resolution, association)
//! - `directives`: `//allset` comment parsing
//! - `issues`: Diagnostic kinds and the reporting contract
//! - `rules`: Checks that turn analyzed literals into issues

pub mod cli;
pub mod config;
pub mod core;
pub mod directives;
pub mod issues;
pub mod rules;
