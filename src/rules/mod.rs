//! Rule implementations for allset.
//!
//! This module contains pure functions that check directive-bearing
//! literals. Each function takes only the specific inputs it needs (not a
//! full Context) and returns specific issue types.
//!
//! ## Module Structure
//!
//! - `field_set`: Exhaustive field assignment on annotated literals
//! - `unused`: Directives no literal claimed

pub mod field_set;
pub mod unused;

pub use field_set::check_field_set;
pub use unused::check_unused_directives;
