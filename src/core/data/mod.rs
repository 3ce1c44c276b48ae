//! Core data types used across all pipeline phases.
//!
//! This module defines the fundamental data structures for representing
//! source positions, parsed Go files, composite literals, and type shapes.
//!
//! ## Module Structure
//!
//! - `go`: Per-file model (GoFile, ImportMap, DirectiveSite)
//! - `literal`: Composite literal tree (Initializer, Element)
//! - `source`: Source positions (Pos, SourceContext, SourceLocation)
//! - `types`: Go type shapes (TypeExpr, StructDef, PackageId)

pub mod go;
pub mod literal;
pub mod source;
pub mod types;

pub use go::{DirectiveSite, GoFile, ImportMap};
pub use literal::{ChildRole, Element, ElementKind, Initializer};
pub use source::{Pos, SourceContext, SourceLocation};
pub use types::{FieldDef, PackageId, StructDef, TypeDecl, TypeExpr};
