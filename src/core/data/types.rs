/// Identity of a Go package: the directory it lives in plus the declared
/// package name. The pair distinguishes external test packages (`foo_test`)
/// from the package they test, which share a directory.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PackageId {
    pub dir: String,
    pub name: String,
}

impl PackageId {
    pub fn new(dir: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            dir: dir.into(),
            name: name.into(),
        }
    }
}

/// A Go type expression as written in source, reduced to the shapes the
/// field checker cares about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeExpr {
    /// `Foo` or `pkg.Foo`.
    Named {
        qualifier: Option<String>,
        name: String,
    },
    /// `*T`
    Pointer(Box<TypeExpr>),
    /// `[]T` or `[N]T`: anything that provides one element type.
    Seq(Box<TypeExpr>),
    /// `map[K]V`
    Map {
        key: Box<TypeExpr>,
        value: Box<TypeExpr>,
    },
    /// Inline `struct { ... }`
    Struct(StructDef),
    /// Everything else (funcs, channels, interfaces, ...). Never a record.
    Other,
}

impl TypeExpr {
    pub fn named(name: impl Into<String>) -> Self {
        TypeExpr::Named {
            qualifier: None,
            name: name.into(),
        }
    }

    pub fn qualified(qualifier: impl Into<String>, name: impl Into<String>) -> Self {
        TypeExpr::Named {
            qualifier: Some(qualifier.into()),
            name: name.into(),
        }
    }
}

/// One field of a struct type. For embedded fields `name` is the base type
/// name (`Details` for `*pkg.Details`). Blank `_` fields are dropped during
/// collection since a keyed literal cannot assign them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDef {
    pub name: String,
}

impl FieldDef {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Go visibility convention: a field is exported when its name starts
    /// with an upper-case letter.
    pub fn exported(&self) -> bool {
        self.name.chars().next().is_some_and(char::is_uppercase)
    }
}

/// A struct type's direct fields, in declaration order, together with the
/// package the struct was declared in (visibility checks compare it against
/// the package being analyzed).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructDef {
    pub package: PackageId,
    pub fields: Vec<FieldDef>,
}

/// A `type Name ...` declaration. Aliases (`type A = B`) and defined types
/// (`type A B`) are collapsed: both carry the same field layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeDecl {
    pub name: String,
    pub ty: TypeExpr,
}
