use crate::core::data::source::Pos;
use crate::core::data::types::TypeExpr;

/// A composite literal occurrence. Literals form a tree: an element whose
/// value is itself a literal carries the child by arena index, so nested
/// literals (including type-elided `{...}` forms) are initializers in their
/// own right.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Initializer {
    /// Type expression written before the braces. `None` for elided nested
    /// literals, whose type comes from the enclosing literal's shape.
    pub type_expr: Option<TypeExpr>,
    /// Anchor for diagnostics: start of the type expression, or of the
    /// opening brace when the type is elided.
    pub pos: Pos,
    /// Byte offset of the opening brace.
    pub lbrace: usize,
    /// Byte offset of the closing brace.
    pub rbrace: usize,
    pub elements: Vec<Element>,
}

/// One element of a literal's body. `start..end` is the element's byte span
/// (`end` is one past the last byte); the association scan uses it to tell
/// whether a directive sits directly in this literal or deeper inside an
/// element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub start: usize,
    pub end: usize,
    pub kind: ElementKind,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ElementKind {
    /// Bare value without a key. `value` is the arena index of a nested
    /// literal when the value is one.
    Positional { value: Option<usize> },
    /// `key: value`. `field` is the key text when the key is a bare
    /// identifier (a struct field assignment); map and array keys that are
    /// other expressions leave it `None`. `key` and `value` carry arena
    /// indices of nested literals in those positions.
    Keyed {
        field: Option<String>,
        key: Option<usize>,
        value: Option<usize>,
    },
}

impl Element {
    /// Whether a byte position lies within this element's span. The right
    /// end is treated as inclusive so a comment that starts flush against
    /// the element's last token still counts as inside it.
    pub fn contains(&self, offset: usize) -> bool {
        self.start <= offset && offset <= self.end
    }

    pub fn field_name(&self) -> Option<&str> {
        match &self.kind {
            ElementKind::Keyed { field, .. } => field.as_deref(),
            ElementKind::Positional { .. } => None,
        }
    }

    pub fn is_positional(&self) -> bool {
        matches!(self.kind, ElementKind::Positional { .. })
    }
}

impl Initializer {
    /// Arena indices of literals nested directly in this literal's elements,
    /// paired with their syntactic role (needed to derive elided types).
    pub fn children(&self) -> impl Iterator<Item = (usize, ChildRole)> + '_ {
        self.elements.iter().flat_map(|el| {
            let mut out = Vec::new();
            match &el.kind {
                ElementKind::Positional { value } => {
                    if let Some(idx) = value {
                        out.push((*idx, ChildRole::Element));
                    }
                }
                ElementKind::Keyed { key, value, .. } => {
                    if let Some(idx) = key {
                        out.push((*idx, ChildRole::Key));
                    }
                    if let Some(idx) = value {
                        out.push((*idx, ChildRole::Element));
                    }
                }
            }
            out
        })
    }
}

/// Where a nested literal sits relative to its parent, which decides which
/// part of the parent's type it inherits when its own type is elided.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChildRole {
    /// Element value position: takes the parent's element/value type.
    Element,
    /// Map key position: takes the parent's key type.
    Key,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pos(offset: usize) -> Pos {
        Pos::new(offset, 1, offset + 1)
    }

    #[test]
    fn test_element_contains_is_inclusive() {
        let el = Element {
            start: 10,
            end: 20,
            kind: ElementKind::Positional { value: None },
        };
        assert!(el.contains(10));
        assert!(el.contains(15));
        assert!(el.contains(20));
        assert!(!el.contains(9));
        assert!(!el.contains(21));
    }

    #[test]
    fn test_children_reports_roles() {
        let init = Initializer {
            type_expr: Some(TypeExpr::named("T")),
            pos: pos(0),
            lbrace: 1,
            rbrace: 40,
            elements: vec![
                Element {
                    start: 2,
                    end: 10,
                    kind: ElementKind::Keyed {
                        field: None,
                        key: Some(1),
                        value: Some(2),
                    },
                },
                Element {
                    start: 12,
                    end: 20,
                    kind: ElementKind::Positional { value: Some(3) },
                },
            ],
        };
        let children: Vec<_> = init.children().collect();
        assert_eq!(
            children,
            vec![
                (1, ChildRole::Key),
                (2, ChildRole::Element),
                (3, ChildRole::Element),
            ]
        );
    }

    #[test]
    fn test_field_name_only_for_keyed() {
        let keyed = Element {
            start: 0,
            end: 5,
            kind: ElementKind::Keyed {
                field: Some("Name".to_string()),
                key: None,
                value: None,
            },
        };
        let positional = Element {
            start: 6,
            end: 9,
            kind: ElementKind::Positional { value: None },
        };
        assert_eq!(keyed.field_name(), Some("Name"));
        assert!(!keyed.is_positional());
        assert_eq!(positional.field_name(), None);
        assert!(positional.is_positional());
    }
}
