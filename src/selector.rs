//! Selection of eligible root model types from the universe.
//!
//! A type is kept iff it is public, not generic, has at least one public
//! member, and its namespace matches the filter. [`unwrap_wrappers`]
//! defines the recognized wrapper shapes for candidate references: arrays
//! and single-value wrappers peel, any other constructed generic is
//! dropped, the target cannot faithfully represent it.

use crate::model::{TypeDecl, TypeKind, TypeRef, TypeUniverse};

/// Namespace matching rule for selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NamespaceFilter {
    /// Namespace starts with the given dotted prefix.
    Prefix(String),
    /// Namespace contains the given segment anywhere.
    Contains(String),
}

impl NamespaceFilter {
    pub fn matches(&self, namespace: &str) -> bool {
        match self {
            NamespaceFilter::Prefix(prefix) => namespace.starts_with(prefix.as_str()),
            NamespaceFilter::Contains(segment) => namespace.contains(segment.as_str()),
        }
    }
}

/// Result of unwrapping recognized wrapper shapes from a candidate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Unwrapped {
    /// The innermost type after peeling arrays and transparent wrappers.
    Kept(TypeRef),
    /// An unrecognized constructed generic; the candidate is dropped.
    Rejected,
}

/// Recursively unwrap arrays and single-value wrappers from a candidate
/// reference until no wrapper shape remains.
pub fn unwrap_wrappers(candidate: &TypeRef) -> Unwrapped {
    match candidate {
        TypeRef::Array(inner) | TypeRef::Wrapped(inner) => unwrap_wrappers(inner),
        TypeRef::Nullable(_) | TypeRef::Map(_, _) | TypeRef::Opaque { .. } => Unwrapped::Rejected,
        other => Unwrapped::Kept(other.clone()),
    }
}

/// Filters a type universe to eligible generation roots.
#[derive(Debug)]
pub struct TypeSelector {
    filter: NamespaceFilter,
}

impl TypeSelector {
    pub fn new(filter: NamespaceFilter) -> Self {
        Self { filter }
    }

    /// Select class-like root model types. Types with zero eligible
    /// members are silently excluded, not an error.
    pub fn select_classes<'u>(&self, universe: &'u TypeUniverse) -> Vec<&'u TypeDecl> {
        universe
            .iter()
            .filter(|decl| decl.kind != TypeKind::Enum)
            .filter(|decl| self.eligible(decl))
            .collect()
    }

    /// Select enumerations for the shared enum pipeline.
    pub fn select_enums<'u>(&self, universe: &'u TypeUniverse) -> Vec<&'u TypeDecl> {
        universe
            .iter()
            .filter(|decl| decl.kind == TypeKind::Enum)
            .filter(|decl| self.eligible(decl))
            .collect()
    }

    fn eligible(&self, decl: &TypeDecl) -> bool {
        decl.public
            && !decl.generic
            && decl.public_member_count() > 0
            && self.filter.matches(&decl.namespace)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Primitive, PropertyDecl};

    fn class(namespace: &str, name: &str, public: bool, generic: bool, fields: usize) -> TypeDecl {
        TypeDecl {
            name: name.to_string(),
            namespace: namespace.to_string(),
            kind: TypeKind::Class,
            public,
            generic,
            properties: (0..fields)
                .map(|i| PropertyDecl {
                    name: format!("f{i}"),
                    ty: TypeRef::Primitive(Primitive::Number),
                    public: true,
                    docs: Vec::new(),
                })
                .collect(),
            members: Vec::new(),
            docs: Vec::new(),
        }
    }

    #[test]
    fn test_namespace_filter_prefix() {
        let filter = NamespaceFilter::Prefix("app.models".to_string());
        assert!(filter.matches("app.models.user"));
        assert!(filter.matches("app.models"));
        assert!(!filter.matches("other.models"));
    }

    #[test]
    fn test_namespace_filter_contains() {
        let filter = NamespaceFilter::Contains("enums".to_string());
        assert!(filter.matches("app.enums.color"));
        assert!(!filter.matches("app.models"));
    }

    #[test]
    fn test_select_requires_public_nongeneric_with_members() {
        let mut universe = TypeUniverse::new();
        universe.insert(class("app.models", "Kept", true, false, 1));
        universe.insert(class("app.models", "Private", false, false, 1));
        universe.insert(class("app.models", "Generic", true, true, 1));
        universe.insert(class("app.models", "Empty", true, false, 0));
        universe.insert(class("other", "Elsewhere", true, false, 1));

        let selector = TypeSelector::new(NamespaceFilter::Prefix("app.models".to_string()));
        let roots = selector.select_classes(&universe);

        assert_eq!(roots.len(), 1);
        assert_eq!(roots[0].name, "Kept");
    }

    #[test]
    fn test_select_enums_only_picks_enums() {
        let mut universe = TypeUniverse::new();
        universe.insert(class("app.enums", "NotAnEnum", true, false, 1));
        let mut color = class("app.enums", "Color", true, false, 0);
        color.kind = TypeKind::Enum;
        color.members = vec![crate::model::EnumMemberDecl {
            name: "Red".to_string(),
            value: 0,
            description: None,
            display_name: None,
            display: None,
            docs: Vec::new(),
        }];
        universe.insert(color);

        let selector = TypeSelector::new(NamespaceFilter::Contains("enums".to_string()));
        let enums = selector.select_enums(&universe);

        assert_eq!(enums.len(), 1);
        assert_eq!(enums[0].name, "Color");
    }

    #[test]
    fn test_unwrap_peels_arrays_and_wrappers() {
        let candidate = TypeRef::array(TypeRef::wrapped(TypeRef::named("User")));
        assert_eq!(
            unwrap_wrappers(&candidate),
            Unwrapped::Kept(TypeRef::named("User"))
        );
    }

    #[test]
    fn test_unwrap_rejects_unrecognized_generics() {
        assert_eq!(
            unwrap_wrappers(&TypeRef::opaque("Callback", vec![])),
            Unwrapped::Rejected
        );
        assert_eq!(
            unwrap_wrappers(&TypeRef::map(
                TypeRef::Primitive(Primitive::String),
                TypeRef::named("User"),
            )),
            Unwrapped::Rejected
        );
    }

    #[test]
    fn test_unwrap_keeps_primitives_for_later_drop() {
        let candidate = TypeRef::array(TypeRef::Primitive(Primitive::Number));
        assert_eq!(
            unwrap_wrappers(&candidate),
            Unwrapped::Kept(TypeRef::Primitive(Primitive::Number))
        );
    }
}
