//! Declaration model for discovered host types.
//!
//! The generation pipeline never touches a live type system; everything it
//! knows about the project comes from this owned model, populated by the
//! [`crate::parser`] and indexed by qualified name in a [`TypeUniverse`]
//! symbol table.

use std::collections::BTreeMap;

/// Kind of a declared model type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeKind {
    /// A struct with named fields; emitted as a class.
    Class,
    /// A field-bearing interface. Emitted like a class; the Rust parser
    /// never produces this kind, but the emitter accepts it.
    Interface,
    /// A unit-variant enumeration.
    Enum,
    /// A union declaration. Not representable in the target language;
    /// reaching the emitter with this kind aborts the run.
    Union,
}

impl TypeKind {
    /// Whether this kind participates in the nested-type closure.
    pub fn is_class_like(self) -> bool {
        matches!(self, TypeKind::Class | TypeKind::Interface | TypeKind::Union)
    }
}

/// Entries of the primitive mapping table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Primitive {
    String,
    Number,
    Boolean,
    Datetime,
    Any,
    Void,
}

impl Primitive {
    /// The fixed target-language keyword for this scalar.
    pub fn keyword(self) -> &'static str {
        match self {
            Primitive::String => "string",
            Primitive::Number => "number",
            Primitive::Boolean => "boolean",
            Primitive::Datetime => "datetime",
            Primitive::Any => "any",
            Primitive::Void => "void",
        }
    }

    /// The registered constructor default for this scalar.
    pub fn default_value(self) -> &'static str {
        match self {
            Primitive::String | Primitive::Datetime => "\"\"",
            Primitive::Number => "0",
            Primitive::Boolean => "false",
            Primitive::Void => "null",
            Primitive::Any => "new Object()",
        }
    }

    /// Value-type scalars are the only ones that take a `|null` suffix.
    pub fn is_value_type(self) -> bool {
        matches!(
            self,
            Primitive::Number | Primitive::Boolean | Primitive::Datetime
        )
    }
}

/// A reference to a type as it appears in a member declaration.
///
/// After modifier unwrapping exactly one innermost type remains. The
/// `Opaque` variant is the deliberate fallback for constructed generic
/// shapes the target cannot represent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeRef {
    /// An entry of the primitive mapping table.
    Primitive(Primitive),
    /// A reference to another declared type, by bare name.
    Named(String),
    /// An unrecognized constructed generic, kept as an opaque identifier
    /// with its lowered type arguments.
    Opaque { name: String, args: Vec<TypeRef> },
    /// A sequence of the inner type.
    Array(Box<TypeRef>),
    /// An optional value of the inner type.
    Nullable(Box<TypeRef>),
    /// A dictionary with key and value references.
    Map(Box<TypeRef>, Box<TypeRef>),
    /// A transparent single-value wrapper (Box, Rc, Arc).
    Wrapped(Box<TypeRef>),
}

impl TypeRef {
    pub fn named(name: impl Into<String>) -> Self {
        TypeRef::Named(name.into())
    }

    pub fn opaque(name: impl Into<String>, args: Vec<TypeRef>) -> Self {
        TypeRef::Opaque {
            name: name.into(),
            args,
        }
    }

    pub fn array(inner: TypeRef) -> Self {
        TypeRef::Array(Box::new(inner))
    }

    pub fn nullable(inner: TypeRef) -> Self {
        TypeRef::Nullable(Box::new(inner))
    }

    pub fn map(key: TypeRef, value: TypeRef) -> Self {
        TypeRef::Map(Box::new(key), Box::new(value))
    }

    pub fn wrapped(inner: TypeRef) -> Self {
        TypeRef::Wrapped(Box::new(inner))
    }
}

/// A property (named field) of a model type. Declaration order is
/// preserved through emission.
#[derive(Debug, Clone)]
pub struct PropertyDecl {
    pub name: String,
    pub ty: TypeRef,
    /// Getter visibility; only publicly readable members are emitted.
    pub public: bool,
    /// Raw doc-comment lines, in source order.
    pub docs: Vec<String>,
}

/// An enumeration member with its ordinal and display metadata.
#[derive(Debug, Clone)]
pub struct EnumMemberDecl {
    pub name: String,
    pub value: i64,
    /// `#[description("...")]` annotation.
    pub description: Option<String>,
    /// `#[display_name("...")]` annotation.
    pub display_name: Option<String>,
    /// The `name` field of a `#[display(name = "...")]` annotation.
    pub display: Option<String>,
    /// Raw doc-comment lines.
    pub docs: Vec<String>,
}

/// A declared model type.
#[derive(Debug, Clone)]
pub struct TypeDecl {
    /// Bare type name.
    pub name: String,
    /// Dotted module path; may be empty for root-level declarations.
    pub namespace: String,
    pub kind: TypeKind,
    pub public: bool,
    /// Whether the declaration carries generic parameters.
    pub generic: bool,
    /// Ordered member list (class-like kinds).
    pub properties: Vec<PropertyDecl>,
    /// Ordered member list (enum kind).
    pub members: Vec<EnumMemberDecl>,
    /// Raw doc-comment lines on the declaration itself.
    pub docs: Vec<String>,
}

impl TypeDecl {
    /// Identity of the declaration within the universe.
    pub fn qualified_name(&self) -> String {
        if self.namespace.is_empty() {
            self.name.clone()
        } else {
            format!("{}.{}", self.namespace, self.name)
        }
    }

    /// Number of publicly readable members.
    pub fn public_member_count(&self) -> usize {
        match self.kind {
            TypeKind::Enum => self.members.len(),
            _ => self.properties.iter().filter(|p| p.public).count(),
        }
    }
}

/// Symbol table of all declared types, keyed by qualified name.
///
/// Deduplicates by identity (qualified name), not by bare name: two types
/// with the same name in different namespaces remain distinct entries.
/// Iteration order is deterministic.
#[derive(Debug, Default)]
pub struct TypeUniverse {
    types: BTreeMap<String, TypeDecl>,
}

impl TypeUniverse {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, decl: TypeDecl) {
        self.types.insert(decl.qualified_name(), decl);
    }

    pub fn get(&self, qualified: &str) -> Option<&TypeDecl> {
        self.types.get(qualified)
    }

    /// Resolve a bare or qualified name to a declaration.
    ///
    /// An exact qualified match wins; otherwise the first declaration with
    /// a matching bare name (in qualified-name order) is returned.
    pub fn resolve(&self, name: &str) -> Option<&TypeDecl> {
        self.types
            .get(name)
            .or_else(|| self.types.values().find(|t| t.name == name))
    }

    pub fn iter(&self) -> impl Iterator<Item = &TypeDecl> {
        self.types.values()
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decl(namespace: &str, name: &str) -> TypeDecl {
        TypeDecl {
            name: name.to_string(),
            namespace: namespace.to_string(),
            kind: TypeKind::Class,
            public: true,
            generic: false,
            properties: Vec::new(),
            members: Vec::new(),
            docs: Vec::new(),
        }
    }

    #[test]
    fn test_qualified_name() {
        assert_eq!(decl("app.models", "User").qualified_name(), "app.models.User");
        assert_eq!(decl("", "User").qualified_name(), "User");
    }

    #[test]
    fn test_universe_dedupes_by_identity_not_name() {
        let mut universe = TypeUniverse::new();
        universe.insert(decl("app.a", "User"));
        universe.insert(decl("app.b", "User"));

        assert_eq!(universe.len(), 2);
    }

    #[test]
    fn test_resolve_prefers_qualified_match() {
        let mut universe = TypeUniverse::new();
        universe.insert(decl("app.a", "User"));
        universe.insert(decl("app.b", "User"));

        let found = universe.resolve("app.b.User").unwrap();
        assert_eq!(found.namespace, "app.b");

        // Bare name falls back to the first entry in deterministic order.
        let found = universe.resolve("User").unwrap();
        assert_eq!(found.namespace, "app.a");
    }

    #[test]
    fn test_primitive_defaults() {
        assert_eq!(Primitive::Number.default_value(), "0");
        assert_eq!(Primitive::String.default_value(), "\"\"");
        assert_eq!(Primitive::Datetime.default_value(), "\"\"");
        assert_eq!(Primitive::Void.default_value(), "null");
        assert_eq!(Primitive::Any.default_value(), "new Object()");
    }

    #[test]
    fn test_value_type_scalars() {
        assert!(Primitive::Number.is_value_type());
        assert!(Primitive::Boolean.is_value_type());
        assert!(Primitive::Datetime.is_value_type());
        assert!(!Primitive::String.is_value_type());
        assert!(!Primitive::Any.is_value_type());
    }
}
