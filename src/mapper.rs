//! Mapping of type references to target-language type expressions.
//!
//! The cascade: primitive-table hit, then dictionary-like shapes as an
//! inline index-signature literal, then the bare declared name verbatim.
//! Opaque names are sanitized so the fallback still yields a valid
//! identifier in the target language.

use crate::model::{Primitive, TypeRef};

/// A mapped target-language type expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MappedType {
    pub text: String,
    /// Whether the expression is a structural inline literal rather than
    /// a named reference.
    pub inline_literal: bool,
}

/// Suffix applied by the caller after array/nullable detection.
///
/// Array is detected first, so the two never co-occur on one member.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Suffix {
    None,
    Array,
    Null,
}

impl Suffix {
    pub fn as_str(self) -> &'static str {
        match self {
            Suffix::None => "",
            Suffix::Array => "[]",
            Suffix::Null => "|null",
        }
    }
}

/// Maps host type references to target type expressions.
#[derive(Debug, Default)]
pub struct TypeMapper;

impl TypeMapper {
    pub fn new() -> Self {
        Self
    }

    /// Map a type reference to its target expression.
    pub fn map(&self, reference: &TypeRef) -> MappedType {
        match reference {
            TypeRef::Primitive(p) => MappedType {
                text: p.keyword().to_string(),
                inline_literal: false,
            },
            TypeRef::Map(key, value) => MappedType {
                text: format!(
                    "{{ [key: {}]: {} }}",
                    self.map(key).text,
                    self.map(value).text
                ),
                inline_literal: true,
            },
            TypeRef::Named(name) => MappedType {
                text: name.clone(),
                inline_literal: false,
            },
            TypeRef::Opaque { name, .. } => MappedType {
                text: sanitize_identifier(name),
                inline_literal: false,
            },
            TypeRef::Array(inner) | TypeRef::Nullable(inner) | TypeRef::Wrapped(inner) => {
                self.map(inner)
            }
        }
    }

    /// Split array/nullable modifiers off a member reference, returning
    /// the element to map and the emission suffix.
    ///
    /// The array form wins: array-of-nullable and nullable-of-array both
    /// collapse to an array of the innermost element. The `|null` suffix
    /// applies only to value-type scalars.
    pub fn split<'r>(&self, reference: &'r TypeRef) -> (&'r TypeRef, Suffix) {
        let mut current = reference;
        while let TypeRef::Wrapped(inner) = current {
            current = inner;
        }
        match current {
            TypeRef::Array(inner) => {
                let mut element: &TypeRef = inner;
                loop {
                    match element {
                        TypeRef::Wrapped(next) | TypeRef::Nullable(next) => element = next,
                        _ => break,
                    }
                }
                (element, Suffix::Array)
            }
            TypeRef::Nullable(inner) => {
                let mut element: &TypeRef = inner;
                while let TypeRef::Wrapped(next) = element {
                    element = next;
                }
                match element {
                    // Nullable-of-array collapses to the array form.
                    TypeRef::Array(_) | TypeRef::Nullable(_) => self.split(element),
                    TypeRef::Primitive(p) if p.is_value_type() => (element, Suffix::Null),
                    _ => (element, Suffix::None),
                }
            }
            other => (other, Suffix::None),
        }
    }
}

/// Strip generic-arity punctuation from a declared name so the result
/// stays a syntactically valid identifier.
pub fn sanitize_identifier(name: &str) -> String {
    name.chars()
        .filter(|c| c.is_alphanumeric() || *c == '_')
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::TypeRef;

    fn map_text(reference: &TypeRef) -> String {
        TypeMapper::new().map(reference).text
    }

    #[test]
    fn test_primitive_table_hits() {
        assert_eq!(map_text(&TypeRef::Primitive(Primitive::Number)), "number");
        assert_eq!(map_text(&TypeRef::Primitive(Primitive::String)), "string");
        assert_eq!(map_text(&TypeRef::Primitive(Primitive::Boolean)), "boolean");
        assert_eq!(map_text(&TypeRef::Primitive(Primitive::Datetime)), "datetime");
        assert_eq!(map_text(&TypeRef::Primitive(Primitive::Void)), "void");
        assert_eq!(map_text(&TypeRef::Primitive(Primitive::Any)), "any");
    }

    #[test]
    fn test_dictionary_maps_to_inline_literal() {
        let mapper = TypeMapper::new();
        let mapped = mapper.map(&TypeRef::map(
            TypeRef::Primitive(Primitive::String),
            TypeRef::Primitive(Primitive::Number),
        ));

        assert_eq!(mapped.text, "{ [key: string]: number }");
        assert!(mapped.inline_literal);
    }

    #[test]
    fn test_nested_dictionary_values_map_recursively() {
        let mapper = TypeMapper::new();
        let mapped = mapper.map(&TypeRef::map(
            TypeRef::Primitive(Primitive::String),
            TypeRef::named("User"),
        ));

        assert_eq!(mapped.text, "{ [key: string]: User }");
    }

    #[test]
    fn test_named_fallback_is_verbatim() {
        let mapped = TypeMapper::new().map(&TypeRef::named("Address"));
        assert_eq!(mapped.text, "Address");
        assert!(!mapped.inline_literal);
    }

    #[test]
    fn test_opaque_names_are_sanitized() {
        assert_eq!(map_text(&TypeRef::opaque("Func`2", vec![])), "Func2");
        assert_eq!(
            map_text(&TypeRef::opaque("Callback<String>", vec![])),
            "CallbackString"
        );
    }

    #[test]
    fn test_map_is_idempotent_on_its_own_output() {
        let mapper = TypeMapper::new();
        for reference in [
            TypeRef::Primitive(Primitive::Number),
            TypeRef::named("Address"),
            TypeRef::opaque("Func`2", vec![]),
        ] {
            let first = mapper.map(&reference);
            let second = mapper.map(&TypeRef::named(first.text.clone()));
            assert_eq!(first.text, second.text);
        }
    }

    #[test]
    fn test_split_array_of_nullable_collapses_to_array() {
        let mapper = TypeMapper::new();
        let reference = TypeRef::array(TypeRef::nullable(TypeRef::Primitive(Primitive::Number)));

        let (element, suffix) = mapper.split(&reference);

        assert_eq!(suffix, Suffix::Array);
        assert_eq!(element, &TypeRef::Primitive(Primitive::Number));
        assert_eq!(mapper.map(element).text, "number");
    }

    #[test]
    fn test_split_nullable_of_array_collapses_to_array() {
        let mapper = TypeMapper::new();
        let reference = TypeRef::nullable(TypeRef::array(TypeRef::Primitive(Primitive::String)));

        let (element, suffix) = mapper.split(&reference);

        assert_eq!(suffix, Suffix::Array);
        assert_eq!(element, &TypeRef::Primitive(Primitive::String));
    }

    #[test]
    fn test_split_nullable_value_type() {
        let mapper = TypeMapper::new();
        let reference = TypeRef::nullable(TypeRef::Primitive(Primitive::Number));

        let (element, suffix) = mapper.split(&reference);

        assert_eq!(suffix, Suffix::Null);
        assert_eq!(element, &TypeRef::Primitive(Primitive::Number));
    }

    #[test]
    fn test_split_nullable_reference_type_unwraps_silently() {
        let mapper = TypeMapper::new();

        let reference = TypeRef::nullable(TypeRef::Primitive(Primitive::String));
        let (element, suffix) = mapper.split(&reference);
        assert_eq!(suffix, Suffix::None);
        assert_eq!(element, &TypeRef::Primitive(Primitive::String));

        let reference = TypeRef::nullable(TypeRef::named("User"));
        let (element, suffix) = mapper.split(&reference);
        assert_eq!(suffix, Suffix::None);
        assert_eq!(element, &TypeRef::named("User"));
    }

    #[test]
    fn test_split_sees_through_wrappers() {
        let mapper = TypeMapper::new();
        let reference = TypeRef::wrapped(TypeRef::array(TypeRef::named("User")));

        let (element, suffix) = mapper.split(&reference);

        assert_eq!(suffix, Suffix::Array);
        assert_eq!(element, &TypeRef::named("User"));
    }
}
