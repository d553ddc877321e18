//! Transitive closure of complex types reachable from a root.
//!
//! Recursion threads an explicit visited set keyed by type identity, so
//! cyclic reference graphs terminate with each type visited exactly once.
//! Enumerations never enter the closure; they are handled by the shared
//! enum pipeline.

use crate::model::{TypeDecl, TypeKind, TypeRef, TypeUniverse};
use std::collections::BTreeSet;

/// Discovers the nested-type closure of root model types.
#[derive(Debug)]
pub struct NestedTypeResolver<'u> {
    universe: &'u TypeUniverse,
}

impl<'u> NestedTypeResolver<'u> {
    pub fn new(universe: &'u TypeUniverse) -> Self {
        Self { universe }
    }

    /// `{root} ∪ reachable complex types`, in deterministic order: the
    /// root first, then referenced types in member declaration order.
    pub fn discover(&self, root: &'u TypeDecl) -> Vec<&'u TypeDecl> {
        let mut visited = BTreeSet::new();
        let mut result = Vec::new();
        self.visit(root, &mut visited, &mut result);
        result
    }

    fn visit(
        &self,
        decl: &'u TypeDecl,
        visited: &mut BTreeSet<String>,
        result: &mut Vec<&'u TypeDecl>,
    ) {
        if !visited.insert(decl.qualified_name()) {
            return;
        }
        if decl.kind.is_class_like() {
            result.push(decl);
        }
        for property in &decl.properties {
            self.visit_ref(&property.ty, visited, result);
        }
    }

    fn visit_ref(
        &self,
        reference: &TypeRef,
        visited: &mut BTreeSet<String>,
        result: &mut Vec<&'u TypeDecl>,
    ) {
        match reference {
            TypeRef::Primitive(_) => {}
            TypeRef::Opaque { args, .. } => {
                // The base generic has no mapping, but its arguments can
                // still reach declared types.
                for arg in args {
                    self.visit_ref(arg, visited, result);
                }
            }
            TypeRef::Named(name) => {
                if let Some(decl) = self.universe.resolve(name) {
                    if decl.kind != TypeKind::Enum {
                        self.visit(decl, visited, result);
                    }
                }
            }
            TypeRef::Array(inner) | TypeRef::Nullable(inner) | TypeRef::Wrapped(inner) => {
                self.visit_ref(inner, visited, result);
            }
            TypeRef::Map(key, value) => {
                self.visit_ref(key, visited, result);
                self.visit_ref(value, visited, result);
            }
        }
    }
}
