//! Deterministic output paths and write deduplication.
//!
//! The relative path of a generated file is a pure function of the type's
//! namespace and name. Writes are deduplicated by final path: the first
//! type that resolves to a path claims it, later types mapping to the
//! same path are silently skipped.

use crate::emitter::ScriptFlavor;
use crate::model::TypeDecl;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

/// Separator flattened to an underscore in nested-type names.
const NESTING_SEPARATOR: &str = "::";

/// Computes output paths and tracks claimed writes.
#[derive(Debug)]
pub struct OutputPlanner {
    extension: &'static str,
    /// Grouping folder segment stripped from namespace paths.
    strip_segment: String,
    claimed: BTreeSet<PathBuf>,
}

impl OutputPlanner {
    pub fn new(flavor: ScriptFlavor, strip_segment: impl Into<String>) -> Self {
        Self {
            extension: flavor.extension(),
            strip_segment: strip_segment.into(),
            claimed: BTreeSet::new(),
        }
    }

    /// Deterministic relative output path for a type: namespace segments
    /// as directories, flattened bare name, target extension. An empty
    /// namespace resolves to the output root.
    pub fn path_for(&self, decl: &TypeDecl) -> PathBuf {
        let file_name = decl.name.replace(NESTING_SEPARATOR, "_");

        let mut path = PathBuf::new();
        for segment in decl
            .namespace
            .split('.')
            .filter(|s| !s.is_empty() && *s != self.strip_segment)
        {
            path.push(segment);
        }
        path.push(format!("{}.{}", file_name, self.extension));
        path
    }

    /// Claim a final path. Returns `false` when the path was already
    /// claimed; the caller must then skip the write.
    pub fn claim(&mut self, path: &Path) -> bool {
        self.claimed.insert(path.to_path_buf())
    }

    pub fn claimed_count(&self) -> usize {
        self.claimed.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::TypeKind;

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

    fn planner() -> OutputPlanner {
        OutputPlanner::new(ScriptFlavor::Javascript, "models")
    }

    #[test]
    fn test_path_from_namespace_segments() {
        let path = planner().path_for(&decl("app.view", "User"));
        assert_eq!(path, PathBuf::from("app/view/User.js"));
    }

    #[test]
    fn test_grouping_segment_stripped() {
        let path = planner().path_for(&decl("app.models.user", "User"));
        assert_eq!(path, PathBuf::from("app/user/User.js"));
    }

    #[test]
    fn test_empty_namespace_resolves_to_root() {
        let path = planner().path_for(&decl("", "User"));
        assert_eq!(path, PathBuf::from("User.js"));
    }

    #[test]
    fn test_nested_name_flattened_to_underscore() {
        let path = planner().path_for(&decl("app", "Outer::Inner"));
        assert_eq!(path, PathBuf::from("app/Outer_Inner.js"));
    }

    #[test]
    fn test_typescript_extension() {
        let planner = OutputPlanner::new(ScriptFlavor::Typescript, "models");
        let path = planner.path_for(&decl("app", "User"));
        assert_eq!(path, PathBuf::from("app/User.ts"));
    }

    #[test]
    fn test_first_writer_wins() {
        let mut planner = planner();
        let path = PathBuf::from("app/User.js");

        assert!(planner.claim(&path));
        assert!(!planner.claim(&path));
        assert_eq!(planner.claimed_count(), 1);
    }

    #[test]
    fn test_distinct_types_can_collide_after_stripping() {
        let planner = planner();
        let first = planner.path_for(&decl("app.models", "User"));
        let second = planner.path_for(&decl("app", "User"));
        assert_eq!(first, second);
    }
}
