//! Documentation summary resolution.
//!
//! Summaries come from doc comments captured at parse time. The resolver
//! normalizes them to a single summary line and caches the result per
//! member for the duration of one generation run; lookups never fail,
//! a missing or empty summary is just an empty string.

use crate::model::TypeDecl;
use std::collections::HashMap;

/// Resolves documentation summaries with a run-scoped cache.
#[derive(Debug, Default)]
pub struct DocResolver {
    cache: HashMap<String, String>,
}

impl DocResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Summary text for a type declaration.
    pub fn type_summary(&mut self, decl: &TypeDecl) -> String {
        let key = decl.qualified_name();
        let docs = decl.docs.clone();
        self.summary(key, &docs)
    }

    /// Summary text for a member of a type.
    pub fn member_summary(&mut self, decl: &TypeDecl, member: &str, docs: &[String]) -> String {
        let key = format!("{}::{}", decl.qualified_name(), member);
        self.summary(key, docs)
    }

    fn summary(&mut self, key: String, docs: &[String]) -> String {
        if let Some(cached) = self.cache.get(&key) {
            return cached.clone();
        }
        let text = first_paragraph(docs);
        self.cache.insert(key, text.clone());
        text
    }

    /// Number of cached entries; cleared along with the resolver at the
    /// end of the run.
    pub fn cached(&self) -> usize {
        self.cache.len()
    }
}

/// Join doc lines up to the first blank line into one trimmed summary.
fn first_paragraph(docs: &[String]) -> String {
    docs.iter()
        .map(|line| line.trim())
        .take_while(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
        .trim()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{TypeDecl, TypeKind};

    fn decl_with_docs(docs: &[&str]) -> TypeDecl {
        TypeDecl {
            name: "User".to_string(),
            namespace: "app".to_string(),
            kind: TypeKind::Class,
            public: true,
            generic: false,
            properties: Vec::new(),
            members: Vec::new(),
            docs: docs.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn test_type_summary_first_paragraph() {
        let decl = decl_with_docs(&["A registered user.", "Spans lines.", "", "Details ignored."]);
        let mut resolver = DocResolver::new();

        assert_eq!(
            resolver.type_summary(&decl),
            "A registered user. Spans lines."
        );
    }

    #[test]
    fn test_missing_docs_yield_empty_string() {
        let decl = decl_with_docs(&[]);
        let mut resolver = DocResolver::new();

        assert_eq!(resolver.type_summary(&decl), "");
    }

    #[test]
    fn test_member_summary_cached_separately() {
        let decl = decl_with_docs(&["Type summary."]);
        let mut resolver = DocResolver::new();

        let member = resolver.member_summary(&decl, "id", &["Member summary.".to_string()]);
        assert_eq!(member, "Member summary.");
        assert_eq!(resolver.type_summary(&decl), "Type summary.");
        assert_eq!(resolver.cached(), 2);

        // Second lookup hits the cache.
        assert_eq!(resolver.type_summary(&decl), "Type summary.");
        assert_eq!(resolver.cached(), 2);
    }
}
