//! Extraction of ordered enum display metadata.
//!
//! Each member yields a (value, name, description) triple. The description
//! falls through an ordered chain of sources; the first non-empty one
//! wins and a member with no source at all gets an empty string.

use crate::docs::DocResolver;
use crate::model::{EnumMemberDecl, TypeDecl};

/// One extracted enum entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumEntry {
    pub value: i64,
    pub name: String,
    pub description: String,
}

/// Extracts ordered (value, name, description) triples for an enumeration.
#[derive(Debug, Default)]
pub struct EnumMetadataExtractor;

impl EnumMetadataExtractor {
    pub fn new() -> Self {
        Self
    }

    /// Extract entries in declaration order.
    pub fn extract(&self, decl: &TypeDecl, docs: &mut DocResolver) -> Vec<EnumEntry> {
        decl.members
            .iter()
            .map(|member| EnumEntry {
                value: member.value,
                name: member.name.clone(),
                description: self.describe(decl, member, docs),
            })
            .collect()
    }

    /// Description fallback chain: explicit description annotation, short
    /// display-name annotation, display annotation's name field, doc
    /// summary, empty string.
    fn describe(&self, decl: &TypeDecl, member: &EnumMemberDecl, docs: &mut DocResolver) -> String {
        for candidate in [&member.description, &member.display_name, &member.display] {
            if let Some(text) = candidate {
                let trimmed = text.trim();
                if !trimmed.is_empty() {
                    return trimmed.to_string();
                }
            }
        }
        docs.member_summary(decl, &member.name, &member.docs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::TypeKind;

    fn member(name: &str, value: i64) -> EnumMemberDecl {
        EnumMemberDecl {
            name: name.to_string(),
            value,
            description: None,
            display_name: None,
            display: None,
            docs: Vec::new(),
        }
    }

    fn enum_decl(members: Vec<EnumMemberDecl>) -> TypeDecl {
        TypeDecl {
            name: "Color".to_string(),
            namespace: "app.enums".to_string(),
            kind: TypeKind::Enum,
            public: true,
            generic: false,
            properties: Vec::new(),
            members,
            docs: Vec::new(),
        }
    }

    #[test]
    fn test_extract_preserves_declaration_order() {
        let decl = enum_decl(vec![member("Red", 0), member("Green", 1), member("Blue", 2)]);
        let mut docs = DocResolver::new();

        let entries = EnumMetadataExtractor::new().extract(&decl, &mut docs);

        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0], EnumEntry { value: 0, name: "Red".into(), description: String::new() });
        assert_eq!(entries[2].name, "Blue");
    }

    #[test]
    fn test_description_chain_first_nonempty_wins() {
        let mut a = member("A", 0);
        a.description = Some("from description".to_string());
        a.display_name = Some("from display name".to_string());

        let mut b = member("B", 1);
        b.display_name = Some("from display name".to_string());
        b.display = Some("from display".to_string());

        let mut c = member("C", 2);
        c.display = Some("from display".to_string());

        let mut d = member("D", 3);
        d.docs = vec!["from docs".to_string()];

        let decl = enum_decl(vec![a, b, c, d, member("E", 4)]);
        let mut docs = DocResolver::new();

        let entries = EnumMetadataExtractor::new().extract(&decl, &mut docs);

        assert_eq!(entries[0].description, "from description");
        assert_eq!(entries[1].description, "from display name");
        assert_eq!(entries[2].description, "from display");
        assert_eq!(entries[3].description, "from docs");
        assert_eq!(entries[4].description, "");
    }

    #[test]
    fn test_blank_annotation_falls_through() {
        let mut a = member("A", 0);
        a.description = Some("   ".to_string());
        a.display_name = Some("G".to_string());

        let decl = enum_decl(vec![a]);
        let mut docs = DocResolver::new();

        let entries = EnumMetadataExtractor::new().extract(&decl, &mut docs);

        assert_eq!(entries[0].description, "G");
    }
}
