//! Rendering of resolved types into ordered source lines.
//!
//! Every generated file starts with the same two-line header. Class-like
//! types render as a JavaScript class (with a default-initializing
//! constructor and paired validation-error fields) or a TypeScript
//! interface, depending on the configured flavor; enumerations render as
//! a frozen object map or a typed enum.

use crate::docs::DocResolver;
use crate::enums::EnumMetadataExtractor;
use crate::error::GenerateError;
use crate::mapper::{Suffix, TypeMapper};
use crate::model::{TypeDecl, TypeKind, TypeRef};
use serde::Deserialize;

/// Target script flavor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScriptFlavor {
    #[default]
    Javascript,
    Typescript,
}

impl ScriptFlavor {
    pub fn extension(self) -> &'static str {
        match self {
            ScriptFlavor::Javascript => "js",
            ScriptFlavor::Typescript => "ts",
        }
    }
}

/// Fixed header prepended to every generated file.
pub const HEADER: [&str; 2] = [
    "/* ===== This file is auto-generated ===== */",
    "/* ===== Do not edit it by hand ===== */",
];

/// Renders a resolved type and its mapped members into source lines.
#[derive(Debug)]
pub struct CodeEmitter {
    flavor: ScriptFlavor,
    mapper: TypeMapper,
    extractor: EnumMetadataExtractor,
}

impl CodeEmitter {
    pub fn new(flavor: ScriptFlavor) -> Self {
        Self {
            flavor,
            mapper: TypeMapper::new(),
            extractor: EnumMetadataExtractor::new(),
        }
    }

    /// The shared header block used by aggregate files.
    pub fn shared_header() -> Vec<String> {
        vec![HEADER[0].to_string(), HEADER[1].to_string(), String::new()]
    }

    /// Render one type into its complete file contents.
    pub fn emit(&self, decl: &TypeDecl, docs: &mut DocResolver) -> Result<Vec<String>, GenerateError> {
        let mut lines = Self::shared_header();

        match decl.kind {
            TypeKind::Class | TypeKind::Interface => match self.flavor {
                ScriptFlavor::Javascript => self.emit_class(&mut lines, decl, docs),
                ScriptFlavor::Typescript => self.emit_interface(&mut lines, decl, docs),
            },
            TypeKind::Enum => self.emit_enum(&mut lines, decl, docs),
            _ => {
                return Err(GenerateError::UnsupportedKind {
                    type_name: decl.qualified_name(),
                })
            }
        }

        // The class form and the frozen enum map export their symbol in a
        // trailing block; the typed flavors carry their own export keyword.
        if self.flavor == ScriptFlavor::Javascript {
            lines.push("export {".to_string());
            lines.push(format!("    {}", decl.name));
            lines.push("}".to_string());
        }

        Ok(lines)
    }

    /// Append one enum block to the shared aggregate file.
    pub fn emit_enum_block(&self, decl: &TypeDecl, docs: &mut DocResolver) -> Vec<String> {
        let mut lines = Vec::new();
        self.emit_enum(&mut lines, decl, docs);
        lines.push(String::new());
        if self.flavor == ScriptFlavor::Javascript {
            lines.push("export {".to_string());
            lines.push(format!("    {}", decl.name));
            lines.push("}".to_string());
            lines.push(String::new());
        }
        lines
    }

    fn emit_class(&self, lines: &mut Vec<String>, decl: &TypeDecl, docs: &mut DocResolver) {
        let mut constructor = Vec::new();

        self.doc_block(lines, "", &docs.type_summary(decl), "@class");
        lines.push(format!("class {} {{", decl.name));

        for property in decl.properties.iter().filter(|p| p.public) {
            let (element, suffix) = self.mapper.split(&property.ty);
            let mapped = self.mapper.map(element);

            self.queue_initializer(&mut constructor, &property.name, element, &mapped.text, mapped.inline_literal, suffix);

            let summary = docs.member_summary(decl, &property.name, &property.docs);
            lines.push("    /**".to_string());
            if !summary.is_empty() {
                lines.push(format!("     * {summary}"));
            }
            lines.push(format!("     * @type {{{}{}}}", mapped.text, suffix.as_str()));
            lines.push("     */".to_string());
            lines.push(format!("    {};", property.name));
        }

        lines.push(String::new());
        lines.push("    /** Constructor */".to_string());
        lines.push("    constructor () {".to_string());
        lines.append(&mut constructor);
        lines.push("    }".to_string());
        lines.push("}".to_string());
    }

    /// Queue the default initialization for one property, paired with its
    /// validation-error field. The pairing is a fixed generation
    /// convention, not derived from source metadata.
    fn queue_initializer(
        &self,
        constructor: &mut Vec<String>,
        name: &str,
        element: &TypeRef,
        text: &str,
        inline_literal: bool,
        suffix: Suffix,
    ) {
        let init = if suffix == Suffix::Array {
            "[]".to_string()
        } else if let TypeRef::Primitive(p) = element {
            p.default_value().to_string()
        } else if inline_literal {
            "new Object()".to_string()
        } else {
            format!("new {text}()")
        };
        constructor.push(format!("        this.{name} = {init};"));
        constructor.push(format!("        this.ModelError__{name} = '';"));
    }

    fn emit_interface(&self, lines: &mut Vec<String>, decl: &TypeDecl, docs: &mut DocResolver) {
        self.doc_block(lines, "", &docs.type_summary(decl), "@class");
        lines.push(format!("interface {} {{", decl.name));

        for property in decl.properties.iter().filter(|p| p.public) {
            let (element, suffix) = self.mapper.split(&property.ty);
            let mapped = self.mapper.map(element);

            let summary = docs.member_summary(decl, &property.name, &property.docs);
            lines.push("    /**".to_string());
            if !summary.is_empty() {
                lines.push(format!("     * {summary}"));
            }
            lines.push(format!("     * @type {{{}{}}}", mapped.text, suffix.as_str()));
            lines.push("     */".to_string());
            lines.push(format!("    {}: {}{};", property.name, mapped.text, suffix.as_str()));
        }

        lines.push("}".to_string());
    }

    fn emit_enum(&self, lines: &mut Vec<String>, decl: &TypeDecl, docs: &mut DocResolver) {
        match self.flavor {
            ScriptFlavor::Javascript => self.emit_enum_map(lines, decl, docs),
            ScriptFlavor::Typescript => self.emit_typed_enum(lines, decl),
        }
    }

    /// Object-map form: a frozen associative literal with per-member
    /// `Name`/`Value` entries carrying runtime description metadata.
    fn emit_enum_map(&self, lines: &mut Vec<String>, decl: &TypeDecl, docs: &mut DocResolver) {
        self.doc_block(lines, "", &docs.type_summary(decl), "@enum");
        lines.push(format!("const {} = Object.freeze({{", decl.name));

        for entry in self.extractor.extract(decl, docs) {
            lines.push(format!("    {}: Object.freeze({{", entry.name));
            lines.push(format!("        Name: `{}`,", entry.description));
            lines.push(format!("        Value: {},", entry.value));
            lines.push("    }),".to_string());
        }

        lines.push("})".to_string());
    }

    /// Strongly-typed form: `name = value` pairs in declaration order,
    /// without description metadata.
    fn emit_typed_enum(&self, lines: &mut Vec<String>, decl: &TypeDecl) {
        lines.push(format!("export enum {} {{", decl.name));
        for member in &decl.members {
            lines.push(format!("  {} = {},", member.name, member.value));
        }
        lines.push("}".to_string());
    }

    fn doc_block(&self, lines: &mut Vec<String>, indent: &str, summary: &str, tag: &str) {
        lines.push(format!("{indent}/**"));
        if !summary.is_empty() {
            lines.push(format!("{indent} * {summary}"));
        }
        lines.push(format!("{indent} * {tag}"));
        lines.push(format!("{indent} */"));
    }
}
