//! Rust source parser that populates the type universe.
//!
//! This module parses source files with `syn` and lowers struct, enum, and
//! union declarations into the owned declaration model. The dotted
//! namespace of each declaration combines the file's path relative to the
//! project root with any inline `mod` nesting.

use crate::error::{CliError, CliResult, ParseError};
use crate::model::{EnumMemberDecl, Primitive, PropertyDecl, TypeDecl, TypeKind, TypeRef, TypeUniverse};
use crate::scanner::SourceFile;
use std::path::Path;
use syn::{Attribute, Expr, Fields, Item, Lit, Type, UnOp, Visibility};

/// Parser for Rust source files.
#[derive(Debug, Default)]
pub struct DeclParser;

impl DeclParser {
    pub fn new() -> Self {
        Self
    }

    /// Parse one source file into declarations.
    pub fn parse_file(&self, source: &SourceFile) -> CliResult<Vec<TypeDecl>> {
        self.parse_source(&source.content, &source.relative_path)
    }

    /// Parse source text, deriving the base namespace from `relative_path`.
    pub fn parse_source(&self, content: &str, relative_path: &Path) -> CliResult<Vec<TypeDecl>> {
        let syntax = syn::parse_file(content)
            .map_err(|e| ParseError::syntax(relative_path.to_path_buf(), e.to_string()))?;

        let mut decls = Vec::new();
        let namespace = namespace_of(relative_path);
        collect_items(&syntax.items, &namespace, &mut decls);
        Ok(decls)
    }

    /// Parse multiple source files into a universe, collecting per-file
    /// errors instead of aborting; a syntax error in one file only costs
    /// that file's declarations.
    pub fn parse_files(&self, sources: &[SourceFile]) -> (TypeUniverse, Vec<ParseError>) {
        let mut universe = TypeUniverse::new();
        let mut errors = Vec::new();

        for source in sources {
            match self.parse_file(source) {
                Ok(decls) => {
                    for decl in decls {
                        universe.insert(decl);
                    }
                }
                Err(CliError::Parse(e)) => errors.push(e),
                Err(_) => {}
            }
        }

        (universe, errors)
    }
}

/// Derive the dotted namespace from a project-relative file path.
///
/// A leading `src` segment is dropped, as are `lib`/`main`/`mod` file
/// stems; every remaining segment becomes a namespace component.
pub fn namespace_of(relative_path: &Path) -> String {
    let mut segments: Vec<String> = relative_path
        .components()
        .map(|c| c.as_os_str().to_string_lossy().to_string())
        .collect();

    if let Some(last) = segments.last_mut() {
        if let Some(stem) = last.strip_suffix(".rs") {
            *last = stem.to_string();
        }
        if matches!(last.as_str(), "lib" | "main" | "mod") {
            segments.pop();
        }
    }

    if segments.first().map(String::as_str) == Some("src") {
        segments.remove(0);
    }

    segments.join(".")
}

fn collect_items(items: &[Item], namespace: &str, out: &mut Vec<TypeDecl>) {
    for item in items {
        match item {
            Item::Struct(s) => {
                let properties = match &s.fields {
                    Fields::Named(named) => named.named.iter().map(lower_field).collect(),
                    _ => Vec::new(),
                };
                out.push(TypeDecl {
                    name: s.ident.to_string(),
                    namespace: namespace.to_string(),
                    kind: TypeKind::Class,
                    public: is_public(&s.vis),
                    generic: !s.generics.params.is_empty(),
                    properties,
                    members: Vec::new(),
                    docs: doc_lines(&s.attrs),
                });
            }
            Item::Enum(e) => {
                // Only flat enums have a faithful rendering; data-carrying
                // enums are left out of the universe entirely.
                if !e.variants.iter().all(|v| matches!(v.fields, Fields::Unit)) {
                    continue;
                }
                let mut next_value = 0i64;
                let members = e
                    .variants
                    .iter()
                    .map(|v| {
                        let value = discriminant_value(v).unwrap_or(next_value);
                        next_value = value + 1;
                        EnumMemberDecl {
                            name: v.ident.to_string(),
                            value,
                            description: attr_string(&v.attrs, "description"),
                            display_name: attr_string(&v.attrs, "display_name"),
                            display: display_name_field(&v.attrs),
                            docs: doc_lines(&v.attrs),
                        }
                    })
                    .collect();
                out.push(TypeDecl {
                    name: e.ident.to_string(),
                    namespace: namespace.to_string(),
                    kind: TypeKind::Enum,
                    public: is_public(&e.vis),
                    generic: !e.generics.params.is_empty(),
                    properties: Vec::new(),
                    members,
                    docs: doc_lines(&e.attrs),
                });
            }
            Item::Union(u) => {
                out.push(TypeDecl {
                    name: u.ident.to_string(),
                    namespace: namespace.to_string(),
                    kind: TypeKind::Union,
                    public: is_public(&u.vis),
                    generic: !u.generics.params.is_empty(),
                    properties: u.fields.named.iter().map(lower_field).collect(),
                    members: Vec::new(),
                    docs: doc_lines(&u.attrs),
                });
            }
            Item::Mod(m) => {
                if let Some((_, items)) = &m.content {
                    let nested = if namespace.is_empty() {
                        m.ident.to_string()
                    } else {
                        format!("{}.{}", namespace, m.ident)
                    };
                    collect_items(items, &nested, out);
                }
            }
            _ => {}
        }
    }
}

fn lower_field(field: &syn::Field) -> PropertyDecl {
    PropertyDecl {
        name: field
            .ident
            .as_ref()
            .map(|i| i.to_string())
            .unwrap_or_default(),
        ty: lower_type(&field.ty),
        public: is_public(&field.vis),
        docs: doc_lines(&field.attrs),
    }
}

/// Lower a syntactic type to a [`TypeRef`].
///
/// Recognized containers become structural modifiers; any other
/// constructed generic is kept as an opaque identifier so the mapping
/// cascade can fall back deliberately instead of guessing.
pub fn lower_type(ty: &Type) -> TypeRef {
    match ty {
        Type::Path(type_path) => {
            let Some(segment) = type_path.path.segments.last() else {
                return TypeRef::Primitive(Primitive::Any);
            };
            let ident = segment.ident.to_string();
            match ident.as_str() {
                "String" | "str" | "char" => TypeRef::Primitive(Primitive::String),
                "i8" | "i16" | "i32" | "i64" | "i128" | "isize" | "u8" | "u16" | "u32"
                | "u64" | "u128" | "usize" | "f32" | "f64" => {
                    TypeRef::Primitive(Primitive::Number)
                }
                "bool" => TypeRef::Primitive(Primitive::Boolean),
                "DateTime" | "NaiveDateTime" | "NaiveDate" | "SystemTime" => {
                    TypeRef::Primitive(Primitive::Datetime)
                }
                "Value" => TypeRef::Primitive(Primitive::Any),
                "Option" => match single_argument(segment) {
                    Some(inner) => TypeRef::nullable(lower_type(inner)),
                    None => TypeRef::Primitive(Primitive::Any),
                },
                "Vec" | "VecDeque" | "HashSet" | "BTreeSet" => match single_argument(segment) {
                    Some(inner) => TypeRef::array(lower_type(inner)),
                    None => TypeRef::Primitive(Primitive::Any),
                },
                "HashMap" | "BTreeMap" => match pair_arguments(segment) {
                    Some((key, value)) => TypeRef::map(lower_type(key), lower_type(value)),
                    None => TypeRef::Primitive(Primitive::Any),
                },
                "Box" | "Rc" | "Arc" => match single_argument(segment) {
                    Some(inner) => TypeRef::wrapped(lower_type(inner)),
                    None => TypeRef::Primitive(Primitive::Any),
                },
                _ => {
                    if let syn::PathArguments::AngleBracketed(args) = &segment.arguments {
                        // Keep the lowered arguments: the closure walk still
                        // descends into them even though the mapping falls
                        // back to the base identifier.
                        let args = args
                            .args
                            .iter()
                            .filter_map(|arg| match arg {
                                syn::GenericArgument::Type(inner) => Some(lower_type(inner)),
                                _ => None,
                            })
                            .collect();
                        TypeRef::Opaque { name: ident, args }
                    } else {
                        TypeRef::Named(ident)
                    }
                }
            }
        }
        Type::Reference(r) => lower_type(&r.elem),
        Type::Slice(s) => TypeRef::array(lower_type(&s.elem)),
        Type::Array(a) => TypeRef::array(lower_type(&a.elem)),
        Type::Tuple(t) if t.elems.is_empty() => TypeRef::Primitive(Primitive::Void),
        Type::Paren(p) => lower_type(&p.elem),
        _ => TypeRef::Primitive(Primitive::Any),
    }
}

fn single_argument(segment: &syn::PathSegment) -> Option<&Type> {
    if let syn::PathArguments::AngleBracketed(args) = &segment.arguments {
        for arg in &args.args {
            if let syn::GenericArgument::Type(inner) = arg {
                return Some(inner);
            }
        }
    }
    None
}

fn pair_arguments(segment: &syn::PathSegment) -> Option<(&Type, &Type)> {
    if let syn::PathArguments::AngleBracketed(args) = &segment.arguments {
        let mut types = args.args.iter().filter_map(|arg| match arg {
            syn::GenericArgument::Type(inner) => Some(inner),
            _ => None,
        });
        if let (Some(key), Some(value)) = (types.next(), types.next()) {
            return Some((key, value));
        }
    }
    None
}

fn is_public(vis: &Visibility) -> bool {
    matches!(vis, Visibility::Public(_))
}

/// Collect `#[doc = "..."]` lines, trimmed.
fn doc_lines(attrs: &[Attribute]) -> Vec<String> {
    attrs
        .iter()
        .filter(|a| a.path().is_ident("doc"))
        .filter_map(|a| match &a.meta {
            syn::Meta::NameValue(nv) => match &nv.value {
                Expr::Lit(lit) => match &lit.lit {
                    Lit::Str(s) => Some(s.value().trim().to_string()),
                    _ => None,
                },
                _ => None,
            },
            _ => None,
        })
        .collect()
}

/// Read a string-literal annotation like `#[description("...")]`.
fn attr_string(attrs: &[Attribute], name: &str) -> Option<String> {
    attrs
        .iter()
        .find(|a| a.path().is_ident(name))
        .and_then(|a| a.parse_args::<syn::LitStr>().ok())
        .map(|lit| lit.value())
}

/// Read the `name` field of a `#[display(name = "...")]` annotation.
fn display_name_field(attrs: &[Attribute]) -> Option<String> {
    let attr = attrs.iter().find(|a| a.path().is_ident("display"))?;
    let mut found = None;
    let _ = attr.parse_nested_meta(|meta| {
        if meta.path.is_ident("name") {
            let value: syn::LitStr = meta.value()?.parse()?;
            found = Some(value.value());
        }
        Ok(())
    });
    found
}

fn discriminant_value(variant: &syn::Variant) -> Option<i64> {
    let (_, expr) = variant.discriminant.as_ref()?;
    match expr {
        Expr::Lit(lit) => match &lit.lit {
            Lit::Int(int) => int.base10_parse::<i64>().ok(),
            _ => None,
        },
        Expr::Unary(unary) if matches!(unary.op, UnOp::Neg(_)) => match &*unary.expr {
            Expr::Lit(lit) => match &lit.lit {
                Lit::Int(int) => int.base10_parse::<i64>().ok().map(|v| -v),
                _ => None,
            },
            _ => None,
        },
        _ => None,
    }
}
