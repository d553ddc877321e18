//! # typetransfer-cli
//!
//! Generates JavaScript or TypeScript model files from Rust type
//! declarations.
//!
//! The pipeline parses Rust sources with `syn`, selects eligible public
//! model types by namespace, walks the nested closure of referenced
//! complex types, and emits one file per type plus a shared enumeration
//! file. Output paths mirror the namespace hierarchy.
//!
//! ## Usage
//!
//! ```no_run
//! use typetransfer_cli::config::Config;
//! use typetransfer_cli::generator::ModelGenerator;
//! use typetransfer_cli::parser::DeclParser;
//! use typetransfer_cli::scanner::SourceScanner;
//! use typetransfer_cli::selector::NamespaceFilter;
//! use typetransfer_cli::writer::FileWriter;
//! use std::path::Path;
//!
//! # fn main() -> typetransfer_cli::error::CliResult<()> {
//! let files = SourceScanner::new("./src").scan()?;
//! let (universe, _warnings) = DeclParser::new().parse_files(&files);
//!
//! let generator = ModelGenerator::new(Config::default());
//! let outcome = generator.generate(
//!     &universe,
//!     &NamespaceFilter::Prefix("app.view".to_string()),
//!     Path::new("./wwwroot/js"),
//!     &FileWriter::new(false),
//! )?;
//! println!("generated {} files", outcome.artifacts.len());
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod docs;
pub mod emitter;
pub mod enums;
pub mod error;
pub mod generator;
pub mod mapper;
pub mod model;
pub mod parser;
pub mod planner;
pub mod resolver;
pub mod scanner;
pub mod selector;
pub mod writer;

pub use config::{Config, ConfigManager};
pub use emitter::{CodeEmitter, ScriptFlavor};
pub use error::{CliError, CliResult};
pub use generator::{GenerateOutcome, ModelGenerator};
pub use model::{TypeDecl, TypeKind, TypeRef, TypeUniverse};
pub use parser::DeclParser;
pub use scanner::SourceScanner;
pub use selector::NamespaceFilter;
pub use writer::FileWriter;
