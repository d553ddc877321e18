//! Generation pipeline orchestration.
//!
//! Runs the single-threaded batch pipeline: select roots, discover the
//! nested closure, emit each type, plan its path, write, then aggregate
//! selected enumerations into one shared file. The whole type graph and
//! artifact set are computed fresh each run.

use crate::config::Config;
use crate::docs::DocResolver;
use crate::emitter::CodeEmitter;
use crate::error::CliResult;
use crate::model::{TypeDecl, TypeUniverse};
use crate::planner::OutputPlanner;
use crate::resolver::NestedTypeResolver;
use crate::selector::{NamespaceFilter, TypeSelector};
use crate::writer::FileWriter;
use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};

/// Result of one generation run.
#[derive(Debug, Default)]
pub struct GenerateOutcome {
    /// Produced artifacts: absolute output path to project-relative path.
    pub artifacts: BTreeMap<PathBuf, PathBuf>,

    /// Number of class-like types emitted.
    pub emitted_types: usize,

    /// Number of enumerations aggregated into the shared file.
    pub emitted_enums: usize,

    /// Writes dropped because an earlier type claimed the same path.
    pub skipped_collisions: usize,
}

/// Model file generator.
pub struct ModelGenerator {
    config: Config,
}

impl ModelGenerator {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Generate model files for every eligible type in the universe.
    ///
    /// `namespace` filters root model types; enumerations are selected by
    /// the configured enum namespace segment. Returns the artifact map.
    pub fn generate(
        &self,
        universe: &TypeUniverse,
        namespace: &NamespaceFilter,
        out_root: &Path,
        writer: &FileWriter,
    ) -> CliResult<GenerateOutcome> {
        let mut docs = DocResolver::new();
        let mut outcome = GenerateOutcome::default();

        let flavor = self.config.output.flavor;
        let emitter = CodeEmitter::new(flavor);
        let mut planner = OutputPlanner::new(flavor, self.config.output.strip_segment.clone());

        // Roots plus the transitive closure of referenced complex types,
        // deduplicated by identity across roots.
        let selector = TypeSelector::new(namespace.clone());
        let resolver = NestedTypeResolver::new(universe);
        let mut seen: BTreeSet<String> = BTreeSet::new();
        let mut closure: Vec<&TypeDecl> = Vec::new();
        for root in selector.select_classes(universe) {
            for decl in resolver.discover(root) {
                if seen.insert(decl.qualified_name()) {
                    closure.push(decl);
                }
            }
        }

        for decl in closure {
            let lines = emitter.emit(decl, &mut docs)?;
            let relative = planner.path_for(decl);
            let full = out_root.join(&relative);
            if !planner.claim(&full) {
                outcome.skipped_collisions += 1;
                continue;
            }
            writer.write_lines(&full, &lines)?;
            outcome.artifacts.insert(full, relative);
            outcome.emitted_types += 1;
        }

        self.write_shared_enums(universe, out_root, &emitter, &mut planner, &mut docs, writer, &mut outcome)?;

        Ok(outcome)
    }

    /// Aggregate all selected enumerations into one shared file under a
    /// single shared header. Nothing is written when none are selected.
    #[allow(clippy::too_many_arguments)]
    fn write_shared_enums(
        &self,
        universe: &TypeUniverse,
        out_root: &Path,
        emitter: &CodeEmitter,
        planner: &mut OutputPlanner,
        docs: &mut DocResolver,
        writer: &FileWriter,
        outcome: &mut GenerateOutcome,
    ) -> CliResult<()> {
        let enum_filter = NamespaceFilter::Contains(self.config.selection.enum_namespace.clone());
        let enums = TypeSelector::new(enum_filter).select_enums(universe);
        if enums.is_empty() {
            return Ok(());
        }

        let mut lines = CodeEmitter::shared_header();
        for decl in &enums {
            lines.extend(emitter.emit_enum_block(decl, docs));
            outcome.emitted_enums += 1;
        }

        let relative = PathBuf::from(&self.config.output.enum_dir).join(format!(
            "{}.{}",
            self.config.output.enum_file,
            self.config.output.flavor.extension()
        ));
        let full = out_root.join(&relative);
        if planner.claim(&full) {
            writer.write_lines(&full, &lines)?;
            outcome.artifacts.insert(full, relative);
        } else {
            outcome.skipped_collisions += 1;
        }

        Ok(())
    }
}
