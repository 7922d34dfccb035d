//! Core emitter struct and module assembly.

use indexmap::IndexMap;
use tracing::{debug, trace};
use typesmith_core::{Descriptions, TypeGraph, TypeId};

use super::combinators::UsedCombinators;
use super::convert::ConverterSynthesizer;
use super::declare::comment_lines;
use super::imports::{Import, ImportRegistry};
use super::render::TypeRenderer;
use super::tracker::DeclarationTracker;
use super::Config;
use crate::naming::{NameStyle, make_name};
use crate::{Location, Result};

pub(super) const INDENT: &str = "    ";

const USAGE_PREAMBLE: &[&str] = &[
    "# To use this code, make sure you",
    "#",
    "#     import json",
    "#",
    "# and then, to convert JSON from a string, do",
    "#",
];

/// Python emitter for one type graph.
///
/// Drive it with `declare` for every class and enum in declaration order,
/// then `top_level` for every entry point, then `finish`.
pub struct Emitter<'a> {
    pub(super) graph: &'a TypeGraph,
    pub(super) descriptions: &'a dyn Descriptions,
    pub(super) config: Config,

    pub(super) tracker: DeclarationTracker,
    pub(super) imports: ImportRegistry,
    pub(super) combinators: UsedCombinators,

    /// One block per declared class or enum
    pub(super) declarations: Vec<String>,
    /// `*_from_dict` / `*_to_dict` functions
    pub(super) helpers: Vec<String>,
    /// Usage comment lines, one per top-level
    pub(super) usage: Vec<String>,
}

impl<'a> Emitter<'a> {
    pub fn new(graph: &'a TypeGraph, descriptions: &'a dyn Descriptions, config: Config) -> Self {
        Self {
            graph,
            descriptions,
            config,
            tracker: DeclarationTracker::new(),
            imports: ImportRegistry::new(),
            combinators: UsedCombinators::new(),
            declarations: Vec::new(),
            helpers: Vec::new(),
            usage: Vec::new(),
        }
    }

    pub fn tracker(&self) -> &DeclarationTracker {
        &self.tracker
    }

    /// Imports registered so far. Combinator imports are only added by
    /// `finish`.
    pub fn imports(&self) -> &ImportRegistry {
        &self.imports
    }

    pub fn combinators(&self) -> &UsedCombinators {
        &self.combinators
    }

    /// Emit `<name>_from_dict` and `<name>_to_dict` for an entry point.
    pub fn top_level(&mut self, name: &str, id: TypeId) -> Result<()> {
        if self.config.just_types {
            return Ok(());
        }

        let location = Location::top_level(name);
        let function = make_name(name, NameStyle::PropertyName);
        let annotation =
            TypeRenderer::new(self.graph, &self.tracker).render(id, &location, &mut self.imports)?;

        let synthesizer = ConverterSynthesizer::new(self.graph);
        let deserializer = synthesizer.deserializer(id, &location, &mut self.combinators)?;
        let serializer = synthesizer.serializer(id, &location, &mut self.combinators)?;
        self.imports.add(Import::ANY);

        trace!(top_level = name, function = %function, "emitting top-level helpers");
        self.helpers.push(format!(
            "def {function}_from_dict(s: Any) -> {annotation}:\n{INDENT}return {}",
            deserializer.apply("s")
        ));
        self.helpers.push(format!(
            "def {function}_to_dict(x: {annotation}) -> Any:\n{INDENT}return {}",
            serializer.apply("x")
        ));
        self.usage.push(format!(
            "#     result = {function}_from_dict(json.loads(json_string))"
        ));
        Ok(())
    }

    /// Assemble the module.
    pub fn finish(mut self) -> String {
        for combinator in self.combinators.iter() {
            for &import in combinator.imports() {
                self.imports.add(import);
            }
            if let Some(type_var) = combinator.type_var() {
                for &import in type_var.imports() {
                    self.imports.add(import);
                }
            }
        }

        let header = self.header();

        let mut chunks = Vec::new();
        if !self.imports.is_empty() {
            chunks.push(self.imports.render());
        }
        let type_vars: Vec<&str> = self
            .combinators
            .type_vars()
            .into_iter()
            .map(|type_var| type_var.declaration())
            .collect();
        if !type_vars.is_empty() {
            chunks.push(type_vars.join("\n"));
        }
        chunks.extend(self.combinators.iter().map(|c| c.body().to_string()));

        debug!(
            imports = self.imports.len(),
            combinators = self.combinators.len(),
            declared = self.tracker.len(),
            declarations = self.declarations.len(),
            helpers = self.helpers.len(),
            "assembling python module"
        );
        chunks.extend(self.declarations);
        chunks.extend(self.helpers);

        let mut output = String::new();
        if !header.is_empty() {
            output.push_str(&header.join("\n"));
            output.push_str("\n\n");
        }
        output.push_str(&chunks.join("\n\n\n"));

        // Ensure exactly one trailing newline
        output.truncate(output.trim_end().len());
        output.push('\n');
        output
    }

    fn header(&self) -> Vec<String> {
        if !self.config.leading_comments.is_empty() {
            return self
                .config
                .leading_comments
                .iter()
                .flat_map(|line| comment_lines(line))
                .collect();
        }
        if !self.config.usage_comment || self.config.just_types || self.usage.is_empty() {
            return Vec::new();
        }
        USAGE_PREAMBLE
            .iter()
            .map(|line| line.to_string())
            .chain(self.usage.iter().cloned())
            .collect()
    }
}

/// Generate a Python module.
///
/// `order` lists every class and enum to declare, in declaration order;
/// `top_levels` maps entry point names to their types.
pub fn generate(
    graph: &TypeGraph,
    order: &[TypeId],
    top_levels: &IndexMap<String, TypeId>,
    descriptions: &dyn Descriptions,
    config: Config,
) -> Result<String> {
    debug!(
        types = graph.len(),
        declarations = order.len(),
        top_levels = top_levels.len(),
        "generating python module"
    );

    let mut emitter = Emitter::new(graph, descriptions, config);
    for &id in order {
        emitter.declare(id)?;
    }
    for (name, &id) in top_levels {
        emitter.top_level(name, id)?;
    }
    let output = emitter.finish();

    debug!(bytes = output.len(), "python module generated");
    Ok(output)
}
