use crate::config::Config;
use crate::diagnostics::DiagnosticSink;
use crate::editor::SpanEditor;
use crate::error::{Error, Result};
use crate::metadata::Metadata;
use crate::parse::parse_module;
use crate::rules::RuleEngine;
use crate::scope::{GlobalScope, ModuleScope};
use crate::source::SourceText;
use crate::traversal::RewriteVisitor;
use std::collections::HashMap;
use swc_core::ecma::{ast::Program, visit::VisitWith};

pub const NAME: &str = "modules.commonjs";
pub const DESCRIPTION: &str = "Transform CommonJS modules into ES6 modules.";

// -----------------------------------------------------------------------------
// Per-unit state
// -----------------------------------------------------------------------------

/// State owned by one source unit for the length of its pass.
pub struct SourceUnit<'s> {
    pub(crate) source: SourceText<'s>,
    pub(crate) editor: SpanEditor<'s>,
    pub(crate) metadata: Metadata,
}

impl<'s> SourceUnit<'s> {
    pub fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    pub fn editor(&self) -> &SpanEditor<'s> {
        &self.editor
    }

    /// Renders the accumulated edits and releases the metadata.
    pub fn finish(self) -> Output {
        let code = self.editor.render();
        tracing::debug!(
            imports = self.metadata.imports.len(),
            exports = self.metadata.exports.len(),
            directives = self.metadata.directives.len(),
            edits = self.editor.operations().len(),
            "finished source unit"
        );
        Output {
            code,
            metadata: self.metadata,
        }
    }
}

/// Result of processing one source unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Output {
    pub code: String,
    pub metadata: Metadata,
}

// -----------------------------------------------------------------------------
// Transform
// -----------------------------------------------------------------------------

pub struct CommonJsTransform {
    config: Config,
    engine: RuleEngine,
}

impl Default for CommonJsTransform {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

impl CommonJsTransform {
    pub fn new(config: Config) -> Self {
        let engine = RuleEngine::new(&config);
        Self { config, engine }
    }

    pub fn from_options(options: HashMap<String, serde_json::Value>) -> Result<Self> {
        Ok(Self::new(Config::from_options(options)?))
    }

    /// Starts a source unit: fresh metadata and an edit buffer over its text.
    pub fn begin<'s>(&self, source: SourceText<'s>) -> SourceUnit<'s> {
        SourceUnit {
            source,
            editor: SpanEditor::new(source.text()),
            metadata: Metadata::default(),
        }
    }

    /// Walks `program` and records every rewrite into `unit`.
    pub fn enter(
        &self,
        unit: &mut SourceUnit<'_>,
        program: &Program,
        scope: &dyn GlobalScope,
        sink: &mut dyn DiagnosticSink,
    ) -> Result<()> {
        let mut visitor = RewriteVisitor {
            unit,
            engine: &self.engine,
            scope,
            sink,
            error: None,
        };
        program.visit_with(&mut visitor);
        match visitor.error {
            Some(err) => Err(Error::Edit(err)),
            None => Ok(()),
        }
    }

    /// Rewrites a program the host already parsed from `source`.
    pub fn transform_program(
        &self,
        program: &Program,
        source: SourceText<'_>,
        scope: &dyn GlobalScope,
        sink: &mut dyn DiagnosticSink,
    ) -> Result<Output> {
        let mut unit = self.begin(source);
        self.enter(&mut unit, program, scope, sink)?;
        Ok(unit.finish())
    }

    /// Parses `code` as a module and rewrites it, using the module's own
    /// top-level bindings as the global scope.
    pub fn transform_source(&self, code: &str, sink: &mut dyn DiagnosticSink) -> Result<Output> {
        let parsed = parse_module(code, &self.config)?;
        let source = parsed.source_text(code);
        let scope = ModuleScope::collect(&parsed.module);
        let program = Program::Module(parsed.module);
        self.transform_program(&program, source, &scope, sink)
    }
}
