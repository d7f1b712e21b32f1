//! Ordered recognition-and-rewrite rules.
//!
//! Each rule inspects one candidate node and, when it recognises its shape,
//! describes the rewrite: a metadata record, the span edits and any warnings.
//! Recognition is pure; the [`RuleEngine`] applies the first rewrite offered,
//! in table order.

mod directive;
mod export;
mod require;

use crate::config::Config;
use crate::diagnostics::{DiagnosticSink, WarningKind};
use crate::editor::{EditError, EditOperation, SpanEditor};
use crate::metadata::{Metadata, Record};
use crate::scope::GlobalScope;
use crate::source::{SourceSpan, SourceText};
use swc_core::ecma::ast::{CallExpr, Stmt};

// -----------------------------------------------------------------------------
// Rule inputs and outputs
// -----------------------------------------------------------------------------

/// A node offered to the rules.
#[derive(Debug, Clone, Copy)]
pub enum Candidate<'a> {
    Statement {
        stmt: &'a Stmt,
        /// Index among the statements of the enclosing list.
        position: usize,
        /// Whether the enclosing list is the unit's top-level body.
        top_level: bool,
    },
    Call(&'a CallExpr),
}

pub struct RuleInput<'a> {
    pub candidate: Candidate<'a>,
    pub source: SourceText<'a>,
    pub scope: &'a dyn GlobalScope,
}

impl<'a> RuleInput<'a> {
    /// The statement under inspection, if it sits in the top-level body.
    pub(crate) fn top_level_statement(&self) -> Option<&'a Stmt> {
        match self.candidate {
            Candidate::Statement {
                stmt,
                top_level: true,
                ..
            } => Some(stmt),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingWarning {
    pub kind: WarningKind,
    pub span: SourceSpan,
    pub message: String,
}

/// What a matching rule wants done.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Rewrite {
    pub record: Option<Record>,
    pub edits: Vec<EditOperation>,
    pub warnings: Vec<PendingWarning>,
}

impl Rewrite {
    pub fn record(record: Record) -> Self {
        Self {
            record: Some(record),
            ..Default::default()
        }
    }

    /// A match that only reports; nothing is recorded or edited.
    pub fn warning_only(kind: WarningKind, span: SourceSpan, message: String) -> Self {
        Self::default().warn(kind, span, message)
    }

    pub fn edit(mut self, op: EditOperation) -> Self {
        self.edits.push(op);
        self
    }

    pub fn warn(mut self, kind: WarningKind, span: SourceSpan, message: String) -> Self {
        self.warnings.push(PendingWarning {
            kind,
            span,
            message,
        });
        self
    }
}

pub struct Rule {
    pub name: &'static str,
    pub recognize: fn(&RuleInput<'_>) -> Option<Rewrite>,
}

/// All rules, most specific first within each family.
pub static RULES: &[Rule] = &[
    Rule { name: "single-export-require", recognize: require::single_export },
    Rule { name: "named-export-require", recognize: require::named_export },
    Rule { name: "destructured-require", recognize: require::destructured },
    Rule { name: "side-effect-require", recognize: require::side_effect },
    Rule { name: "unsupported-require", recognize: require::unsupported },
    Rule { name: "default-named-export", recognize: export::default_named_export },
    Rule { name: "reserved-name-export", recognize: export::reserved_name_export },
    Rule { name: "function-export", recognize: export::function_export },
    Rule { name: "identifier-export", recognize: export::identifier_export },
    Rule { name: "value-export", recognize: export::value_export },
    Rule { name: "object-module-export", recognize: export::object_module_export },
    Rule { name: "default-module-export", recognize: export::default_module_export },
    Rule { name: USE_STRICT_RULE, recognize: directive::use_strict },
];

const USE_STRICT_RULE: &str = "use-strict-directive";

// -----------------------------------------------------------------------------
// Engine
// -----------------------------------------------------------------------------

pub struct RuleEngine {
    rules: Vec<&'static Rule>,
}

impl RuleEngine {
    pub fn new(config: &Config) -> Self {
        let rules = RULES
            .iter()
            .filter(|rule| config.strip_use_strict || rule.name != USE_STRICT_RULE)
            .collect();
        Self { rules }
    }

    pub fn rule_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.rules.iter().map(|rule| rule.name)
    }

    /// First rule whose shape matches `input`, with its rewrite.
    pub fn recognize(&self, input: &RuleInput<'_>) -> Option<(&'static str, Rewrite)> {
        self.rules
            .iter()
            .find_map(|rule| (rule.recognize)(input).map(|rewrite| (rule.name, rewrite)))
    }

    /// Runs the rules against `input` and applies the winning rewrite.
    /// Returns whether a rule matched.
    pub fn rewrite(
        &self,
        input: &RuleInput<'_>,
        editor: &mut SpanEditor<'_>,
        metadata: &mut Metadata,
        sink: &mut dyn DiagnosticSink,
    ) -> Result<bool, EditError> {
        let Some((name, rewrite)) = self.recognize(input) else {
            return Ok(false);
        };
        tracing::debug!(rule = name, edits = rewrite.edits.len(), "rule matched");

        for op in rewrite.edits {
            editor.apply(op)?;
        }
        for w in &rewrite.warnings {
            sink.warn(w.span, w.kind, &w.message);
        }
        if let Some(record) = rewrite.record {
            metadata.push(record);
        }
        Ok(true)
    }
}
