use crate::diagnostics::DiagnosticSink;
use crate::editor::EditError;
use crate::rules::{Candidate, RuleEngine, RuleInput};
use crate::scope::GlobalScope;
use crate::transform::SourceUnit;
use swc_core::ecma::{
    ast::*,
    visit::{Visit, VisitWith},
};

/// Pre-order walk that offers nodes to the rule engine.
///
/// Function-like subtrees are never entered, and a node a rule has handled is
/// not descended into. The first edit error stops all further rewriting.
pub(crate) struct RewriteVisitor<'u, 's> {
    pub(crate) unit: &'u mut SourceUnit<'s>,
    pub(crate) engine: &'u RuleEngine,
    pub(crate) scope: &'u dyn GlobalScope,
    pub(crate) sink: &'u mut dyn DiagnosticSink,
    pub(crate) error: Option<EditError>,
}

impl<'u, 's> RewriteVisitor<'u, 's> {
    /// Offers `candidate` to the rules; returns whether its subtree is done.
    fn enter(&mut self, candidate: Candidate<'_>) -> bool {
        if self.error.is_some() {
            return true;
        }
        let input = RuleInput {
            candidate,
            source: self.unit.source,
            scope: self.scope,
        };
        let SourceUnit {
            editor, metadata, ..
        } = &mut *self.unit;
        match self.engine.rewrite(&input, editor, metadata, &mut *self.sink) {
            Ok(matched) => matched,
            Err(err) => {
                tracing::error!(error = %err, "overlapping rewrite, aborting unit");
                self.error = Some(err);
                true
            }
        }
    }

    fn visit_statement(&mut self, stmt: &Stmt, position: usize, top_level: bool) {
        let handled = self.enter(Candidate::Statement {
            stmt,
            position,
            top_level,
        });
        if !handled {
            stmt.visit_children_with(self);
        }
    }
}

impl Visit for RewriteVisitor<'_, '_> {
    fn visit_module_items(&mut self, items: &[ModuleItem]) {
        for (position, item) in items.iter().enumerate() {
            match item {
                ModuleItem::Stmt(stmt) => self.visit_statement(stmt, position, true),
                ModuleItem::ModuleDecl(decl) => decl.visit_with(self),
            }
        }
    }

    fn visit_script(&mut self, script: &Script) {
        for (position, stmt) in script.body.iter().enumerate() {
            self.visit_statement(stmt, position, true);
        }
    }

    fn visit_stmts(&mut self, stmts: &[Stmt]) {
        for (position, stmt) in stmts.iter().enumerate() {
            self.visit_statement(stmt, position, false);
        }
    }

    fn visit_call_expr(&mut self, call: &CallExpr) {
        if !self.enter(Candidate::Call(call)) {
            call.visit_children_with(self);
        }
    }

    // function-like constructs are left alone, requires inside them included

    fn visit_function(&mut self, _: &Function) {
        tracing::trace!("skipping function body");
    }

    fn visit_arrow_expr(&mut self, _: &ArrowExpr) {
        tracing::trace!("skipping arrow function");
    }

    fn visit_constructor(&mut self, _: &Constructor) {}

    fn visit_getter_prop(&mut self, _: &GetterProp) {}

    fn visit_setter_prop(&mut self, _: &SetterProp) {}
}
