use super::{Candidate, Rewrite, RuleInput};
use crate::bindings::render_import_specifiers;
use crate::diagnostics::WarningKind;
use crate::editor::EditOperation;
use crate::metadata::{Binding, ImportKind, ImportRecord, Record};
use swc_core::common::Spanned;
use swc_core::ecma::ast::*;

// -----------------------------------------------------------------------------
// Shape helpers
// -----------------------------------------------------------------------------

/// The path literal of `require('<path>')`: bare `require` callee, exactly one
/// argument, and that argument a string literal.
pub(crate) fn require_call_path(call: &CallExpr) -> Option<&Str> {
    let Callee::Expr(callee) = &call.callee else {
        return None;
    };
    match &**callee {
        Expr::Ident(ident) if ident.sym.as_ref() == "require" => {}
        _ => return None,
    }
    match call.args.as_slice() {
        [ExprOrSpread { spread: None, expr }] => match &**expr {
            Expr::Lit(Lit::Str(s)) => Some(s),
            _ => None,
        },
        _ => None,
    }
}

fn require_path(expr: &Expr) -> Option<&Str> {
    match expr {
        Expr::Call(call) => require_call_path(call),
        _ => None,
    }
}

fn single_declarator(stmt: &Stmt) -> Option<&VarDeclarator> {
    let Stmt::Decl(Decl::Var(var)) = stmt else {
        return None;
    };
    match var.decls.as_slice() {
        [decl] => Some(decl),
        _ => None,
    }
}

fn import_rewrite(
    input: &RuleInput<'_>,
    kind: ImportKind,
    stmt: &Stmt,
    bindings: Vec<Binding>,
    path: &Str,
) -> Rewrite {
    let node = input.source.statement_range(stmt.span());
    // keep the literal as written, quotes included
    let path_text = input.source.slice(input.source.range(path.span));
    let text = if bindings.is_empty() {
        format!("import {path_text};")
    } else {
        format!(
            "import {} from {path_text};",
            render_import_specifiers(&bindings)
        )
    };

    Rewrite::record(Record::Import(ImportRecord {
        kind,
        node,
        bindings,
        module_path: path.value.to_string(),
    }))
    .edit(EditOperation::Overwrite(node, text))
}

// -----------------------------------------------------------------------------
// Rules
// -----------------------------------------------------------------------------

/// `const x = require('p')` -> `import x from 'p';`
pub(super) fn single_export(input: &RuleInput<'_>) -> Option<Rewrite> {
    let stmt = input.top_level_statement()?;
    let decl = single_declarator(stmt)?;
    let Pat::Ident(id) = &decl.name else {
        return None;
    };
    let path = require_path(decl.init.as_deref()?)?;

    Some(import_rewrite(
        input,
        ImportKind::DefaultImport,
        stmt,
        vec![Binding::new(id.id.sym.to_string(), "default")],
        path,
    ))
}

/// `const x = require('p').prop` -> `import { prop as x } from 'p';`
pub(super) fn named_export(input: &RuleInput<'_>) -> Option<Rewrite> {
    let stmt = input.top_level_statement()?;
    let decl = single_declarator(stmt)?;
    let Pat::Ident(id) = &decl.name else {
        return None;
    };
    let Expr::Member(member) = decl.init.as_deref()? else {
        return None;
    };
    let MemberProp::Ident(prop) = &member.prop else {
        return None;
    };
    let path = require_path(&member.obj)?;

    Some(import_rewrite(
        input,
        ImportKind::NamedImport,
        stmt,
        vec![Binding::new(id.id.sym.to_string(), prop.sym.to_string())],
        path,
    ))
}

/// `const { a, b: c } = require('p')` -> `import { a, b as c } from 'p';`
///
/// Any property whose target is not a plain identifier (nested pattern,
/// default value, rest element, non-identifier key) rejects the whole
/// declaration.
pub(super) fn destructured(input: &RuleInput<'_>) -> Option<Rewrite> {
    let stmt = input.top_level_statement()?;
    let decl = single_declarator(stmt)?;
    let Pat::Object(pattern) = &decl.name else {
        return None;
    };

    let mut bindings = Vec::with_capacity(pattern.props.len());
    for prop in &pattern.props {
        let binding = match prop {
            ObjectPatProp::Assign(AssignPatProp {
                key, value: None, ..
            }) => Binding::same(key.id.sym.to_string()),
            ObjectPatProp::KeyValue(KeyValuePatProp {
                key: PropName::Ident(key),
                value,
            }) => match &**value {
                Pat::Ident(local) => Binding::new(local.id.sym.to_string(), key.sym.to_string()),
                _ => return None,
            },
            _ => return None,
        };
        bindings.push(binding);
    }

    let path = require_path(decl.init.as_deref()?)?;
    Some(import_rewrite(
        input,
        ImportKind::NamedImport,
        stmt,
        bindings,
        path,
    ))
}

/// `require('p');` -> `import 'p';`
pub(super) fn side_effect(input: &RuleInput<'_>) -> Option<Rewrite> {
    let stmt = input.top_level_statement()?;
    let Stmt::Expr(ExprStmt { expr, .. }) = stmt else {
        return None;
    };
    let path = require_path(expr)?;
    Some(import_rewrite(
        input,
        ImportKind::BareImport,
        stmt,
        vec![],
        path,
    ))
}

/// Any other recognisable `require('p')` call: reported, left as written.
pub(super) fn unsupported(input: &RuleInput<'_>) -> Option<Rewrite> {
    let Candidate::Call(call) = input.candidate else {
        return None;
    };
    require_call_path(call)?;
    Some(Rewrite::warning_only(
        WarningKind::UnsupportedRequire,
        input.source.range(call.span),
        "Unsupported 'require' call cannot be transformed to an import".to_string(),
    ))
}
