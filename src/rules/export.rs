use super::{Rewrite, RuleInput};
use crate::bindings::render_export_specifiers;
use crate::diagnostics::WarningKind;
use crate::editor::EditOperation;
use crate::metadata::{Binding, ExportKind, ExportRecord, Record};
use crate::source::SourceSpan;
use swc_core::common::Spanned;
use swc_core::ecma::ast::*;

// -----------------------------------------------------------------------------
// Shape helpers
// -----------------------------------------------------------------------------

/// A top-level `<target> = <value>` expression statement.
struct Assignment<'a> {
    stmt: &'a Stmt,
    target: &'a MemberExpr,
    value: &'a Expr,
}

fn assignment<'a>(input: &RuleInput<'a>) -> Option<Assignment<'a>> {
    let stmt = input.top_level_statement()?;
    let Stmt::Expr(ExprStmt { expr, .. }) = stmt else {
        return None;
    };
    let Expr::Assign(assign) = &**expr else {
        return None;
    };
    if assign.op != AssignOp::Assign {
        return None;
    }
    let AssignTarget::Simple(SimpleAssignTarget::Member(target)) = &assign.left else {
        return None;
    };
    Some(Assignment {
        stmt,
        target,
        value: &assign.right,
    })
}

fn is_ident(expr: &Expr, name: &str) -> bool {
    matches!(expr, Expr::Ident(i) if i.sym.as_ref() == name)
}

/// `exports.<name> = <value>` with a non-computed property.
fn exports_assignment<'a>(input: &RuleInput<'a>) -> Option<(Assignment<'a>, &'a IdentName)> {
    let assignment = assignment(input)?;
    if !is_ident(&assignment.target.obj, "exports") {
        return None;
    }
    let MemberProp::Ident(name) = &assignment.target.prop else {
        return None;
    };
    Some((assignment, name))
}

/// `module.exports = <value>`.
fn module_exports_assignment<'a>(input: &RuleInput<'a>) -> Option<Assignment<'a>> {
    let assignment = assignment(input)?;
    if !is_ident(&assignment.target.obj, "module") {
        return None;
    }
    match &assignment.target.prop {
        MemberProp::Ident(prop) if prop.sym.as_ref() == "exports" => Some(assignment),
        _ => None,
    }
}

/// Words that cannot name a `let` or `function` declaration in module code.
const RESERVED_WORDS: &[&str] = &[
    "arguments", "await", "break", "case", "catch", "class", "const", "continue", "debugger",
    "default", "delete", "do", "else", "enum", "eval", "export", "extends", "false", "finally",
    "for", "function", "if", "implements", "import", "in", "instanceof", "interface", "let",
    "new", "null", "package", "private", "protected", "public", "return", "static", "super",
    "switch", "this", "throw", "true", "try", "typeof", "var", "void", "while", "with", "yield",
];

fn is_reserved(name: &str) -> bool {
    RESERVED_WORDS.contains(&name)
}

fn named_export_record(node: SourceSpan, bindings: Vec<Binding>) -> Record {
    Record::Export(ExportRecord {
        kind: ExportKind::NamedExport,
        node,
        bindings,
    })
}

/// Offset right after `function` (or after the `*` of a generator) in a
/// function expression starting at `start`, where a name would go.
fn function_name_offset(text: &str, start: usize) -> Option<usize> {
    let mut at = start;
    let mut rest = text.get(start..)?;
    if let Some(after) = rest.strip_prefix("async") {
        let trimmed = after.trim_start();
        at += rest.len() - trimmed.len();
        rest = trimmed;
    }
    rest = rest.strip_prefix("function")?;
    at += "function".len();
    let trimmed = rest.trim_start();
    if let Some(after_star) = trimmed.strip_prefix('*') {
        at += rest.len() - after_star.len();
    }
    Some(at)
}

// -----------------------------------------------------------------------------
// Rules
// -----------------------------------------------------------------------------

/// `exports.default = <expr>` -> `export default <expr>`
///
/// Identifier values are left to the identifier rule, which renders
/// `export { x as default };`.
pub(super) fn default_named_export(input: &RuleInput<'_>) -> Option<Rewrite> {
    let (assignment, name) = exports_assignment(input)?;
    if name.sym.as_ref() != "default" || matches!(assignment.value, Expr::Ident(_)) {
        return None;
    }
    let node = input.source.statement_range(assignment.stmt.span());
    let value_start = input.source.range(assignment.value.span()).start;

    Some(
        Rewrite::record(Record::Export(ExportRecord {
            kind: ExportKind::DefaultExport,
            node,
            bindings: vec![],
        }))
        .edit(EditOperation::Overwrite(
            SourceSpan::new(node.start, value_start),
            "export default ".to_string(),
        )),
    )
}

/// `exports.class = <expr>` cannot become a declaration; report it and leave
/// the statement alone. Identifier values still export through a specifier.
pub(super) fn reserved_name_export(input: &RuleInput<'_>) -> Option<Rewrite> {
    let (assignment, name) = exports_assignment(input)?;
    if !is_reserved(name.sym.as_ref()) || matches!(assignment.value, Expr::Ident(_)) {
        return None;
    }
    Some(Rewrite::warning_only(
        WarningKind::ReservedExportName,
        input.source.range(name.span),
        format!("Export name '{}' is a reserved word and cannot be declared", name.sym),
    ))
}

/// `exports.foo = function () {}` -> `export function foo () {}`
pub(super) fn function_export(input: &RuleInput<'_>) -> Option<Rewrite> {
    let (assignment, name) = exports_assignment(input)?;
    let Expr::Fn(fn_expr) = assignment.value else {
        return None;
    };
    let source = input.source;
    let node = source.statement_range(assignment.stmt.span());
    let value_start = source.range(assignment.value.span()).start;
    let export_name = name.sym.to_string();

    let mut rewrite = Rewrite::record(named_export_record(
        node,
        vec![Binding::same(export_name.clone())],
    ))
    .edit(EditOperation::Overwrite(
        SourceSpan::new(node.start, value_start),
        "export ".to_string(),
    ));

    match &fn_expr.ident {
        None => {
            let at = function_name_offset(source.text(), value_start)?;
            rewrite = rewrite.edit(EditOperation::Insert(at, format!(" {export_name}")));
        }
        Some(ident) if ident.sym != name.sym => {
            let ident_span = source.range(ident.span);
            rewrite = rewrite
                .edit(EditOperation::Overwrite(ident_span, export_name.clone()))
                .warn(
                    WarningKind::ExportFunctionNameMismatch,
                    ident_span,
                    format!(
                        "Exported function '{}' does not match export name '{export_name}'",
                        ident.sym
                    ),
                );
        }
        Some(_) => {}
    }

    // a declaration takes no trailing semicolon
    if node.end > node.start && source.byte_at(node.end - 1) == Some(b';') {
        rewrite = rewrite.edit(EditOperation::Remove(SourceSpan::new(node.end - 1, node.end)));
    }
    Some(rewrite)
}

/// `exports.foo = bar` -> `export { bar as foo };`
pub(super) fn identifier_export(input: &RuleInput<'_>) -> Option<Rewrite> {
    let (assignment, name) = exports_assignment(input)?;
    let Expr::Ident(local) = assignment.value else {
        return None;
    };
    let node = input.source.statement_range(assignment.stmt.span());
    let bindings = vec![Binding::new(local.sym.to_string(), name.sym.to_string())];
    let text = format!("export {};", render_export_specifiers(&bindings));

    Some(Rewrite::record(named_export_record(node, bindings)).edit(EditOperation::Overwrite(node, text)))
}

/// `exports.foo = <expr>` -> `export let foo = <expr>`
pub(super) fn value_export(input: &RuleInput<'_>) -> Option<Rewrite> {
    let (assignment, name) = exports_assignment(input)?;
    let node = input.source.statement_range(assignment.stmt.span());
    let name_span = input.source.range(name.span);
    let export_name = name.sym.to_string();

    let mut rewrite = Rewrite::record(named_export_record(
        node,
        vec![Binding::same(export_name.clone())],
    ))
    .edit(EditOperation::Overwrite(
        SourceSpan::new(node.start, name_span.start),
        "export let ".to_string(),
    ));

    if input.scope.is_used_name(&export_name) {
        rewrite = rewrite.warn(
            WarningKind::NamedExportConflictsWithLocalBinding,
            name_span,
            format!("Named export '{export_name}' conflicts with existing local binding"),
        );
    }
    Some(rewrite)
}

/// `module.exports = { a, b: c }` -> `export { a, c as b };`
///
/// Every property must be a shorthand or `key: identifier` pair; anything
/// else leaves the object to the default-export rule.
pub(super) fn object_module_export(input: &RuleInput<'_>) -> Option<Rewrite> {
    let assignment = module_exports_assignment(input)?;
    let Expr::Object(object) = assignment.value else {
        return None;
    };

    let mut bindings = Vec::with_capacity(object.props.len());
    for prop in &object.props {
        let PropOrSpread::Prop(prop) = prop else {
            return None;
        };
        let binding = match &**prop {
            Prop::Shorthand(ident) => Binding::same(ident.sym.to_string()),
            Prop::KeyValue(KeyValueProp {
                key: PropName::Ident(key),
                value,
            }) => match &**value {
                Expr::Ident(local) => Binding::new(local.sym.to_string(), key.sym.to_string()),
                _ => return None,
            },
            _ => return None,
        };
        bindings.push(binding);
    }

    let node = input.source.statement_range(assignment.stmt.span());
    let text = format!("export {};", render_export_specifiers(&bindings));
    Some(Rewrite::record(named_export_record(node, bindings)).edit(EditOperation::Overwrite(node, text)))
}

/// `module.exports = <expr>` -> `export default <expr>`
pub(super) fn default_module_export(input: &RuleInput<'_>) -> Option<Rewrite> {
    let assignment = module_exports_assignment(input)?;
    let node = input.source.statement_range(assignment.stmt.span());
    let value_start = input.source.range(assignment.value.span()).start;
    let bindings = match assignment.value {
        Expr::Ident(local) => vec![Binding::new(local.sym.to_string(), "default")],
        _ => vec![],
    };

    Some(
        Rewrite::record(Record::Export(ExportRecord {
            kind: ExportKind::DefaultExport,
            node,
            bindings,
        }))
        .edit(EditOperation::Overwrite(
            SourceSpan::new(node.start, value_start),
            "export default ".to_string(),
        )),
    )
}
