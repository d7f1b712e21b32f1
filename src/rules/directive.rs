use super::{Candidate, Rewrite, RuleInput};
use crate::editor::EditOperation;
use crate::metadata::{DirectiveKind, DirectiveRecord, Record};
use crate::source::SourceSpan;
use swc_core::common::Spanned;
use swc_core::ecma::ast::*;

/// Removes `"use strict"` when it is the first statement of its list. A
/// directive alone on its line takes its line break with it.
pub(super) fn use_strict(input: &RuleInput<'_>) -> Option<Rewrite> {
    let Candidate::Statement {
        stmt, position: 0, ..
    } = input.candidate
    else {
        return None;
    };
    let Stmt::Expr(ExprStmt { expr, .. }) = stmt else {
        return None;
    };
    match &**expr {
        Expr::Lit(Lit::Str(s)) if s.value.as_ref() == "use strict" => {}
        _ => return None,
    }

    let source = input.source;
    let node = source.statement_range(stmt.span());
    let line_start =
        node.start == source.body_start() || source.byte_at(node.start - 1) == Some(b'\n');
    let end = match (source.byte_at(node.end), source.byte_at(node.end + 1)) {
        (Some(b'\n'), _) if line_start => node.end + 1,
        (Some(b'\r'), Some(b'\n')) if line_start => node.end + 2,
        _ => node.end,
    };

    Some(
        Rewrite::record(Record::Directive(DirectiveRecord {
            kind: DirectiveKind::RemovedStrictMode,
            node,
        }))
        .edit(EditOperation::Remove(SourceSpan::new(node.start, end))),
    )
}
