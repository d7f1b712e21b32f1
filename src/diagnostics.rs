use crate::source::SourceSpan;
use serde::Serialize;
use std::fmt;

/// Non-fatal findings about recognised but questionable CommonJS shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum WarningKind {
    UnsupportedRequire,
    ExportFunctionNameMismatch,
    NamedExportConflictsWithLocalBinding,
    ReservedExportName,
}

impl WarningKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::UnsupportedRequire => "unsupported-require",
            Self::ExportFunctionNameMismatch => "export-function-name-mismatch",
            Self::NamedExportConflictsWithLocalBinding => {
                "named-export-conflicts-with-local-binding"
            }
            Self::ReservedExportName => "reserved-export-name",
        }
    }
}

impl fmt::Display for WarningKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Warning {
    pub kind: WarningKind,
    pub span: SourceSpan,
    pub message: String,
}

/// Receiver for warnings. Reporting is fire-and-forget.
pub trait DiagnosticSink {
    fn warn(&mut self, span: SourceSpan, kind: WarningKind, message: &str);
}

impl DiagnosticSink for Vec<Warning> {
    fn warn(&mut self, span: SourceSpan, kind: WarningKind, message: &str) {
        self.push(Warning {
            kind,
            span,
            message: message.to_string(),
        });
    }
}

/// Forwards every warning to `tracing` as a `WARN` event.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn warn(&mut self, span: SourceSpan, kind: WarningKind, message: &str) {
        tracing::warn!(
            kind = kind.as_str(),
            start = span.start,
            end = span.end,
            "{message}"
        );
    }
}
