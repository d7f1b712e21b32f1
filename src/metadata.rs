use crate::source::SourceSpan;
use serde::Serialize;

// -----------------------------------------------------------------------------
// Bindings
// -----------------------------------------------------------------------------

/// Association between a name bound in this module and the name another module
/// sees (the imported name for imports, the exported name for exports).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Binding {
    pub local_name: String,
    pub external_name: String,
}

impl Binding {
    pub fn new(local_name: impl Into<String>, external_name: impl Into<String>) -> Self {
        Self {
            local_name: local_name.into(),
            external_name: external_name.into(),
        }
    }

    /// `(name, name)`; the common case where no renaming is involved.
    pub fn same(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            local_name: name.clone(),
            external_name: name,
        }
    }
}

// -----------------------------------------------------------------------------
// Records
// -----------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ImportKind {
    DefaultImport,
    NamedImport,
    BareImport,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ExportKind {
    NamedExport,
    DefaultExport,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum DirectiveKind {
    RemovedStrictMode,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImportRecord {
    pub kind: ImportKind,
    pub node: SourceSpan,
    pub bindings: Vec<Binding>,
    pub module_path: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportRecord {
    pub kind: ExportKind,
    pub node: SourceSpan,
    pub bindings: Vec<Binding>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DirectiveRecord {
    pub kind: DirectiveKind,
    pub node: SourceSpan,
}

/// One record produced by a rewrite.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Record {
    Import(ImportRecord),
    Export(ExportRecord),
    Directive(DirectiveRecord),
}

// -----------------------------------------------------------------------------
// Per-unit metadata
// -----------------------------------------------------------------------------

/// Everything the rewrite learned about one source unit, in source order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Metadata {
    pub imports: Vec<ImportRecord>,
    pub exports: Vec<ExportRecord>,
    pub directives: Vec<DirectiveRecord>,
}

impl Metadata {
    pub fn push(&mut self, record: Record) {
        match record {
            Record::Import(r) => self.imports.push(r),
            Record::Export(r) => self.exports.push(r),
            Record::Directive(r) => self.directives.push(r),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.imports.is_empty() && self.exports.is_empty() && self.directives.is_empty()
    }

    pub fn record_count(&self) -> usize {
        self.imports.len() + self.exports.len() + self.directives.len()
    }

    /// Module paths of every recorded import, in source order.
    pub fn dependencies(&self) -> impl Iterator<Item = &str> {
        self.imports.iter().map(|i| i.module_path.as_str())
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_serialize_kebab_case() {
        let mut metadata = Metadata::default();
        metadata.push(Record::Import(ImportRecord {
            kind: ImportKind::DefaultImport,
            node: SourceSpan::new(0, 26),
            bindings: vec![Binding::new("x", "default")],
            module_path: "p".into(),
        }));
        metadata.push(Record::Directive(DirectiveRecord {
            kind: DirectiveKind::RemovedStrictMode,
            node: SourceSpan::new(27, 41),
        }));

        let json: serde_json::Value =
            serde_json::from_str(&metadata.to_json().expect("should serialize")).expect("json");
        assert_eq!(json["imports"][0]["kind"], "default-import");
        assert_eq!(json["imports"][0]["bindings"][0]["external_name"], "default");
        assert_eq!(json["directives"][0]["kind"], "removed-strict-mode");
        assert_eq!(json["exports"].as_array().map(Vec::len), Some(0));
    }

    #[test]
    fn dependencies_follow_source_order() {
        let mut metadata = Metadata::default();
        for path in ["a", "b"] {
            metadata.push(Record::Import(ImportRecord {
                kind: ImportKind::BareImport,
                node: SourceSpan::empty(0),
                bindings: vec![],
                module_path: path.into(),
            }));
        }
        assert_eq!(metadata.dependencies().collect::<Vec<_>>(), ["a", "b"]);
        assert_eq!(metadata.record_count(), 2);
    }
}
