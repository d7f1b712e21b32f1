//! Rewrites CommonJS idioms (`require`, `exports.x = ...`, `module.exports =
//! ...`, `"use strict"`) into ES module syntax by splicing the original text.
//!
//! Only statically recognisable shapes at module level are rewritten. Function
//! bodies are never touched, and recognised-but-unsupported forms are
//! reported through a [`DiagnosticSink`] and left as written.
//!
//! ```
//! use cjs_esm_rewrite::{CommonJsTransform, Warning};
//!
//! let mut warnings: Vec<Warning> = Vec::new();
//! let out = CommonJsTransform::default()
//!     .transform_source("const x = require('p');\n", &mut warnings)
//!     .expect("should rewrite");
//! assert_eq!(out.code, "import x from 'p';\n");
//! assert_eq!(out.metadata.imports[0].module_path, "p");
//! ```

pub mod bindings;
pub mod config;
pub mod diagnostics;
pub mod editor;
pub mod error;
pub mod metadata;
pub mod parse;
pub mod rules;
pub mod scope;
pub mod source;
pub mod transform;
mod traversal;

pub use config::Config;
pub use diagnostics::{DiagnosticSink, TracingSink, Warning, WarningKind};
pub use editor::{EditError, EditOperation, SpanEditor};
pub use error::{Error, Result};
pub use metadata::{
    Binding, DirectiveKind, DirectiveRecord, ExportKind, ExportRecord, ImportKind, ImportRecord,
    Metadata,
};
pub use scope::{GlobalScope, ModuleScope};
pub use source::{SourceSpan, SourceText};
pub use transform::{CommonJsTransform, Output, SourceUnit, DESCRIPTION, NAME};
