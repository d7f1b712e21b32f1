//! Tests for the require rewrite rules.

use cjs_esm_rewrite::{
    Binding, CommonJsTransform, ImportKind, Output, SourceSpan, Warning, WarningKind,
};
use pretty_assertions::assert_eq;

fn run(code: &str) -> (Output, Vec<Warning>) {
    let mut warnings = Vec::new();
    let out = CommonJsTransform::default()
        .transform_source(code, &mut warnings)
        .expect("should rewrite");
    (out, warnings)
}

#[test]
fn test_single_export_require() {
    let (out, warnings) = run("const x = require('p');\n");
    assert_eq!(out.code, "import x from 'p';\n");
    assert!(warnings.is_empty());

    let import = &out.metadata.imports[0];
    assert_eq!(import.kind, ImportKind::DefaultImport);
    assert_eq!(import.bindings, vec![Binding::new("x", "default")]);
    assert_eq!(import.module_path, "p");
    assert_eq!(import.node, SourceSpan::new(0, 23));
}

#[test]
fn test_byte_order_mark_is_preserved() {
    let (out, warnings) = run("\u{feff}const x = require('p');\n");
    assert_eq!(out.code, "\u{feff}import x from 'p';\n");
    assert!(warnings.is_empty());

    let import = &out.metadata.imports[0];
    assert_eq!(import.module_path, "p");
    assert_eq!(import.node, SourceSpan::new(3, 26));
}

#[test]
fn test_quote_style_is_preserved() {
    let (out, _) = run("var fs = require(\"fs\")\n");
    assert_eq!(out.code, "import fs from \"fs\";\n");
}

#[test]
fn test_named_export_require() {
    let (out, _) = run("const readFile = require('fs').readFile;\nconst rf = require('fs').readFile;\n");
    assert_eq!(
        out.code,
        "import { readFile } from 'fs';\nimport { readFile as rf } from 'fs';\n"
    );
    assert_eq!(out.metadata.imports.len(), 2);
    assert_eq!(out.metadata.imports[1].kind, ImportKind::NamedImport);
    assert_eq!(out.metadata.imports[1].bindings, vec![Binding::new("rf", "readFile")]);
}

#[test]
fn test_destructured_require() {
    let (out, _) = run("const { a, b } = require('p');\nlet { c: d, e } = require('q');\n");
    assert_eq!(
        out.code,
        "import { a, b } from 'p';\nimport { c as d, e } from 'q';\n"
    );
    assert_eq!(
        out.metadata.imports[1].bindings,
        vec![Binding::new("d", "c"), Binding::same("e")]
    );
}

#[test]
fn test_destructured_require_with_nested_pattern_is_left_alone() {
    let code = "const { a: { b } } = require('p');\n";
    let (out, warnings) = run(code);
    assert_eq!(out.code, code);
    assert!(out.metadata.imports.is_empty());
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0].kind, WarningKind::UnsupportedRequire);
}

#[test]
fn test_destructured_require_with_default_value_is_left_alone() {
    let code = "const { a = 1, ...rest } = require('p');\n";
    let (out, _) = run(code);
    assert_eq!(out.code, code);
    assert!(out.metadata.imports.is_empty());
}

#[test]
fn test_side_effect_require() {
    let (out, _) = run("require('./polyfill');\n");
    assert_eq!(out.code, "import './polyfill';\n");
    let import = &out.metadata.imports[0];
    assert_eq!(import.kind, ImportKind::BareImport);
    assert!(import.bindings.is_empty());
    assert_eq!(import.module_path, "./polyfill");
}

#[test]
fn test_unsupported_require_warns_once() {
    let code = "const x = require('a').b.c;\n";
    let (out, warnings) = run(code);
    assert_eq!(out.code, code);
    assert!(out.metadata.is_empty());
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0].kind, WarningKind::UnsupportedRequire);
    assert_eq!(warnings[0].span, SourceSpan::new(10, 22));
    assert_eq!(
        warnings[0].message,
        "Unsupported 'require' call cannot be transformed to an import"
    );
}

#[test]
fn test_require_as_argument_warns() {
    let (out, warnings) = run("use(require('a'));\n");
    assert_eq!(out.code, "use(require('a'));\n");
    assert_eq!(warnings.len(), 1);
}

#[test]
fn test_multiple_declarators_warn_per_call() {
    let code = "const a = require('a'), b = require('b');\n";
    let (out, warnings) = run(code);
    assert_eq!(out.code, code);
    assert_eq!(warnings.len(), 2);
}

#[test]
fn test_unrecognised_calls_are_silent() {
    let code = "require(name);\nrequire('a', 'b');\nloader.require('x');\nrequire(`tpl`);\n";
    let (out, warnings) = run(code);
    assert_eq!(out.code, code);
    assert!(warnings.is_empty());
    assert!(out.metadata.is_empty());
}

#[test]
fn test_require_in_nested_block_is_not_hoisted() {
    let code = "if (ok) {\n  const y = require('y');\n}\n";
    let (out, warnings) = run(code);
    assert_eq!(out.code, code);
    assert!(out.metadata.imports.is_empty());
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0].kind, WarningKind::UnsupportedRequire);
}

#[test]
fn test_imports_are_recorded_in_source_order() {
    let (out, _) = run("require('a');\nconst b = require('b');\nconst { c } = require('c');\n");
    assert_eq!(out.metadata.dependencies().collect::<Vec<_>>(), ["a", "b", "c"]);
}
