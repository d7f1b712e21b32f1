//! Property checks over generated CommonJS units.

use cjs_esm_rewrite::parse::parse_module;
use cjs_esm_rewrite::{CommonJsTransform, Config, ModuleScope, Warning};
use proptest::prelude::*;
use swc_core::ecma::ast::Program;

/// One statement shape per kind; `i` keeps every name unique.
fn statement(kind: usize, i: usize) -> String {
    match kind {
        0 => format!("const m{i} = require('m{i}');"),
        1 => format!("const {{ a{i}, b{i}: c{i} }} = require('d{i}');"),
        2 => format!("require('s{i}');"),
        3 => format!("exports.f{i} = function () {{ return {i}; }};"),
        4 => format!("const l{i} = {i};\nexports.e{i} = l{i};"),
        5 => format!("exports.v{i} = {i} + 1;"),
        _ => format!("function g{i}() {{ return require('lazy{i}'); }}"),
    }
}

fn unit(kinds: &[usize], strict: bool) -> String {
    let mut code = String::new();
    if strict {
        code.push_str("'use strict';\n");
    }
    for (i, kind) in kinds.iter().enumerate() {
        code.push_str(&statement(*kind, i));
        code.push('\n');
    }
    code
}

proptest! {
    #[test]
    fn edits_never_overlap(kinds in prop::collection::vec(0usize..7, 0..12), strict in any::<bool>()) {
        let code = unit(&kinds, strict);
        let parsed = parse_module(&code, &Config::default()).expect("should parse");
        let scope = ModuleScope::collect(&parsed.module);
        let source = parsed.source_text(&code);
        let program = Program::Module(parsed.module);
        let transform = CommonJsTransform::default();

        let mut unit = transform.begin(source);
        let mut warnings: Vec<Warning> = Vec::new();
        transform.enter(&mut unit, &program, &scope, &mut warnings).expect("should rewrite");

        let ops = unit.editor().operations();
        for (i, a) in ops.iter().enumerate() {
            for b in &ops[i + 1..] {
                prop_assert!(!a.conflicts_with(b));
            }
        }
        prop_assert!(warnings.is_empty());

        let metadata = unit.metadata();
        prop_assert_eq!(metadata.imports.len(), kinds.iter().filter(|k| **k <= 2).count());
        prop_assert_eq!(metadata.exports.len(), kinds.iter().filter(|k| (3..=5).contains(*k)).count());
        prop_assert_eq!(metadata.directives.len(), usize::from(strict));
    }

    #[test]
    fn second_pass_changes_nothing(kinds in prop::collection::vec(0usize..7, 0..12), strict in any::<bool>()) {
        let transform = CommonJsTransform::default();
        let mut warnings: Vec<Warning> = Vec::new();
        let first = transform.transform_source(&unit(&kinds, strict), &mut warnings).expect("first pass");
        let second = transform.transform_source(&first.code, &mut warnings).expect("second pass");
        prop_assert_eq!(&second.code, &first.code);
        prop_assert!(second.metadata.is_empty());
        prop_assert!(warnings.is_empty());
    }
}
