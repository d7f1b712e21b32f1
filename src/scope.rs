use std::collections::HashSet;
use swc_core::ecma::{
    ast::*,
    utils::find_pat_ids,
    visit::{Visit, VisitWith},
};

/// The single scope query the rewrite needs from its host.
pub trait GlobalScope {
    fn is_used_name(&self, name: &str) -> bool;
}

impl GlobalScope for HashSet<String> {
    fn is_used_name(&self, name: &str) -> bool {
        self.contains(name)
    }
}

/// Names bound at module level: import specifiers, top-level declarations and
/// `var` declarations in nested blocks outside function bodies.
#[derive(Debug, Default, Clone)]
pub struct ModuleScope {
    names: HashSet<String>,
}

impl ModuleScope {
    pub fn collect(module: &Module) -> Self {
        let mut collector = NameCollector {
            out: HashSet::new(),
            depth: 0,
        };
        module.visit_with(&mut collector);
        Self {
            names: collector.out,
        }
    }
}

impl GlobalScope for ModuleScope {
    fn is_used_name(&self, name: &str) -> bool {
        self.names.contains(name)
    }
}

struct NameCollector {
    out: HashSet<String>,
    /// Block nesting below the module body.
    depth: usize,
}

impl NameCollector {
    fn nested<N: VisitWith<Self>>(&mut self, n: &N) {
        self.depth += 1;
        n.visit_children_with(self);
        self.depth -= 1;
    }
}

impl Visit for NameCollector {
    fn visit_var_decl(&mut self, n: &VarDecl) {
        let hoisted = n.kind == VarDeclKind::Var;
        for d in &n.decls {
            if hoisted || self.depth == 0 {
                let ids: Vec<Id> = find_pat_ids(&d.name);
                self.out.extend(ids.into_iter().map(|(sym, _)| sym.to_string()));
            }
            d.init.visit_with(self);
        }
    }

    fn visit_fn_decl(&mut self, n: &FnDecl) {
        if self.depth == 0 {
            self.out.insert(n.ident.sym.to_string());
        }
    }

    fn visit_class_decl(&mut self, n: &ClassDecl) {
        if self.depth == 0 {
            self.out.insert(n.ident.sym.to_string());
        }
    }

    fn visit_block_stmt(&mut self, n: &BlockStmt) {
        self.nested(n);
    }

    fn visit_for_stmt(&mut self, n: &ForStmt) {
        self.nested(n);
    }

    fn visit_for_in_stmt(&mut self, n: &ForInStmt) {
        self.nested(n);
    }

    fn visit_for_of_stmt(&mut self, n: &ForOfStmt) {
        self.nested(n);
    }

    fn visit_switch_stmt(&mut self, n: &SwitchStmt) {
        self.nested(n);
    }

    fn visit_catch_clause(&mut self, n: &CatchClause) {
        self.nested(n);
    }

    fn visit_import_decl(&mut self, n: &ImportDecl) {
        for s in &n.specifiers {
            let local = match s {
                ImportSpecifier::Named(named) => &named.local,
                ImportSpecifier::Default(default) => &default.local,
                ImportSpecifier::Namespace(ns) => &ns.local,
            };
            self.out.insert(local.sym.to_string());
        }
    }

    // function-local bindings are not module bindings
    fn visit_function(&mut self, _: &Function) {}
    fn visit_arrow_expr(&mut self, _: &ArrowExpr) {}
    fn visit_class(&mut self, _: &Class) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::parse_module;
    use crate::Config;

    fn scope_of(code: &str) -> ModuleScope {
        let parsed = parse_module(code, &Config::default()).expect("should parse");
        ModuleScope::collect(&parsed.module)
    }

    #[test]
    fn collects_module_level_names() {
        let scope = scope_of(
            "import a, { b as c } from 'x';\nvar { d, e: [f] } = g;\nfunction h() { var inner = 1; }\nclass K {}\n",
        );
        for name in ["a", "c", "d", "f", "h", "K"] {
            assert!(scope.is_used_name(name), "missing {name}");
        }
        assert!(!scope.is_used_name("b"));
        assert!(!scope.is_used_name("inner"));
    }

    #[test]
    fn nested_block_scoped_declarations_are_not_module_names() {
        let scope = scope_of(
            "if (x) { let y = () => { const z = 1; }; var v = 1; function g() {} }\nfor (const i of xs) { var w; }\n",
        );
        assert!(!scope.is_used_name("y"));
        assert!(!scope.is_used_name("z"));
        assert!(!scope.is_used_name("g"));
        assert!(!scope.is_used_name("i"));
        assert!(scope.is_used_name("v"));
        assert!(scope.is_used_name("w"));
    }
}
