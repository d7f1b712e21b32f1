//! Specifier-list builders for `import`/`export` statements.

use crate::metadata::Binding;

/// Renders `(from, to)` pairs as `{ a, b as c }`, eliding `as` when both
/// names match.
pub fn render_specifier_list<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> String {
    let specifiers: Vec<String> = pairs
        .into_iter()
        .map(|(from, to)| {
            if from == to {
                from.to_string()
            } else {
                format!("{from} as {to}")
            }
        })
        .collect();
    if specifiers.is_empty() {
        "{}".to_string()
    } else {
        format!("{{ {} }}", specifiers.join(", "))
    }
}

/// Export side: each binding reads `local as exported`.
pub fn render_export_specifiers(bindings: &[Binding]) -> String {
    render_specifier_list(
        bindings
            .iter()
            .map(|b| (b.local_name.as_str(), b.external_name.as_str())),
    )
}

/// Import side: bindings of `default` render as the bare local name, the rest
/// as `{ imported as local }`.
pub fn render_import_specifiers(bindings: &[Binding]) -> String {
    let (defaults, named): (Vec<&Binding>, Vec<&Binding>) = bindings
        .iter()
        .partition(|b| b.external_name == "default");

    let mut parts: Vec<String> = defaults.iter().map(|b| b.local_name.clone()).collect();
    if !named.is_empty() || parts.is_empty() {
        parts.push(render_specifier_list(
            named
                .iter()
                .map(|b| (b.external_name.as_str(), b.local_name.as_str())),
        ));
    }
    parts.join(", ")
}
