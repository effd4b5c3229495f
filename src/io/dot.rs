use crate::core::BemAnalysis;

/// Renders a `BemAnalysis`'s relationship graph as Graphviz DOT,
/// visualization only.
///
/// A component's label truncates its property list to its first three
/// names, joined with a comma, rather than listing everything it declares.
pub fn emit(bem: &BemAnalysis) -> String {
    let mut out = String::from("digraph bem {\n");

    for component in &bem.components {
        let preview: Vec<&str> = component.styles.keys().take(3).collect();
        let label = if preview.is_empty() {
            component.name.clone()
        } else {
            format!("{}\\n{}", component.name, preview.join(", "))
        };
        out.push_str(&format!("  \"{}\" [label=\"{}\"];\n", component.name, label));
    }

    for edges in bem.relationships.values() {
        for edge in edges {
            out.push_str(&format!(
                "  \"{}\" -> \"{}\" [label=\"{:?}\" weight=\"{:.2}\"];\n",
                edge.source, edge.target, edge.kind, edge.confidence
            ));
        }
    }

    out.push_str("}\n");
    out
}
