use crate::core::AnalysisResult;

/// Renders an `AnalysisResult` as a markdown report — analysis-report-only,
/// not a stylesheet dialect.
pub fn emit(result: &AnalysisResult) -> String {
    let mut out = String::new();

    out.push_str("# Style Analysis Report\n\n");
    out.push_str(&format!(
        "- Rules analyzed: {}\n- Clusters found: {}\n- Suggestions: {}\n\n",
        result.metrics.total_rules,
        result.clusters.len(),
        result.suggestions.len()
    ));

    if !result.clusters.is_empty() {
        out.push_str("## Clusters\n\n");
        out.push_str("| id | properties | support | cohesion |\n|---|---|---|---|\n");
        for cluster in &result.clusters {
            let properties: Vec<&str> = cluster.properties.iter().map(String::as_str).collect();
            out.push_str(&format!(
                "| {} | {} | {} | {:.2} |\n",
                cluster.id,
                properties.join(", "),
                cluster.support,
                cluster.cohesion
            ));
        }
        out.push('\n');
    }

    if !result.suggestions.is_empty() {
        out.push_str("## Suggestions\n\n");
        out.push_str("| kind | description | confidence |\n|---|---|---|\n");
        for suggestion in &result.suggestions {
            out.push_str(&format!(
                "| {:?} | {} | {:.2} |\n",
                suggestion.kind, suggestion.description, suggestion.confidence
            ));
        }
        out.push('\n');
    }

    if !result.warnings.is_empty() {
        out.push_str("## Warnings\n\n");
        for warning in &result.warnings {
            out.push_str(&format!("- {warning}\n"));
        }
        out.push('\n');
    }

    out
}
