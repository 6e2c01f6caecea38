//! Plain-text table rendering for the final report.

use std::collections::BTreeMap;
use std::fmt::Write;

const NAMESPACE_HEADER: &str = "NAMESPACE";
const PODS_HEADER: &str = "PODS";

/// Render the namespace → pods mapping as a bordered two-column table, one
/// row per namespace with its pod names stacked inside the cell.
pub fn render(matches: &BTreeMap<String, Vec<String>>) -> String {
    let ns_width = matches
        .keys()
        .map(String::len)
        .chain([NAMESPACE_HEADER.len()])
        .max()
        .unwrap_or(0);
    let pod_width = matches
        .values()
        .flatten()
        .map(String::len)
        .chain([PODS_HEADER.len()])
        .max()
        .unwrap_or(0);

    let separator = format!(
        "+-{}-+-{}-+\n",
        "-".repeat(ns_width),
        "-".repeat(pod_width)
    );

    let mut out = String::new();
    out.push_str(&separator);
    let _ = writeln!(
        out,
        "| {NAMESPACE_HEADER:<ns_width$} | {PODS_HEADER:<pod_width$} |"
    );
    out.push_str(&separator);

    for (namespace, pods) in matches {
        for (i, pod) in pods.iter().enumerate() {
            let label = if i == 0 { namespace.as_str() } else { "" };
            let _ = writeln!(out, "| {label:<ns_width$} | {pod:<pod_width$} |");
        }
        out.push_str(&separator);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_one_row_per_namespace_with_stacked_pods() {
        let mut matches = BTreeMap::new();
        matches.insert(
            "kube-system".to_string(),
            vec!["kube-proxy-7x2vq".to_string(), "kube-proxy-b4k9s".to_string()],
        );
        matches.insert("monitoring".to_string(), vec!["node-exporter-1".to_string()]);

        let expected = "\
+-------------+------------------+
| NAMESPACE   | PODS             |
+-------------+------------------+
| kube-system | kube-proxy-7x2vq |
|             | kube-proxy-b4k9s |
+-------------+------------------+
| monitoring  | node-exporter-1  |
+-------------+------------------+
";
        assert_eq!(render(&matches), expected);
    }

    #[test]
    fn empty_report_renders_header_only() {
        let rendered = render(&BTreeMap::new());
        assert!(rendered.contains("NAMESPACE"));
        assert_eq!(rendered.lines().count(), 3);
    }
}
