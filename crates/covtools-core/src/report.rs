//! Coverage report rendering

use crate::coverage::{CoverageStatus, Statement};

/// Render one keyword block of the coverage report.
///
/// Output starts with `<keyword>s <count>`, followed by one indented
/// `<label> <count>` line per status with a non-zero count, in
/// done/pending/todo/n-a order. When `verbose` is set, the todo paragraphs
/// are listed in full before the counts, separated by blank lines.
pub fn render_summary(keyword: &str, statements: &[&Statement], verbose: bool) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}s {}\n", keyword, statements.len()));
    if verbose {
        out.push('\n');
        let todos: Vec<_> = statements
            .iter()
            .filter(|s| s.status == CoverageStatus::Todo)
            .collect();
        if !todos.is_empty() {
            out.push_str("todo\n");
            for stmt in todos {
                out.push_str(&stmt.text());
                out.push_str("\n\n");
            }
        }
    }
    for status in CoverageStatus::REPORT_ORDER {
        let count = statements.iter().filter(|s| s.status == status).count();
        if count > 0 {
            out.push_str(&format!("  {} {}\n", status.label(), count));
        }
    }
    out
}
