use itertools::Itertools;

use crate::graph::record::ComponentRecord;

/// Renders a resolved component record into textual provenance.
///
/// The result is computed once per record instance and memoized; repeated
/// calls return the same text.
pub struct ReportFormatter;

impl ReportFormatter {
    /// Format the provenance report for one resolved record.
    ///
    /// Layout: an `Inputs:` section (`declared <- provider`), an `Outputs:`
    /// section (`declared -> consumers`), and an `Errors:` section when the
    /// record carries diagnostics. A rename arrow (`declared -> active`) is
    /// inserted only when a pipe redirection made the active name differ from
    /// the declared one. Unresolved providers render as blank; the calling
    /// layer decides how to highlight them.
    pub fn render_report(record: &ComponentRecord) -> &str {
        record
            .report_cache
            .get_or_init(|| Self::render(record))
            .as_str()
    }

    fn render(record: &ComponentRecord) -> String {
        let mut out = String::new();

        out.push_str("Inputs:\n");
        for (active, provider) in &record.resolved_providers {
            let declared = record.declared_name_of(active);
            let line = if declared != active {
                format!("    {declared} -> {active} <- {provider}")
            } else {
                format!("    {active} <- {provider}")
            };
            Self::push_line(&mut out, &line);
        }

        out.push_str("Outputs:\n");
        for (active, consumers) in &record.consumers {
            let declared = record.declared_name_of(active);
            let joined = consumers.iter().join(", ");
            let line = if declared != active {
                format!("    {declared} -> {active} -> {joined}")
            } else {
                format!("    {active} -> {joined}")
            };
            Self::push_line(&mut out, &line);
        }

        if !record.errors.is_empty() {
            out.push_str("Errors:\n");
            for error in &record.errors {
                Self::push_line(&mut out, &format!("    {error}"));
            }
        }

        out
    }

    fn push_line(out: &mut String, line: &str) {
        out.push_str(line.trim_end());
        out.push('\n');
    }
}
