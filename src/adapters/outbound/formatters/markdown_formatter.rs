use crate::application::dto::RapidScanReport;
use crate::ports::outbound::ReportFormatter;
use crate::rapid_scan::domain::{ComponentReport, LicenseReport, UpgradeReport, VulnerabilityReport};
use crate::shared::Result;

const NO_VIOLATIONS_HEADING: &str = "# :white_check_mark: No policy violations found!";

const VIOLATIONS_HEADING: &str = "# :warning: Found dependencies violating policy!";

/// Markdown table header for the violation table
const TABLE_HEADER: &str = "| Policies Violated | Dependency | License(s) | Vulnerabilities | Short Term Recommended Upgrade | Long Term Recommended Upgrade |\n";

/// Markdown table separator line
const TABLE_SEPARATOR: &str = "|-|-|-|-|-|-|\n";

/// Marker in front of the entries that caused a violation
const VIOLATION_MARKER: &str = ":x: &nbsp; ";

/// Line break inside a table cell
const CELL_BREAK: &str = "<br/>";

/// MarkdownFormatter adapter rendering the report as a pull request comment
///
/// This adapter implements the ReportFormatter port for Markdown format.
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    pub fn new() -> Self {
        Self
    }

    /// Escapes pipe characters and newlines for safe Markdown table rendering
    fn escape_markdown_table_cell(text: &str) -> String {
        text.replace('|', "\\|").replace('\n', " ")
    }

    /// Percent-encodes the characters that would end a link target or a table cell
    fn escape_link_target(href: &str) -> String {
        let mut escaped = String::with_capacity(href.len());
        for c in href.chars() {
            match c {
                '|' => escaped.push_str("%7C"),
                '(' => escaped.push_str("%28"),
                ')' => escaped.push_str("%29"),
                ' ' => escaped.push_str("%20"),
                '\n' | '\r' => {}
                _ => escaped.push(c),
            }
        }
        escaped
    }

    fn link(name: &str, href: Option<&str>) -> String {
        let name = Self::escape_markdown_table_cell(name);
        match href {
            Some(href) => format!("[{}]({})", name, Self::escape_link_target(href)),
            None => name,
        }
    }

    fn marker(violates_policy: bool) -> &'static str {
        if violates_policy {
            VIOLATION_MARKER
        } else {
            ""
        }
    }
}

impl Default for MarkdownFormatter {
    fn default() -> Self {
        Self::new()
    }
}

/// Helper methods for rendering cells
impl MarkdownFormatter {
    fn render_policies(policies: &[String]) -> String {
        policies
            .iter()
            .map(|policy| Self::escape_markdown_table_cell(policy))
            .collect::<Vec<_>>()
            .join(CELL_BREAK)
    }

    fn render_license(license: &LicenseReport) -> String {
        format!(
            "{}{}",
            Self::marker(license.violates_policy),
            Self::link(&license.name, Some(license.href.as_str()))
        )
    }

    fn render_vulnerability(vulnerability: &VulnerabilityReport) -> String {
        let mut cell = format!(
            "{}{}",
            Self::marker(vulnerability.violates_policy),
            Self::link(&vulnerability.name, vulnerability.href.as_deref())
        );
        if let (Some(severity), Some(score)) = (&vulnerability.severity, vulnerability.cvss_score) {
            cell.push_str(&format!(
                " {}: CVSS {}",
                Self::escape_markdown_table_cell(severity),
                score
            ));
        }
        cell
    }

    fn render_upgrade(upgrade: Option<&UpgradeReport>) -> String {
        upgrade
            .map(|upgrade| {
                format!(
                    "{} ({} known vulnerabilities)",
                    Self::link(&upgrade.name, Some(upgrade.href.as_str())),
                    upgrade.vulnerability_count
                )
            })
            .unwrap_or_default()
    }

    fn render_row(output: &mut String, component: &ComponentReport) {
        let licenses: Vec<String> = component.licenses.iter().map(Self::render_license).collect();
        let vulnerabilities: Vec<String> = component
            .vulnerabilities
            .iter()
            .map(Self::render_vulnerability)
            .collect();

        output.push_str(&format!(
            "| {} | {} | {} | {} | {} | {} |\n",
            Self::render_policies(&component.violated_policies),
            Self::link(&component.name, component.href.as_deref()),
            licenses.join(CELL_BREAK),
            vulnerabilities.join(CELL_BREAK),
            Self::render_upgrade(component.short_term_upgrade.as_ref()),
            Self::render_upgrade(component.long_term_upgrade.as_ref()),
        ));
    }
}

impl ReportFormatter for MarkdownFormatter {
    fn format(&self, report: &RapidScanReport) -> Result<String> {
        if report.components.is_empty() {
            return Ok(format!("{}\n", NO_VIOLATIONS_HEADING));
        }

        let mut output = String::new();
        output.push_str(VIOLATIONS_HEADING);
        output.push_str("\n\n");
        output.push_str(TABLE_HEADER);
        output.push_str(TABLE_SEPARATOR);

        for component in &report.components {
            Self::render_row(&mut output, component);
        }

        Ok(output)
    }
}
