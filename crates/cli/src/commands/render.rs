use std::fmt;

use orgchart_core::analysis::{AnalysisPolicy, AnalysisReport};

/// Render the report as the human-readable text printed by `analyze`.
pub fn render_report(report: &AnalysisReport, policy: &AnalysisPolicy) -> String {
    TextReport { report, policy }.to_string()
}

/// Text view of an [`AnalysisReport`] under the policy that produced it.
pub struct TextReport<'a> {
    pub report: &'a AnalysisReport,
    pub policy: &'a AnalysisPolicy,
}

impl fmt::Display for TextReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_salary_issues(f)?;
        writeln!(f)?;
        self.fmt_reporting_lines(f)?;
        writeln!(f)?;
        writeln!(f, "Analysis complete.")
    }
}

impl TextReport<'_> {
    fn fmt_salary_issues(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "1. Manager Salary Analysis")?;
        if self.report.salary_issues.is_empty() {
            return writeln!(
                f,
                "All managers comply with salary requirements ({:.0}-{:.0}% above average subordinates)",
                (self.policy.min_salary_ratio - 1.0) * 100.0,
                (self.policy.max_salary_ratio - 1.0) * 100.0
            );
        }

        writeln!(f, "The following managers have salary issues:")?;
        for issue in &self.report.salary_issues {
            writeln!(
                f,
                "- {} {} (ID: {}) is {} by {}",
                issue.employee_first_name,
                issue.employee_last_name,
                issue.employee_id,
                issue.issue_type.as_str(),
                format_amount(issue.difference)
            )?;
        }
        Ok(())
    }

    fn fmt_reporting_lines(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let max = self.policy.max_reporting_depth;
        writeln!(f, "2. Reporting Line Analysis")?;
        if self.report.long_reporting_lines.is_empty() {
            return writeln!(
                f,
                "All employees have acceptable reporting line lengths (<={max} managers to CEO)"
            );
        }

        writeln!(f, "The following employees have too long reporting lines:")?;
        for line in &self.report.long_reporting_lines {
            writeln!(
                f,
                "- Employee ID: {} has {} more managers than allowed (total managers: {})",
                line.employee_id,
                line.excess_managers,
                line.excess_managers + max
            )?;
        }
        Ok(())
    }
}

/// Format a non-negative amount with two decimals and thousands separators.
pub fn format_amount(value: f64) -> String {
    let fixed = format!("{value:.2}");
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    let (sign, digits) = match int_part.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", int_part),
    };

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    format!("{sign}{grouped}.{frac_part}")
}
