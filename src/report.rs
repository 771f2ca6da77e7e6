//! Check results and the line-oriented reporter

use std::io::Write;
use std::process::ExitCode;

use tracing::warn;

const RULE_WIDTH: usize = 50;
const DETAIL_INDENT: &str = "       ";

/// Outcome of a single check
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckResult {
    pub name: String,
    pub success: bool,
    pub detail: Option<String>,
}

impl CheckResult {
    pub fn pass(name: &str) -> Self {
        Self {
            name: name.to_string(),
            success: true,
            detail: None,
        }
    }

    pub fn fail(name: &str) -> Self {
        Self {
            name: name.to_string(),
            success: false,
            detail: None,
        }
    }

    /// Result whose status comes from a predicate
    pub fn from_predicate(name: &str, success: bool) -> Self {
        if success {
            Self::pass(name)
        } else {
            Self::fail(name)
        }
    }

    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }
}

/// Aggregate of every executed check in a run
#[derive(Debug, Clone, Default)]
pub struct RunSummary {
    pub results: Vec<CheckResult>,
}

impl RunSummary {
    pub fn total(&self) -> usize {
        self.results.len()
    }

    pub fn passed(&self) -> usize {
        self.results.iter().filter(|r| r.success).count()
    }

    pub fn failed(&self) -> usize {
        self.total() - self.passed()
    }

    pub fn all_passed(&self) -> bool {
        self.passed() == self.total()
    }

    /// Process exit status: 0 only when every executed check passed, else 1
    pub fn exit_status(&self) -> u8 {
        if self.all_passed() {
            0
        } else {
            1
        }
    }

    pub fn exit_code(&self) -> ExitCode {
        ExitCode::from(self.exit_status())
    }
}

/// Writes pass/fail lines as checks complete.
///
/// Output errors are logged and dropped, never returned.
pub struct Reporter<W: Write> {
    out: W,
}

impl<W: Write> Reporter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Consume the reporter, returning the sink
    pub fn into_inner(self) -> W {
        self.out
    }

    /// Emit one check result
    pub fn report(&mut self, result: &CheckResult) {
        let marker = if result.success { "[PASS]" } else { "[FAIL]" };
        let mut text = format!("{} {}\n", marker, flatten(&result.name));
        if let Some(detail) = &result.detail {
            text.push_str(DETAIL_INDENT);
            text.push_str(&flatten(detail));
            text.push('\n');
        }
        self.emit(&text);
    }

    /// Title banner printed before the first group
    pub fn banner(&mut self, title: &str) {
        let rule = "=".repeat(RULE_WIDTH);
        self.emit(&format!("\n{}\n  {}\n{}\n\n", rule, title, rule));
    }

    /// Header that opens a group of checks
    pub fn section(&mut self, title: &str) {
        self.emit(&format!("--- {} ---\n", title));
    }

    /// Blank separator between groups
    pub fn gap(&mut self) {
        self.emit("\n");
    }

    /// Final tally and verdict
    pub fn summary(&mut self, summary: &RunSummary) {
        let rule = "=".repeat(RULE_WIDTH);
        let verdict = if summary.all_passed() {
            "All tests passed! API is working correctly."
        } else {
            "Some tests failed. Check the output above."
        };
        self.emit(&format!(
            "\n{}\n  Results: {}/{} tests passed\n  {}\n{}\n\n",
            rule,
            summary.passed(),
            summary.total(),
            verdict,
            rule
        ));
    }

    fn emit(&mut self, text: &str) {
        if let Err(e) = self.out.write_all(text.as_bytes()).and_then(|_| self.out.flush()) {
            warn!("Failed to write report output: {}", e);
        }
    }
}

/// Collapse control characters so one result stays on its own lines
fn flatten(text: &str) -> String {
    text.chars()
        .map(|c| if c.is_control() { ' ' } else { c })
        .collect()
}
