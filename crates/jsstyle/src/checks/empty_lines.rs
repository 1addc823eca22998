//! Blank-line density over the raw line array.
//!
//! Lines are reported as zero-based indices into the line array.

use jsstyle_core::{CheckId, Diagnostic, SourceModel};

use super::Checker;

const EXTRA_EMPTY_LINE: &str = "Extra empty line";
const TOO_MUCH_CODE: &str = "Too much code without an empty line";

/// Flags doubled blank lines and long runs of code without a blank line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptyLineChecker {
    max_code_lines: usize,
}

impl EmptyLineChecker {
    /// Creates a checker allowing at most `max_code_lines` consecutive code
    /// lines. Zero disables the density check.
    #[must_use]
    pub const fn new(max_code_lines: usize) -> Self {
        Self { max_code_lines }
    }

    /// Returns the configured window width.
    #[must_use]
    pub const fn max_code_lines(&self) -> usize {
        self.max_code_lines
    }

    fn doubled_blanks(blank: &[bool]) -> impl Iterator<Item = usize> + '_ {
        blank
            .windows(2)
            .enumerate()
            .filter(|(_, pair)| *pair == [true, true])
            .map(|(index, _)| index + 1)
    }

    /// Returns the start index of every window of `max_code_lines` lines
    /// that holds no blank line.
    fn dense_windows(&self, blank: &[bool]) -> Vec<usize> {
        let width = self.max_code_lines;
        if width == 0 || blank.len() <= width {
            return Vec::new();
        }

        let mut starts = Vec::new();
        let mut blanks = blank.iter().take(width).filter(|b| **b).count();
        if blanks == 0 {
            starts.push(0);
        }

        let slides = blank.len().saturating_sub(width + 1);
        let outgoing = blank.iter();
        let incoming = blank.iter().skip(width);
        for (start, (left, entered)) in (1..).zip(outgoing.zip(incoming).take(slides)) {
            blanks = blanks + usize::from(*entered) - usize::from(*left);
            if blanks == 0 {
                starts.push(start);
            }
        }
        starts
    }
}

impl Default for EmptyLineChecker {
    fn default() -> Self {
        Self::new(jsstyle_config::DEFAULT_MAX_CODE_LINES)
    }
}

impl Checker for EmptyLineChecker {
    fn id(&self) -> CheckId {
        CheckId::EmptyLines
    }

    fn check(&self, source: &SourceModel) -> Vec<Diagnostic> {
        let check = self.id();
        let blank: Vec<bool> = source
            .lines()
            .iter()
            .map(|line| line.trim().is_empty())
            .collect();
        let warning = |line: usize, message: &str| {
            Diagnostic::warning(check, message, source.filename(), line, check.line_base())
        };

        Self::doubled_blanks(&blank)
            .map(|line| warning(line, EXTRA_EMPTY_LINE))
            .chain(
                self.dense_windows(&blank)
                    .into_iter()
                    .map(|line| warning(line, TOO_MUCH_CODE)),
            )
            .collect()
    }
}
