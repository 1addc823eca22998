//! Whitespace around configured operators.
//!
//! Rules are matched against whole operator tokens, so `==` never satisfies
//! a rule written for `=` and operators inside strings, templates, regular
//! expressions and comments are never seen. A token produces at most one
//! diagnostic: the first rule that fires, in table order.

use std::cmp::Reverse;

use jsstyle_config::SpacesStyle;
use jsstyle_core::{CheckId, Diagnostic, SourceModel, Token};

use super::Checker;

/// Where a spacing rule looks and what it expects there.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpacingSide {
    /// A space is required before the operator.
    Before,
    /// No space is allowed before the operator.
    NoBefore,
    /// A space is required after the operator.
    After,
    /// No space is allowed after the operator.
    NoAfter,
}

impl SpacingSide {
    /// Every side, in rule table order.
    pub const ORDER: [Self; 4] = [Self::Before, Self::NoBefore, Self::After, Self::NoAfter];

    const fn looks_before(self) -> bool {
        matches!(self, Self::Before | Self::NoBefore)
    }

    const fn wants_space(self) -> bool {
        matches!(self, Self::Before | Self::After)
    }

    fn message(self, operator: &str) -> String {
        match self {
            Self::Before => format!("Add space before {operator} operator"),
            Self::NoBefore => format!("Remove space before {operator}"),
            Self::After => format!("Add space after {operator} operator"),
            Self::NoAfter => format!("Remove space after {operator}"),
        }
    }
}

/// A single operator expectation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpacingRule {
    /// Operator text as configured.
    pub operator: String,
    /// What the rule expects.
    pub side: SpacingSide,
}

impl SpacingRule {
    /// Returns whether the rule is violated given the neighbouring byte.
    ///
    /// A missing neighbour (start or end of line) never violates.
    fn violated_by(&self, neighbour: Option<u8>) -> bool {
        neighbour.is_some_and(|byte| (byte == b' ') != self.side.wants_space())
    }
}

/// Flags operators with missing or unwanted surrounding spaces.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SpacingChecker {
    rules: Vec<SpacingRule>,
}

impl SpacingChecker {
    /// Builds the rule table: sides in [`SpacingSide::ORDER`], operators
    /// longest first within each side.
    #[must_use]
    pub fn new(style: &SpacesStyle) -> Self {
        let mut rules = Vec::new();
        for side in SpacingSide::ORDER {
            let operators = match side {
                SpacingSide::Before => &style.before,
                SpacingSide::NoBefore => &style.no_before,
                SpacingSide::After => &style.after,
                SpacingSide::NoAfter => &style.no_after,
            };
            let mut ordered: Vec<&String> = operators.iter().collect();
            ordered.sort_by_key(|operator| Reverse(operator.len()));
            rules.extend(ordered.into_iter().map(|operator| SpacingRule {
                operator: operator.clone(),
                side,
            }));
        }
        Self { rules }
    }

    /// Returns the rule table in evaluation order.
    #[must_use]
    pub fn rules(&self) -> &[SpacingRule] {
        &self.rules
    }

    fn first_violation(&self, source: &SourceModel, token: &Token) -> Option<&SpacingRule> {
        let start = token.span.start;
        let end = token.span.end;
        let before = start
            .column
            .checked_sub(1)
            .and_then(|column| source.byte_at(start.line, column));
        let after = source.byte_at(end.line, end.column);

        self.rules
            .iter()
            .filter(|rule| rule.operator == token.value)
            .find(|rule| {
                let neighbour = if rule.side.looks_before() {
                    before
                } else {
                    after
                };
                rule.violated_by(neighbour)
            })
    }
}

impl Checker for SpacingChecker {
    fn id(&self) -> CheckId {
        CheckId::SpacesStyle
    }

    fn check(&self, source: &SourceModel) -> Vec<Diagnostic> {
        if self.rules.is_empty() {
            return Vec::new();
        }
        let check = self.id();
        source
            .tokens()
            .iter()
            .filter(|token| token.kind.is_operator_like())
            .filter_map(|token| {
                let rule = self.first_violation(source, token)?;
                Some(Diagnostic::warning(
                    check,
                    rule.side.message(&rule.operator),
                    source.filename(),
                    token.span.start.line_index(),
                    check.line_base(),
                ))
            })
            .collect()
    }
}
