//! The ordered rule table and its evaluation.

use std::fmt;

use tracing::debug;

use crate::domain::{SearchParams, TravelOption};

use super::{fallback, flight, overland, vehicle};

/// Maximum number of itineraries returned per search.
pub const MAX_OPTIONS: usize = 3;

/// One branch of the rule table: when `applies` holds, `build` contributes
/// exactly one itinerary.
#[derive(Clone, Copy)]
pub struct Rule {
    pub name: &'static str,
    pub applies: fn(&SearchParams) -> bool,
    pub build: fn(&SearchParams) -> TravelOption,
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rule({})", self.name)
    }
}

/// The built-in table, in evaluation order.
pub const DEFAULT_RULES: [Rule; 3] = [
    Rule {
        name: flight::ID,
        applies: flight::applies,
        build: flight::build,
    },
    Rule {
        name: overland::ID,
        applies: overland::applies,
        build: overland::build,
    },
    Rule {
        name: vehicle::ID,
        applies: vehicle::applies,
        build: vehicle::build,
    },
];

/// Evaluates a rule table against search parameters.
///
/// Every matching rule appends one option in table order. If none match, the
/// fixed fallback is returned. The result is capped at `max_options`.
#[derive(Debug, Clone)]
pub struct RuleEngine {
    rules: Vec<Rule>,
    max_options: usize,
}

impl RuleEngine {
    /// Create an engine over a custom table.
    pub fn with_rules(rules: Vec<Rule>) -> Self {
        Self {
            rules,
            max_options: MAX_OPTIONS,
        }
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Evaluate all rules and return the truncated result list.
    pub fn generate(&self, params: &SearchParams) -> Vec<TravelOption> {
        let mut options: Vec<TravelOption> = self
            .rules
            .iter()
            .filter(|rule| (rule.applies)(params))
            .map(|rule| {
                debug!(rule = rule.name, "rule matched");
                (rule.build)(params)
            })
            .collect();

        if options.is_empty() {
            debug!("no rule matched, using fallback");
            options.push(fallback::build(params));
        }

        if options.len() > self.max_options {
            debug!(
                matched = options.len(),
                kept = self.max_options,
                "truncating options"
            );
            options.truncate(self.max_options);
        }
        options
    }
}

impl Default for RuleEngine {
    fn default() -> Self {
        Self::with_rules(DEFAULT_RULES.to_vec())
    }
}

/// Run the built-in rule table.
pub fn generate_options(params: &SearchParams) -> Vec<TravelOption> {
    RuleEngine::default().generate(params)
}
