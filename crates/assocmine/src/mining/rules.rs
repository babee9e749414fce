//! Association rule derivation from mined itemsets.
//!
//! Every frequent itemset of size two or more is split into each
//! non-empty antecedent and its complement. A split becomes a rule when
//! `support(itemset) / support(antecedent)` meets the confidence threshold.

use crate::error::{AssocError, Result};
use crate::itemset::Itemset;
use crate::mining::apriori::FrequentItemsets;
use crate::mining::validate_min_confidence;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub struct Rule {
    pub antecedent: Itemset,
    pub consequent: Itemset,
    pub confidence: f64,
    /// Support of `antecedent ∪ consequent`.
    pub support: f64,
}

impl Rule {
    pub fn itemset(&self) -> Itemset {
        self.antecedent.union(&self.consequent)
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} => {}", self.antecedent, self.consequent)
    }
}

/// Which zero-information rules to drop.
///
/// A rule whose antecedent is exactly as frequent as the whole itemset
/// always holds (confidence 1). `Either` additionally drops rules whose
/// consequent is exactly as frequent as the whole itemset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Redundancy {
    #[default]
    Keep,
    Antecedent,
    Either,
}

impl Redundancy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Redundancy::Keep => "keep",
            Redundancy::Antecedent => "antecedent",
            Redundancy::Either => "either",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RuleOptions {
    pub min_confidence: f64,
    pub redundancy: Redundancy,
    pub max_consequent_len: Option<usize>,
}

impl RuleOptions {
    pub fn new(min_confidence: f64) -> Self {
        Self {
            min_confidence,
            redundancy: Redundancy::Keep,
            max_consequent_len: None,
        }
    }
}

/// Derives rules with no filtering beyond the confidence threshold.
pub fn derive(frequent: &FrequentItemsets, min_confidence: f64) -> Result<Vec<Rule>> {
    RuleDeriver::new(RuleOptions::new(min_confidence)).derive(frequent)
}

pub struct RuleDeriver {
    options: RuleOptions,
}

impl RuleDeriver {
    pub fn new(options: RuleOptions) -> Self {
        Self { options }
    }

    /// Returns rules sorted by [`sort_rules`].
    pub fn derive(&self, frequent: &FrequentItemsets) -> Result<Vec<Rule>> {
        validate_min_confidence(self.options.min_confidence)?;

        let mut rules = Vec::new();
        for (itemset, full_count) in frequent.counts() {
            if itemset.len() < 2 {
                continue;
            }

            for antecedent in itemset.proper_subsets()? {
                let consequent = itemset.difference(&antecedent);
                if let Some(max) = self.options.max_consequent_len {
                    if consequent.len() > max {
                        continue;
                    }
                }

                let antecedent_count = lookup(frequent, &antecedent)?;
                if self.is_redundant(frequent, &consequent, antecedent_count, full_count)? {
                    continue;
                }

                let confidence = full_count as f64 / antecedent_count as f64;
                if confidence >= self.options.min_confidence {
                    rules.push(Rule {
                        antecedent,
                        consequent,
                        confidence,
                        support: frequent.fraction(full_count),
                    });
                }
            }
        }

        sort_rules(&mut rules);
        log::info!(
            "Derived {} rules (min_conf={}, redundancy={})",
            rules.len(),
            self.options.min_confidence,
            self.options.redundancy.as_str()
        );
        Ok(rules)
    }

    fn is_redundant(
        &self,
        frequent: &FrequentItemsets,
        consequent: &Itemset,
        antecedent_count: usize,
        full_count: usize,
    ) -> Result<bool> {
        match self.options.redundancy {
            Redundancy::Keep => Ok(false),
            Redundancy::Antecedent => Ok(antecedent_count == full_count),
            Redundancy::Either => {
                if antecedent_count == full_count {
                    return Ok(true);
                }
                Ok(lookup(frequent, consequent)? == full_count)
            }
        }
    }
}

fn lookup(frequent: &FrequentItemsets, subset: &Itemset) -> Result<usize> {
    frequent
        .count(subset)
        .ok_or_else(|| AssocError::BrokenClosure(subset.to_string()))
}

/// Descending confidence, then antecedent, then consequent.
pub fn sort_rules(rules: &mut [Rule]) {
    rules.sort_by(|left, right| {
        right
            .confidence
            .total_cmp(&left.confidence)
            .then_with(|| left.antecedent.cmp(&right.antecedent))
            .then_with(|| left.consequent.cmp(&right.consequent))
    });
}
