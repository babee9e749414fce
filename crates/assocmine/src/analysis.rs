use crate::error::{AssocError, Result};
use crate::itemset::Itemset;
use crate::mining::{
    validate_min_confidence, validate_min_support, Apriori, FrequentItemsets, MinerOptions, Rule,
    RuleDeriver, RuleOptions,
};
use crate::transaction::Transaction;

#[derive(Debug, Clone, PartialEq)]
pub struct MiningParams {
    pub min_support: f64,
    pub miner: MinerOptions,
    pub rules: RuleOptions,
}

impl MiningParams {
    pub fn new(min_support: f64, min_confidence: f64) -> Self {
        Self {
            min_support,
            miner: MinerOptions::default(),
            rules: RuleOptions::new(min_confidence),
        }
    }

    pub fn min_confidence(&self) -> f64 {
        self.rules.min_confidence
    }

    /// Checks both thresholds so nothing is mined when either is malformed.
    pub fn validate(&self) -> Result<()> {
        validate_min_support(self.min_support)?;
        validate_min_confidence(self.rules.min_confidence)?;
        if self.miner.max_len == Some(0) {
            return Err(AssocError::Config("max_len must be at least 1".to_string()));
        }
        if self.rules.max_consequent_len == Some(0) {
            return Err(AssocError::Config(
                "max_consequent_len must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// Frequent itemsets and the rules derived from them, for one dataset.
#[derive(Debug, Clone)]
pub struct Analysis {
    pub params: MiningParams,
    pub itemsets: FrequentItemsets,
    /// Sorted by descending confidence, then antecedent, then consequent.
    pub rules: Vec<Rule>,
}

impl Analysis {
    pub fn run(transactions: &[Transaction], params: &MiningParams) -> Result<Self> {
        params.validate()?;
        if transactions.is_empty() {
            return Err(AssocError::EmptyInput);
        }

        let itemsets = Apriori::new(params.miner.clone()).mine(transactions, params.min_support)?;
        let rules = RuleDeriver::new(params.rules.clone()).derive(&itemsets)?;

        Ok(Self {
            params: params.clone(),
            itemsets,
            rules,
        })
    }

    pub fn transaction_count(&self) -> usize {
        self.itemsets.transaction_count()
    }

    /// Descending support, ties broken by canonical itemset order.
    pub fn ranked_itemsets(&self) -> Vec<(&Itemset, f64)> {
        self.itemsets.ranked()
    }
}
