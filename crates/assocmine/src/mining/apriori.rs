//! Level-wise frequent itemset mining.
//!
//! Each level `k` joins the sorted frequent `(k-1)`-itemsets that share
//! their first `k-2` items, drops candidates with an infrequent
//! `(k-1)`-subset, counts what is left and keeps those meeting the
//! support threshold. Mining stops at the first empty level.

use crate::error::{AssocError, Result};
use crate::itemset::{Item, Itemset};
use crate::mining::counting::{CountingStrategy, SupportCounter};
use crate::mining::validate_min_support;
use crate::transaction::Transaction;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};

/// Frequent itemsets with their absolute counts.
///
/// Supports are derived on demand as `count / transaction_count`, so
/// comparisons between itemsets (ranking, redundancy checks) stay exact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequentItemsets {
    transaction_count: usize,
    counts: BTreeMap<Itemset, usize>,
}

impl FrequentItemsets {
    /// Wraps precomputed counts. Closure is not checked here; rule
    /// derivation reports a missing subset as [`AssocError::BrokenClosure`].
    pub fn from_counts(transaction_count: usize, counts: BTreeMap<Itemset, usize>) -> Result<Self> {
        if transaction_count == 0 {
            return Err(AssocError::EmptyInput);
        }
        Ok(Self {
            transaction_count,
            counts,
        })
    }

    pub fn transaction_count(&self) -> usize {
        self.transaction_count
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn contains(&self, itemset: &Itemset) -> bool {
        self.counts.contains_key(itemset)
    }

    pub fn count(&self, itemset: &Itemset) -> Option<usize> {
        self.counts.get(itemset).copied()
    }

    pub fn support(&self, itemset: &Itemset) -> Option<f64> {
        self.count(itemset).map(|count| self.fraction(count))
    }

    pub(crate) fn fraction(&self, count: usize) -> f64 {
        count as f64 / self.transaction_count as f64
    }

    /// Itemsets and counts in canonical itemset order.
    pub fn counts(&self) -> impl Iterator<Item = (&Itemset, usize)> {
        self.counts.iter().map(|(itemset, count)| (itemset, *count))
    }

    /// Itemsets and supports in canonical itemset order.
    pub fn iter(&self) -> impl Iterator<Item = (&Itemset, f64)> {
        self.counts
            .iter()
            .map(move |(itemset, count)| (itemset, self.fraction(*count)))
    }

    pub fn level(&self, k: usize) -> impl Iterator<Item = &Itemset> {
        self.counts.keys().filter(move |itemset| itemset.len() == k)
    }

    pub fn max_len(&self) -> usize {
        self.counts.keys().map(Itemset::len).max().unwrap_or(0)
    }

    /// Descending support, ties broken by canonical itemset order.
    pub fn ranked(&self) -> Vec<(&Itemset, f64)> {
        let mut ranked: Vec<(&Itemset, usize)> = self.counts().collect();
        ranked.sort_by(|(left, lc), (right, rc)| rc.cmp(lc).then_with(|| left.cmp(right)));
        ranked
            .into_iter()
            .map(|(itemset, count)| (itemset, self.fraction(count)))
            .collect()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MinerOptions {
    /// Largest itemset size to mine; `None` runs until a level comes up empty.
    pub max_len: Option<usize>,
    pub counting: CountingStrategy,
}

#[derive(Debug, Clone, Default)]
pub struct Apriori {
    options: MinerOptions,
}

/// Mines with default options.
pub fn mine(transactions: &[Transaction], min_support: f64) -> Result<FrequentItemsets> {
    Apriori::default().mine(transactions, min_support)
}

impl Apriori {
    pub fn new(options: MinerOptions) -> Self {
        Self { options }
    }

    pub fn mine(&self, transactions: &[Transaction], min_support: f64) -> Result<FrequentItemsets> {
        validate_min_support(min_support)?;
        if transactions.is_empty() {
            return Err(AssocError::EmptyInput);
        }

        let total = transactions.len();
        let mut counts: BTreeMap<Itemset, usize> = BTreeMap::new();

        let mut level = frequent_items(transactions, min_support);
        log::debug!("level 1: {} frequent items", level.len());

        let counter = SupportCounter::new(self.options.counting, transactions);
        let mut k = 1;

        while !level.is_empty() {
            let mut previous: Vec<Itemset> = Vec::with_capacity(level.len());
            for (itemset, count) in level {
                previous.push(itemset.clone());
                counts.insert(itemset, count);
            }

            if self.options.max_len.is_some_and(|max| k >= max) {
                break;
            }
            k += 1;

            previous.sort_unstable();
            let candidates = generate_candidates(&previous);
            let generated = candidates.len();
            let survivors = prune_candidates(candidates, &previous);
            let pruned = generated - survivors.len();

            level = counter
                .count(survivors)
                .into_iter()
                .filter(|(_, count)| is_frequent(*count, total, min_support))
                .collect();

            log::debug!(
                "level {}: {} candidates, {} pruned, {} frequent",
                k,
                generated,
                pruned,
                level.len()
            );
        }

        log::info!(
            "Mined {} frequent itemsets from {} transactions (min_sup={})",
            counts.len(),
            total,
            min_support
        );

        Ok(FrequentItemsets {
            transaction_count: total,
            counts,
        })
    }
}

fn is_frequent(count: usize, total: usize, min_support: f64) -> bool {
    count as f64 / total as f64 >= min_support
}

fn frequent_items(transactions: &[Transaction], min_support: f64) -> Vec<(Itemset, usize)> {
    let total = transactions.len();
    let mut item_counts: HashMap<&Item, usize> = HashMap::new();
    for transaction in transactions {
        for item in transaction.items() {
            *item_counts.entry(item).or_insert(0) += 1;
        }
    }

    let mut frequent: Vec<(Itemset, usize)> = item_counts
        .into_iter()
        .filter(|(_, count)| is_frequent(*count, total, min_support))
        .map(|(item, count)| (Itemset::singleton(item.clone()), count))
        .collect();
    frequent.sort_unstable_by(|(left, _), (right, _)| left.cmp(right));
    frequent
}

/// Joins pairs of sorted `(k-1)`-itemsets that differ only in their last item.
///
/// `previous` must be sorted: itemsets sharing a prefix are then contiguous,
/// which is what lets the inner loop stop at the first mismatch.
pub(crate) fn generate_candidates(previous: &[Itemset]) -> Vec<Itemset> {
    debug_assert!(previous.windows(2).all(|pair| pair[0] < pair[1]));

    let mut candidates = BTreeSet::new();
    for (i, left) in previous.iter().enumerate() {
        for right in &previous[i + 1..] {
            if left.prefix() != right.prefix() {
                break;
            }
            if let Some(last) = right.last() {
                candidates.insert(left.extended(last));
            }
        }
    }
    candidates.into_iter().collect()
}

/// Keeps candidates whose every `(k-1)`-subset is frequent.
pub(crate) fn prune_candidates(candidates: Vec<Itemset>, previous: &[Itemset]) -> Vec<Itemset> {
    let known: HashSet<&Itemset> = previous.iter().collect();
    candidates
        .into_iter()
        .filter(|candidate| candidate.subsets_without_one().all(|subset| known.contains(&subset)))
        .collect()
}
