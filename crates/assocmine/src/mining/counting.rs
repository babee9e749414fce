use crate::itemset::{Item, Itemset};
use crate::transaction::Transaction;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// How candidate supports are counted. Both produce identical counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CountingStrategy {
    /// Test every candidate against every transaction.
    #[default]
    Scan,
    /// Index transactions by item and intersect the id lists.
    TidList,
}

impl CountingStrategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            CountingStrategy::Scan => "scan",
            CountingStrategy::TidList => "tid-list",
        }
    }
}

pub(crate) enum SupportCounter<'a> {
    Scan(&'a [Transaction]),
    TidList(TidIndex),
}

impl<'a> SupportCounter<'a> {
    pub(crate) fn new(strategy: CountingStrategy, transactions: &'a [Transaction]) -> Self {
        match strategy {
            CountingStrategy::Scan => SupportCounter::Scan(transactions),
            CountingStrategy::TidList => SupportCounter::TidList(TidIndex::build(transactions)),
        }
    }

    pub(crate) fn count(&self, candidates: Vec<Itemset>) -> Vec<(Itemset, usize)> {
        match self {
            SupportCounter::Scan(transactions) => {
                let mut counts = vec![0usize; candidates.len()];
                for transaction in transactions.iter() {
                    for (slot, candidate) in counts.iter_mut().zip(&candidates) {
                        if transaction.contains_all(candidate) {
                            *slot += 1;
                        }
                    }
                }
                candidates.into_iter().zip(counts).collect()
            }
            SupportCounter::TidList(index) => candidates
                .into_iter()
                .map(|candidate| {
                    let count = index.count(&candidate);
                    (candidate, count)
                })
                .collect(),
        }
    }
}

/// Transaction ids per item, each list ascending.
pub(crate) struct TidIndex {
    tids: HashMap<Item, Vec<usize>>,
}

impl TidIndex {
    pub(crate) fn build(transactions: &[Transaction]) -> Self {
        let mut tids: HashMap<Item, Vec<usize>> = HashMap::new();
        for (tid, transaction) in transactions.iter().enumerate() {
            for item in transaction.items() {
                tids.entry(item.clone()).or_default().push(tid);
            }
        }
        Self { tids }
    }

    pub(crate) fn count(&self, itemset: &Itemset) -> usize {
        let mut lists = Vec::with_capacity(itemset.len());
        for item in itemset {
            match self.tids.get(item) {
                Some(list) => lists.push(list.as_slice()),
                None => return 0,
            }
        }
        lists.sort_by_key(|list| list.len());

        let mut lists = lists.into_iter();
        let mut current: Vec<usize> = match lists.next() {
            Some(first) => first.to_vec(),
            None => return 0,
        };
        for list in lists {
            current = intersect(&current, list);
            if current.is_empty() {
                break;
            }
        }
        current.len()
    }
}

fn intersect(left: &[usize], right: &[usize]) -> Vec<usize> {
    let mut out = Vec::with_capacity(left.len().min(right.len()));
    let (mut i, mut j) = (0, 0);
    while i < left.len() && j < right.len() {
        match left[i].cmp(&right[j]) {
            std::cmp::Ordering::Less => i += 1,
            std::cmp::Ordering::Greater => j += 1,
            std::cmp::Ordering::Equal => {
                out.push(left[i]);
                i += 1;
                j += 1;
            }
        }
    }
    out
}
