//! Items and canonically ordered itemsets.
//!
//! An [`Itemset`] always keeps its members sorted and unique, so two sets
//! with the same members compare and hash equal no matter how they were
//! discovered. Everything downstream (candidate joins, pruning lookups,
//! rule derivation, report ordering) relies on that.

use crate::error::{AssocError, Result};
use std::fmt;
use std::sync::Arc;

/// Largest itemset [`Itemset::proper_subsets`] will enumerate splits for.
pub const MAX_SPLIT_LEN: usize = 63;

/// One attribute taking one value, e.g. `color=red`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Item(Arc<str>);

impl Item {
    pub fn new(token: impl AsRef<str>) -> Self {
        Self(Arc::from(token.as_ref()))
    }

    /// Encodes a column/value pair as a single token.
    pub fn from_pair(column: &str, value: &str, separator: &str) -> Self {
        Self::new(format!("{}{}{}", column, separator, value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Item {
    fn from(value: &str) -> Self {
        Item::new(value)
    }
}

/// A sorted, duplicate-free set of items.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Itemset(Vec<Item>);

impl Itemset {
    pub fn new<I: IntoIterator<Item = Item>>(items: I) -> Self {
        let mut items: Vec<Item> = items.into_iter().collect();
        items.sort();
        items.dedup();
        Self(items)
    }

    pub fn singleton(item: Item) -> Self {
        Self(vec![item])
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn items(&self) -> &[Item] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Item> {
        self.0.iter()
    }

    pub fn contains(&self, item: &Item) -> bool {
        self.0.binary_search(item).is_ok()
    }

    pub fn is_subset_of(&self, other: &Itemset) -> bool {
        if self.len() > other.len() {
            return false;
        }
        let mut theirs = other.0.iter();
        'outer: for mine in &self.0 {
            for candidate in theirs.by_ref() {
                match candidate.cmp(mine) {
                    std::cmp::Ordering::Less => continue,
                    std::cmp::Ordering::Equal => continue 'outer,
                    std::cmp::Ordering::Greater => return false,
                }
            }
            return false;
        }
        true
    }

    pub fn is_disjoint(&self, other: &Itemset) -> bool {
        !self.0.iter().any(|item| other.contains(item))
    }

    pub fn union(&self, other: &Itemset) -> Itemset {
        Itemset::new(self.0.iter().chain(other.0.iter()).cloned())
    }

    pub fn difference(&self, other: &Itemset) -> Itemset {
        Itemset(
            self.0
                .iter()
                .filter(|item| !other.contains(item))
                .cloned()
                .collect(),
        )
    }

    /// Every member except the last.
    pub fn prefix(&self) -> &[Item] {
        &self.0[..self.0.len().saturating_sub(1)]
    }

    pub fn last(&self) -> Option<&Item> {
        self.0.last()
    }

    /// Appends an item that sorts after every current member.
    pub(crate) fn extended(&self, item: &Item) -> Itemset {
        debug_assert!(self.last().map_or(true, |last| last < item));
        let mut items = Vec::with_capacity(self.0.len() + 1);
        items.extend(self.0.iter().cloned());
        items.push(item.clone());
        Itemset(items)
    }

    /// The subset with the member at `index` removed.
    pub fn without(&self, index: usize) -> Itemset {
        let mut items = self.0.clone();
        items.remove(index);
        Itemset(items)
    }

    /// All subsets one element smaller than this one.
    pub fn subsets_without_one(&self) -> impl Iterator<Item = Itemset> + '_ {
        (0..self.0.len()).map(move |index| self.without(index))
    }

    /// All non-empty subsets other than the set itself (`2^k - 2` of them).
    pub fn proper_subsets(&self) -> Result<Vec<Itemset>> {
        let k = self.0.len();
        if k < 2 {
            return Ok(Vec::new());
        }
        if k > MAX_SPLIT_LEN {
            return Err(AssocError::ItemsetTooLarge {
                len: k,
                max: MAX_SPLIT_LEN,
            });
        }

        let full: u64 = (1u64 << k) - 1;
        Ok((1..full)
            .map(|mask| {
                Itemset(
                    self.0
                        .iter()
                        .enumerate()
                        .filter(|(bit, _)| mask & (1u64 << bit) != 0)
                        .map(|(_, item)| item.clone())
                        .collect(),
                )
            })
            .collect())
    }

    pub fn join(&self, delimiter: &str) -> String {
        self.0
            .iter()
            .map(Item::as_str)
            .collect::<Vec<_>>()
            .join(delimiter)
    }
}

impl fmt::Display for Itemset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.join(","))
    }
}

impl FromIterator<Item> for Itemset {
    fn from_iter<I: IntoIterator<Item = Item>>(iter: I) -> Self {
        Itemset::new(iter)
    }
}

impl<'a> IntoIterator for &'a Itemset {
    type Item = &'a Item;
    type IntoIter = std::slice::Iter<'a, Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
