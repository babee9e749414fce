use crate::itemset::{Item, Itemset};
use std::collections::{BTreeSet, HashSet};

/// Tokens read as "no value" by default. Same set pandas' `read_csv` treats as NA.
pub const DEFAULT_MISSING_VALUES: &[&str] = &[
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

pub const DEFAULT_ITEM_SEPARATOR: &str = "=";

/// One input row: column names paired with possibly-missing values, in column order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Record {
    fields: Vec<(String, Option<String>)>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, column: impl Into<String>, value: Option<String>) {
        self.fields.push((column.into(), value));
    }

    pub fn with(mut self, column: impl Into<String>, value: Option<&str>) -> Self {
        self.push(column, value.map(str::to_string));
        self
    }

    pub fn fields(&self) -> impl Iterator<Item = (&str, Option<&str>)> {
        self.fields
            .iter()
            .map(|(column, value)| (column.as_str(), value.as_deref()))
    }
}

/// The distinct items observed in one record. Read-only once built.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Transaction {
    items: BTreeSet<Item>,
}

impl Transaction {
    pub fn new<I: IntoIterator<Item = Item>>(items: I) -> Self {
        Self {
            items: items.into_iter().collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn contains(&self, item: &Item) -> bool {
        self.items.contains(item)
    }

    pub fn contains_all(&self, itemset: &Itemset) -> bool {
        itemset.len() <= self.items.len() && itemset.iter().all(|item| self.items.contains(item))
    }

    pub fn items(&self) -> impl Iterator<Item = &Item> {
        self.items.iter()
    }
}

impl FromIterator<Item> for Transaction {
    fn from_iter<I: IntoIterator<Item = Item>>(iter: I) -> Self {
        Transaction::new(iter)
    }
}

/// Turns records into transactions, one `column<sep>value` item per present value.
#[derive(Debug, Clone)]
pub struct TransactionBuilder {
    separator: String,
    missing_values: HashSet<String>,
    trim_values: bool,
}

impl Default for TransactionBuilder {
    fn default() -> Self {
        Self {
            separator: DEFAULT_ITEM_SEPARATOR.to_string(),
            missing_values: DEFAULT_MISSING_VALUES.iter().map(|s| s.to_string()).collect(),
            trim_values: false,
        }
    }
}

impl TransactionBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    /// Replaces the set of tokens treated as missing. The empty string is always missing.
    pub fn with_missing_values<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.missing_values = values.into_iter().map(Into::into).collect();
        self.missing_values.insert(String::new());
        self
    }

    pub fn trim_values(mut self, trim: bool) -> Self {
        self.trim_values = trim;
        self
    }

    pub fn is_missing(&self, value: &str) -> bool {
        self.missing_values.contains(value)
    }

    pub fn build(&self, record: &Record) -> Transaction {
        record
            .fields()
            .filter_map(|(column, value)| {
                let value = value?;
                let value = if self.trim_values { value.trim() } else { value };
                if self.is_missing(value) {
                    None
                } else {
                    Some(Item::from_pair(column, value, &self.separator))
                }
            })
            .collect()
    }

    pub fn build_all(&self, records: &[Record]) -> Vec<Transaction> {
        records.iter().map(|record| self.build(record)).collect()
    }
}
