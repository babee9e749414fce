#![allow(dead_code)]

use assocmine_lib::{Item, Itemset, Transaction};
use std::path::PathBuf;
use tempfile::TempDir;

pub fn item(token: &str) -> Item {
    Item::from(token)
}

pub fn itemset(items: &[&str]) -> Itemset {
    items.iter().map(|s| item(s)).collect()
}

pub fn transactions(rows: &[&[&str]]) -> Vec<Transaction> {
    rows.iter()
        .map(|row| row.iter().map(|s| item(s)).collect())
        .collect()
}

/// Four baskets over A, B, C used throughout the scenario tests.
pub fn reference_transactions() -> Vec<Transaction> {
    transactions(&[&["A", "B"], &["A", "B"], &["A", "C"], &["B", "C"]])
}

pub struct TestFixture {
    pub temp_dir: TempDir,
}

impl TestFixture {
    pub fn new() -> Self {
        Self {
            temp_dir: tempfile::tempdir().unwrap(),
        }
    }

    pub fn write(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.temp_dir.path().join(name);
        std::fs::write(&path, contents).unwrap();
        path
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.temp_dir.path().join(name)
    }
}

pub const LICENSES_CSV: &str = "\
Business Category,License Type,License Status,borough
Restaurant,Premises,Active,Brooklyn
Restaurant,Premises,Active,Queens
Restaurant,Premises,Inactive,Brooklyn
Laundry,Individual,Active,
Laundry,Individual,Active,Brooklyn
Restaurant,Premises,Active,NA
";
