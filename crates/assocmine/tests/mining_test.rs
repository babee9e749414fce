mod common;

use assocmine_lib::{
    derive, mine, Analysis, Apriori, AssocError, CountingStrategy, MinerOptions, MiningParams,
};
use common::*;

#[test]
fn test_reference_itemsets() {
    let frequent = mine(&reference_transactions(), 0.5).unwrap();

    assert_eq!(frequent.support(&itemset(&["A"])), Some(0.75));
    assert_eq!(frequent.support(&itemset(&["B"])), Some(0.75));
    assert_eq!(frequent.support(&itemset(&["C"])), Some(0.5));
    assert_eq!(frequent.support(&itemset(&["A", "B"])), Some(0.5));
    assert_eq!(frequent.len(), 4);
    assert_eq!(frequent.level(3).count(), 0);
}

#[test]
fn test_reference_rules_by_confidence() {
    let frequent = mine(&reference_transactions(), 0.5).unwrap();

    let strict = derive(&frequent, 0.8).unwrap();
    assert!(strict.iter().all(|rule| rule.antecedent != itemset(&["A"])));

    let relaxed = derive(&frequent, 0.6).unwrap();
    let rule = relaxed
        .iter()
        .find(|rule| rule.antecedent == itemset(&["A"]) && rule.consequent == itemset(&["B"]))
        .expect("A => B should be reported");
    assert!((rule.confidence - 0.5 / 0.75).abs() < 1e-9);
}

#[test]
fn test_support_above_one_is_empty_not_error() {
    let analysis = Analysis::run(&reference_transactions(), &MiningParams::new(1.1, 0.5)).unwrap();
    assert!(analysis.itemsets.is_empty());
    assert!(analysis.rules.is_empty());
}

#[test]
fn test_zero_transactions_rejected() {
    let result = mine(&[], 0.5);
    assert!(matches!(result, Err(AssocError::EmptyInput)));

    let result = Analysis::run(&[], &MiningParams::new(0.5, 0.5));
    assert!(matches!(result, Err(AssocError::EmptyInput)));
}

#[test]
fn test_empty_transactions_count_toward_total() {
    let rows = transactions(&[&["A"], &["A"], &[], &[]]);
    let frequent = mine(&rows, 0.5).unwrap();
    assert_eq!(frequent.transaction_count(), 4);
    assert_eq!(frequent.support(&itemset(&["A"])), Some(0.5));
}

#[test]
fn test_full_support_at_one() {
    let rows = transactions(&[&["A", "B"], &["A", "B", "C"]]);
    let frequent = mine(&rows, 1.0).unwrap();
    assert_eq!(frequent.len(), 3);
    assert!(frequent.contains(&itemset(&["A", "B"])));
    assert!(!frequent.contains(&itemset(&["C"])));
}

#[test]
fn test_four_item_levels() {
    let rows = transactions(&[
        &["a", "b", "c", "d"],
        &["a", "b", "c", "d"],
        &["a", "b", "c"],
        &["b", "c", "d"],
        &["e"],
    ]);

    for counting in [CountingStrategy::Scan, CountingStrategy::TidList] {
        let frequent = Apriori::new(MinerOptions {
            max_len: None,
            counting,
        })
        .mine(&rows, 0.4)
        .unwrap();

        assert_eq!(frequent.count(&itemset(&["a", "b", "c", "d"])), Some(2));
        assert_eq!(frequent.count(&itemset(&["b", "c"])), Some(4));
        assert_eq!(frequent.max_len(), 4);
        assert!(!frequent.contains(&itemset(&["e"])));
        // 4 singles, 6 pairs, 4 triples, 1 quad
        assert_eq!(frequent.len(), 15);
    }
}
