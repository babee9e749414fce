mod common;

use assocmine_lib::{
    render_report, write_report, Analysis, AssocError, Config, ReportFormat,
};
use common::*;

fn analyse(config: &Config, csv: &str, min_sup: f64, min_conf: f64) -> Analysis {
    let fixture = TestFixture::new();
    let path = fixture.write("data.csv", csv);
    let records = config.loader(&path).unwrap().load().unwrap();
    let transactions = config.transaction_builder().build_all(&records);
    Analysis::run(&transactions, &config.mining_params(min_sup, min_conf)).unwrap()
}

#[test]
fn test_csv_to_rules() {
    let analysis = analyse(&Config::default(), LICENSES_CSV, 0.5, 0.9);

    assert_eq!(analysis.transaction_count(), 6);
    assert_eq!(
        analysis.itemsets.support(&itemset(&["Business Category=Restaurant"])),
        Some(4.0 / 6.0)
    );
    assert_eq!(analysis.itemsets.support(&itemset(&["borough=Brooklyn"])), Some(0.5));

    let rule = analysis
        .rules
        .iter()
        .find(|rule| {
            rule.antecedent == itemset(&["Business Category=Restaurant"])
                && rule.consequent == itemset(&["License Type=Premises"])
        })
        .expect("restaurant => premises");
    assert_eq!(rule.confidence, 1.0);
}

#[test]
fn test_missing_markers_produce_no_items() {
    let analysis = analyse(&Config::default(), LICENSES_CSV, 0.1, 0.5);
    assert!(analysis.itemsets.iter().all(|(itemset, _)| {
        itemset
            .iter()
            .all(|item| item.as_str() != "borough=" && item.as_str() != "borough=NA")
    }));
}

#[test]
fn test_column_selection_and_single_consequent() {
    let config = Config::from_toml(
        r#"
        [dataset]
        exclude_columns = ["borough"]

        [rules]
        max_consequent_len = 1
        redundancy = "antecedent"
        "#,
    )
    .unwrap();

    let analysis = analyse(&config, LICENSES_CSV, 0.3, 0.0);
    assert!(analysis
        .itemsets
        .iter()
        .all(|(itemset, _)| itemset.iter().all(|item| !item.as_str().starts_with("borough"))));
    assert!(analysis.rules.iter().all(|rule| rule.consequent.len() == 1));
    assert!(analysis.rules.iter().all(|rule| rule.confidence < 1.0));
}

#[test]
fn test_text_report_written() {
    let fixture = TestFixture::new();
    let analysis = Analysis::run(
        &reference_transactions(),
        &Config::default().mining_params(0.5, 0.6),
    )
    .unwrap();

    let output = fixture.path("reports/output.txt");
    write_report(&analysis, ReportFormat::Text, &output).unwrap();

    let written = std::fs::read_to_string(&output).unwrap();
    assert_eq!(written, render_report(&analysis, ReportFormat::Text).unwrap());
    assert!(written.starts_with("==Frequent itemsets (min_sup=50.0%)\n[A], 75.0000%\n"));
    assert!(written.contains("[A] => [B] (Conf: 66.7%, Supp: 50.0000%)"));
}

#[test]
fn test_json_report_written() {
    let fixture = TestFixture::new();
    let analysis = Analysis::run(
        &reference_transactions(),
        &Config::default().mining_params(0.5, 0.6),
    )
    .unwrap();

    let output = fixture.path("output.json");
    write_report(&analysis, ReportFormat::Json, &output).unwrap();

    let parsed: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&output).unwrap()).unwrap();
    assert_eq!(parsed["rules"].as_array().unwrap().len(), 2);
}

#[test]
fn test_header_only_csv_is_empty_input() {
    let fixture = TestFixture::new();
    let path = fixture.write("empty.csv", "a,b\n");
    let config = Config::default();
    let records = config.loader(&path).unwrap().load().unwrap();
    let transactions = config.transaction_builder().build_all(&records);

    let result = Analysis::run(&transactions, &config.mining_params(0.5, 0.5));
    assert!(matches!(result, Err(AssocError::EmptyInput)));
}

#[test]
fn test_semicolon_delimited_dataset() {
    let config = Config::from_toml("[dataset]\ndelimiter = \";\"").unwrap();
    let analysis = analyse(&config, "x;y\n1;2\n1;3\n", 0.5, 0.5);
    assert_eq!(analysis.itemsets.support(&itemset(&["x=1"])), Some(1.0));
}

#[test]
fn test_column_name_with_separator_is_rejected() {
    let fixture = TestFixture::new();
    let path = fixture.write("data.csv", "k=v,k\nx,v=x\n");

    let result = Config::default().loader(&path).unwrap().load();
    assert!(matches!(
        result,
        Err(AssocError::AmbiguousColumn { ref column, .. }) if column == "k=v"
    ));
}

#[test]
fn test_spreadsheet_na_markers_produce_no_items() {
    let csv = "item,note\nbread,n/a\nbread,<NA>\nmilk,#N/A\n";
    let analysis = analyse(&Config::default(), csv, 0.1, 0.5);

    let items: Vec<_> = analysis
        .itemsets
        .level(1)
        .map(|itemset| itemset.to_string())
        .collect();
    assert_eq!(items, vec!["[item=bread]", "[item=milk]"]);
}
