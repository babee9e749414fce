use assocmine_lib::util::{format_percent, format_timestamp};
use assocmine_lib::Analysis;
use comfy_table::{presets::UTF8_FULL, Cell, Color, Table};
use console::style;
use std::time::Duration;

pub fn print_summary(analysis: &Analysis, rows: usize, elapsed: Duration) {
    println!("\n{}", style("Association Mining Summary").bold().cyan());
    println!("{}\n", style("═".repeat(80)).dim());

    println!("  Transactions: {}", style(analysis.transaction_count()).cyan());
    println!(
        "  Min Support: {}  Min Confidence: {}",
        format_percent(analysis.params.min_support, 1),
        format_percent(analysis.params.min_confidence(), 1)
    );
    println!("  Frequent Itemsets: {}", style(analysis.itemsets.len()).yellow());
    println!("  Rules: {}", style(analysis.rules.len()).yellow());
    println!("  Elapsed: {:.2?}", elapsed);
    println!("  Finished: {}\n", format_timestamp(&chrono::Utc::now()));

    show_itemsets(analysis, rows);
    show_rules(analysis, rows);
}

fn show_itemsets(analysis: &Analysis, rows: usize) {
    println!("{}", style("Top Itemsets").bold());
    println!("{}", style("─".repeat(80)).dim());

    if analysis.itemsets.is_empty() {
        println!("{}\n", style("No frequent itemsets").yellow());
        return;
    }

    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec![
        Cell::new("Itemset").fg(Color::Cyan),
        Cell::new("Size").fg(Color::Cyan),
        Cell::new("Support").fg(Color::Cyan),
    ]);

    for (itemset, support) in analysis.ranked_itemsets().into_iter().take(rows) {
        table.add_row(vec![
            Cell::new(itemset.join(", ")),
            Cell::new(itemset.len()),
            Cell::new(format_percent(support, 2)),
        ]);
    }

    println!("{}\n", table);
}

fn show_rules(analysis: &Analysis, rows: usize) {
    println!("{}", style("Top Rules").bold());
    println!("{}", style("─".repeat(80)).dim());

    if analysis.rules.is_empty() {
        println!("{}\n", style("No rules met the confidence threshold").yellow());
        return;
    }

    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec![
        Cell::new("Antecedent").fg(Color::Cyan),
        Cell::new("Consequent").fg(Color::Cyan),
        Cell::new("Confidence").fg(Color::Cyan),
        Cell::new("Support").fg(Color::Cyan),
    ]);

    for rule in analysis.rules.iter().take(rows) {
        table.add_row(vec![
            Cell::new(rule.antecedent.join(", ")),
            Cell::new(rule.consequent.join(", ")),
            Cell::new(format_percent(rule.confidence, 1)),
            Cell::new(format_percent(rule.support, 2)),
        ]);
    }

    println!("{}\n", table);
}
