use assocmine_lib::report::render_text;
use assocmine_lib::{Analysis, MiningParams, Record, Redundancy, TransactionBuilder};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Assocmine Example\n");

    println!("=== Example 1: Build Transactions ===");
    let rows = [
        [Some("bread"), Some("milk"), None],
        [Some("bread"), Some("milk"), Some("eggs")],
        [Some("bread"), None, Some("eggs")],
        [None, Some("milk"), Some("eggs")],
        [Some("bread"), Some("milk"), Some("eggs")],
    ];
    let records: Vec<Record> = rows
        .iter()
        .map(|row| {
            Record::new()
                .with("bakery", row[0])
                .with("dairy", row[1])
                .with("poultry", row[2])
        })
        .collect();

    let transactions = TransactionBuilder::new().build_all(&records);
    for (index, transaction) in transactions.iter().enumerate() {
        let items: Vec<_> = transaction.items().map(|item| item.as_str()).collect();
        println!("  #{}: {}", index, items.join(", "));
    }
    println!();

    println!("=== Example 2: Mine and Derive ===");
    let mut params = MiningParams::new(0.4, 0.7);
    let analysis = Analysis::run(&transactions, &params)?;
    println!("{}", render_text(&analysis));

    println!("=== Example 3: Drop Certain Rules ===");
    params.rules.redundancy = Redundancy::Antecedent;
    let filtered = Analysis::run(&transactions, &params)?;
    println!(
        "  {} rules before, {} after dropping confidence-1 rules",
        analysis.rules.len(),
        filtered.rules.len()
    );

    Ok(())
}
