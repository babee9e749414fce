use crate::analysis::Analysis;
use crate::error::Result;
use serde_json::{json, Value};

pub fn render_json(analysis: &Analysis) -> Result<String> {
    Ok(serde_json::to_string_pretty(&to_value(analysis))?)
}

pub fn to_value(analysis: &Analysis) -> Value {
    let itemsets: Vec<Value> = analysis
        .ranked_itemsets()
        .into_iter()
        .map(|(itemset, support)| {
            json!({
                "items": itemset.iter().map(|item| item.as_str()).collect::<Vec<_>>(),
                "support": support,
            })
        })
        .collect();

    let rules: Vec<Value> = analysis
        .rules
        .iter()
        .map(|rule| {
            json!({
                "antecedent": rule.antecedent.iter().map(|item| item.as_str()).collect::<Vec<_>>(),
                "consequent": rule.consequent.iter().map(|item| item.as_str()).collect::<Vec<_>>(),
                "confidence": rule.confidence,
                "support": rule.support,
            })
        })
        .collect();

    json!({
        "min_support": analysis.params.min_support,
        "min_confidence": analysis.params.min_confidence(),
        "transactions": analysis.transaction_count(),
        "itemsets": itemsets,
        "rules": rules,
        "generated_at": chrono::Utc::now().to_rfc3339(),
    })
}
