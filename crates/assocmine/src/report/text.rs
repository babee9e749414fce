use crate::analysis::Analysis;
use crate::util::format_percent;

pub const ITEM_DELIMITER: &str = ",";

pub fn render_text(analysis: &Analysis) -> String {
    let mut out = format!(
        "==Frequent itemsets (min_sup={})\n",
        format_percent(analysis.params.min_support, 1)
    );
    for (itemset, support) in analysis.ranked_itemsets() {
        out.push_str(&format!(
            "[{}], {}\n",
            itemset.join(ITEM_DELIMITER),
            format_percent(support, 4)
        ));
    }

    out.push_str(&format!(
        "\n==High-confidence association rules (min_conf={})\n",
        format_percent(analysis.params.min_confidence(), 1)
    ));
    for rule in &analysis.rules {
        out.push_str(&format!(
            "[{}] => [{}] (Conf: {}, Supp: {})\n",
            rule.antecedent.join(ITEM_DELIMITER),
            rule.consequent.join(ITEM_DELIMITER),
            format_percent(rule.confidence, 1),
            format_percent(rule.support, 4)
        ));
    }

    out
}
