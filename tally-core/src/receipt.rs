use std::fmt::Write;

use serde::{Deserialize, Serialize};

use crate::domain::TotalsSummary;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReceiptLabels {
    pub title: String,
    pub separator: String,
    pub currency: String,
    pub subtotal: String,
    pub service_charge: String,
    pub total: String,
    pub item_count: String,
    pub empty: String,
}

impl ReceiptLabels {
    pub fn hk() -> Self {
        Self {
            title: "🍣 壽司郎結帳備忘".into(),
            separator: "------------------".into(),
            currency: "$".into(),
            subtotal: "小計".into(),
            service_charge: "加一服務費".into(),
            total: "總額".into(),
            item_count: "總碟數".into(),
            empty: "尚未選擇項目".into(),
        }
    }

    pub fn en() -> Self {
        Self {
            title: "🍣 Sushiro Bill Memo".into(),
            separator: "------------------".into(),
            currency: "$".into(),
            subtotal: "Subtotal".into(),
            service_charge: "Service charge".into(),
            total: "Total".into(),
            item_count: "Dishes".into(),
            empty: "No items selected".into(),
        }
    }
}

impl Default for ReceiptLabels {
    fn default() -> Self {
        Self::hk()
    }
}

/// Plain-text bill memo. Never fails; an empty order renders the placeholder.
pub fn format_receipt(
    summary: &TotalsSummary,
    service_charge_enabled: bool,
    labels: &ReceiptLabels,
) -> String {
    let cur = &labels.currency;
    let mut out = String::new();
    // writing into a String cannot fail
    let _ = writeln!(out, "{}", labels.title);
    let _ = writeln!(out, "{}", labels.separator);
    if summary.line_items.is_empty() {
        let _ = writeln!(out, "{}", labels.empty);
    }
    for line in &summary.line_items {
        let _ = writeln!(
            out,
            "{} x{}: {cur}{}",
            line.name, line.quantity, line.line_total
        );
    }
    let _ = writeln!(out, "{}", labels.separator);
    let _ = writeln!(out, "{}: {cur}{}", labels.subtotal, summary.subtotal);
    if service_charge_enabled {
        let _ = writeln!(
            out,
            "{}: {cur}{}",
            labels.service_charge, summary.service_charge
        );
    }
    let _ = writeln!(out, "{}: {cur}{}", labels.total, summary.grand_total);
    let _ = writeln!(out, "{}: {}", labels.item_count, summary.total_item_count);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregate::{compute, compute_with_policy};
    use crate::catalog::Catalog;
    use crate::order::OrderQuantities;
    use crate::policy::ServiceChargePolicy;

    fn red_and_gold() -> OrderQuantities {
        [("red".to_string(), 2), ("gold".to_string(), 1)]
            .into_iter()
            .collect()
    }

    #[test]
    fn full_receipt_layout() {
        let s = compute(&Catalog::sushiro(), &red_and_gold(), true);
        let text = format_receipt(&s, true, &ReceiptLabels::hk());
        let expected = "🍣 壽司郎結帳備忘\n\
                        ------------------\n\
                        紅碟 (Red) x2: $24\n\
                        金碟 (Gold) x1: $22\n\
                        ------------------\n\
                        小計: $46\n\
                        加一服務費: $5\n\
                        總額: $51\n\
                        總碟數: 3\n";
        assert_eq!(text, expected);
    }

    #[test]
    fn service_line_omitted_when_disabled() {
        let s = compute(&Catalog::sushiro(), &red_and_gold(), false);
        let text = format_receipt(&s, false, &ReceiptLabels::en());
        assert!(!text.contains("Service charge"));
        assert!(text.contains("Total: $46\n"));
        assert!(text.ends_with("Dishes: 3\n"));
    }

    #[test]
    fn empty_order_shows_placeholder() {
        let s = compute(&Catalog::sushiro(), &OrderQuantities::new(), true);
        let text = format_receipt(&s, true, &ReceiptLabels::en());
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines[1], "------------------");
        assert_eq!(lines[2], "No items selected");
        assert_eq!(lines[3], "------------------");
        assert!(text.contains("Total: $0\n"));
    }

    #[test]
    fn english_label_does_not_assume_rate() {
        let policy = ServiceChargePolicy {
            rate_percent: 15,
            ..Default::default()
        };
        let q: OrderQuantities = [("black".to_string(), 2)].into_iter().collect();
        let s = compute_with_policy(&Catalog::sushiro(), &q, true, &policy);
        let text = format_receipt(&s, true, &ReceiptLabels::en());
        assert!(text.contains("Subtotal: $54\nService charge: $8\nTotal: $62\n"));
        assert!(!text.contains("10%"));
    }

    #[test]
    fn custom_currency_symbol() {
        let labels = ReceiptLabels {
            currency: "HK$".into(),
            ..ReceiptLabels::en()
        };
        let s = compute(&Catalog::sushiro(), &red_and_gold(), true);
        assert!(format_receipt(&s, true, &labels).contains("Total: HK$51\n"));
    }
}
