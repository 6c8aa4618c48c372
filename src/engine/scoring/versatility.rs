// ==========================================
// 百搭度评分
// ==========================================

use crate::domain::garment::GarmentItem;
use crate::domain::score::{VersatilityDetails, NO_ITEMS_REASON};
use crate::domain::types::{Category, Formality};

use super::core::{mean, percent, round_to};

// 中性色 + 百搭色
const VERSATILE_COLORS: &[&str] = &[
    "black", "white", "gray", "grey", "navy", "beige", "cream", "tan", "brown", "denim", "khaki",
    "olive",
];

pub(super) fn calculate(items: &[GarmentItem]) -> (f64, VersatilityDetails) {
    if items.is_empty() {
        return (
            0.0,
            VersatilityDetails {
                explanation: NO_ITEMS_REASON.to_string(),
                reason: Some(NO_ITEMS_REASON.to_string()),
                ..Default::default()
            },
        );
    }

    let color_scores: Vec<f64> = items.iter().map(color_score).collect();
    let color_versatility = mean(&color_scores);

    let formality_scores: Vec<f64> = items.iter().map(formality_score).collect();
    let formality_range = mean(&formality_scores);

    let count = |category: Category| items.iter().filter(|i| i.category == category).count();
    let tops = count(Category::Top);
    let bottoms = count(Category::Bottom);
    let outerwear = count(Category::Outerwear);

    let category_balance = if tops > 0 && bottoms > 0 {
        tops.min(bottoms) as f64 / tops.max(bottoms) as f64
    } else if tops > 0 || bottoms > 0 {
        0.3
    } else {
        0.1
    };

    let layering_bonus = (outerwear as f64 / (tops + bottoms).max(1) as f64 * 2.0).min(0.2);

    let score = color_versatility * 0.35
        + formality_range * 0.35
        + category_balance * 0.25
        + layering_bonus * 0.05;

    let details = VersatilityDetails {
        color_versatility: round_to(color_versatility, 2),
        formality_range: round_to(formality_range, 2),
        category_balance: round_to(category_balance, 2),
        layering_bonus: round_to(layering_bonus, 2),
        total_items: items.len(),
        explanation: format!(
            "Based on {}% color mixing potential, {}% formality flexibility, and {}% category balance",
            percent(color_versatility),
            percent(formality_range),
            percent(category_balance)
        ),
        reason: None,
    };

    (score.min(1.0), details)
}

fn color_score(item: &GarmentItem) -> f64 {
    if item
        .colors
        .iter()
        .any(|c| VERSATILE_COLORS.contains(&c.as_str()))
    {
        1.0
    } else if !item.colors.is_empty() {
        0.5
    } else {
        0.3
    }
}

// 未标注百搭度按 moderate 处理
fn formality_score(item: &GarmentItem) -> f64 {
    let versatility = item.versatility.as_deref().unwrap_or("moderate");
    if versatility == "high" {
        1.0
    } else if matches!(
        item.formality,
        Some(Formality::SmartCasual | Formality::BusinessCasual)
    ) {
        0.8
    } else if versatility == "moderate" {
        0.6
    } else {
        0.4
    }
}
