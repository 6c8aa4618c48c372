// ==========================================
// 协调度评分
// ==========================================

use crate::domain::garment::GarmentItem;
use crate::domain::score::{CohesionDetails, NO_ITEMS_REASON};
use crate::domain::types::Formality;
use std::collections::{HashMap, HashSet};

use super::core::{percent, round_to};

// 风格标签出现比例 ≥15% 视为主导风格
const DOMINANT_STYLE_SHARE: f64 = 0.15;
// 正式/运动两极各 >30% 视为两极化衣橱
const POLARIZED_SHARE: f64 = 0.3;

pub(super) fn calculate(items: &[GarmentItem]) -> (f64, CohesionDetails) {
    if items.is_empty() {
        return (
            0.0,
            CohesionDetails {
                explanation: NO_ITEMS_REASON.to_string(),
                reason: Some(NO_ITEMS_REASON.to_string()),
                ..Default::default()
            },
        );
    }

    let total = items.len() as f64;

    // ===== 色彩和谐 =====
    let unique_colors: HashSet<&str> = items
        .iter()
        .flat_map(|i| i.colors.iter().map(|c| c.as_str()))
        .collect();
    let color_harmony = color_harmony(unique_colors.len());

    // ===== 风格一致 =====
    let mut tag_order: Vec<String> = Vec::new();
    let mut tag_counts: HashMap<String, usize> = HashMap::new();
    for tag in items.iter().flat_map(|i| i.style_tags.iter()) {
        let tag = tag.trim().to_lowercase();
        if tag.is_empty() {
            continue;
        }
        let counter = tag_counts.entry(tag.clone()).or_insert(0);
        if *counter == 0 {
            tag_order.push(tag);
        }
        *counter += 1;
    }

    let dominant_styles: Vec<String> = tag_order
        .into_iter()
        .filter(|tag| tag_counts[tag] as f64 >= total * DOMINANT_STYLE_SHARE)
        .collect();

    let style_consistency = if tag_counts.is_empty() {
        0.5
    } else if dominant_styles.is_empty() {
        0.6
    } else {
        (dominant_styles.len() as f64 / 3.0).min(1.0) * 0.8 + 0.2
    };

    // ===== 正式度一致（仅惩罚两极化衣橱）=====
    let formal = items
        .iter()
        .filter(|i| i.formality == Some(Formality::Formal))
        .count() as f64;
    let athletic = items
        .iter()
        .filter(|i| i.formality == Some(Formality::Athletic))
        .count() as f64;
    let formality_coherence = if formal > total * POLARIZED_SHARE && athletic > total * POLARIZED_SHARE {
        0.75
    } else {
        0.95
    };

    let score = color_harmony * 0.4 + style_consistency * 0.4 + formality_coherence * 0.2;

    let details = CohesionDetails {
        color_harmony: round_to(color_harmony, 2),
        style_consistency: round_to(style_consistency, 2),
        formality_coherence: round_to(formality_coherence, 2),
        unique_colors: unique_colors.len(),
        dominant_styles,
        explanation: format!(
            "Color palette has {} unique colors with {}% harmony, {}% style consistency",
            unique_colors.len(),
            percent(color_harmony),
            percent(style_consistency)
        ),
        reason: None,
    };

    (score.min(1.0), details)
}

/// 按去重颜色数分段
fn color_harmony(unique: usize) -> f64 {
    match unique {
        0 => 0.5,
        1..=2 => 0.8,
        3..=10 => 1.0,
        11..=15 => 0.85,
        16..=20 => 0.7,
        n => (1.0 - (n - 20) as f64 * 0.03).max(0.5),
    }
}
