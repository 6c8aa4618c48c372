// ==========================================
// 完整度评分
// ==========================================

use crate::domain::garment::GarmentItem;
use crate::domain::score::{CategoryCoverage, CompletenessDetails, NO_ITEMS_REASON};
use crate::domain::types::{Category, Season};
use crate::engine::style_detection::StyleDetector;
use std::collections::{BTreeSet, HashMap, HashSet};

use super::core::{mean, percent, round_to};

// 场合种类基准数
const OCCASION_BASELINE: f64 = 6.0;
// 低于需求 70% 记为缺失
const MISSING_SHARE: f64 = 0.7;

pub(super) fn calculate(items: &[GarmentItem]) -> (f64, CompletenessDetails) {
    if items.is_empty() {
        return (
            0.0,
            CompletenessDetails {
                explanation: NO_ITEMS_REASON.to_string(),
                reason: Some(NO_ITEMS_REASON.to_string()),
                ..Default::default()
            },
        );
    }

    let profile = StyleDetector::detect(items);
    let required = StyleDetector::required_quantities(&profile);

    let mut counts: HashMap<Category, usize> = HashMap::new();
    for item in items {
        *counts.entry(item.category).or_insert(0) += 1;
    }

    // ===== 品类覆盖 =====
    let mut coverage = Vec::with_capacity(required.len());
    let mut missing_essentials = Vec::new();
    let mut well_covered = Vec::new();
    let mut category_scores = Vec::with_capacity(required.len());

    for (category, quantity) in &required {
        let actual = counts.get(category).copied().unwrap_or(0);
        let score = if actual == 0 {
            missing_essentials.push(category.as_str().to_string());
            0.0
        } else if actual >= *quantity {
            well_covered.push(*category);
            1.0
        } else {
            let ratio = actual as f64 / *quantity as f64;
            if (actual as f64) < *quantity as f64 * MISSING_SHARE {
                missing_essentials.push(format!(
                    "{} (only {}/{})",
                    category.as_str(),
                    actual,
                    quantity
                ));
            }
            ratio.powf(1.5)
        };
        category_scores.push(score);
        coverage.push(CategoryCoverage {
            category: *category,
            required: *quantity,
            actual,
            score: round_to(score, 2),
        });
    }

    let category_coverage = mean(&category_scores);

    // ===== 场合覆盖 =====
    let mut occasions: HashSet<String> = HashSet::new();
    for item in items {
        let formality = item.formality.map(|f| f.as_str()).unwrap_or("casual");
        occasions.insert(formality.to_string());
        for occasion in &item.occasions {
            let occasion = occasion.trim().to_lowercase();
            if !occasion.is_empty() {
                occasions.insert(occasion);
            }
        }
    }
    let occasion_readiness = (occasions.len() as f64 / OCCASION_BASELINE).min(1.0);

    // ===== 季节覆盖（仅统计显式标注）=====
    let mut seasons: BTreeSet<Season> = BTreeSet::new();
    for item in items {
        if item.all_season {
            seasons.extend(Season::ALL);
        } else {
            seasons.extend(item.seasons.iter().copied());
        }
    }
    let seasonal_coverage = if seasons.is_empty() {
        0.5
    } else {
        seasons.len() as f64 / Season::ALL.len() as f64
    };

    let score = category_coverage * 0.5 + occasion_readiness * 0.3 + seasonal_coverage * 0.2;

    let explanation = format!(
        "{}% essential category coverage for {} wardrobe, {}% occasion readiness",
        percent(category_coverage),
        profile.style,
        percent(occasion_readiness)
    );

    let details = CompletenessDetails {
        category_coverage: round_to(category_coverage, 2),
        occasion_readiness: round_to(occasion_readiness, 2),
        seasonal_coverage: round_to(seasonal_coverage, 2),
        coverage,
        missing_essentials,
        well_covered,
        total_categories: counts.len(),
        wardrobe_style: Some(profile),
        explanation,
        reason: None,
    };

    (score.min(1.0), details)
}
