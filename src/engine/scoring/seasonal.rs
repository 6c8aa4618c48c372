// ==========================================
// 季节分布与季节覆盖
// ==========================================

use crate::domain::garment::GarmentItem;
use crate::domain::score::{SeasonalCoverage, SeasonalDistribution, NO_ITEMS_REASON};
use crate::domain::types::Season;
use std::collections::BTreeMap;

use super::core::round_to;

// 主季节占比阈值
const FOCUSED_SHARE: f64 = 0.35;
// 均衡分布区间
const BALANCED_MAX: f64 = 0.28;
const BALANCED_MIN: f64 = 0.22;
// 季节覆盖缺口阈值
const GAP_THRESHOLD: f64 = 0.7;

// ==========================================
// 季节分布
// ==========================================

/// 加权季节分布
///
/// # 规则
/// - 覆盖 k 个季节的单品向每个季节贡献 1/k
/// - 未标注季节或 all-season 视为四季
/// - 主季节取最大占比, 并列时按 春→夏→秋→冬 取首个
pub(super) fn distribution(items: &[GarmentItem]) -> SeasonalDistribution {
    if items.is_empty() {
        return SeasonalDistribution {
            percentages: Season::ALL.iter().map(|s| (*s, 0.25)).collect(),
            versatility_metric: 0.0,
            primary_season: None,
            label: "balanced".to_string(),
            description: NO_ITEMS_REASON.to_string(),
            reason: Some(NO_ITEMS_REASON.to_string()),
        };
    }

    let mut weights: BTreeMap<Season, f64> = Season::ALL.iter().map(|s| (*s, 0.0)).collect();
    let mut versatile_items = 0usize;

    for item in items {
        let seasons = item.effective_seasons();
        if seasons.len() >= 3 {
            versatile_items += 1;
        }
        let weight = 1.0 / seasons.len() as f64;
        for season in seasons {
            *weights.entry(season).or_insert(0.0) += weight;
        }
    }

    let total_weight: f64 = weights.values().sum();
    let shares: Vec<(Season, f64)> = Season::ALL
        .iter()
        .map(|s| {
            let share = if total_weight > 0.0 {
                weights[s] / total_weight
            } else {
                0.25
            };
            (*s, share)
        })
        .collect();

    // 稳定排序: 并列保持季节顺序
    let mut ranked = shares.clone();
    ranked.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
    let (primary, max_share) = ranked[0];
    let min_share = shares.iter().map(|(_, v)| *v).fold(f64::INFINITY, f64::min);

    let (label, description) = if max_share > FOCUSED_SHARE {
        (
            primary.as_str().to_string(),
            format!("{}-focused wardrobe", primary.title()),
        )
    } else if max_share < BALANCED_MAX && min_share > BALANCED_MIN {
        (
            "balanced".to_string(),
            "Well-balanced seasonal distribution".to_string(),
        )
    } else {
        let second = ranked[1].0;
        (
            format!("{}/{}", primary.as_str(), second.as_str()),
            format!("{}/{}-leaning wardrobe", primary.title(), second.title()),
        )
    };

    SeasonalDistribution {
        percentages: shares
            .into_iter()
            .map(|(s, v)| (s, round_to(v, 3)))
            .collect(),
        versatility_metric: round_to(versatile_items as f64 / items.len() as f64, 3),
        primary_season: Some(primary),
        label,
        description,
        reason: None,
    }
}

// ==========================================
// 季节覆盖
// ==========================================

/// 每季最低件数（按衣橱规模）
fn minimum_per_season(total: usize) -> usize {
    if total < 20 {
        5
    } else if total < 50 {
        10
    } else {
        15
    }
}

/// 季节覆盖评分
///
/// # 规则
/// - 显式 all-season / 标注全部四季 / 未标注 → 计入每个季节与 all_season_count
/// - coverage = min(件数 / 最低件数, 1)
/// - coverage < 0.7 → 缺口 "Need N more <season> items"
pub(super) fn coverage(items: &[GarmentItem]) -> SeasonalCoverage {
    let zeros = || Season::ALL.iter().map(|s| (*s, 0usize)).collect::<BTreeMap<_, _>>();

    if items.is_empty() {
        return SeasonalCoverage {
            coverage: Season::ALL.iter().map(|s| (*s, 0.0)).collect(),
            items_per_season: zeros(),
            all_season_count: 0,
            all_season_percentage: 0.0,
            minimum_recommended: minimum_per_season(0),
            gaps: BTreeMap::new(),
            total_items: 0,
            reason: Some(NO_ITEMS_REASON.to_string()),
        };
    }

    let mut counts = zeros();
    let mut all_season_count = 0usize;

    for item in items {
        let seasons = item.effective_seasons();
        if seasons.len() == Season::ALL.len() {
            all_season_count += 1;
        }
        for season in seasons {
            *counts.entry(season).or_insert(0) += 1;
        }
    }

    let minimum = minimum_per_season(items.len());
    let mut coverage = BTreeMap::new();
    let mut gaps = BTreeMap::new();

    for season in Season::ALL {
        let count = counts.get(&season).copied().unwrap_or(0);
        let score = (count as f64 / minimum as f64).min(1.0);
        if score < GAP_THRESHOLD {
            let needed = minimum.saturating_sub(count);
            gaps.insert(
                season,
                format!("Need {} more {} items", needed, season.as_str()),
            );
        }
        coverage.insert(season, round_to(score, 2));
    }

    SeasonalCoverage {
        coverage,
        items_per_season: counts,
        all_season_count,
        all_season_percentage: round_to(all_season_count as f64 / items.len() as f64, 2),
        minimum_recommended: minimum,
        gaps,
        total_items: items.len(),
        reason: None,
    }
}
