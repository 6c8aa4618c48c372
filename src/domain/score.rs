// ==========================================
// 衣橱搭配引擎 - 评分结果
// ==========================================
// 职责: 四项评分 + 解释性明细
// 说明: 明细仅用于诊断展示, 不参与控制流
// ==========================================

use crate::domain::types::{Category, Lifestyle, Season, WardrobeStyle};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const NO_ITEMS_REASON: &str = "No items to analyze";

// ==========================================
// 百搭度明细
// ==========================================
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VersatilityDetails {
    pub color_versatility: f64,
    pub formality_range: f64,
    pub category_balance: f64,
    pub layering_bonus: f64,
    pub total_items: usize,
    pub explanation: String,
    pub reason: Option<String>,
}

// ==========================================
// 协调度明细
// ==========================================
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CohesionDetails {
    pub color_harmony: f64,
    pub style_consistency: f64,
    pub formality_coherence: f64,
    pub unique_colors: usize,
    pub dominant_styles: Vec<String>,
    pub explanation: String,
    pub reason: Option<String>,
}

// ==========================================
// 风格画像
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StyleProfile {
    pub style: WardrobeStyle,
    pub confidence: f64,
    pub has_dresses: bool,
    pub has_skirts: bool,
    pub lifestyle: Vec<Lifestyle>,
    pub feminine_count: usize,
    pub masculine_count: usize,
    pub description: String,
}

impl StyleProfile {
    pub fn empty() -> Self {
        Self {
            style: WardrobeStyle::Neutral,
            confidence: 0.0,
            has_dresses: false,
            has_skirts: false,
            lifestyle: Vec::new(),
            feminine_count: 0,
            masculine_count: 0,
            description: "Empty wardrobe".to_string(),
        }
    }

    pub fn has_lifestyle(&self, lifestyle: Lifestyle) -> bool {
        self.lifestyle.contains(&lifestyle)
    }
}

// ==========================================
// 完整度明细
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryCoverage {
    pub category: Category,
    pub required: usize,
    pub actual: usize,
    pub score: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CompletenessDetails {
    pub category_coverage: f64,
    pub occasion_readiness: f64,
    pub seasonal_coverage: f64,
    pub coverage: Vec<CategoryCoverage>,
    pub missing_essentials: Vec<String>,
    pub well_covered: Vec<Category>,
    pub total_categories: usize,
    pub wardrobe_style: Option<StyleProfile>,
    pub explanation: String,
    pub reason: Option<String>,
}

// ==========================================
// 季节分布
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeasonalDistribution {
    /// 各季节占比, 合计 1.0
    pub percentages: BTreeMap<Season, f64>,
    /// 覆盖 ≥3 季的单品比例
    pub versatility_metric: f64,
    pub primary_season: Option<Season>,
    /// 季节标签: 主季节名 / "balanced" / "spring/summer" 形式的双季倾向
    pub label: String,
    pub description: String,
    pub reason: Option<String>,
}

impl SeasonalDistribution {
    pub fn share(&self, season: Season) -> f64 {
        self.percentages.get(&season).copied().unwrap_or(0.0)
    }
}

// ==========================================
// 季节覆盖
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeasonalCoverage {
    pub coverage: BTreeMap<Season, f64>,
    pub items_per_season: BTreeMap<Season, usize>,
    pub all_season_count: usize,
    pub all_season_percentage: f64,
    pub minimum_recommended: usize,
    pub gaps: BTreeMap<Season, String>,
    pub total_items: usize,
    pub reason: Option<String>,
}

// ==========================================
// ScoreResult - 评分汇总
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreResult {
    pub versatility_score: f64,
    pub versatility_details: VersatilityDetails,
    pub cohesion_score: f64,
    pub cohesion_details: CohesionDetails,
    pub completeness_score: f64,
    pub completeness_details: CompletenessDetails,
    pub seasonal_distribution: SeasonalDistribution,
}
