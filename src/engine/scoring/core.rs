// ==========================================
// 衣橱搭配引擎 - 衣橱评分引擎
// ==========================================
// 职责: 组合各项评分, 统一取整
// ==========================================

use crate::domain::garment::GarmentItem;
use crate::domain::score::{
    CohesionDetails, CompletenessDetails, ScoreResult, SeasonalCoverage, SeasonalDistribution,
    VersatilityDetails,
};
use tracing::debug;

use super::{cohesion, completeness, seasonal, versatility};

// ==========================================
// ScoreEngine - 评分引擎
// ==========================================
// 无状态引擎, 所有输入通过参数传入
#[derive(Debug, Default, Clone, Copy)]
pub struct ScoreEngine;

impl ScoreEngine {
    pub fn new() -> Self {
        Self
    }

    /// 百搭度评分
    ///
    /// # 公式
    /// 0.35×颜色百搭 + 0.35×正式度跨度 + 0.25×品类平衡 + 0.05×叠穿加成, 上限 1.0
    pub fn calculate_versatility(&self, items: &[GarmentItem]) -> (f64, VersatilityDetails) {
        versatility::calculate(items)
    }

    /// 协调度评分
    ///
    /// # 公式
    /// 0.4×色彩和谐 + 0.4×风格一致 + 0.2×正式度一致, 上限 1.0
    pub fn calculate_cohesion(&self, items: &[GarmentItem]) -> (f64, CohesionDetails) {
        cohesion::calculate(items)
    }

    /// 完整度评分
    ///
    /// # 公式
    /// 0.5×品类覆盖 + 0.3×场合覆盖 + 0.2×季节覆盖, 上限 1.0
    ///
    /// # 说明
    /// 品类需求数量表由风格识别结果决定
    pub fn calculate_completeness(&self, items: &[GarmentItem]) -> (f64, CompletenessDetails) {
        completeness::calculate(items)
    }

    /// 季节分布（加权占比, 合计 1.0）
    pub fn calculate_seasonal_distribution(&self, items: &[GarmentItem]) -> SeasonalDistribution {
        seasonal::distribution(items)
    }

    /// 季节覆盖（按衣橱规模给出每季最低件数与缺口）
    pub fn calculate_seasonal_coverage(&self, items: &[GarmentItem]) -> SeasonalCoverage {
        seasonal::coverage(items)
    }

    /// 计算全部评分
    ///
    /// # 返回
    /// - 顶层分数保留 2 位小数
    /// - 季节分布占比保留 3 位小数
    pub fn calculate_all_scores(&self, items: &[GarmentItem]) -> ScoreResult {
        let (versatility_score, versatility_details) = self.calculate_versatility(items);
        let (cohesion_score, cohesion_details) = self.calculate_cohesion(items);
        let (completeness_score, completeness_details) = self.calculate_completeness(items);
        let seasonal_distribution = self.calculate_seasonal_distribution(items);

        debug!(
            items = items.len(),
            versatility = versatility_score,
            cohesion = cohesion_score,
            completeness = completeness_score,
            "衣橱评分完成"
        );

        ScoreResult {
            versatility_score: round_to(versatility_score, 2),
            versatility_details,
            cohesion_score: round_to(cohesion_score, 2),
            cohesion_details,
            completeness_score: round_to(completeness_score, 2),
            completeness_details,
            seasonal_distribution,
        }
    }
}

/// 四舍五入到指定小数位
pub(super) fn round_to(value: f64, digits: i32) -> f64 {
    let factor = 10f64.powi(digits);
    (value * factor).round() / factor
}

/// 安全平均值（空列表返回 0）
pub(super) fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        0.0
    } else {
        values.iter().sum::<f64>() / values.len() as f64
    }
}

/// 百分比文本（0.734 → 73）
pub(super) fn percent(value: f64) -> i64 {
    (value * 100.0).round() as i64
}
