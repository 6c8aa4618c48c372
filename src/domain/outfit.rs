// ==========================================
// 衣橱搭配引擎 - 搭配实体
// ==========================================
// 职责: 搭配需求、搭配方案、兼容性/校验结论
// 生命周期: 每次请求构造, 创建后不可变
// 例外: OutfitProposal.item_ids 可被去重兜底原地改写
// ==========================================

use crate::domain::types::Category;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// OutfitRequirements - 搭配需求
// ==========================================
// essential_categories 语义: 外层 OR, 内层 AND
// 例: [[top,bottom],[dress]] = (top ∧ bottom) ∨ dress
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutfitRequirements {
    pub essential_categories: Vec<Vec<Category>>,
    #[serde(default)]
    pub recommended_categories: Vec<Category>,
    #[serde(default)]
    pub optional_categories: Vec<Category>,
    #[serde(default)]
    pub avoid_categories: Vec<Category>,
    pub min_items: usize,
    pub max_items: usize,
    #[serde(default)]
    pub occasion_type: String,
    #[serde(default)]
    pub special_notes: String,
}

impl OutfitRequirements {
    /// 日常默认需求: (top ∧ bottom) ∨ dress, 建议鞋履, 2~5 件
    pub fn default_everyday() -> Self {
        Self {
            essential_categories: vec![
                vec![Category::Top, Category::Bottom],
                vec![Category::Dress],
            ],
            recommended_categories: vec![Category::Shoes],
            optional_categories: vec![Category::Outerwear, Category::Accessory],
            avoid_categories: Vec::new(),
            min_items: 2,
            max_items: 5,
            occasion_type: "everyday".to_string(),
            special_notes: String::new(),
        }
    }
}

// ==========================================
// RawProposal - 生成器原始输出
// ==========================================
// 不可信输入: 所有字段可缺失
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawProposal {
    #[serde(default, alias = "item_ids")]
    pub item_ids: Vec<String>,
    #[serde(default)]
    pub rationale: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub score: Option<f64>,
    #[serde(default)]
    pub occasion: Option<String>,
}

// ==========================================
// OutfitProposal - 搭配方案
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutfitProposal {
    pub item_ids: Vec<String>,
    pub rationale: String,
    pub title: String,
    pub score: f64,
    pub occasion: Option<String>,

    // ===== 生成过程标记 =====
    pub degraded: bool,  // 校验未通过但预算耗尽
    pub sanitized: bool, // 经过确定性去重兜底
    pub attempts: u32,
    pub issues: Vec<String>,
    pub generated_at: DateTime<Utc>,
}

impl OutfitProposal {
    /// 从原始输出构造（缺失字段给默认值, score 截断到 [0,1]）
    pub fn from_raw(raw: RawProposal) -> Self {
        let score = raw
            .score
            .filter(|s| s.is_finite())
            .map(|s| s.clamp(0.0, 1.0))
            .unwrap_or(0.0);

        Self {
            item_ids: raw.item_ids,
            rationale: raw.rationale.unwrap_or_default(),
            title: raw
                .title
                .filter(|t| !t.trim().is_empty())
                .unwrap_or_else(|| "Untitled Outfit".to_string()),
            score,
            occasion: raw.occasion,
            degraded: false,
            sanitized: false,
            attempts: 0,
            issues: Vec::new(),
            generated_at: Utc::now(),
        }
    }
}

// ==========================================
// CompatibilityVerdict - 两两兼容结论
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompatibilityVerdict {
    pub compatible: bool,
    pub reason: String,
}

impl CompatibilityVerdict {
    pub fn pass(reason: impl Into<String>) -> Self {
        Self {
            compatible: true,
            reason: reason.into(),
        }
    }

    pub fn fail(reason: impl Into<String>) -> Self {
        Self {
            compatible: false,
            reason: reason.into(),
        }
    }
}

// ==========================================
// DuplicateViolation - 重复品类违规
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DuplicateViolation {
    MultipleBottoms { count: usize },
    MultipleShoes { count: usize },
    MultipleDresses { count: usize },
    DressWithBottom,
    DuplicateTops { count: usize },
    MultipleOuterwear { count: usize },
}

impl fmt::Display for DuplicateViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DuplicateViolation::MultipleBottoms { count } => write!(
                f,
                "DUPLICATE_BOTTOMS: {} bottoms selected; choose exactly one bottom",
                count
            ),
            DuplicateViolation::MultipleShoes { count } => write!(
                f,
                "DUPLICATE_SHOES: {} pairs of shoes selected; choose exactly one pair",
                count
            ),
            DuplicateViolation::MultipleDresses { count } => write!(
                f,
                "DUPLICATE_DRESSES: {} dresses selected; choose at most one dress",
                count
            ),
            DuplicateViolation::DressWithBottom => write!(
                f,
                "DRESS_WITH_BOTTOM: a dress cannot be combined with a bottom; pick one"
            ),
            DuplicateViolation::DuplicateTops { count } => write!(
                f,
                "DUPLICATE_TOPS: {} tops without a base + outer layering pair; keep one top or pair a base layer with a cardigan/blazer/jacket",
                count
            ),
            DuplicateViolation::MultipleOuterwear { count } => write!(
                f,
                "DUPLICATE_OUTERWEAR: {} outerwear pieces selected; choose at most one",
                count
            ),
        }
    }
}

// ==========================================
// DuplicateReport - 重复检测报告
// ==========================================
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DuplicateReport {
    pub violations: Vec<DuplicateViolation>,
}

impl DuplicateReport {
    pub fn is_clean(&self) -> bool {
        self.violations.is_empty()
    }

    /// 回灌给生成器的反馈文本（逐条列出触发的规则）
    pub fn feedback(&self) -> String {
        self.violations
            .iter()
            .map(|v| v.to_string())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

// ==========================================
// RequirementCheck - 需求满足检查
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequirementCheck {
    pub essential_satisfied: bool,
    pub satisfied_combination: Option<Vec<Category>>,
    pub forbidden_present: Vec<Category>,
    pub item_count: usize,
    pub count_in_range: bool,
}

impl RequirementCheck {
    pub fn is_satisfied(&self) -> bool {
        self.essential_satisfied && self.forbidden_present.is_empty() && self.count_in_range
    }

    /// 未满足项的反馈文本
    pub fn feedback(&self, requirements: &OutfitRequirements) -> String {
        let mut lines = Vec::new();
        if !self.essential_satisfied {
            let combos = requirements
                .essential_categories
                .iter()
                .map(|combo| {
                    combo
                        .iter()
                        .map(|c| c.as_str())
                        .collect::<Vec<_>>()
                        .join(" + ")
                })
                .collect::<Vec<_>>()
                .join(" OR ");
            lines.push(format!("MISSING_ESSENTIALS: outfit must include {}", combos));
        }
        if !self.forbidden_present.is_empty() {
            let forbidden = self
                .forbidden_present
                .iter()
                .map(|c| c.as_str())
                .collect::<Vec<_>>()
                .join(", ");
            lines.push(format!("FORBIDDEN_CATEGORIES: remove {}", forbidden));
        }
        if !self.count_in_range {
            lines.push(format!(
                "ITEM_COUNT: {} items selected, expected {}-{}",
                self.item_count, requirements.min_items, requirements.max_items
            ));
        }
        lines.join("\n")
    }
}

// ==========================================
// ValidationVerdict - 外部校验结论
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationVerdict {
    pub is_valid: bool,
    pub feedback: String,
}

impl ValidationVerdict {
    /// 放行（校验方不可达时的 fail-open 结论）
    pub fn assume_valid() -> Self {
        Self {
            is_valid: true,
            feedback: String::new(),
        }
    }
}
