// ==========================================
// 衣橱搭配引擎 - 生成请求与结果
// ==========================================
// 职责: 多通道生成的输入（请求/上下文）与输出（通道结果/报告）
// ==========================================

use crate::domain::garment::GarmentItem;
use crate::domain::outfit::{OutfitProposal, OutfitRequirements};
use crate::domain::types::Category;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ==========================================
// GenerationRequest - 生成请求
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationRequest {
    /// 用户原始诉求（透传给生成器）
    pub request: String,
    pub candidate_pool: Vec<GarmentItem>,
    pub requirements: OutfitRequirements,
    #[serde(default)]
    pub exclude_categories: Vec<Category>,

    // ===== 可选上下文 =====
    #[serde(default)]
    pub vibe: Option<String>,
    #[serde(default)]
    pub weather: Option<String>,
    /// 1~5 档正式度
    #[serde(default)]
    pub formality_level: Option<u8>,
    #[serde(default)]
    pub time_of_day: Option<String>,
}

impl GenerationRequest {
    pub fn new(
        request: impl Into<String>,
        candidate_pool: Vec<GarmentItem>,
        requirements: OutfitRequirements,
    ) -> Self {
        Self {
            request: request.into(),
            candidate_pool,
            requirements,
            exclude_categories: Vec::new(),
            vibe: None,
            weather: None,
            formality_level: None,
            time_of_day: None,
        }
    }

    /// 正式度档位标签（缺省/越界 → Business Casual）
    pub fn formality_label(&self) -> &'static str {
        match self.formality_level {
            Some(1) => "Very Casual",
            Some(2) => "Casual",
            Some(4) => "Formal",
            Some(5) => "Black Tie",
            _ => "Business Casual",
        }
    }

    /// 上下文行（供生成器拼装提示）
    pub fn context_lines(&self) -> Vec<String> {
        let mut lines = Vec::new();
        if let Some(vibe) = &self.vibe {
            lines.push(format!("Desired Vibe: {}", vibe));
        }
        if let Some(weather) = &self.weather {
            lines.push(format!("Weather: {}", weather));
        }
        if self.formality_level.is_some() {
            lines.push(format!("Formality Level: {}", self.formality_label()));
        }
        if let Some(time) = &self.time_of_day {
            lines.push(format!("Time of Day: {}", time));
        }
        lines
    }
}

// ==========================================
// ProposalContext - 单次生成调用上下文
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProposalContext {
    pub request_id: Uuid,
    pub request: String,
    pub context_lines: Vec<String>,
    pub lane: usize,
    pub attempt: u32,
    /// 累积反馈（上一轮失败原因）
    pub feedback: Option<String>,
}

// ==========================================
// 通道状态 (Lane Status)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LaneStatus {
    Accepted, // 校验通过
    Degraded, // 预算耗尽, 返回最优结果
    Failed,   // 通道失败
}

// ==========================================
// LaneOutcome - 通道执行记录
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LaneOutcome {
    pub lane: usize,
    pub status: LaneStatus,
    pub attempts: u32,
    pub error: Option<String>,
}

// ==========================================
// 补购建议 (Shopping Suggestion)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ShoppingPriority {
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShoppingSuggestion {
    pub category: Category,
    pub priority: ShoppingPriority,
    pub reason: String,
}

// ==========================================
// GenerationReport - 生成报告
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationReport {
    pub request_id: Uuid,
    /// 成功通道的方案（按通道提交顺序）
    pub outfits: Vec<OutfitProposal>,
    pub lanes: Vec<LaneOutcome>,
    pub shopping_suggestions: Option<Vec<ShoppingSuggestion>>,
    pub generated_at: DateTime<Utc>,
}

impl GenerationReport {
    pub fn accepted_count(&self) -> usize {
        self.lanes
            .iter()
            .filter(|l| l.status == LaneStatus::Accepted)
            .count()
    }

    pub fn failed_count(&self) -> usize {
        self.lanes
            .iter()
            .filter(|l| l.status == LaneStatus::Failed)
            .count()
    }
}
