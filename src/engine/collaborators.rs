// ==========================================
// 衣橱搭配引擎 - 外部协作方接口
// ==========================================
// 职责: 定义生成器 / 校验器 / 排序器 / 补购顾问 trait, 实现依赖倒置
// 说明: 引擎只依赖 trait, 不依赖具体模型服务或提示词
// 红线: 协作方输出一律视为不可信输入
// ==========================================

use crate::domain::garment::GarmentItem;
use crate::domain::generation::{ProposalContext, ShoppingSuggestion};
use crate::domain::outfit::{OutfitProposal, OutfitRequirements, RawProposal, ValidationVerdict};
use crate::domain::pairing::RankedChoice;
use async_trait::async_trait;

// ==========================================
// 搭配生成器
// ==========================================

/// 搭配生成器 Trait
///
/// 非确定性外部服务, 可能缺字段、返回未知 id、返回空结果
#[async_trait]
pub trait ProposalGenerator: Send + Sync {
    /// 生成一套搭配
    ///
    /// # 参数
    /// - `pool`: 本通道的轮转候选池
    /// - `requirements`: 搭配需求
    /// - `ctx`: 调用上下文（含上一轮累积反馈）
    async fn generate(
        &self,
        pool: &[GarmentItem],
        requirements: &OutfitRequirements,
        ctx: &ProposalContext,
    ) -> anyhow::Result<RawProposal>;
}

// ==========================================
// 搭配校验器
// ==========================================

/// 搭配校验器 Trait
///
/// 建议性校验: 调用失败时按 "通过" 处理（fail-open）
#[async_trait]
pub trait ValidatorService: Send + Sync {
    async fn validate(
        &self,
        proposal: &OutfitProposal,
        items: &[GarmentItem],
        ctx: &ProposalContext,
    ) -> anyhow::Result<ValidationVerdict>;
}

/// 全部放行的校验器
///
/// 用于不接入外部校验的场景（本地需求检查仍然生效）
#[derive(Debug, Clone, Default)]
pub struct AcceptAllValidator;

#[async_trait]
impl ValidatorService for AcceptAllValidator {
    async fn validate(
        &self,
        _proposal: &OutfitProposal,
        _items: &[GarmentItem],
        ctx: &ProposalContext,
    ) -> anyhow::Result<ValidationVerdict> {
        tracing::debug!(lane = ctx.lane, "AcceptAllValidator: 跳过外部校验");
        Ok(ValidationVerdict::assume_valid())
    }
}

// ==========================================
// 配对排序器
// ==========================================

/// 配对排序器 Trait
///
/// 仅在分桶候选数超过 top-k 时调用; 失败由调用方走确定性兜底
#[async_trait]
pub trait RankingService: Send + Sync {
    /// 返回至多 top_k 条排序结果
    async fn rank(
        &self,
        reference: &GarmentItem,
        candidates: &[GarmentItem],
        top_k: usize,
    ) -> anyhow::Result<Vec<RankedChoice>>;
}

/// 空操作排序器（始终返回空结果, 触发原序兜底）
#[derive(Debug, Clone, Default)]
pub struct NoOpRankingService;

#[async_trait]
impl RankingService for NoOpRankingService {
    async fn rank(
        &self,
        reference: &GarmentItem,
        candidates: &[GarmentItem],
        _top_k: usize,
    ) -> anyhow::Result<Vec<RankedChoice>> {
        tracing::debug!(
            reference = %reference.id,
            candidates = candidates.len(),
            "NoOpRankingService: 跳过外部排序"
        );
        Ok(Vec::new())
    }
}

// ==========================================
// 补购顾问
// ==========================================

/// 补购顾问 Trait
///
/// 在确定性缺口分析之后调用, 可改写建议列表; 低优先级, 失败不影响出搭配
#[async_trait]
pub trait ShoppingAdvisor: Send + Sync {
    async fn advise(
        &self,
        outfits: &[OutfitProposal],
        pool: &[GarmentItem],
        baseline: &[ShoppingSuggestion],
    ) -> anyhow::Result<Vec<ShoppingSuggestion>>;
}
