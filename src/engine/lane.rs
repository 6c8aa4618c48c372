// ==========================================
// 衣橱搭配引擎 - 单通道状态机
// ==========================================
// 状态: Proposing → DuplicateCheck → Validating → {Accepted | Exhausted}
// 红线: 迭代循环 + 显式计数, 不递归重试
// 红线: 生成器失败计入通道失败（fail-closed）; 校验器失败按通过处理（fail-open）
// ==========================================

use crate::config::GenerationSettings;
use crate::domain::garment::GarmentItem;
use crate::domain::generation::ProposalContext;
use crate::domain::outfit::{OutfitProposal, OutfitRequirements, ValidationVerdict};
use crate::engine::collaborators::{ProposalGenerator, ValidatorService};
use crate::engine::outfit_validator::OutfitValidator;
use crate::error::{EngineError, EngineResult};
use std::sync::Arc;
use tracing::{debug, info, warn};
use uuid::Uuid;

const EMPTY_PROPOSAL_FEEDBACK: &str =
    "EMPTY_PROPOSAL: the previous answer selected no usable items; choose item ids from the candidate list";

/// 轮转偏移量
///
/// # 规则
/// - 候选数 ≥ 通道数 → lane × ⌊len / lanes⌋
/// - 否则 → lane
/// - 结果对 len 取模
pub fn rotation_offset(len: usize, lane: usize, lanes: usize) -> usize {
    if len == 0 {
        return 0;
    }
    let step = if lanes == 0 || len < lanes {
        1
    } else {
        len / lanes
    };
    (lane * step) % len
}

/// 生成通道私有的轮转候选池（不修改共享池）
pub fn rotate_pool(pool: &[GarmentItem], lane: usize, lanes: usize) -> Vec<GarmentItem> {
    let offset = rotation_offset(pool.len(), lane, lanes);
    pool[offset..]
        .iter()
        .chain(pool[..offset].iter())
        .cloned()
        .collect()
}

// ==========================================
// LaneRunner - 单通道执行器
// ==========================================
pub struct LaneRunner {
    lane: usize,
    request_id: Uuid,
    request: String,
    context_lines: Vec<String>,
    pool: Vec<GarmentItem>,
    requirements: OutfitRequirements,
    settings: GenerationSettings,
    generator: Arc<dyn ProposalGenerator>,
    validator: Arc<dyn ValidatorService>,
}

impl LaneRunner {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        lane: usize,
        request_id: Uuid,
        request: String,
        context_lines: Vec<String>,
        pool: Vec<GarmentItem>,
        requirements: OutfitRequirements,
        settings: GenerationSettings,
        generator: Arc<dyn ProposalGenerator>,
        validator: Arc<dyn ValidatorService>,
    ) -> Self {
        Self {
            lane,
            request_id,
            request,
            context_lines,
            pool,
            requirements,
            settings,
            generator,
            validator,
        }
    }

    /// 执行通道
    ///
    /// # 流程
    /// 1. Proposing: 调用生成器; 失败/空结果 → 带反馈重试, 总调用次数受 cap₁+cap₂ 约束
    /// 2. DuplicateCheck: 违规且重复计数 < cap₁ → 带违规反馈重试; 否则去重兜底
    /// 3. Validating: 本地需求检查 + 外部校验; 不通过且校验计数 < cap₂ → 带反馈重试;
    ///    否则接受（不通过时标记 degraded）
    ///
    /// # 返回
    /// - Ok(OutfitProposal): 已接受的方案
    /// - Err(GenerationFailure): 生成器调用预算耗尽
    pub async fn run(self) -> EngineResult<OutfitProposal> {
        let max_calls = self.settings.max_generation_calls();
        let dup_cap = self.settings.duplicate_retry_cap;
        let val_cap = self.settings.validation_retry_cap;

        let mut calls: u32 = 0;
        let mut duplicate_rounds: u32 = 0;
        let mut validation_rounds: u32 = 0;
        let mut feedback: Option<String> = None;
        let mut last_error = String::from("no attempt made");

        loop {
            if calls >= max_calls {
                warn!(lane = self.lane, calls, error = %last_error, "通道生成预算耗尽");
                return Err(EngineError::GenerationFailure {
                    lane: self.lane,
                    attempt: calls,
                    message: last_error,
                });
            }
            calls += 1;

            let ctx = ProposalContext {
                request_id: self.request_id,
                request: self.request.clone(),
                context_lines: self.context_lines.clone(),
                lane: self.lane,
                attempt: calls,
                feedback: feedback.clone(),
            };

            // ===== Proposing =====
            let raw = match self
                .generator
                .generate(&self.pool, &self.requirements, &ctx)
                .await
            {
                Ok(raw) => raw,
                Err(e) => {
                    warn!(lane = self.lane, attempt = calls, error = %e, "生成器调用失败");
                    last_error = e.to_string();
                    continue;
                }
            };

            let mut proposal = OutfitProposal::from_raw(raw);
            proposal.attempts = calls;

            let (mut items, unknown) = OutfitValidator::resolve_items(&proposal.item_ids, &self.pool);
            if !unknown.is_empty() {
                debug!(lane = self.lane, unknown = ?unknown, "丢弃未知单品 id");
                proposal
                    .issues
                    .push(format!("dropped unknown item ids: {}", unknown.join(", ")));
                proposal.item_ids = items.iter().map(|i| i.id.clone()).collect();
            }

            if items.is_empty() {
                warn!(lane = self.lane, attempt = calls, "生成结果为空");
                last_error = "proposal resolved to zero items".to_string();
                feedback = Some(EMPTY_PROPOSAL_FEEDBACK.to_string());
                continue;
            }

            // ===== DuplicateCheck =====
            let report = OutfitValidator::detect_duplicates(&items);
            if !report.is_clean() {
                duplicate_rounds += 1;
                if duplicate_rounds < dup_cap && calls < max_calls {
                    debug!(
                        lane = self.lane,
                        attempt = calls,
                        violations = report.violations.len(),
                        "重复品类违规, 带反馈重试"
                    );
                    feedback = Some(report.feedback());
                    continue;
                }
                info!(
                    lane = self.lane,
                    attempt = calls,
                    violations = report.violations.len(),
                    "重复品类重试耗尽, 执行去重兜底"
                );
                items = OutfitValidator::sanitize_proposal(&mut proposal, &items);
            }

            // ===== Validating =====
            let local = OutfitValidator::check_requirements(&items, &self.requirements);
            let external = match self.validator.validate(&proposal, &items, &ctx).await {
                Ok(verdict) => verdict,
                Err(e) => {
                    warn!(lane = self.lane, attempt = calls, error = %e, "校验服务不可用, 按通过处理");
                    ValidationVerdict::assume_valid()
                }
            };

            if local.is_satisfied() && external.is_valid {
                debug!(lane = self.lane, attempts = calls, "方案校验通过");
                return Ok(proposal);
            }

            let mut lines = Vec::new();
            if !local.is_satisfied() {
                lines.push(local.feedback(&self.requirements));
            }
            if !external.is_valid && !external.feedback.trim().is_empty() {
                lines.push(external.feedback.trim().to_string());
            }
            let combined = lines.join("\n");

            validation_rounds += 1;
            if validation_rounds < val_cap && calls < max_calls {
                debug!(lane = self.lane, attempt = calls, "方案校验未通过, 带反馈重试");
                feedback = Some(combined);
                continue;
            }

            info!(lane = self.lane, attempts = calls, "校验重试耗尽, 返回降级方案");
            proposal.degraded = true;
            if !combined.is_empty() {
                proposal.issues.push(combined);
            }
            return Ok(proposal);
        }
    }
}
