// ==========================================
// 衣橱搭配引擎 - 多通道生成编排器
// ==========================================
// 职责: 过滤候选池 → 洗牌 → N 通道并发生成 → 汇总 → 补购缺口分析
// 红线: 单通道失败不影响其它通道; 全部通道失败才报告 AggregateFailure
// 红线: 输出按通道提交顺序排列, 与完成顺序无关
// ==========================================

use crate::config::{EngineConfigReader, GenerationSettings};
use crate::domain::garment::GarmentItem;
use crate::domain::generation::{
    GenerationReport, GenerationRequest, LaneOutcome, LaneStatus, ShoppingSuggestion,
};
use crate::domain::outfit::{OutfitProposal, OutfitRequirements};
use crate::domain::types::Category;
use crate::engine::collaborators::{
    AcceptAllValidator, ProposalGenerator, ShoppingAdvisor, ValidatorService,
};
use crate::engine::lane::{rotate_pool, LaneRunner};
use crate::engine::shopping_gap::ShoppingGapAnalyzer;
use crate::error::{EngineError, EngineResult};
use chrono::Utc;
use futures::future::join_all;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, info_span, warn, Instrument};
use uuid::Uuid;

// ==========================================
// GenerationOrchestrator - 生成编排器
// ==========================================

pub struct GenerationOrchestrator<C>
where
    C: EngineConfigReader,
{
    config: Arc<C>,
    generator: Arc<dyn ProposalGenerator>,
    validator: Arc<dyn ValidatorService>,
    shopping_advisor: Option<Arc<dyn ShoppingAdvisor>>,
}

impl<C> GenerationOrchestrator<C>
where
    C: EngineConfigReader,
{
    /// 创建编排器（默认不接外部校验、不接补购顾问）
    ///
    /// # 参数
    /// - config: 配置读取器
    /// - generator: 搭配生成器
    pub fn new(config: Arc<C>, generator: Arc<dyn ProposalGenerator>) -> Self {
        Self {
            config,
            generator,
            validator: Arc::new(AcceptAllValidator),
            shopping_advisor: None,
        }
    }

    /// 接入外部校验器
    pub fn with_validator(mut self, validator: Arc<dyn ValidatorService>) -> Self {
        self.validator = validator;
        self
    }

    /// 接入补购顾问
    pub fn with_shopping_advisor(mut self, advisor: Arc<dyn ShoppingAdvisor>) -> Self {
        self.shopping_advisor = Some(advisor);
        self
    }

    /// 执行一次多通道生成
    ///
    /// # 返回
    /// - Ok(GenerationReport): ≥1 个通道产出方案（可能带 degraded 标记）
    /// - Err(InsufficientInput): 过滤后候选不足, 未启动任何通道
    /// - Err(AggregateFailure): 全部通道失败
    /// - Err(Config): 配置值非法
    pub async fn generate(&self, request: GenerationRequest) -> EngineResult<GenerationReport> {
        let request_id = Uuid::new_v4();
        let span = info_span!("generation", request_id = %request_id);
        self.generate_inner(request_id, request).instrument(span).await
    }

    async fn generate_inner(
        &self,
        request_id: Uuid,
        request: GenerationRequest,
    ) -> EngineResult<GenerationReport> {
        let settings = GenerationSettings::resolve(self.config.as_ref()).await?;

        info!(
            candidates = request.candidate_pool.len(),
            lanes = settings.lane_count,
            "开始多通道生成"
        );

        // ==========================================
        // 步骤1: 候选池过滤 + 洗牌
        // ==========================================
        let pool = Self::prepare_pool(&request, &settings)?;
        debug!(pool = pool.len(), "候选池准备完成");

        // ==========================================
        // 步骤2: 通道并发执行
        // ==========================================
        let lanes = settings.lane_count;
        let context_lines = request.context_lines();
        let mut handles = Vec::with_capacity(lanes);

        for lane in 0..lanes {
            let runner = LaneRunner::new(
                lane,
                request_id,
                request.request.clone(),
                context_lines.clone(),
                rotate_pool(&pool, lane, lanes),
                request.requirements.clone(),
                settings.clone(),
                Arc::clone(&self.generator),
                Arc::clone(&self.validator),
            );
            let lane_future = runner.run().instrument(info_span!("lane", lane));
            let timeout_ms = settings.lane_timeout_ms;

            handles.push(tokio::spawn(async move {
                match timeout_ms {
                    Some(ms) => {
                        match tokio::time::timeout(Duration::from_millis(ms), lane_future).await {
                            Ok(result) => result,
                            Err(_) => Err(EngineError::LaneTimeout {
                                lane,
                                timeout_ms: ms,
                            }),
                        }
                    }
                    None => lane_future.await,
                }
            }));
        }

        // join_all 保持提交顺序
        let joined = join_all(handles).await;

        // ==========================================
        // 步骤3: 汇总通道结果
        // ==========================================
        let mut outfits = Vec::new();
        let mut outcomes = Vec::with_capacity(lanes);

        for (lane, joined_result) in joined.into_iter().enumerate() {
            let result = joined_result.unwrap_or_else(|e| {
                Err(EngineError::LanePanicked {
                    lane,
                    message: e.to_string(),
                })
            });

            match result {
                Ok(proposal) => {
                    let status = if proposal.degraded {
                        LaneStatus::Degraded
                    } else {
                        LaneStatus::Accepted
                    };
                    outcomes.push(LaneOutcome {
                        lane,
                        status,
                        attempts: proposal.attempts,
                        error: None,
                    });
                    outfits.push(proposal);
                }
                Err(e) => {
                    warn!(lane, error = %e, "通道失败");
                    let attempts = match &e {
                        EngineError::GenerationFailure { attempt, .. } => *attempt,
                        _ => 0,
                    };
                    outcomes.push(LaneOutcome {
                        lane,
                        status: LaneStatus::Failed,
                        attempts,
                        error: Some(e.to_string()),
                    });
                }
            }
        }

        if outfits.is_empty() {
            warn!(lanes, "全部通道失败");
            return Err(EngineError::AggregateFailure { lanes });
        }

        // ==========================================
        // 步骤4: 补购缺口分析（旁路, 失败不阻断）
        // ==========================================
        let shopping_suggestions = if settings.shopping_gap_enabled {
            Some(
                self.shopping_pass(&request.requirements, &outfits, &pool, &settings)
                    .await,
            )
        } else {
            None
        };

        info!(
            accepted = outfits.len(),
            failed = lanes - outfits.len(),
            "多通道生成完成"
        );

        Ok(GenerationReport {
            request_id,
            outfits,
            lanes: outcomes,
            shopping_suggestions,
            generated_at: Utc::now(),
        })
    }

    /// 候选池准备
    ///
    /// # 规则
    /// 1. 剔除 exclude_categories 与 avoid_categories 中的品类
    /// 2. 剩余数 < min_pool_size → InsufficientInput
    /// 3. 用注入的种子洗牌一次（无种子时取系统熵）
    pub fn prepare_pool(
        request: &GenerationRequest,
        settings: &GenerationSettings,
    ) -> EngineResult<Vec<GarmentItem>> {
        let excluded: HashSet<Category> = request
            .exclude_categories
            .iter()
            .chain(request.requirements.avoid_categories.iter())
            .copied()
            .collect();

        let mut pool: Vec<GarmentItem> = request
            .candidate_pool
            .iter()
            .filter(|item| !excluded.contains(&item.category))
            .cloned()
            .collect();

        if pool.len() < settings.min_pool_size {
            warn!(
                available = pool.len(),
                required = settings.min_pool_size,
                "候选单品不足"
            );
            return Err(EngineError::InsufficientInput {
                available: pool.len(),
                required: settings.min_pool_size,
            });
        }

        let mut rng = match settings.shuffle_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        pool.shuffle(&mut rng);

        Ok(pool)
    }

    async fn shopping_pass(
        &self,
        requirements: &OutfitRequirements,
        outfits: &[OutfitProposal],
        pool: &[GarmentItem],
        settings: &GenerationSettings,
    ) -> Vec<ShoppingSuggestion> {
        let baseline = ShoppingGapAnalyzer::analyze(requirements, outfits, pool);

        let Some(advisor) = &self.shopping_advisor else {
            return baseline;
        };

        let advice = advisor.advise(outfits, pool, &baseline);
        let result = match settings.lane_timeout_ms {
            Some(ms) => match tokio::time::timeout(Duration::from_millis(ms), advice).await {
                Ok(result) => result,
                Err(_) => Err(anyhow::anyhow!("补购顾问超时 ({}ms)", ms)),
            },
            None => advice.await,
        };

        match result {
            Ok(suggestions) => suggestions,
            Err(e) => {
                warn!(error = %e, "补购顾问失败, 使用确定性分析结果");
                baseline
            }
        }
    }
}
