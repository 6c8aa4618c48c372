// ==========================================
// 协作方桩实现 - 用于集成测试
// ==========================================
// 生成器 / 校验器 / 排序器 / 补购顾问的可编排替身
// ==========================================

use anyhow::anyhow;
use async_trait::async_trait;
use outfit_engine::domain::types::Category;
use outfit_engine::domain::{
    GarmentItem, OutfitProposal, OutfitRequirements, ProposalContext, RankedChoice, RawProposal,
    ShoppingSuggestion, ValidationVerdict,
};
use outfit_engine::engine::{ProposalGenerator, RankingService, ShoppingAdvisor, ValidatorService};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

fn raw(ids: &[String], title: String) -> RawProposal {
    RawProposal {
        item_ids: ids.to_vec(),
        title: Some(title),
        rationale: Some("stub rationale".to_string()),
        ..Default::default()
    }
}

// ==========================================
// ScriptedGenerator - 按脚本依次返回结果（末项重复）
// ==========================================

pub struct ScriptedGenerator {
    script: Vec<Result<Vec<String>, String>>,
    calls: AtomicUsize,
    contexts: Mutex<Vec<ProposalContext>>,
}

impl ScriptedGenerator {
    pub fn always(ids: &[&str]) -> Self {
        Self::sequence(vec![Ok(ids.to_vec())])
    }

    pub fn always_failing(message: &str) -> Self {
        Self::sequence(vec![Err(message)])
    }

    pub fn sequence(script: Vec<Result<Vec<&str>, &str>>) -> Self {
        assert!(!script.is_empty(), "script must not be empty");
        Self {
            script: script
                .into_iter()
                .map(|entry| {
                    entry
                        .map(|ids| ids.iter().map(|id| id.to_string()).collect::<Vec<String>>())
                        .map_err(str::to_string)
                })
                .collect(),
            calls: AtomicUsize::new(0),
            contexts: Mutex::new(Vec::new()),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// 每次调用收到的上下文（按调用顺序）
    pub fn contexts(&self) -> Vec<ProposalContext> {
        self.contexts.lock().unwrap().clone()
    }
}

#[async_trait]
impl ProposalGenerator for ScriptedGenerator {
    async fn generate(
        &self,
        _pool: &[GarmentItem],
        _requirements: &OutfitRequirements,
        ctx: &ProposalContext,
    ) -> anyhow::Result<RawProposal> {
        let n = self.calls.fetch_add(1, Ordering::SeqCst);
        self.contexts.lock().unwrap().push(ctx.clone());
        let entry = &self.script[n.min(self.script.len() - 1)];
        match entry {
            Ok(ids) => Ok(raw(ids, format!("Look {}", n + 1))),
            Err(message) => Err(anyhow!(message.clone())),
        }
    }
}

// ==========================================
// LaneGenerator - 按通道编排行为
// ==========================================

#[derive(Debug, Clone)]
pub enum LaneBehavior {
    Fail,
    Panic,
    Hang,
    Ids(Vec<String>),
}

/// 默认行为: 从本通道候选池依次挑选首个上装 / 下装 / 鞋
pub struct LaneGenerator {
    behaviors: HashMap<usize, LaneBehavior>,
    first_pools: Mutex<HashMap<usize, Vec<String>>>,
}

impl LaneGenerator {
    pub fn new() -> Self {
        Self {
            behaviors: HashMap::new(),
            first_pools: Mutex::new(HashMap::new()),
        }
    }

    pub fn lane(mut self, lane: usize, behavior: LaneBehavior) -> Self {
        self.behaviors.insert(lane, behavior);
        self
    }

    /// 各通道首次调用时看到的候选池顺序
    pub fn pool_order(&self, lane: usize) -> Vec<String> {
        self.first_pools
            .lock()
            .unwrap()
            .get(&lane)
            .cloned()
            .unwrap_or_default()
    }

    fn pick_basics(pool: &[GarmentItem]) -> Vec<String> {
        [Category::Top, Category::Bottom, Category::Shoes]
            .iter()
            .filter_map(|category| pool.iter().find(|item| item.category == *category))
            .map(|item| item.id.clone())
            .collect()
    }
}

#[async_trait]
impl ProposalGenerator for LaneGenerator {
    async fn generate(
        &self,
        pool: &[GarmentItem],
        _requirements: &OutfitRequirements,
        ctx: &ProposalContext,
    ) -> anyhow::Result<RawProposal> {
        self.first_pools
            .lock()
            .unwrap()
            .entry(ctx.lane)
            .or_insert_with(|| pool.iter().map(|item| item.id.clone()).collect());

        let title = format!("Lane {} look", ctx.lane);
        match self.behaviors.get(&ctx.lane) {
            Some(LaneBehavior::Fail) => Err(anyhow!("generator unavailable for lane {}", ctx.lane)),
            Some(LaneBehavior::Panic) => panic!("generator crashed on lane {}", ctx.lane),
            Some(LaneBehavior::Hang) => {
                tokio::time::sleep(Duration::from_secs(3600)).await;
                Ok(raw(&Self::pick_basics(pool), title))
            }
            Some(LaneBehavior::Ids(ids)) => Ok(raw(ids, title)),
            None => Ok(raw(&Self::pick_basics(pool), title)),
        }
    }
}

// ==========================================
// 校验器桩
// ==========================================

/// 按脚本依次返回校验结论（末项重复）
pub struct ScriptedValidator {
    verdicts: Vec<ValidationVerdict>,
    calls: AtomicUsize,
}

impl ScriptedValidator {
    pub fn rejecting(feedback: &str) -> Self {
        Self::sequence(vec![(false, feedback)])
    }

    pub fn sequence(verdicts: Vec<(bool, &str)>) -> Self {
        Self {
            verdicts: verdicts
                .into_iter()
                .map(|(is_valid, feedback)| ValidationVerdict {
                    is_valid,
                    feedback: feedback.to_string(),
                })
                .collect(),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ValidatorService for ScriptedValidator {
    async fn validate(
        &self,
        _proposal: &OutfitProposal,
        _items: &[GarmentItem],
        _ctx: &ProposalContext,
    ) -> anyhow::Result<ValidationVerdict> {
        let n = self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.verdicts[n.min(self.verdicts.len() - 1)].clone())
    }
}

/// 始终不可用的校验器
pub struct UnreachableValidator;

#[async_trait]
impl ValidatorService for UnreachableValidator {
    async fn validate(
        &self,
        _proposal: &OutfitProposal,
        _items: &[GarmentItem],
        _ctx: &ProposalContext,
    ) -> anyhow::Result<ValidationVerdict> {
        Err(anyhow!("validator offline"))
    }
}

// ==========================================
// 排序器桩
// ==========================================

/// 返回固定 id 列表（可含未知/重复 id）
pub struct FixedRanker {
    ids: Vec<String>,
    calls: AtomicUsize,
}

impl FixedRanker {
    pub fn new(ids: &[&str]) -> Self {
        Self {
            ids: ids.iter().map(|id| id.to_string()).collect(),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl RankingService for FixedRanker {
    async fn rank(
        &self,
        _reference: &GarmentItem,
        _candidates: &[GarmentItem],
        _top_k: usize,
    ) -> anyhow::Result<Vec<RankedChoice>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self
            .ids
            .iter()
            .map(|id| RankedChoice {
                item_id: id.clone(),
                note: format!("pick {}", id),
            })
            .collect())
    }
}

/// 候选逆序返回
pub struct ReversingRanker;

#[async_trait]
impl RankingService for ReversingRanker {
    async fn rank(
        &self,
        _reference: &GarmentItem,
        candidates: &[GarmentItem],
        top_k: usize,
    ) -> anyhow::Result<Vec<RankedChoice>> {
        Ok(candidates
            .iter()
            .rev()
            .take(top_k)
            .map(|item| RankedChoice {
                item_id: item.id.clone(),
                note: String::new(),
            })
            .collect())
    }
}

pub struct FailingRanker;

#[async_trait]
impl RankingService for FailingRanker {
    async fn rank(
        &self,
        _reference: &GarmentItem,
        _candidates: &[GarmentItem],
        _top_k: usize,
    ) -> anyhow::Result<Vec<RankedChoice>> {
        Err(anyhow!("ranking backend unavailable"))
    }
}

pub struct SlowRanker {
    pub delay: Duration,
}

#[async_trait]
impl RankingService for SlowRanker {
    async fn rank(
        &self,
        _reference: &GarmentItem,
        candidates: &[GarmentItem],
        top_k: usize,
    ) -> anyhow::Result<Vec<RankedChoice>> {
        tokio::time::sleep(self.delay).await;
        Ok(candidates
            .iter()
            .rev()
            .take(top_k)
            .map(|item| RankedChoice {
                item_id: item.id.clone(),
                note: String::new(),
            })
            .collect())
    }
}

// ==========================================
// 补购顾问桩
// ==========================================

pub struct FailingAdvisor;

#[async_trait]
impl ShoppingAdvisor for FailingAdvisor {
    async fn advise(
        &self,
        _outfits: &[OutfitProposal],
        _pool: &[GarmentItem],
        _baseline: &[ShoppingSuggestion],
    ) -> anyhow::Result<Vec<ShoppingSuggestion>> {
        Err(anyhow!("advisor unavailable"))
    }
}
