// ==========================================
// 衣橱搭配引擎 - 单品配对排序
// ==========================================
// 职责: 找出与参照单品兼容的单品 → 展示分桶 → 分桶内排序
// 红线: 外部排序失败/超时/空结果 → 原序取前 K 件, 不影响整体请求
// 红线: 参照单品不出现在自己的结果中
// ==========================================

use crate::config::EngineConfigReader;
use crate::domain::garment::GarmentItem;
use crate::domain::pairing::{PairingBucket, RankedChoice, RankedPairing};
use crate::domain::types::{Category, DisplayBucket};
use crate::engine::collaborators::RankingService;
use crate::engine::compatibility::CompatibilityRules;
use crate::error::EngineResult;
use futures::future::join_all;
use std::collections::{BTreeMap, HashSet};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

const HEADWEAR_KEYWORDS: &[&str] = &["hat", "cap", "beanie", "beret", "fedora", "headband", "visor"];
const EYEWEAR_KEYWORDS: &[&str] = &["sunglasses", "glasses", "eyewear", "spectacles", "shades"];

// ==========================================
// PairingRanker - 配对排序器
// ==========================================
pub struct PairingRanker {
    ranker: Arc<dyn RankingService>,
    top_k: usize,
    timeout: Duration,
}

impl PairingRanker {
    pub fn new(ranker: Arc<dyn RankingService>, top_k: usize, timeout_ms: u64) -> Self {
        Self {
            ranker,
            top_k: top_k.max(1),
            timeout: Duration::from_millis(timeout_ms),
        }
    }

    /// 从配置创建（top-k 与排序超时）
    pub async fn from_config<C>(config: &C, ranker: Arc<dyn RankingService>) -> EngineResult<Self>
    where
        C: EngineConfigReader + ?Sized,
    {
        let top_k = config.get_ranking_top_k().await?;
        let timeout_ms = config.get_ranking_timeout_ms().await?;
        Ok(Self::new(ranker, top_k, timeout_ms))
    }

    /// 线性扫描衣橱, 保留与参照单品兼容的单品（原序）
    pub fn find_pairable_items(reference: &GarmentItem, wardrobe: &[GarmentItem]) -> Vec<GarmentItem> {
        wardrobe
            .iter()
            .filter(|item| item.id != reference.id)
            .filter(|item| CompatibilityRules::is_compatible(reference, item))
            .cloned()
            .collect()
    }

    /// 展示分桶
    ///
    /// # 规则
    /// - 配饰按子品类、再按名称关键词分入 headwear / eyewear, 否则归 accessories
    /// - 其余品类一一对应; 无对应分桶的品类返回 None
    pub fn display_bucket(item: &GarmentItem) -> Option<DisplayBucket> {
        match item.category {
            Category::Top => Some(DisplayBucket::Tops),
            Category::Bottom => Some(DisplayBucket::Bottoms),
            Category::Dress => Some(DisplayBucket::Dresses),
            Category::Outerwear => Some(DisplayBucket::Outerwear),
            Category::Shoes => Some(DisplayBucket::Shoes),
            Category::Accessory => Some(Self::accessory_bucket(item)),
            _ => None,
        }
    }

    fn accessory_bucket(item: &GarmentItem) -> DisplayBucket {
        let subcategory = item
            .subcategory
            .as_deref()
            .map(str::to_lowercase)
            .unwrap_or_default();
        let name = item.name.to_lowercase();

        for text in [&subcategory, &name] {
            if text.is_empty() {
                continue;
            }
            if EYEWEAR_KEYWORDS.iter().any(|kw| text.contains(kw)) {
                return DisplayBucket::Eyewear;
            }
            if HEADWEAR_KEYWORDS.iter().any(|kw| text.contains(kw)) {
                return DisplayBucket::Headwear;
            }
        }
        DisplayBucket::Accessories
    }

    /// 分桶（展示顺序, 桶内保持原序, 空桶不出现）
    pub fn group_pairable_by_category(
        items: Vec<GarmentItem>,
    ) -> BTreeMap<DisplayBucket, Vec<GarmentItem>> {
        let mut groups: BTreeMap<DisplayBucket, Vec<GarmentItem>> = BTreeMap::new();
        for item in items {
            if let Some(bucket) = Self::display_bucket(&item) {
                groups.entry(bucket).or_default().push(item);
            }
        }
        groups
    }

    /// 完整配对流程: 兼容筛选 → 分桶 → 排序
    pub async fn rank_pairings(
        &self,
        reference: &GarmentItem,
        wardrobe: &[GarmentItem],
    ) -> Vec<PairingBucket> {
        let pairable = Self::find_pairable_items(reference, wardrobe);
        debug!(
            reference = %reference.id,
            wardrobe = wardrobe.len(),
            pairable = pairable.len(),
            "兼容单品筛选完成"
        );
        let groups = Self::group_pairable_by_category(pairable);
        self.rank_buckets(reference, groups).await
    }

    /// 分桶排序（超过 top-k 的分桶并发调用外部排序）
    pub async fn rank_buckets(
        &self,
        reference: &GarmentItem,
        groups: BTreeMap<DisplayBucket, Vec<GarmentItem>>,
    ) -> Vec<PairingBucket> {
        let futures = groups
            .into_iter()
            .map(|(bucket, items)| self.rank_bucket(reference, bucket, items));
        join_all(futures).await
    }

    async fn rank_bucket(
        &self,
        reference: &GarmentItem,
        bucket: DisplayBucket,
        items: Vec<GarmentItem>,
    ) -> PairingBucket {
        let candidates = items.len();

        if candidates <= self.top_k {
            return PairingBucket {
                bucket,
                candidates,
                pairings: Self::passthrough(&items, self.top_k),
                ranked_externally: false,
            };
        }

        let choices = match tokio::time::timeout(
            self.timeout,
            self.ranker.rank(reference, &items, self.top_k),
        )
        .await
        {
            Ok(Ok(choices)) => choices,
            Ok(Err(e)) => {
                warn!(bucket = bucket.as_str(), error = %e, "外部排序失败, 使用原序");
                Vec::new()
            }
            Err(_) => {
                warn!(
                    bucket = bucket.as_str(),
                    timeout_ms = self.timeout.as_millis() as u64,
                    "外部排序超时, 使用原序"
                );
                Vec::new()
            }
        };

        let pairings = self.resolve_choices(&items, choices);
        if pairings.is_empty() {
            return PairingBucket {
                bucket,
                candidates,
                pairings: Self::passthrough(&items, self.top_k),
                ranked_externally: false,
            };
        }

        PairingBucket {
            bucket,
            candidates,
            pairings,
            ranked_externally: true,
        }
    }

    /// 排序结果落地: 丢弃桶外 id 与重复 id, 截断到 top-k
    fn resolve_choices(&self, items: &[GarmentItem], choices: Vec<RankedChoice>) -> Vec<RankedPairing> {
        let mut seen: HashSet<String> = HashSet::new();
        let mut pairings = Vec::new();

        for choice in choices {
            if pairings.len() >= self.top_k {
                break;
            }
            let Some(item) = items.iter().find(|i| i.id == choice.item_id) else {
                debug!(item_id = %choice.item_id, "排序结果含未知 id, 已丢弃");
                continue;
            };
            if !seen.insert(item.id.clone()) {
                continue;
            }
            pairings.push(RankedPairing {
                rank: pairings.len() + 1,
                item: item.clone(),
                note: choice.note,
            });
        }
        pairings
    }

    fn passthrough(items: &[GarmentItem], top_k: usize) -> Vec<RankedPairing> {
        items
            .iter()
            .take(top_k)
            .enumerate()
            .map(|(idx, item)| RankedPairing {
                rank: idx + 1,
                item: item.clone(),
                note: String::new(),
            })
            .collect()
    }
}
