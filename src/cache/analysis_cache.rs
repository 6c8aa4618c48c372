// ==========================================
// 衣橱搭配引擎 - 衣橱分析缓存
// ==========================================
// 键: SHA-256(规范化单品子集 + 排序后的关注维度) 的十六进制串
// 值: ScoreResult, 写入后固定 TTL 过期
// 红线: 同一衣橱内容（与单品顺序无关）必须得到同一键
// ==========================================

use crate::config::EngineConfigReader;
use crate::domain::garment::GarmentItem;
use crate::domain::score::ScoreResult;
use crate::domain::types::{Category, Formality, Season};
use crate::engine::scoring::ScoreEngine;
use crate::error::{EngineError, EngineResult};
use moka::sync::Cache;
use serde::Serialize;
use serde_json::Value;
use sha2::{Digest, Sha256};
use std::time::Duration;
use tracing::debug;

pub const DEFAULT_MAX_ENTRIES: u64 = 1_000;

/// 参与缓存键计算的单品字段子集
#[derive(Serialize)]
struct KeyItem<'a> {
    id: &'a str,
    name: &'a str,
    category: Category,
    subcategory: Option<&'a str>,
    colors: Vec<&'a str>,
    seasons: Vec<Season>,
    all_season: bool,
    formality: Option<Formality>,
    versatility: Option<&'a str>,
    style_tags: Vec<String>,
    occasions: Vec<String>,
}

#[derive(Serialize)]
struct KeyPayload<'a> {
    items: Vec<KeyItem<'a>>,
    focus_areas: Vec<String>,
}

/// 计算分析缓存键
///
/// # 规则
/// - 覆盖评分读取的全部单品字段（名称、子类、万能度、场合等）
/// - 单品按 id 排序; 颜色/季节/风格标签/场合各自排序
/// - 关注维度去空白、小写、排序去重
/// - 规范化 JSON（键有序）后取 SHA-256
pub fn analysis_cache_key(items: &[GarmentItem], focus_areas: &[String]) -> EngineResult<String> {
    let mut key_items: Vec<KeyItem<'_>> = items
        .iter()
        .map(|item| {
            let mut colors: Vec<&str> = item.colors.iter().map(|c| c.as_str()).collect();
            colors.sort_unstable();
            let mut seasons = item.seasons.clone();
            seasons.sort();
            seasons.dedup();
            let mut style_tags: Vec<String> = item
                .style_tags
                .iter()
                .map(|t| t.trim().to_lowercase())
                .collect();
            style_tags.sort();
            let mut occasions: Vec<String> = item
                .occasions
                .iter()
                .map(|o| o.trim().to_lowercase())
                .filter(|o| !o.is_empty())
                .collect();
            occasions.sort();
            occasions.dedup();
            KeyItem {
                id: item.id.as_str(),
                name: item.name.as_str(),
                category: item.category,
                subcategory: item.subcategory.as_deref(),
                colors,
                seasons,
                all_season: item.all_season,
                formality: item.formality,
                versatility: item.versatility.as_deref(),
                style_tags,
                occasions,
            }
        })
        .collect();
    key_items.sort_by(|a, b| a.id.cmp(b.id));

    let mut focus: Vec<String> = focus_areas
        .iter()
        .map(|f| f.trim().to_lowercase())
        .filter(|f| !f.is_empty())
        .collect();
    focus.sort();
    focus.dedup();

    let payload = KeyPayload {
        items: key_items,
        focus_areas: focus,
    };

    let value = serde_json::to_value(&payload)
        .map_err(|e| EngineError::Cache(format!("缓存键序列化失败: {}", e)))?;
    let canonical = serde_json::to_string(&sort_value(&value))
        .map_err(|e| EngineError::Cache(format!("缓存键序列化失败: {}", e)))?;

    let mut hasher = Sha256::new();
    hasher.update(canonical.as_bytes());
    Ok(hex::encode(hasher.finalize()))
}

fn sort_value(value: &Value) -> Value {
    match value {
        Value::Object(map) => {
            let mut entries: Vec<_> = map.iter().collect();
            entries.sort_by(|a, b| a.0.cmp(b.0));
            Value::Object(
                entries
                    .into_iter()
                    .map(|(k, v)| (k.clone(), sort_value(v)))
                    .collect(),
            )
        }
        Value::Array(values) => Value::Array(values.iter().map(sort_value).collect()),
        other => other.clone(),
    }
}

// ==========================================
// AnalysisCache - 分析结果缓存
// ==========================================
pub struct AnalysisCache {
    cache: Cache<String, ScoreResult>,
    engine: ScoreEngine,
}

impl AnalysisCache {
    /// 创建缓存
    ///
    /// # 参数
    /// - ttl_secs: 写入后过期时间
    /// - max_entries: 最大条目数
    pub fn new(ttl_secs: u64, max_entries: u64) -> Self {
        let cache = Cache::builder()
            .max_capacity(max_entries)
            .time_to_live(Duration::from_secs(ttl_secs))
            .build();
        Self {
            cache,
            engine: ScoreEngine::new(),
        }
    }

    /// 按配置的 TTL 创建
    pub async fn from_config<C>(config: &C, max_entries: u64) -> EngineResult<Self>
    where
        C: EngineConfigReader + ?Sized,
    {
        let ttl_secs = config.get_analysis_cache_ttl_secs().await?;
        Ok(Self::new(ttl_secs, max_entries))
    }

    /// 命中返回缓存结果, 未命中返回 None
    pub fn get(&self, key: &str) -> Option<ScoreResult> {
        self.cache.get(key)
    }

    pub fn insert(&self, key: String, result: ScoreResult) {
        self.cache.insert(key, result);
    }

    /// 读缓存, 未命中则计算全部评分并写入
    pub fn get_or_compute(
        &self,
        items: &[GarmentItem],
        focus_areas: &[String],
    ) -> EngineResult<ScoreResult> {
        let key = analysis_cache_key(items, focus_areas)?;

        if let Some(hit) = self.cache.get(&key) {
            debug!(key = %&key[..12], "分析缓存命中");
            return Ok(hit);
        }

        let result = self.engine.calculate_all_scores(items);
        debug!(key = %&key[..12], items = items.len(), "分析缓存未命中, 已写入");
        self.cache.insert(key, result.clone());
        Ok(result)
    }

    pub fn len(&self) -> u64 {
        self.cache.entry_count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        self.cache.invalidate_all();
    }
}
