// ==========================================
// 衣橱搭配引擎 - 配置管理器
// ==========================================
// 职责: 配置加载、查询、覆写管理
// 存储: 内存 key-value（可由 JSON 文件加载, 环境变量覆写）
// 优先级: 环境变量 > set_value/文件 > 默认值
// ==========================================

use crate::config::engine_config_trait::EngineConfigReader;
use crate::error::{EngineError, EngineResult};
use async_trait::async_trait;
use serde_json::Value;
use std::collections::{BTreeMap, HashMap};
use std::path::Path;
use std::str::FromStr;
use std::sync::RwLock;

/// 环境变量前缀: OUTFIT_ENGINE_<KEY 大写>
pub const ENV_PREFIX: &str = "OUTFIT_ENGINE_";

// ==========================================
// ConfigManager - 配置管理器
// ==========================================
#[derive(Debug, Default)]
pub struct ConfigManager {
    values: RwLock<HashMap<String, String>>,
}

impl ConfigManager {
    /// 创建空配置（全部走默认值）
    pub fn new() -> Self {
        Self::default()
    }

    /// 从 JSON 对象文件加载
    ///
    /// # 参数
    /// - path: JSON 文件路径, 顶层必须为对象
    ///
    /// # 说明
    /// 数值/布尔值会转为字符串存储, null 视为未配置
    pub fn from_json_file(path: impl AsRef<Path>) -> EngineResult<Self> {
        let raw = std::fs::read_to_string(path.as_ref())?;
        let value: Value = serde_json::from_str(&raw)?;

        let object = value.as_object().ok_or_else(|| EngineError::Config {
            key: "*".to_string(),
            message: format!("配置文件顶层必须为 JSON 对象: {}", path.as_ref().display()),
        })?;

        let mut values = HashMap::new();
        for (key, v) in object {
            let text = match v {
                Value::Null => continue,
                Value::String(s) => s.clone(),
                other => other.to_string(),
            };
            values.insert(key.clone(), text);
        }

        tracing::debug!(
            path = %path.as_ref().display(),
            keys = values.len(),
            "配置文件加载完成"
        );

        Ok(Self {
            values: RwLock::new(values),
        })
    }

    /// 应用环境变量覆写
    ///
    /// # 返回
    /// - 被覆写的配置项数量
    pub fn apply_env_overrides(&self) -> EngineResult<usize> {
        let mut count = 0;
        for key in config_keys::ALL {
            let env_key = format!("{}{}", ENV_PREFIX, key.to_uppercase());
            if let Ok(value) = std::env::var(&env_key) {
                self.set_value(key, &value)?;
                count += 1;
            }
        }
        Ok(count)
    }

    /// 写入配置值
    pub fn set_value(&self, key: &str, value: &str) -> EngineResult<()> {
        let mut values = self.values.write().map_err(|e| EngineError::Config {
            key: key.to_string(),
            message: format!("锁获取失败: {}", e),
        })?;
        values.insert(key.to_string(), value.trim().to_string());
        Ok(())
    }

    /// 读取配置值
    ///
    /// # 返回
    /// - Some(String): 配置值
    /// - None: 配置不存在
    fn get_config_value(&self, key: &str) -> EngineResult<Option<String>> {
        let values = self.values.read().map_err(|e| EngineError::Config {
            key: key.to_string(),
            message: format!("锁获取失败: {}", e),
        })?;
        Ok(values.get(key).cloned())
    }

    /// 读取并解析配置值, 缺失时返回默认值
    ///
    /// # 红线
    /// - 格式错误不静默回退, 返回 EngineError::Config
    fn parse_or_default<T>(&self, key: &str, default: T) -> EngineResult<T>
    where
        T: FromStr,
        T::Err: std::fmt::Display,
    {
        match self.get_config_value(key)? {
            None => Ok(default),
            Some(raw) => raw.parse::<T>().map_err(|e| EngineError::Config {
                key: key.to_string(),
                message: format!("无法解析 '{}': {}", raw, e),
            }),
        }
    }

    /// 获取所有配置的快照（JSON格式, 键有序）
    ///
    /// # 用途
    /// - 生成报告/排障时记录生效配置
    pub fn get_config_snapshot(&self) -> EngineResult<String> {
        let values = self.values.read().map_err(|e| EngineError::Config {
            key: "*".to_string(),
            message: format!("锁获取失败: {}", e),
        })?;
        let ordered: BTreeMap<&String, &String> = values.iter().collect();
        Ok(serde_json::to_string(&ordered)?)
    }
}

// ==========================================
// EngineConfigReader Trait 实现
// ==========================================
#[async_trait]
impl EngineConfigReader for ConfigManager {
    // ===== 生成编排配置 =====

    async fn get_lane_count(&self) -> EngineResult<usize> {
        let lanes = self.parse_or_default(config_keys::LANE_COUNT, 3usize)?;
        if lanes == 0 {
            return Err(EngineError::Config {
                key: config_keys::LANE_COUNT.to_string(),
                message: "通道数必须 ≥ 1".to_string(),
            });
        }
        Ok(lanes)
    }

    async fn get_duplicate_retry_cap(&self) -> EngineResult<u32> {
        self.parse_or_default(config_keys::DUPLICATE_RETRY_CAP, 3u32)
    }

    async fn get_validation_retry_cap(&self) -> EngineResult<u32> {
        self.parse_or_default(config_keys::VALIDATION_RETRY_CAP, 2u32)
    }

    async fn get_lane_timeout_ms(&self) -> EngineResult<Option<u64>> {
        let ms = self.parse_or_default(config_keys::LANE_TIMEOUT_MS, 60_000u64)?;
        Ok(if ms == 0 { None } else { Some(ms) })
    }

    async fn get_min_pool_size(&self) -> EngineResult<usize> {
        self.parse_or_default(config_keys::MIN_POOL_SIZE, 2usize)
    }

    async fn get_shuffle_seed(&self) -> EngineResult<Option<u64>> {
        match self.get_config_value(config_keys::SHUFFLE_SEED)? {
            None => Ok(None),
            Some(raw) if raw.is_empty() => Ok(None),
            Some(raw) => raw.parse::<u64>().map(Some).map_err(|e| EngineError::Config {
                key: config_keys::SHUFFLE_SEED.to_string(),
                message: format!("无法解析 '{}': {}", raw, e),
            }),
        }
    }

    async fn get_shopping_gap_enabled(&self) -> EngineResult<bool> {
        self.parse_or_default(config_keys::SHOPPING_GAP_ENABLED, true)
    }

    // ===== 配对排序配置 =====

    async fn get_ranking_top_k(&self) -> EngineResult<usize> {
        self.parse_or_default(config_keys::RANKING_TOP_K, 3usize)
    }

    async fn get_ranking_timeout_ms(&self) -> EngineResult<u64> {
        self.parse_or_default(config_keys::RANKING_TIMEOUT_MS, 15_000u64)
    }

    // ===== 分析缓存配置 =====

    async fn get_analysis_cache_ttl_secs(&self) -> EngineResult<u64> {
        self.parse_or_default(config_keys::ANALYSIS_CACHE_TTL_SECS, 3600u64)
    }
}

// ==========================================
// 配置键常量
// ==========================================
pub mod config_keys {
    // 生成编排
    pub const LANE_COUNT: &str = "lane_count";
    pub const DUPLICATE_RETRY_CAP: &str = "duplicate_retry_cap";
    pub const VALIDATION_RETRY_CAP: &str = "validation_retry_cap";
    pub const LANE_TIMEOUT_MS: &str = "lane_timeout_ms";
    pub const MIN_POOL_SIZE: &str = "min_pool_size";
    pub const SHUFFLE_SEED: &str = "shuffle_seed";
    pub const SHOPPING_GAP_ENABLED: &str = "shopping_gap_enabled";

    // 配对排序
    pub const RANKING_TOP_K: &str = "ranking_top_k";
    pub const RANKING_TIMEOUT_MS: &str = "ranking_timeout_ms";

    // 分析缓存
    pub const ANALYSIS_CACHE_TTL_SECS: &str = "analysis_cache_ttl_secs";

    pub const ALL: [&str; 10] = [
        LANE_COUNT,
        DUPLICATE_RETRY_CAP,
        VALIDATION_RETRY_CAP,
        LANE_TIMEOUT_MS,
        MIN_POOL_SIZE,
        SHUFFLE_SEED,
        SHOPPING_GAP_ENABLED,
        RANKING_TOP_K,
        RANKING_TIMEOUT_MS,
        ANALYSIS_CACHE_TTL_SECS,
    ];
}
