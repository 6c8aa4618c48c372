use crate::config::engine_config_trait::EngineConfigReader;
use crate::error::EngineResult;
use serde::{Deserialize, Serialize};

/// 单次生成编排的生效配置快照
///
/// 编排开始时从 EngineConfigReader 一次性解析, 运行期间不再读配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationSettings {
    /// 并发通道数 N
    pub lane_count: usize,

    /// 重复品类重试上限 cap₁
    pub duplicate_retry_cap: u32,

    /// 校验重试上限 cap₂
    pub validation_retry_cap: u32,

    /// 单通道超时（None = 不限时）
    #[serde(default)]
    pub lane_timeout_ms: Option<u64>,

    /// 过滤后候选池最小规模
    pub min_pool_size: usize,

    /// 洗牌种子（None = 系统熵）
    #[serde(default)]
    pub shuffle_seed: Option<u64>,

    /// 是否执行补购分析
    pub shopping_gap_enabled: bool,
}

impl GenerationSettings {
    /// 从配置读取器解析
    pub async fn resolve<C>(config: &C) -> EngineResult<Self>
    where
        C: EngineConfigReader + ?Sized,
    {
        Ok(Self {
            lane_count: config.get_lane_count().await?,
            duplicate_retry_cap: config.get_duplicate_retry_cap().await?,
            validation_retry_cap: config.get_validation_retry_cap().await?,
            lane_timeout_ms: config.get_lane_timeout_ms().await?,
            min_pool_size: config.get_min_pool_size().await?,
            shuffle_seed: config.get_shuffle_seed().await?,
            shopping_gap_enabled: config.get_shopping_gap_enabled().await?,
        })
    }

    /// 生成器调用失败时允许的总调用次数
    pub fn max_generation_calls(&self) -> u32 {
        self.duplicate_retry_cap
            .saturating_add(self.validation_retry_cap)
            .max(1)
    }
}

impl Default for GenerationSettings {
    fn default() -> Self {
        Self {
            lane_count: 3,
            duplicate_retry_cap: 3,
            validation_retry_cap: 2,
            lane_timeout_ms: Some(60_000),
            min_pool_size: 2,
            shuffle_seed: None,
            shopping_gap_enabled: true,
        }
    }
}
