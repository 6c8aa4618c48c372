// ==========================================
// Mock 配置实现 - 用于集成测试
// ==========================================

use async_trait::async_trait;
use outfit_engine::config::EngineConfigReader;
use outfit_engine::error::EngineResult;

/// Mock 配置结构
#[derive(Debug, Clone)]
pub struct MockConfig {
    pub lane_count: usize,
    pub duplicate_retry_cap: u32,
    pub validation_retry_cap: u32,
    pub lane_timeout_ms: Option<u64>,
    pub min_pool_size: usize,
    pub shuffle_seed: Option<u64>,
    pub shopping_gap_enabled: bool,
    pub ranking_top_k: usize,
    pub ranking_timeout_ms: u64,
    pub analysis_cache_ttl_secs: u64,
}

impl MockConfig {
    /// 创建默认配置（固定种子, 便于断言）
    pub fn default() -> Self {
        Self {
            lane_count: 3,
            duplicate_retry_cap: 3,
            validation_retry_cap: 2,
            lane_timeout_ms: Some(5_000),
            min_pool_size: 2,
            shuffle_seed: Some(42),
            shopping_gap_enabled: true,
            ranking_top_k: 3,
            ranking_timeout_ms: 1_000,
            analysis_cache_ttl_secs: 3600,
        }
    }

    /// 单通道配置（便于统计生成器调用次数）
    pub fn single_lane() -> Self {
        let mut config = Self::default();
        config.lane_count = 1;
        config
    }

    pub fn with_lanes(lanes: usize) -> Self {
        let mut config = Self::default();
        config.lane_count = lanes;
        config
    }

    pub fn with_lane_timeout(timeout_ms: u64) -> Self {
        let mut config = Self::default();
        config.lane_timeout_ms = Some(timeout_ms);
        config
    }
}

#[async_trait]
impl EngineConfigReader for MockConfig {
    async fn get_lane_count(&self) -> EngineResult<usize> {
        Ok(self.lane_count)
    }

    async fn get_duplicate_retry_cap(&self) -> EngineResult<u32> {
        Ok(self.duplicate_retry_cap)
    }

    async fn get_validation_retry_cap(&self) -> EngineResult<u32> {
        Ok(self.validation_retry_cap)
    }

    async fn get_lane_timeout_ms(&self) -> EngineResult<Option<u64>> {
        Ok(self.lane_timeout_ms)
    }

    async fn get_min_pool_size(&self) -> EngineResult<usize> {
        Ok(self.min_pool_size)
    }

    async fn get_shuffle_seed(&self) -> EngineResult<Option<u64>> {
        Ok(self.shuffle_seed)
    }

    async fn get_shopping_gap_enabled(&self) -> EngineResult<bool> {
        Ok(self.shopping_gap_enabled)
    }

    async fn get_ranking_top_k(&self) -> EngineResult<usize> {
        Ok(self.ranking_top_k)
    }

    async fn get_ranking_timeout_ms(&self) -> EngineResult<u64> {
        Ok(self.ranking_timeout_ms)
    }

    async fn get_analysis_cache_ttl_secs(&self) -> EngineResult<u64> {
        Ok(self.analysis_cache_ttl_secs)
    }
}
