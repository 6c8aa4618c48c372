// ==========================================
// 衣橱搭配引擎 - 引擎配置读取 Trait
// ==========================================
// 职责: 定义编排/排序/缓存所需的配置读取接口（不包含实现）
// 红线: 不包含配置写入、不包含业务逻辑
// ==========================================

use crate::error::EngineResult;
use async_trait::async_trait;

// ==========================================
// EngineConfigReader Trait
// ==========================================
// 实现者: ConfigManager（内存 key-value + JSON 文件 + 环境变量覆写）
#[async_trait]
pub trait EngineConfigReader: Send + Sync {
    // ===== 生成编排配置 =====

    /// 并发生成通道数
    ///
    /// # 默认值
    /// - 3
    async fn get_lane_count(&self) -> EngineResult<usize>;

    /// 重复品类重试上限（cap₁）
    ///
    /// # 默认值
    /// - 3
    ///
    /// # 用途
    /// - 达到上限后改走确定性去重兜底
    async fn get_duplicate_retry_cap(&self) -> EngineResult<u32>;

    /// 校验重试上限（cap₂）
    ///
    /// # 默认值
    /// - 2
    async fn get_validation_retry_cap(&self) -> EngineResult<u32>;

    /// 单通道超时（毫秒）
    ///
    /// # 返回
    /// - Some(ms): 启用超时
    /// - None: 不限时（配置为 0）
    ///
    /// # 默认值
    /// - 60000
    async fn get_lane_timeout_ms(&self) -> EngineResult<Option<u64>>;

    /// 候选池最小规模（过滤后低于此值直接报 InsufficientInput）
    ///
    /// # 默认值
    /// - 2
    async fn get_min_pool_size(&self) -> EngineResult<usize>;

    /// 洗牌随机种子
    ///
    /// # 返回
    /// - Some(seed): 可复现洗牌
    /// - None: 使用系统熵
    async fn get_shuffle_seed(&self) -> EngineResult<Option<u64>>;

    /// 是否在生成后执行补购分析
    ///
    /// # 默认值
    /// - true
    async fn get_shopping_gap_enabled(&self) -> EngineResult<bool>;

    // ===== 配对排序配置 =====

    /// 每个分桶保留的条目数
    ///
    /// # 默认值
    /// - 3
    async fn get_ranking_top_k(&self) -> EngineResult<usize>;

    /// 外部排序调用超时（毫秒）
    ///
    /// # 默认值
    /// - 15000
    async fn get_ranking_timeout_ms(&self) -> EngineResult<u64>;

    // ===== 分析缓存配置 =====

    /// 分析结果缓存 TTL（秒）
    ///
    /// # 默认值
    /// - 3600
    async fn get_analysis_cache_ttl_secs(&self) -> EngineResult<u64>;
}
