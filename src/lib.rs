// ==========================================
// 衣橱搭配引擎 - 核心库
// ==========================================
// 系统定位: 衣橱评分 + 搭配校验 + 多通道搭配生成编排
// 说明: 外部生成/校验/排序服务通过 trait 注入, 核心不依赖具体模型服务
// ==========================================

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 引擎层 - 评分与规则、生成编排
pub mod engine;

// 配置层 - 引擎配置
pub mod config;

// 缓存层 - 衣橱分析缓存
pub mod cache;

// 错误类型
pub mod error;

// 日志系统
pub mod logging;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::types::{
    Category, DisplayBucket, Formality, FormalityGroup, LayeringRole, Lifestyle, Season,
    WardrobeStyle,
};

// 领域实体
pub use domain::{
    GarmentItem, GenerationReport, GenerationRequest, OutfitProposal, OutfitRequirements,
    PairingBucket, RawGarmentRecord, ScoreResult,
};

// 引擎
pub use engine::{
    CompatibilityRules, GenerationOrchestrator, OutfitValidator, PairingRanker, ScoreEngine,
    StyleDetector,
};

// 配置 / 缓存 / 错误
pub use cache::AnalysisCache;
pub use config::{ConfigManager, EngineConfigReader};
pub use error::{EngineError, EngineResult};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "衣橱搭配引擎";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
        assert!(!APP_NAME.is_empty());
    }
}
