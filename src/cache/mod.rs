// ==========================================
// 衣橱搭配引擎 - 缓存层
// ==========================================
// 职责: 衣橱分析结果缓存（仅分析路径使用, 生成路径不缓存）
// ==========================================

pub mod analysis_cache;

pub use analysis_cache::{analysis_cache_key, AnalysisCache, DEFAULT_MAX_ENTRIES};
