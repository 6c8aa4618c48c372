// ==========================================
// 衣橱搭配引擎 - 配置层
// ==========================================
// 职责: 引擎配置读取与管理, 支持文件加载与环境变量覆写
// ==========================================

pub mod config_manager;
pub mod engine_config_trait;
pub mod generation_settings;

// 重导出核心配置管理器
pub use config_manager::{config_keys, ConfigManager, ENV_PREFIX};
pub use engine_config_trait::EngineConfigReader;
pub use generation_settings::GenerationSettings;
