// ==========================================
// 衣橱搭配引擎 - 引擎层
// ==========================================
// 职责: 评分 / 兼容规则 / 搭配校验 / 多通道生成编排 / 单品配对
// 红线: 纯规则函数不做 I/O; 外部服务只经由 collaborators 中的 trait 接入
// 红线: 所有规则结论必须附带 reason
// ==========================================

pub mod collaborators;
pub mod compatibility;
pub mod lane;
pub mod orchestrator;
pub mod outfit_validator;
pub mod pairing;
pub mod response_parser;
pub mod scoring;
pub mod shopping_gap;
pub mod style_detection;

// 重导出核心引擎
pub use collaborators::{
    AcceptAllValidator, NoOpRankingService, ProposalGenerator, RankingService,
    ShoppingAdvisor, ValidatorService,
};
pub use compatibility::CompatibilityRules;
pub use lane::{rotate_pool, rotation_offset, LaneRunner};
pub use orchestrator::GenerationOrchestrator;
pub use outfit_validator::OutfitValidator;
pub use pairing::PairingRanker;
pub use response_parser::{extract_json_block, parse_proposal, parse_validation};
pub use scoring::ScoreEngine;
pub use shopping_gap::ShoppingGapAnalyzer;
pub use style_detection::StyleDetector;
