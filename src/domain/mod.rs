// ==========================================
// 衣橱搭配引擎 - 领域模型层
// ==========================================
// 职责: 定义领域实体、类型
// 红线: 不含引擎逻辑, 不含外部调用
// ==========================================

pub mod garment;
pub mod generation;
pub mod outfit;
pub mod pairing;
pub mod score;
pub mod types;

// 重导出核心类型
pub use garment::{GarmentItem, RawGarmentRecord, StringOrList};
pub use generation::{
    GenerationReport, GenerationRequest, LaneOutcome, LaneStatus, ProposalContext,
    ShoppingPriority, ShoppingSuggestion,
};
pub use outfit::{
    CompatibilityVerdict, DuplicateReport, DuplicateViolation, OutfitProposal,
    OutfitRequirements, RawProposal, RequirementCheck, ValidationVerdict,
};
pub use pairing::{PairingBucket, RankedChoice, RankedPairing};
pub use score::{
    CategoryCoverage, CohesionDetails, CompletenessDetails, ScoreResult, SeasonalCoverage,
    SeasonalDistribution, StyleProfile, VersatilityDetails,
};
pub use types::{
    Category, DisplayBucket, Formality, FormalityGroup, LayeringRole, Lifestyle, Season,
    WardrobeStyle,
};
