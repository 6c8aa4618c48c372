// ==========================================
// 衣橱搭配引擎 - 单品配对结果
// ==========================================

use crate::domain::garment::GarmentItem;
use crate::domain::types::DisplayBucket;
use serde::{Deserialize, Serialize};

/// 排序服务返回的单条结果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedChoice {
    #[serde(alias = "item_id", alias = "id")]
    pub item_id: String,
    #[serde(default, alias = "styling_note")]
    pub note: String,
}

/// 分桶内的排名条目
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedPairing {
    pub rank: usize,
    pub item: GarmentItem,
    pub note: String,
}

/// 展示分桶
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PairingBucket {
    pub bucket: DisplayBucket,
    pub candidates: usize,
    pub pairings: Vec<RankedPairing>,
    /// true = 走了外部排序; false = 原序截断
    pub ranked_externally: bool,
}
