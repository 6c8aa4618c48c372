// ==========================================
// 衣橱搭配引擎 - 单品实体
// ==========================================
// 职责: 定义规范化单品 GarmentItem 与边缘原始记录 RawGarmentRecord
// 红线: 引擎内部只处理 GarmentItem, 原始格式的适配只在边缘完成
// ==========================================

use crate::domain::types::{Category, Formality, LayeringRole, Season};
use serde::{Deserialize, Serialize};

// ==========================================
// GarmentItem - 规范化单品
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GarmentItem {
    // ===== 身份 =====
    pub id: String,
    pub name: String,

    // ===== 品类 =====
    pub category: Category,
    pub subcategory: Option<String>,

    // ===== 颜色（有序, 首个为主色, 已小写）=====
    pub colors: Vec<String>,

    // ===== 季节 =====
    pub seasons: Vec<Season>,
    pub all_season: bool,

    // ===== 正式度与百搭度 =====
    pub formality: Option<Formality>,
    pub versatility: Option<String>, // high / moderate / low

    // ===== 风格与场合 =====
    pub style_tags: Vec<String>,
    pub occasions: Vec<String>,
    pub layering_role: Option<LayeringRole>,

    // ===== 搭配提示 =====
    pub best_paired_with: Vec<String>,
    pub avoid_combinations: Vec<String>,
    pub styling_notes: Option<String>,
}

impl GarmentItem {
    /// 创建最小单品（其余字段为空）
    pub fn new(id: impl Into<String>, name: impl Into<String>, category: Category) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category,
            subcategory: None,
            colors: Vec::new(),
            seasons: Vec::new(),
            all_season: false,
            formality: None,
            versatility: None,
            style_tags: Vec::new(),
            occasions: Vec::new(),
            layering_role: None,
            best_paired_with: Vec::new(),
            avoid_combinations: Vec::new(),
            styling_notes: None,
        }
    }

    /// 生效季节
    ///
    /// # 规则
    /// - all_season 或未标注季节 → 四季
    /// - 否则 → 标注的季节（去重, 保持顺序）
    pub fn effective_seasons(&self) -> Vec<Season> {
        if self.all_season || self.seasons.is_empty() {
            return Season::ALL.to_vec();
        }
        let mut seasons = Vec::with_capacity(self.seasons.len());
        for season in &self.seasons {
            if !seasons.contains(season) {
                seasons.push(*season);
            }
        }
        seasons
    }

    /// 名称/子品类/风格标签拼接后的小写检索文本
    pub fn search_text(&self) -> String {
        let mut text = self.name.to_lowercase();
        if let Some(sub) = &self.subcategory {
            text.push(' ');
            text.push_str(&sub.to_lowercase());
        }
        for tag in &self.style_tags {
            text.push(' ');
            text.push_str(&tag.to_lowercase());
        }
        text
    }

    /// 从原始记录适配
    ///
    /// # 规则
    /// - category: 同义词归一化, 未识别 → Other
    /// - colors: 去空白并小写
    /// - season: 识别 all-season 标记, 未识别的季节丢弃
    /// - formality / layeringRole: 未识别 → None
    pub fn from_raw(raw: RawGarmentRecord) -> Self {
        let category = raw
            .category
            .as_deref()
            .and_then(Category::normalize)
            .unwrap_or(Category::Other);

        let colors = raw
            .colors
            .into_vec()
            .into_iter()
            .map(|c| c.trim().to_lowercase())
            .filter(|c| !c.is_empty())
            .collect();

        let mut seasons = Vec::new();
        let mut all_season = false;
        for value in raw.season.into_vec() {
            if Season::is_all_season_marker(&value) {
                all_season = true;
            } else if let Some(season) = Season::parse(&value) {
                if !seasons.contains(&season) {
                    seasons.push(season);
                }
            }
        }

        Self {
            id: raw.id,
            name: raw.name,
            category,
            subcategory: raw.subcategory.filter(|s| !s.trim().is_empty()),
            colors,
            seasons,
            all_season,
            formality: raw.formality.as_deref().and_then(Formality::parse),
            versatility: raw
                .styling_versatility
                .map(|v| v.trim().to_lowercase())
                .filter(|v| !v.is_empty()),
            style_tags: raw.style_tags.into_vec(),
            occasions: raw.occasions.into_vec(),
            layering_role: raw.layering_role.as_deref().and_then(LayeringRole::parse),
            best_paired_with: raw.best_paired_with.into_vec(),
            avoid_combinations: raw.avoid_combinations.into_vec(),
            styling_notes: raw.styling_notes,
        }
    }
}

// ==========================================
// RawGarmentRecord - 边缘原始记录
// ==========================================
// 外部 JSON（camelCase）, 除 id/name 外均可缺失
// 列表字段兼容单个字符串
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawGarmentRecord {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub subcategory: Option<String>,
    #[serde(default)]
    pub colors: StringOrList,
    #[serde(default)]
    pub season: StringOrList,
    #[serde(default)]
    pub formality: Option<String>,
    #[serde(default, alias = "versatility")]
    pub styling_versatility: Option<String>,
    #[serde(default, alias = "style_tags")]
    pub style_tags: StringOrList,
    #[serde(default)]
    pub occasions: StringOrList,
    #[serde(default)]
    pub layering_role: Option<String>,
    #[serde(default)]
    pub best_paired_with: StringOrList,
    #[serde(default)]
    pub avoid_combinations: StringOrList,
    #[serde(default)]
    pub styling_notes: Option<String>,
}

/// 字符串或字符串列表（null 视为空）
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StringOrList {
    #[default]
    Empty,
    One(String),
    Many(Vec<String>),
}

impl StringOrList {
    pub fn into_vec(self) -> Vec<String> {
        match self {
            StringOrList::Empty => Vec::new(),
            StringOrList::One(value) => vec![value],
            StringOrList::Many(values) => values,
        }
    }
}
