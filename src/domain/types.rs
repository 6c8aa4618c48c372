// ==========================================
// 衣橱搭配引擎 - 领域类型定义
// ==========================================
// 职责: 定义品类/正式度/季节/叠穿角色等封闭枚举
// 红线: 自由文本必须在进入规则引擎前完成归一化
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// 服装品类 (Category)
// ==========================================
// 封闭枚举: 未识别的品类统一落入 Other, 且不参与任何兼容规则
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Top,
    Bottom,
    Outerwear,
    Dress,
    Shoes,
    Accessory,
    Underwear,
    Swimwear,
    Activewear,
    Sleepwear,
    Bag,
    Jewelry,
    Other,
}

impl Category {
    pub const ALL: [Category; 13] = [
        Category::Top,
        Category::Bottom,
        Category::Outerwear,
        Category::Dress,
        Category::Shoes,
        Category::Accessory,
        Category::Underwear,
        Category::Swimwear,
        Category::Activewear,
        Category::Sleepwear,
        Category::Bag,
        Category::Jewelry,
        Category::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Top => "top",
            Category::Bottom => "bottom",
            Category::Outerwear => "outerwear",
            Category::Dress => "dress",
            Category::Shoes => "shoes",
            Category::Accessory => "accessory",
            Category::Underwear => "underwear",
            Category::Swimwear => "swimwear",
            Category::Activewear => "activewear",
            Category::Sleepwear => "sleepwear",
            Category::Bag => "bag",
            Category::Jewelry => "jewelry",
            Category::Other => "other",
        }
    }

    /// 自由文本品类归一化
    ///
    /// # 规则
    /// - 先匹配标准品类名
    /// - 再匹配常见同义词（t-shirt → top, jeans → bottom ...）
    /// - 均未命中 → None（调用方决定是否落入 Other）
    pub fn normalize(raw: &str) -> Option<Category> {
        let key = raw.trim().to_lowercase().replace(['_', ' '], "-");
        if let Some(category) = Self::lookup(&key) {
            return Some(category);
        }
        // 复数形式: 去掉一个结尾 s 后重试
        key.strip_suffix('s').and_then(Self::lookup)
    }

    fn lookup(key: &str) -> Option<Category> {
        let category = match key {
            // 标准名
            "top" => Category::Top,
            "bottom" => Category::Bottom,
            "outerwear" => Category::Outerwear,
            "dress" | "dresses" => Category::Dress,
            "shoes" | "shoe" => Category::Shoes,
            "accessory" | "accessories" => Category::Accessory,
            "underwear" => Category::Underwear,
            "swimwear" => Category::Swimwear,
            "activewear" => Category::Activewear,
            "sleepwear" => Category::Sleepwear,
            "bag" => Category::Bag,
            "jewelry" | "jewellery" => Category::Jewelry,
            "other" => Category::Other,

            // 上装
            "t-shirt" | "tshirt" | "tee" | "shirt" | "blouse" | "sweater" | "tank"
            | "tank-top" | "polo" | "hoodie" | "sweatshirt" | "tunic" | "camisole"
            | "crop-top" | "knitwear" | "turtleneck" => Category::Top,

            // 下装
            "jeans" | "pants" | "trousers" | "skirt" | "shorts" | "leggings" | "chinos"
            | "joggers" | "culottes" => Category::Bottom,

            // 外套
            "jacket" | "coat" | "blazer" | "cardigan" | "parka" | "trench" | "vest"
            | "gilet" | "windbreaker" | "poncho" => Category::Outerwear,

            // 连体
            "romper" | "jumpsuit" | "gown" | "sundress" | "playsuit" => Category::Dress,

            // 鞋履
            "sneaker" | "boot" | "heel" | "sandal" | "loafer" | "flats" | "pump"
            | "trainer" | "footwear" | "mule" | "slipper" => Category::Shoes,

            // 配饰
            "hat" | "cap" | "beanie" | "scarf" | "belt" | "sunglasses" | "glasses"
            | "glove" | "tie" | "watch" | "headband" | "eyewear" => Category::Accessory,

            // 其它专用品类
            "handbag" | "purse" | "backpack" | "tote" | "clutch" => Category::Bag,
            "necklace" | "bracelet" | "earring" | "ring" => Category::Jewelry,
            "bikini" | "swimsuit" | "trunk" => Category::Swimwear,
            "pajama" | "pyjama" | "nightgown" | "robe" => Category::Sleepwear,
            "sportswear" | "gymwear" | "sports-bra" => Category::Activewear,
            "bra" | "brief" | "boxer" | "lingerie" | "sock" => Category::Underwear,

            _ => return None,
        };
        Some(category)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ==========================================
// 正式度 (Formality)
// ==========================================
// 封闭枚举, 序列化格式: kebab-case
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Formality {
    Athletic,
    Loungewear,
    VeryCasual,
    Casual,
    Relaxed,
    Sporty,
    Informal,
    Athleisure,
    SmartCasual,
    BusinessCasual,
    SemiFormal,
    Business,
    Professional,
    BusinessFormal,
    Cocktail,
    Formal,
    BlackTie,
}

impl Formality {
    pub fn as_str(&self) -> &'static str {
        match self {
            Formality::Athletic => "athletic",
            Formality::Loungewear => "loungewear",
            Formality::VeryCasual => "very-casual",
            Formality::Casual => "casual",
            Formality::Relaxed => "relaxed",
            Formality::Sporty => "sporty",
            Formality::Informal => "informal",
            Formality::Athleisure => "athleisure",
            Formality::SmartCasual => "smart-casual",
            Formality::BusinessCasual => "business-casual",
            Formality::SemiFormal => "semi-formal",
            Formality::Business => "business",
            Formality::Professional => "professional",
            Formality::BusinessFormal => "business-formal",
            Formality::Cocktail => "cocktail",
            Formality::Formal => "formal",
            Formality::BlackTie => "black-tie",
        }
    }

    /// 解析正式度文本（大小写/连字符/下划线/空格不敏感）
    pub fn parse(raw: &str) -> Option<Formality> {
        let key = raw
            .trim()
            .to_lowercase()
            .replace(['_', '-'], " ")
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ");

        let formality = match key.as_str() {
            "athletic" => Formality::Athletic,
            "loungewear" | "lounge" => Formality::Loungewear,
            "very casual" => Formality::VeryCasual,
            "casual" => Formality::Casual,
            "relaxed" => Formality::Relaxed,
            "sporty" => Formality::Sporty,
            "informal" => Formality::Informal,
            "athleisure" => Formality::Athleisure,
            "smart casual" => Formality::SmartCasual,
            "business casual" => Formality::BusinessCasual,
            "semi formal" => Formality::SemiFormal,
            "business" => Formality::Business,
            "professional" => Formality::Professional,
            "business formal" => Formality::BusinessFormal,
            "cocktail" => Formality::Cocktail,
            "formal" => Formality::Formal,
            "black tie" => Formality::BlackTie,
            _ => return None,
        };
        Some(formality)
    }

    /// 正式度邻接分组
    ///
    /// # 规则
    /// - casual: casual/very casual/athleisure/relaxed/sporty/informal/loungewear
    /// - smart-casual: smart-casual/business casual/semi-formal
    /// - formal: formal/business/professional/black tie/cocktail/business-formal
    /// - athletic 不属于任何分组（宽松放行）
    pub fn group(&self) -> Option<FormalityGroup> {
        match self {
            Formality::Casual
            | Formality::VeryCasual
            | Formality::Athleisure
            | Formality::Relaxed
            | Formality::Sporty
            | Formality::Informal
            | Formality::Loungewear => Some(FormalityGroup::Casual),
            Formality::SmartCasual | Formality::BusinessCasual | Formality::SemiFormal => {
                Some(FormalityGroup::SmartCasual)
            }
            Formality::Formal
            | Formality::Business
            | Formality::Professional
            | Formality::BlackTie
            | Formality::Cocktail
            | Formality::BusinessFormal => Some(FormalityGroup::Formal),
            Formality::Athletic => None,
        }
    }
}

impl fmt::Display for Formality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ==========================================
// 正式度分组 (Formality Group)
// ==========================================
// 顺序: Casual < SmartCasual < Formal, 相邻分组可搭配
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FormalityGroup {
    Casual,
    SmartCasual,
    Formal,
}

impl FormalityGroup {
    fn rank(&self) -> i32 {
        match self {
            FormalityGroup::Casual => 0,
            FormalityGroup::SmartCasual => 1,
            FormalityGroup::Formal => 2,
        }
    }

    /// 同组或相邻组
    pub fn is_adjacent_or_same(&self, other: FormalityGroup) -> bool {
        (self.rank() - other.rank()).abs() <= 1
    }
}

impl fmt::Display for FormalityGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormalityGroup::Casual => write!(f, "casual"),
            FormalityGroup::SmartCasual => write!(f, "smart-casual"),
            FormalityGroup::Formal => write!(f, "formal"),
        }
    }
}

// ==========================================
// 季节 (Season)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Season {
    Spring,
    Summer,
    Fall,
    Winter,
}

impl Season {
    pub const ALL: [Season; 4] = [Season::Spring, Season::Summer, Season::Fall, Season::Winter];

    pub fn as_str(&self) -> &'static str {
        match self {
            Season::Spring => "spring",
            Season::Summer => "summer",
            Season::Fall => "fall",
            Season::Winter => "winter",
        }
    }

    /// 首字母大写的展示名
    pub fn title(&self) -> &'static str {
        match self {
            Season::Spring => "Spring",
            Season::Summer => "Summer",
            Season::Fall => "Fall",
            Season::Winter => "Winter",
        }
    }

    pub fn parse(raw: &str) -> Option<Season> {
        match raw.trim().to_lowercase().as_str() {
            "spring" => Some(Season::Spring),
            "summer" => Some(Season::Summer),
            "fall" | "autumn" => Some(Season::Fall),
            "winter" => Some(Season::Winter),
            _ => None,
        }
    }

    /// 是否为"全季"标记
    pub fn is_all_season_marker(raw: &str) -> bool {
        matches!(
            raw.trim().to_lowercase().replace('_', "-").as_str(),
            "all-season" | "all season" | "all-seasons" | "all"
        )
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ==========================================
// 叠穿角色 (Layering Role)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayeringRole {
    Base,
    Mid,
    Outer,
    Standalone,
}

impl LayeringRole {
    pub fn parse(raw: &str) -> Option<LayeringRole> {
        match raw.trim().to_lowercase().as_str() {
            "base" | "base layer" | "base-layer" => Some(LayeringRole::Base),
            "mid" | "mid layer" | "mid-layer" | "middle" => Some(LayeringRole::Mid),
            "outer" | "outer layer" | "outer-layer" => Some(LayeringRole::Outer),
            "standalone" | "none" => Some(LayeringRole::Standalone),
            _ => None,
        }
    }
}

// ==========================================
// 衣橱风格 (Wardrobe Style)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WardrobeStyle {
    Feminine,
    Masculine,
    Mixed,
    Neutral,
}

impl fmt::Display for WardrobeStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WardrobeStyle::Feminine => write!(f, "feminine"),
            WardrobeStyle::Masculine => write!(f, "masculine"),
            WardrobeStyle::Mixed => write!(f, "mixed"),
            WardrobeStyle::Neutral => write!(f, "neutral"),
        }
    }
}

// ==========================================
// 生活方式标记 (Lifestyle)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Lifestyle {
    Athletic,
    Professional,
}

// ==========================================
// 搭配展示分桶 (Display Bucket)
// ==========================================
// 顺序即展示顺序
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayBucket {
    Headwear,
    Eyewear,
    Tops,
    Bottoms,
    Dresses,
    Outerwear,
    Shoes,
    Accessories,
}

impl DisplayBucket {
    pub fn as_str(&self) -> &'static str {
        match self {
            DisplayBucket::Headwear => "headwear",
            DisplayBucket::Eyewear => "eyewear",
            DisplayBucket::Tops => "tops",
            DisplayBucket::Bottoms => "bottoms",
            DisplayBucket::Dresses => "dresses",
            DisplayBucket::Outerwear => "outerwear",
            DisplayBucket::Shoes => "shoes",
            DisplayBucket::Accessories => "accessories",
        }
    }
}

impl fmt::Display for DisplayBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
