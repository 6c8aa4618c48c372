// ==========================================
// 衣橱搭配引擎 - 衣橱风格识别
// ==========================================
// 职责: 识别衣橱风格（feminine/masculine/mixed/neutral）与生活方式标记,
//       并据此选择完整度评分的品类需求数量表
// 红线: 无状态、无副作用、无 I/O 操作
// ==========================================

use crate::domain::garment::GarmentItem;
use crate::domain::score::StyleProfile;
use crate::domain::types::{Category, Formality, Lifestyle, WardrobeStyle};

// 品类/子品类精确匹配的指示词
const FEMININE_INDICATORS: &[&str] = &[
    "dress", "skirt", "blouse", "heels", "pumps", "purse", "handbag", "bra", "lingerie", "romper",
    "bodysuit", "leggings",
];
const MASCULINE_INDICATORS: &[&str] = &["suit", "tie", "dress-shirt", "boxers", "briefs", "blazer"];

// 名称包含匹配的指示词
const FEMININE_NAME_HINTS: &[&str] = &["dress", "skirt", "blouse", "heel", "pump"];
const MASCULINE_NAME_HINTS: &[&str] = &["suit", "tie", "boxer", "brief"];

const ATHLETIC_KEYWORDS: &[&str] = &["athletic", "sport", "gym", "yoga", "running", "workout"];

// 生活方式判定阈值
const ATHLETIC_SHARE: f64 = 0.15;
const PROFESSIONAL_SHARE: f64 = 0.20;

// 预期约 20% 单品带性别指向
const EXPECTED_GENDERED_SHARE: f64 = 0.2;

// ==========================================
// StyleDetector - 纯函数工具类
// ==========================================
pub struct StyleDetector;

impl StyleDetector {
    /// 识别衣橱风格画像
    ///
    /// # 规则
    /// 1. 逐件扫描品类/子品类（精确匹配）与名称（包含匹配）
    /// 2. confidence = min(带性别指向件数 / max(总数×20%, 1), 1)
    /// 3. 有连衣裙/半裙 或 feminine > masculine×2 → feminine
    /// 4. masculine > feminine×2 且无连衣裙 → masculine
    /// 5. 两者皆有 → mixed, 否则 neutral
    /// 6. 运动类 ≥15% → athletic; 正式类 ≥20% → professional
    pub fn detect(items: &[GarmentItem]) -> StyleProfile {
        if items.is_empty() {
            return StyleProfile::empty();
        }

        let mut feminine_count = 0usize;
        let mut masculine_count = 0usize;
        let mut has_dresses = false;
        let mut has_skirts = false;

        for item in items {
            let category = item.category.as_str();
            let subcategory = item
                .subcategory
                .as_deref()
                .map(|s| s.trim().to_lowercase())
                .unwrap_or_default();
            let name = item.name.to_lowercase();

            if item.category == Category::Dress {
                has_dresses = true;
            }
            if subcategory.contains("skirt") {
                has_skirts = true;
            }

            let exact = |set: &[&str]| set.contains(&category) || set.contains(&subcategory.as_str());
            let named = |hints: &[&str]| hints.iter().any(|h| name.contains(h));

            if exact(FEMININE_INDICATORS) || named(FEMININE_NAME_HINTS) {
                feminine_count += 1;
            }
            if exact(MASCULINE_INDICATORS) || named(MASCULINE_NAME_HINTS) {
                masculine_count += 1;
            }
        }

        let total = items.len() as f64;
        let total_gendered = (feminine_count + masculine_count) as f64;
        let confidence = (total_gendered / (total * EXPECTED_GENDERED_SHARE).max(1.0)).min(1.0);

        let (style, description) =
            if has_dresses || has_skirts || feminine_count > masculine_count * 2 {
                (
                    WardrobeStyle::Feminine,
                    "Feminine-presenting wardrobe with dresses/skirts",
                )
            } else if masculine_count > feminine_count * 2 && !has_dresses {
                (
                    WardrobeStyle::Masculine,
                    "Masculine-presenting wardrobe without dresses/skirts",
                )
            } else if feminine_count > 0 && masculine_count > 0 {
                (WardrobeStyle::Mixed, "Mixed-style wardrobe with diverse pieces")
            } else {
                (WardrobeStyle::Neutral, "Neutral wardrobe with unisex pieces")
            };

        let mut lifestyle = Vec::new();

        let athletic_count = items.iter().filter(|item| Self::is_athletic(item)).count();
        if athletic_count as f64 >= total * ATHLETIC_SHARE {
            lifestyle.push(Lifestyle::Athletic);
        }

        let professional_count = items
            .iter()
            .filter(|item| {
                matches!(
                    item.formality,
                    Some(Formality::Formal | Formality::Business | Formality::Professional)
                )
            })
            .count();
        if professional_count as f64 >= total * PROFESSIONAL_SHARE {
            lifestyle.push(Lifestyle::Professional);
        }

        StyleProfile {
            style,
            confidence,
            has_dresses,
            has_skirts,
            lifestyle,
            feminine_count,
            masculine_count,
            description: description.to_string(),
        }
    }

    /// 品类需求数量表
    ///
    /// # 规则
    /// - 基础: top≥10, bottom≥6, outerwear≥3, shoes≥5
    /// - feminine: 有连衣裙 → dress≥3, bottom≥5; shoes≥6
    /// - mixed: 有连衣裙 → dress≥1
    /// - athletic → activewear≥4
    /// - professional → top≥12, bottom≥7
    ///
    /// # 返回
    /// 有序列表（展示顺序稳定）
    pub fn required_quantities(profile: &StyleProfile) -> Vec<(Category, usize)> {
        let mut table: Vec<(Category, usize)> = vec![
            (Category::Top, 10),
            (Category::Bottom, 6),
            (Category::Outerwear, 3),
            (Category::Shoes, 5),
        ];

        match profile.style {
            WardrobeStyle::Feminine => {
                if profile.has_dresses {
                    set_quantity(&mut table, Category::Dress, 3);
                    set_quantity(&mut table, Category::Bottom, 5);
                }
                set_quantity(&mut table, Category::Shoes, 6);
            }
            WardrobeStyle::Mixed => {
                if profile.has_dresses {
                    set_quantity(&mut table, Category::Dress, 1);
                }
            }
            WardrobeStyle::Masculine | WardrobeStyle::Neutral => {}
        }

        if profile.has_lifestyle(Lifestyle::Athletic) {
            set_quantity(&mut table, Category::Activewear, 4);
        }
        if profile.has_lifestyle(Lifestyle::Professional) {
            set_quantity(&mut table, Category::Top, 12);
            set_quantity(&mut table, Category::Bottom, 7);
        }

        table
    }

    fn is_athletic(item: &GarmentItem) -> bool {
        let category = item.category.as_str();
        let name = item.name.to_lowercase();
        ATHLETIC_KEYWORDS
            .iter()
            .any(|kw| category.contains(kw) || name.contains(kw))
    }
}

fn set_quantity(table: &mut Vec<(Category, usize)>, category: Category, quantity: usize) {
    match table.iter_mut().find(|(c, _)| *c == category) {
        Some(entry) => entry.1 = quantity,
        None => table.push((category, quantity)),
    }
}
