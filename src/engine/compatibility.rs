// ==========================================
// 衣橱搭配引擎 - 两两兼容规则
// ==========================================
// 职责: 品类规则 / 颜色规则 / 正式度规则, 三条全部通过才兼容
// 红线: 无状态、无副作用、无 I/O 操作
// 红线: verdict(a, b) == verdict(b, a), 原因文本同样与顺序无关
// ==========================================

use crate::domain::garment::GarmentItem;
use crate::domain::outfit::CompatibilityVerdict;
use crate::domain::types::Category;

// 中性色: 与任何颜色可搭
const NEUTRAL_COLORS: &[&str] = &[
    "black", "white", "gray", "grey", "navy", "beige", "cream", "tan", "brown", "denim", "khaki",
    "olive",
];

// 撞色黑名单（无序对）
const CLASH_PAIRS: &[(&str, &str)] = &[
    ("red", "pink"),
    ("orange", "red"),
    ("purple", "pink"),
    ("orange", "pink"),
    ("green", "magenta"),
    ("yellow", "pink"),
];

// 互补色白名单（无序对）
const COMPLEMENTARY_PAIRS: &[(&str, &str)] = &[
    ("blue", "orange"),
    ("red", "green"),
    ("yellow", "purple"),
    ("teal", "coral"),
];

// ==========================================
// CompatibilityRules - 纯函数工具类
// ==========================================
pub struct CompatibilityRules;

impl CompatibilityRules {
    /// 两两兼容结论
    ///
    /// # 规则
    /// 品类、颜色、正式度三条规则依次判定, 首条失败即返回失败原因
    pub fn verdict(a: &GarmentItem, b: &GarmentItem) -> CompatibilityVerdict {
        let category = Self::category_rule(a.category, b.category);
        if !category.compatible {
            return category;
        }

        let color = Self::color_rule(&a.colors, &b.colors);
        if !color.compatible {
            return color;
        }

        let formality = Self::formality_rule(a, b);
        if !formality.compatible {
            return formality;
        }

        CompatibilityVerdict::pass(format!(
            "{}; {}; {}",
            category.reason, color.reason, formality.reason
        ))
    }

    /// 是否兼容（verdict 的简写）
    pub fn is_compatible(a: &GarmentItem, b: &GarmentItem) -> bool {
        Self::verdict(a, b).compatible
    }

    // ==========================================
    // 品类规则
    // ==========================================

    /// 品类互补表
    ///
    /// # 返回
    /// - None: 品类不参与搭配判定（未识别/内衣/泳装等）
    fn complements(category: Category) -> Option<&'static [Category]> {
        use Category::*;
        match category {
            Top => Some(&[Bottom, Dress, Outerwear, Shoes, Accessory]),
            Bottom => Some(&[Top, Outerwear, Shoes, Accessory]),
            Dress => Some(&[Outerwear, Shoes, Accessory]),
            Outerwear => Some(&[Top, Bottom, Dress, Shoes, Accessory]),
            Shoes => Some(&[Top, Bottom, Dress, Outerwear, Accessory]),
            Accessory => Some(&[Top, Bottom, Dress, Outerwear, Shoes, Accessory]),
            _ => None,
        }
    }

    /// 品类规则
    ///
    /// # 规则
    /// 1. 任一侧品类不在互补表 → 不兼容
    /// 2. 同品类 → 不兼容（配饰除外）
    /// 3. 任一方向命中互补表 → 兼容
    pub fn category_rule(a: Category, b: Category) -> CompatibilityVerdict {
        let (low, high) = if a <= b { (a, b) } else { (b, a) };

        let (Some(low_set), Some(high_set)) = (Self::complements(low), Self::complements(high))
        else {
            return CompatibilityVerdict::fail(format!(
                "Category {} + {} is not pairable",
                low.as_str(),
                high.as_str()
            ));
        };

        if low == high && low != Category::Accessory {
            return CompatibilityVerdict::fail(format!(
                "Two {} items cannot be worn together",
                low.as_str()
            ));
        }

        if low_set.contains(&high) || high_set.contains(&low) {
            CompatibilityVerdict::pass(format!(
                "{} pairs with {}",
                low.as_str(),
                high.as_str()
            ))
        } else {
            CompatibilityVerdict::fail(format!(
                "{} does not pair with {}",
                low.as_str(),
                high.as_str()
            ))
        }
    }

    // ==========================================
    // 颜色规则
    // ==========================================

    /// 颜色规则
    ///
    /// # 规则
    /// 1. 任一侧无颜色数据 → 兼容
    /// 2. 任一侧全为中性色 → 兼容
    /// 3. 命中撞色黑名单且颜色不同 → 不兼容
    /// 4. 含中性色 / 互补色 / 同色 → 兼容
    /// 5. 其余情况默认兼容
    pub fn color_rule(a: &[String], b: &[String]) -> CompatibilityVerdict {
        if a.is_empty() || b.is_empty() {
            return CompatibilityVerdict::pass("No color data to compare");
        }

        let all_neutral = |colors: &[String]| colors.iter().all(|c| is_neutral(c));
        if all_neutral(a) || all_neutral(b) {
            return CompatibilityVerdict::pass("Neutral colors pair with anything");
        }

        let mut clashes: Vec<(String, String)> = Vec::new();
        for ca in a {
            for cb in b {
                if ca != cb && pair_in(CLASH_PAIRS, ca, cb) {
                    clashes.push(ordered(ca, cb));
                }
            }
        }
        if !clashes.is_empty() {
            clashes.sort();
            let (x, y) = &clashes[0];
            return CompatibilityVerdict::fail(format!("Colors {} and {} clash", x, y));
        }

        if a.iter().chain(b.iter()).any(|c| is_neutral(c)) {
            return CompatibilityVerdict::pass("Neutral accent balances the colors");
        }

        if a.iter()
            .any(|ca| b.iter().any(|cb| pair_in(COMPLEMENTARY_PAIRS, ca, cb)))
        {
            return CompatibilityVerdict::pass("Complementary colors");
        }

        if a.iter().any(|ca| b.contains(ca)) {
            return CompatibilityVerdict::pass("Monochromatic palette");
        }

        CompatibilityVerdict::pass("No color conflict")
    }

    // ==========================================
    // 正式度规则
    // ==========================================

    /// 正式度规则
    ///
    /// # 规则
    /// - 任一侧无正式度或无法分组 → 兼容
    /// - 同组/相邻组 → 兼容
    /// - casual ↔ formal → 不兼容
    pub fn formality_rule(a: &GarmentItem, b: &GarmentItem) -> CompatibilityVerdict {
        let groups = (
            a.formality.and_then(|f| f.group()),
            b.formality.and_then(|f| f.group()),
        );

        match groups {
            (Some(ga), Some(gb)) => {
                let (low, high) = if ga <= gb { (ga, gb) } else { (gb, ga) };
                if low.is_adjacent_or_same(high) {
                    CompatibilityVerdict::pass(format!(
                        "Formality {} and {} are compatible",
                        low, high
                    ))
                } else {
                    CompatibilityVerdict::fail(format!(
                        "Formality mismatch: {} vs {}",
                        low, high
                    ))
                }
            }
            _ => CompatibilityVerdict::pass("Formality unspecified"),
        }
    }
}

fn is_neutral(color: &str) -> bool {
    NEUTRAL_COLORS.contains(&color)
}

fn pair_in(pairs: &[(&str, &str)], x: &str, y: &str) -> bool {
    pairs
        .iter()
        .any(|(p, q)| (*p == x && *q == y) || (*p == y && *q == x))
}

fn ordered(x: &str, y: &str) -> (String, String) {
    if x <= y {
        (x.to_string(), y.to_string())
    } else {
        (y.to_string(), x.to_string())
    }
}
