// ==========================================
// 测试数据构建器 - 用于集成测试
// ==========================================

use outfit_engine::domain::types::{Category, Formality, LayeringRole, Season};
use outfit_engine::domain::{GarmentItem, OutfitRequirements};

// ==========================================
// GarmentItem 构建器
// ==========================================

pub struct GarmentBuilder {
    item: GarmentItem,
}

impl GarmentBuilder {
    pub fn new(id: &str, category: Category) -> Self {
        Self {
            item: GarmentItem::new(id, format!("{} {}", category.as_str(), id), category),
        }
    }

    pub fn name(mut self, name: &str) -> Self {
        self.item.name = name.to_string();
        self
    }

    pub fn subcategory(mut self, subcategory: &str) -> Self {
        self.item.subcategory = Some(subcategory.to_string());
        self
    }

    pub fn colors(mut self, colors: &[&str]) -> Self {
        self.item.colors = colors.iter().map(|c| c.to_string()).collect();
        self
    }

    pub fn seasons(mut self, seasons: &[Season]) -> Self {
        self.item.seasons = seasons.to_vec();
        self
    }

    pub fn all_season(mut self) -> Self {
        self.item.all_season = true;
        self
    }

    pub fn formality(mut self, formality: Formality) -> Self {
        self.item.formality = Some(formality);
        self
    }

    pub fn versatility(mut self, versatility: &str) -> Self {
        self.item.versatility = Some(versatility.to_string());
        self
    }

    pub fn style_tags(mut self, tags: &[&str]) -> Self {
        self.item.style_tags = tags.iter().map(|t| t.to_string()).collect();
        self
    }

    pub fn occasions(mut self, occasions: &[&str]) -> Self {
        self.item.occasions = occasions.iter().map(|o| o.to_string()).collect();
        self
    }

    pub fn layering(mut self, role: LayeringRole) -> Self {
        self.item.layering_role = Some(role);
        self
    }

    pub fn build(self) -> GarmentItem {
        self.item
    }
}

// ==========================================
// 常用场景数据
// ==========================================

/// 最小端到端衣橱: A 上装(navy) / B 下装(khaki) / C 鞋(white), 均为 casual
pub fn trio_wardrobe() -> Vec<GarmentItem> {
    vec![
        GarmentBuilder::new("A", Category::Top)
            .name("Navy Tee")
            .colors(&["navy"])
            .formality(Formality::Casual)
            .build(),
        GarmentBuilder::new("B", Category::Bottom)
            .name("Khaki Chinos")
            .colors(&["khaki"])
            .formality(Formality::Casual)
            .build(),
        GarmentBuilder::new("C", Category::Shoes)
            .name("White Sneakers")
            .colors(&["white"])
            .formality(Formality::Casual)
            .build(),
    ]
}

/// essential=[[top,bottom]], avoid=[], 2~3 件
pub fn trio_requirements() -> OutfitRequirements {
    OutfitRequirements {
        essential_categories: vec![vec![Category::Top, Category::Bottom]],
        recommended_categories: vec![Category::Shoes],
        optional_categories: Vec::new(),
        avoid_categories: Vec::new(),
        min_items: 2,
        max_items: 3,
        occasion_type: "casual".to_string(),
        special_notes: String::new(),
    }
}

/// 较完整的混合衣橱（覆盖多品类/颜色/季节/正式度）
pub fn mixed_wardrobe() -> Vec<GarmentItem> {
    vec![
        GarmentBuilder::new("t1", Category::Top)
            .name("White Oxford Shirt")
            .colors(&["white"])
            .formality(Formality::BusinessCasual)
            .style_tags(&["classic"])
            .all_season()
            .build(),
        GarmentBuilder::new("t2", Category::Top)
            .name("Striped Tank")
            .colors(&["navy", "white"])
            .formality(Formality::Casual)
            .style_tags(&["nautical", "classic"])
            .seasons(&[Season::Summer])
            .layering(LayeringRole::Base)
            .build(),
        GarmentBuilder::new("t3", Category::Top)
            .name("Coral Cardigan")
            .colors(&["coral"])
            .formality(Formality::Casual)
            .seasons(&[Season::Spring, Season::Fall])
            .build(),
        GarmentBuilder::new("t4", Category::Top)
            .name("Pink Blouse")
            .colors(&["pink"])
            .formality(Formality::SmartCasual)
            .seasons(&[Season::Spring, Season::Summer])
            .build(),
        GarmentBuilder::new("b1", Category::Bottom)
            .name("Dark Jeans")
            .colors(&["denim"])
            .formality(Formality::Casual)
            .style_tags(&["classic"])
            .versatility("high")
            .build(),
        GarmentBuilder::new("b2", Category::Bottom)
            .name("Red Skirt")
            .subcategory("skirt")
            .colors(&["red"])
            .formality(Formality::SmartCasual)
            .seasons(&[Season::Summer])
            .build(),
        GarmentBuilder::new("d1", Category::Dress)
            .name("Black Cocktail Dress")
            .colors(&["black"])
            .formality(Formality::Cocktail)
            .seasons(&[Season::Fall, Season::Winter])
            .occasions(&["party", "date"])
            .build(),
        GarmentBuilder::new("o1", Category::Outerwear)
            .name("Camel Wool Coat")
            .colors(&["tan"])
            .formality(Formality::Formal)
            .seasons(&[Season::Winter])
            .build(),
        GarmentBuilder::new("s1", Category::Shoes)
            .name("White Sneakers")
            .colors(&["white"])
            .formality(Formality::Athletic)
            .build(),
        GarmentBuilder::new("s2", Category::Shoes)
            .name("Black Heels")
            .colors(&["black"])
            .formality(Formality::Formal)
            .build(),
        GarmentBuilder::new("a1", Category::Accessory)
            .name("Straw Hat")
            .subcategory("hat")
            .colors(&["beige"])
            .seasons(&[Season::Summer])
            .build(),
        GarmentBuilder::new("a2", Category::Accessory)
            .name("Tortoise Sunglasses")
            .colors(&["brown"])
            .build(),
        GarmentBuilder::new("a3", Category::Accessory)
            .name("Magenta Scarf")
            .colors(&["magenta"])
            .build(),
        GarmentBuilder::new("x1", Category::Swimwear)
            .name("Green Swimsuit")
            .colors(&["green"])
            .build(),
    ]
}
