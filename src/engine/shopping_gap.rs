// ==========================================
// 衣橱搭配引擎 - 补购缺口分析
// ==========================================
// 职责: 根据搭配需求、已接受方案与候选池, 列出缺失的单品类型
// 说明: 低优先级旁路逻辑, 不影响出搭配
// ==========================================

use crate::domain::garment::GarmentItem;
use crate::domain::generation::{ShoppingPriority, ShoppingSuggestion};
use crate::domain::outfit::{OutfitProposal, OutfitRequirements};
use crate::domain::types::Category;
use std::collections::HashSet;

pub struct ShoppingGapAnalyzer;

impl ShoppingGapAnalyzer {
    /// 缺口分析
    ///
    /// # 规则
    /// 1. recommended 品类候选池中没有 → HIGH
    /// 2. recommended 品类候选池有但所有方案都未使用 → LOW
    /// 3. essential 备选组合中候选池缺失的品类 → MEDIUM
    ///
    /// 同一品类只出现一次, 顺序: recommended 在前, essential 在后
    pub fn analyze(
        requirements: &OutfitRequirements,
        outfits: &[OutfitProposal],
        pool: &[GarmentItem],
    ) -> Vec<ShoppingSuggestion> {
        let in_pool: HashSet<Category> = pool.iter().map(|i| i.category).collect();

        let used: HashSet<Category> = outfits
            .iter()
            .flat_map(|o| o.item_ids.iter())
            .filter_map(|id| pool.iter().find(|i| &i.id == id))
            .map(|i| i.category)
            .collect();

        let mut seen: HashSet<Category> = HashSet::new();
        let mut suggestions = Vec::new();

        for category in &requirements.recommended_categories {
            if !seen.insert(*category) {
                continue;
            }
            if !in_pool.contains(category) {
                suggestions.push(ShoppingSuggestion {
                    category: *category,
                    priority: ShoppingPriority::High,
                    reason: format!(
                        "No {} available for this request; adding one would complete the look",
                        category.as_str()
                    ),
                });
            } else if !used.contains(category) {
                suggestions.push(ShoppingSuggestion {
                    category: *category,
                    priority: ShoppingPriority::Low,
                    reason: format!(
                        "None of the suggested outfits use your {} pieces; a more versatile {} may help",
                        category.as_str(),
                        category.as_str()
                    ),
                });
            }
        }

        for combo in &requirements.essential_categories {
            for category in combo {
                if in_pool.contains(category) || !seen.insert(*category) {
                    continue;
                }
                let combo_text = combo
                    .iter()
                    .map(|c| c.as_str())
                    .collect::<Vec<_>>()
                    .join(" + ");
                suggestions.push(ShoppingSuggestion {
                    category: *category,
                    priority: ShoppingPriority::Medium,
                    reason: format!(
                        "Adding a {} unlocks the {} combination",
                        category.as_str(),
                        combo_text
                    ),
                });
            }
        }

        suggestions
    }
}
