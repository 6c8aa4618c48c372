// ==========================================
// 衣橱搭配引擎 - 搭配校验器
// ==========================================
// 职责: 重复品类检测 / 需求满足检查 / 确定性去重兜底
// 红线: 无状态、无副作用、无 I/O 操作
// 红线: 兜底结果必须同时满足 "鞋履 ≤1" 与 "下装/连衣裙 ≤1"
// ==========================================

use crate::domain::garment::GarmentItem;
use crate::domain::outfit::{
    DuplicateReport, DuplicateViolation, OutfitProposal, OutfitRequirements, RequirementCheck,
};
use crate::domain::types::{Category, LayeringRole};
use std::collections::{HashMap, HashSet};

// 叠穿关键词（匹配名称/子品类/风格标签）
const BASE_LAYER_KEYWORDS: &[&str] = &["tank", "undershirt", "base layer"];
const OUTER_LAYER_KEYWORDS: &[&str] = &["cardigan", "blazer", "jacket"];

// ==========================================
// OutfitValidator - 纯函数工具类
// ==========================================
pub struct OutfitValidator;

impl OutfitValidator {
    // ==========================================
    // 单品解析
    // ==========================================

    /// 按 id 从候选池解析单品
    ///
    /// # 返回
    /// - (已解析单品, 未识别 id)
    ///
    /// # 说明
    /// 重复 id 保留重复, 交由重复检测判定
    pub fn resolve_items(
        item_ids: &[String],
        pool: &[GarmentItem],
    ) -> (Vec<GarmentItem>, Vec<String>) {
        let index: HashMap<&str, &GarmentItem> =
            pool.iter().map(|item| (item.id.as_str(), item)).collect();

        let mut resolved = Vec::with_capacity(item_ids.len());
        let mut unknown = Vec::new();
        for id in item_ids {
            match index.get(id.as_str()) {
                Some(item) => resolved.push((*item).clone()),
                None => unknown.push(id.clone()),
            }
        }
        (resolved, unknown)
    }

    // ==========================================
    // 重复品类检测
    // ==========================================

    /// 重复品类检测
    ///
    /// # 规则
    /// 1. 下装 >1 / 鞋履 >1 / 连衣裙 >1 → 违规
    /// 2. 连衣裙与下装同时出现 → 违规
    /// 3. 上装 >1 → 需存在 "打底 + 外搭" 叠穿组合, 否则违规
    /// 4. 外套 >1 → 违规
    pub fn detect_duplicates(items: &[GarmentItem]) -> DuplicateReport {
        let count = |category: Category| items.iter().filter(|i| i.category == category).count();

        let bottoms = count(Category::Bottom);
        let shoes = count(Category::Shoes);
        let dresses = count(Category::Dress);
        let tops = count(Category::Top);
        let outerwear = count(Category::Outerwear);

        let mut violations = Vec::new();

        if bottoms > 1 {
            violations.push(DuplicateViolation::MultipleBottoms { count: bottoms });
        }
        if shoes > 1 {
            violations.push(DuplicateViolation::MultipleShoes { count: shoes });
        }
        if dresses > 1 {
            violations.push(DuplicateViolation::MultipleDresses { count: dresses });
        }
        if dresses > 0 && bottoms > 0 {
            violations.push(DuplicateViolation::DressWithBottom);
        }
        if tops > 1 {
            let top_items: Vec<&GarmentItem> = items
                .iter()
                .filter(|i| i.category == Category::Top)
                .collect();
            if !Self::has_valid_layering(&top_items) {
                violations.push(DuplicateViolation::DuplicateTops { count: tops });
            }
        }
        if outerwear > 1 {
            violations.push(DuplicateViolation::MultipleOuterwear { count: outerwear });
        }

        DuplicateReport { violations }
    }

    /// 叠穿判定: 存在打底层与另一件外搭层
    fn has_valid_layering(tops: &[&GarmentItem]) -> bool {
        let base: Vec<usize> = tops
            .iter()
            .enumerate()
            .filter(|(_, item)| is_base_layer(item))
            .map(|(idx, _)| idx)
            .collect();
        let outer: Vec<usize> = tops
            .iter()
            .enumerate()
            .filter(|(_, item)| is_outer_layer(item))
            .map(|(idx, _)| idx)
            .collect();

        base.iter().any(|b| {
            outer
                .iter()
                .any(|o| o != b && tops[*o].id != tops[*b].id)
        })
    }

    // ==========================================
    // 需求满足检查
    // ==========================================

    /// 需求满足检查
    ///
    /// # 规则
    /// - essential: 任一内层组合全部出现即满足（空列表视为满足）
    /// - avoid: 不得出现任何禁用品类
    /// - 件数: min_items ≤ n ≤ max_items
    pub fn check_requirements(
        items: &[GarmentItem],
        requirements: &OutfitRequirements,
    ) -> RequirementCheck {
        let present: HashSet<Category> = items.iter().map(|i| i.category).collect();

        let satisfied_combination = requirements
            .essential_categories
            .iter()
            .find(|combo| combo.iter().all(|c| present.contains(c)))
            .cloned();
        let essential_satisfied =
            requirements.essential_categories.is_empty() || satisfied_combination.is_some();

        let mut forbidden_present: Vec<Category> = requirements
            .avoid_categories
            .iter()
            .filter(|c| present.contains(c))
            .copied()
            .collect();
        forbidden_present.sort();
        forbidden_present.dedup();

        let item_count = items.len();
        let count_in_range =
            item_count >= requirements.min_items && item_count <= requirements.max_items;

        RequirementCheck {
            essential_satisfied,
            satisfied_combination,
            forbidden_present,
            item_count,
            count_in_range,
        }
    }

    // ==========================================
    // 确定性去重兜底
    // ==========================================

    /// 去重兜底
    ///
    /// # 规则
    /// 1. 重复 id 只保留首次出现
    /// 2. 鞋履只保留首件
    /// 3. 下装/连衣裙视为同一互斥槽位, 只保留首件
    /// 4. 其余品类全部保留, 顺序不变
    pub fn sanitize(items: &[GarmentItem]) -> Vec<GarmentItem> {
        let mut seen_ids: HashSet<&str> = HashSet::new();
        let mut has_shoes = false;
        let mut has_lower = false;
        let mut kept = Vec::with_capacity(items.len());

        for item in items {
            if !seen_ids.insert(item.id.as_str()) {
                continue;
            }
            match item.category {
                Category::Shoes => {
                    if has_shoes {
                        continue;
                    }
                    has_shoes = true;
                }
                Category::Bottom | Category::Dress => {
                    if has_lower {
                        continue;
                    }
                    has_lower = true;
                }
                _ => {}
            }
            kept.push(item.clone());
        }

        kept
    }

    /// 对搭配方案原地去重兜底
    ///
    /// # 返回
    /// - 兜底后的单品列表（item_ids 已同步改写）
    pub fn sanitize_proposal(
        proposal: &mut OutfitProposal,
        items: &[GarmentItem],
    ) -> Vec<GarmentItem> {
        let kept = Self::sanitize(items);
        let removed = items.len() - kept.len();
        proposal.item_ids = kept.iter().map(|i| i.id.clone()).collect();
        proposal.sanitized = true;
        if removed > 0 {
            proposal
                .issues
                .push(format!("sanitizer removed {} duplicate item(s)", removed));
        }
        kept
    }
}

fn is_base_layer(item: &GarmentItem) -> bool {
    item.layering_role == Some(LayeringRole::Base) || {
        let text = item.search_text();
        BASE_LAYER_KEYWORDS.iter().any(|kw| text.contains(kw))
    }
}

fn is_outer_layer(item: &GarmentItem) -> bool {
    item.layering_role == Some(LayeringRole::Outer) || {
        let text = item.search_text();
        OUTER_LAYER_KEYWORDS.iter().any(|kw| text.contains(kw))
    }
}
