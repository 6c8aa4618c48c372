// ==========================================
// 搭配校验集成测试
// ==========================================
// 测试范围: 重复品类检测 / 需求满足检查 / 去重兜底
// ==========================================

mod helpers;

use helpers::test_data_builder::*;
use outfit_engine::domain::types::{Category, LayeringRole};
use outfit_engine::domain::{DuplicateViolation, OutfitRequirements};
use outfit_engine::engine::OutfitValidator;

fn ids(items: &[outfit_engine::domain::GarmentItem]) -> Vec<&str> {
    items.iter().map(|i| i.id.as_str()).collect()
}

// ==========================================
// 重复品类检测
// ==========================================

#[test]
fn test_two_bottoms_always_flagged() {
    let jeans = GarmentBuilder::new("b1", Category::Bottom).build();
    let skirt = GarmentBuilder::new("b2", Category::Bottom).build();
    let extras = [
        GarmentBuilder::new("t", Category::Top).build(),
        GarmentBuilder::new("s", Category::Shoes).build(),
        GarmentBuilder::new("a", Category::Accessory).build(),
    ];

    for n in 0..=extras.len() {
        let mut outfit = vec![jeans.clone(), skirt.clone()];
        outfit.extend_from_slice(&extras[..n]);
        let report = OutfitValidator::detect_duplicates(&outfit);
        assert!(report
            .violations
            .contains(&DuplicateViolation::MultipleBottoms { count: 2 }));
    }
}

#[test]
fn test_tank_under_cardigan_is_valid_layering() {
    let tank = GarmentBuilder::new("t1", Category::Top)
        .name("White Tank")
        .build();
    let cardigan = GarmentBuilder::new("t2", Category::Top)
        .name("Grey Cardigan")
        .build();
    let report = OutfitValidator::detect_duplicates(&[tank, cardigan]);
    assert!(report.is_clean());
}

#[test]
fn test_layering_role_marks_base_layer() {
    let base = GarmentBuilder::new("t1", Category::Top)
        .name("Ribbed Knit")
        .layering(LayeringRole::Base)
        .build();
    let blazer = GarmentBuilder::new("t2", Category::Top)
        .name("Navy Blazer")
        .build();
    assert!(OutfitValidator::detect_duplicates(&[base, blazer]).is_clean());
}

#[test]
fn test_tank_with_mid_sweater_is_flagged() {
    let tank = GarmentBuilder::new("t1", Category::Top)
        .name("White Tank")
        .layering(LayeringRole::Base)
        .build();
    let sweater = GarmentBuilder::new("t2", Category::Top)
        .name("Crew Sweater")
        .layering(LayeringRole::Mid)
        .build();
    let report = OutfitValidator::detect_duplicates(&[tank, sweater]);
    assert_eq!(
        report.violations,
        vec![DuplicateViolation::DuplicateTops { count: 2 }]
    );
}

#[test]
fn test_two_tees_are_flagged() {
    let a = GarmentBuilder::new("t1", Category::Top).name("White Tee").build();
    let b = GarmentBuilder::new("t2", Category::Top).name("Black Tee").build();
    let report = OutfitValidator::detect_duplicates(&[a, b]);
    assert_eq!(
        report.violations,
        vec![DuplicateViolation::DuplicateTops { count: 2 }]
    );
    assert!(report.feedback().contains("DUPLICATE_TOPS"));
}

#[test]
fn test_dress_with_bottom_is_flagged() {
    let dress = GarmentBuilder::new("d", Category::Dress).build();
    let skirt = GarmentBuilder::new("b", Category::Bottom).build();
    let report = OutfitValidator::detect_duplicates(&[dress, skirt]);
    assert!(report
        .violations
        .contains(&DuplicateViolation::DressWithBottom));
}

// ==========================================
// 需求满足检查
// ==========================================

#[test]
fn test_essential_alternatives() {
    let requirements = OutfitRequirements {
        essential_categories: vec![
            vec![Category::Top, Category::Bottom],
            vec![Category::Dress],
        ],
        min_items: 1,
        max_items: 4,
        ..OutfitRequirements::default_everyday()
    };

    let dress_look = vec![
        GarmentBuilder::new("d", Category::Dress).build(),
        GarmentBuilder::new("s", Category::Shoes).build(),
    ];
    let check = OutfitValidator::check_requirements(&dress_look, &requirements);
    assert!(check.is_satisfied());
    assert_eq!(check.satisfied_combination, Some(vec![Category::Dress]));

    let separates = vec![
        GarmentBuilder::new("t", Category::Top).build(),
        GarmentBuilder::new("b", Category::Bottom).build(),
    ];
    let check = OutfitValidator::check_requirements(&separates, &requirements);
    assert!(check.is_satisfied());
    assert_eq!(
        check.satisfied_combination,
        Some(vec![Category::Top, Category::Bottom])
    );

    let dress_only = vec![GarmentBuilder::new("d", Category::Dress).build()];
    assert!(OutfitValidator::check_requirements(&dress_only, &requirements).is_satisfied());

    let top_only = vec![GarmentBuilder::new("t", Category::Top).build()];
    let check = OutfitValidator::check_requirements(&top_only, &requirements);
    assert!(!check.essential_satisfied);
    assert!(!check.is_satisfied());
}

#[test]
fn test_forbidden_category_and_count_range() {
    let mut requirements = trio_requirements();
    requirements.avoid_categories = vec![Category::Swimwear];

    let mut items = trio_wardrobe();
    items.push(GarmentBuilder::new("x", Category::Swimwear).build());
    let check = OutfitValidator::check_requirements(&items, &requirements);
    assert_eq!(check.forbidden_present, vec![Category::Swimwear]);
    assert!(!check.count_in_range);
    assert!(!check.is_satisfied());
    assert!(!check.feedback(&requirements).is_empty());
}

// ==========================================
// 去重兜底
// ==========================================

#[test]
fn test_sanitize_keeps_first_shoes_and_lower_garment() {
    let items = vec![
        GarmentBuilder::new("t", Category::Top).build(),
        GarmentBuilder::new("d", Category::Dress).build(),
        GarmentBuilder::new("b", Category::Bottom).build(),
        GarmentBuilder::new("s1", Category::Shoes).build(),
        GarmentBuilder::new("s2", Category::Shoes).build(),
        GarmentBuilder::new("t", Category::Top).build(),
    ];
    let kept = OutfitValidator::sanitize(&items);
    assert_eq!(ids(&kept), vec!["t", "d", "s1"]);

    let report = OutfitValidator::detect_duplicates(&kept);
    assert!(!report
        .violations
        .iter()
        .any(|v| matches!(v, DuplicateViolation::MultipleShoes { .. })));
    assert!(!report
        .violations
        .iter()
        .any(|v| matches!(v, DuplicateViolation::DressWithBottom)));
}

#[test]
fn test_resolve_items_reports_unknown_ids() {
    let pool = trio_wardrobe();
    let requested = vec!["A".to_string(), "Z".to_string(), "A".to_string()];
    let (items, unknown) = OutfitValidator::resolve_items(&requested, &pool);
    assert_eq!(ids(&items), vec!["A", "A"]);
    assert_eq!(unknown, vec!["Z".to_string()]);
}
