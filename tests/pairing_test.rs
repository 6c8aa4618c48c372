// ==========================================
// 单品配对排序集成测试
// ==========================================
// 测试范围: 兼容筛选 → 展示分桶 → 外部排序 / 原序兜底
// ==========================================

mod helpers;

use helpers::mock_config::MockConfig;
use helpers::stub_collaborators::*;
use helpers::test_data_builder::*;
use outfit_engine::domain::types::DisplayBucket;
use outfit_engine::domain::{GarmentItem, PairingBucket};
use outfit_engine::engine::{NoOpRankingService, PairingRanker, RankingService};
use std::sync::Arc;
use std::time::Duration;

/// 参照单品: 深色牛仔裤 (b1)
fn jeans(wardrobe: &[GarmentItem]) -> GarmentItem {
    wardrobe.iter().find(|i| i.id == "b1").cloned().unwrap()
}

fn bucket<'a>(buckets: &'a [PairingBucket], target: DisplayBucket) -> &'a PairingBucket {
    buckets.iter().find(|b| b.bucket == target).unwrap()
}

fn ranked_ids(bucket: &PairingBucket) -> Vec<&str> {
    bucket.pairings.iter().map(|p| p.item.id.as_str()).collect()
}

async fn run(ranker: Arc<dyn RankingService>) -> Vec<PairingBucket> {
    let wardrobe = mixed_wardrobe();
    let reference = jeans(&wardrobe);
    PairingRanker::from_config(&MockConfig::default(), ranker)
        .await
        .unwrap()
        .rank_pairings(&reference, &wardrobe)
        .await
}

// ==========================================
// 场景1: 兼容筛选与分桶
// ==========================================

#[test]
fn test_pairable_items_exclude_incompatible_and_reference() {
    let wardrobe = mixed_wardrobe();
    let reference = jeans(&wardrobe);
    let pairable = PairingRanker::find_pairable_items(&reference, &wardrobe);
    let ids: Vec<&str> = pairable.iter().map(|i| i.id.as_str()).collect();

    // 第二条下装 / 连衣裙 / 正式外套 / 高跟鞋 / 泳装被排除
    assert_eq!(ids, vec!["t1", "t2", "t3", "t4", "s1", "a1", "a2", "a3"]);
}

#[tokio::test]
async fn test_buckets_follow_display_order() {
    let buckets = run(Arc::new(NoOpRankingService)).await;
    let order: Vec<DisplayBucket> = buckets.iter().map(|b| b.bucket).collect();
    assert_eq!(
        order,
        vec![
            DisplayBucket::Headwear,
            DisplayBucket::Eyewear,
            DisplayBucket::Tops,
            DisplayBucket::Shoes,
            DisplayBucket::Accessories,
        ]
    );
    assert_eq!(ranked_ids(bucket(&buckets, DisplayBucket::Headwear)), vec!["a1"]);
    assert_eq!(ranked_ids(bucket(&buckets, DisplayBucket::Eyewear)), vec!["a2"]);
}

// ==========================================
// 场景2: 外部排序
// ==========================================

#[tokio::test]
async fn test_external_ranking_applies_to_large_buckets_only() {
    let ranker = Arc::new(FixedRanker::new(&["t4", "t2", "t1"]));
    let buckets = run(ranker.clone()).await;

    let tops = bucket(&buckets, DisplayBucket::Tops);
    assert_eq!(tops.candidates, 4);
    assert!(tops.ranked_externally);
    assert_eq!(ranked_ids(tops), vec!["t4", "t2", "t1"]);
    assert_eq!(tops.pairings[0].rank, 1);
    assert_eq!(tops.pairings[0].note, "pick t4");

    // 其余分桶 ≤ K 件, 不调用排序器
    assert_eq!(ranker.call_count(), 1);
    assert!(!bucket(&buckets, DisplayBucket::Shoes).ranked_externally);
}

#[tokio::test]
async fn test_unknown_and_repeated_ids_are_dropped() {
    let ranker = Arc::new(FixedRanker::new(&["ghost", "t3", "t3", "s1", "t1", "t2", "t4"]));
    let buckets = run(ranker).await;

    let tops = bucket(&buckets, DisplayBucket::Tops);
    assert_eq!(ranked_ids(tops), vec!["t3", "t1", "t2"]);
    let ranks: Vec<usize> = tops.pairings.iter().map(|p| p.rank).collect();
    assert_eq!(ranks, vec![1, 2, 3]);
}

#[tokio::test]
async fn test_reversing_ranker_is_respected() {
    let buckets = run(Arc::new(ReversingRanker)).await;
    assert_eq!(
        ranked_ids(bucket(&buckets, DisplayBucket::Tops)),
        vec!["t4", "t3", "t2"]
    );
}

// ==========================================
// 场景3: 原序兜底
// ==========================================

#[tokio::test]
async fn test_failing_ranker_falls_back_to_original_order() {
    let buckets = run(Arc::new(FailingRanker)).await;
    let tops = bucket(&buckets, DisplayBucket::Tops);
    assert!(!tops.ranked_externally);
    assert_eq!(ranked_ids(tops), vec!["t1", "t2", "t3"]);
}

#[tokio::test]
async fn test_only_unknown_ids_fall_back_to_original_order() {
    let buckets = run(Arc::new(FixedRanker::new(&["ghost", "phantom"]))).await;
    let tops = bucket(&buckets, DisplayBucket::Tops);
    assert!(!tops.ranked_externally);
    assert_eq!(ranked_ids(tops), vec!["t1", "t2", "t3"]);
}

#[tokio::test]
async fn test_slow_ranker_times_out() {
    let wardrobe = mixed_wardrobe();
    let reference = jeans(&wardrobe);
    let ranker = PairingRanker::new(
        Arc::new(SlowRanker {
            delay: Duration::from_millis(500),
        }),
        3,
        50,
    );

    let buckets = ranker.rank_pairings(&reference, &wardrobe).await;
    let tops = bucket(&buckets, DisplayBucket::Tops);
    assert!(!tops.ranked_externally);
    assert_eq!(ranked_ids(tops), vec!["t1", "t2", "t3"]);
}

#[tokio::test]
async fn test_top_k_from_config() {
    let mut config = MockConfig::default();
    config.ranking_top_k = 2;
    let wardrobe = mixed_wardrobe();
    let reference = jeans(&wardrobe);

    let buckets = PairingRanker::from_config(&config, Arc::new(NoOpRankingService))
        .await
        .unwrap()
        .rank_pairings(&reference, &wardrobe)
        .await;
    let tops = bucket(&buckets, DisplayBucket::Tops);
    assert_eq!(tops.candidates, 4);
    assert_eq!(ranked_ids(tops), vec!["t1", "t2"]);
}
