// ==========================================
// 衣橱搭配引擎 - 命令行入口
// ==========================================
// 用法: outfit-engine <wardrobe.json> [reference_item_id]
// 输出: 衣橱评分 + 季节覆盖（JSON）; 指定参照单品时附带配对分桶
// 说明: 命令行不接外部排序服务, 配对结果走确定性原序
// 日志: OUTFIT_ENGINE_LOG_FORMAT=json 切换为 JSON 日志
// ==========================================

use anyhow::Context;
use outfit_engine::cache::{AnalysisCache, DEFAULT_MAX_ENTRIES};
use outfit_engine::config::{ConfigManager, EngineConfigReader};
use outfit_engine::domain::{GarmentItem, RawGarmentRecord};
use outfit_engine::engine::{NoOpRankingService, PairingRanker, ScoreEngine};
use outfit_engine::logging;
use serde_json::json;
use std::sync::Arc;

const USAGE: &str = "用法: outfit-engine <wardrobe.json> [reference_item_id]";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    match std::env::var("OUTFIT_ENGINE_LOG_FORMAT").as_deref() {
        Ok("json") => logging::init_json(),
        _ => logging::init(),
    }

    let args: Vec<String> = std::env::args().skip(1).collect();
    let Some(wardrobe_path) = args.first() else {
        anyhow::bail!(USAGE);
    };
    let reference_id = args.get(1);

    tracing::info!(
        "{} v{} - 读取衣橱: {}",
        outfit_engine::APP_NAME,
        outfit_engine::VERSION,
        wardrobe_path
    );

    let config = ConfigManager::new();
    let overrides = config.apply_env_overrides()?;
    if overrides > 0 {
        tracing::info!(overrides, "已应用环境变量配置覆写");
    }

    // ==========================================
    // 步骤1: 读取并适配原始单品记录
    // ==========================================
    let raw = std::fs::read_to_string(wardrobe_path)
        .with_context(|| format!("无法读取衣橱文件: {}", wardrobe_path))?;
    let records: Vec<RawGarmentRecord> =
        serde_json::from_str(&raw).context("衣橱文件必须为单品记录 JSON 数组")?;
    let wardrobe: Vec<GarmentItem> = records.into_iter().map(GarmentItem::from_raw).collect();
    tracing::info!(items = wardrobe.len(), "衣橱加载完成");

    // ==========================================
    // 步骤2: 衣橱评分
    // ==========================================
    let cache = AnalysisCache::from_config(&config, DEFAULT_MAX_ENTRIES).await?;
    let scores = cache.get_or_compute(&wardrobe, &[])?;
    let seasonal_coverage = ScoreEngine::new().calculate_seasonal_coverage(&wardrobe);

    let mut output = json!({
        "scores": scores,
        "seasonal_coverage": seasonal_coverage,
    });

    // ==========================================
    // 步骤3: 单品配对（可选）
    // ==========================================
    if let Some(reference_id) = reference_id {
        let reference = wardrobe
            .iter()
            .find(|item| &item.id == reference_id)
            .with_context(|| format!("衣橱中不存在参照单品: {}", reference_id))?;

        let ranker = PairingRanker::from_config(&config, Arc::new(NoOpRankingService)).await?;
        let buckets = ranker.rank_pairings(reference, &wardrobe).await;
        tracing::info!(
            reference = %reference.id,
            buckets = buckets.len(),
            top_k = config.get_ranking_top_k().await?,
            "配对完成"
        );
        output["pairings"] = serde_json::to_value(&buckets)?;
    }

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
