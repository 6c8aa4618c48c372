// ==========================================
// 衣橱搭配引擎 - 协作方输出解析
// ==========================================
// 职责: 从代码块/前后缀文字中提取 JSON, 反序列化为结构化结果
// 红线: 解析失败统一返回 EngineError::MalformedResponse, 不 panic
// ==========================================

use crate::domain::outfit::{RawProposal, ValidationVerdict};
use crate::error::{EngineError, EngineResult};
use serde::Deserialize;

/// 提取 JSON 片段
///
/// # 规则
/// 1. 存在 ``` 代码块 → 取首个代码块内容（去掉语言标记）
/// 2. 否则取最外层 `{ ... }` 区间
/// 3. 否则返回去空白后的原文
pub fn extract_json_block(text: &str) -> &str {
    if let Some(start) = text.find("```") {
        let after = &text[start + 3..];
        // 跳过语言标记行（如 ```json）
        let body = match after.find('\n') {
            Some(nl) if !after[..nl].trim().contains('{') => &after[nl + 1..],
            _ => after,
        };
        if let Some(end) = body.find("```") {
            return body[..end].trim();
        }
    }

    match (text.find('{'), text.rfind('}')) {
        (Some(start), Some(end)) if end > start => &text[start..=end],
        _ => text.trim(),
    }
}

/// 解析生成器输出
pub fn parse_proposal(text: &str) -> EngineResult<RawProposal> {
    let block = extract_json_block(text);
    serde_json::from_str::<RawProposal>(block)
        .map_err(|e| EngineError::MalformedResponse(format!("搭配方案解析失败: {}", e)))
}

#[derive(Debug, Deserialize)]
struct ValidationPayload {
    #[serde(default = "default_true", alias = "isValid")]
    is_valid: bool,
    #[serde(default, alias = "combinedFeedback")]
    combined_feedback: Option<String>,
    #[serde(default)]
    feedback: Option<String>,
}

fn default_true() -> bool {
    true
}

/// 解析校验器输出
///
/// # 规则
/// - is_valid 缺省为 true
/// - 反馈优先取 combined_feedback, 其次 feedback
pub fn parse_validation(text: &str) -> EngineResult<ValidationVerdict> {
    let block = extract_json_block(text);
    let payload: ValidationPayload = serde_json::from_str(block)
        .map_err(|e| EngineError::MalformedResponse(format!("校验结果解析失败: {}", e)))?;

    Ok(ValidationVerdict {
        is_valid: payload.is_valid,
        feedback: payload
            .combined_feedback
            .or(payload.feedback)
            .unwrap_or_default(),
    })
}
