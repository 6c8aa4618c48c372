// ==========================================
// 衣橱搭配引擎 - 引擎错误类型
// ==========================================
// 工具: thiserror 派生宏
// 红线: 纯评分/规则函数不返回错误; 只有编排与外部协作方路径产生 EngineError
// ==========================================

use thiserror::Error;

/// 引擎错误类型
#[derive(Error, Debug)]
pub enum EngineError {
    // ===== 输入错误（致命, 通道启动前抛出）=====
    #[error("候选单品不足: 过滤后剩余 {available} 件, 至少需要 {required} 件")]
    InsufficientInput { available: usize, required: usize },

    // ===== 通道内错误（可重试, 不影响其它通道）=====
    #[error("生成失败 (通道 {lane}, 第 {attempt} 次): {message}")]
    GenerationFailure {
        lane: usize,
        attempt: u32,
        message: String,
    },

    #[error("协作方返回格式错误: {0}")]
    MalformedResponse(String),

    #[error("通道 {lane} 超时 ({timeout_ms}ms)")]
    LaneTimeout { lane: usize, timeout_ms: u64 },

    #[error("通道 {lane} 异常终止: {message}")]
    LanePanicked { lane: usize, message: String },

    // ===== 汇总错误（唯一对调用方报告的生成失败）=====
    #[error("全部 {lanes} 个通道均未产出搭配")]
    AggregateFailure { lanes: usize },

    // ===== 配置错误 =====
    #[error("配置值格式错误 (key: {key}): {message}")]
    Config { key: String, message: String },

    // ===== 缓存错误 =====
    #[error("缓存键计算失败: {0}")]
    Cache(String),

    // ===== 通用错误 =====
    #[error("JSON 解析失败: {0}")]
    Json(#[from] serde_json::Error),

    #[error("文件读取失败: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result 类型别名
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_carry_context() {
        let err = EngineError::InsufficientInput {
            available: 1,
            required: 2,
        };
        assert!(err.to_string().contains("1"));

        let err = EngineError::GenerationFailure {
            lane: 2,
            attempt: 3,
            message: "empty output".to_string(),
        };
        assert!(err.to_string().contains("通道 2"));
        assert!(err.to_string().contains("empty output"));
    }

    #[test]
    fn test_anyhow_conversion() {
        let err: EngineError = anyhow::anyhow!("upstream down").into();
        assert!(matches!(err, EngineError::Other(_)));
    }
}
