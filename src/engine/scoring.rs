// ==========================================
// 衣橱搭配引擎 - 衣橱评分引擎
// ==========================================
// 职责: 百搭度 / 协调度 / 完整度 / 季节分布 四项确定性评分
// 输入: 规范化单品列表
// 输出: ScoreResult（分数 + 解释性明细）
// 红线: 纯函数, 无 I/O, 无随机
// 红线: 空衣橱返回 0 分并附原因, 不返回错误
// ==========================================

mod cohesion;
mod completeness;
mod core;
mod seasonal;
mod versatility;


pub use core::ScoreEngine;
