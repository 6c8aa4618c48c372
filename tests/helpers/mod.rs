// ==========================================
// 集成测试共享辅助模块
// ==========================================
#![allow(dead_code)]

pub mod mock_config;
pub mod stub_collaborators;
pub mod test_data_builder;
