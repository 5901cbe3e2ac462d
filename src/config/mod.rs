// ==========================================
// 外勤任务路线规划系统 - 配置层
// ==========================================
// 职责: 配置加载（JSON 文件 + 环境变量覆写）与查询
// 优先级: 环境变量 > 配置文件 > 内置默认值
// ==========================================

pub mod config_manager;
pub mod error;
pub mod planner_config;
pub mod planner_config_trait;

// 重导出核心配置管理器
pub use config_manager::{config_keys, ConfigManager};
pub use error::{ConfigError, ConfigResult};
pub use planner_config::{ColumnLayout, PlannerConfig};
pub use planner_config_trait::PlannerConfigReader;
