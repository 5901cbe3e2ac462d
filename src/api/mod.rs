// ==========================================
// 外勤任务路线规划系统 - API 层
// ==========================================
// 职责: 前端入口, 参数校验 → 导入 → 规划 → 导出
// ==========================================

pub mod error;
pub mod plan_api;

pub use error::{ApiError, ApiResult};
pub use plan_api::{PlanApi, PlanResponse};
