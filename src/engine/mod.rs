// ==========================================
// 外勤任务路线规划系统 - 引擎层
// ==========================================
// 职责: 时长估算 → 地点分组 → 均衡分配
// 红线: 引擎为纯同步计算, 不读文件, 不持有跨次状态
// ==========================================

pub mod balancer;
pub mod duration;
pub mod grouper;
pub mod orchestrator;

// 重导出核心引擎
pub use balancer::LoadBalancer;
pub use duration::{DurationEstimator, DEFAULT_NON_TEXT_MINUTES, REVIEW_BONUS_MINUTES};
pub use grouper::TaskGrouper;
pub use orchestrator::PlanningOrchestrator;
