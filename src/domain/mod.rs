// ==========================================
// 外勤任务路线规划系统 - 领域模型层
// ==========================================
// 职责: 定义任务、地点分组、操作员分配等领域实体
// 红线: 不含文件读取逻辑,不含分配算法
// ==========================================

pub mod plan;
pub mod task;
pub mod types;

// 重导出核心类型
pub use plan::{LocationGroup, PlanSummary, PlanningResult, WorkerAssignment, WorkerTotal};
pub use task::{ImportReport, RawTaskRecord, Task};
pub use types::{InvalidWorkerCount, WorkerCount, DEFAULT_CLIENT, DEFAULT_LOCATION};
