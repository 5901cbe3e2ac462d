// ==========================================
// 外勤任务路线规划系统 - 核心库
// ==========================================
// 技术栈: Rust + calamine + csv + rust_xlsxwriter
// 系统定位: 工作量均衡分配 (不做真实路径优化)
// ==========================================

// 初始化国际化系统
rust_i18n::i18n!("locales", fallback = "es");

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 引擎层 - 时长估算 / 分组 / 均衡分配
pub mod engine;

// 导入层 - 外部表格
pub mod importer;

// 导出层 - 每个操作员一张表
pub mod export;

// 配置层 - 系统配置
pub mod config;

// 日志系统
pub mod logging;

// 性能统计
pub mod perf;

// 国际化
pub mod i18n;

// API 层 - 前端入口
pub mod api;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域实体
pub use domain::{
    ImportReport, LocationGroup, PlanSummary, PlanningResult, RawTaskRecord, Task,
    WorkerAssignment, WorkerCount,
};

// 引擎
pub use engine::{DurationEstimator, LoadBalancer, PlanningOrchestrator, TaskGrouper};

// API
pub use api::{PlanApi, PlanResponse};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "Planificador de Rutas";
