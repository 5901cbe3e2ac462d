// ==========================================
// 外勤任务路线规划系统 - 导出层
// ==========================================
// 职责: PlanningResult → xlsx 工作簿, 每个操作员一张工作表
// 格式: 每个地点一行分组表头, 其后每个任务一行
// ==========================================

pub mod error;
pub mod plan_exporter;
pub mod sheet_buffer;

pub use error::{ExportError, ExportResult};
pub use plan_exporter::{ExportLabels, PlanExport, PlanExporter};
pub use sheet_buffer::{ExportSheet, SheetBuffer};
