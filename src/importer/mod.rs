// ==========================================
// 外勤任务路线规划系统 - 导入层
// ==========================================
// 职责: 无表头表格 → 按列位置映射 → 时长估算 → 有效性过滤
// 支持: Excel (.xlsx/.xls), CSV
// ==========================================

pub mod data_cleaner;
pub mod error;
pub mod field_mapper;
pub mod file_parser;
pub mod task_importer_impl;
pub mod task_importer_trait;

// 重导出核心类型
pub use data_cleaner::DataCleaner as DataCleanerImpl;
pub use error::{ImportError, ImportResult};
pub use field_mapper::FieldMapper as FieldMapperImpl;
pub use file_parser::{CsvParser, ExcelParser, UniversalFileParser};
pub use task_importer_impl::{ImportedTasks, TaskImporterImpl};

// 重导出 Trait 接口
pub use task_importer_trait::{DataCleaner, FieldMapper, FileParser, ParsedRow};
