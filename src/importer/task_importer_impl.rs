// ==========================================
// 外勤任务路线规划系统 - 任务导入器实现
// ==========================================
// 流程: 解析 → 映射 → 估算时长 → 有效性过滤
// 红线: 单行失败只记录并跳过, 不中断整批导入
// ==========================================

use crate::config::ColumnLayout;
use crate::domain::task::{ImportReport, Task};
use crate::engine::DurationEstimator;
use crate::importer::error::ImportResult;
use crate::importer::field_mapper::FieldMapper as FieldMapperImpl;
use crate::importer::file_parser::UniversalFileParser;
use crate::importer::task_importer_trait::{FieldMapper, FileParser, ParsedRow};
use std::path::Path;
use std::time::Instant;
use tracing::{debug, error, info, instrument, warn};

/// 导入报告中保留的预览行数
pub const DEFAULT_PREVIEW_ROWS: usize = 5;

/// 导入结果: 有效任务（源文件顺序）+ 导入报告
#[derive(Debug, Clone)]
pub struct ImportedTasks {
    pub report: ImportReport,
    pub tasks: Vec<Task>,
}

// ==========================================
// TaskImporterImpl - 任务导入器实现
// ==========================================
pub struct TaskImporterImpl {
    file_parser: Box<dyn FileParser>,
    field_mapper: Box<dyn FieldMapper>,
    estimator: DurationEstimator,
    preview_rows: usize,
}

impl TaskImporterImpl {
    /// 创建导入器
    ///
    /// # 参数
    /// - file_parser: 文件解析器
    /// - field_mapper: 列位置映射器
    pub fn new(file_parser: Box<dyn FileParser>, field_mapper: Box<dyn FieldMapper>) -> Self {
        Self {
            file_parser,
            field_mapper,
            estimator: DurationEstimator::new(),
            preview_rows: DEFAULT_PREVIEW_ROWS,
        }
    }

    /// 按扩展名自动选择解析器, 使用给定列位置
    pub fn with_layout(layout: ColumnLayout) -> Self {
        Self::new(
            Box::new(UniversalFileParser),
            Box::new(FieldMapperImpl::new(layout)),
        )
    }

    pub fn with_preview_rows(mut self, preview_rows: usize) -> Self {
        self.preview_rows = preview_rows;
        self
    }

    /// 从表格文件导入任务（同步, 批量场景由调用方放到阻塞线程池）
    ///
    /// # 导入流程
    /// 1. 文件读取与解析（无表头, 按位置）
    /// 2. 列位置映射 + 缺省值填充
    /// 3. 有效性过滤（缺客户/缺地点的行丢弃）
    /// 4. 时长估算
    ///
    /// # 返回
    /// - Ok(ImportedTasks): 有效任务 + 导入报告
    /// - Err: 文件不存在、格式不支持、文件级解析失败
    #[instrument(skip(self, file_path), fields(file_path = %file_path.display()))]
    pub fn import_file(&self, file_path: &Path) -> ImportResult<ImportedTasks> {
        let start_time = Instant::now();

        // === 步骤 1: 解析文件 ===
        debug!("步骤 1: 解析文件");
        let rows = self.file_parser.parse_to_rows(file_path).map_err(|e| {
            error!(error = %e, "文件解析失败");
            e
        })?;

        let imported = self.import_parsed(&file_path.display().to_string(), rows);

        info!(
            total = imported.report.total_rows,
            valid = imported.report.valid_tasks,
            dropped = imported.report.dropped_invalid,
            failed = imported.report.failed_rows,
            elapsed_ms = start_time.elapsed().as_millis() as u64,
            "任务导入完成"
        );
        Ok(imported)
    }

    /// 处理已解析的行
    ///
    /// # 参数
    /// - source: 数据来源（写入报告）
    /// - rows: 按位置排列的单元格文本
    pub fn import_rows(&self, source: &str, rows: Vec<Vec<String>>) -> ImportedTasks {
        self.import_parsed(source, rows.into_iter().map(Ok).collect())
    }

    /// 处理解析结果（含行级解码错误）
    pub fn import_parsed(&self, source: &str, rows: Vec<ParsedRow>) -> ImportedTasks {
        let mut report = ImportReport {
            source: source.to_string(),
            total_rows: rows.len(),
            preview: rows
                .iter()
                .filter_map(|row| row.as_ref().ok())
                .take(self.preview_rows)
                .cloned()
                .collect(),
            ..ImportReport::default()
        };

        // === 步骤 2-4: 映射 / 过滤 / 估算 ===
        let mut tasks = Vec::new();
        for (idx, row) in rows.iter().enumerate() {
            let row_number = idx + 1;
            let cells = match row {
                Ok(cells) => cells,
                Err(e) => {
                    warn!(row_number, error = %e, "行解码失败, 已跳过");
                    report.failed_rows += 1;
                    continue;
                }
            };

            let record = match self.field_mapper.map_row(cells, row_number) {
                Ok(record) => record,
                Err(e) => {
                    warn!(row_number, error = %e, "行处理失败, 已跳过");
                    report.failed_rows += 1;
                    continue;
                }
            };

            if !record.is_valid() {
                debug!(
                    row_number,
                    client = %record.client,
                    location = %record.location,
                    "缺少客户或地点, 已过滤"
                );
                report.dropped_invalid += 1;
                continue;
            }

            let duration = self.estimator.estimate(Some(&record.description));
            tasks.push(Task::from_record(record, duration));
        }

        report.valid_tasks = tasks.len();
        ImportedTasks { report, tasks }
    }
}

impl Default for TaskImporterImpl {
    fn default() -> Self {
        Self::with_layout(ColumnLayout::default())
    }
}
