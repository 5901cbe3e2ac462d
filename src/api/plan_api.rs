// ==========================================
// 外勤任务路线规划系统 - 规划 API
// ==========================================
// 流程: 校验操作员数量 → 导入任务 → 分组/分配 → 导出
// 红线: 每次调用独立, 不共享可变状态; 无重试
// ==========================================

use crate::api::error::{ApiError, ApiResult};
use crate::config::PlannerConfigReader;
use crate::domain::plan::{PlanSummary, PlanningResult};
use crate::domain::task::ImportReport;
use crate::domain::types::WorkerCount;
use crate::engine::PlanningOrchestrator;
use crate::export::{ExportLabels, PlanExport, PlanExporter};
use crate::importer::{ImportedTasks, TaskImporterImpl};
use futures::future::join_all;
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{error, info, instrument};
use uuid::Uuid;

// ==========================================
// PlanResponse - 规划响应
// ==========================================
#[derive(Debug, Clone, Serialize)]
pub struct PlanResponse {
    pub summary: PlanSummary,
    pub import_report: ImportReport,
    pub result: PlanningResult,
    pub export: PlanExport,
}

// ==========================================
// PlanApi - 规划 API
// ==========================================
pub struct PlanApi<C>
where
    C: PlannerConfigReader,
{
    config: Arc<C>,
    importer: Arc<TaskImporterImpl>,
    orchestrator: PlanningOrchestrator,
    exporter: PlanExporter,
}

impl<C> Clone for PlanApi<C>
where
    C: PlannerConfigReader,
{
    fn clone(&self) -> Self {
        Self {
            config: self.config.clone(),
            importer: self.importer.clone(),
            orchestrator: self.orchestrator.clone(),
            exporter: self.exporter.clone(),
        }
    }
}

impl<C> PlanApi<C>
where
    C: PlannerConfigReader + 'static,
{
    /// 创建新的 PlanApi 实例
    ///
    /// # 参数
    /// - config: 配置读取器（列位置、语言、导出目录等）
    pub fn new(config: Arc<C>) -> Self {
        let importer = TaskImporterImpl::with_layout(config.column_layout())
            .with_preview_rows(config.preview_rows());
        let labels = ExportLabels::for_locale(&config.locale(), config.day_label());

        Self {
            importer: Arc::new(importer),
            orchestrator: PlanningOrchestrator::new(),
            exporter: PlanExporter::new(labels),
            config,
        }
    }

    /// 解析操作员数量（None 取配置默认值）
    pub fn resolve_worker_count(&self, workers: Option<i64>) -> ApiResult<WorkerCount> {
        match workers {
            Some(n) => Ok(WorkerCount::from_i64(n)?),
            None => Ok(self.config.default_worker_count()?),
        }
    }

    /// 规划单个文件
    ///
    /// # 参数
    /// - file_path: 任务表格路径（.xlsx/.xls/.csv）
    /// - workers: 操作员数量（1~3, None 取配置默认值）
    ///
    /// # 返回
    /// 规划摘要 + 导入报告 + 分配结果 + 导出表
    #[instrument(skip(self, file_path), fields(file = %file_path.display(), run_id))]
    pub fn plan_file(&self, file_path: &Path, workers: Option<i64>) -> ApiResult<PlanResponse> {
        // 先校验参数, 再读文件
        let worker_count = self.resolve_worker_count(workers)?;
        let imported = self.importer.import_file(file_path)?;
        self.plan_imported(imported, worker_count)
    }

    /// 规划已解析的行（无文件）
    pub fn plan_rows(
        &self,
        source: &str,
        rows: Vec<Vec<String>>,
        workers: Option<i64>,
    ) -> ApiResult<PlanResponse> {
        let worker_count = self.resolve_worker_count(workers)?;
        let imported = self.importer.import_rows(source, rows);
        self.plan_imported(imported, worker_count)
    }

    fn plan_imported(&self, imported: ImportedTasks, worker_count: WorkerCount) -> ApiResult<PlanResponse> {
        let run_id = Uuid::new_v4().to_string();
        tracing::Span::current().record("run_id", run_id.as_str());

        let ImportedTasks { report, tasks } = imported;
        let result = self.orchestrator.execute(tasks, worker_count);
        let export = self.exporter.export(&result)?;
        let summary = PlanSummary::from_result(&run_id, worker_count, &result);

        info!(
            run_id = %run_id,
            worker_count = %worker_count,
            total_task_count = summary.total_task_count,
            total_duration = summary.total_duration,
            sheets = export.sheets.len(),
            "规划完成"
        );

        Ok(PlanResponse {
            summary,
            import_report: report,
            result,
            export,
        })
    }

    /// 写出导出表
    ///
    /// # 参数
    /// - response: 规划响应
    /// - dir: 导出目录（None 取配置值）
    ///
    /// # 返回
    /// 工作簿文件路径（<dir>/<file_stem>.xlsx）
    pub fn write_export(&self, response: &PlanResponse, dir: Option<&Path>) -> ApiResult<PathBuf> {
        Ok(response.export.write_to_dir(&self.export_dir(dir))?)
    }

    /// 以 CSV 写出导出表（每个操作员一个文件）
    pub fn write_csv_export(&self, response: &PlanResponse, dir: Option<&Path>) -> ApiResult<PathBuf> {
        Ok(response.export.write_csv_to_dir(&self.export_dir(dir))?)
    }

    fn export_dir(&self, dir: Option<&Path>) -> PathBuf {
        dir.map(Path::to_path_buf).unwrap_or_else(|| self.config.output_dir())
    }

    /// 批量规划多个文件（并发执行）
    ///
    /// 每个文件在阻塞线程池上独立规划, 单个文件失败不影响其他文件
    pub async fn batch_plan(
        &self,
        file_paths: Vec<PathBuf>,
        workers: Option<i64>,
    ) -> ApiResult<Vec<Result<PlanResponse, String>>> {
        if file_paths.is_empty() {
            return Err(ApiError::InvalidInput("未指定任何文件".to_string()));
        }
        // 参数错误对所有文件相同, 提前返回
        let worker_count = self.resolve_worker_count(workers)?;
        info!(count = file_paths.len(), worker_count = %worker_count, "开始批量规划");

        let tasks = file_paths.into_iter().map(|path| {
            let api = self.clone();
            async move {
                let path_str = path.display().to_string();
                let joined = tokio::task::spawn_blocking(move || {
                    api.plan_file(&path, Some(worker_count.get() as i64))
                })
                .await
                .map_err(ApiError::from)
                .and_then(|r| r);

                joined.map_err(|e| {
                    error!(file = %path_str, error = %e, "文件规划失败");
                    format!("{}: {}", path_str, e)
                })
            }
        });

        let results = join_all(tasks).await;
        info!(
            total = results.len(),
            success = results.iter().filter(|r| r.is_ok()).count(),
            "批量规划完成"
        );
        Ok(results)
    }
}
