// ==========================================
// 外勤任务路线规划系统 - 规划结果导出器
// ==========================================
// 表头: Día | Población | Cliente | Dirección | Tarea | Duración
// 分组行: <日期标记>, <地点>, 其余留空
// 任务行: 空, 空, 客户, 地址, 描述, "<分钟> min"
// 无任务的操作员不生成表
// 输出: 一个 xlsx 工作簿（每个操作员一张工作表）, CSV 为副格式
// ==========================================

use crate::domain::plan::{LocationGroup, PlanningResult, WorkerAssignment};
use crate::export::error::{ExportError, ExportResult};
use crate::export::sheet_buffer::{ExportSheet, SheetBuffer};
use crate::i18n::{t_in, t_in_with_args};
use chrono::{DateTime, Local};
use rust_xlsxwriter::Workbook;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::{info, instrument};

// ==========================================
// ExportLabels - 导出文本
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportLabels {
    pub locale: String,
    pub headers: [String; 6],
    pub day_label: String,
}

impl ExportLabels {
    /// 按语言取导出文本
    ///
    /// # 参数
    /// - locale: 语言
    /// - day_label: 日期标记覆写值（None 时取语言默认值）
    pub fn for_locale(locale: &str, day_label: Option<String>) -> Self {
        let headers = [
            "export.header_day",
            "export.header_location",
            "export.header_client",
            "export.header_address",
            "export.header_task",
            "export.header_duration",
        ]
        .map(|key| t_in(locale, key));

        Self {
            locale: locale.to_string(),
            headers,
            day_label: day_label.unwrap_or_else(|| t_in(locale, "export.day_label")),
        }
    }

    pub fn sheet_name(&self, worker_id: u8) -> String {
        t_in_with_args(&self.locale, "export.sheet_name", &[("id", &worker_id.to_string())])
    }

    pub fn file_stem(&self, at: DateTime<Local>) -> String {
        format!(
            "{}_{}",
            t_in(&self.locale, "export.file_stem"),
            at.format("%Y%m%d_%H%M%S")
        )
    }
}

impl Default for ExportLabels {
    fn default() -> Self {
        Self::for_locale("es", None)
    }
}

// ==========================================
// PlanExport - 导出结果
// ==========================================
#[derive(Debug, Clone, Serialize)]
pub struct PlanExport {
    pub file_stem: String,
    pub sheets: Vec<ExportSheet>,
    /// xlsx 工作簿字节
    #[serde(skip)]
    pub workbook: Vec<u8>,
}

impl PlanExport {
    pub fn sheet(&self, name: &str) -> Option<&ExportSheet> {
        self.sheets.iter().find(|s| s.name == name)
    }

    pub fn workbook_file_name(&self) -> String {
        format!("{}.xlsx", self.file_stem)
    }

    /// 写入 <dir>/<file_stem>.xlsx
    ///
    /// # 返回
    /// 工作簿文件路径
    pub fn write_to_dir(&self, dir: &Path) -> ExportResult<PathBuf> {
        create_dir(dir)?;
        let path = dir.join(self.workbook_file_name());
        write_file(&path, &self.workbook)?;

        info!(path = %path.display(), sheets = self.sheets.len(), "导出工作簿写入完成");
        Ok(path)
    }

    /// 写入 <dir>/<file_stem>/<sheet>.csv
    ///
    /// # 返回
    /// CSV 目录路径
    pub fn write_csv_to_dir(&self, dir: &Path) -> ExportResult<PathBuf> {
        let target = dir.join(&self.file_stem);
        create_dir(&target)?;
        for sheet in &self.sheets {
            write_file(&target.join(format!("{}.csv", sheet.name)), &sheet.bytes)?;
        }

        info!(path = %target.display(), sheets = self.sheets.len(), "CSV 导出写入完成");
        Ok(target)
    }
}

fn create_dir(dir: &Path) -> ExportResult<()> {
    std::fs::create_dir_all(dir).map_err(|e| ExportError::FileWriteError {
        path: dir.display().to_string(),
        message: e.to_string(),
    })
}

fn write_file(path: &Path, bytes: &[u8]) -> ExportResult<()> {
    std::fs::write(path, bytes).map_err(|e| ExportError::FileWriteError {
        path: path.display().to_string(),
        message: e.to_string(),
    })
}

// ==========================================
// PlanExporter - 规划结果导出器
// ==========================================
#[derive(Debug, Clone, Default)]
pub struct PlanExporter {
    labels: ExportLabels,
}

impl PlanExporter {
    pub fn new(labels: ExportLabels) -> Self {
        Self { labels }
    }

    pub fn labels(&self) -> &ExportLabels {
        &self.labels
    }

    /// 导出规划结果（文件名时间戳取当前本地时间）
    pub fn export(&self, result: &PlanningResult) -> ExportResult<PlanExport> {
        self.export_at(result, Local::now())
    }

    /// 导出规划结果
    #[instrument(skip(self, result, at), fields(workers = result.assignments.len()))]
    pub fn export_at(&self, result: &PlanningResult, at: DateTime<Local>) -> ExportResult<PlanExport> {
        let mut workbook = Workbook::new();
        let mut sheets = Vec::new();
        for assignment in result.assignments.iter().filter(|a| !a.is_empty()) {
            sheets.push(self.render_worker(&mut workbook, assignment)?);
        }
        let workbook = workbook.save_to_buffer()?;

        Ok(PlanExport {
            file_stem: self.labels.file_stem(at),
            sheets,
            workbook,
        })
    }

    fn render_worker(
        &self,
        workbook: &mut Workbook,
        assignment: &WorkerAssignment,
    ) -> ExportResult<ExportSheet> {
        let mut buffer = SheetBuffer::acquire(self.labels.sheet_name(assignment.worker_id))?;
        buffer.write_header(&self.labels.headers)?;
        for group in &assignment.groups {
            self.render_group(&mut buffer, group)?;
        }
        buffer.finalize(workbook)
    }

    fn render_group(&self, buffer: &mut SheetBuffer, group: &LocationGroup) -> ExportResult<()> {
        buffer.write_row([self.labels.day_label.as_str(), group.location.as_str(), "", "", "", ""])?;
        for task in &group.tasks {
            let duration = format!("{} min", task.duration_minutes);
            buffer.write_row([
                "",
                "",
                task.client.as_str(),
                task.address.as_str(),
                task.description.as_str(),
                duration.as_str(),
            ])?;
        }
        Ok(())
    }
}
