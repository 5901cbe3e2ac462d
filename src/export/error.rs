// ==========================================
// 外勤任务路线规划系统 - 导出模块错误类型
// ==========================================

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("表格写入失败: {0}")]
    SheetWriteError(String),

    #[error("工作簿生成失败: {0}")]
    WorkbookError(String),

    #[error("表格缓冲区收尾失败: {0}")]
    BufferFinalizeError(String),

    #[error("文件写入失败 ({path}): {message}")]
    FileWriteError { path: String, message: String },
}

impl From<csv::Error> for ExportError {
    fn from(err: csv::Error) -> Self {
        ExportError::SheetWriteError(err.to_string())
    }
}

impl From<rust_xlsxwriter::XlsxError> for ExportError {
    fn from(err: rust_xlsxwriter::XlsxError) -> Self {
        ExportError::WorkbookError(err.to_string())
    }
}

/// Result 类型别名
pub type ExportResult<T> = Result<T, ExportError>;
