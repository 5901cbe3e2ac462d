// ==========================================
// 外勤任务路线规划系统 - API层错误类型
// ==========================================
// 职责: 汇总各层错误, 输出可直接展示给用户的错误消息
// ==========================================

use crate::config::ConfigError;
use crate::domain::types::InvalidWorkerCount;
use crate::export::ExportError;
use crate::importer::ImportError;
use thiserror::Error;

/// API层错误类型
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("无效输入: {0}")]
    InvalidInput(String),

    #[error(transparent)]
    InvalidWorkerCount(#[from] InvalidWorkerCount),

    #[error("导入失败: {0}")]
    Import(#[from] ImportError),

    #[error("导出失败: {0}")]
    Export(#[from] ExportError),

    #[error("配置错误: {0}")]
    Config(#[from] ConfigError),

    #[error("内部错误: {0}")]
    InternalError(String),
}

impl From<tokio::task::JoinError> for ApiError {
    fn from(err: tokio::task::JoinError) -> Self {
        ApiError::InternalError(err.to_string())
    }
}

/// Result 类型别名
pub type ApiResult<T> = Result<T, ApiError>;
