// ==========================================
// 外勤任务路线规划系统 - 任务领域模型
// ==========================================
// 用途: 导入层写入, 引擎层只读
// ==========================================

use crate::domain::types::{DEFAULT_CLIENT, DEFAULT_LOCATION};
use serde::{Deserialize, Serialize};

// ==========================================
// RawTaskRecord - 导入中间结构体
// ==========================================
// 列位置解析完成、缺省值已填充, 尚未估算时长
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawTaskRecord {
    pub row_number: usize,   // 源文件行号（从 1 开始）
    pub client: String,      // 客户名称
    pub location: String,    // 目的地（城镇）
    pub address: String,     // 地址
    pub description: String, // 任务描述（时长估算依据）
}

impl RawTaskRecord {
    /// 是否可参与规划: 客户与地点均不是缺省占位值
    pub fn is_valid(&self) -> bool {
        self.client != DEFAULT_CLIENT && self.location != DEFAULT_LOCATION
    }
}

// ==========================================
// Task - 外勤任务
// ==========================================
// 红线: 创建后不可变
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub client: String,
    pub location: String,
    pub address: String,
    pub description: String,
    pub duration_minutes: u32, // 估算时长（分钟）
}

impl Task {
    pub fn from_record(record: RawTaskRecord, duration_minutes: u32) -> Self {
        Self {
            client: record.client,
            location: record.location,
            address: record.address,
            description: record.description,
            duration_minutes,
        }
    }
}

// ==========================================
// ImportReport - 导入报告
// ==========================================
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ImportReport {
    pub source: String,            // 源文件路径
    pub total_rows: usize,         // 非空行数
    pub valid_tasks: usize,        // 有效任务数
    pub dropped_invalid: usize,    // 缺客户/缺地点被过滤的行数
    pub failed_rows: usize,        // 行级处理失败被跳过的行数
    pub preview: Vec<Vec<String>>, // 前若干行原始数据（预览）
}
