// ==========================================
// 外勤任务路线规划系统 - 领域类型定义
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

// ==========================================
// 缺省字段值
// ==========================================
// 源表缺列/空单元格时的占位值; 带占位值的任务不参与规划
pub const DEFAULT_CLIENT: &str = "Cliente sin nombre";
pub const DEFAULT_LOCATION: &str = "Sin ubicación";

// ==========================================
// 操作员数量 (Worker Count)
// ==========================================
// 红线: 仅允许 1..=3, 非法值在构造时拒绝, 分配引擎不再校验
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct WorkerCount(u8);

/// 操作员数量非法
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("操作员数量非法: {0}（仅支持 1、2、3）")]
pub struct InvalidWorkerCount(pub i64);

impl WorkerCount {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 3;

    /// 校验并构造操作员数量
    pub fn new(count: u8) -> Result<Self, InvalidWorkerCount> {
        if (Self::MIN..=Self::MAX).contains(&count) {
            Ok(Self(count))
        } else {
            Err(InvalidWorkerCount(count as i64))
        }
    }

    /// 从任意整数构造（CLI / 配置文件入口）
    pub fn from_i64(count: i64) -> Result<Self, InvalidWorkerCount> {
        u8::try_from(count)
            .map_err(|_| InvalidWorkerCount(count))
            .and_then(Self::new)
    }

    pub fn get(self) -> u8 {
        self.0
    }

    pub fn as_usize(self) -> usize {
        self.0 as usize
    }
}

impl Default for WorkerCount {
    fn default() -> Self {
        Self(Self::MIN)
    }
}

impl TryFrom<u8> for WorkerCount {
    type Error = InvalidWorkerCount;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<WorkerCount> for u8 {
    fn from(value: WorkerCount) -> Self {
        value.0
    }
}

impl fmt::Display for WorkerCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
