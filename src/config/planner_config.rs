use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// 源表列位置（从 0 开始, 源表无表头）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColumnLayout {
    pub client: usize,
    pub address: usize,
    pub location: usize,
    pub description: usize,
}

impl Default for ColumnLayout {
    fn default() -> Self {
        Self {
            client: 3,
            address: 4,
            location: 6,
            description: 11,
        }
    }
}

/// 规划配置（持久化对象）
///
/// 存储位置：JSON 文件, 缺省字段取默认值
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlannerConfig {
    /// 源表列位置
    pub column_layout: ColumnLayout,

    /// 默认操作员数量（1~3, 使用时校验）
    pub default_worker_count: u8,

    /// 分组表头行的日期标记; 为空时取当前语言的默认值
    pub day_label: Option<String>,

    /// 导出目录
    pub output_dir: PathBuf,

    /// 界面/导出语言（es / en）
    pub locale: String,

    /// 导入报告中的预览行数
    pub preview_rows: usize,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            column_layout: ColumnLayout::default(),
            default_worker_count: 1,
            day_label: None,
            output_dir: PathBuf::from("."),
            locale: "es".to_string(),
            preview_rows: 5,
        }
    }
}
