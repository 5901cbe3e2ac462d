// ==========================================
// 外勤任务路线规划系统 - 配置读取 Trait
// ==========================================
// 职责: 定义规划流程所需的配置读取接口（不包含实现）
// ==========================================

use crate::config::error::ConfigResult;
use crate::config::planner_config::ColumnLayout;
use crate::domain::types::WorkerCount;
use std::path::PathBuf;

// ==========================================
// PlannerConfigReader Trait
// ==========================================
// 实现者: ConfigManager
pub trait PlannerConfigReader: Send + Sync {
    /// 源表列位置
    ///
    /// # 默认值
    /// - client=3, address=4, location=6, description=11
    fn column_layout(&self) -> ColumnLayout;

    /// 默认操作员数量
    ///
    /// # 默认值
    /// - 1
    fn default_worker_count(&self) -> ConfigResult<WorkerCount>;

    /// 分组表头行的日期标记（None 表示使用语言默认值）
    fn day_label(&self) -> Option<String>;

    /// 导出目录
    fn output_dir(&self) -> PathBuf;

    /// 语言
    ///
    /// # 默认值
    /// - es
    fn locale(&self) -> String;

    /// 预览行数
    fn preview_rows(&self) -> usize;
}
