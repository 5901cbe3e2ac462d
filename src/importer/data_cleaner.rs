// ==========================================
// 外勤任务路线规划系统 - 数据清洗器实现
// ==========================================
// 职责: TRIM / NULL 标准化
// ==========================================

use crate::importer::task_importer_trait::DataCleaner as DataCleanerTrait;

/// 视为"缺失"的单元格文本（表格软件导出的常见空值标记）
const NULL_MARKERS: &[&str] = &[
    "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

#[derive(Debug, Clone, Copy, Default)]
pub struct DataCleaner;

impl DataCleanerTrait for DataCleaner {
    fn normalize_null(&self, value: Option<&str>) -> Option<String> {
        value.and_then(|v| {
            let trimmed = v.trim();
            if trimmed.is_empty() || Self::is_null_marker(trimmed) {
                None
            } else {
                Some(trimmed.to_string())
            }
        })
    }
}

impl DataCleaner {
    pub fn is_null_marker(value: &str) -> bool {
        NULL_MARKERS.contains(&value)
    }
}
