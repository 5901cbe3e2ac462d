// ==========================================
// 外勤任务路线规划系统 - 字段映射器实现
// ==========================================
// 职责: 列位置 → RawTaskRecord, 缺列/空单元格填充缺省值
// 默认列位置: 3=客户, 4=地址, 6=地点, 11=描述
// ==========================================

use crate::config::ColumnLayout;
use crate::domain::task::RawTaskRecord;
use crate::domain::types::{DEFAULT_CLIENT, DEFAULT_LOCATION};
use crate::importer::data_cleaner::DataCleaner;
use crate::importer::error::ImportResult;
use crate::importer::task_importer_trait::{
    DataCleaner as DataCleanerTrait, FieldMapper as FieldMapperTrait,
};

pub struct FieldMapper {
    layout: ColumnLayout,
    cleaner: DataCleaner,
}

impl FieldMapper {
    pub fn new(layout: ColumnLayout) -> Self {
        Self {
            layout,
            cleaner: DataCleaner,
        }
    }

    /// 按列位置取值, 短行或空值返回 None
    fn get_cell(&self, row: &[String], index: usize) -> Option<String> {
        self.cleaner.normalize_null(row.get(index).map(String::as_str))
    }
}

impl Default for FieldMapper {
    fn default() -> Self {
        Self::new(ColumnLayout::default())
    }
}

impl FieldMapperTrait for FieldMapper {
    fn map_row(&self, row: &[String], row_number: usize) -> ImportResult<RawTaskRecord> {
        Ok(RawTaskRecord {
            row_number,
            client: self
                .get_cell(row, self.layout.client)
                .unwrap_or_else(|| DEFAULT_CLIENT.to_string()),
            location: self
                .get_cell(row, self.layout.location)
                .unwrap_or_else(|| DEFAULT_LOCATION.to_string()),
            address: self.get_cell(row, self.layout.address).unwrap_or_default(),
            description: self.get_cell(row, self.layout.description).unwrap_or_default(),
        })
    }
}
