// ==========================================
// 外勤任务路线规划系统 - 任务导入 Trait
// ==========================================
// 职责: 定义导入管道各阶段接口（不包含实现）
// ==========================================

use crate::domain::task::RawTaskRecord;
use crate::importer::error::ImportResult;
use std::path::Path;

/// 解析后的单行: 单元格文本, 或无法解码时的行级错误
pub type ParsedRow = ImportResult<Vec<String>>;

// ==========================================
// FileParser Trait
// ==========================================
// 用途: 文件解析接口（阶段 1）
// 实现者: ExcelParser, CsvParser, UniversalFileParser
pub trait FileParser: Send + Sync {
    /// 解析文件为按位置排列的行记录
    ///
    /// # 返回
    /// - Ok(Vec<ParsedRow>): 行列表（源文件顺序）; 整行空白的行已跳过,
    ///   无法解码的行保留为 Err, 由导入器计入失败行
    /// - Err: 文件不存在、格式不支持、文件级读取错误
    fn parse_to_rows(&self, file_path: &Path) -> ImportResult<Vec<ParsedRow>>;
}

// ==========================================
// FieldMapper Trait
// ==========================================
// 用途: 列位置映射接口（阶段 2）
// 实现者: FieldMapperImpl
pub trait FieldMapper: Send + Sync {
    /// 将一行单元格映射为 RawTaskRecord
    ///
    /// # 参数
    /// - row: 单元格文本（按列位置）
    /// - row_number: 行号（用于日志与报告）
    ///
    /// # 说明
    /// 缺列/空单元格填充缺省值, 不视为错误
    fn map_row(&self, row: &[String], row_number: usize) -> ImportResult<RawTaskRecord>;
}

// ==========================================
// DataCleaner Trait
// ==========================================
// 用途: 单元格清洗接口
// 实现者: DataCleanerImpl
pub trait DataCleaner: Send + Sync {
    /// 标准化 NULL 值（空白/空值标记 → None）
    fn normalize_null(&self, value: Option<&str>) -> Option<String>;
}
