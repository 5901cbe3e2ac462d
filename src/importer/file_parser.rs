// ==========================================
// 外勤任务路线规划系统 - 文件解析器实现
// ==========================================
// 支持: Excel (.xlsx/.xls) / CSV (.csv)
// 约定: 源表无表头, 字段按列位置读取
// ==========================================

use crate::importer::error::{ImportError, ImportResult};
use crate::importer::task_importer_trait::{FileParser, ParsedRow};
use calamine::{open_workbook_auto, Reader};
use csv::ReaderBuilder;
use std::fs::File;
use std::path::Path;
use tracing::{debug, warn};

fn extension_of(path: &Path) -> String {
    path.extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase()
}

fn ensure_exists(path: &Path) -> ImportResult<()> {
    if !path.exists() {
        return Err(ImportError::FileNotFound(path.display().to_string()));
    }
    Ok(())
}

fn is_blank_row(row: &[String]) -> bool {
    row.iter().all(|v| v.is_empty())
}

// ==========================================
// CSV Parser 实现
// ==========================================
pub struct CsvParser;

impl FileParser for CsvParser {
    fn parse_to_rows(&self, file_path: &Path) -> ImportResult<Vec<ParsedRow>> {
        ensure_exists(file_path)?;

        let ext = extension_of(file_path);
        if ext != "csv" {
            return Err(ImportError::UnsupportedFormat(ext));
        }

        let file = File::open(file_path)?;
        let mut reader = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true) // 允许行长度不一致
            .from_reader(file);

        // 按字节读取, 逐行解码: 单行编码错误不影响其他行
        let mut rows = Vec::new();
        for result in reader.byte_records() {
            let record = result?;
            let line = record.position().map(|p| p.line()).unwrap_or_default();

            let decoded: Result<Vec<String>, _> = record
                .iter()
                .map(|field| std::str::from_utf8(field).map(|v| v.trim().to_string()))
                .collect();

            match decoded {
                Ok(row) => {
                    // 跳过完全空白的行
                    if is_blank_row(&row) {
                        continue;
                    }
                    rows.push(Ok(row));
                }
                Err(e) => {
                    warn!(line, error = %e, "CSV 行不是有效的 UTF-8");
                    rows.push(Err(ImportError::RowProcessingError {
                        row: line as usize,
                        message: format!("非 UTF-8 编码: {}", e),
                    }));
                }
            }
        }

        debug!(rows = rows.len(), "CSV 解析完成");
        Ok(rows)
    }
}

// ==========================================
// Excel Parser 实现
// ==========================================
pub struct ExcelParser;

impl FileParser for ExcelParser {
    fn parse_to_rows(&self, file_path: &Path) -> ImportResult<Vec<ParsedRow>> {
        ensure_exists(file_path)?;

        let ext = extension_of(file_path);
        if ext != "xlsx" && ext != "xls" {
            return Err(ImportError::UnsupportedFormat(ext));
        }

        let mut workbook = open_workbook_auto(file_path)?;

        // 读取第一个 sheet
        let sheet_name = workbook
            .sheet_names()
            .first()
            .cloned()
            .ok_or_else(|| ImportError::ExcelParseError("Excel 文件无工作表".to_string()))?;

        let range = workbook.worksheet_range(&sheet_name)?;

        // Range 从第一个非空单元格开始, 补齐左侧空列以保持绝对列位置
        let col_offset = range.start().map(|(_, col)| col as usize).unwrap_or(0);

        let mut rows = Vec::new();
        for data_row in range.rows() {
            let row: Vec<String> = std::iter::repeat(String::new())
                .take(col_offset)
                .chain(data_row.iter().map(|cell| cell.to_string().trim().to_string()))
                .collect();

            if is_blank_row(&row) {
                continue;
            }
            rows.push(Ok(row));
        }

        debug!(sheet = %sheet_name, rows = rows.len(), "Excel 解析完成");
        Ok(rows)
    }
}

// ==========================================
// 通用文件解析器（根据扩展名自动选择）
// ==========================================
pub struct UniversalFileParser;

impl FileParser for UniversalFileParser {
    fn parse_to_rows(&self, file_path: &Path) -> ImportResult<Vec<ParsedRow>> {
        match extension_of(file_path).as_str() {
            "csv" => CsvParser.parse_to_rows(file_path),
            "xlsx" | "xls" => ExcelParser.parse_to_rows(file_path),
            other => Err(ImportError::UnsupportedFormat(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_xlsxwriter::Workbook;
    use std::io::Write;
    use tempfile::Builder;

    fn csv_file(lines: &[&str]) -> tempfile::NamedTempFile {
        let mut temp_file = Builder::new().suffix(".csv").tempfile().unwrap();
        for line in lines {
            writeln!(temp_file, "{}", line).unwrap();
        }
        temp_file
    }

    fn ok_rows(rows: Vec<ParsedRow>) -> Vec<Vec<String>> {
        rows.into_iter().map(|r| r.unwrap()).collect()
    }

    #[test]
    fn test_csv_parser_reads_without_header() {
        let temp_file = csv_file(&["a,b,c,Bar Sol", "d,e,f,Forn Pa"]);

        let rows = ok_rows(CsvParser.parse_to_rows(temp_file.path()).unwrap());
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0][3], "Bar Sol");
        assert_eq!(rows[1][3], "Forn Pa");
    }

    #[test]
    fn test_csv_parser_skip_empty_rows() {
        let temp_file = csv_file(&["a,b", ",", "c,d"]);

        let rows = CsvParser.parse_to_rows(temp_file.path()).unwrap();
        assert_eq!(rows.len(), 2);
    }

    #[test]
    fn test_csv_parser_flexible_row_length() {
        let temp_file = csv_file(&["a", "a,b,c,d,e,f,g"]);

        let rows = ok_rows(CsvParser.parse_to_rows(temp_file.path()).unwrap());
        assert_eq!(rows[0].len(), 1);
        assert_eq!(rows[1].len(), 7);
    }

    #[test]
    fn test_csv_parser_keeps_rows_around_undecodable_row() {
        let mut temp_file = Builder::new().suffix(".csv").tempfile().unwrap();
        temp_file.write_all(b"a,b,c,Bar Sol\n").unwrap();
        temp_file.write_all(b"a,b,c,Pe\xf3\n").unwrap();
        temp_file.write_all(b"a,b,c,Forn Pa\n").unwrap();

        let rows = CsvParser.parse_to_rows(temp_file.path()).unwrap();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].as_ref().unwrap()[3], "Bar Sol");
        assert!(matches!(
            rows[1],
            Err(ImportError::RowProcessingError { row: 2, .. })
        ));
        assert_eq!(rows[2].as_ref().unwrap()[3], "Forn Pa");
    }

    #[test]
    fn test_csv_parser_file_not_found() {
        let result = CsvParser.parse_to_rows(Path::new("non_existent.csv"));
        assert!(matches!(result, Err(ImportError::FileNotFound(_))));
    }

    #[test]
    fn test_universal_parser_rejects_unknown_extension() {
        let temp_file = Builder::new().suffix(".txt").tempfile().unwrap();
        let result = UniversalFileParser.parse_to_rows(temp_file.path());
        assert!(matches!(result, Err(ImportError::UnsupportedFormat(ext)) if ext == "txt"));
    }

    #[test]
    fn test_excel_parser_reads_first_sheet_by_position() {
        let temp_file = Builder::new().suffix(".xlsx").tempfile().unwrap();

        let mut workbook = Workbook::new();
        let sheet = workbook.add_worksheet();
        sheet.set_name("Tareas").unwrap();
        // 第 0 列为空, 数据从第 3 列开始
        sheet.write_string(0, 3, "Bar Sol").unwrap();
        sheet.write_number(0, 4, 12.0).unwrap();
        sheet.write_string(0, 6, "Vic").unwrap();
        sheet.write_string(0, 11, "2 legio").unwrap();
        // 第 1 行整行空白
        sheet.write_number(2, 3, 1001.0).unwrap();
        sheet.write_string(2, 6, "Olot").unwrap();
        sheet.write_number(2, 11, 2.5).unwrap();
        workbook.add_worksheet().set_name("Otra").unwrap();
        workbook.save(temp_file.path()).unwrap();

        let rows = ok_rows(ExcelParser.parse_to_rows(temp_file.path()).unwrap());
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].len(), 12);
        assert_eq!(rows[0][0], "");
        assert_eq!(rows[0][3], "Bar Sol");
        assert_eq!(rows[0][4], "12");
        assert_eq!(rows[0][6], "Vic");
        assert_eq!(rows[0][11], "2 legio");
        assert_eq!(rows[1][3], "1001");
        assert_eq!(rows[1][4], "");
        assert_eq!(rows[1][11], "2.5");
    }

    #[test]
    fn test_excel_parser_rejects_corrupt_file() {
        let mut temp_file = Builder::new().suffix(".xlsx").tempfile().unwrap();
        writeln!(temp_file, "not a workbook").unwrap();
        let result = ExcelParser.parse_to_rows(temp_file.path());
        assert!(matches!(result, Err(ImportError::ExcelParseError(_))));
    }
}
