// ==========================================
// 外勤任务路线规划系统 - 表格缓冲区
// ==========================================
// 生命周期: 申请 → 写行 → finalize 并入工作簿 → 释放
// 红线: 任意退出路径（含错误路径）都在 Drop 中释放缓冲区
// 输出: xlsx 工作表（主格式）+ CSV 字节（副格式）
// ==========================================

use crate::export::error::{ExportError, ExportResult};
use csv::{Writer, WriterBuilder};
use rust_xlsxwriter::{Format, Workbook, Worksheet};
use serde::Serialize;
use tracing::debug;

/// 已完成的一张表
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportSheet {
    pub name: String,
    /// 同一张表的 CSV 内容
    #[serde(skip)]
    pub bytes: Vec<u8>,
    pub rows: usize,
}

impl ExportSheet {
    /// 以 UTF-8 文本读取 CSV 内容
    pub fn as_text(&self) -> String {
        String::from_utf8_lossy(&self.bytes).into_owned()
    }
}

/// 单张表的内存缓冲区
pub struct SheetBuffer {
    name: String,
    worksheet: Option<Worksheet>,
    csv: Option<Writer<Vec<u8>>>,
    rows: usize,
}

impl SheetBuffer {
    /// 申请缓冲区
    ///
    /// 表名不符合 xlsx 规则（超长、含 []:*?/\）时返回错误
    pub fn acquire(name: impl Into<String>) -> ExportResult<Self> {
        let name = name.into();
        let mut worksheet = Worksheet::new();
        worksheet.set_name(&name)?;

        debug!(sheet = %name, "申请表格缓冲区");
        Ok(Self {
            name,
            worksheet: Some(worksheet),
            csv: Some(WriterBuilder::new().flexible(false).from_writer(Vec::new())),
            rows: 0,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    /// 写入表头行（加粗）
    pub fn write_header<I, T>(&mut self, row: I) -> ExportResult<()>
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        let bold = Format::new().set_bold();
        self.write_cells(row, Some(&bold))
    }

    /// 写入一行
    pub fn write_row<I, T>(&mut self, row: I) -> ExportResult<()>
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        self.write_cells(row, None)
    }

    fn write_cells<I, T>(&mut self, row: I, format: Option<&Format>) -> ExportResult<()>
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        let (Some(worksheet), Some(csv)) = (self.worksheet.as_mut(), self.csv.as_mut()) else {
            return Err(ExportError::SheetWriteError(format!("缓冲区已释放: {}", self.name)));
        };

        let row_index = u32::try_from(self.rows)
            .map_err(|_| ExportError::SheetWriteError(format!("行数超出上限: {}", self.name)))?;

        let mut cells = Vec::new();
        for (col, value) in row.into_iter().enumerate() {
            let value = value.as_ref();
            let col = u16::try_from(col)
                .map_err(|_| ExportError::SheetWriteError(format!("列数超出上限: {}", self.name)))?;
            // 空单元格不写入工作表
            if !value.is_empty() {
                match format {
                    Some(format) => worksheet.write_string_with_format(row_index, col, value, format)?,
                    None => worksheet.write_string(row_index, col, value)?,
                };
            }
            cells.push(value.to_string());
        }

        csv.write_record(&cells)?;
        self.rows += 1;
        Ok(())
    }

    /// 收尾: 工作表并入工作簿, 取出 CSV 字节
    pub fn finalize(mut self, workbook: &mut Workbook) -> ExportResult<ExportSheet> {
        let worksheet = self.worksheet.take().ok_or_else(|| {
            ExportError::BufferFinalizeError(format!("缓冲区已释放: {}", self.name))
        })?;
        let csv = self.csv.take().ok_or_else(|| {
            ExportError::BufferFinalizeError(format!("缓冲区已释放: {}", self.name))
        })?;
        let bytes = csv
            .into_inner()
            .map_err(|e| ExportError::BufferFinalizeError(e.to_string()))?;

        workbook.push_worksheet(worksheet);

        Ok(ExportSheet {
            name: std::mem::take(&mut self.name),
            bytes,
            rows: self.rows,
        })
    }
}

impl Drop for SheetBuffer {
    fn drop(&mut self) {
        let released_sheet = self.worksheet.take().is_some();
        let released_csv = self.csv.take().is_some();
        if released_sheet || released_csv {
            debug!(sheet = %self.name, rows = self.rows, "未完成的表格缓冲区已释放");
        }
    }
}
