// ==========================================
// 测试辅助函数
// ==========================================
// 职责: 生成无表头的任务表格行与临时 CSV 文件
// ==========================================
#![allow(dead_code)]

use csv::WriterBuilder;
use std::error::Error;
use tempfile::{Builder, NamedTempFile};

/// 源表列宽（描述在第 11 列）
pub const ROW_WIDTH: usize = 12;

/// 构造一行源数据（客户=3, 地址=4, 地点=6, 描述=11）
pub fn task_row(client: &str, address: &str, location: &str, description: &str) -> Vec<String> {
    let mut row = vec![String::new(); ROW_WIDTH];
    row[0] = "OT".to_string();
    row[3] = client.to_string();
    row[4] = address.to_string();
    row[6] = location.to_string();
    row[11] = description.to_string();
    row
}

/// 写入临时 CSV 文件（无表头, 允许行长度不一致）
pub fn write_task_csv(rows: &[Vec<String>]) -> Result<NamedTempFile, Box<dyn Error>> {
    let file = Builder::new().suffix(".csv").tempfile()?;
    {
        let mut writer = WriterBuilder::new()
            .flexible(true)
            .from_path(file.path())?;
        for row in rows {
            writer.write_record(row)?;
        }
        writer.flush()?;
    }
    Ok(file)
}

/// 规格场景: 4 行, 其中 1 行缺客户; Town1 两个任务共 90 分钟, Town2 一个任务 45 分钟
pub fn scenario_rows() -> Vec<Vec<String>> {
    vec![
        task_row("Bar Sol", "C/ Major 1", "Town1", "Canvi 1 legio"),
        task_row("Forn Pa", "Pl. Nova 3", "Town1", "legio"),
        task_row("", "C/ Sense 9", "Town2", "3 legio"),
        task_row("Cal Pep", "Rbla. 4", "Town2", "1 legio"),
    ]
}
