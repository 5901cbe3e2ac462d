// ==========================================
// 测试数据生成器
// ==========================================
// 用途: 生成 4 个任务表测试数据集 CSV 文件（无表头）
// 输出: tests/fixtures/datasets/*.csv
// ==========================================

use chrono::{Duration, Local};
use csv::{Writer, WriterBuilder};
use std::error::Error;
use std::fs::{self, File};

const OUTPUT_DIR: &str = "tests/fixtures/datasets";

// 源表列宽（描述在第 11 列）
const ROW_WIDTH: usize = 12;

const LOCATIONS: &[&str] = &[
    "Vic", "Manlleu", "Torelló", "Olot", "Ripoll", "Centelles", "Tona", "Roda de Ter",
];

const DESCRIPTIONS: &[&str] = &[
    "Canvi 1 legio",
    "legio",
    "2 legios",
    "3 legio + revisió",
    "5 legios",
    "6 legios",
    "8 legios",
    "10 legios i revisio",
    "Revisió anual",
    "Neteja dipòsit",
];

// 任务记录结构
#[derive(Clone)]
struct TaskRecord {
    order_id: String,
    client: String,
    address: String,
    location: String,
    scheduled_on: String,
    description: String,
}

impl TaskRecord {
    fn to_row(&self) -> Vec<String> {
        let mut row = vec![String::new(); ROW_WIDTH];
        row[0] = self.order_id.clone();
        row[1] = self.scheduled_on.clone();
        row[3] = self.client.clone();
        row[4] = self.address.clone();
        row[6] = self.location.clone();
        row[11] = self.description.clone();
        row
    }

    fn sample(index: usize) -> Self {
        let date = Local::now() + Duration::days((index % 5) as i64);
        Self {
            order_id: format!("OT{:05}", index + 1),
            client: format!("Client {:03}", index + 1),
            address: format!("C/ Major {}", index + 1),
            location: LOCATIONS[index % LOCATIONS.len()].to_string(),
            scheduled_on: date.format("%Y-%m-%d").to_string(),
            description: DESCRIPTIONS[index % DESCRIPTIONS.len()].to_string(),
        }
    }
}

fn writer_for(name: &str) -> Result<Writer<File>, Box<dyn Error>> {
    let file = File::create(format!("{}/{}", OUTPUT_DIR, name))?;
    Ok(WriterBuilder::new().flexible(true).from_writer(file))
}

fn main() -> Result<(), Box<dyn Error>> {
    println!("开始生成测试数据集...");
    fs::create_dir_all(OUTPUT_DIR)?;

    // 1. 正常数据 (40条)
    generate_normal_data()?;

    // 2. 大数据集 (2000条)
    generate_large_dataset()?;

    // 3. 缺客户/缺地点/短行
    generate_missing_fields()?;

    // 4. 边界情况（数量带边界、空白行、空值标记）
    generate_edge_cases()?;

    println!("✓ 所有测试数据集生成完成！");
    Ok(())
}

fn generate_normal_data() -> Result<(), Box<dyn Error>> {
    let mut wtr = writer_for("01_normal_data.csv")?;
    for i in 0..40 {
        wtr.write_record(TaskRecord::sample(i).to_row())?;
    }
    wtr.flush()?;
    println!("✓ 01_normal_data.csv (40 条)");
    Ok(())
}

fn generate_large_dataset() -> Result<(), Box<dyn Error>> {
    let mut wtr = writer_for("02_large_dataset.csv")?;
    for i in 0..2000 {
        wtr.write_record(TaskRecord::sample(i).to_row())?;
    }
    wtr.flush()?;
    println!("✓ 02_large_dataset.csv (2000 条)");
    Ok(())
}

fn generate_missing_fields() -> Result<(), Box<dyn Error>> {
    let mut wtr = writer_for("03_missing_fields.csv")?;
    for i in 0..20 {
        let mut record = TaskRecord::sample(i);
        match i % 4 {
            0 => record.client.clear(),
            1 => record.location.clear(),
            2 => record.location = "nan".to_string(),
            _ => {}
        }
        wtr.write_record(record.to_row())?;
    }
    // 短行（不足 12 列）
    wtr.write_record(["OT99999", "2024-01-01", "", "Client short"])?;
    wtr.flush()?;
    println!("✓ 03_missing_fields.csv (21 条, 其中 16 条无效)");
    Ok(())
}

fn generate_edge_cases() -> Result<(), Box<dyn Error>> {
    let mut wtr = writer_for("04_edge_cases.csv")?;
    let counts = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 0];
    for (i, count) in counts.iter().enumerate() {
        let mut record = TaskRecord::sample(i);
        record.location = "Vic".to_string();
        record.description = format!("{} LEGIOS", count);
        wtr.write_record(record.to_row())?;
    }

    // 空白行
    wtr.write_record(vec![String::new(); ROW_WIDTH])?;

    // 前后空白
    let mut padded = TaskRecord::sample(100);
    padded.client = "   Client padded   ".to_string();
    padded.location = "  Olot ".to_string();
    wtr.write_record(padded.to_row())?;

    // 超大数量
    let mut huge = TaskRecord::sample(101);
    huge.description = "99999999999999999999999 legio".to_string();
    wtr.write_record(huge.to_row())?;

    wtr.flush()?;
    println!("✓ 04_edge_cases.csv");
    Ok(())
}
