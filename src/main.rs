// ==========================================
// 外勤任务路线规划系统 - 命令行入口
// ==========================================
// 用法:
//   route-planner plan <FILE> [-w 1|2|3] [-o DIR] [--json] [--csv]
//   route-planner batch <FILE>... [-w 1|2|3] [-o DIR] [--csv]
// ==========================================

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use route_planner::api::{PlanApi, PlanResponse};
use route_planner::config::{config_keys, ConfigManager, PlannerConfigReader};
use route_planner::i18n::{is_supported, t_in, t_in_with_args};
use std::path::{Path, PathBuf};
use std::sync::Arc;

#[derive(Parser, Debug)]
#[command(name = "route-planner", version, about = "Planificador de rutas para operarios")]
struct Cli {
    /// 配置文件路径（默认读取 ROUTE_PLANNER_CONFIG 或用户配置目录）
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// 语言（es / en）
    #[arg(long, global = true)]
    locale: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// 规划单个任务表格
    Plan {
        /// 任务表格（.xlsx / .xls / .csv, 无表头）
        file: PathBuf,

        /// 操作员数量（1~3）
        #[arg(short, long)]
        workers: Option<i64>,

        /// 导出目录
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// 以 JSON 输出规划结果
        #[arg(long)]
        json: bool,

        /// 不写出导出文件
        #[arg(long)]
        no_write: bool,

        /// 另外按操作员写出 CSV 文件
        #[arg(long)]
        csv: bool,
    },

    /// 并发规划多个任务表格
    Batch {
        files: Vec<PathBuf>,

        #[arg(short, long)]
        workers: Option<i64>,

        #[arg(short, long)]
        output: Option<PathBuf>,

        /// 另外按操作员写出 CSV 文件
        #[arg(long)]
        csv: bool,
    },
}

fn load_config(cli: &Cli) -> Result<ConfigManager> {
    let mut manager = match &cli.config {
        Some(path) => ConfigManager::from_file(path)
            .with_context(|| format!("无法读取配置文件 {}", path.display()))?,
        None => ConfigManager::load().context("无法加载配置")?,
    };
    if cli.config.is_some() {
        manager.apply_overrides(|key| std::env::var(key).ok());
    }
    if let Some(locale) = &cli.locale {
        let value = locale.clone();
        manager.apply_overrides(move |key| (key == config_keys::LOCALE).then(|| value.clone()));
    }
    Ok(manager)
}

fn print_summary(locale: &str, response: &PlanResponse) {
    let summary = &response.summary;
    println!("{}", t_in(locale, "summary.title"));
    println!(
        "{}",
        t_in_with_args(locale, "summary.file_loaded", &[("name", &response.import_report.source)])
    );
    println!(
        "{}",
        t_in_with_args(
            locale,
            "summary.total_workers",
            &[("count", &summary.worker_count.to_string())]
        )
    );
    println!(
        "{}",
        t_in_with_args(
            locale,
            "summary.total_tasks",
            &[("count", &summary.total_task_count.to_string())]
        )
    );
    let dropped = response.import_report.dropped_invalid + response.import_report.failed_rows;
    println!(
        "{}",
        t_in_with_args(locale, "summary.dropped_rows", &[("count", &dropped.to_string())])
    );
    for worker in &summary.workers {
        println!(
            "  {}",
            t_in_with_args(
                locale,
                "summary.worker_line",
                &[
                    ("id", &worker.worker_id.to_string()),
                    ("locations", &worker.location_count.to_string()),
                    ("tasks", &worker.task_count.to_string()),
                    ("minutes", &worker.total_duration.to_string()),
                ],
            )
        );
    }
}

fn print_written(locale: &str, target: &Path) {
    eprintln!(
        "{}",
        t_in_with_args(locale, "export.written", &[("path", &target.display().to_string())])
    );
}

#[tokio::main]
async fn main() -> Result<()> {
    route_planner::logging::init();

    let cli = Cli::parse();
    let config = Arc::new(load_config(&cli)?);
    let locale = config.locale();
    if !is_supported(&locale) {
        bail!("不支持的语言: {}（仅支持 es / en）", locale);
    }

    tracing::info!(version = route_planner::VERSION, locale = %locale, "{}", route_planner::APP_NAME);

    let api = PlanApi::new(config.clone());

    match cli.command {
        Command::Plan {
            file,
            workers,
            output,
            json,
            no_write,
            csv,
        } => {
            let response = api
                .plan_file(&file, workers)
                .with_context(|| format!("无法规划 {}", file.display()))?;

            if json {
                println!("{}", serde_json::to_string_pretty(&response)?);
            } else {
                print_summary(&locale, &response);
            }

            if !no_write {
                let target = api.write_export(&response, output.as_deref())?;
                print_written(&locale, &target);
                if csv {
                    let target = api.write_csv_export(&response, output.as_deref())?;
                    print_written(&locale, &target);
                }
            }
        }
        Command::Batch {
            files,
            workers,
            output,
            csv,
        } => {
            let results = api.batch_plan(files, workers).await?;
            let mut failed = 0usize;
            for result in results {
                match result {
                    Ok(response) => {
                        print_summary(&locale, &response);
                        // 同一秒内的多个导出文件名相同, 按源文件名分目录
                        let source_stem = PathBuf::from(&response.import_report.source)
                            .file_stem()
                            .map(|s| s.to_string_lossy().into_owned())
                            .unwrap_or_default();
                        let dir = output.clone().unwrap_or_else(|| config.output_dir()).join(source_stem);
                        let target = api.write_export(&response, Some(&dir))?;
                        print_written(&locale, &target);
                        if csv {
                            let target = api.write_csv_export(&response, Some(&dir))?;
                            print_written(&locale, &target);
                        }
                    }
                    Err(message) => {
                        failed += 1;
                        eprintln!("{}", message);
                    }
                }
            }
            if failed > 0 {
                bail!("{} 个文件规划失败", failed);
            }
        }
    }

    Ok(())
}
