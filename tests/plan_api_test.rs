// ==========================================
// 规划 API 集成测试
// ==========================================
// 测试目标: 导入 → 规划 → 导出 全流程, 以及批量规划
// ==========================================

#[path = "test_helpers.rs"]
mod test_helpers;

use calamine::{open_workbook_auto, Reader};
use route_planner::api::{ApiError, PlanApi};
use route_planner::config::{ConfigManager, PlannerConfig};
use std::path::PathBuf;
use std::sync::Arc;
use test_helpers::{scenario_rows, task_row, write_task_csv};

fn api_with(config: PlannerConfig) -> PlanApi<ConfigManager> {
    PlanApi::new(Arc::new(ConfigManager::from_config(config)))
}

fn api() -> PlanApi<ConfigManager> {
    api_with(PlannerConfig::default())
}

#[test]
fn test_plan_file_scenario() {
    route_planner::logging::init_test();

    let file = write_task_csv(&scenario_rows()).unwrap();
    let response = api().plan_file(file.path(), Some(1)).unwrap();

    assert_eq!(response.summary.worker_count.get(), 1);
    assert_eq!(response.summary.total_task_count, 3);
    assert_eq!(response.summary.total_duration, 135);
    assert_eq!(response.import_report.dropped_invalid, 1);
    assert_eq!(response.export.sheets.len(), 1);

    let sheet = response.export.sheet("Operario 1").unwrap();
    let text = sheet.as_text();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], "Día,Población,Cliente,Dirección,Tarea,Duración");
    assert_eq!(lines[1], "Lunes,Town1,,,,");
    assert_eq!(lines[2], ",,Bar Sol,C/ Major 1,Canvi 1 legio,45 min");
    assert_eq!(lines[3], ",,Forn Pa,Pl. Nova 3,legio,45 min");
    assert_eq!(lines[4], "Lunes,Town2,,,,");
    assert_eq!(lines[5], ",,Cal Pep,Rbla. 4,1 legio,45 min");
    assert_eq!(lines.len(), 6);
}

#[test]
fn test_plan_file_skips_empty_workers() {
    let file = write_task_csv(&scenario_rows()).unwrap();
    let response = api().plan_file(file.path(), Some(3)).unwrap();

    // 两个地点 → 操作员 1/2 有任务, 操作员 3 为空
    assert_eq!(response.result.assignments.len(), 3);
    assert!(response.result.assignments[2].is_empty());

    let names: Vec<&str> = response.export.sheets.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["Operario 1", "Operario 2"]);
}

#[test]
fn test_plan_file_rejects_invalid_worker_count() {
    let file = write_task_csv(&scenario_rows()).unwrap();

    for workers in [0, 4, -1] {
        let result = api().plan_file(file.path(), Some(workers));
        assert!(matches!(result, Err(ApiError::InvalidWorkerCount(_))), "workers={}", workers);
    }
}

#[test]
fn test_plan_file_uses_config_default_workers() {
    let file = write_task_csv(&scenario_rows()).unwrap();
    let config = PlannerConfig {
        default_worker_count: 2,
        ..PlannerConfig::default()
    };

    let response = api_with(config).plan_file(file.path(), None).unwrap();
    assert_eq!(response.summary.worker_count.get(), 2);
    assert_eq!(response.result.worker_for_location("Town1"), Some(1));
    assert_eq!(response.result.worker_for_location("Town2"), Some(2));
}

#[test]
fn test_plan_english_labels() {
    let config = PlannerConfig {
        locale: "en".to_string(),
        day_label: Some("Friday".to_string()),
        ..PlannerConfig::default()
    };

    let response = api_with(config)
        .plan_rows("mem", vec![task_row("Bar", "", "Vic", "legio")], Some(1))
        .unwrap();

    let sheet = response.export.sheet("Worker 1").unwrap();
    let text = sheet.as_text();
    assert!(text.starts_with("Day,"));
    assert!(text.contains("Friday,Vic,,,,"));
    assert!(response.export.file_stem.starts_with("Route_Plan_"));
}

#[test]
fn test_write_export_to_dir() {
    let out_dir = tempfile::tempdir().unwrap();
    let api = api();

    let response = api
        .plan_rows(
            "mem",
            vec![
                task_row("Bar", "", "Vic", "legio"),
                task_row("Forn", "", "Olot", "3 legio"),
            ],
            Some(2),
        )
        .unwrap();

    let workbook = api.write_export(&response, Some(out_dir.path())).unwrap();
    assert_eq!(
        workbook,
        out_dir
            .path()
            .join(format!("{}.xlsx", response.export.file_stem))
    );

    let mut xlsx = open_workbook_auto(&workbook).unwrap();
    assert_eq!(
        xlsx.sheet_names(),
        vec!["Operario 1".to_string(), "Operario 2".to_string()]
    );
    let range = xlsx.worksheet_range("Operario 2").unwrap();
    assert_eq!(range.get_value((1, 1)).unwrap().to_string(), "Olot");
    assert_eq!(range.get_value((2, 5)).unwrap().to_string(), "60 min");

    let csv_dir = api.write_csv_export(&response, Some(out_dir.path())).unwrap();
    assert_eq!(csv_dir, out_dir.path().join(&response.export.file_stem));

    let first = std::fs::read_to_string(csv_dir.join("Operario 1.csv")).unwrap();
    assert!(first.contains("Lunes,Vic,,,,"));
    let second = std::fs::read_to_string(csv_dir.join("Operario 2.csv")).unwrap();
    assert!(second.contains(",,Forn,,3 legio,60 min"));
}

#[test]
fn test_plan_response_serializes_to_json() {
    let response = api()
        .plan_rows("mem", scenario_rows(), Some(2))
        .unwrap();

    let json = serde_json::to_value(&response).unwrap();
    assert_eq!(json["summary"]["total_task_count"], 3);
    assert_eq!(json["result"]["assignments"][0]["worker_id"], 1);
    assert_eq!(json["export"]["sheets"][0]["name"], "Operario 1");
}

#[tokio::test]
async fn test_batch_plan_independent_runs() {
    let first = write_task_csv(&scenario_rows()).unwrap();
    let second = write_task_csv(&[task_row("Forn", "", "Olot", "9 legio")]).unwrap();

    let paths = vec![
        first.path().to_path_buf(),
        PathBuf::from("/no/such/tareas.csv"),
        second.path().to_path_buf(),
    ];

    let results = api().batch_plan(paths, Some(2)).await.unwrap();
    assert_eq!(results.len(), 3);

    assert_eq!(results[0].as_ref().unwrap().summary.total_duration, 135);
    assert!(results[1].as_ref().unwrap_err().contains("tareas.csv"));
    assert_eq!(results[2].as_ref().unwrap().summary.total_duration, 180);

    let run_a = &results[0].as_ref().unwrap().summary.run_id;
    let run_b = &results[2].as_ref().unwrap().summary.run_id;
    assert_ne!(run_a, run_b);
}

#[tokio::test]
async fn test_batch_plan_rejects_invalid_worker_count() {
    let file = write_task_csv(&scenario_rows()).unwrap();
    let result = api().batch_plan(vec![file.path().to_path_buf()], Some(5)).await;
    assert!(matches!(result, Err(ApiError::InvalidWorkerCount(_))));
}

#[tokio::test]
async fn test_batch_plan_rejects_empty_file_list() {
    let result = api().batch_plan(Vec::new(), Some(1)).await;
    assert!(matches!(result, Err(ApiError::InvalidInput(_))));
}
