// ==========================================
// 外勤任务路线规划系统 - 分配方案领域模型
// ==========================================
// 红线: 地点分组是最小分配单元, 同一地点不可拆分到多个操作员
// 红线: 每次规划重新构建, 不持久化, 不跨次复用
// ==========================================

use crate::domain::task::Task;
use crate::domain::types::WorkerCount;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ==========================================
// LocationGroup - 地点分组
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationGroup {
    pub location: String,
    pub tasks: Vec<Task>,     // 保持源文件中的顺序
    pub group_duration: u32,  // 组内任务时长之和（分钟）
}

impl LocationGroup {
    pub fn new(location: impl Into<String>) -> Self {
        Self {
            location: location.into(),
            tasks: Vec::new(),
            group_duration: 0,
        }
    }

    /// 追加任务并累计时长
    pub fn push(&mut self, task: Task) {
        self.group_duration = self.group_duration.saturating_add(task.duration_minutes);
        self.tasks.push(task);
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}

// ==========================================
// WorkerAssignment - 操作员分配
// ==========================================
// 按分组到达顺序保存整组任务, 导出层直接按组渲染
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkerAssignment {
    pub worker_id: u8,               // 1..=N
    pub groups: Vec<LocationGroup>,  // 分配到的地点分组（到达顺序）
    pub total_duration: u32,         // 当前总时长（分钟）
}

impl WorkerAssignment {
    pub fn new(worker_id: u8) -> Self {
        Self {
            worker_id,
            groups: Vec::new(),
            total_duration: 0,
        }
    }

    /// 整组追加（仅由分配引擎调用）
    pub(crate) fn assign_group(&mut self, group: LocationGroup) {
        self.total_duration = self.total_duration.saturating_add(group.group_duration);
        self.groups.push(group);
    }

    /// 按分配顺序展开的任务列表
    pub fn tasks(&self) -> impl Iterator<Item = &Task> + '_ {
        self.groups.iter().flat_map(|g| g.tasks.iter())
    }

    pub fn task_count(&self) -> usize {
        self.groups.iter().map(LocationGroup::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.task_count() == 0
    }
}

// ==========================================
// PlanningResult - 规划结果
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanningResult {
    pub assignments: Vec<WorkerAssignment>, // 按 worker_id 升序
    pub total_task_count: usize,            // 有效任务总数
}

impl PlanningResult {
    /// 所有操作员总时长之和
    pub fn total_duration(&self) -> u32 {
        self.assignments
            .iter()
            .fold(0u32, |acc, a| acc.saturating_add(a.total_duration))
    }

    pub fn assignment(&self, worker_id: u8) -> Option<&WorkerAssignment> {
        self.assignments.iter().find(|a| a.worker_id == worker_id)
    }

    /// 查找某地点被分配给的操作员
    pub fn worker_for_location(&self, location: &str) -> Option<u8> {
        self.assignments
            .iter()
            .find(|a| a.groups.iter().any(|g| g.location == location))
            .map(|a| a.worker_id)
    }
}

// ==========================================
// PlanSummary - 规划摘要（前端展示/JSON 输出）
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanSummary {
    pub run_id: String,
    pub worker_count: WorkerCount,
    pub total_task_count: usize,
    pub total_duration: u32,
    pub workers: Vec<WorkerTotal>,
    pub generated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkerTotal {
    pub worker_id: u8,
    pub location_count: usize,
    pub task_count: usize,
    pub total_duration: u32,
}

impl PlanSummary {
    pub fn from_result(run_id: &str, worker_count: WorkerCount, result: &PlanningResult) -> Self {
        Self {
            run_id: run_id.to_string(),
            worker_count,
            total_task_count: result.total_task_count,
            total_duration: result.total_duration(),
            workers: result
                .assignments
                .iter()
                .map(|a| WorkerTotal {
                    worker_id: a.worker_id,
                    location_count: a.groups.len(),
                    task_count: a.task_count(),
                    total_duration: a.total_duration,
                })
                .collect(),
            generated_at: Utc::now(),
        }
    }
}
