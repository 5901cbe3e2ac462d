// ==========================================
// 外勤任务路线规划系统 - 均衡分配引擎
// ==========================================
// 规则: 贪心, 单遍, 不回溯; 每组整体分给当前总时长最小的操作员
// 并列: worker_id 较小者优先
// ==========================================
// 说明: 单个地点时长占比过大时结果可能不均衡, 不做二次均衡
// ==========================================

use crate::domain::plan::{LocationGroup, PlanningResult, WorkerAssignment};
use crate::domain::types::WorkerCount;
use tracing::{debug, instrument};

// ==========================================
// LoadBalancer - 均衡分配引擎
// ==========================================
#[derive(Debug, Clone, Copy, Default)]
pub struct LoadBalancer;

impl LoadBalancer {
    pub fn new() -> Self {
        Self
    }

    /// 分配地点分组
    ///
    /// # 参数
    /// - groups: 分组列表（分组引擎输出顺序）
    /// - worker_count: 已校验的操作员数量
    ///
    /// # 返回
    /// 每个操作员的分配结果, total_task_count 为输入任务总数
    #[instrument(skip(self, groups), fields(groups_count = groups.len(), worker_count = %worker_count))]
    pub fn balance(&self, groups: Vec<LocationGroup>, worker_count: WorkerCount) -> PlanningResult {
        // 每次规划重新创建, 不复用
        let mut assignments: Vec<WorkerAssignment> = (1..=worker_count.get())
            .map(WorkerAssignment::new)
            .collect();

        let total_task_count = groups.iter().map(LocationGroup::len).sum();

        for group in groups {
            let idx = Self::least_loaded(&assignments);
            debug!(
                location = %group.location,
                group_duration = group.group_duration,
                worker_id = assignments[idx].worker_id,
                worker_load = assignments[idx].total_duration,
                "分组分配"
            );
            assignments[idx].assign_group(group);
        }

        PlanningResult {
            assignments,
            total_task_count,
        }
    }

    /// 当前总时长最小的操作员下标; 严格小于才替换, 保证并列时取最小 worker_id
    fn least_loaded(assignments: &[WorkerAssignment]) -> usize {
        let mut best = 0;
        for (idx, assignment) in assignments.iter().enumerate().skip(1) {
            if assignment.total_duration < assignments[best].total_duration {
                best = idx;
            }
        }
        best
    }
}
