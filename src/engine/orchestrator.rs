// ==========================================
// 外勤任务路线规划系统 - 引擎编排器
// ==========================================
// 用途: 协调分组引擎与分配引擎的执行顺序
// 输入: 已估算时长的有效任务
// 输出: PlanningResult
// ==========================================

use crate::domain::plan::PlanningResult;
use crate::domain::task::Task;
use crate::domain::types::WorkerCount;
use crate::engine::{LoadBalancer, TaskGrouper};
use crate::perf::PerfGuard;
use tracing::{debug, info};

// ==========================================
// PlanningOrchestrator - 引擎编排器
// ==========================================
#[derive(Debug, Clone, Default)]
pub struct PlanningOrchestrator {
    grouper: TaskGrouper,
    balancer: LoadBalancer,
}

impl PlanningOrchestrator {
    pub fn new() -> Self {
        Self {
            grouper: TaskGrouper::new(),
            balancer: LoadBalancer::new(),
        }
    }

    /// 执行一次完整规划
    ///
    /// # 参数
    /// - tasks: 有效任务（已估算时长, 源文件顺序）
    /// - worker_count: 操作员数量
    pub fn execute(&self, tasks: Vec<Task>, worker_count: WorkerCount) -> PlanningResult {
        let _perf = PerfGuard::new("plan_routes");

        info!(
            tasks_count = tasks.len(),
            worker_count = %worker_count,
            "开始执行规划流程"
        );

        // ==========================================
        // 步骤1: 地点分组
        // ==========================================
        debug!("步骤1: 执行地点分组");
        let groups = self.grouper.group(tasks);

        // ==========================================
        // 步骤2: 均衡分配
        // ==========================================
        debug!("步骤2: 执行均衡分配");
        let result = self.balancer.balance(groups, worker_count);

        for assignment in &result.assignments {
            info!(
                worker_id = assignment.worker_id,
                locations = assignment.groups.len(),
                tasks = assignment.task_count(),
                total_duration = assignment.total_duration,
                "操作员分配完成"
            );
        }

        result
    }
}
