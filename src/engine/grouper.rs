// ==========================================
// 外勤任务路线规划系统 - 地点分组引擎
// ==========================================
// 红线: 地点按首次出现顺序排列, 组内保持输入顺序
// ==========================================

use crate::domain::plan::LocationGroup;
use crate::domain::task::Task;
use std::collections::HashMap;
use tracing::{debug, instrument};

// ==========================================
// TaskGrouper - 地点分组引擎
// ==========================================
#[derive(Debug, Clone, Copy, Default)]
pub struct TaskGrouper;

impl TaskGrouper {
    pub fn new() -> Self {
        Self
    }

    /// 按地点分组
    ///
    /// # 返回
    /// 有序分组列表（首次出现顺序）
    #[instrument(skip(self, tasks), fields(tasks_count = tasks.len()))]
    pub fn group(&self, tasks: Vec<Task>) -> Vec<LocationGroup> {
        let mut groups: Vec<LocationGroup> = Vec::new();
        let mut index_by_location: HashMap<String, usize> = HashMap::new();

        for task in tasks {
            let idx = match index_by_location.get(&task.location) {
                Some(&idx) => idx,
                None => {
                    groups.push(LocationGroup::new(task.location.clone()));
                    index_by_location.insert(task.location.clone(), groups.len() - 1);
                    groups.len() - 1
                }
            };
            groups[idx].push(task);
        }

        debug!(groups_count = groups.len(), "地点分组完成");
        groups
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task(client: &str, location: &str, minutes: u32) -> Task {
        Task {
            client: client.to_string(),
            location: location.to_string(),
            address: String::new(),
            description: String::new(),
            duration_minutes: minutes,
        }
    }

    #[test]
    fn test_groups_keep_first_seen_order() {
        let tasks = vec![
            task("c1", "Vic", 45),
            task("c2", "Manlleu", 60),
            task("c3", "Vic", 90),
            task("c4", "Olot", 0),
            task("c5", "Manlleu", 45),
        ];

        let groups = TaskGrouper::new().group(tasks);
        let locations: Vec<&str> = groups.iter().map(|g| g.location.as_str()).collect();
        assert_eq!(locations, vec!["Vic", "Manlleu", "Olot"]);

        let vic_clients: Vec<&str> = groups[0].tasks.iter().map(|t| t.client.as_str()).collect();
        assert_eq!(vic_clients, vec!["c1", "c3"]);
        assert_eq!(groups[0].group_duration, 135);
        assert_eq!(groups[1].group_duration, 105);
        assert_eq!(groups[2].group_duration, 0);
    }

    #[test]
    fn test_empty_input() {
        assert!(TaskGrouper::new().group(Vec::new()).is_empty());
    }

    #[test]
    fn test_location_match_is_exact() {
        let groups = TaskGrouper::new().group(vec![task("a", "Vic", 1), task("b", "vic", 1)]);
        assert_eq!(groups.len(), 2);
    }
}
