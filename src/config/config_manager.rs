// ==========================================
// 外勤任务路线规划系统 - 配置管理器
// ==========================================
// 职责: 配置加载、环境变量覆写、查询
// 存储: JSON 文件（默认 <config_dir>/route-planner/config.json）
// ==========================================

use crate::config::error::{ConfigError, ConfigResult};
use crate::config::planner_config::{ColumnLayout, PlannerConfig};
use crate::config::planner_config_trait::PlannerConfigReader;
use crate::domain::types::WorkerCount;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// 环境变量名
pub mod config_keys {
    /// 配置文件路径
    pub const CONFIG_PATH: &str = "ROUTE_PLANNER_CONFIG";
    /// 默认操作员数量
    pub const WORKERS: &str = "ROUTE_PLANNER_WORKERS";
    /// 导出目录
    pub const OUTPUT_DIR: &str = "ROUTE_PLANNER_OUTPUT_DIR";
    /// 语言
    pub const LOCALE: &str = "ROUTE_PLANNER_LOCALE";
}

const CONFIG_DIR_NAME: &str = "route-planner";
const CONFIG_FILE_NAME: &str = "config.json";

// ==========================================
// ConfigManager - 配置管理器
// ==========================================
#[derive(Debug, Clone, Default)]
pub struct ConfigManager {
    config: PlannerConfig,
    source: Option<PathBuf>,
}

impl ConfigManager {
    /// 使用给定配置创建（不读文件, 不读环境变量）
    pub fn from_config(config: PlannerConfig) -> Self {
        Self {
            config,
            source: None,
        }
    }

    /// 加载配置
    ///
    /// 1. 路径取 ROUTE_PLANNER_CONFIG, 否则取用户配置目录
    /// 2. 文件不存在时使用默认值
    /// 3. 应用环境变量覆写
    pub fn load() -> ConfigResult<Self> {
        let path = Self::resolve_config_path();
        let mut manager = match path {
            Some(ref p) if p.exists() => Self::from_file(p)?,
            _ => {
                debug!(path = ?path, "配置文件不存在, 使用默认配置");
                Self::default()
            }
        };
        manager.apply_overrides(|key| std::env::var(key).ok());
        Ok(manager)
    }

    /// 从 JSON 文件读取配置
    pub fn from_file(path: &Path) -> ConfigResult<Self> {
        let raw = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

        let config: PlannerConfig =
            serde_json::from_str(&raw).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        info!(path = %path.display(), "配置文件加载完成");
        Ok(Self {
            config,
            source: Some(path.to_path_buf()),
        })
    }

    /// 默认配置文件路径
    pub fn resolve_config_path() -> Option<PathBuf> {
        // 允许通过环境变量显式指定（便于调试/测试/CI）
        if let Ok(path) = std::env::var(config_keys::CONFIG_PATH) {
            let trimmed = path.trim();
            if !trimmed.is_empty() {
                return Some(PathBuf::from(trimmed));
            }
        }
        dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// 应用覆写值
    ///
    /// # 参数
    /// - lookup: 按键名取值（生产环境为环境变量）
    ///
    /// 格式错误的覆写值记录告警后忽略
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = lookup(config_keys::WORKERS) {
            match value.trim().parse::<u8>() {
                Ok(count) => self.config.default_worker_count = count,
                Err(_) => warn!(
                    config_key = config_keys::WORKERS,
                    raw_value = %value,
                    "操作员数量覆写值格式错误, 已忽略"
                ),
            }
        }

        if let Some(value) = lookup(config_keys::OUTPUT_DIR) {
            let trimmed = value.trim();
            if !trimmed.is_empty() {
                self.config.output_dir = PathBuf::from(trimmed);
            }
        }

        if let Some(value) = lookup(config_keys::LOCALE) {
            let trimmed = value.trim();
            if !trimmed.is_empty() {
                self.config.locale = trimmed.to_string();
            }
        }
    }

    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }
}

// ==========================================
// PlannerConfigReader Trait 实现
// ==========================================
impl PlannerConfigReader for ConfigManager {
    fn column_layout(&self) -> ColumnLayout {
        self.config.column_layout
    }

    fn default_worker_count(&self) -> ConfigResult<WorkerCount> {
        let raw = self.config.default_worker_count;
        WorkerCount::new(raw).map_err(|e| ConfigError::InvalidValue {
            key: "default_worker_count".to_string(),
            value: raw.to_string(),
            message: e.to_string(),
        })
    }

    fn day_label(&self) -> Option<String> {
        self.config
            .day_label
            .as_ref()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
    }

    fn output_dir(&self) -> PathBuf {
        self.config.output_dir.clone()
    }

    fn locale(&self) -> String {
        self.config.locale.clone()
    }

    fn preview_rows(&self) -> usize {
        self.config.preview_rows
    }
}
