// ==========================================
// 外勤任务路线规划系统 - 时长估算引擎
// ==========================================
// 规则: 按描述中的 legio 数量查档位, 含"revisió/revisio"再加 45 分钟
// 注意: 档位区间存在重叠(7、9), 逐档顺序判定, 后命中者覆盖先命中者
// ==========================================

use regex::Regex;
use std::sync::LazyLock;
use tracing::trace;

/// 非文本描述的默认时长（分钟）
pub const DEFAULT_NON_TEXT_MINUTES: u32 = 45;

/// 含复查关键字时追加的时长（分钟）
pub const REVIEW_BONUS_MINUTES: u32 = 45;

const LEGIO_KEYWORD: &str = "legio";
const REVIEW_KEYWORDS: [&str; 2] = ["revisió", "revisio"];

/// legio 数量 → 基础时长档位 (min, max, minutes)
///
/// 顺序不可调整, 也不可合并区间
const DURATION_BANDS: [(u64, u64, u32); 6] = [
    (1, 1, 45),
    (2, 3, 60),
    (4, 5, 90),
    (6, 7, 120),
    (7, 9, 150),
    (9, 11, 180),
];

static LEGIO_COUNT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([0-9]+)\s*legio").expect("LEGIO_COUNT_RE regex should compile")
});

// ==========================================
// DurationEstimator - 时长估算引擎
// ==========================================
#[derive(Debug, Clone, Copy, Default)]
pub struct DurationEstimator;

impl DurationEstimator {
    pub fn new() -> Self {
        Self
    }

    /// 估算任务时长（分钟）
    ///
    /// # 参数
    /// - description: 任务描述; None 表示单元格不是文本
    ///
    /// # 返回
    /// 非负整数分钟, 无上限, 无错误分支
    pub fn estimate(&self, description: Option<&str>) -> u32 {
        let Some(text) = description else {
            return DEFAULT_NON_TEXT_MINUTES;
        };

        let text = text.to_lowercase();
        let count = Self::legio_count(&text);
        let mut minutes = Self::base_minutes(count);

        if REVIEW_KEYWORDS.iter().any(|k| text.contains(k)) {
            minutes += REVIEW_BONUS_MINUTES;
        }

        trace!(legio_count = count, minutes, "时长估算");
        minutes
    }

    /// 提取 legio 数量
    ///
    /// - "<数字> legio" → 该数字（超出 u64 视为极大值, 落入"其他"档）
    /// - 仅出现 "legio" → 1
    /// - 未出现 → 0
    pub fn legio_count(text: &str) -> u64 {
        if let Some(caps) = LEGIO_COUNT_RE.captures(text) {
            return caps[1].parse::<u64>().unwrap_or(u64::MAX);
        }
        if text.contains(LEGIO_KEYWORD) {
            1
        } else {
            0
        }
    }

    /// 数量 → 基础时长, 逐档判定, 后命中覆盖
    pub fn base_minutes(count: u64) -> u32 {
        DURATION_BANDS
            .iter()
            .filter(|(min, max, _)| (*min..=*max).contains(&count))
            .map(|(_, _, minutes)| *minutes)
            .last()
            .unwrap_or(0)
    }
}
