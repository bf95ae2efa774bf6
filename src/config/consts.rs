// src/config/consts.rs

// Term calendar
pub const WEEK1_START: &str = "2026-03-02"; // Monday of week 1, Beijing time
pub const TERM_FINAL_WEEK: u32 = 17;        // 0 disables the post-term cutoff
pub const BEIJING_UTC_OFFSET_SECS: i32 = 8 * 3600;

// Decoding
pub const DAYS_WITH_SAT: usize = 6;
pub const DAYS_FULL_WEEK: usize = 7;
pub const MIN_INFERRED_DAYS: usize = 5;
pub const MAX_INFERRED_DAYS: usize = 7;
pub const MAX_PERIODS: usize = 32;         // larger period hints are ignored

// Labels
pub const DEFAULT_TITLE: &str = "课程表";
pub const TITLE_SEP: &str = " · ";
pub const UNNAMED_COURSE: &str = "未命名课程";
pub const META_SEP: &str = " · ";
pub const DAY_IDS: [&str; 7] = ["mon", "tue", "wed", "thu", "fri", "sat", "sun"];
pub const DAY_LABELS: [&str; 7] = ["周一", "周二", "周三", "周四", "周五", "周六", "周日"];
pub const WEEKEND_LABELS: [&str; 2] = ["周六", "周日"];
pub const LABEL_PRE_TERM: &str = "未开学";
pub const LABEL_POST_TERM: &str = "已结课";
pub const LABEL_NO_COURSES: &str = "无课程";
pub const LABEL_WHOLE_TERM: &str = "全学期";
pub const EXPORTED_AT_FORMAT: &str = "%Y-%m-%d %H:%M";

// Local log
pub const LOG_FILE: &str = ".store/debug.log";

// Export
pub const DEFAULT_OUT_DIR: &str = "out";
pub const DEFAULT_FILE: &str = "schedule";
pub const LIST_HEADERS: [&str; 7] = ["星期", "节次", "时间", "课程", "教师", "教室", "周次"];
