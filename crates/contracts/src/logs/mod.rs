pub mod body;
pub mod entry;
pub mod level;

pub use body::{BodyPart, BodyPayload};
pub use entry::{apply_read_flag, LogEntry};
pub use level::{count_levels, level_badge_class, level_label, LevelCounts, LogLevel};
