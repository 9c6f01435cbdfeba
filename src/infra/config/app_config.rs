use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct AppConfig {
    pub logging: LogConfig,
    pub editor: EditorConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LogConfig {
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_owned(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EditorConfig {
    /// Title shown in the preview header.
    pub chat_title: String,
    /// Toast auto-dismiss delay in event-loop ticks (one tick ≈ 100ms).
    pub toast_ticks: u32,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            chat_title: "Group Chat".to_owned(),
            toast_ticks: 30,
        }
    }
}
