use serde::Deserialize;

use crate::infra::config::{AppConfig, EditorConfig, LogConfig};

#[derive(Debug, Deserialize, Default)]
pub struct FileConfig {
    pub logging: Option<FileLogConfig>,
    pub editor: Option<FileEditorConfig>,
}

impl FileConfig {
    pub fn merge_into(self, config: &mut AppConfig) {
        if let Some(logging) = self.logging {
            logging.merge_into(&mut config.logging);
        }

        if let Some(editor) = self.editor {
            editor.merge_into(&mut config.editor);
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct FileLogConfig {
    pub level: Option<String>,
}

impl FileLogConfig {
    fn merge_into(self, config: &mut LogConfig) {
        if let Some(level) = self.level {
            config.level = level;
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct FileEditorConfig {
    pub chat_title: Option<String>,
    pub toast_ticks: Option<u32>,
}

impl FileEditorConfig {
    fn merge_into(self, config: &mut EditorConfig) {
        if let Some(chat_title) = self.chat_title {
            config.chat_title = chat_title;
        }

        if let Some(toast_ticks) = self.toast_ticks {
            config.toast_ticks = toast_ticks;
        }
    }
}
