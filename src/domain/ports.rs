use crate::domain::model::{OutputFormat, Settings};
use std::path::Path;

pub trait ConfigProvider {
    fn remove_tab(&self) -> bool;
    fn remove_newline(&self) -> bool;
    fn remove_space(&self) -> bool;
    fn output_format(&self) -> OutputFormat;
    fn input_path(&self) -> Option<&Path>;

    fn to_settings(&self) -> Settings {
        Settings {
            remove_tab: self.remove_tab(),
            remove_newline: self.remove_newline(),
            remove_space: self.remove_space(),
            output_format: self.output_format(),
            input_path: self.input_path().map(Path::to_path_buf),
        }
    }
}

impl ConfigProvider for Settings {
    fn remove_tab(&self) -> bool {
        self.remove_tab
    }

    fn remove_newline(&self) -> bool {
        self.remove_newline
    }

    fn remove_space(&self) -> bool {
        self.remove_space
    }

    fn output_format(&self) -> OutputFormat {
        self.output_format
    }

    fn input_path(&self) -> Option<&Path> {
        self.input_path.as_deref()
    }
}
