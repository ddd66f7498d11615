// Mon Jan 26 2026 - Alex

use std::path::PathBuf;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunConfig {
    pub input_file: PathBuf,
    pub workers: usize,
    pub output_file: Option<PathBuf>,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            input_file: PathBuf::new(),
            workers: num_cpus::get(),
            output_file: None,
        }
    }
}

impl RunConfig {
    pub fn new(input_file: PathBuf) -> Self {
        Self {
            input_file,
            ..Self::default()
        }
    }

    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers;
        self
    }

    pub fn with_output_file(mut self, output: PathBuf) -> Self {
        self.output_file = Some(output);
        self
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.input_file.as_os_str().is_empty() {
            return Err("input_file must be set".to_string());
        }
        if self.workers == 0 {
            return Err("workers must be greater than 0".to_string());
        }
        Ok(())
    }
}
