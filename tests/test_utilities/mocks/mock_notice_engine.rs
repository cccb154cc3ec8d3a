use ossnotices::prelude::*;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// A single recorded engine invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineCall {
    pub operation: String,
    pub path: PathBuf,
    pub recursive: bool,
    pub format: String,
}

/// Mock NoticeEngine for testing that records every invocation
#[derive(Clone)]
pub struct MockNoticeEngine {
    calls: Arc<Mutex<Vec<EngineCall>>>,
    response: String,
    fail: bool,
}

impl MockNoticeEngine {
    pub fn new(response: &str) -> Self {
        Self {
            calls: Arc::new(Mutex::new(Vec::new())),
            response: response.to_string(),
            fail: false,
        }
    }

    pub fn with_failure() -> Self {
        Self {
            calls: Arc::new(Mutex::new(Vec::new())),
            response: String::new(),
            fail: true,
        }
    }

    pub fn get_calls(&self) -> Vec<EngineCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

impl NoticeEngine for MockNoticeEngine {
    fn scan_directory(&self, path: &Path, recursive: bool, format: OutputFormat) -> Result<String> {
        self.calls.lock().unwrap().push(EngineCall {
            operation: "scan_directory".to_string(),
            path: path.to_path_buf(),
            recursive,
            format: format.to_string(),
        });
        if self.fail {
            anyhow::bail!("engine unavailable");
        }
        Ok(self.response.clone())
    }

    fn process_archive(&self, path: &Path, format: OutputFormat) -> Result<String> {
        self.calls.lock().unwrap().push(EngineCall {
            operation: "process_archive".to_string(),
            path: path.to_path_buf(),
            recursive: false,
            format: format.to_string(),
        });
        if self.fail {
            anyhow::bail!("engine unavailable");
        }
        Ok(self.response.clone())
    }
}
