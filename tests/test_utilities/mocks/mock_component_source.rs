use async_trait::async_trait;
use figma_health::health_analysis::domain::LibrarySnapshot;
use figma_health::prelude::*;

/// Mock ComponentSource serving a fixed snapshot
pub struct MockComponentSource {
    snapshot: LibrarySnapshot,
    should_fail: bool,
}

impl MockComponentSource {
    pub fn new(file_name: &str, is_library_file: bool, records: Vec<ComponentRecord>) -> Self {
        Self {
            snapshot: LibrarySnapshot::new(file_name.to_string(), is_library_file, records),
            should_fail: false,
        }
    }

    pub fn with_failure() -> Self {
        Self {
            snapshot: LibrarySnapshot::new(String::new(), false, Vec::new()),
            should_fail: true,
        }
    }
}

#[async_trait]
impl ComponentSource for MockComponentSource {
    async fn fetch_library(&self) -> Result<LibrarySnapshot> {
        if self.should_fail {
            anyhow::bail!("Mock component source failure: file not accessible");
        }
        Ok(self.snapshot.clone())
    }

    fn describe(&self) -> String {
        format!("mock file {}", self.snapshot.file_name)
    }
}
