use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

use crate::config::Config;
use crate::domain::{Item, Tag};
use crate::error::{ChangelogError, Result};
use crate::source::{ChangelogSource, ItemPools, TagSet};

/// JSON document holding already fetched repository data
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub tags: Vec<Tag>,
    #[serde(default)]
    pub issues: Vec<Item>,
    #[serde(default)]
    pub pull_requests: Vec<Item>,
}

impl Snapshot {
    /// Parse a snapshot from JSON text
    pub fn from_json(json: &str) -> Result<Self> {
        let snapshot: Snapshot = serde_json::from_str(json)?;
        Ok(snapshot)
    }

    /// Split the snapshot into its two pools.
    ///
    /// Entries of `pull_requests` always count as pull requests. Entries of
    /// `issues` carrying a pull request marker are moved to the pull request
    /// pool.
    pub fn into_pools(self) -> ItemPools {
        let mut pools = ItemPools {
            issues: Vec::with_capacity(self.issues.len()),
            pull_requests: Vec::with_capacity(self.pull_requests.len()),
        };

        for mut item in self.pull_requests {
            item.is_pull_request = true;
            pools.pull_requests.push(item);
        }
        for item in self.issues {
            if item.is_pull_request {
                if pools.pull_requests.iter().any(|pr| pr.number == item.number) {
                    continue;
                }
                pools.pull_requests.push(item);
            } else {
                pools.issues.push(item);
            }
        }

        pools
    }
}

/// Source backed by a JSON snapshot file, parsed once when opened
#[derive(Debug, Clone)]
pub struct SnapshotSource {
    snapshot: Snapshot,
}

impl SnapshotSource {
    /// Read and parse the snapshot at `path`
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(ChangelogError::source(format!(
                "Snapshot file not found: {}",
                path.display()
            )));
        }
        debug!(path = %path.display(), "reading snapshot");
        let snapshot = Snapshot::from_json(&fs::read_to_string(path)?)?;
        Ok(SnapshotSource { snapshot })
    }
}

impl From<Snapshot> for SnapshotSource {
    fn from(snapshot: Snapshot) -> Self {
        SnapshotSource { snapshot }
    }
}

impl ChangelogSource for SnapshotSource {
    fn fetch_and_filter_tags(&self, config: &Config) -> Result<TagSet> {
        if self.snapshot.tags.is_empty() {
            warn!("snapshot contains no tags, everything lands in the unreleased section");
        }
        TagSet::resolve(self.snapshot.tags.clone(), config)
    }

    fn fetch_issues_and_pull_requests(&self, _config: &Config) -> Result<ItemPools> {
        Ok(self.snapshot.clone().into_pools())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SNAPSHOT: &str = r#"{
        "tags": [
            {"name": "v1.0", "time": "2024-01-01T00:00:00Z"},
            {"name": "v2.0", "link": "release-2", "time": "2024-02-01T00:00:00Z"}
        ],
        "issues": [
            {"number": 1, "title": "Bug", "html_url": "https://github.com/o/p/issues/1",
             "actual_date": "2024-01-10T00:00:00Z"},
            {"number": 2, "title": "Listed as issue", "html_url": "https://github.com/o/p/pull/2",
             "pull_request": {"url": "https://api.github.com/repos/o/p/pulls/2"}}
        ],
        "pull_requests": [
            {"number": 3, "title": "Feature", "html_url": "https://github.com/o/p/pull/3",
             "user": {"login": "alice", "html_url": "https://github.com/alice"}}
        ]
    }"#;

    #[test]
    fn test_parse_snapshot() {
        let snapshot = Snapshot::from_json(SNAPSHOT).unwrap();
        assert_eq!(snapshot.tags.len(), 2);
        assert_eq!(snapshot.tags[1].link(), "release-2");
        assert_eq!(snapshot.issues.len(), 2);
    }

    #[test]
    fn test_into_pools_routes_by_marker() {
        let pools = Snapshot::from_json(SNAPSHOT).unwrap().into_pools();
        let issue_numbers: Vec<u64> = pools.issues.iter().map(|i| i.number).collect();
        let pr_numbers: Vec<u64> = pools.pull_requests.iter().map(|i| i.number).collect();
        assert_eq!(issue_numbers, vec![1]);
        assert_eq!(pr_numbers, vec![3, 2]);
        assert!(pools.pull_requests.iter().all(|pr| pr.is_pull_request));
    }

    #[test]
    fn test_snapshot_source_reads_file_once() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SNAPSHOT.as_bytes()).unwrap();
        file.flush().unwrap();

        let source = SnapshotSource::open(file.path()).unwrap();
        // Later changes to the file do not affect an opened source.
        std::fs::write(file.path(), "not json").unwrap();

        let config = Config::default();
        let tags = source.fetch_and_filter_tags(&config).unwrap();
        assert_eq!(tags.filtered_tags[0].name, "v2.0");
        let pools = source.fetch_issues_and_pull_requests(&config).unwrap();
        assert_eq!(pools.pull_requests.len(), 2);
        assert_eq!(pools.issues.len(), 1);
    }

    #[test]
    fn test_missing_snapshot_file() {
        let err = SnapshotSource::open("/nonexistent/snapshot.json").unwrap_err();
        assert!(err.to_string().starts_with("Source error"));
    }

    #[test]
    fn test_invalid_snapshot_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"{\"tags\": 3}").unwrap();
        file.flush().unwrap();

        let err = SnapshotSource::open(file.path()).unwrap_err();
        assert!(err.to_string().starts_with("JSON error"));
    }

    #[test]
    fn test_source_from_snapshot() {
        let source = SnapshotSource::from(Snapshot::default());
        let tags = source.fetch_and_filter_tags(&Config::default()).unwrap();
        assert!(tags.filtered_tags.is_empty());
    }
}
