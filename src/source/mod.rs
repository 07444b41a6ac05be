//! Data sources feeding the generator
//!
//! The generator never fetches anything itself. It asks a [ChangelogSource]
//! for the tag timeline and the two item pools:
//!
//! - [snapshot::SnapshotSource]: reads a JSON snapshot written by a fetch step
//! - [memory::MemorySource]: holds tags and items in memory

pub mod memory;
pub mod snapshot;

pub use memory::MemorySource;
pub use snapshot::{Snapshot, SnapshotSource};

use crate::config::Config;
use crate::domain::{build_section_mapping, sort_tags_newest_first, Item, Tag, TagInterval};
use crate::error::Result;

/// Tag timeline resolved before generation starts
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TagSet {
    /// Every known tag, newest first
    pub sorted_tags: Vec<Tag>,
    /// Tags that get their own section, newest first
    pub filtered_tags: Vec<Tag>,
    pub section_mapping: Vec<TagInterval>,
    /// Older boundary link used for the oldest section
    pub since_tag: Option<String>,
}

impl TagSet {
    /// Sort, filter and pair `tags` according to `config`
    pub fn resolve(mut tags: Vec<Tag>, config: &Config) -> Result<Self> {
        sort_tags_newest_first(&mut tags);
        let filtered_tags = config.tag_filter()?.apply(&tags)?;
        let section_mapping = build_section_mapping(&filtered_tags);

        Ok(TagSet {
            sorted_tags: tags,
            filtered_tags,
            section_mapping,
            since_tag: detect_since_tag(config),
        })
    }
}

/// Boundary name for the oldest section's compare link
pub fn detect_since_tag(config: &Config) -> Option<String> {
    config.since_tag.clone()
}

/// Closed issues and merged pull requests, in arbitrary order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemPools {
    pub issues: Vec<Item>,
    pub pull_requests: Vec<Item>,
}

/// Provider of the data a changelog is generated from
pub trait ChangelogSource {
    /// Tags sorted newest first, filtered and paired into sections
    fn fetch_and_filter_tags(&self, config: &Config) -> Result<TagSet>;

    /// The issue and pull request pools
    fn fetch_issues_and_pull_requests(&self, config: &Config) -> Result<ItemPools>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::SectionTag;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_resolve_sorts_filters_and_pairs() {
        let tags = vec![
            Tag::new("v1", Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()),
            Tag::new("v3", Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap()),
            Tag::new("v2", Utc.with_ymd_and_hms(2024, 2, 1, 0, 0, 0).unwrap()),
        ];
        let config = Config {
            since_tag: Some("v1".to_string()),
            ..Config::default()
        };
        let set = TagSet::resolve(tags, &config).unwrap();

        assert_eq!(set.sorted_tags[0].name, "v3");
        assert_eq!(set.filtered_tags.len(), 2);
        assert_eq!(set.section_mapping.len(), 2);
        assert_eq!(
            set.section_mapping[1].newer,
            SectionTag::Released(set.filtered_tags[1].clone())
        );
        assert_eq!(set.section_mapping[1].older, None);
        assert_eq!(set.since_tag.as_deref(), Some("v1"));
    }
}
