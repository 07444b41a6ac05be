use crate::config::Config;
use crate::domain::{Item, Tag};
use crate::error::Result;
use crate::source::{ChangelogSource, ItemPools, TagSet};

/// In-memory source for tests and library callers that already hold the data
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    tags: Vec<Tag>,
    pools: ItemPools,
}

impl MemorySource {
    /// Create a source from tags in any order and the two item pools
    pub fn new(tags: Vec<Tag>, issues: Vec<Item>, pull_requests: Vec<Item>) -> Self {
        MemorySource {
            tags,
            pools: ItemPools {
                issues,
                pull_requests,
            },
        }
    }

    /// Add a tag
    pub fn add_tag(&mut self, tag: Tag) {
        self.tags.push(tag);
    }

    /// Add an item to the pool matching its kind
    pub fn add_item(&mut self, item: Item) {
        if item.is_pull_request {
            self.pools.pull_requests.push(item);
        } else {
            self.pools.issues.push(item);
        }
    }
}

impl ChangelogSource for MemorySource {
    fn fetch_and_filter_tags(&self, config: &Config) -> Result<TagSet> {
        TagSet::resolve(self.tags.clone(), config)
    }

    fn fetch_issues_and_pull_requests(&self, _config: &Config) -> Result<ItemPools> {
        Ok(self.pools.clone())
    }
}
