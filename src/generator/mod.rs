//! Changelog text generation
//!
//! The generator turns an ordered tag timeline and two item pools into one
//! Markdown document:
//!
//! - [filter]: selects the items of one release interval
//! - [line]: renders one item as a list entry
//! - [section]: renders a titled list of items
//! - [header]: renders the `##` heading and compare link of a release
//! - [entry]: walks the release intervals
//!
//! [compound_changelog] is the entry point: it pulls data from a
//! [ChangelogSource] and assembles the final document.

pub mod entry;
pub mod filter;
pub mod header;
pub mod line;
pub mod section;
pub mod text;

use chrono::{DateTime, Utc};
use std::fs;
use tracing::{debug, info};

use crate::config::Config;
use crate::domain::SectionTag;
use crate::error::Result;
use crate::source::{ChangelogSource, ItemPools, TagSet};
use text::LogBuilder;

/// Attribution appended exactly once at the end of every document
pub const CREDIT_LINE: &str = "\n\n\\* *This Changelog was automatically generated by gh-changelog*";

/// Read-only view of everything one generation run works from
#[derive(Debug, Clone, Copy)]
pub struct Generator<'a> {
    config: &'a Config,
    tags: &'a TagSet,
    pools: &'a ItemPools,
    /// Time stamped on the unreleased section
    now: DateTime<Utc>,
}

impl<'a> Generator<'a> {
    pub fn new(
        config: &'a Config,
        tags: &'a TagSet,
        pools: &'a ItemPools,
        now: DateTime<Utc>,
    ) -> Self {
        Generator {
            config,
            tags,
            pools,
            now,
        }
    }

    /// Assemble the full document from already fetched tags and items
    pub fn compound(&self) -> Result<String> {
        let mut log = LogBuilder::new();

        if let Some(frontmatter) = &self.config.frontmatter {
            log.push(frontmatter);
        }
        log.push(&self.config.header).push("\n\n");

        if self.config.unreleased_only {
            log.push(&self.generate_between_tags(
                self.tags.filtered_tags.first(),
                &SectionTag::Unreleased,
            )?);
        } else {
            log.push(&self.generate_for_all_tags()?);
        }

        if let Some(base) = &self.config.base {
            if base.is_file() {
                debug!(path = %base.display(), "appending base file");
                log.push(&fs::read_to_string(base)?);
            }
        }

        log.remove_all(CREDIT_LINE);
        log.push(CREDIT_LINE).push("\n");

        Ok(log.finish())
    }
}

/// Fetch tags and items from `source` and render the complete changelog
pub fn compound_changelog<S: ChangelogSource>(
    source: &S,
    config: &Config,
    now: DateTime<Utc>,
) -> Result<String> {
    let tags = source.fetch_and_filter_tags(config)?;
    let pools = source.fetch_issues_and_pull_requests(config)?;
    info!(
        tags = tags.filtered_tags.len(),
        issues = pools.issues.len(),
        pull_requests = pools.pull_requests.len(),
        "generating changelog"
    );

    Generator::new(config, &tags, &pools, now).compound()
}
