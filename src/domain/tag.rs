use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{ChangelogError, Result};

/// Represents a release tag with the time it was published
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    pub name: String,
    /// Identifier used in tree and compare links; falls back to `name`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    pub time: DateTime<Utc>,
}

impl Tag {
    /// Create a new tag whose link is its name
    pub fn new(name: impl Into<String>, time: DateTime<Utc>) -> Self {
        Tag {
            name: name.into(),
            link: None,
            time,
        }
    }

    pub fn with_link(mut self, link: impl Into<String>) -> Self {
        self.link = Some(link.into());
        self
    }

    pub fn link(&self) -> &str {
        self.link.as_deref().unwrap_or(&self.name)
    }

    /// Parse the tag name as a semantic version (e.g., "v1.2.3" -> 1.2.3)
    pub fn semver(&self) -> Option<semver::Version> {
        let trimmed = self.name.trim_start_matches('v').trim_start_matches('V');
        semver::Version::parse(trimmed).ok()
    }
}

/// Newer boundary of a release section.
///
/// `Unreleased` is the open interval from the newest tag up to now. It is a
/// distinct variant so that a real tag named like the unreleased label is
/// never mistaken for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SectionTag {
    Released(Tag),
    Unreleased,
}

impl SectionTag {
    pub fn tag(&self) -> Option<&Tag> {
        match self {
            SectionTag::Released(tag) => Some(tag),
            SectionTag::Unreleased => None,
        }
    }
}

/// One rendered release section: items after `older` up to and including `newer`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagInterval {
    /// Absent means "since project inception"
    pub older: Option<Tag>,
    pub newer: SectionTag,
}

impl TagInterval {
    pub fn new(older: Option<Tag>, newer: SectionTag) -> Self {
        TagInterval { older, newer }
    }
}

/// Sort tags newest-first by time.
///
/// Tags sharing a timestamp are ordered by descending semantic version when
/// both parse, otherwise by descending name, so the result is deterministic.
pub fn sort_tags_newest_first(tags: &mut [Tag]) {
    tags.sort_by(|a, b| {
        b.time.cmp(&a.time).then_with(|| match (a.semver(), b.semver()) {
            (Some(va), Some(vb)) => vb.cmp(&va),
            _ => b.name.cmp(&a.name),
        })
    });
}

/// Tag selection rules applied to the sorted tag list
#[derive(Debug, Clone, Default)]
pub struct TagFilter {
    /// Keep only tags strictly newer than this tag
    pub since_tag: Option<String>,
    /// Keep only tags strictly older than this tag
    pub due_tag: Option<String>,
    pub exclude_tags: Vec<String>,
    pub exclude_regex: Option<Regex>,
}

impl TagFilter {
    /// Build a filter, compiling the exclusion pattern if one is given
    pub fn new(
        since_tag: Option<String>,
        due_tag: Option<String>,
        exclude_tags: Vec<String>,
        exclude_pattern: Option<&str>,
    ) -> Result<Self> {
        let exclude_regex = match exclude_pattern {
            Some(pattern) => Some(Regex::new(pattern).map_err(|e| {
                ChangelogError::config(format!("Invalid exclude_tags_regex '{}': {}", pattern, e))
            })?),
            None => None,
        };

        Ok(TagFilter {
            since_tag,
            due_tag,
            exclude_tags,
            exclude_regex,
        })
    }

    /// Apply the filter to tags already sorted newest-first
    pub fn apply(&self, sorted_tags: &[Tag]) -> Result<Vec<Tag>> {
        let mut filtered: Vec<Tag> = sorted_tags.to_vec();

        if let Some(since) = &self.since_tag {
            let since_tag = find_tag(sorted_tags, since)?;
            filtered.retain(|tag| tag.time > since_tag.time);
        }

        if let Some(due) = &self.due_tag {
            let due_tag = find_tag(sorted_tags, due)?;
            filtered.retain(|tag| tag.time < due_tag.time);
        }

        filtered.retain(|tag| !self.exclude_tags.iter().any(|name| name == &tag.name));

        if let Some(re) = &self.exclude_regex {
            filtered.retain(|tag| !re.is_match(&tag.name));
        }

        Ok(filtered)
    }
}

fn find_tag<'a>(tags: &'a [Tag], name: &str) -> Result<&'a Tag> {
    tags.iter()
        .find(|tag| tag.name == name)
        .ok_or_else(|| ChangelogError::config(format!("Tag '{}' not found in repository", name)))
}

/// Pair every tag with the next older one, newest section first.
///
/// The oldest tag gets an absent older boundary.
pub fn build_section_mapping(filtered_tags: &[Tag]) -> Vec<TagInterval> {
    filtered_tags
        .iter()
        .enumerate()
        .map(|(i, newer)| {
            TagInterval::new(
                filtered_tags.get(i + 1).cloned(),
                SectionTag::Released(newer.clone()),
            )
        })
        .collect()
}
