use tracing::debug;

use crate::domain::{SectionTag, Tag};
use crate::error::Result;
use crate::generator::filter::{filter_for_interval, IntervalItems};
use crate::generator::header::{render_header, HeadingKind, ReleaseHeading};
use crate::generator::section::render_sub_section;
use crate::generator::text::LogBuilder;
use crate::generator::Generator;

/// Link used for the newer side of the unreleased section
const UNRELEASED_LINK: &str = "HEAD";

impl<'a> Generator<'a> {
    /// Render the section for items after `older` up to and including `newer`.
    ///
    /// An unreleased section with nothing in it renders as an empty string.
    pub fn generate_between_tags(&self, older: Option<&Tag>, newer: &SectionTag) -> Result<String> {
        let mut items = filter_for_interval(
            self.config,
            self.pools,
            &self.tags.filtered_tags,
            newer,
            older,
        );
        // Disabled kinds are dropped before the emptiness check.
        if !self.config.pulls {
            items.pull_requests.clear();
        }
        if !self.config.issues {
            items.issues.clear();
        }

        let older_link = match older {
            Some(tag) => Some(tag.link()),
            None => self.tags.since_tag.as_deref(),
        };

        if *newer == SectionTag::Unreleased && items.is_empty() {
            debug!("skipping empty unreleased section");
            return Ok(String::new());
        }

        self.create_log_for_tag(&items, newer, older_link)
    }

    /// Header followed by the pull request and issue lists of one section
    fn create_log_for_tag(
        &self,
        items: &IntervalItems<'_>,
        newer: &SectionTag,
        older_link: Option<&str>,
    ) -> Result<String> {
        let heading = self.heading_for(newer);
        debug!(
            tag = heading.name,
            pull_requests = items.pull_requests.len(),
            issues = items.issues.len(),
            "rendering section"
        );

        let project_url = self.config.project_url();
        let mut log = LogBuilder::new();
        log.push(&render_header(self.config, &heading, older_link, &project_url)?);

        log.push(&render_sub_section(
            self.config,
            &items.pull_requests,
            &self.config.merge_prefix,
        ));
        log.push(&render_sub_section(
            self.config,
            &items.issues,
            &self.config.issue_prefix,
        ));

        Ok(log.finish())
    }

    fn heading_for<'s>(&'s self, newer: &'s SectionTag) -> ReleaseHeading<'s> {
        match newer {
            SectionTag::Released(tag) => ReleaseHeading {
                kind: HeadingKind::Release,
                name: &tag.name,
                link: tag.link(),
                time: tag.time,
            },
            SectionTag::Unreleased => match &self.config.future_release {
                Some(future) => ReleaseHeading {
                    kind: HeadingKind::Release,
                    name: future,
                    link: future,
                    time: self.now,
                },
                None => ReleaseHeading {
                    kind: HeadingKind::Unreleased,
                    name: &self.config.unreleased_label,
                    link: UNRELEASED_LINK,
                    time: self.now,
                },
            },
        }
    }

    /// Unreleased section starting at the newest selected tag.
    ///
    /// Falls back to the last entry of the sorted tag list when tag filtering
    /// left nothing.
    pub fn generate_unreleased_section(&self) -> Result<String> {
        let start = self
            .tags
            .filtered_tags
            .first()
            .or_else(|| self.tags.sorted_tags.last());
        self.generate_between_tags(start, &SectionTag::Unreleased)
    }

    /// Every section, newest first, with the unreleased section on top when enabled
    pub fn generate_for_all_tags(&self) -> Result<String> {
        let mut log = LogBuilder::new();

        if self.config.unreleased {
            log.push(&self.generate_unreleased_section()?);
        }

        for interval in &self.tags.section_mapping {
            log.push(&self.generate_between_tags(interval.older.as_ref(), &interval.newer)?);
        }

        Ok(log.finish())
    }
}
