//! Item selection for one release interval.
//!
//! Selection runs in two stages: a temporal window on `actual_date`, then,
//! when `filter_issues_by_milestone` is on, a milestone refinement that moves
//! items explicitly assigned to a release into that release's section.

use chrono::{DateTime, Utc};

use crate::config::Config;
use crate::domain::{Item, SectionTag, Tag};
use crate::source::ItemPools;

/// Issues and pull requests selected for one section
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IntervalItems<'a> {
    pub issues: Vec<&'a Item>,
    pub pull_requests: Vec<&'a Item>,
}

impl IntervalItems<'_> {
    pub fn is_empty(&self) -> bool {
        self.issues.is_empty() && self.pull_requests.is_empty()
    }
}

/// Select items whose date lies in `(older.time, newer.time]`.
///
/// A missing boundary does not constrain its side. With both boundaries
/// missing the input is returned unchanged; otherwise items without a date
/// are dropped. Input order is preserved.
pub fn select_by_interval<'a, F>(
    items: &'a [Item],
    date_of: F,
    older: Option<&Tag>,
    newer: Option<&Tag>,
) -> Vec<&'a Item>
where
    F: Fn(&Item) -> Option<DateTime<Utc>>,
{
    if older.is_none() && newer.is_none() {
        return items.iter().collect();
    }

    items
        .iter()
        .filter(|item| match date_of(*item) {
            Some(time) => {
                let after_older = older.map_or(true, |tag| time > tag.time);
                let until_newer = newer.map_or(true, |tag| time <= tag.time);
                after_older && until_newer
            }
            None => false,
        })
        .collect()
}

/// Refine a temporally selected set by milestone.
///
/// Items whose milestone names one of `release_tags` are removed, since they
/// belong to that release. For a real `target_tag`, every item of `all_items`
/// assigned to the milestone of that name is then appended, skipping numbers
/// already present.
pub fn filter_by_milestone<'a>(
    items: Vec<&'a Item>,
    target_tag: Option<&str>,
    all_items: &'a [Item],
    release_tags: &[Tag],
) -> Vec<&'a Item> {
    let is_release = |title: &str| release_tags.iter().any(|tag| tag.name == title);

    let mut kept: Vec<&Item> = items
        .into_iter()
        .filter(|item| item.milestone_title().map_or(true, |title| !is_release(title)))
        .collect();

    if let Some(target) = target_tag {
        let assigned = all_items.iter().filter(|item| {
            item.milestone_title()
                .is_some_and(|title| title == target && is_release(title))
        });
        for item in assigned {
            if !kept.iter().any(|existing| existing.number == item.number) {
                kept.push(item);
            }
        }
    }

    kept
}

/// Select both pools for the interval `(older, newer]`
pub fn filter_for_interval<'a>(
    config: &Config,
    pools: &'a ItemPools,
    release_tags: &[Tag],
    newer: &SectionTag,
    older: Option<&Tag>,
) -> IntervalItems<'a> {
    let newer_tag = newer.tag();
    let actual_date = |item: &Item| item.actual_date;

    let mut issues = select_by_interval(&pools.issues, actual_date, older, newer_tag);
    let mut pull_requests = select_by_interval(&pools.pull_requests, actual_date, older, newer_tag);

    if config.filter_issues_by_milestone {
        let target = newer_tag.map(|tag| tag.name.as_str());
        issues = filter_by_milestone(issues, target, &pools.issues, release_tags);
        pull_requests =
            filter_by_milestone(pull_requests, target, &pools.pull_requests, release_tags);
    }

    IntervalItems {
        issues,
        pull_requests,
    }
}
