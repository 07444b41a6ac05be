use chrono::format::{Item as FormatItem, StrftimeItems};
use chrono::{DateTime, Utc};

use crate::config::Config;
use crate::error::{ChangelogError, Result};

/// Whether a heading stands for a tagged release or the open unreleased section
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeadingKind {
    Release,
    Unreleased,
}

/// Everything the `##` line of a section is built from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseHeading<'a> {
    pub kind: HeadingKind,
    pub name: &'a str,
    pub link: &'a str,
    pub time: DateTime<Utc>,
}

/// Substitute `link` into a printf-style template.
///
/// `%s` takes the link once and `%%` is a literal percent sign. A second
/// `%s` or any other directive is a formatting error.
pub fn format_release_url(template: &str, link: &str) -> Result<String> {
    let mut out = String::with_capacity(template.len() + link.len());
    let mut used = false;
    let mut chars = template.chars();

    while let Some(ch) = chars.next() {
        if ch != '%' {
            out.push(ch);
            continue;
        }
        match chars.next() {
            Some('%') => out.push('%'),
            Some('s') if !used => {
                out.push_str(link);
                used = true;
            }
            Some('s') => {
                return Err(ChangelogError::format(format!(
                    "release_url '{}' expects more than one value",
                    template
                )))
            }
            Some(other) => {
                return Err(ChangelogError::format(format!(
                    "release_url '{}' has unsupported directive '%{}'",
                    template, other
                )))
            }
            None => {
                return Err(ChangelogError::format(format!(
                    "release_url '{}' ends with an incomplete directive",
                    template
                )))
            }
        }
    }

    Ok(out)
}

/// Format a release time with a strftime pattern, rejecting invalid patterns
pub fn format_date(time: &DateTime<Utc>, pattern: &str) -> Result<String> {
    let items: Vec<FormatItem> = StrftimeItems::new(pattern).collect();
    if items.iter().any(|item| matches!(item, FormatItem::Error)) {
        return Err(ChangelogError::format(format!(
            "invalid date_format '{}'",
            pattern
        )));
    }
    Ok(time.format_with_items(items.iter()).to_string())
}

/// Render the `##` heading of a section plus the optional compare link
pub fn render_header(
    config: &Config,
    heading: &ReleaseHeading<'_>,
    older_tag_link: Option<&str>,
    project_url: &str,
) -> Result<String> {
    let release_url = match &config.release_url {
        Some(template) => format_release_url(template, heading.link)?,
        None => format!("{}/tree/{}", project_url, heading.link),
    };

    let mut log = match heading.kind {
        HeadingKind::Unreleased => format!("## [{}]({})\n\n", heading.name, release_url),
        HeadingKind::Release => format!(
            "## [{}]({}) ({})\n",
            heading.name,
            release_url,
            format_date(&heading.time, &config.date_format)?
        ),
    };

    if config.compare_link {
        if let Some(older_link) = older_tag_link {
            log.push_str(&format!(
                "[Full Changelog]({}/compare/{}...{})\n\n",
                project_url, older_link, heading.link
            ));
        }
    }

    Ok(log)
}
