use regex::Regex;
use std::sync::OnceLock;

use crate::config::Config;
use crate::domain::Item;

/// Characters that would otherwise be read as Markdown formatting
const ESCAPED_CHARACTERS: &[char] = &['\\', '<', '>', '*', '_', '(', ')', '[', ']', '#'];

const API_LABEL_HOST: &str = "api.github.com/repos";
const WEB_LABEL_HOST: &str = "github.com";

/// Attribution used when a pull request arrives without its author
pub const NULL_USER: &str = "{Null user}";

fn code_span() -> &'static Regex {
    static CODE_SPAN: OnceLock<Regex> = OnceLock::new();
    CODE_SPAN.get_or_init(|| Regex::new(r"`[^`]*`").expect("code span pattern is valid"))
}

/// Escape Markdown-significant characters in a title.
///
/// Backtick code spans are copied through untouched.
pub fn escape_title(title: &str) -> String {
    let mut escaped = String::with_capacity(title.len());
    let mut last = 0;

    for span in code_span().find_iter(title) {
        escape_into(&mut escaped, &title[last..span.start()]);
        escaped.push_str(span.as_str());
        last = span.end();
    }
    escape_into(&mut escaped, &title[last..]);

    escaped
}

fn escape_into(out: &mut String, text: &str) {
    for ch in text.chars() {
        if ESCAPED_CHARACTERS.contains(&ch) {
            out.push('\\');
        }
        out.push(ch);
    }
}

/// Label badges for an item, in the item's label order
fn line_labels(config: &Config, item: &Item) -> String {
    item.labels
        .iter()
        .filter(|label| config.issue_line_labels.matches(&label.name))
        .map(|label| {
            format!(
                " [{}]({})",
                label.name,
                label.url.replacen(API_LABEL_HOST, WEB_LABEL_HOST, 1)
            )
        })
        .collect()
}

/// Author attribution, only ever applied to pull requests
fn author_attribution(config: &Config, item: &Item) -> String {
    if !config.author || !item.is_pull_request {
        return String::new();
    }

    match &item.user {
        None => format!(" ({})", NULL_USER),
        Some(user) if config.usernames_as_github_logins => format!(" (@{})", user.login),
        Some(user) => format!(" ([{}]({}))", user.login, user.html_url),
    }
}

/// Render one item as the text of a Markdown list entry (without the bullet)
pub fn format_issue_line(config: &Config, item: &Item) -> String {
    let mut line = format!(
        "{} [\\#{}]({})",
        escape_title(&item.title),
        item.number,
        item.html_url
    );

    if !config.issue_line_labels.is_empty() {
        line.push_str(&line_labels(config, item));
    }

    line.push_str(&author_attribution(config, item));
    line
}
