use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// A label attached to an issue or pull request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Label {
    pub name: String,
    /// API URL of the label (e.g., `https://api.github.com/repos/o/p/labels/bug`)
    pub url: String,
}

impl Label {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Label {
            name: name.into(),
            url: url.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub login: String,
    pub html_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Milestone {
    pub title: String,
}

/// A closed issue or merged pull request, as handed over by the fetch layer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub number: u64,
    pub title: String,
    pub html_url: String,
    /// Time the item counts as done: close time for issues, merge time for pull requests
    #[serde(default)]
    pub actual_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub labels: Vec<Label>,
    #[serde(default)]
    pub user: Option<User>,
    #[serde(
        default,
        rename = "pull_request",
        deserialize_with = "deserialize_pull_request_marker"
    )]
    pub is_pull_request: bool,
    #[serde(default)]
    pub milestone: Option<Milestone>,
}

impl Item {
    /// Create a plain issue with no labels, user or milestone
    pub fn issue(number: u64, title: impl Into<String>, html_url: impl Into<String>) -> Self {
        Item {
            number,
            title: title.into(),
            html_url: html_url.into(),
            actual_date: None,
            labels: Vec::new(),
            user: None,
            is_pull_request: false,
            milestone: None,
        }
    }

    /// Create a pull request with no labels, user or milestone
    pub fn pull_request(number: u64, title: impl Into<String>, html_url: impl Into<String>) -> Self {
        Item {
            is_pull_request: true,
            ..Item::issue(number, title, html_url)
        }
    }

    pub fn at(mut self, actual_date: DateTime<Utc>) -> Self {
        self.actual_date = Some(actual_date);
        self
    }

    pub fn with_label(mut self, label: Label) -> Self {
        self.labels.push(label);
        self
    }

    pub fn with_user(mut self, login: impl Into<String>, html_url: impl Into<String>) -> Self {
        self.user = Some(User {
            login: login.into(),
            html_url: html_url.into(),
        });
        self
    }

    pub fn in_milestone(mut self, title: impl Into<String>) -> Self {
        self.milestone = Some(Milestone {
            title: title.into(),
        });
        self
    }

    pub fn milestone_title(&self) -> Option<&str> {
        self.milestone.as_ref().map(|m| m.title.as_str())
    }
}

/// Accepts the API's `pull_request` object as well as an explicit boolean.
/// A missing key or explicit `null` means "not a pull request".
fn deserialize_pull_request_marker<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let marker = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match marker {
        None | Some(serde_json::Value::Null) => false,
        Some(serde_json::Value::Bool(flag)) => flag,
        Some(_) => true,
    })
}

/// Which labels render as badges on an item line
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub enum LineLabels {
    #[default]
    None,
    All,
    Only(Vec<String>),
}

impl LineLabels {
    pub const WILDCARD: &'static str = "ALL";

    pub fn is_empty(&self) -> bool {
        matches!(self, LineLabels::None)
    }

    pub fn matches(&self, label_name: &str) -> bool {
        match self {
            LineLabels::None => false,
            LineLabels::All => true,
            LineLabels::Only(names) => names.iter().any(|name| name == label_name),
        }
    }
}

impl From<Vec<String>> for LineLabels {
    fn from(names: Vec<String>) -> Self {
        if names.is_empty() {
            LineLabels::None
        } else if names.iter().any(|name| name == LineLabels::WILDCARD) {
            LineLabels::All
        } else {
            LineLabels::Only(names)
        }
    }
}

impl From<LineLabels> for Vec<String> {
    fn from(labels: LineLabels) -> Self {
        match labels {
            LineLabels::None => Vec::new(),
            LineLabels::All => vec![LineLabels::WILDCARD.to_string()],
            LineLabels::Only(names) => names,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pull_request_marker_object() {
        let item: Item = serde_json::from_str(
            r#"{"number": 1, "title": "t", "html_url": "u", "pull_request": {"url": "x"}}"#,
        )
        .unwrap();
        assert!(item.is_pull_request);
    }

    #[test]
    fn test_pull_request_marker_null_or_missing() {
        let explicit_null: Item = serde_json::from_str(
            r#"{"number": 1, "title": "t", "html_url": "u", "pull_request": null}"#,
        )
        .unwrap();
        assert!(!explicit_null.is_pull_request);

        let missing: Item =
            serde_json::from_str(r#"{"number": 1, "title": "t", "html_url": "u"}"#).unwrap();
        assert!(!missing.is_pull_request);
        assert!(missing.labels.is_empty());
        assert_eq!(missing.actual_date, None);
    }

    #[test]
    fn test_item_builders() {
        let item = Item::pull_request(7, "Add parser", "https://github.com/o/p/pull/7")
            .with_user("alice", "https://github.com/alice")
            .in_milestone("v1.0");
        assert!(item.is_pull_request);
        assert_eq!(item.milestone_title(), Some("v1.0"));
        assert_eq!(item.user.unwrap().login, "alice");
    }

    #[test]
    fn test_line_labels_from_list() {
        assert_eq!(LineLabels::from(Vec::new()), LineLabels::None);
        assert_eq!(LineLabels::from(vec!["ALL".to_string()]), LineLabels::All);
        let only = LineLabels::from(vec!["bug".to_string()]);
        assert!(only.matches("bug"));
        assert!(!only.matches("enhancement"));
        assert!(LineLabels::All.matches("anything"));
        assert!(!LineLabels::None.matches("bug"));
    }
}
