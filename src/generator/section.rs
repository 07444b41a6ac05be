use crate::config::Config;
use crate::domain::Item;
use crate::generator::line::format_issue_line;
use crate::generator::text::LogBuilder;

/// Render a titled list of items, or nothing at all for an empty list.
///
/// The prefix line is left out when `simple_list` is set.
pub fn render_sub_section(config: &Config, items: &[&Item], prefix: &str) -> String {
    if items.is_empty() {
        return String::new();
    }

    let mut log = LogBuilder::new();
    if !config.simple_list {
        log.push_line(prefix).push_line("");
    }
    for item in items {
        log.push("- ").push_line(&format_issue_line(config, item));
    }
    log.push_line("");
    log.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items() -> Vec<Item> {
        vec![
            Item::issue(2, "Second", "https://x/2"),
            Item::issue(1, "First", "https://x/1"),
        ]
    }

    #[test]
    fn test_empty_section() {
        assert_eq!(render_sub_section(&Config::default(), &[], "**Closed issues:**"), "");
    }

    #[test]
    fn test_section_with_prefix() {
        let items = items();
        let refs: Vec<&Item> = items.iter().collect();
        assert_eq!(
            render_sub_section(&Config::default(), &refs, "**Closed issues:**"),
            "**Closed issues:**\n\n\
             - Second [\\#2](https://x/2)\n\
             - First [\\#1](https://x/1)\n\n"
        );
    }

    #[test]
    fn test_simple_list_drops_prefix() {
        let items = items();
        let refs: Vec<&Item> = items.iter().collect();
        let config = Config {
            simple_list: true,
            ..Config::default()
        };
        let section = render_sub_section(&config, &refs, "**Closed issues:**");
        assert!(section.starts_with("- Second"));
        assert!(!section.contains("Closed issues"));
    }
}
