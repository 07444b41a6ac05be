//! Terminal output for the command line tool.

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("\x1b[31mERROR:\x1b[0m {}", message);
}

/// Format and print a success message with green checkmark.
pub fn display_success(message: &str) {
    println!("\x1b[32m✓\x1b[0m {}", message);
}

/// Format and print a status message with yellow arrow.
pub fn display_status(message: &str) {
    println!("\x1b[33m→\x1b[0m {}", message);
}

/// Summarize what was generated.
///
/// # Arguments
/// * `sections` - Number of `##` release sections in the document
/// * `destination` - Where the document was written
pub fn display_summary(sections: usize, destination: &str) {
    println!(
        "\n\x1b[1mGenerated {} section{}\x1b[0m -> \x1b[36m{}\x1b[0m",
        sections,
        if sections == 1 { "" } else { "s" },
        destination
    );
}

/// Count the release sections in a rendered changelog
pub fn count_sections(changelog: &str) -> usize {
    changelog.lines().filter(|line| line.starts_with("## ")).count()
}
