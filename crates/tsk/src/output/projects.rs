//! Project and tag summary output.

use owo_colors::OwoColorize;

use tsk_core::ProjectSummary;

use super::helpers::truncate_str;

/// Formats the per-project tally table for `show-projects`.
pub fn format_projects_table(projects: &[ProjectSummary], use_colors: bool) -> String {
    if projects.is_empty() {
        return "No projects found.\n".to_string();
    }

    let mut output = String::new();

    let header = format!("{:<20} {:>6} {:>9}", "Project", "Open", "Resolved");
    if use_colors {
        output.push_str(&format!("{}\n", header.dimmed()));
    } else {
        output.push_str(&header);
        output.push('\n');
    }

    for project in projects {
        let line = format!(
            "{:<20} {:>6} {:>9}",
            truncate_str(&project.name, 20),
            project.open,
            project.resolved
        );
        if use_colors && project.open == 0 {
            output.push_str(&format!("{}\n", line.dimmed()));
        } else {
            output.push_str(&line);
            output.push('\n');
        }
    }

    output
}

/// Formats the tag list for `show-tags`, one sigil-prefixed tag per line.
pub fn format_tags_list(tags: &[String]) -> String {
    if tags.is_empty() {
        return "No tags found.\n".to_string();
    }
    let mut output = String::new();
    for tag in tags {
        output.push_str(&format!("+{tag}\n"));
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_projects_table_says_so() {
        assert_eq!(format_projects_table(&[], false), "No projects found.\n");
    }

    #[test]
    fn test_projects_table_lists_tallies() {
        let projects = vec![
            ProjectSummary {
                name: "acme".to_string(),
                open: 2,
                resolved: 5,
            },
            ProjectSummary {
                name: "beta".to_string(),
                open: 0,
                resolved: 1,
            },
        ];
        let output = format_projects_table(&projects, false);
        assert!(output.starts_with("Project"));
        assert!(output.contains("acme"));
        assert!(output.contains("beta"));
        assert_eq!(output.lines().count(), 3);
    }

    #[test]
    fn test_tags_list_prefixes_the_sigil() {
        let tags = vec!["dns".to_string(), "work".to_string()];
        assert_eq!(format_tags_list(&tags), "+dns\n+work\n");
    }

    #[test]
    fn test_empty_tags_list_says_so() {
        assert_eq!(format_tags_list(&[]), "No tags found.\n");
    }
}
