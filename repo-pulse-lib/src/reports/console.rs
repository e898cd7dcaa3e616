use super::MetricsDelta;
use crate::facts::RepoMetrics;
use core::fmt::Write;

const TITLE: &str = "GitHub Repository Monthly Report";
const SEPARATOR: &str = "===================================";

/// Render the delta report for `current` against `previous`.
///
/// Every metric line has the form `<label>: <current> (Delta: <signed delta>)`,
/// with the sign always shown.
pub fn generate<W: Write>(current: &RepoMetrics, previous: &RepoMetrics, writer: &mut W) -> core::fmt::Result {
    let delta = MetricsDelta::between(current, previous);

    writeln!(writer, "{TITLE}")?;
    writeln!(writer, "{SEPARATOR}")?;
    writeln!(writer, "Repository: {}", current.repository_name)?;
    write_metric(writer, "Stars", current.stars, delta.stars)?;
    write_metric(writer, "Forks", current.forks, delta.forks)?;
    write_metric(writer, "Watchers", current.watchers, delta.watchers)?;
    write_metric(writer, "Open Issues", current.open_issues, delta.open_issues)?;
    write_metric(writer, "Total Issues", current.total_issues, delta.total_issues)?;
    write_metric(writer, "Total Release Downloads", current.total_release_downloads, delta.total_release_downloads)?;
    writeln!(writer, "Last Updated: {}", current.last_updated)?;
    writeln!(writer, "{SEPARATOR}")
}

fn write_metric<W: Write>(writer: &mut W, label: &str, value: u64, delta: i128) -> core::fmt::Result {
    writeln!(writer, "{label}: {value} (Delta: {delta:+})")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(current: &RepoMetrics, previous: &RepoMetrics) -> String {
        let mut output = String::new();
        generate(current, previous, &mut output).unwrap();
        output
    }

    fn current() -> RepoMetrics {
        RepoMetrics {
            repository_name: "acme/widget".to_string(),
            stars: 15,
            forks: 3,
            open_issues: 4,
            watchers: 0,
            total_issues: 21,
            total_release_downloads: 980,
            last_updated: "2024-06-30T08:00:00Z".to_string(),
        }
    }

    #[test]
    fn test_full_layout() {
        let previous = RepoMetrics {
            stars: 10,
            forks: 5,
            open_issues: 4,
            watchers: 1,
            total_issues: 20,
            total_release_downloads: 900,
            ..RepoMetrics::ZERO
        };

        let expected = "\
GitHub Repository Monthly Report
===================================
Repository: acme/widget
Stars: 15 (Delta: +5)
Forks: 3 (Delta: -2)
Watchers: 0 (Delta: -1)
Open Issues: 4 (Delta: +0)
Total Issues: 21 (Delta: +1)
Total Release Downloads: 980 (Delta: +80)
Last Updated: 2024-06-30T08:00:00Z
===================================
";
        assert_eq!(render(&current(), &previous), expected);
    }

    #[test]
    fn test_zero_previous_shows_current_values() {
        let output = render(&current(), &RepoMetrics::ZERO);

        assert!(output.contains("Stars: 15 (Delta: +15)\n"));
        assert!(output.contains("Forks: 3 (Delta: +3)\n"));
        assert!(output.contains("Watchers: 0 (Delta: +0)\n"));
        assert!(output.contains("Open Issues: 4 (Delta: +4)\n"));
        assert!(output.contains("Total Issues: 21 (Delta: +21)\n"));
        assert!(output.contains("Total Release Downloads: 980 (Delta: +980)\n"));
    }

    #[test]
    fn test_separators_are_35_wide() {
        assert_eq!(SEPARATOR.len(), 35);
        assert!(SEPARATOR.chars().all(|c| c == '='));
    }

    #[test]
    fn test_empty_strings_pass_through() {
        let output = render(&RepoMetrics::ZERO, &RepoMetrics::ZERO);
        assert!(output.contains("Repository: \n"));
        assert!(output.contains("Last Updated: \n"));
        assert!(output.contains("Stars: 0 (Delta: +0)\n"));
    }
}
