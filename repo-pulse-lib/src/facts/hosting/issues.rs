use super::client::Client;
use crate::Result;
use ohno::IntoAppError;
use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer};

const LOG_TARGET: &str = "    issues";
const ISSUE_PAGE_SIZE: u8 = 100;

/// Minimal issue info with only the field we need.
///
/// The issues endpoint also lists pull requests. They are issue-shaped records
/// that carry a `pull_request` key.
#[derive(Debug, Deserialize)]
pub struct IssueItem {
    #[serde(rename = "pull_request", default, deserialize_with = "key_present")]
    pub is_pull_request: bool,
}

/// Called only when the key exists, so any value (including `null`) marks presence.
fn key_present<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let _ = IgnoredAny::deserialize(deserializer)?;
    Ok(true)
}

/// Count the issues of a repository across its whole history, excluding pull requests.
///
/// Walks the issues listing one page at a time until a page comes back empty or `null`.
/// A failure on any page aborts the count.
pub async fn count_issues(client: &Client, base_url: &str) -> Result<u64> {
    let mut total = 0u64;
    let mut page_num = 1u32;

    loop {
        let url = format!("{base_url}/issues?state=all&per_page={ISSUE_PAGE_SIZE}&page={page_num}");
        let body = client.get(&url).await?;

        // A `null` page ends pagination the same way an empty one does
        let issues = serde_json::from_slice::<Option<Vec<IssueItem>>>(&body)
            .into_app_err_with(|| format!("could not decode issues page {page_num} from '{url}'"))?
            .unwrap_or_default();

        if issues.is_empty() {
            break;
        }

        let counted = count_page(&issues);
        log::debug!(target: LOG_TARGET, "Page {page_num}: {} items, {counted} issues", issues.len());

        total += counted;
        page_num += 1;
    }

    log::info!(target: LOG_TARGET, "Counted {total} issues in {} pages from '{base_url}'", page_num - 1);

    Ok(total)
}

fn count_page(issues: &[IssueItem]) -> u64 {
    issues.iter().filter(|issue| !issue.is_pull_request).count() as u64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> Vec<IssueItem> {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_issue_without_marker() {
        let item: IssueItem = serde_json::from_str(r#"{"number": 1, "state": "open"}"#).unwrap();
        assert!(!item.is_pull_request);
    }

    #[test]
    fn test_issue_with_marker() {
        let item: IssueItem = serde_json::from_str(
            r#"{
                "number": 2,
                "pull_request": {
                    "url": "https://api.github.com/repos/owner/repo/pulls/2",
                    "merged_at": null
                }
            }"#,
        )
        .unwrap();
        assert!(item.is_pull_request);
    }

    #[test]
    fn test_null_marker_still_marks_pull_request() {
        let item: IssueItem = serde_json::from_str(r#"{"number": 3, "pull_request": null}"#).unwrap();
        assert!(item.is_pull_request);
    }

    #[test]
    fn test_count_page_mixed() {
        let issues = parse(
            r#"[
                {"number": 1},
                {"number": 2, "pull_request": {}},
                {"number": 3},
                {"number": 4, "pull_request": {"url": "x"}},
                {"number": 5}
            ]"#,
        );
        assert_eq!(count_page(&issues), 3);
    }

    #[test]
    fn test_count_page_empty() {
        assert_eq!(count_page(&[]), 0);
    }

    #[test]
    fn test_non_array_page_fails() {
        let _ = serde_json::from_str::<Vec<IssueItem>>(r#"{"message": "Not Found"}"#).unwrap_err();
    }
}
