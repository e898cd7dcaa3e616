use crate::Result;
use ohno::IntoAppError;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};

const LOG_TARGET: &str = "  releases";

/// A value that decodes to `None` instead of failing when it has the wrong shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lenient<T>(pub Option<T>);

impl<T> Default for Lenient<T> {
    fn default() -> Self {
        Self(None)
    }
}

impl<'de, T: DeserializeOwned> Deserialize<'de> for Lenient<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(Self(serde_json::from_value(value).ok()))
    }
}

#[derive(Debug, Deserialize)]
pub struct Release {
    #[serde(default)]
    pub assets: Lenient<Vec<Lenient<Asset>>>,
}

#[derive(Debug, Deserialize)]
pub struct Asset {
    #[serde(default, deserialize_with = "whole_count")]
    pub download_count: Option<u64>,
}

/// Accepts any non-negative whole number, including one written as a float such as `5.0`.
fn whole_count<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(value.as_u64().or_else(|| value.as_f64().and_then(whole_float)))
}

// 2^64, the first float above the u64 range
const U64_LIMIT: f64 = 18_446_744_073_709_551_616.0;

#[expect(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "the value is checked to be a whole number within the u64 range"
)]
fn whole_float(value: f64) -> Option<u64> {
    (value >= 0.0 && value < U64_LIMIT && value.fract() == 0.0).then(|| value as u64)
}

impl Release {
    /// Downloads across all of this release's assets. Unusable entries count as zero.
    #[must_use]
    pub fn downloads(&self) -> u64 {
        self.assets
            .0
            .iter()
            .flatten()
            .filter_map(|asset| asset.0.as_ref())
            .filter_map(|asset| asset.download_count)
            .fold(0, u64::saturating_add)
    }
}

/// The decoded body of the releases listing.
#[derive(Debug)]
pub enum ReleaseListing {
    /// The body was a list of releases.
    Releases(Vec<Release>),

    /// The body was a single object, typically an API error payload, and is treated as no releases.
    EmptyFallback,
}

impl ReleaseListing {
    /// Decode the body of the releases endpoint.
    ///
    /// A list of release objects decodes as [`ReleaseListing::Releases`], and so does `null`,
    /// as an empty list. If that fails but the body is a single JSON object, the result is
    /// [`ReleaseListing::EmptyFallback`]. Anything else fails with the error from decoding the list.
    pub fn parse(body: &[u8]) -> Result<Self> {
        match serde_json::from_slice::<Option<Vec<Release>>>(body) {
            Ok(releases) => Ok(Self::Releases(releases.unwrap_or_default())),
            Err(e) => {
                if let Ok(object) = serde_json::from_slice::<Map<String, Value>>(body) {
                    let message = object.get("message").and_then(Value::as_str).unwrap_or("<none>");
                    log::info!(target: LOG_TARGET, "Releases listing is a single object (message: {message}), treating as empty");
                    return Ok(Self::EmptyFallback);
                }

                Err(e).into_app_err("could not decode releases listing")
            }
        }
    }

    /// Sum of download counts across all releases and all their assets.
    #[must_use]
    pub fn total_downloads(&self) -> u64 {
        match self {
            Self::Releases(releases) => releases.iter().map(Release::downloads).fold(0, u64::saturating_add),
            Self::EmptyFallback => 0,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Releases(releases) => releases.len(),
            Self::EmptyFallback => 0,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn total(json: &str) -> u64 {
        ReleaseListing::parse(json.as_bytes()).unwrap().total_downloads()
    }

    #[test]
    fn test_sum_across_releases_and_assets() {
        let json = r#"[
            {"assets": [{"download_count": 5}, {"download_count": 3}]},
            {"assets": []},
            {}
        ]"#;
        assert_eq!(total(json), 8);
    }

    #[test]
    fn test_multiple_releases() {
        let json = r#"[
            {"tag_name": "v2", "assets": [{"name": "a.tar.gz", "download_count": 100}]},
            {"tag_name": "v1", "assets": [{"name": "a.tar.gz", "download_count": 40}, {"name": "b.zip", "download_count": 2}]}
        ]"#;
        assert_eq!(total(json), 142);
    }

    #[test]
    fn test_empty_list() {
        let listing = ReleaseListing::parse(b"[]").unwrap();
        assert!(matches!(listing, ReleaseListing::Releases(ref r) if r.is_empty()));
        assert!(listing.is_empty());
        assert_eq!(listing.total_downloads(), 0);
    }

    #[test]
    fn test_null_body_is_empty_list() {
        let listing = ReleaseListing::parse(b"null").unwrap();
        assert!(matches!(listing, ReleaseListing::Releases(ref r) if r.is_empty()));
        assert_eq!(listing.total_downloads(), 0);
    }

    #[test]
    fn test_single_object_falls_back_to_empty() {
        let listing = ReleaseListing::parse(br#"{"message":"Not Found"}"#).unwrap();
        assert!(matches!(listing, ReleaseListing::EmptyFallback));
        assert_eq!(listing.total_downloads(), 0);
        assert_eq!(listing.len(), 0);
    }

    #[test]
    fn test_garbage_fails() {
        let _ = ReleaseListing::parse(b"not json").unwrap_err();
        let _ = ReleaseListing::parse(b"42").unwrap_err();
    }

    #[test]
    fn test_list_of_non_objects_fails() {
        let _ = ReleaseListing::parse(b"[1, 2, 3]").unwrap_err();
    }

    #[test]
    fn test_malformed_assets_are_skipped() {
        let json = r#"[
            {"assets": "not a list"},
            {"assets": null},
            {"assets": [7, "x", {"download_count": 4}]},
            {"assets": [{"download_count": "12"}, {"download_count": -3}, {"name": "no count"}]}
        ]"#;
        assert_eq!(total(json), 4);
    }

    #[test]
    fn test_whole_float_counts() {
        let json = r#"[{"assets": [{"download_count": 5.0}, {"download_count": 2.5}, {"download_count": -1.0}, {"download_count": 3}]}]"#;
        assert_eq!(total(json), 8);
    }

    #[test]
    fn test_whole_float_bounds() {
        assert_eq!(whole_float(0.0), Some(0));
        assert_eq!(whole_float(1e15), Some(1_000_000_000_000_000));
        assert_eq!(whole_float(0.5), None);
        assert_eq!(whole_float(-2.0), None);
        assert_eq!(whole_float(U64_LIMIT), None);
        assert_eq!(whole_float(f64::NAN), None);
        assert_eq!(whole_float(f64::INFINITY), None);
    }

    #[test]
    fn test_lenient_decodes_good_value() {
        let value: Lenient<u64> = serde_json::from_str("17").unwrap();
        assert_eq!(value, Lenient(Some(17)));
    }

    #[test]
    fn test_lenient_swallows_bad_value() {
        let value: Lenient<u64> = serde_json::from_str(r#""seventeen""#).unwrap();
        assert_eq!(value, Lenient(None));
    }

    #[test]
    fn test_downloads_saturate() {
        let json = format!(r#"[{{"assets": [{{"download_count": {max}}}, {{"download_count": 1}}]}}]"#, max = u64::MAX);
        assert_eq!(total(&json), u64::MAX);
    }
}
