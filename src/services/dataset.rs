use reqwest::Client;
use serde_json::Value;
use std::path::Path;
use std::time::Duration;
use thiserror::Error;

use crate::models::College;

/// Errors that can occur while loading the college reference dataset
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("Dataset endpoint returned {0}")]
    Http(reqwest::StatusCode),

    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid dataset format: {0}")]
    InvalidFormat(String),
}

/// Immutable college reference dataset, loaded once at startup
#[derive(Debug, Clone, Default)]
pub struct CollegeDataset {
    colleges: Vec<College>,
}

impl CollegeDataset {
    pub fn new(colleges: Vec<College>) -> Self {
        Self { colleges }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn colleges(&self) -> &[College] {
        &self.colleges
    }

    pub fn len(&self) -> usize {
        self.colleges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colleges.is_empty()
    }

    /// Load from a filesystem path or an `http(s)://` URL
    pub async fn load(source: &str, fetch_timeout: Duration) -> Result<Self, DatasetError> {
        let lower = source.to_ascii_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            let client = Client::builder().timeout(fetch_timeout).build()?;
            Self::from_url(&client, source).await
        } else {
            Self::from_file(source).await
        }
    }

    /// Read a JSON dataset from disk
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, DatasetError> {
        let path = path.as_ref();
        let text = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| DatasetError::Io {
                path: path.display().to_string(),
                source,
            })?;

        tracing::debug!("Read college dataset from {}", path.display());

        Self::from_json(&text)
    }

    /// Fetch a JSON dataset over HTTP
    pub async fn from_url(client: &Client, url: &str) -> Result<Self, DatasetError> {
        tracing::debug!("Fetching college dataset from: {}", url);

        let response = client.get(url).send().await?;

        if !response.status().is_success() {
            return Err(DatasetError::Http(response.status()));
        }

        let text = response.text().await?;
        Self::from_json(&text)
    }

    /// Parse a dataset document
    ///
    /// Accepts either a bare array of records or an object with a `colleges`
    /// array. Records that fail to deserialize are skipped.
    pub fn from_json(text: &str) -> Result<Self, DatasetError> {
        let json: Value = serde_json::from_str(text)?;

        let records = match json {
            Value::Array(records) => records,
            Value::Object(mut map) => match map.remove("colleges") {
                Some(Value::Array(records)) => records,
                _ => {
                    return Err(DatasetError::InvalidFormat(
                        "Missing colleges array".into(),
                    ))
                }
            },
            _ => {
                return Err(DatasetError::InvalidFormat(
                    "Expected an array or an object".into(),
                ))
            }
        };

        let total = records.len();
        let colleges: Vec<College> = records
            .into_iter()
            .enumerate()
            .filter_map(|(index, record)| match serde_json::from_value(record) {
                Ok(college) => Some(college),
                Err(e) => {
                    tracing::warn!("Skipping college record {}: {}", index, e);
                    None
                }
            })
            .collect();

        if colleges.len() < total {
            tracing::warn!("Loaded {} of {} college records", colleges.len(), total);
        }

        Ok(Self { colleges })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_array() {
        let dataset = CollegeDataset::from_json(
            r#"[
                {"name": "Grinnell College", "website": "grinnell.edu", "state": "IA", "type": "Private", "enrollment": 1800},
                {"name": "Drake University", "website": "drake.edu", "state": "IA", "type": "Private", "enrollment": "4,800"}
            ]"#,
        )
        .unwrap();

        assert_eq!(dataset.len(), 2);
        assert_eq!(dataset.colleges()[1].enrollment_count(), Some(4800));
    }

    #[test]
    fn test_parse_wrapped_object() {
        let dataset = CollegeDataset::from_json(
            r#"{"colleges": [{"name": "Luther College", "website": "luther.edu", "state": "IA"}]}"#,
        )
        .unwrap();

        assert_eq!(dataset.len(), 1);
    }

    #[test]
    fn test_malformed_records_are_skipped() {
        let dataset = CollegeDataset::from_json(
            r#"[
                {"name": "Coe College", "website": "coe.edu", "state": "IA"},
                {"name": 42},
                "not a record"
            ]"#,
        )
        .unwrap();

        assert_eq!(dataset.len(), 1);
        assert_eq!(dataset.colleges()[0].name, "Coe College");
    }

    #[test]
    fn test_invalid_documents() {
        assert!(matches!(
            CollegeDataset::from_json("not json"),
            Err(DatasetError::Json(_))
        ));
        assert!(matches!(
            CollegeDataset::from_json(r#"{"schools": []}"#),
            Err(DatasetError::InvalidFormat(_))
        ));
        assert!(matches!(
            CollegeDataset::from_json("42"),
            Err(DatasetError::InvalidFormat(_))
        ));
    }

    #[tokio::test]
    async fn test_missing_file() {
        let err = CollegeDataset::from_file("does/not/exist.json").await.unwrap_err();
        assert!(matches!(err, DatasetError::Io { .. }));
    }
}
