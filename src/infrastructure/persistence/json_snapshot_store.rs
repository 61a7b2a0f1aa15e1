//! Snapshot storage in a single JSON file.
//!
//! The file holds one object keyed by slug:
//!
//! ```json
//! {
//!   "promo": {
//!     "ios": "https://apps.apple.com/app/id1",
//!     "android": "https://play.google.com/store/apps/details?id=app",
//!     "default": "https://example.com"
//!   }
//! }
//! ```
//!
//! Writes go to a sibling `.tmp` file which is synced and renamed over the
//! target, so a crash mid-write leaves the previous snapshot intact.

use async_trait::async_trait;
use serde_json::{Map, Value};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::io::AsyncWriteExt;

use crate::domain::entities::{LinkSnapshot, LinkTargets};
use crate::domain::repositories::{SnapshotError, SnapshotStore};
use crate::utils::url_validator::is_valid_url;

/// File-backed [`SnapshotStore`].
pub struct JsonFileSnapshotStore {
    path: PathBuf,
}

impl JsonFileSnapshotStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self.path.clone().into_os_string();
        name.push(".tmp");
        PathBuf::from(name)
    }
}

#[async_trait]
impl SnapshotStore for JsonFileSnapshotStore {
    async fn load(&self) -> Result<LinkSnapshot, SnapshotError> {
        let content = match tokio::fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(SnapshotError::Missing(self.location()));
            }
            Err(e) => return Err(SnapshotError::Read(e.to_string())),
        };

        parse_snapshot(&content)
    }

    async fn save(&self, snapshot: &LinkSnapshot) -> Result<(), SnapshotError> {
        let content = serde_json::to_string_pretty(snapshot)
            .map_err(|e| SnapshotError::Write(format!("cannot serialize snapshot: {e}")))?;

        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| SnapshotError::Write(format!("cannot create directory: {e}")))?;
        }

        let temp_path = self.temp_path();
        {
            let mut file = tokio::fs::File::create(&temp_path)
                .await
                .map_err(|e| SnapshotError::Write(format!("cannot create temp file: {e}")))?;
            file.write_all(content.as_bytes())
                .await
                .map_err(|e| SnapshotError::Write(format!("cannot write temp file: {e}")))?;
            file.sync_all()
                .await
                .map_err(|e| SnapshotError::Write(format!("cannot sync to disk: {e}")))?;
        }

        tokio::fs::rename(&temp_path, &self.path)
            .await
            .map_err(|e| SnapshotError::Write(format!("cannot rename temp file: {e}")))?;

        Ok(())
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}

/// Parses and validates snapshot file content.
///
/// Every entry must be an object with non-empty `ios`, `android` and
/// `default` strings, each a valid URL. Extra keys are ignored. One bad entry
/// rejects the whole snapshot.
///
/// # Errors
///
/// - [`SnapshotError::Parse`] if the content is not a JSON object
/// - [`SnapshotError::InvalidEntry`] naming the first offending slug
pub fn parse_snapshot(content: &str) -> Result<LinkSnapshot, SnapshotError> {
    let value: Value =
        serde_json::from_str(content).map_err(|e| SnapshotError::Parse(e.to_string()))?;

    let Value::Object(entries) = value else {
        return Err(SnapshotError::Parse(
            "top-level value must be an object keyed by slug".to_string(),
        ));
    };

    let mut snapshot = LinkSnapshot::new();
    for (slug, raw) in entries {
        let targets = parse_targets(&slug, &raw)?;
        snapshot.insert(slug, targets);
    }

    Ok(snapshot)
}

fn parse_targets(slug: &str, raw: &Value) -> Result<LinkTargets, SnapshotError> {
    let invalid = |reason: String| SnapshotError::InvalidEntry {
        slug: slug.to_string(),
        reason,
    };

    if slug.is_empty() {
        return Err(invalid("slug must not be empty".to_string()));
    }

    let Value::Object(fields) = raw else {
        return Err(invalid("entry must be an object".to_string()));
    };

    let field = |name: &str, fields: &Map<String, Value>| -> Result<String, SnapshotError> {
        match fields.get(name) {
            None => Err(invalid(format!("field '{name}' is missing"))),
            Some(Value::String(s)) if s.is_empty() => {
                Err(invalid(format!("field '{name}' is empty")))
            }
            Some(Value::String(s)) if !is_valid_url(s) => {
                Err(invalid(format!("field '{name}' is not a valid URL")))
            }
            Some(Value::String(s)) => Ok(s.clone()),
            Some(_) => Err(invalid(format!("field '{name}' must be a string"))),
        }
    };

    Ok(LinkTargets {
        ios: field("ios", fields)?,
        android: field("android", fields)?,
        default: field("default", fields)?,
    })
}
