//! Ad Factory - Untyped Records to Validated Ads
//!
//! Records arrive loosely shaped: every field is optional and falls back
//! to its default. The declared `type` picks the constructor.

use serde::Deserialize;
use tracing::warn;

use crate::ad::Ad;
use crate::error::{AdError, AdResult};
use crate::formats::AdFormat;

/// Input record for one ad. Absent fields default to 0 or "".
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AdRecord {
    #[serde(rename = "type")]
    pub ad_type: String,
    pub width: i64,
    pub height: i64,
    pub file_url: String,
    pub click_url: String,
    pub subtype: String,
    /// Only read for video
    pub duration: i64,
}

impl AdRecord {
    pub fn from_json(json: &str) -> AdResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_value(value: serde_json::Value) -> AdResult<Self> {
        Ok(serde_json::from_value(value)?)
    }
}

/// Build the ad variant named by `record.ad_type` (case-insensitive).
///
/// Width and height are not read for video.
pub fn build_ad(record: &AdRecord) -> AdResult<Ad> {
    let Some(format) = AdFormat::parse(&record.ad_type) else {
        warn!(ad_type = %record.ad_type, "unknown ad type");
        return Err(AdError::UnknownAdType(record.ad_type.to_lowercase()));
    };

    match format {
        AdFormat::Video => Ad::video(
            record.duration,
            &record.file_url,
            &record.click_url,
            &record.subtype,
        ),
        AdFormat::Display => Ad::display(
            record.width,
            record.height,
            &record.file_url,
            &record.click_url,
            &record.subtype,
        ),
        AdFormat::Social => Ad::social(
            record.width,
            record.height,
            &record.file_url,
            &record.click_url,
            &record.subtype,
        ),
    }
}
