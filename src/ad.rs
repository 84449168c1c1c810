//! Ad Entities - Validated Creatives
//!
//! An `Ad` is only obtainable through its constructors, which check the
//! subtype against the format table. Setters keep the same guarantees:
//! dimensions clamp, subtypes reject.

use serde::Serialize;
use tracing::{debug, warn};

use crate::error::{AdError, AdResult};
use crate::formats::AdFormat;

/// Floor for width and height
pub const MIN_DIMENSION: i64 = 1;
/// Fixed width and height of every video ad
pub const VIDEO_DIMENSION: i64 = 1;
/// Fallback when a video duration is not positive
pub const DEFAULT_VIDEO_DURATION: i64 = 5;

/// Positive values pass through unchanged
fn clamp_positive(value: i64, fallback: i64) -> i64 {
    if value <= 0 {
        fallback
    } else {
        value
    }
}

/// Video-only attributes
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VideoSpec {
    duration: i64,
}

impl VideoSpec {
    fn new(duration: i64) -> Self {
        let mut spec = Self { duration: DEFAULT_VIDEO_DURATION };
        spec.set_duration(duration);
        spec
    }

    pub fn duration(&self) -> i64 {
        self.duration
    }

    /// Non-positive durations fall back to `DEFAULT_VIDEO_DURATION`
    pub fn set_duration(&mut self, duration: i64) {
        if duration <= 0 {
            debug!(duration, fallback = DEFAULT_VIDEO_DURATION, "video duration clamped");
        }
        self.duration = clamp_positive(duration, DEFAULT_VIDEO_DURATION);
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "format", rename_all = "lowercase")]
pub enum AdKind {
    Video(VideoSpec),
    Display,
    Social,
}

impl AdKind {
    pub fn format(&self) -> AdFormat {
        match self {
            AdKind::Video(_) => AdFormat::Video,
            AdKind::Display => AdFormat::Display,
            AdKind::Social => AdFormat::Social,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Ad {
    #[serde(flatten)]
    kind: AdKind,
    width: i64,
    height: i64,
    file_url: String,
    click_url: String,
    subtype: String,
}

impl Ad {
    /// Video ads are always 1x1; duration replaces size.
    pub fn video(duration: i64, file_url: &str, click_url: &str, subtype: &str) -> AdResult<Self> {
        Self::new(
            AdKind::Video(VideoSpec::new(duration)),
            VIDEO_DIMENSION,
            VIDEO_DIMENSION,
            file_url,
            click_url,
            subtype,
        )
    }

    pub fn display(
        width: i64,
        height: i64,
        file_url: &str,
        click_url: &str,
        subtype: &str,
    ) -> AdResult<Self> {
        Self::new(AdKind::Display, width, height, file_url, click_url, subtype)
    }

    pub fn social(
        width: i64,
        height: i64,
        file_url: &str,
        click_url: &str,
        subtype: &str,
    ) -> AdResult<Self> {
        Self::new(AdKind::Social, width, height, file_url, click_url, subtype)
    }

    /// URLs and subtype are lower-cased here, and only here.
    fn new(
        kind: AdKind,
        width: i64,
        height: i64,
        file_url: &str,
        click_url: &str,
        subtype: &str,
    ) -> AdResult<Self> {
        let subtype = subtype.to_lowercase();
        check_subtype(kind.format(), &subtype)?;

        Ok(Self {
            kind,
            width: clamp_positive(width, MIN_DIMENSION),
            height: clamp_positive(height, MIN_DIMENSION),
            file_url: file_url.to_lowercase(),
            click_url: click_url.to_lowercase(),
            subtype,
        })
    }

    pub fn format(&self) -> AdFormat {
        self.kind.format()
    }

    pub fn kind(&self) -> &AdKind {
        &self.kind
    }

    pub fn width(&self) -> i64 {
        self.width
    }

    pub fn height(&self) -> i64 {
        self.height
    }

    pub fn file_url(&self) -> &str {
        &self.file_url
    }

    pub fn click_url(&self) -> &str {
        &self.click_url
    }

    pub fn subtype(&self) -> &str {
        &self.subtype
    }

    pub fn video_spec(&self) -> Option<&VideoSpec> {
        match &self.kind {
            AdKind::Video(spec) => Some(spec),
            _ => None,
        }
    }

    pub fn video_spec_mut(&mut self) -> Option<&mut VideoSpec> {
        match &mut self.kind {
            AdKind::Video(spec) => Some(spec),
            _ => None,
        }
    }

    pub fn duration(&self) -> Option<i64> {
        self.video_spec().map(VideoSpec::duration)
    }

    /// Non-positive widths clamp to 1. Ignored for video.
    pub fn set_width(&mut self, width: i64) {
        if let Some(clamped) = self.resolve_dimension("width", width) {
            self.width = clamped;
        }
    }

    /// Non-positive heights clamp to 1. Ignored for video.
    pub fn set_height(&mut self, height: i64) {
        if let Some(clamped) = self.resolve_dimension("height", height) {
            self.height = clamped;
        }
    }

    fn resolve_dimension(&self, field: &'static str, value: i64) -> Option<i64> {
        if self.format() == AdFormat::Video {
            debug!(field, value, "video dimensions are fixed, ignoring");
            return None;
        }
        if value <= 0 {
            debug!(field, value, "dimension clamped to minimum");
        }
        Some(clamp_positive(value, MIN_DIMENSION))
    }

    /// Stored as given, no case folding.
    pub fn set_file_url(&mut self, file_url: impl Into<String>) {
        self.file_url = file_url.into();
    }

    /// Stored as given, no case folding.
    pub fn set_click_url(&mut self, click_url: impl Into<String>) {
        self.click_url = click_url.into();
    }

    /// Rejected subtypes leave the current one in place.
    pub fn set_subtype(&mut self, subtype: &str) -> AdResult<()> {
        check_subtype(self.format(), subtype)?;
        self.subtype = subtype.to_string();
        Ok(())
    }

    /// Placeholder: no compression backend exists.
    pub fn compress(&self) -> AdResult<()> {
        self.unimplemented("compression")
    }

    /// Placeholder: no resizing backend exists.
    pub fn resize(&self) -> AdResult<()> {
        self.unimplemented("resizing")
    }

    fn unimplemented(&self, operation: &'static str) -> AdResult<()> {
        let format = self.format();
        warn!(%format, operation, "creative operation not implemented");
        Err(AdError::NotImplemented { operation, format })
    }
}

fn check_subtype(format: AdFormat, subtype: &str) -> AdResult<()> {
    if format.permits(subtype) {
        return Ok(());
    }
    warn!(%format, subtype, "subtype rejected");
    Err(AdError::InvalidSubtype {
        format,
        subtype: subtype.to_string(),
    })
}
