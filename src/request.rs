//! Request and style model for caption burn-in.
//!
//! A [`CaptionRequest`] is the dictionary-shaped input contract: every field except
//! `input_video_path` and `download_path` carries a documented default, so callers
//! may hand over a minimal JSON mapping and rely on the defaults below.

use std::path::PathBuf;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{CapburnError, CapburnResult};

/// A percentage of frame width or height, parsed from strings like `"15%"`.
///
/// The trailing `%` is optional. Values must be finite and within `0..=100`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Percent(f64);

impl Percent {
    /// The percentage value, in `0..=100`.
    pub fn value(self) -> f64 {
        self.0
    }

    /// The percentage as a `0..=1` fraction, convenient for frame-relative math.
    pub fn fraction(self) -> f64 {
        self.0 / 100.0
    }
}

impl FromStr for Percent {
    type Err = CapburnError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let digits = trimmed.strip_suffix('%').unwrap_or(trimmed).trim_end();
        let value: f64 = digits.parse().map_err(|_| {
            CapburnError::invalid_parameter(format!("expected a percentage like '15%', got '{s}'"))
        })?;
        if !value.is_finite() || !(0.0..=100.0).contains(&value) {
            return Err(CapburnError::invalid_parameter(format!(
                "percentage must be within 0..=100, got '{s}'"
            )));
        }
        Ok(Self(value))
    }
}

/// Input configuration for one captioning call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaptionRequest {
    /// Path to the input video file.
    pub input_video_path: PathBuf,
    /// Directory the rendered output video is written under.
    pub download_path: PathBuf,
    /// Font for captions.
    #[serde(default = "default_font")]
    pub font: String,
    /// Font size for captions, in pixels.
    #[serde(default = "default_font_size")]
    pub font_size: u32,
    /// Top bound of the caption block, as a percentage of frame height.
    #[serde(default = "default_caption_top")]
    pub caption_top: String,
    /// Bottom bound of the caption block, as a percentage of frame height.
    #[serde(default = "default_caption_bottom")]
    pub caption_bottom: String,
    /// Maximum line width, as a percentage of frame width.
    #[serde(default = "default_line_width")]
    pub line_width: String,
    /// Horizontal offset, as a percentage of frame width.
    #[serde(default = "default_hor_offset")]
    pub hor_offset: String,
    /// Duration of each caption, in seconds.
    #[serde(default = "default_cap_length")]
    pub cap_length: f64,
    /// Maximum number of captions to burn in.
    #[serde(default = "default_max_number")]
    pub max_number: u32,
    /// Maximum characters per wrapped line.
    #[serde(default = "default_max_char_width")]
    pub max_char_width: u32,
    /// Line spacing factor for multi-line captions.
    #[serde(default = "default_next_line")]
    pub next_line: f64,
    /// Pause between paragraphs, in seconds.
    #[serde(default = "default_pause_between_para")]
    pub pause_between_para: f64,
    /// Path to the captions text file. When absent or not an existing regular
    /// file, the handler falls back to the default source under its base directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_path: Option<PathBuf>,
}

fn default_font() -> String {
    "Arial-Bold".to_string()
}

fn default_font_size() -> u32 {
    48
}

fn default_caption_top() -> String {
    "15%".to_string()
}

fn default_caption_bottom() -> String {
    "75%".to_string()
}

fn default_line_width() -> String {
    "8%".to_string()
}

fn default_hor_offset() -> String {
    "4%".to_string()
}

fn default_cap_length() -> f64 {
    5.0
}

fn default_max_number() -> u32 {
    60
}

fn default_max_char_width() -> u32 {
    65
}

fn default_next_line() -> f64 {
    1.7
}

fn default_pause_between_para() -> f64 {
    2.0
}

impl CaptionRequest {
    /// Deserialize a request from a JSON mapping, the way dictionary-driven
    /// callers hand parameters over.
    pub fn from_value(value: serde_json::Value) -> CapburnResult<Self> {
        serde_json::from_value(value)
            .map_err(|e| CapburnError::invalid_parameter(format!("malformed caption request: {e}")))
    }

    /// Parse the style/timing fields into the typed bundle handed to the engine.
    ///
    /// Malformed percent strings fail with [`CapburnError::InvalidParameter`].
    pub fn style(&self) -> CapburnResult<CaptionStyle> {
        Ok(CaptionStyle {
            font: self.font.clone(),
            font_size: self.font_size,
            caption_top: self.caption_top.parse()?,
            caption_bottom: self.caption_bottom.parse()?,
            line_width: self.line_width.parse()?,
            hor_offset: self.hor_offset.parse()?,
            cap_length: self.cap_length,
            max_number: self.max_number,
            max_char_width: self.max_char_width,
            next_line: self.next_line,
            pause_between_para: self.pause_between_para,
        })
    }
}

/// Parsed style and timing parameters for the caption engine.
#[derive(Debug, Clone, PartialEq)]
pub struct CaptionStyle {
    pub font: String,
    pub font_size: u32,
    pub caption_top: Percent,
    pub caption_bottom: Percent,
    pub line_width: Percent,
    pub hor_offset: Percent,
    pub cap_length: f64,
    pub max_number: u32,
    pub max_char_width: u32,
    pub next_line: f64,
    pub pause_between_para: f64,
}

/// Result of a successful captioning call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaptionResult {
    /// Path of the rendered output video.
    pub output_video_path: PathBuf,
}
