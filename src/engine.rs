//! The caption-burning engine seam and its ffmpeg-backed production implementation.
//!
//! The handler talks to a [`CaptionEngine`] so tests can observe the exact job it
//! hands over; [`FfmpegEngine`] is the implementation that actually renders, by
//! spawning the system `ffmpeg` with one `drawtext` filter per caption.

use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use anyhow::Context as _;
use tracing::debug;

use crate::codecs::CodecPair;
use crate::error::{CapburnError, CapburnResult};
use crate::request::CaptionStyle;

/// Everything the engine needs for one burn-in invocation.
#[derive(Debug, Clone)]
pub struct BurnJob {
    pub input_video_path: PathBuf,
    pub output_video_path: PathBuf,
    /// Ordered, non-blank, trimmed caption lines.
    pub captions: Vec<String>,
    pub style: CaptionStyle,
    pub codecs: CodecPair,
}

/// The external collaborator that renders captions into a video.
pub trait CaptionEngine {
    /// Burn `job.captions` into `job.input_video_path`, writing the encoded
    /// result to `job.output_video_path`.
    fn burn(&self, job: &BurnJob) -> CapburnResult<()>;
}

/// Production engine backed by the system `ffmpeg` binary.
///
/// We intentionally shell out to `ffmpeg` rather than link a codec library, to
/// avoid native dev header/lib requirements.
#[derive(Debug, Clone, Copy, Default)]
pub struct FfmpegEngine;

impl CaptionEngine for FfmpegEngine {
    fn burn(&self, job: &BurnJob) -> CapburnResult<()> {
        if !is_ffmpeg_on_path() {
            return Err(CapburnError::engine(
                "ffmpeg is required for caption burn-in, but was not found on PATH",
            ));
        }

        ensure_parent_dir(&job.output_video_path)?;

        let filter = drawtext_filter(&job.captions, &job.style);

        let mut cmd = Command::new("ffmpeg");
        cmd.stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::piped());
        cmd.args(["-y", "-loglevel", "error", "-i"])
            .arg(&job.input_video_path);
        cmd.args(["-vf", &filter]);
        cmd.args([
            "-c:v",
            job.codecs.video_codec,
            "-c:a",
            job.codecs.audio_codec,
            "-pix_fmt",
            "yuv420p",
        ]);
        cmd.arg(&job.output_video_path);

        debug!(
            input = %job.input_video_path.display(),
            output = %job.output_video_path.display(),
            captions = job.captions.len(),
            "spawning ffmpeg for caption burn-in"
        );

        let output = cmd.output().map_err(|e| {
            CapburnError::engine(format!(
                "failed to spawn ffmpeg (is it installed and on PATH?): {e}"
            ))
        })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(CapburnError::engine(format!(
                "ffmpeg exited with status {}: {}",
                output.status,
                stderr.trim()
            )));
        }

        Ok(())
    }
}

pub(crate) fn is_ffmpeg_on_path() -> bool {
    Command::new("ffmpeg")
        .arg("-version")
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .map(|s| s.success())
        .unwrap_or(false)
}

pub(crate) fn ensure_parent_dir(path: &Path) -> CapburnResult<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create output directory '{}'", parent.display()))?;
    }
    Ok(())
}

/// Build the full `drawtext` filtergraph: one filter per caption, shown
/// sequentially for `cap_length` seconds each with `pause_between_para` of
/// blank video in between, capped at `max_number` captions.
fn drawtext_filter(captions: &[String], style: &CaptionStyle) -> String {
    let line_spacing = (f64::from(style.font_size) * (style.next_line - 1.0)).round() as i64;
    let x = format!("w*{:.4}", style.hor_offset.fraction());
    // Keep the caption block between the top and bottom bounds; a block taller
    // than the window is clamped upward against the bottom bound.
    let y = format!(
        "'min(h*{top:.4},h*{bottom:.4}-th)'",
        top = style.caption_top.fraction(),
        bottom = style.caption_bottom.fraction(),
    );

    let mut filters = Vec::new();
    let slot = style.cap_length + style.pause_between_para;
    for (index, caption) in captions
        .iter()
        .take(style.max_number as usize)
        .enumerate()
    {
        let start = index as f64 * slot;
        let end = start + style.cap_length;
        let text = escape_drawtext(&wrap_caption(
            caption,
            style.max_char_width as usize,
        ));
        filters.push(format!(
            "drawtext=expansion=none:text='{text}':font='{font}':fontsize={size}:\
             fontcolor=white:borderw=2:bordercolor=black:line_spacing={line_spacing}:\
             x={x}:y={y}:enable='between(t,{start},{end})'",
            font = style.font,
            size = style.font_size,
        ));
    }
    filters.join(",")
}

/// Greedy word wrap at `max_chars` characters per line. Words longer than the
/// limit land on their own line, unsplit.
fn wrap_caption(text: &str, max_chars: usize) -> String {
    if max_chars == 0 {
        return text.to_string();
    }
    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        if current.is_empty() {
            current.push_str(word);
        } else if current.chars().count() + 1 + word.chars().count() <= max_chars {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines.join("\n")
}

/// Escape text for a single-quoted drawtext `text` value. The surrounding
/// quotes protect `:` and `,` at the filtergraph level; quotes themselves must
/// be closed, escaped, and reopened.
fn escape_drawtext(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("'\\''"),
            _ => out.push(ch),
        }
    }
    out
}
