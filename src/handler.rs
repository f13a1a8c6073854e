//! The captioning request handler.

use std::path::{Path, PathBuf};

use tracing::{debug, error, info};

use crate::codecs::codecs_for_extension;
use crate::engine::{BurnJob, CaptionEngine, FfmpegEngine};
use crate::error::CapburnResult;
use crate::output::unique_output_path;
use crate::request::{CaptionRequest, CaptionResult};
use crate::source::{read_caption_lines, resolve_source_path};

/// Single-shot, synchronous caption burn-in handler.
///
/// Constructed with an explicit base directory (the root under which the default
/// caption source `data/4.source.txt` lives) and a [`CaptionEngine`]. The handler
/// keeps no state across calls; each invocation is independent.
#[derive(Debug)]
pub struct CaptionBurner<E = FfmpegEngine> {
    base_dir: PathBuf,
    engine: E,
}

impl CaptionBurner<FfmpegEngine> {
    /// Handler backed by the production ffmpeg engine.
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self::with_engine(base_dir, FfmpegEngine)
    }
}

impl<E: CaptionEngine> CaptionBurner<E> {
    /// Handler backed by an injected engine.
    pub fn with_engine(base_dir: impl Into<PathBuf>, engine: E) -> Self {
        Self {
            base_dir: base_dir.into(),
            engine,
        }
    }

    /// The base directory the default caption source is resolved under.
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Burn captions into `request.input_video_path`, writing the rendered video
    /// under `request.download_path` with a collision-avoided filename.
    ///
    /// Failures are logged once here (error-level summary, debug-level full
    /// diagnostic) and returned unchanged.
    pub fn add_captions(&self, request: &CaptionRequest) -> CapburnResult<CaptionResult> {
        match self.add_captions_inner(request) {
            Ok(result) => {
                info!(
                    output = %result.output_video_path.display(),
                    "captions added successfully"
                );
                Ok(result)
            }
            Err(err) => {
                error!("error adding captions: {err}");
                debug!("{err:?}");
                Err(err)
            }
        }
    }

    #[tracing::instrument(skip_all, fields(input = %request.input_video_path.display()))]
    fn add_captions_inner(&self, request: &CaptionRequest) -> CapburnResult<CaptionResult> {
        let style = request.style()?;
        debug!(?style, "parsed caption style");

        let source_path = resolve_source_path(&self.base_dir, request.source_path.as_deref())?;
        let captions = read_caption_lines(&source_path)?;

        let filename = request
            .input_video_path
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or("output.mp4");
        let output_video_path = unique_output_path(&request.download_path, filename);
        let extension = output_video_path
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or("");
        let codecs = codecs_for_extension(extension);
        debug!(
            output = %output_video_path.display(),
            video_codec = codecs.video_codec,
            audio_codec = codecs.audio_codec,
            "derived output target"
        );

        let job = BurnJob {
            input_video_path: request.input_video_path.clone(),
            output_video_path: output_video_path.clone(),
            captions,
            style,
            codecs,
        };
        self.engine.burn(&job)?;

        Ok(CaptionResult { output_video_path })
    }
}
