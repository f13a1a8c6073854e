//! capburn burns plain-text captions into video files.
//!
//! The crate is a thin request handler: it extracts style/timing parameters
//! (with documented defaults), resolves and validates a caption source file,
//! and delegates the actual composition and encoding to a [`CaptionEngine`],
//! by default the system `ffmpeg` binary. Logging goes through `tracing`; the
//! caller owns subscriber configuration.

#![forbid(unsafe_code)]

pub mod codecs;
pub mod engine;
pub mod error;
pub mod handler;
pub mod output;
pub mod request;
pub mod source;

pub use codecs::{CodecPair, DEFAULT_CODECS, codecs_for_extension};
pub use engine::{BurnJob, CaptionEngine, FfmpegEngine};
pub use error::{CapburnError, CapburnResult};
pub use handler::CaptionBurner;
pub use output::unique_output_path;
pub use request::{CaptionRequest, CaptionResult, CaptionStyle, Percent};
pub use source::{DEFAULT_SOURCE_RELATIVE, read_caption_lines, resolve_source_path};
