//! Codec selection by output container extension.

/// Video and audio codec names handed to the encoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodecPair {
    pub video_codec: &'static str,
    pub audio_codec: &'static str,
}

/// The fallback pair used for unrecognized (or missing) extensions.
pub const DEFAULT_CODECS: CodecPair = CodecPair {
    video_codec: "libx264",
    audio_codec: "aac",
};

/// Look up codecs for an output file extension.
///
/// The extension is matched case-insensitively, with or without a leading dot.
pub fn codecs_for_extension(extension: &str) -> CodecPair {
    let ext = extension.trim().trim_start_matches('.').to_ascii_lowercase();
    match ext.as_str() {
        "webm" => CodecPair {
            video_codec: "libvpx",
            audio_codec: "libvorbis",
        },
        "ogv" => CodecPair {
            video_codec: "libtheora",
            audio_codec: "libvorbis",
        },
        "mp4" | "mkv" => DEFAULT_CODECS,
        _ => DEFAULT_CODECS,
    }
}
