//! Fixed downloader arguments: format chain, remux container, templates.
//!
//! Existing automation depends on these strings; keep them byte-for-byte.

/// Ordered format preference, passed verbatim to `--format`.
///
/// HEVC/HDR tiers first, then MP4 at 2160p, then H.264, then whatever is best.
pub const FORMAT_CHAIN: &str = "\
bv*[height=2160][vcodec=hevc][hdr=1]+ba[acodec=aac][abr=320k][ext=m4a]/
bv*[height=2160][vcodec=hevc]+ba[acodec=aac][abr=320k][ext=m4a]/
bv*[height=1440][vcodec=hevc][hdr=1]+ba[acodec=aac][abr=320k][ext=m4a]/
bv*[height=1440][vcodec=hevc]+ba[acodec=aac][abr=320k][ext=m4a]/
bv*[height=1080][vcodec=hevc][hdr=1]+ba[acodec=aac][abr=320k][ext=m4a]/
bv*[height=2160][ext=mp4][hdr=1]+ba[acodec=aac][abr=320k][ext=m4a]/
bv*[height=2160][ext=mp4]+ba[acodec=aac][abr=320k][ext=m4a]/
bv*[vcodec=h264]+ba[acodec=aac][abr=320k][ext=m4a]/
bestvideo+bestaudio";

/// Container passed to `--remux-video`.
pub const REMUX_CONTAINER: &str = "mp4";

/// Progress line template; the trailing carriage return keeps it on one line.
pub const PROGRESS_TEMPLATE: &str = "{title} [{percent}%] ETA: {eta} seconds\r";

/// File name part of the output template: media title plus negotiated extension.
pub const OUTPUT_FILE_TEMPLATE: &str = "%(title)s.%(ext)s";
