//! skp-to-m3u Playlist Pipeline
//!
//! Turns a skip-list (`.skp`) of timestamp ranges into a VLC-flavoured M3U
//! playlist that plays a video while jumping over the listed ranges:
//! - **Resolve:** locate the video and skip-list files
//! - **Skip:** parse `H:MM:SS.ss --> H:MM:SS.ss` lines into second offsets
//! - **Playlist:** render and write `<video-stem>.m3u` next to the video
//!
//! All offsets are whole seconds; fractional parts are truncated.

pub mod playlist;
pub mod resolve;
pub mod skip;

pub use playlist::*;
pub use resolve::*;
pub use skip::*;
