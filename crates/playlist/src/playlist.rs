//! VLC M3U playlist rendering.
//!
//! The playlist repeats the same video once per skip range. Each entry
//! carries `#EXTVLCOPT` start/stop directives, so VLC plays up to the start
//! of a skipped range, then reopens the video at its end:
//!
//! ```text
//! #EXTM3U
//! #EXTINF:-1,movie.mp4
//! #EXTVLCOPT:start-time=1
//! #EXTVLCOPT:stop-time=10
//! /videos/movie.mp4
//! #EXTVLCOPT:start-time=20
//! /videos/movie.mp4
//! ```

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use skpm3u_common::error::SkpResult;

use crate::skip::{SkipList, SkipRange};

/// Extension of the generated playlist.
pub const PLAYLIST_EXTENSION: &str = "m3u";

/// Start offset of the first entry, in seconds.
pub const INITIAL_START_SECS: u64 = 1;

/// A playlist for one video with its skip ranges.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Playlist {
    video: PathBuf,
    ranges: Vec<SkipRange>,
}

impl Playlist {
    pub fn new(video: impl Into<PathBuf>, skip_list: &SkipList) -> Self {
        Self {
            video: video.into(),
            ranges: skip_list.ranges().collect(),
        }
    }

    pub fn video(&self) -> &Path {
        &self.video
    }

    pub fn ranges(&self) -> &[SkipRange] {
        &self.ranges
    }

    /// `<video-stem>.m3u` in the video's directory.
    pub fn output_path(&self) -> PathBuf {
        let stem = self.video.file_stem().unwrap_or_default();
        let mut name = stem.to_os_string();
        name.push(".");
        name.push(PLAYLIST_EXTENSION);

        match self.video.parent() {
            Some(dir) => dir.join(name),
            None => PathBuf::from(name),
        }
    }

    /// Render the playlist text. Every line, including the last, ends in `\n`.
    pub fn render(&self) -> String {
        let video = self.video.display();
        let mut output = String::from("#EXTM3U\n");

        output.push_str(&format!("#EXTINF:-1,{}\n", self.video_name()));
        output.push_str(&format!("#EXTVLCOPT:start-time={INITIAL_START_SECS}\n"));

        for range in &self.ranges {
            output.push_str(&format!("#EXTVLCOPT:stop-time={}\n", range.stop_secs));
            output.push_str(&format!("{video}\n"));
            output.push_str(&format!("#EXTVLCOPT:start-time={}\n", range.resume_secs));
        }

        output.push_str(&format!("{video}\n"));
        output
    }

    /// Write the playlist to [`Playlist::output_path`], replacing any
    /// existing file. Returns the path written.
    pub fn write(&self) -> SkpResult<PathBuf> {
        let path = self.output_path();
        std::fs::write(&path, self.render())?;
        tracing::info!(
            path = %path.display(),
            "{} M3U file created successfully.",
            self.video_name()
        );
        Ok(path)
    }

    fn video_name(&self) -> std::borrow::Cow<'_, str> {
        self.video
            .file_name()
            .unwrap_or_else(|| OsStr::new(""))
            .to_string_lossy()
    }
}

/// Parse `skip_list` and write the playlist for `video` next to it.
pub fn create_playlist(video: &Path, skip_list: &Path) -> SkpResult<PathBuf> {
    let skips = SkipList::load(skip_list)?;
    Playlist::new(video, &skips).write()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_with_two_ranges() {
        let playlist = Playlist::new("/tmp/movie.mp4", &SkipList::from(vec![10, 20, 30, 40]));
        let rendered = playlist.render();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(
            lines,
            vec![
                "#EXTM3U",
                "#EXTINF:-1,movie.mp4",
                "#EXTVLCOPT:start-time=1",
                "#EXTVLCOPT:stop-time=10",
                "/tmp/movie.mp4",
                "#EXTVLCOPT:start-time=20",
                "#EXTVLCOPT:stop-time=30",
                "/tmp/movie.mp4",
                "#EXTVLCOPT:start-time=40",
                "/tmp/movie.mp4",
            ]
        );
    }

    #[test]
    fn test_render_without_ranges() {
        let playlist = Playlist::new("/tmp/movie.mp4", &SkipList::default());
        assert_eq!(
            playlist.render(),
            "#EXTM3U\n#EXTINF:-1,movie.mp4\n#EXTVLCOPT:start-time=1\n/tmp/movie.mp4\n"
        );
    }

    #[test]
    fn test_unpaired_boundary_dropped() {
        let playlist = Playlist::new("/tmp/movie.mp4", &SkipList::from(vec![10, 20, 30]));
        let rendered = playlist.render();
        assert_eq!(playlist.ranges().len(), 1);
        assert!(!rendered.contains("=30"));
        assert_eq!(rendered.matches("/tmp/movie.mp4").count(), 2);
    }

    #[test]
    fn test_output_path_uses_video_stem() {
        let playlist = Playlist::new("/tmp/movie.mp4", &SkipList::default());
        assert_eq!(playlist.output_path(), PathBuf::from("/tmp/movie.m3u"));

        let dotted = Playlist::new("/media/My.Show.S01E01.mkv", &SkipList::default());
        assert_eq!(
            dotted.output_path(),
            PathBuf::from("/media/My.Show.S01E01.m3u")
        );
    }

    #[test]
    fn test_create_playlist_writes_next_to_video() {
        let dir = tempfile::tempdir().unwrap();
        let video = dir.path().join("movie.mp4");
        let skp = dir.path().join("movie.skp");
        std::fs::write(&video, b"").unwrap();
        std::fs::write(&skp, "0:00:10.00 --> 0:00:20.00\n").unwrap();

        let written = create_playlist(&video, &skp).unwrap();
        assert_eq!(written, dir.path().join("movie.m3u"));

        let content = std::fs::read_to_string(&written).unwrap();
        assert!(content.starts_with("#EXTM3U\n"));
        assert!(content.contains("#EXTVLCOPT:stop-time=10\n"));
        assert!(content.ends_with(&format!("{}\n", video.display())));
    }

    #[test]
    fn test_write_overwrites_existing_playlist() {
        let dir = tempfile::tempdir().unwrap();
        let video = dir.path().join("movie.mp4");
        std::fs::write(dir.path().join("movie.m3u"), "stale contents that are long").unwrap();

        let path = Playlist::new(&video, &SkipList::default()).write().unwrap();
        let content = std::fs::read_to_string(path).unwrap();
        assert!(!content.contains("stale"));
    }

    #[test]
    fn test_write_into_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let video = dir.path().join("gone").join("movie.mp4");
        let err = Playlist::new(&video, &SkipList::default())
            .write()
            .unwrap_err();
        assert!(matches!(err, skpm3u_common::SkpError::Io(_)));
    }
}
