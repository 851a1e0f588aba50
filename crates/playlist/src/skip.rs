//! Skip-list parsing.
//!
//! A skip-list is plain text. Any line starting with a range of the form
//! `H:MM:SS.ss --> H:MM:SS.ss` marks a segment to skip; every other line
//! (headers, titles, comments) is ignored.

use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;
use skpm3u_common::error::SkpResult;

/// `H:MM:SS.ss --> H:MM:SS.ss`, hours one or two digits. Fractions are
/// matched but not captured.
static RANGE_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^([0-9]{1,2}):([0-9]{2}):([0-9]{2})\.[0-9]{2} --> ([0-9]{1,2}):([0-9]{2}):([0-9]{2})\.[0-9]{2}",
    )
    .expect("skip range pattern is valid")
});

/// One segment to skip: playback stops at `stop_secs` and resumes at
/// `resume_secs`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkipRange {
    pub stop_secs: u64,
    pub resume_secs: u64,
}

/// Flattened scene boundaries in file order: `[stop, resume, stop, resume, ...]`.
///
/// The length is expected to be even but nothing enforces it; see
/// [`SkipList::ranges`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SkipList {
    boundaries: Vec<u64>,
}

impl SkipList {
    pub fn new(boundaries: Vec<u64>) -> Self {
        Self { boundaries }
    }

    /// Read and parse a skip-list file.
    pub fn load(path: &Path) -> SkpResult<Self> {
        let content = std::fs::read_to_string(path)?;
        let list = parse_skip_list(&content);
        tracing::info!("Number of scenes: {}", list.scene_count());
        if list.has_unpaired_boundary() {
            tracing::debug!(
                "Trailing boundary {:?} has no partner and is dropped",
                list.boundaries.last()
            );
        }
        Ok(list)
    }

    pub fn boundaries(&self) -> &[u64] {
        &self.boundaries
    }

    pub fn len(&self) -> usize {
        self.boundaries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.boundaries.is_empty()
    }

    /// Number of complete skip ranges.
    pub fn scene_count(&self) -> usize {
        self.boundaries.len() / 2
    }

    pub fn has_unpaired_boundary(&self) -> bool {
        self.boundaries.len() % 2 == 1
    }

    /// Pair even-indexed boundaries (stop) with the following odd-indexed
    /// one (resume). A trailing unpaired boundary is dropped.
    pub fn ranges(&self) -> impl Iterator<Item = SkipRange> + '_ {
        self.boundaries.chunks_exact(2).map(|pair| SkipRange {
            stop_secs: pair[0],
            resume_secs: pair[1],
        })
    }
}

impl From<Vec<u64>> for SkipList {
    fn from(boundaries: Vec<u64>) -> Self {
        Self::new(boundaries)
    }
}

/// Parse skip-list text. Lines that don't start with a full range are
/// skipped, never partially parsed.
pub fn parse_skip_list(content: &str) -> SkipList {
    let mut boundaries = Vec::new();
    for line in content.lines() {
        match parse_range_line(line) {
            Some(range) => {
                boundaries.push(range.stop_secs);
                boundaries.push(range.resume_secs);
            }
            None if !line.trim().is_empty() => {
                tracing::trace!("Ignoring skip-list line: {line:?}");
            }
            None => {}
        }
    }
    SkipList::new(boundaries)
}

/// Parse a single `H:MM:SS.ss --> H:MM:SS.ss` line into whole seconds.
pub fn parse_range_line(line: &str) -> Option<SkipRange> {
    let caps = RANGE_LINE.captures(line)?;
    let secs = |h: usize, m: usize, s: usize| {
        digits(&caps[h]) * 3600 + digits(&caps[m]) * 60 + digits(&caps[s])
    };
    Some(SkipRange {
        stop_secs: secs(1, 2, 3),
        resume_secs: secs(4, 5, 6),
    })
}

/// ASCII digits only; the pattern guarantees at most two of them.
fn digits(s: &str) -> u64 {
    s.bytes()
        .fold(0, |acc, b| acc * 10 + u64::from(b.wrapping_sub(b'0')))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_single_range() {
        let list = parse_skip_list("0:00:10.00 --> 0:00:20.00\n");
        assert_eq!(list.boundaries(), &[10, 20]);
    }

    #[test]
    fn test_fraction_is_truncated() {
        let list = parse_skip_list("0:00:10.99 --> 0:01:05.50");
        assert_eq!(list.boundaries(), &[10, 65]);
    }

    #[test]
    fn test_hours_and_two_digit_hours() {
        let list = parse_skip_list("1:02:03.00 --> 12:00:00.00");
        assert_eq!(list.boundaries(), &[3723, 43200]);
    }

    #[test]
    fn test_non_matching_lines_ignored() {
        let content = "\
[skip list]
hello world

0:00:10.00 --> 0:00:20.00
Opening credits
0:05:00.00 --> 0:05:30.25
";
        let list = parse_skip_list(content);
        assert_eq!(list.boundaries(), &[10, 20, 300, 330]);
        assert_eq!(list.scene_count(), 2);
    }

    #[test]
    fn test_partial_matches_ignored() {
        // Missing fraction, single-digit minutes, wrong arrow, leading text.
        let content = "\
0:00:10 --> 0:00:20
0:0:10.00 --> 0:00:20.00
0:00:10.00 -> 0:00:20.00
note 0:00:10.00 --> 0:00:20.00
100:00:10.00 --> 0:00:20.00
";
        assert!(parse_skip_list(content).is_empty());
    }

    #[test]
    fn test_trailing_text_after_range() {
        let list = parse_skip_list("0:00:10.00 --> 0:00:20.00 intro\r\n");
        assert_eq!(list.boundaries(), &[10, 20]);
    }

    #[test]
    fn test_odd_length_drops_last() {
        let list = SkipList::from(vec![10, 20, 30]);
        assert!(list.has_unpaired_boundary());
        let ranges: Vec<_> = list.ranges().collect();
        assert_eq!(
            ranges,
            vec![SkipRange {
                stop_secs: 10,
                resume_secs: 20
            }]
        );
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("movie.skp");
        std::fs::write(&path, "0:00:10.00 --> 0:00:20.00\n").unwrap();

        let list = SkipList::load(&path).unwrap();
        assert_eq!(list.boundaries(), &[10, 20]);
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = SkipList::load(&dir.path().join("absent.skp")).unwrap_err();
        assert!(matches!(err, skpm3u_common::SkpError::Io(_)));
    }

    proptest! {
        #[test]
        fn prop_range_converts_to_whole_seconds(
            h1 in 0u64..100, m1 in 0u64..60, s1 in 0u64..60, f1 in 0u64..100,
            h2 in 0u64..100, m2 in 0u64..60, s2 in 0u64..60, f2 in 0u64..100,
        ) {
            let line = format!("{h1}:{m1:02}:{s1:02}.{f1:02} --> {h2}:{m2:02}:{s2:02}.{f2:02}");
            let range = parse_range_line(&line).unwrap();
            prop_assert_eq!(range.stop_secs, h1 * 3600 + m1 * 60 + s1);
            prop_assert_eq!(range.resume_secs, h2 * 3600 + m2 * 60 + s2);
        }
    }
}
