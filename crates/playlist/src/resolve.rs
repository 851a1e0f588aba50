//! Input file resolution.

use std::path::{Path, PathBuf};

use skpm3u_common::error::{SkpError, SkpResult};

/// The two located input files, both absolute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedInputs {
    pub video: PathBuf,
    pub skip_list: PathBuf,
}

/// Locate `raw` either as given or relative to `cwd`.
///
/// Absolute paths are taken verbatim; relative ones are anchored at `cwd`.
/// The candidate must be an existing file. On a miss the error carries the
/// cwd-anchored path, which is what gets reported to the user.
pub fn resolve_input(raw: &Path, cwd: &Path) -> SkpResult<PathBuf> {
    let candidate = cwd.join(raw);
    if !raw.as_os_str().is_empty() && candidate.is_file() {
        Ok(candidate)
    } else {
        Err(SkpError::file_not_found(candidate))
    }
}

/// Resolve the video first, then the skip-list; the first miss is returned.
pub fn resolve_inputs(video: &Path, skip_list: &Path, cwd: &Path) -> SkpResult<ResolvedInputs> {
    let video = resolve_input(video, cwd)?;
    let skip_list = resolve_input(skip_list, cwd)?;
    Ok(ResolvedInputs { video, skip_list })
}

/// [`resolve_inputs`] against the process working directory.
pub fn resolve_from_current_dir(video: &Path, skip_list: &Path) -> SkpResult<ResolvedInputs> {
    let cwd = std::env::current_dir()?;
    resolve_inputs(video, skip_list, &cwd)
}
