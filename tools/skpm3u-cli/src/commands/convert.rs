//! Convert a skip-list into a playlist next to its video.

use std::path::PathBuf;

use skpm3u_playlist::{create_playlist, resolve_from_current_dir};

pub fn run(video: PathBuf, skp: PathBuf) -> anyhow::Result<PathBuf> {
    tracing::info!("Video file: {}", video.display());
    tracing::info!("SKP file: {}", skp.display());

    let inputs = resolve_from_current_dir(&video, &skp)?;
    tracing::debug!(
        video = %inputs.video.display(),
        skp = %inputs.skip_list.display(),
        "Resolved inputs"
    );

    let playlist = create_playlist(&inputs.video, &inputs.skip_list)?;
    Ok(playlist)
}
