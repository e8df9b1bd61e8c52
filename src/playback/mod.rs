// The control loop: select the next video, probe its duration, announce it,
// run the player, repeat. Per-item failures are logged and skipped; the loop
// only ends when a non-looping playlist runs out.

pub mod catalog;
pub mod player;
pub mod playlist;
pub mod selector;

pub use catalog::VideoCatalog;
pub use playlist::Playlist;
pub use selector::Selector;

use std::path::Path;
use tracing::{error, info};

use crate::notify::{Notifier, PlaybackEvent};
use crate::probe;

/// Drive playback until the selector exhausts. Exactly one playback is in
/// flight at a time - each player invocation blocks until it exits.
pub fn run_loop(
    videos_dir: &Path,
    player_cmd: &str,
    mut selector: Selector,
    notifier: Option<&Notifier>,
) {
    loop {
        let Some(video) = selector.next_video() else {
            info!("Playlist finished, exiting.");
            break;
        };

        let video_path = videos_dir.join(&video);
        if !video_path.is_file() {
            // For a playlist the cursor already advanced, so the slot is
            // consumed and the item is skipped without substitution.
            error!("Video not found: {}", video_path.display());
            continue;
        }

        let duration = match probe::video_duration(&video_path) {
            Ok(seconds) => Some(seconds),
            Err(err) => {
                error!(
                    "Could not determine duration for {}: {err}",
                    video_path.display()
                );
                None
            }
        };

        if let Some(notifier) = notifier {
            let event = PlaybackEvent {
                video: video.clone(),
                duration,
            };
            if let Err(err) = notifier.publish(&event) {
                error!("Failed to publish MQTT message: {err}");
            }
        }

        info!("Playing video: {video}");
        let command = player::expand_template(player_cmd, &video_path);
        info!("Running playback command: {command}");
        if let Err(err) = player::run(&command) {
            error!("Playback failed for {video}: {err}");
        }
    }
}
