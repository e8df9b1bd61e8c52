// pideo - video cycler for unattended displays
// Plays whatever is in the videos directory, forever, and tells MQTT about it

pub mod config;   // param.json / secret.json loading
pub mod logging;  // stdout + error-file tracing setup
pub mod notify;   // optional MQTT announcements
pub mod playback; // catalog, playlist, selection, the main loop
pub mod probe;    // ffprobe duration lookup

// Export the stuff main actually wires together
pub use config::{Config, ConfigError, Secrets};
pub use notify::{Notifier, PlaybackEvent};
pub use playback::{Playlist, Selector, VideoCatalog};
