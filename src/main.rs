// pideo - cycles through local video files and announces them over MQTT
// Everything is driven by param.json / secret.json next to the executable;
// there are no command-line flags.

use anyhow::Result;
use std::env;
use std::path::{Path, PathBuf};
use tracing::{error, info, warn};

use pideo::playback::{self, Playlist, Selector, VideoCatalog};
use pideo::{config, logging, Config, Notifier, Secrets};

const ERR_FILE: &str = "pideo.err.txt";

fn main() {
    std::process::exit(run_to_exit_code());
}

// Split out so the logging guard drops (and flushes the error file) before
// the process exits.
fn run_to_exit_code() -> i32 {
    let base_dir = base_dir();

    let _guard = match logging::init(&base_dir.join(ERR_FILE)) {
        Ok(guard) => Some(guard),
        Err(err) => {
            eprintln!("Failed to set up logging: {err}");
            None
        }
    };

    match run(&base_dir) {
        Ok(()) => 0,
        Err(err) => {
            error!("Unhandled error: {err:#}");
            1
        }
    }
}

fn run(base_dir: &Path) -> Result<()> {
    let config: Config = match config::load_document(&base_dir.join(config::CONFIG_FILE)) {
        Ok(config) => config,
        Err(err) => {
            error!("Using default settings: {err}");
            Config::default()
        }
    };
    let secrets: Secrets = match config::load_document(&base_dir.join(config::SECRETS_FILE)) {
        Ok(secrets) => secrets,
        Err(err) => {
            error!("Running without secrets: {err}");
            Secrets::default()
        }
    };

    let videos_dir = base_dir.join(&config.videos_dir);
    if !videos_dir.is_dir() {
        error!("Videos directory does not exist: {}", videos_dir.display());
        return Ok(());
    }

    let playlist = match Playlist::load(&videos_dir) {
        Ok(playlist) => playlist,
        Err(err) => {
            error!("Ignoring unreadable playlist: {err}");
            None
        }
    };

    let selector = match playlist.filter(|p| !p.is_empty()) {
        Some(playlist) => {
            info!(
                "Loaded playlist with {} video(s), loop={}",
                playlist.len(),
                playlist.looped
            );
            Selector::from_playlist(playlist)
        }
        None => {
            let catalog = VideoCatalog::scan(&videos_dir);
            if catalog.is_empty() {
                error!("No video files found in {}", videos_dir.display());
                return Ok(());
            }
            info!("Found {} video file(s)", catalog.len());
            Selector::random(catalog)
        }
    };

    let notifier = build_notifier(&config, &secrets);

    playback::run_loop(&videos_dir, &config.player_cmd, selector, notifier.as_ref());

    // Dropping the notifier disconnects and stops the MQTT pump.
    Ok(())
}

/// MQTT is optional: active only when both a server and a topic are
/// configured and the broker answers the startup probe. A failure here
/// disables notifications for the rest of the run.
fn build_notifier(config: &Config, secrets: &Secrets) -> Option<Notifier> {
    let (host, topic) = match (&config.mqtt_server, &config.mqtt_topic) {
        (Some(host), Some(topic)) => (host, topic),
        _ => return None,
    };

    match Notifier::connect(
        host,
        config.mqtt_port,
        topic,
        secrets.mqtt_username.as_deref(),
        secrets.mqtt_password.as_deref(),
    ) {
        Ok(notifier) => {
            info!("MQTT notifications enabled for topic {topic}");
            Some(notifier)
        }
        Err(err) => {
            warn!(
                "Cannot reach MQTT {host}:{} ({err}). MQTT notifications disabled.",
                config.mqtt_port
            );
            None
        }
    }
}

fn base_dir() -> PathBuf {
    env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from("."))
}
