// MQTT announcements - one small JSON message per playback start.
// Strictly best-effort: if the broker is unreachable at startup the feature is
// disabled for the run, and a failed publish never interrupts playback.

use rumqttc::{Client, Event, MqttOptions, Outgoing, QoS};
use serde::Serialize;
use std::net::{TcpStream, ToSocketAddrs};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};
use thiserror::Error;
use tracing::debug;

const CONNECT_PROBE_TIMEOUT: Duration = Duration::from_secs(5);
const KEEP_ALIVE: Duration = Duration::from_secs(60);
const SHUTDOWN_WAIT: Duration = Duration::from_secs(2);
const RECONNECT_PAUSE: Duration = Duration::from_millis(250);

#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("cannot resolve {host}:{port}: {reason}")]
    Resolve {
        host: String,
        port: u16,
        reason: String,
    },
    #[error("cannot reach {host}:{port}: {source}")]
    Unreachable {
        host: String,
        port: u16,
        source: std::io::Error,
    },
    #[error("mqtt client error: {0}")]
    Client(#[from] rumqttc::ClientError),
    #[error("failed to start MQTT pump thread: {0}")]
    Pump(#[source] std::io::Error),
    #[error("failed to serialize payload: {0}")]
    Payload(#[from] serde_json::Error),
}

/// What gets announced per playback start. Not retained anywhere - serialized,
/// published, forgotten.
#[derive(Debug, Clone, Serialize)]
pub struct PlaybackEvent {
    pub video: String,
    pub duration: Option<f64>,
}

/// MQTT client plus the background thread that pumps its network I/O.
/// Dropping the notifier disconnects and stops the pump; shutdown errors are
/// discarded.
pub struct Notifier {
    client: Client,
    topic: String,
    stop: Arc<AtomicBool>,
    pump: Option<JoinHandle<()>>,
}

impl Notifier {
    /// Probe reachability, connect, and start the network pump. A failure here
    /// means notifications stay off for the whole run - the caller logs once
    /// and never retries.
    pub fn connect(
        host: &str,
        port: u16,
        topic: &str,
        username: Option<&str>,
        password: Option<&str>,
    ) -> Result<Self, NotifyError> {
        // Cheap raw TCP probe first, so an absent broker fails in seconds
        // instead of leaving the client retrying in the background forever.
        let addr = (host, port)
            .to_socket_addrs()
            .map_err(|e| NotifyError::Resolve {
                host: host.to_string(),
                port,
                reason: e.to_string(),
            })?
            .next()
            .ok_or_else(|| NotifyError::Resolve {
                host: host.to_string(),
                port,
                reason: "no addresses".to_string(),
            })?;
        TcpStream::connect_timeout(&addr, CONNECT_PROBE_TIMEOUT).map_err(|source| {
            NotifyError::Unreachable {
                host: host.to_string(),
                port,
                source,
            }
        })?;

        let client_id = format!("pideo-{}", std::process::id());
        let mut options = MqttOptions::new(client_id, host, port);
        options.set_keep_alive(KEEP_ALIVE);
        if let Some(user) = username {
            options.set_credentials(user, password.unwrap_or_default());
        }

        let (client, mut connection) = Client::new(options, 10);

        // The pump owns all network I/O (keep-alive, reconnect) until the
        // client asks to disconnect or the stop flag is raised. The flag
        // matters when the broker dies mid-run: the event loop then only
        // yields errors and a disconnect packet would never go out.
        let stop = Arc::new(AtomicBool::new(false));
        let pump_stop = Arc::clone(&stop);
        let pump = thread::Builder::new()
            .name("mqtt-pump".to_string())
            .spawn(move || {
                for event in connection.iter() {
                    if pump_stop.load(Ordering::Relaxed) {
                        break;
                    }
                    match event {
                        Ok(Event::Outgoing(Outgoing::Disconnect)) => break,
                        Ok(_) => {}
                        Err(e) => {
                            debug!("MQTT connection error: {e}");
                            thread::sleep(RECONNECT_PAUSE);
                        }
                    }
                }
            })
            .map_err(NotifyError::Pump)?;

        Ok(Self {
            client,
            topic: topic.to_string(),
            stop,
            pump: Some(pump),
        })
    }

    /// Publish a playback event to the configured topic. Never blocks: when
    /// the broker has stopped draining the request channel the send fails
    /// immediately and the caller just logs it.
    pub fn publish(&self, event: &PlaybackEvent) -> Result<(), NotifyError> {
        let payload = serde_json::to_string(event)?;
        self.client
            .try_publish(&self.topic, QoS::AtMostOnce, false, payload)?;
        Ok(())
    }
}

impl Drop for Notifier {
    fn drop(&mut self) {
        self.stop.store(true, Ordering::Relaxed);
        let _ = self.client.try_disconnect();
        if let Some(pump) = self.pump.take() {
            // Bounded wait; a pump stuck mid-reconnect gets detached rather
            // than holding up process exit.
            let deadline = Instant::now() + SHUTDOWN_WAIT;
            while !pump.is_finished() && Instant::now() < deadline {
                thread::sleep(Duration::from_millis(20));
            }
            if pump.is_finished() {
                let _ = pump.join();
            }
        }
    }
}
