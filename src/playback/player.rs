use std::path::Path;
use std::process::Command;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlayerError {
    #[error("failed to run player command: {0}")]
    Spawn(#[from] std::io::Error),
    #[error("player exited with {0}")]
    Failed(std::process::ExitStatus),
}

/// Substitute the resolved file path into the player command template.
pub fn expand_template(template: &str, video_path: &Path) -> String {
    template.replace("{video_path}", &video_path.display().to_string())
}

/// Run the expanded command through the shell and wait for it to exit. No
/// timeout - the player is expected to quit on its own when playback ends.
pub fn run(command: &str) -> Result<(), PlayerError> {
    let status = Command::new("sh").arg("-c").arg(command).status()?;
    if status.success() {
        Ok(())
    } else {
        Err(PlayerError::Failed(status))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_expand_template() {
        let expanded = expand_template(
            "ffmpeg -re -i '{video_path}' -f null -",
            &PathBuf::from("/videos/a.mp4"),
        );
        assert_eq!(expanded, "ffmpeg -re -i '/videos/a.mp4' -f null -");
    }

    #[test]
    fn test_template_without_placeholder_is_unchanged() {
        let expanded = expand_template("true", &PathBuf::from("/videos/a.mp4"));
        assert_eq!(expanded, "true");
    }

    #[test]
    fn test_run_success() {
        assert!(run("true").is_ok());
    }

    #[test]
    fn test_run_non_zero_exit() {
        let result = run("false");
        assert!(matches!(result, Err(PlayerError::Failed(_))));
    }
}
