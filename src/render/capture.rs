//! Frame capture - writes rendered frames to numbered PNG files
//!
//! Each recording session gets its own `session-<unix-seconds>` directory
//! under the capture root. Frames are written as they arrive.

use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use image::RgbaImage;
use thiserror::Error;

/// Errors that can occur while capturing frames
#[derive(Error, Debug)]
pub enum CaptureError {
    #[error("Failed to write capture: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to encode frame {index}: {source}")]
    Encode {
        index: u32,
        #[source]
        source: image::ImageError,
    },

    #[error("Frame {index} has no pixels")]
    InvalidFrame { index: u32 },

    #[error("Not recording")]
    NotRecording,
}

/// An active recording
#[derive(Debug)]
struct Session {
    dir: PathBuf,
    frames: u32,
}

/// Records frames into session directories
#[derive(Debug)]
pub struct FrameCapture {
    root: PathBuf,
    session: Option<Session>,
}

impl FrameCapture {
    /// Capture into session directories under `root`
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            session: None,
        }
    }

    pub fn is_recording(&self) -> bool {
        self.session.is_some()
    }

    /// Directory of the current session, if recording
    pub fn session_dir(&self) -> Option<&Path> {
        self.session.as_ref().map(|s| s.dir.as_path())
    }

    /// Frames written in the current session
    pub fn frame_count(&self) -> u32 {
        self.session.as_ref().map_or(0, |s| s.frames)
    }

    /// Begin a new session
    ///
    /// Starting while already recording keeps the running session.
    pub fn start(&mut self) -> Result<&Path, CaptureError> {
        if self.session.is_none() {
            let dir = self.next_session_dir();
            std::fs::create_dir_all(&dir)?;
            log::info!("Recording frames to {}", dir.display());
            self.session = Some(Session { dir, frames: 0 });
        }
        match &self.session {
            Some(session) => Ok(session.dir.as_path()),
            None => Err(CaptureError::NotRecording),
        }
    }

    /// Finish the current session, returning the number of frames written
    pub fn stop(&mut self) -> Result<u32, CaptureError> {
        let session = self.session.take().ok_or(CaptureError::NotRecording)?;
        log::info!(
            "Saved {} frames to {}",
            session.frames,
            session.dir.display()
        );
        Ok(session.frames)
    }

    /// Start if idle, stop if recording. Returns whether recording afterwards.
    pub fn toggle(&mut self) -> Result<bool, CaptureError> {
        if self.is_recording() {
            self.stop()?;
            Ok(false)
        } else {
            self.start()?;
            Ok(true)
        }
    }

    /// Write the next frame of the session
    pub fn push_frame(&mut self, frame: &RgbaImage) -> Result<PathBuf, CaptureError> {
        let session = self.session.as_mut().ok_or(CaptureError::NotRecording)?;
        let index = session.frames + 1;

        if frame.width() == 0 || frame.height() == 0 {
            return Err(CaptureError::InvalidFrame { index });
        }

        let path = session.dir.join(frame_name(index));
        frame
            .save_with_format(&path, image::ImageFormat::Png)
            .map_err(|source| match source {
                image::ImageError::IoError(e) => CaptureError::Io(e),
                source => CaptureError::Encode { index, source },
            })?;

        session.frames = index;
        Ok(path)
    }

    /// A fresh session directory name, suffixed if the second is taken
    fn next_session_dir(&self) -> PathBuf {
        let secs = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0);
        let base = self.root.join(format!("session-{}", secs));
        if !base.exists() {
            return base;
        }
        (1u32..)
            .map(|n| self.root.join(format!("session-{}-{}", secs, n)))
            .find(|dir| !dir.exists())
            .unwrap_or(base)
    }
}

/// File name of the `index`th frame (1-based)
fn frame_name(index: u32) -> String {
    format!("frame-{:05}.png", index)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame(w: u32, h: u32) -> RgbaImage {
        RgbaImage::from_pixel(w, h, image::Rgba([200, 200, 200, 255]))
    }

    #[test]
    fn test_frame_names_are_numbered() {
        assert_eq!(frame_name(1), "frame-00001.png");
        assert_eq!(frame_name(630), "frame-00630.png");
    }

    #[test]
    fn test_records_numbered_frames() {
        let root = tempfile::tempdir().unwrap();
        let mut capture = FrameCapture::new(root.path());

        let dir = capture.start().unwrap().to_path_buf();
        assert!(dir.starts_with(root.path()));
        assert!(dir.is_dir());

        for _ in 0..3 {
            capture.push_frame(&frame(4, 8)).unwrap();
        }
        assert_eq!(capture.frame_count(), 3);
        assert_eq!(capture.stop().unwrap(), 3);
        assert!(!capture.is_recording());

        let written = image::open(dir.join("frame-00003.png")).unwrap();
        assert_eq!((written.width(), written.height()), (4, 8));
        assert!(!dir.join("frame-00004.png").exists());
    }

    #[test]
    fn test_push_without_session_fails() {
        let root = tempfile::tempdir().unwrap();
        let mut capture = FrameCapture::new(root.path());
        assert!(matches!(
            capture.push_frame(&frame(2, 2)),
            Err(CaptureError::NotRecording)
        ));
        assert!(matches!(capture.stop(), Err(CaptureError::NotRecording)));
    }

    #[test]
    fn test_empty_frame_is_rejected() {
        let root = tempfile::tempdir().unwrap();
        let mut capture = FrameCapture::new(root.path());
        capture.start().unwrap();
        assert!(matches!(
            capture.push_frame(&frame(0, 0)),
            Err(CaptureError::InvalidFrame { index: 1 })
        ));
        assert_eq!(capture.frame_count(), 0);
    }

    #[test]
    fn test_toggle_and_separate_sessions() {
        let root = tempfile::tempdir().unwrap();
        let mut capture = FrameCapture::new(root.path());

        assert!(capture.toggle().unwrap());
        let first = capture.session_dir().unwrap().to_path_buf();
        capture.push_frame(&frame(2, 2)).unwrap();
        assert!(!capture.toggle().unwrap());

        assert!(capture.toggle().unwrap());
        let second = capture.session_dir().unwrap().to_path_buf();
        assert_ne!(first, second);
        assert_eq!(capture.frame_count(), 0);
    }
}
