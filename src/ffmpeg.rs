use std::io::{self, Write};
use std::path::Path;
use std::process::{Child, ChildStdin, Command, ExitStatus, Stdio};
use raylib::prelude::*;
use thiserror::Error;
use tracing::{info, warn};

#[derive(Debug, Error)]
pub enum RecordError {
    #[error("failed to start ffmpeg: {0}")]
    Spawn(#[source] io::Error),
    #[error("failed to write frame to ffmpeg: {0}")]
    Write(#[source] io::Error),
    #[error("failed to wait for ffmpeg: {0}")]
    Wait(#[source] io::Error),
    #[error("ffmpeg exited with {0}")]
    Failed(ExitStatus),
}

/// Pipes raw RGBA frames into an `ffmpeg` process encoding H.264.
pub struct Ffmpeg {
    process: Option<Child>,
    stdin: Option<ChildStdin>,
}

impl Ffmpeg {
    pub fn new(width: i32, height: i32, fps: u32, video: &Path) -> Result<Ffmpeg, RecordError> {
        let mut process = Command::new("ffmpeg")
            .stdin(Stdio::piped())
            .args(["-loglevel", "error"])
            .arg("-y")
            .args(["-f", "rawvideo"])
            .args(["-pixel_format", "rgba"])
            .args(["-video_size", &format!("{}x{}", width, height)])
            .args(["-framerate", &format!("{}", fps)])
            .args(["-i", "-"])
            .args(["-c:v", "libx264"])
            .args(["-pix_fmt", "yuv420p"])
            .arg(video)
            .spawn()
            .map_err(RecordError::Spawn)?;
        let stdin = process.stdin.take();
        info!(?video, width, height, fps, "recording");
        Ok(Ffmpeg { process: Some(process), stdin })
    }

    pub fn write(&mut self, image: &Image) -> Result<(), RecordError> {
        let width = image.width().max(0) as usize;
        let height = image.height().max(0) as usize;
        // SAFETY: an uncompressed RGBA image owns width * height * 4 bytes of pixel data.
        let pixels = unsafe {
            std::slice::from_raw_parts(image.data() as *const u8, width * height * 4)
        };
        let stdin = self
            .stdin
            .as_mut()
            .ok_or_else(|| RecordError::Write(io::ErrorKind::BrokenPipe.into()))?;
        write_flipped(stdin, pixels, width, height).map_err(RecordError::Write)
    }

    /// Closes the pipe and waits for the encoder to flush the file.
    pub fn finish(mut self) -> Result<(), RecordError> {
        self.stdin = None;
        let Some(mut process) = self.process.take() else {
            return Ok(());
        };
        let status = process.wait().map_err(RecordError::Wait)?;
        if status.success() {
            info!("recording finished");
            Ok(())
        } else {
            Err(RecordError::Failed(status))
        }
    }
}

impl Drop for Ffmpeg {
    fn drop(&mut self) {
        self.stdin = None;
        if let Some(mut process) = self.process.take() {
            if let Err(e) = process.wait() {
                warn!("failed to wait for ffmpeg: {}", e);
            }
        }
    }
}

/// Writes RGBA rows bottom to top; the framebuffer is stored upside down.
pub fn write_flipped(
    out: &mut impl Write,
    pixels: &[u8],
    width: usize,
    height: usize,
) -> io::Result<()> {
    let stride = width * 4;
    for y in (0..height).rev() {
        out.write_all(&pixels[y * stride..(y + 1) * stride])?;
    }
    Ok(())
}
