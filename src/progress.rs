use indicatif::{ProgressBar, ProgressStyle};
use std::time::Instant;

/// Progress reporter for streamed sources where the total frame count is not
/// known up front
pub struct FrameProgress {
    bar: ProgressBar,
    start: Instant,
    frames: u64,
}

impl FrameProgress {
    pub fn new(operation_name: &str) -> Self {
        let bar = ProgressBar::new_spinner();

        let style = ProgressStyle::default_spinner()
            .template("{spinner:.green} [{elapsed_precise}] {pos} frames | {msg}")
            .unwrap();
        bar.set_style(style);
        bar.set_message(format!("Processing {}", operation_name));

        Self {
            bar,
            start: Instant::now(),
            frames: 0,
        }
    }

    /// Advances the bar by one frame and refreshes the running ball count
    pub fn update(&mut self, balls_found: usize) {
        self.frames += 1;
        self.bar.inc(1);

        let elapsed = self.start.elapsed().as_secs_f64();
        let fps = if elapsed > 0.0 {
            self.frames as f64 / elapsed
        } else {
            0.0
        };
        self.bar
            .set_message(format!("balls: {} | speed: {:.1} fps", balls_found, fps));
    }

    /// Finishes the bar with a processing summary
    pub fn finish(&self, balls_found: usize) {
        let elapsed = self.start.elapsed().as_secs_f64();
        let avg_fps = if elapsed > 0.0 {
            self.frames as f64 / elapsed
        } else {
            0.0
        };
        self.bar.finish_with_message(format!(
            "Completed! Frames: {} | Balls: {} | Avg speed: {:.1} fps",
            self.frames, balls_found, avg_fps
        ));
    }

    /// Gets the number of frames reported so far
    pub fn frames(&self) -> u64 {
        self.frames
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_starts_at_zero_frames() {
        let progress = FrameProgress::new("test video");
        assert_eq!(progress.frames(), 0);
    }

    #[test]
    fn test_update_counts_frames() {
        let mut progress = FrameProgress::new("test video");
        progress.update(0);
        progress.update(1);
        progress.update(1);
        assert_eq!(progress.frames(), 3);
        progress.finish(1);
    }
}
