use crate::annotate;
use crate::detector::FrameDetector;
use crate::progress::FrameProgress;
use crate::selector;
use anyhow::{Context, Result, bail};
use std::env;
use std::str::FromStr;
use usls::{DataLoader, Image, Key, Viewer};

/// Frame rate of encoded output video
pub const OUTPUT_FPS: usize = 25;

/// Helper function to check if debug logging is enabled
pub fn is_debug_enabled() -> bool {
    env::var("RUST_LOG")
        .map(|val| val.to_lowercase() == "debug")
        .unwrap_or(false)
}

/// Debug print function that only prints when RUST_LOG=debug
pub fn debug_println(args: std::fmt::Arguments) {
    if is_debug_enabled() {
        println!("{}", args);
    }
}

/// Kind of frame source being processed; also the label written to the
/// detection history.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    Image,
    Video,
    Webcam,
}

impl SourceKind {
    pub fn label(self) -> &'static str {
        match self {
            SourceKind::Image => "image",
            SourceKind::Video => "video",
            SourceKind::Webcam => "webcam",
        }
    }
}

impl FromStr for SourceKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "image" => Ok(SourceKind::Image),
            "video" => Ok(SourceKind::Video),
            "webcam" => Ok(SourceKind::Webcam),
            other => bail!("unknown mode: {} (expected image, video, or webcam)", other),
        }
    }
}

/// Ordered ball centers accumulated across one processed sequence. Append-only;
/// frames without a selection contribute nothing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PositionRecord {
    positions: Vec<(i32, i32)>,
}

impl PositionRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, center: (i32, i32)) {
        self.positions.push(center);
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn as_slice(&self) -> &[(i32, i32)] {
        &self.positions
    }
}

/// How a sequence run ended. Both are terminal and both finalize whatever the
/// record holds at that point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    Finished,
    Cancelled,
}

/// Runs detection, selection and annotation per frame and accumulates ball
/// centers across the sequence.
pub struct SequenceProcessor<D: FrameDetector> {
    detector: D,
    target_class: String,
}

impl<D: FrameDetector> SequenceProcessor<D> {
    pub fn new(detector: D, target_class: impl Into<String>) -> Self {
        Self {
            detector,
            target_class: target_class.into(),
        }
    }

    /// Processes one frame: detect, pick the best ball, record its center if
    /// any, and return the annotated frame. No selection is a normal outcome,
    /// not an error.
    pub fn process_frame(&mut self, frame: &Image, record: &mut PositionRecord) -> Result<Image> {
        let detections = self.detector.detect(frame)?;
        let selected = selector::select_ball(&detections, &self.target_class);

        match selected {
            Some(det) => {
                debug_println(format_args!(
                    "ball: conf {:.3}, area {}, center {:?}",
                    det.confidence,
                    det.area(),
                    det.center()
                ));
                record.push(det.center());
            }
            None => {
                debug_println(format_args!(
                    "no ball this frame ({} detections)",
                    detections.len()
                ));
            }
        }

        annotate::annotate_ball(frame, selected)
    }

    /// Aggregation loop over an in-order frame sequence. The cancellation
    /// token is polled once per iteration, before the frame is processed, so
    /// cancelling after k processed frames finalizes exactly those k frames'
    /// selections. Every processed frame is handed to the sink.
    pub fn process_frames<I, S, C>(
        &mut self,
        frames: I,
        mut sink: S,
        mut cancel: C,
    ) -> Result<(PositionRecord, RunOutcome)>
    where
        I: IntoIterator<Item = Image>,
        S: FnMut(&Image) -> Result<()>,
        C: FnMut() -> bool,
    {
        let mut record = PositionRecord::new();

        for frame in frames {
            if cancel() {
                return Ok((record, RunOutcome::Cancelled));
            }
            let annotated = self.process_frame(&frame, &mut record)?;
            sink(&annotated)?;
        }

        Ok((record, RunOutcome::Finished))
    }
}

/// Processes a single image file. A frame that cannot be decoded is fatal
/// here, unlike streamed sources where a failed read just ends the stream.
pub fn run_image<D: FrameDetector>(
    processor: &mut SequenceProcessor<D>,
    source: &str,
    out_path: &str,
) -> Result<PositionRecord> {
    let rgb = image::open(source)
        .with_context(|| format!("invalid frame: failed to decode image {}", source))?
        .to_rgb8();
    let frame = Image::from(rgb);

    let mut record = PositionRecord::new();
    let annotated = processor.process_frame(&frame, &mut record)?;
    annotated
        .to_rgb8()
        .save(out_path)
        .with_context(|| format!("failed to save annotated image {}", out_path))?;

    Ok(record)
}

/// Processes a video file frame by frame, writing the annotated output at a
/// fixed frame rate. The loader ending for any reason, end-of-file or a
/// failed read, terminates the loop cleanly with whatever was accumulated.
pub fn run_video<D: FrameDetector>(
    processor: &mut SequenceProcessor<D>,
    source: &str,
    out_path: &str,
) -> Result<PositionRecord> {
    let data_loader = DataLoader::new(source)?.with_batch(1).build()?;
    let mut viewer = Viewer::default()
        .with_fps(OUTPUT_FPS as f32)
        .with_saveout(out_path.to_string());
    let mut progress = FrameProgress::new("video");

    let mut record = PositionRecord::new();
    for xs in &data_loader {
        for frame in xs.iter() {
            let annotated = processor.process_frame(frame, &mut record)?;
            viewer.write_video_frame(&annotated)?;
            progress.update(record.len());
        }
    }
    viewer.finalize_video()?;
    progress.finish(record.len());

    Ok(record)
}

/// Processes a live capture until the stream ends or the user cancels with
/// ESC (or closes the window). The key poll is non-blocking and happens once
/// per frame batch; the record accumulated up to the cancel is the result.
pub fn run_webcam<D: FrameDetector>(
    processor: &mut SequenceProcessor<D>,
    source: &str,
    headless: bool,
) -> Result<(PositionRecord, RunOutcome)> {
    let data_loader = DataLoader::new(source)?.with_batch(1).build()?;
    let mut viewer = Viewer::default();

    let mut record = PositionRecord::new();
    let mut outcome = RunOutcome::Finished;

    'capture: for xs in &data_loader {
        if viewer.is_window_exist() && !viewer.is_window_open() {
            outcome = RunOutcome::Cancelled;
            break 'capture;
        }
        if let Some(key) = viewer.wait_key(1) {
            if key == Key::Escape {
                outcome = RunOutcome::Cancelled;
                break 'capture;
            }
        }

        for frame in xs.iter() {
            let annotated = processor.process_frame(frame, &mut record)?;
            if !headless {
                viewer.imshow(&annotated)?;
            }
        }
    }

    Ok((record, outcome))
}
