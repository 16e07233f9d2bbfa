use anyhow::Result;
use usls::{Config, Image, Y, models::YOLO};

/// One raw model candidate for one frame, in pixel coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct Detection {
    pub class_name: String,
    pub confidence: f32,
    pub x1: i32,
    pub y1: i32,
    pub x2: i32,
    pub y2: i32,
}

impl Detection {
    /// Midpoint of the bounding box, truncated toward zero
    pub fn center(&self) -> (i32, i32) {
        ((self.x1 + self.x2) / 2, (self.y1 + self.y2) / 2)
    }

    /// Box area in pixels. Reported in debug output only; selection
    /// ranks on confidence alone.
    pub fn area(&self) -> i32 {
        (self.x2 - self.x1) * (self.y2 - self.y1)
    }
}

/// Runs the detection model against a single frame. The trait exists so the
/// pipeline can be exercised with a scripted detector instead of a loaded model.
pub trait FrameDetector {
    fn detect(&mut self, frame: &Image) -> Result<Vec<Detection>>;
}

/// YOLO-backed detector. The confidence threshold is applied by the model
/// config, so sub-threshold candidates never surface here.
pub struct YoloDetector {
    model: YOLO,
}

impl YoloDetector {
    pub fn new(config: Config) -> Result<Self> {
        let model = YOLO::new(config.commit()?)?;
        Ok(Self { model })
    }
}

impl FrameDetector for YoloDetector {
    fn detect(&mut self, frame: &Image) -> Result<Vec<Detection>> {
        let ys = self.model.forward(std::slice::from_ref(frame))?;
        Ok(ys.first().map(detections_from_results).unwrap_or_default())
    }
}

/// Flattens YOLO detection results into plain `Detection`s. Candidates
/// without a name or confidence are dropped. Output order is model order;
/// callers must not rely on it.
fn detections_from_results(y: &Y) -> Vec<Detection> {
    let hbbs = y.hbbs();

    hbbs.iter()
        .filter_map(|hbb| {
            let name = hbb.name()?;
            let confidence = hbb.confidence()?;
            Some(Detection {
                class_name: name.to_string(),
                confidence,
                x1: hbb.xmin() as i32,
                y1: hbb.ymin() as i32,
                x2: (hbb.xmin() + hbb.width()) as i32,
                y2: (hbb.ymin() + hbb.height()) as i32,
            })
        })
        .collect()
}
