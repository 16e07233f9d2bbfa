use argh::FromArgs;

/// Ball detection and position tracking
#[derive(FromArgs, Debug)]
pub struct Args {
    /// input mode: image, video, or webcam
    #[argh(option, default = "String::from(\"video\")")]
    pub mode: String,

    /// source: image path, video path, or camera index for webcam
    #[argh(option, default = "String::from(\"./video/match.mp4\")")]
    pub source: String,

    /// object class to track
    #[argh(option, default = "String::from(\"sports ball\")")]
    pub object: String,

    /// model file (.onnx)
    #[argh(option, default = "String::from(\"yolov8n.onnx\")")]
    pub model: String,

    /// confidence threshold applied by the model
    #[argh(option, default = "0.3")]
    pub conf_threshold: f32,

    /// model dtype
    #[argh(option, default = "String::from(\"auto\")")]
    pub dtype: String,

    /// version
    #[argh(option, default = "8.0")]
    pub ver: f32,

    /// device: cuda, cpu, mps
    #[argh(option, default = "String::from(\"cpu:0\")")]
    pub device: String,

    /// scale: n, s, m, l
    #[argh(option, default = "String::from(\"n\")")]
    pub scale: String,

    /// path of the JSON detection history log
    #[argh(option, default = "String::from(\"history.json\")")]
    pub history_file: String,

    /// move the result to this path after processing
    #[argh(option, default = "String::from(\"\")")]
    pub output_filepath: String,

    /// use headless mode
    #[argh(switch)]
    pub headless: bool,
}
