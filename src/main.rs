use anyhow::Result;
use chrono::Local;
use std::fs;

use balltrack::cli::Args;
use balltrack::config;
use balltrack::detector::YoloDetector;
use balltrack::history::HistoryRecorder;
use balltrack::pipeline::{self, RunOutcome, SequenceProcessor, SourceKind};

/// Creates a timestamped output directory and returns its path
fn create_output_dir() -> Result<String> {
    let timestamp = Local::now().format("%Y%m%d_%H%M%S").to_string();
    let output_dir = format!("./runs/{}", timestamp);
    fs::create_dir_all(&output_dir)?;
    Ok(output_dir)
}

fn main() -> Result<()> {
    let args: Args = argh::from_env();
    let kind: SourceKind = args.mode.parse()?;

    // Create timestamped output directory
    let output_dir = create_output_dir()?;
    println!("Created output directory: {}", output_dir);

    let detector = YoloDetector::new(config::build_config(&args)?)?;
    let mut processor = SequenceProcessor::new(detector, args.object.clone());
    let recorder = HistoryRecorder::new(&args.history_file);

    let (record, result_path) = match kind {
        SourceKind::Image => {
            let out_path = format!("{}/result.jpg", output_dir);
            let record = pipeline::run_image(&mut processor, &args.source, &out_path)?;
            println!("Annotated image saved to: {}", out_path);
            (record, Some(out_path))
        }
        SourceKind::Video => {
            let out_path = format!("{}/processed_video.mp4", output_dir);
            let record = pipeline::run_video(&mut processor, &args.source, &out_path)?;
            println!("Processed video saved to: {}", out_path);
            (record, Some(out_path))
        }
        SourceKind::Webcam => {
            let (record, outcome) =
                pipeline::run_webcam(&mut processor, &args.source, args.headless)?;
            if outcome == RunOutcome::Cancelled {
                println!("Webcam session cancelled");
            }
            (record, None)
        }
    };

    println!("Balls detected: {}", record.len());
    recorder.record(kind.label(), &record)?;

    // Move the result to output_filepath if specified
    if let Some(result_path) = result_path {
        if !args.output_filepath.is_empty() {
            println!("Moving result to: {}", args.output_filepath);
            fs::rename(&result_path, &args.output_filepath)?;
        }
    }

    Ok(())
}
