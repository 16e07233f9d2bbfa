use anyhow::Result;
use balltrack::detector::{Detection, FrameDetector};
use balltrack::pipeline::SequenceProcessor;
use balltrack::selector::select_ball;
use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use usls::Image;

fn make_detections(count: usize) -> Vec<Detection> {
    (0..count)
        .map(|i| Detection {
            class_name: if i % 3 == 0 {
                "person".to_string()
            } else {
                "sports ball".to_string()
            },
            confidence: 0.3 + (i % 7) as f32 * 0.1,
            x1: (i * 10) as i32,
            y1: (i * 10) as i32,
            x2: (i * 10 + 40) as i32,
            y2: (i * 10 + 40) as i32,
        })
        .collect()
}

/// Detector that returns the same detection set for every frame.
struct FixedDetector {
    detections: Vec<Detection>,
}

impl FrameDetector for FixedDetector {
    fn detect(&mut self, _frame: &Image) -> Result<Vec<Detection>> {
        Ok(self.detections.clone())
    }
}

fn benchmark_selection(c: &mut Criterion) {
    let mut group = c.benchmark_group("selection");

    for detection_count in [1, 5, 20, 100].iter() {
        let detections = make_detections(*detection_count);

        group.bench_with_input(
            BenchmarkId::new("select_ball", detection_count),
            &detections,
            |b, detections| {
                b.iter(|| {
                    let result = select_ball(black_box(detections), black_box("sports ball"));
                    black_box(result)
                })
            },
        );
    }

    group.finish();
}

fn benchmark_frame_aggregation(c: &mut Criterion) {
    let mut group = c.benchmark_group("frame_aggregation");
    group.sample_size(20);

    for frame_count in [10, 50].iter() {
        group.bench_with_input(
            BenchmarkId::new("process_frames", frame_count),
            frame_count,
            |b, &frame_count| {
                b.iter(|| {
                    let detector = FixedDetector {
                        detections: make_detections(10),
                    };
                    let mut processor = SequenceProcessor::new(detector, "sports ball");
                    let frames = (0..frame_count)
                        .map(|_| Image::from(image::RgbImage::new(160, 90)))
                        .collect::<Vec<_>>();
                    let result = processor.process_frames(frames, |_frame| Ok(()), || false);
                    black_box(result)
                })
            },
        );
    }

    group.finish();
}

criterion_group!(benches, benchmark_selection, benchmark_frame_aggregation);
criterion_main!(benches);
