use crate::cli::Args;
use anyhow::Result;
use usls::{Config, NAMES_COCO_80};

/// Builds a YOLO model configuration from command line arguments
pub fn build_config(args: &Args) -> Result<Config> {
    let config = Config::yolo()
        .with_model_file(&args.model)
        .with_version(args.ver.try_into()?)
        .with_scale(args.scale.parse()?)
        .with_model_dtype(args.dtype.parse()?)
        .with_model_device(args.device.parse()?)
        .with_class_confs(&[args.conf_threshold])
        .with_class_names(&NAMES_COCO_80)
        .with_model_num_dry_run(2);

    Ok(config)
}
