use clap::Parser;
use log::error;
use std::process::ExitCode;

use labelme2yolo_seg::{run_training, TrainArgs, TrainingConfig};

fn main() -> ExitCode {
    // Initialize the logger
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = TrainArgs::parse();

    match run_training(&args.yolo_bin, &TrainingConfig::default()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
