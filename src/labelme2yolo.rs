use clap::Parser;
use log::{error, info};
use std::path::Path;
use std::process::ExitCode;

use labelme2yolo_seg::{process_dataset, setup_output_directories, Args};

fn main() -> ExitCode {
    // Initialize the logger
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    info!("Starting the conversion process...");

    // Outputs always land in the working directory
    let output_dirs = match setup_output_directories(Path::new(".")) {
        Ok(output_dirs) => output_dirs,
        Err(e) => {
            error!("Failed to set up output directories: {}", e);
            return ExitCode::FAILURE;
        }
    };

    match process_dataset(&args.input_folder, &output_dirs) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            error!(
                "Failed to process {}: {}",
                args.input_folder.display(),
                e
            );
            ExitCode::FAILURE
        }
    }
}
