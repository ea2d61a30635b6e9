pub mod download;
pub mod error;
pub mod fetch;
pub mod job;
pub mod logging;
pub mod report;

use std::io;

pub use error::FetchError;
pub use job::{FetchJob, Profile, STATUS_URL};

/// Entry point shared by the binaries: sets up the log file, fetches the
/// status JSON with `profile` and returns the exit code.
pub fn launch(profile: Profile) -> i32 {
    // A missing log file shouldn't change the outcome of the download.
    match logging::setup_logging() {
        Ok(path) => log::info!("Logging to {:?}", path),
        Err(e) => eprintln!("warning: logging disabled: {:#}", e),
    }

    let job = FetchJob::for_profile(profile);
    log::info!("status-fetch starting ({:?} profile)", profile);
    log::info!("Status URL: {}", job.url);

    fetch::run(&job, io::stdout().lock())
}
