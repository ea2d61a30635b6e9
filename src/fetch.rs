use std::io::Write;

use crate::download::{fetch_bytes, file_size, write_bytes};
use crate::error::FetchError;
use crate::job::{preview, FetchJob};
use crate::report::Console;

/// Runs one job, printing its profile's status lines to `out`, and returns
/// the exit code the process should finish with.
pub fn run<W: Write>(job: &FetchJob, out: W) -> i32 {
    let mut console = Console::new(out);
    console.maybe_line(job.profile.announce_line(&job.url, &job.path));

    match fetch_and_save(job, &mut console) {
        Ok(len) => {
            log::info!("Saved {} bytes from {} to {:?}", len, job.url, job.path);
            console.maybe_line(job.profile.done_line());
            0
        }
        Err(e) => {
            log::error!("Fetch of {} into {:?} failed: {}", job.url, job.path, e);
            console.error(&e);
            job.profile.failure_exit_code()
        }
    }
}

fn fetch_and_save<W: Write>(job: &FetchJob, console: &mut Console<W>) -> Result<usize, FetchError> {
    let bytes = fetch_bytes(&job.url, job.timeout)?;
    console.line(&job.profile.count_line(bytes.len()));

    if job.profile.inspects() {
        console.line(&format!("Start of content: {}", preview(&bytes)));
    }

    write_bytes(&job.path, &bytes)?;

    if job.profile.inspects() {
        console.line(&format!("Successfully wrote to {}", job.path.display()));
        let on_disk = file_size(&job.path)?;
        if on_disk != bytes.len() as u64 {
            log::warn!(
                "Size on disk {} differs from {} bytes downloaded",
                on_disk,
                bytes.len()
            );
        }
        console.line(&format!("Actual file size: {}", on_disk));
    }

    Ok(bytes.len())
}
