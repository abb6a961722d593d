//! Progress logging utilities.

use log::info;

/// Logs progress information about domain processing.
///
/// # Arguments
///
/// * `start_time` - The start time of processing
/// * `completed` - Domains written to the output file
/// * `failed` - Domains skipped after an error
pub fn log_progress(start_time: std::time::Instant, completed: usize, failed: usize) {
    let elapsed_secs = start_time.elapsed().as_secs_f64();
    let processed = completed + failed;
    let rate = if elapsed_secs > 0.0 {
        processed as f64 / elapsed_secs
    } else {
        0.0
    };
    info!(
        "Processed {} domains ({} saved, {} skipped) in {:.2} seconds (~{:.2} domains/sec)",
        processed, completed, failed, elapsed_secs, rate
    );
}
