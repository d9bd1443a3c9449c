//! Display utilities and output formatting for the bricktime CLI.

use bricktime_estimate::Estimator;

/// Print a human-readable summary for a single estimate.
pub(crate) fn print_estimate(pieces: i64, builders: i64, hours: f64) {
    println!("Pieces:   {pieces}");
    println!("Builders: {builders}");
    println!(
        "Collaboration factor: {:.2}",
        Estimator::collaboration_factor(builders)
    );
    println!();
    println!(
        "Estimated time: {} hours (~{})",
        Estimator::format_hours(hours),
        Estimator::format_duration(hours)
    );
}
