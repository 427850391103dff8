//! Prints a ride report for one or all authored courses.
//!
//! ```text
//! cargo run --example course_report               # every course
//! cargo run --example course_report -- canyon     # one course
//! RUST_LOG=flume_path=debug cargo run --example course_report
//! ```
//!
//! The report simulates a fixed-step traversal: distance advances by
//! `BASE_SPEED * speed_multiplier` each tick, and zone changes are printed
//! as they happen.

use flume_path::{create_path, CourseId, FlumeError, Path};

const BASE_SPEED: f64 = 12.0;
const TICK: f64 = 1.0 / 30.0;

fn main() -> Result<(), FlumeError> {
    // Default: WARN for everything, INFO for flume_path.
    // Override with RUST_LOG env var (e.g. RUST_LOG=flume_path=debug).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("flume_path=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let courses = match std::env::args().nth(1) {
        Some(arg) => vec![arg.parse::<CourseId>()?],
        None => CourseId::ALL.to_vec(),
    };

    for id in courses {
        let path = create_path(id)?;
        report(&path);
    }
    Ok(())
}

fn report(path: &Path) {
    println!("== {} ==", path.name());
    println!(
        "length {:.1}, {} waypoints, {} zones",
        path.total_length(),
        path.waypoints().len(),
        path.zones().len()
    );
    if let Some(descent) = path.descent_report() {
        println!(
            "descent enforced: {} of {} samples clamped",
            descent.clamped, descent.samples
        );
    }

    let mut distance = 0.0;
    let mut elapsed = 0.0;
    let mut zone_index = usize::MAX;
    while distance < path.total_length() {
        let t = path.distance_to_t(distance);
        let index = path.zones().index_at(distance);
        if index != zone_index {
            zone_index = index;
            let zone = path.zone_at(distance);
            let p = path.point_at(t);
            println!(
                "  {elapsed:6.1}s  {distance:7.1}  {:<18} fog {} elev {:6.1}  {}",
                zone.name, zone.fog_color, p.y, zone.description
            );
        }
        distance += BASE_SPEED * path.speed_multiplier_at(t) * TICK;
        elapsed += TICK;
    }
    println!("  finished in {elapsed:.1}s");

    println!("  profile:");
    for k in 0..=10 {
        let t = f64::from(k) / 10.0;
        println!(
            "    t={t:.1}  slope {:7.3}  {:<15} bank {:6.2}  curve {:6.2}",
            path.slope_at(t),
            path.speed_band_at(t).to_string(),
            path.banking_at(t),
            path.curvature_at(t)
        );
    }
    println!();
}
