//! Track dump: samples the default loop and prints what a renderer would draw.
//!
//! Usage:
//! ```text
//! cargo run --example track_dump                  # linear
//! cargo run --example track_dump -- cardinal      # cardinal spline
//! cargo run --example track_dump -- bspline       # cubic B-spline
//! RUST_LOG=trackcurve=debug cargo run --example track_dump
//! ```

use trackcurve::editing::{DragConstraint, EditorSession, MouseButton, MouseRay, PickHit};
use trackcurve::math::{Point3, Vector3};
use trackcurve::tessellation::{PlaceTrain, TessellateTrack, TrackParams, TrainClock, TrainParams};
use trackcurve::{CurveType, Result, SampleTrack, Track};

/// Parse the curve type from the first CLI argument.
fn parse_curve_type() -> CurveType {
    match std::env::args().nth(1).as_deref() {
        Some("cardinal") => CurveType::CardinalSpline,
        Some("bspline") => CurveType::CubicBSpline,
        Some("linear") | None => CurveType::Linear,
        Some(other) => {
            eprintln!("[track_dump] unknown curve type: {other} (linear, cardinal, bspline)");
            CurveType::Linear
        }
    }
}

fn main() -> Result<()> {
    // Default: WARN for everything, INFO for trackcurve.
    // Override with RUST_LOG env var (e.g. RUST_LOG=trackcurve=trace).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("track_dump=info".parse().unwrap_or_default())
        .add_directive("trackcurve=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let curve_type = parse_curve_type();
    let mut track = Track::default_loop();

    // Click the first control point and lift it ten units.
    let mut session = EditorSession::new();
    session.press(MouseButton::Left, &[PickHit::new(1, 0, 0)], track.len());
    let ray = MouseRay::through(Point3::new(120.0, 15.0, 0.0), Point3::new(0.0, 15.0, 0.0));
    session.drag(&mut track, ray, DragConstraint::Vertical)?;
    session.release();
    println!("{}", session.describe_selection(&track));

    for step in 0..8 {
        let t = f64::from(step) * 0.5;
        let sample = SampleTrack::new(t, curve_type).execute(&track)?;
        let p = sample.position;
        let d = sample.tangent;
        println!(
            "t={t:4.1}  pos=({:8.3} {:8.3} {:8.3})  dir=({:6.3} {:6.3} {:6.3})",
            p.x, p.y, p.z, d.x, d.y, d.z
        );
    }

    let mesh = TessellateTrack::new(curve_type, TrackParams::default()).execute(&track)?;
    println!(
        "mesh: {} centre segments, {} ties",
        mesh.centerline.len(),
        mesh.ties.len()
    );

    let mut clock = TrainClock::new(0.4);
    for _ in 0..3 {
        let t = clock.advance(1.0, track.len())?;
        let placement = PlaceTrain::new(t, curve_type, TrainParams::default()).execute(&track)?;
        let eye = placement.camera.eye;
        let up: Vector3 = placement.camera.up;
        println!(
            "train t={t:.2}  eye=({:.3} {:.3} {:.3})  up=({:.3} {:.3} {:.3})",
            eye.x, eye.y, eye.z, up.x, up.y, up.z
        );
    }
    Ok(())
}
