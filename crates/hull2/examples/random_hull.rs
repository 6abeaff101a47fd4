//! Draw a uniform point cloud and print its convex hull.
//!
//! Usage:
//!   cargo run -p hull2 --example random_hull -- [n] [seed]
//!
//! Defaults to 20 points in the unit square with seed 0. Prints the points,
//! then the hull as a closed ring (first vertex repeated), ready to plot.

use hull2::prelude::*;

fn main() {
    let mut args = std::env::args().skip(1);
    let n: usize = args.next().and_then(|s| s.parse().ok()).unwrap_or(20);
    let seed: u64 = args.next().and_then(|s| s.parse().ok()).unwrap_or(0);
    if n == 0 {
        eprintln!("usage: random_hull [n>0] [seed]");
        return;
    }

    let points = uniform_points(n, SampleBox::default(), ReplayToken { seed, index: 0 });
    println!("points ({n}):");
    for p in &points {
        println!("  {:.4} {:.4}", p.x, p.y);
    }

    let hull = match Hull::from_points(&points, HullCfg::default()) {
        Ok(h) => h,
        Err(e) => {
            eprintln!("hull failed: {e}");
            return;
        }
    };
    println!("hull ({} vertices, area {:.4}):", hull.len(), hull.signed_area());
    for v in hull.closed_ring() {
        println!("  {:.4} {:.4}", v.x, v.y);
    }
}
