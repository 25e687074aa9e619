#[cfg(feature = "bench_regions")]
use std::time::Instant;
#[cfg(feature = "bench_regions")]
use subdiv::{Point, Subdivision};

#[cfg(not(feature = "bench_regions"))]
fn main() {
    panic!("coloring_bench requires --features bench_regions");
}

// Square rooms in a w x h block; every room touches up to 8 others.
#[cfg(feature = "bench_regions")]
fn rooms(w: i32, h: i32, size: i32) -> Vec<Vec<Point>> {
    let mut lines = Vec::new();
    for i in 0..=w {
        lines.push(vec![Point::new(i * size, 0), Point::new(i * size, h * size)]);
    }
    for j in 0..=h {
        lines.push(vec![Point::new(0, j * size), Point::new(w * size, j * size)]);
    }
    lines
}

#[cfg(feature = "bench_regions")]
fn main() {
    let args: Vec<String> = std::env::args().collect();
    let mut w = 12i32;
    let mut h = 12i32;
    let mut size = 4i32;
    let mut repeats = 10usize;
    for a in &args[1..] {
        if let Some(val) = a.strip_prefix("--w=") {
            if let Ok(v) = val.parse() {
                w = v;
            }
        } else if let Some(val) = a.strip_prefix("--h=") {
            if let Ok(v) = val.parse() {
                h = v;
            }
        } else if let Some(val) = a.strip_prefix("--size=") {
            if let Ok(v) = val.parse() {
                size = v;
            }
        } else if let Some(val) = a.strip_prefix("--repeats=") {
            if let Ok(v) = val.parse() {
                repeats = v;
            }
        }
    }

    let lines = rooms(w, h, size);
    let mut build_ms = Vec::with_capacity(repeats);
    let mut trace_ms = Vec::with_capacity(repeats);
    let mut color_ms = Vec::with_capacity(repeats);
    let mut regions = 0usize;
    for _ in 0..repeats {
        let t0 = Instant::now();
        let s = match Subdivision::build(&lines) {
            Ok(s) => s,
            Err(e) => {
                eprintln!("build failed: {}", e);
                return;
            }
        };
        build_ms.push(t0.elapsed().as_secs_f64() * 1000.0);
        regions = s.region_count();

        let t1 = Instant::now();
        let _ = s.boundaries();
        trace_ms.push(t1.elapsed().as_secs_f64() * 1000.0);

        let t2 = Instant::now();
        if let Err(e) = s.colorize() {
            eprintln!("colorize failed: {}", e);
        }
        color_ms.push(t2.elapsed().as_secs_f64() * 1000.0);
    }
    let avg = |v: &[f64]| if v.is_empty() { 0.0 } else { v.iter().sum::<f64>() / v.len() as f64 };

    println!(
        "rooms={}x{} size={} regions={} build_ms={:.3} trace_ms={:.3} color_ms={:.3}",
        w,
        h,
        size,
        regions,
        avg(&build_ms),
        avg(&trace_ms),
        avg(&color_ms)
    );
}
