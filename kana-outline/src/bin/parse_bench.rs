use kana_outline::geometry::normalize::normalize_segments;
use kana_outline::{parse_path, ViewBox};
use std::time::Instant;

fn build_path(groups: usize) -> String {
    // Mix of every command family, as authoring tools emit it
    let mut d = String::from("M100 100");
    for i in 0..groups {
        let o = (i % 50) as f32 * 3.5;
        match i % 5 {
            0 => d.push_str(&format!(" c{o} 10 {} 20 30 0", o + 5.0)),
            1 => d.push_str(&format!(" s20 -{o} 30 0")),
            2 => d.push_str(&format!(" Q{} 200 {} 150", 100.0 + o, 120.0 + o)),
            3 => d.push_str(" t10 5"),
            _ => d.push_str(&format!(" l{o},-2.5h4v-{o}")),
        }
    }
    d
}

fn percentile(sorted: &[f64], p: f64) -> f64 {
    if sorted.is_empty() { return 0.0; }
    let idx = ((sorted.len() as f64 - 1.0) * p).round() as usize;
    sorted[idx.min(sorted.len()-1)]
}

fn main() {
    let args: Vec<String> = std::env::args().collect();
    let mut groups = 200usize;
    let mut iters = 5000usize;
    let mut assert_ms: Option<f64> = None;
    for a in &args[1..] {
        if let Some(val)=a.strip_prefix("--groups=") { if let Ok(v)=val.parse() { groups=v; } }
        else if let Some(val)=a.strip_prefix("--iters=") { if let Ok(v)=val.parse() { iters=v; } }
        else if let Some(val)=a.strip_prefix("--assert-ms=") { if let Ok(v)=val.parse() { assert_ms=Some(v); } }
    }

    let d = build_path(groups);
    let vb = ViewBox::DEFAULT;
    // Warm-up
    let _ = parse_path(&d);

    let mut times_ms: Vec<f64> = Vec::with_capacity(iters);
    let start_all = Instant::now();
    let mut segments = 0usize;
    for _ in 0..iters {
        let t0 = Instant::now();
        match parse_path(&d) {
            Ok(segs) => segments += normalize_segments(&segs, &vb).len(),
            Err(e) => { eprintln!("FAIL: {e}"); std::process::exit(1); }
        }
        times_ms.push(t0.elapsed().as_secs_f64() * 1000.0);
    }
    let dur_all = start_all.elapsed().as_secs_f64() * 1000.0;
    times_ms.sort_by(|a, b| a.total_cmp(b));
    let med = percentile(&times_ms, 0.5);
    let p90 = percentile(&times_ms, 0.9);
    let p99 = percentile(&times_ms, 0.99);
    println!("groups={} iters={} chars={} segments={} total_ms={:.3} median_ms={:.4} p90_ms={:.4} p99_ms={:.4}", groups, iters, d.len(), segments / iters.max(1), dur_all, med, p90, p99);
    if let Some(th) = assert_ms { if med > th { eprintln!("FAIL: median {:.4} ms > threshold {:.3} ms", med, th); std::process::exit(1); } }
}
