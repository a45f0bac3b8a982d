// File: crates/chart-core/src/grid.rs
// Summary: Grid/tick layout helpers (1-2-5 "nice" steps).

/// Step size from the 1-2-5 sequence giving roughly `target` intervals over `span`.
pub fn nice_step(span: f64, target: usize) -> f64 {
    let raw = span / target.max(1) as f64;
    let mag = 10f64.powf(raw.log10().floor());
    let norm = raw / mag;
    let nice = if norm <= 1.0 {
        1.0
    } else if norm <= 2.0 {
        2.0
    } else if norm <= 5.0 {
        5.0
    } else {
        10.0
    };
    nice * mag
}

/// Tick positions inside `[min, max]` on multiples of a nice step.
/// Returns an empty vec for non-finite or empty ranges, and for spans too
/// small to yield a positive step.
pub fn nice_ticks(min: f64, max: f64, target: usize) -> Vec<f64> {
    if !min.is_finite() || !max.is_finite() || max <= min {
        return Vec::new();
    }
    let step = nice_step(max - min, target);
    if !step.is_finite() || step <= 0.0 {
        return Vec::new();
    }
    let eps = step * 1e-9;
    let first = (min / step).ceil() * step;
    let mut out = Vec::new();
    let mut i = 0usize;
    loop {
        let v = first + step * i as f64;
        if v > max + eps {
            break;
        }
        // snap -0.0 and rounding residue to a clean zero
        out.push(if v.abs() < eps { 0.0 } else { v });
        i += 1;
    }
    out
}

/// Format a tick value with just enough decimals for `step`.
pub fn format_tick(value: f64, step: f64) -> String {
    let decimals = if step >= 1.0 { 0 } else { (-step.log10().floor()) as usize };
    format!("{:.*}", decimals, value)
}
