// File: crates/trend-core/src/grid.rs
// Summary: Grid/tick layout helpers.

pub fn linspace(start: f64, end: f64, steps: usize) -> Vec<f64> {
    if steps < 2 { return vec![start, end]; }
    let step = (end - start) / (steps as f64 - 1.0);
    (0..steps).map(|i| start + step * i as f64).collect()
}

/// Center of category slot `index` when `count` slots share `[left, right]`.
pub fn slot_center(left: f64, right: f64, count: usize, index: usize) -> f64 {
    let width = (right - left) / count.max(1) as f64;
    left + width * (index as f64 + 0.5)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slots_split_the_span_evenly() {
        assert_eq!(slot_center(0.0, 300.0, 3, 0), 50.0);
        assert_eq!(slot_center(0.0, 300.0, 3, 2), 250.0);
        assert_eq!(slot_center(0.0, 300.0, 0, 0), 150.0);
    }
}
