//! Stepwise square-root approximation, the stepping/breakpoint exercise.

use std::ops::Range;

/// Fractional steps taken between two consecutive integers.
pub const STEPS: u32 = 1000;

pub const DEFAULT_RANGE: Range<u32> = 60..82;

/// Approximate `sqrt(n)` to within `1 / STEPS`, rounding down.
pub fn approx_sqrt(n: u32) -> f64 {
    let target = f64::from(n);

    let mut lower = 0u32;
    while f64::from(lower + 1).powi(2) <= target {
        lower += 1;
    }

    let mut best = f64::from(lower);
    for step in 1..STEPS {
        let guess = f64::from(lower) + f64::from(step) / f64::from(STEPS);
        if guess * guess > target {
            break;
        }
        best = guess;
    }
    best
}

/// `(n, approx_sqrt(n))` for every `n` in `range`.
pub fn sqrt_table(range: Range<u32>) -> Vec<(u32, f64)> {
    range.map(|n| (n, approx_sqrt(n))).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn perfect_squares_are_exact() {
        for root in 0..12u32 {
            assert_eq!(approx_sqrt(root * root), f64::from(root));
        }
    }

    #[test]
    fn small_inputs_do_not_need_an_upper_bound() {
        assert_eq!(approx_sqrt(0), 0.0);
        assert_eq!(approx_sqrt(1), 1.0);
        assert!((approx_sqrt(2) - 1.414).abs() < 1e-9);
        assert!((approx_sqrt(3) - 1.732).abs() < 1e-9);
    }

    #[test]
    fn approximation_never_overshoots() {
        for (n, s) in sqrt_table(DEFAULT_RANGE) {
            let exact = f64::from(n).sqrt();
            assert!(s <= exact, "{n}: {s} > {exact}");
            assert!(exact - s < 1.0 / f64::from(STEPS), "{n}: {s} too far from {exact}");
        }
    }

    #[test]
    fn table_covers_half_open_range() {
        let table = sqrt_table(60..63);
        let ns: Vec<u32> = table.iter().map(|(n, _)| *n).collect();
        assert_eq!(ns, vec![60, 61, 62]);
    }
}
