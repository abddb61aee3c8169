//! CSS timing curves used by the reveal and smooth-scroll transitions.

/// Named CSS easing curves, each a cubic bezier through (0,0) and (1,1).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Easing {
    Linear,
    /// CSS `ease`, the default timing function.
    #[default]
    Ease,
    EaseInOut,
}

impl Easing {
    fn control_points(self) -> Option<(f64, f64, f64, f64)> {
        match self {
            Easing::Linear => None,
            Easing::Ease => Some((0.25, 0.1, 0.25, 1.0)),
            Easing::EaseInOut => Some((0.42, 0.0, 0.58, 1.0)),
        }
    }

    /// Map linear progress in `[0, 1]` to eased progress.
    pub fn apply(self, t: f32) -> f32 {
        if t <= 0.0 {
            return 0.0;
        }
        if t >= 1.0 {
            return 1.0;
        }
        match self.control_points() {
            None => t,
            Some((x1, y1, x2, y2)) => {
                let p = solve_x(t as f64, x1, x2);
                bezier(p, y1, y2) as f32
            }
        }
    }
}

/// One coordinate of the bezier at parameter `p`.
fn bezier(p: f64, c1: f64, c2: f64) -> f64 {
    let a = 1.0 - 3.0 * c2 + 3.0 * c1;
    let b = 3.0 * c2 - 6.0 * c1;
    let c = 3.0 * c1;
    ((a * p + b) * p + c) * p
}

fn bezier_slope(p: f64, c1: f64, c2: f64) -> f64 {
    let a = 1.0 - 3.0 * c2 + 3.0 * c1;
    let b = 3.0 * c2 - 6.0 * c1;
    let c = 3.0 * c1;
    (3.0 * a * p + 2.0 * b) * p + c
}

/// Find `p` with `bezier_x(p) == x`: Newton first, bisection if it stalls.
fn solve_x(x: f64, x1: f64, x2: f64) -> f64 {
    let mut p = x;
    for _ in 0..8 {
        let err = bezier(p, x1, x2) - x;
        if err.abs() < 1e-7 {
            return p;
        }
        let slope = bezier_slope(p, x1, x2);
        if slope.abs() < 1e-7 {
            break;
        }
        p -= err / slope;
    }

    let (mut lo, mut hi) = (0.0_f64, 1.0_f64);
    p = x;
    for _ in 0..30 {
        let val = bezier(p, x1, x2);
        if (val - x).abs() < 1e-7 {
            break;
        }
        if val < x {
            lo = p;
        } else {
            hi = p;
        }
        p = (lo + hi) / 2.0;
    }
    p
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_are_exact() {
        for easing in [Easing::Linear, Easing::Ease, Easing::EaseInOut] {
            assert_eq!(easing.apply(0.0), 0.0);
            assert_eq!(easing.apply(1.0), 1.0);
            assert_eq!(easing.apply(-2.0), 0.0);
            assert_eq!(easing.apply(3.0), 1.0);
        }
    }

    #[test]
    fn ease_is_monotonic_and_front_loaded() {
        let mut last = 0.0;
        for i in 1..=20 {
            let v = Easing::Ease.apply(i as f32 / 20.0);
            assert!(v >= last);
            last = v;
        }
        assert!(Easing::Ease.apply(0.5) > 0.5);
    }

    #[test]
    fn ease_in_out_is_symmetric_at_midpoint() {
        assert!((Easing::EaseInOut.apply(0.5) - 0.5).abs() < 1e-3);
    }
}
