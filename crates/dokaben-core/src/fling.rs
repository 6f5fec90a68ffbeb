//! Fling classification: turns a raw touch gesture into one of four swipe
//! directions (or none).

/// Flick direction on a key. The discriminant is the column index into the
/// syllable grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Center = 0,
    Left = 1,
    Up = 2,
    Right = 3,
    Down = 4,
}

impl Direction {
    pub const ALL: [Direction; 5] = [
        Direction::Center,
        Direction::Left,
        Direction::Up,
        Direction::Right,
        Direction::Down,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Center => "center",
            Self::Left => "left",
            Self::Up => "up",
            Self::Right => "right",
            Self::Down => "down",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|d| d.name().eq_ignore_ascii_case(name))
    }
}

/// A fling as reported by the host gesture detector: touch-down point,
/// touch-up point and release velocity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureSample {
    pub start_x: f32,
    pub start_y: f32,
    pub end_x: f32,
    pub end_y: f32,
    pub velocity_x: f32,
    pub velocity_y: f32,
}

impl GestureSample {
    fn is_finite(&self) -> bool {
        [
            self.start_x,
            self.start_y,
            self.end_x,
            self.end_y,
            self.velocity_x,
            self.velocity_y,
        ]
        .iter()
        .all(|v| v.is_finite())
    }
}

/// Both comparisons are strict: a fling exactly at a threshold is not a swipe.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlingThresholds {
    pub min_distance: f32,
    pub min_velocity: f32,
}

impl Default for FlingThresholds {
    fn default() -> Self {
        Self {
            min_distance: 10.0,
            min_velocity: 10.0,
        }
    }
}

/// Classify a fling. Returns `None` when the gesture is too short, too slow,
/// or carries non-finite data. Never returns `Some(Direction::Center)`.
///
/// The dominant axis is the one with the larger velocity magnitude; ties go
/// to the vertical axis.
pub fn classify(sample: &GestureSample, thresholds: &FlingThresholds) -> Option<Direction> {
    if !sample.is_finite() {
        return None;
    }

    // Positive dx is movement to the left, positive dy is movement up.
    let dx = sample.start_x - sample.end_x;
    let dy = sample.start_y - sample.end_y;
    let vx = sample.velocity_x.abs();
    let vy = sample.velocity_y.abs();

    if vx > vy {
        if vx <= thresholds.min_velocity {
            None
        } else if dx > thresholds.min_distance {
            Some(Direction::Left)
        } else if -dx > thresholds.min_distance {
            Some(Direction::Right)
        } else {
            None
        }
    } else if vy <= thresholds.min_velocity {
        None
    } else if dy > thresholds.min_distance {
        Some(Direction::Up)
    } else if -dy > thresholds.min_distance {
        Some(Direction::Down)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fling(start: (f32, f32), end: (f32, f32), velocity: (f32, f32)) -> GestureSample {
        GestureSample {
            start_x: start.0,
            start_y: start.1,
            end_x: end.0,
            end_y: end.1,
            velocity_x: velocity.0,
            velocity_y: velocity.1,
        }
    }

    fn classify_default(sample: GestureSample) -> Option<Direction> {
        classify(&sample, &FlingThresholds::default())
    }

    #[test]
    fn test_four_directions() {
        assert_eq!(
            classify_default(fling((100.0, 100.0), (50.0, 100.0), (-500.0, 0.0))),
            Some(Direction::Left)
        );
        assert_eq!(
            classify_default(fling((100.0, 100.0), (150.0, 100.0), (500.0, 0.0))),
            Some(Direction::Right)
        );
        assert_eq!(
            classify_default(fling((100.0, 100.0), (100.0, 50.0), (0.0, -500.0))),
            Some(Direction::Up)
        );
        assert_eq!(
            classify_default(fling((100.0, 100.0), (100.0, 150.0), (0.0, 500.0))),
            Some(Direction::Down)
        );
    }

    #[test]
    fn test_dominant_axis_by_velocity() {
        // Moved further horizontally but vertical velocity dominates.
        let s = fling((100.0, 100.0), (40.0, 80.0), (100.0, -300.0));
        assert_eq!(classify_default(s), Some(Direction::Up));
    }

    #[test]
    fn test_dominant_axis_without_travel_is_none() {
        // Horizontal velocity dominates but horizontal travel is tiny.
        let s = fling((100.0, 100.0), (95.0, 40.0), (400.0, 100.0));
        assert_eq!(classify_default(s), None);
    }

    #[test]
    fn test_boundary_is_exclusive() {
        // Exactly min_distance of travel.
        let s = fling((100.0, 100.0), (90.0, 100.0), (500.0, 0.0));
        assert_eq!(classify_default(s), None);
        // Exactly min_velocity.
        let s = fling((100.0, 100.0), (50.0, 100.0), (10.0, 0.0));
        assert_eq!(classify_default(s), None);
        // Just past both.
        let s = fling((100.0, 100.0), (89.5, 100.0), (10.5, 0.0));
        assert_eq!(classify_default(s), Some(Direction::Left));
    }

    #[test]
    fn test_velocity_tie_goes_vertical() {
        let s = fling((100.0, 100.0), (50.0, 100.0), (300.0, 300.0));
        // Vertical axis chosen, but no vertical travel.
        assert_eq!(classify_default(s), None);
        let s = fling((100.0, 100.0), (100.0, 150.0), (300.0, 300.0));
        assert_eq!(classify_default(s), Some(Direction::Down));
    }

    #[test]
    fn test_non_finite_is_none() {
        let s = fling((f32::NAN, 100.0), (50.0, 100.0), (-500.0, 0.0));
        assert_eq!(classify_default(s), None);
        let s = fling((100.0, 100.0), (f32::NEG_INFINITY, 100.0), (-500.0, 0.0));
        assert_eq!(classify_default(s), None);
        let s = fling((100.0, 100.0), (100.0, 150.0), (0.0, f32::INFINITY));
        assert_eq!(classify_default(s), None);
    }

    #[test]
    fn test_custom_thresholds() {
        let t = FlingThresholds {
            min_distance: 40.0,
            min_velocity: 10.0,
        };
        let s = fling((100.0, 100.0), (70.0, 100.0), (-500.0, 0.0));
        assert_eq!(classify(&s, &t), None);
        assert_eq!(classify(&s, &FlingThresholds::default()), Some(Direction::Left));
    }

    #[test]
    fn test_classify_is_deterministic() {
        let s = fling((12.0, 80.0), (60.0, 75.0), (900.0, -20.0));
        let first = classify_default(s);
        for _ in 0..10 {
            assert_eq!(classify_default(s), first);
        }
    }

    #[test]
    fn test_direction_names() {
        for d in Direction::ALL {
            assert_eq!(Direction::from_name(d.name()), Some(d));
        }
        assert_eq!(Direction::from_name("UP"), Some(Direction::Up));
        assert_eq!(Direction::from_name("diagonal"), None);
        assert_eq!(Direction::Down.index(), 4);
    }
}
