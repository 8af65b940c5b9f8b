//! Safety rating display: the ten-glyph gauge and its color tag.
//!
//! The gauge scales a locality's rate against the table-wide maximum; the
//! color tag classifies the absolute rate. Thresholds are fixed by the map
//! frontend, not configuration.

/// Scale used when the table is empty or its maximum rate is zero.
pub const DEFAULT_MAX_RATING: f64 = 500.0;

/// Rates at or below this are tagged "green".
const GREEN_MAX_RATE: f64 = 200.0;
/// Rates at or below this (and above the green threshold) are tagged
/// "orange".
const ORANGE_MAX_RATE: f64 = 320.0;

const BAR_WIDTH: usize = 10;
const FILLED_GLYPH: char = '█';
const EMPTY_GLYPH: char = '-';

/// Renders the ten-glyph gauge for a rate scaled against `max_rating`.
#[must_use]
pub fn bar(rate: f64, max_rating: f64) -> String {
    let filled = filled_count(rate, max_rating);

    let mut bar = String::with_capacity(BAR_WIDTH * FILLED_GLYPH.len_utf8());
    for _ in 0..filled {
        bar.push(FILLED_GLYPH);
    }
    for _ in filled..BAR_WIDTH {
        bar.push(EMPTY_GLYPH);
    }
    bar
}

/// Number of filled glyphs: `floor(rate / max * 10)` clamped to `[0, 10]`.
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::cast_possible_wrap
)]
fn filled_count(rate: f64, max_rating: f64) -> usize {
    if max_rating <= 0.0 {
        return 0;
    }
    let filled = ((rate / max_rating) * BAR_WIDTH as f64) as i64;
    usize::try_from(filled.clamp(0, BAR_WIDTH as i64)).unwrap_or(0)
}

/// Classifies a rate into its display color tag.
#[must_use]
pub fn bar_color(rate: f64) -> &'static str {
    if rate <= GREEN_MAX_RATE {
        "green"
    } else if rate <= ORANGE_MAX_RATE {
        "orange"
    } else {
        "red"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bar_is_always_ten_glyphs() {
        for rate in [-50.0, 0.0, 150.0, 500.0, 900.0] {
            let bar = bar(rate, DEFAULT_MAX_RATING);
            assert_eq!(bar.chars().count(), 10, "rate {rate}");
            assert!(bar.chars().all(|c| c == '█' || c == '-'), "rate {rate}");
        }
    }

    #[test]
    fn filled_count_scales_against_max() {
        assert_eq!(filled_count(0.0, 500.0), 0);
        assert_eq!(filled_count(150.0, 500.0), 3);
        assert_eq!(filled_count(250.0, 500.0), 5);
        assert_eq!(filled_count(500.0, 500.0), 10);
    }

    #[test]
    fn filled_count_truncates_not_rounds() {
        // 199 / 500 * 10 = 3.98 -> 3
        assert_eq!(filled_count(199.0, 500.0), 3);
    }

    #[test]
    fn filled_count_clamps_out_of_range_rates() {
        assert_eq!(filled_count(-50.0, 500.0), 0);
        assert_eq!(filled_count(900.0, 500.0), 10);
    }

    #[test]
    fn filled_count_is_monotone_for_fixed_max() {
        let mut previous = 0;
        for rate in (0..=600).step_by(10) {
            let filled = filled_count(f64::from(rate), DEFAULT_MAX_RATING);
            assert!(filled >= previous, "rate {rate}");
            previous = filled;
        }
    }

    #[test]
    fn zero_max_rating_renders_an_empty_gauge() {
        assert_eq!(bar(150.0, 0.0), "----------");
    }

    #[test]
    fn color_thresholds_are_inclusive() {
        assert_eq!(bar_color(0.0), "green");
        assert_eq!(bar_color(200.0), "green");
        assert_eq!(bar_color(200.1), "orange");
        assert_eq!(bar_color(320.0), "orange");
        assert_eq!(bar_color(320.1), "red");
        assert_eq!(bar_color(1000.0), "red");
    }
}
