//! Grid arithmetic for the project card wall.
//!
//! The card grid reflows with the window: wide enough for three cards
//! shows three columns, a narrow window falls back to a single column.
//! The math lives here so it can be tested without a UI context.

/// Number of grid columns that fit in `available` points.
///
/// A column costs `min_card` points plus one `gap` between neighbours,
/// so `n` columns fit when `n * min_card + (n - 1) * gap <= available`.
/// The result is clamped to `1..=max_columns`; degenerate widths
/// (zero, negative, non-finite) collapse to a single column.
#[must_use]
pub fn columns_for_width(available: f32, min_card: f32, gap: f32, max_columns: usize) -> usize {
    let max_columns = max_columns.max(1);
    if !available.is_finite() || available <= 0.0 {
        return 1;
    }
    let gap = gap.max(0.0);
    let per_column = min_card.max(1.0) + gap;
    let fit = ((available + gap) / per_column).floor() as usize;
    fit.clamp(1, max_columns)
}

/// Rows needed to place `count` items across `columns` columns.
#[must_use]
pub fn rows_for(count: usize, columns: usize) -> usize {
    count.div_ceil(columns.max(1))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    const MIN_CARD: f32 = 280.0;
    const GAP: f32 = 16.0;

    #[test]
    fn narrow_window_gets_one_column() {
        assert_eq!(columns_for_width(320.0, MIN_CARD, GAP, 3), 1);
    }

    #[test]
    fn column_count_steps_exactly_at_the_fit_threshold() {
        // Two cards plus one gap need 2 * 280 + 16 = 576 points.
        assert_eq!(columns_for_width(575.0, MIN_CARD, GAP, 3), 1);
        assert_eq!(columns_for_width(576.0, MIN_CARD, GAP, 3), 2);
        // Three cards plus two gaps need 3 * 280 + 2 * 16 = 872 points.
        assert_eq!(columns_for_width(871.0, MIN_CARD, GAP, 3), 2);
        assert_eq!(columns_for_width(872.0, MIN_CARD, GAP, 3), 3);
    }

    #[test]
    fn wide_window_is_clamped_to_max_columns() {
        assert_eq!(columns_for_width(10_000.0, MIN_CARD, GAP, 3), 3);
    }

    #[test]
    fn degenerate_widths_still_yield_one_column() {
        assert_eq!(columns_for_width(0.0, MIN_CARD, GAP, 3), 1);
        assert_eq!(columns_for_width(-50.0, MIN_CARD, GAP, 3), 1);
        assert_eq!(columns_for_width(f32::NAN, MIN_CARD, GAP, 3), 1);
        assert_eq!(columns_for_width(f32::INFINITY, MIN_CARD, GAP, 3), 1);
    }

    #[test]
    fn zero_max_columns_is_treated_as_one() {
        assert_eq!(columns_for_width(10_000.0, MIN_CARD, GAP, 0), 1);
    }

    #[test]
    fn rows_cover_every_card() {
        for count in 0..20 {
            for columns in 1..=4 {
                let rows = rows_for(count, columns);
                assert!(rows * columns >= count);
                if count > 0 {
                    assert!((rows - 1) * columns < count);
                } else {
                    assert_eq!(rows, 0);
                }
            }
        }
    }
}
