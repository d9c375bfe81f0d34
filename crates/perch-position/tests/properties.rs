//! Property tests for the positioning pipeline.

use perch_core::{Placement, Rect, Side, Viewport};
use perch_position::{compute_position, placed_coords, PositionOptions};
use proptest::prelude::*;

fn arb_placement() -> impl Strategy<Value = Placement> {
    (0usize..Placement::ALL.len()).prop_map(|i| Placement::ALL[i])
}

fn arb_rect() -> impl Strategy<Value = Rect> {
    (-500.0f64..1500.0, -500.0f64..1500.0, 0.0f64..400.0, 0.0f64..400.0)
        .prop_map(|(x, y, w, h)| Rect::new(x, y, w, h))
}

fn arb_size() -> impl Strategy<Value = Rect> {
    (0.0f64..300.0, 0.0f64..300.0).prop_map(|(w, h)| Rect::from_size(w, h))
}

fn arb_viewport() -> impl Strategy<Value = Viewport> {
    (320.0f64..2000.0, 240.0f64..1200.0).prop_map(|(w, h)| Viewport::new(w, h))
}

fn arb_options() -> impl Strategy<Value = PositionOptions> {
    (arb_placement(), -20.0f64..40.0, 0.0f64..24.0, any::<bool>(), any::<bool>()).prop_map(
        |(placement, offset, padding, flip, shift)| PositionOptions {
            placement,
            offset,
            padding,
            flip,
            shift,
        },
    )
}

/// Signed gap between the reference and the floating element on the main axis.
fn separation(reference: &Rect, floating: &Rect, side: Side, x: f64, y: f64) -> f64 {
    match side {
        Side::Top => reference.top - (y + floating.height),
        Side::Bottom => y - reference.bottom,
        Side::Left => reference.left - (x + floating.width),
        Side::Right => x - reference.right,
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn prop_offset_moves_main_axis_by_exactly_delta(
        reference in arb_rect(),
        floating in arb_size(),
        placement in arb_placement(),
        offset in -50.0f64..50.0,
        delta in -50.0f64..50.0,
    ) {
        let viewport = Viewport::new(1000.0, 1000.0);
        let base = PositionOptions::new(placement).with_flip(false).with_shift(false);

        let a = compute_position(&reference, &floating, viewport, &base.with_offset(offset));
        let b = compute_position(&reference, &floating, viewport, &base.with_offset(offset + delta));

        let gap_a = separation(&reference, &floating, placement.side, a.x, a.y);
        let gap_b = separation(&reference, &floating, placement.side, b.x, b.y);
        prop_assert!((gap_a - offset).abs() < 1e-9);
        prop_assert!((gap_b - gap_a - delta).abs() < 1e-9);
    }

    #[test]
    fn prop_flip_is_noop_without_overflow(
        rx in 400.0f64..600.0,
        ry in 400.0f64..600.0,
        size in 0.0f64..100.0,
        floating in (0.0f64..100.0, 0.0f64..100.0),
        placement in arb_placement(),
        offset in 0.0f64..20.0,
    ) {
        // Every candidate stays well inside a 1200x1200 viewport.
        let reference = Rect::new(rx, ry, size, size);
        let floating = Rect::from_size(floating.0, floating.1);
        let viewport = Viewport::new(1200.0, 1200.0);
        let options = PositionOptions::new(placement).with_offset(offset).with_shift(false);

        let flipped = compute_position(&reference, &floating, viewport, &options);
        let plain = compute_position(&reference, &floating, viewport, &options.with_flip(false));
        prop_assert_eq!(flipped, plain);
    }

    #[test]
    fn prop_shift_keeps_cross_axis_inside_padding(
        reference in arb_rect(),
        floating in arb_size(),
        viewport in arb_viewport(),
        options in arb_options(),
    ) {
        let options = options.with_shift(true);
        let result = compute_position(&reference, &floating, viewport, &options);

        let (start, extent, limit) = if result.placement.side.is_vertical() {
            (result.x, floating.width, viewport.width)
        } else {
            (result.y, floating.height, viewport.height)
        };
        prop_assume!(extent <= limit - 2.0 * options.padding);

        prop_assert!(start >= options.padding - 1e-9);
        prop_assert!(start + extent <= limit - options.padding + 1e-9);
    }

    #[test]
    fn prop_main_axis_matches_resolved_placement(
        reference in arb_rect(),
        floating in arb_size(),
        viewport in arb_viewport(),
        options in arb_options(),
    ) {
        let result = compute_position(&reference, &floating, viewport, &options);
        let expected = placed_coords(&reference, &floating, result.placement, options.offset);

        if result.placement.side.is_vertical() {
            prop_assert_eq!(result.y, expected.y);
        } else {
            prop_assert_eq!(result.x, expected.x);
        }
        prop_assert_eq!(result.placement.side.is_vertical(), options.placement.side.is_vertical());
    }

    #[test]
    fn prop_deterministic(
        reference in arb_rect(),
        floating in arb_size(),
        viewport in arb_viewport(),
        options in arb_options(),
    ) {
        let first = compute_position(&reference, &floating, viewport, &options);
        let second = compute_position(&reference, &floating, viewport, &options);
        prop_assert_eq!(first.x.to_bits(), second.x.to_bits());
        prop_assert_eq!(first.y.to_bits(), second.y.to_bits());
        prop_assert_eq!(first.placement, second.placement);
    }

    #[test]
    fn prop_unflipped_placement_echoes_request(
        reference in arb_rect(),
        floating in arb_size(),
        viewport in arb_viewport(),
        options in arb_options(),
    ) {
        let options = options.with_flip(false);
        let result = compute_position(&reference, &floating, viewport, &options);
        prop_assert_eq!(result.placement, options.placement);
        prop_assert!(result.x.is_finite() && result.y.is_finite());
    }
}

#[test]
fn test_alignment_flip_preserves_offset_main_axis() {
    let reference = Rect::new(900.0, 100.0, 60.0, 20.0);
    let floating = Rect::from_size(120.0, 40.0);
    let options = PositionOptions::new("bottom-start".parse().unwrap())
        .with_offset(6.0)
        .with_shift(false);

    let result = compute_position(&reference, &floating, Viewport::new(1000.0, 800.0), &options);
    assert_eq!(result.placement.to_string(), "bottom-end");
    assert_eq!(result.y, 126.0);
    assert_eq!(result.x, 840.0);
}
