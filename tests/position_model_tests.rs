use approx::assert_relative_eq;
use atelier_rs::carousel::{LayoutProfile, PositionModel};

#[test]
fn focused_card_sits_centered_and_lifted() {
    let model = PositionModel::new(LayoutProfile::full()).expect("valid profile");
    let style = model.style_for_offset(0.0);

    assert_relative_eq!(style.x, 0.0);
    assert_relative_eq!(style.y, -25.0);
    assert_relative_eq!(style.scale, 1.15);
    assert_relative_eq!(style.opacity, 1.0);
    assert_eq!(style.z_order, 20);
    assert_relative_eq!(style.tilt, 0.0);
}

#[test]
fn displacement_matches_the_summed_gap_series_at_integers() {
    for profile in [LayoutProfile::full(), LayoutProfile::minimized()] {
        let model = PositionModel::new(profile).expect("valid profile");
        let mut summed = 0.0;
        for step in 0..8_u32 {
            assert_relative_eq!(
                model.displacement(f64::from(step)),
                summed,
                epsilon = 1e-9
            );
            summed += profile.base_gap * profile.compression.powi(step as i32);
        }
    }
}

#[test]
fn layout_is_mirror_symmetric() {
    let model = PositionModel::new(LayoutProfile::full()).expect("valid profile");
    for offset in [0.3, 1.0, 1.7, 2.5, 4.0, 6.0] {
        let right = model.style_for_offset(offset);
        let left = model.style_for_offset(-offset);

        assert_relative_eq!(left.x, -right.x);
        assert_relative_eq!(left.y, right.y);
        assert_relative_eq!(left.scale, right.scale);
        assert_relative_eq!(left.opacity, right.opacity);
        assert_eq!(left.z_order, right.z_order);
        assert_relative_eq!(left.tilt, -right.tilt);
    }
}

#[test]
fn falloff_is_monotone_away_from_focus() {
    let model = PositionModel::new(LayoutProfile::full()).expect("valid profile");
    let offsets = [0.0, 0.5, 1.0, 1.5, 2.0, 3.0, 4.0, 5.0, 6.0];
    for pair in offsets.windows(2) {
        let near = model.style_for_offset(pair[0]);
        let far = model.style_for_offset(pair[1]);
        assert!(far.x > near.x, "x grows with offset");
        assert!(far.scale <= near.scale, "scale never grows with offset");
        assert!(far.opacity <= near.opacity, "opacity never grows");
        assert!(far.z_order <= near.z_order, "z order never grows");
    }
}

#[test]
fn scale_and_opacity_respect_their_floors() {
    let profile = LayoutProfile::full();
    let model = PositionModel::new(profile).expect("valid profile");
    let style = model.style_for_offset(40.0);
    assert_relative_eq!(style.scale, profile.min_scale);
    assert_relative_eq!(style.opacity, profile.min_opacity);
}

#[test]
fn compression_keeps_total_spread_bounded() {
    let profile = LayoutProfile::full();
    let model = PositionModel::new(profile).expect("valid profile");
    let limit = profile.base_gap / (1.0 - profile.compression);
    for offset in [1.0, 5.0, 20.0, 100.0] {
        assert!(model.displacement(offset) < limit);
    }
}

#[test]
fn projection_windows_clip_to_the_carousel() {
    let model = PositionModel::new(LayoutProfile::full()).expect("valid profile");

    // Mid-carousel: full window either side of the focus.
    let cards = model.project_window(50.0, 50, 200);
    assert_eq!(cards.len(), 13);
    assert_eq!(cards.first().map(|c| c.index), Some(44));
    assert_eq!(cards.last().map(|c| c.index), Some(56));

    // Near the left edge the window truncates instead of wrapping.
    let cards = model.project_window(1.0, 1, 200);
    assert_eq!(cards.first().map(|c| c.index), Some(0));
    assert_eq!(cards.last().map(|c| c.index), Some(7));

    // Near the right edge likewise.
    let cards = model.project_window(198.0, 198, 200);
    assert_eq!(cards.first().map(|c| c.index), Some(192));
    assert_eq!(cards.last().map(|c| c.index), Some(199));

    assert!(model.project_window(0.0, 0, 0).is_empty());
}

#[test]
fn offsets_are_measured_from_the_floating_index() {
    let model = PositionModel::new(LayoutProfile::minimized()).expect("valid profile");
    let cards = model.project_window(4.4, 4, 10);
    let focused = cards
        .iter()
        .find(|c| c.index == 4)
        .expect("focused slot projected");
    assert_relative_eq!(focused.offset, -0.4, epsilon = 1e-12);
}

#[test]
fn invalid_profiles_are_rejected() {
    let zero_gap = LayoutProfile {
        base_gap: 0.0,
        ..LayoutProfile::full()
    };
    assert!(PositionModel::new(zero_gap).is_err());

    let compression_of_one = LayoutProfile {
        compression: 1.0,
        ..LayoutProfile::full()
    };
    assert!(PositionModel::new(compression_of_one).is_err());

    let nan_scale = LayoutProfile {
        focused_scale: f64::NAN,
        ..LayoutProfile::full()
    };
    assert!(PositionModel::new(nan_scale).is_err());

    let empty_window = LayoutProfile {
        visible_range: 0,
        ..LayoutProfile::full()
    };
    assert!(PositionModel::new(empty_window).is_err());
}
