use atelier_rs::carousel::{CarouselTuning, NavigationController};
use atelier_rs::catalog::{Artwork, AspectRatio, YearIndex};
use atelier_rs::interaction::WheelConfig;

fn index_of_years(years: &[i32]) -> YearIndex {
    let artworks: Vec<Artwork> = years
        .iter()
        .enumerate()
        .map(|(i, &year)| Artwork {
            id: format!("a{i}"),
            title: format!("Work {year}"),
            year: Some(year),
            circa: false,
            medium: "Watercolor".to_owned(),
            dimensions: "9 x 12 in".to_owned(),
            location: "sf".to_owned(),
            collection: String::new(),
            themes: Vec::new(),
            featured: false,
            display_color: "#445566".to_owned(),
            aspect_ratio: AspectRatio::Portrait,
            hero_for_location: None,
            hero_for_theme: None,
        })
        .collect();
    YearIndex::from_artworks(&artworks)
}

fn controller() -> NavigationController {
    let years: Vec<i32> = (1970..1980).collect();
    let mut nav =
        NavigationController::new(&index_of_years(&years), 0, 60.0, CarouselTuning::default())
            .expect("controller init");
    nav.go_to_index(5, false);
    nav
}

#[test]
fn wheel_steps_one_slot_per_gesture() {
    let mut nav = controller();

    assert!(nav.ingest_wheel(120.0, 0));
    assert_eq!(nav.current_index(), Some(6));

    // Momentum events inside the cooldown window are swallowed.
    assert!(!nav.ingest_wheel(90.0, 30));
    assert!(!nav.ingest_wheel(60.0, 80));
    assert_eq!(nav.current_index(), Some(6));

    assert!(nav.ingest_wheel(120.0, 200));
    assert_eq!(nav.current_index(), Some(7));
}

#[test]
fn wheel_direction_follows_delta_sign() {
    let mut nav = controller();
    assert!(nav.ingest_wheel(-120.0, 0));
    assert_eq!(nav.current_index(), Some(4));
    assert!(nav.ingest_wheel(120.0, 500));
    assert_eq!(nav.current_index(), Some(5));
}

#[test]
fn small_deltas_stay_below_the_step_threshold() {
    let mut nav = controller();
    assert!(!nav.ingest_wheel(5.0, 0));
    assert!(!nav.ingest_wheel(-10.0, 100));
    assert!(!nav.ingest_wheel(0.0, 200));
    assert_eq!(nav.current_index(), Some(5));
}

#[test]
fn non_finite_deltas_are_ignored() {
    let mut nav = controller();
    assert!(!nav.ingest_wheel(f64::NAN, 0));
    assert!(!nav.ingest_wheel(f64::INFINITY, 100));
    assert_eq!(nav.current_index(), Some(5));
}

#[test]
fn custom_cooldown_changes_the_gate_width() {
    let years: Vec<i32> = (1970..1980).collect();
    let tuning = CarouselTuning {
        wheel: WheelConfig {
            step_threshold: 10.0,
            cooldown_ms: 400,
        },
        ..CarouselTuning::default()
    };
    let mut nav = NavigationController::new(&index_of_years(&years), 5, 60.0, tuning)
        .expect("controller init");

    assert!(nav.ingest_wheel(120.0, 0));
    assert!(!nav.ingest_wheel(120.0, 300));
    assert!(nav.ingest_wheel(120.0, 450));
    assert_eq!(nav.current_index(), Some(7));
}

#[test]
fn invalid_wheel_threshold_is_rejected_at_construction() {
    let years: Vec<i32> = (1970..1980).collect();
    let tuning = CarouselTuning {
        wheel: WheelConfig {
            step_threshold: f64::NAN,
            cooldown_ms: 100,
        },
        ..CarouselTuning::default()
    };
    let err = NavigationController::new(&index_of_years(&years), 0, 60.0, tuning)
        .expect_err("nan threshold must fail");
    assert!(matches!(err, atelier_rs::ArchiveError::InvalidData(_)));
}
