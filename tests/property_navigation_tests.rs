use atelier_rs::carousel::{CarouselTuning, NavigationController};
use atelier_rs::catalog::{Artwork, AspectRatio, YearIndex};
use proptest::prelude::*;

fn index_of_len(len: usize) -> YearIndex {
    let artworks: Vec<Artwork> = (0..len)
        .map(|i| Artwork {
            id: format!("a{i}"),
            title: format!("Work {i}"),
            year: Some(1900 + i as i32),
            circa: false,
            medium: "Oil".to_owned(),
            dimensions: "20 x 24 in".to_owned(),
            location: "sf".to_owned(),
            collection: String::new(),
            themes: Vec::new(),
            featured: false,
            display_color: "#445566".to_owned(),
            aspect_ratio: AspectRatio::Landscape,
            hero_for_location: None,
            hero_for_theme: None,
        })
        .collect();
    YearIndex::from_artworks(&artworks)
}

proptest! {
    #[test]
    fn go_to_index_always_lands_in_range_property(
        len in 1usize..200,
        target in -1_000i64..1_000,
        animated in any::<bool>()
    ) {
        let index = index_of_len(len);
        let mut nav = NavigationController::new(&index, 0, 60.0, CarouselTuning::default())
            .expect("controller init");

        nav.go_to_index(target, animated);
        let landed = nav.current_index().expect("non-empty carousel");
        prop_assert!(landed < len);
        prop_assert_eq!(landed as i64, target.clamp(0, len as i64 - 1));
    }

    #[test]
    fn reversed_drags_always_return_to_start_property(
        len in 2usize..100,
        start in 0usize..100,
        deltas in prop::collection::vec(-300i32..300, 1..40)
    ) {
        let index = index_of_len(len);
        let mut nav = NavigationController::new(&index, start, 60.0, CarouselTuning::default())
            .expect("controller init");
        let origin = nav.current_index().expect("non-empty carousel");

        nav.begin_drag();
        for delta in &deltas {
            nav.ingest_drag_delta(f64::from(*delta));
        }
        // Walking the same deltas back in reverse cancels the accumulator
        // exactly, whatever clamping happened along the way.
        for delta in deltas.iter().rev() {
            nav.ingest_drag_delta(f64::from(-delta));
        }
        nav.end_drag(0);

        prop_assert_eq!(nav.current_index(), Some(origin));
    }

    #[test]
    fn drag_never_escapes_the_carousel_property(
        len in 1usize..100,
        start in 0usize..100,
        deltas in prop::collection::vec(-5_000.0f64..5_000.0, 0..30)
    ) {
        let index = index_of_len(len);
        let mut nav = NavigationController::new(&index, start, 60.0, CarouselTuning::default())
            .expect("controller init");

        nav.begin_drag();
        for delta in deltas {
            nav.ingest_drag_delta(delta);
            let current = nav.current_index().expect("non-empty carousel");
            prop_assert!(current < len);
        }
    }

    #[test]
    fn scrubber_fractions_always_land_in_range_property(
        len in 1usize..100,
        fraction in -2.0f64..3.0
    ) {
        let index = index_of_len(len);
        let mut nav = NavigationController::new(&index, 0, 60.0, CarouselTuning::default())
            .expect("controller init");

        nav.begin_scrubber();
        nav.ingest_scrubber_fraction(fraction);
        let current = nav.current_index().expect("non-empty carousel");
        prop_assert!(current < len);

        let floating = nav.floating_index();
        prop_assert!((0.0..=(len as f64 - 1.0)).contains(&floating));
    }

    #[test]
    fn wheel_streams_stay_in_range_property(
        len in 1usize..50,
        deltas in prop::collection::vec(-200.0f64..200.0, 0..50)
    ) {
        let index = index_of_len(len);
        let mut nav = NavigationController::new(&index, len / 2, 60.0, CarouselTuning::default())
            .expect("controller init");

        for (step, delta) in deltas.into_iter().enumerate() {
            nav.ingest_wheel(delta, step as u64 * 150);
            let current = nav.current_index().expect("non-empty carousel");
            prop_assert!(current < len);
        }
    }

    #[test]
    fn nearest_year_is_never_beaten_property(
        years in prop::collection::btree_set(1800i32..2100, 1..40),
        probe in 1700i32..2200
    ) {
        let years: Vec<i32> = years.into_iter().collect();
        let index = index_of_years(&years);
        let nearest = index.nearest_year(probe).expect("non-empty index");

        let best = (nearest - probe).abs();
        for year in &years {
            let distance = (year - probe).abs();
            prop_assert!(best < distance
                || (best == distance && nearest <= *year),
                "nearest {nearest} beaten by {year} for probe {probe}");
        }
    }
}

fn index_of_years(years: &[i32]) -> YearIndex {
    let artworks: Vec<Artwork> = years
        .iter()
        .enumerate()
        .map(|(i, &year)| Artwork {
            id: format!("y{i}"),
            title: format!("Work {year}"),
            year: Some(year),
            circa: false,
            medium: "Oil".to_owned(),
            dimensions: "20 x 24 in".to_owned(),
            location: "sf".to_owned(),
            collection: String::new(),
            themes: Vec::new(),
            featured: false,
            display_color: "#445566".to_owned(),
            aspect_ratio: AspectRatio::Landscape,
            hero_for_location: None,
            hero_for_theme: None,
        })
        .collect();
    YearIndex::from_artworks(&artworks)
}
