use atelier_rs::catalog::{Artwork, AspectRatio, YearIndex, decade_of};

fn art(id: &str, year: Option<i32>, featured: bool) -> Artwork {
    Artwork {
        id: id.to_owned(),
        title: format!("Untitled {id}"),
        year,
        circa: false,
        medium: "Oil on canvas".to_owned(),
        dimensions: "24 x 36 in".to_owned(),
        location: "sf".to_owned(),
        collection: String::new(),
        themes: Vec::new(),
        featured,
        display_color: "#8a7b6c".to_owned(),
        aspect_ratio: AspectRatio::Portrait,
        hero_for_location: None,
        hero_for_theme: None,
    }
}

#[test]
fn groups_years_and_decades_with_featured_representative() {
    let artworks = vec![
        art("a", Some(1970), false),
        art("b", Some(1970), false),
        art("c", Some(1985), true),
        art("d", Some(1985), false),
    ];
    let index = YearIndex::from_artworks(&artworks);

    assert_eq!(index.years(), &[1970, 1985]);
    assert_eq!(index.len(), 2);

    let decades = index.decades();
    assert_eq!(decades.len(), 2);
    assert_eq!(decades[0].decade, 1970);
    assert_eq!(decades[0].years, vec![1970]);
    assert_eq!(decades[1].decade, 1980);
    assert_eq!(decades[1].years, vec![1985]);

    assert_eq!(index.representative(1985).expect("1985 bucket").id, "c");
    assert_eq!(index.representative(1970).expect("1970 bucket").id, "a");
}

#[test]
fn undated_artworks_are_excluded_everywhere() {
    let artworks = vec![art("a", None, true), art("b", Some(1962), false)];
    let index = YearIndex::from_artworks(&artworks);

    assert_eq!(index.years(), &[1962]);
    assert!(index.artworks_for_year(1962).iter().all(|a| a.id == "b"));
    assert!(index.representative(1962).is_some());
}

#[test]
fn years_sort_ascending_regardless_of_input_order() {
    let artworks = vec![
        art("late", Some(1999), false),
        art("early", Some(1958), false),
        art("mid", Some(1973), false),
    ];
    let index = YearIndex::from_artworks(&artworks);
    assert_eq!(index.years(), &[1958, 1973, 1999]);
    assert_eq!(index.index_of_year(1973), Some(1));
    assert_eq!(index.year_at(2), Some(1999));
}

#[test]
fn empty_input_yields_empty_outputs() {
    let index = YearIndex::from_artworks(&[]);
    assert!(index.is_empty());
    assert!(index.years().is_empty());
    assert!(index.decades().is_empty());
    assert!(index.representative(1970).is_none());
    assert!(index.nearest_year(1970).is_none());
    assert!(index.artworks_for_year(1970).is_empty());
}

#[test]
fn bucket_order_follows_catalog_order() {
    let artworks = vec![
        art("first", Some(1970), false),
        art("second", Some(1970), false),
        art("third", Some(1970), false),
    ];
    let index = YearIndex::from_artworks(&artworks);
    let ids: Vec<&str> = index
        .artworks_for_year(1970)
        .iter()
        .map(|a| a.id.as_str())
        .collect();
    assert_eq!(ids, vec!["first", "second", "third"]);
}

#[test]
fn nearest_year_resolves_ties_to_the_earlier_year() {
    let artworks = vec![art("a", Some(1970), false), art("b", Some(1980), false)];
    let index = YearIndex::from_artworks(&artworks);

    assert_eq!(index.nearest_year(1975), Some(1970));
    assert_eq!(index.nearest_year(1976), Some(1980));
    assert_eq!(index.nearest_year(1900), Some(1970));
    assert_eq!(index.nearest_year(2024), Some(1980));
    assert_eq!(index.nearest_year(1970), Some(1970));
}

#[test]
fn first_year_of_decade_is_the_earliest_member() {
    let artworks = vec![
        art("a", Some(1978), false),
        art("b", Some(1973), false),
        art("c", Some(1985), false),
    ];
    let index = YearIndex::from_artworks(&artworks);
    assert_eq!(index.first_year_of_decade(1970), Some(1973));
    assert_eq!(index.first_year_of_decade(1980), Some(1985));
    assert_eq!(index.first_year_of_decade(1990), None);
}

#[test]
fn decade_of_uses_floor_division() {
    assert_eq!(decade_of(1979), 1970);
    assert_eq!(decade_of(1980), 1980);
    assert_eq!(decade_of(2003), 2000);
    assert_eq!(decade_of(-5), -10);
}
