use comicsdb::models::Comic;

/// A fully populated comic distinct from the seed fixtures.
pub fn sample_comic() -> Comic {
    Comic {
        title: "The Amazing Spider-Man".to_string(),
        issue: 129,
        writer: "Gerry Conway".to_string(),
        penciler: "Ross Andru".to_string(),
        inker: "Frank Giacoia".to_string(),
        letterer: "John Costanza".to_string(),
        colorist: "Dave Hunt".to_string(),
    }
}
