//! Fixture records loaded into the catalog at startup.

use crate::models::Comic;

fn fantastic_four(issue: i32, inker: &str) -> Comic {
    Comic {
        title: "The Fantastic Four".to_string(),
        issue,
        writer: "Stan Lee".to_string(),
        penciler: "Jack Kirby".to_string(),
        inker: inker.to_string(),
        letterer: "Artie Simek".to_string(),
        colorist: "Stan Goldberg".to_string(),
    }
}

/// The two seed comics, in index order.
pub fn fixture_comics() -> Vec<Comic> {
    vec![fantastic_four(1, "George Klein"), fantastic_four(3, "Sol Brodsky")]
}
