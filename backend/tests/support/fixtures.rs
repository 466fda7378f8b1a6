/// Wire form of the first seeded comic, in encoder key order.
pub const FANTASTIC_FOUR_1_JSON: &str = r#"{"title":"The Fantastic Four","issue":1,"writer":"Stan Lee","penciler":"Jack Kirby","inker":"George Klein","letterer":"Artie Simek","colorist":"Stan Goldberg"}"#;
