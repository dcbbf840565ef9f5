//! Demo flats written by `seedInitialData`.

use crate::record::Flat;

/// (condition, ranking, location, holder) of each demo flat, keyed "1".."10" in order.
const SEED: [(&str, &str, &str, &str); 10] = [
    ("923F", "1504054225", "67.0006, -70.5476", "Marjan"),
    ("M83T", "1504057825", "91.2395, -49.4594", "Som"),
    ("T012", "1493517025", "58.0148, 59.01391", "Helal"),
    ("P490", "1496105425", "-45.0945, 0.7949", "Jaman"),
    ("S439", "1493512301", "-107.6043, 19.5003", "Rafa"),
    ("J205", "1494117101", "-155.2304, -15.8723", "Shen"),
    ("S22L", "1496104301", "103.8842, 22.1277", "Leila"),
    ("EI89", "1485066691", "-132.3207, -34.0983", "Yuan"),
    ("129R", "1485153091", "153.0054, 12.6429", "Carlo"),
    ("49W4", "1487745091", "51.9435, 8.2735", "Fatima"),
];

/// The demo flats, in key order.
pub fn seed_flats() -> Vec<Flat> {
    SEED.iter()
        .map(|&(condition, ranking, location, holder)| {
            Flat::new(condition, ranking, location, holder)
        })
        .collect()
}
