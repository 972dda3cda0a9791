//! Built-in sample corpus
//!
//! Stands in for a real feed. A CSV or database loader would produce the
//! same `DocumentStore` and slot in here without touching the engine.

use crate::store::DocumentStore;

/// The three sample news items the service ships with
pub fn sample_corpus() -> DocumentStore {
    let mut store = DocumentStore::new();

    store.insert(
        "Covid Cases Surge in Maharashtra Again, State Records Over 4,000 Cases in 24 Hrs, Mumbai More than 600",
        "The state last recorded 4,000-plus cases (4,382) on January 6 and the city recorded (607) daily cases on January 14, exactly a month ago.",
    );

    store.insert(
        "Activist Arrested for Greta man Thunberg 'Toolkit' Was Working With Pro-Khalistani Group: Delhi Police",
        "According to officials, Ravi is 21 years old and lives in Bengaluru. She was active in allegedly disseminating the toolkit, which Thunberg had referred to in her post for the farmers and attached a Google document with details.",
    );

    store.insert(
        "PM Modi's Photo, Bhagwad Gita & Names of toolkit 25,000 Citizens: Pvt Satellite to be Launched by Feb-End",
        "The nanosatellite according has been many developed by SpaceKidz India, an organisation dedicated to promoting space science among students.",
    );

    store
}
