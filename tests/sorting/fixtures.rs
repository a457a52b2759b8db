use queryable_rust::{InMemoryContext, Record, SortKey};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Release {
    pub artist: String,
    pub title: String,
    pub year: u64,
}

#[derive(Clone, Copy, SortKey)]
pub enum ReleaseKey {
    Artist,
    Title,
    Year,
}

impl Record for Release {
    const ENTITY: &'static str = "releases";
    type Key = ReleaseKey;
}

pub fn release(artist: &str, title: &str, year: u64) -> Release {
    Release {
        artist: artist.into(),
        title: title.into(),
        year,
    }
}

/// Duplicate artist values with distinct years, for tie-break checks.
pub fn discography() -> Vec<Release> {
    vec![
        release("Opeth", "Damnation", 2003),
        release("Borknagar", "Empiricism", 2001),
        release("Opeth", "Deliverance", 2002),
        release("Borknagar", "Origin", 2006),
        release("Opeth", "Ghost Reveries", 2005),
    ]
}

pub fn seeded(releases: &[Release]) -> InMemoryContext {
    let context = InMemoryContext::new();
    for release in releases {
        context.stage(release).unwrap();
    }
    context
}
