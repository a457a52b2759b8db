mod fixtures;

use fixtures::{discography, release, seeded, Release, ReleaseKey};
use queryable_rust::{Queryable, SortDescriptor};

#[test]
fn single_key_ascending() {
    let context = seeded(&discography());
    let by_year = Release::fetch_all(&context, None, (ReleaseKey::Year, true), 0).unwrap();
    let years: Vec<u64> = by_year.iter().map(|r| r.year).collect();
    assert_eq!(years, vec![2001, 2002, 2003, 2005, 2006]);
}

#[test]
fn single_key_descending() {
    let context = seeded(&discography());
    let by_year = Release::fetch_all(&context, None, (ReleaseKey::Year, false), 0).unwrap();
    let years: Vec<u64> = by_year.iter().map(|r| r.year).collect();
    assert_eq!(years, vec![2006, 2005, 2003, 2002, 2001]);
}

#[test]
fn ties_break_by_the_second_key() {
    let context = seeded(&discography());
    let sorted = Release::fetch_all(
        &context,
        None,
        vec![(ReleaseKey::Artist, true), (ReleaseKey::Year, false)],
        0,
    )
    .unwrap();
    assert_eq!(
        sorted,
        vec![
            release("Borknagar", "Origin", 2006),
            release("Borknagar", "Empiricism", 2001),
            release("Opeth", "Ghost Reveries", 2005),
            release("Opeth", "Damnation", 2003),
            release("Opeth", "Deliverance", 2002),
        ]
    );
}

#[test]
fn equal_keys_preserve_storage_order() {
    let context = seeded(&discography());
    let sorted = Release::fetch_all(&context, None, (ReleaseKey::Artist, true), 0).unwrap();
    let titles: Vec<&str> = sorted.iter().map(|r| r.title.as_str()).collect();
    // Within each artist, storage order survives the stable sort
    assert_eq!(
        titles,
        vec![
            "Empiricism",
            "Origin",
            "Damnation",
            "Deliverance",
            "Ghost Reveries",
        ]
    );
}

#[test]
fn the_three_sort_shapes_agree() {
    let context = seeded(&discography());

    let by_pair = Release::fetch_all(&context, None, (ReleaseKey::Title, true), 0).unwrap();
    let by_sequence =
        Release::fetch_all(&context, None, vec![(ReleaseKey::Title, true)], 0).unwrap();
    let by_descriptors =
        Release::fetch_all(&context, None, vec![SortDescriptor::new("title", true)], 0).unwrap();

    assert_eq!(by_pair, by_sequence);
    assert_eq!(by_sequence, by_descriptors);
}

#[test]
fn derived_keys_snake_case_and_honor_renames() {
    use queryable_rust::{InMemoryContext, Record, SortKey};
    use serde::{Deserialize, Serialize};

    #[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
    struct Session {
        started_at: u64,
        len_seconds: u64,
    }

    #[derive(Clone, Copy, SortKey)]
    enum SessionKey {
        StartedAt,
        #[sort_key(rename = "len_seconds")]
        Length,
    }

    impl Record for Session {
        const ENTITY: &'static str = "sessions";
        type Key = SessionKey;
    }

    assert_eq!(SessionKey::StartedAt.key(), "started_at");
    assert_eq!(SessionKey::Length.key(), "len_seconds");

    let context = InMemoryContext::new();
    for (started_at, len_seconds) in [(10, 300), (20, 60), (30, 1800)] {
        context
            .stage(&Session {
                started_at,
                len_seconds,
            })
            .unwrap();
    }

    let longest_first =
        Session::fetch_all(&context, None, (SessionKey::Length, false), 0).unwrap();
    let lengths: Vec<u64> = longest_first.iter().map(|s| s.len_seconds).collect();
    assert_eq!(lengths, vec![1800, 300, 60]);
}

#[test]
fn array_shape_matches_vector_shape() {
    let context = seeded(&discography());

    let by_array = Release::fetch_all(
        &context,
        None,
        [(ReleaseKey::Artist, true), (ReleaseKey::Year, false)],
        0,
    )
    .unwrap();
    let by_vector = Release::fetch_all(
        &context,
        None,
        vec![(ReleaseKey::Artist, true), (ReleaseKey::Year, false)],
        0,
    )
    .unwrap();

    assert_eq!(by_array, by_vector);
}
