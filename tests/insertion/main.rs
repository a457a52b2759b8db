
use fixtures::{Draft, DraftKey};
use queryable_rust::{InMemoryContext, Queryable};

#[test]
fn insert_new_returns_a_default_valued_record() {
    let context = InMemoryContext::new();
    let draft = Draft::insert_new(&context).unwrap();
    assert_eq!(draft, Draft::default());
}

#[test]
fn insert_new_is_visible_in_the_same_context() {
    let context = InMemoryContext::new();
    let draft = Draft::insert_new(&context).unwrap();

    let all = Draft::fetch_all(&context, None, (), 0).unwrap();
    assert_eq!(all, vec![draft]);
}

#[test]
fn each_insert_registers_another_record() {
    let context = InMemoryContext::new();
    for expected in 1..=3usize {
        Draft::insert_new(&context).unwrap();
        assert_eq!(Draft::count(&context, None).unwrap(), expected);
    }
}

#[test]
fn caller_mutations_stay_on_the_callers_copy() {
    let context = InMemoryContext::new();
    let mut draft = Draft::insert_new(&context).unwrap();
    draft.title = "On Sorting".into();
    draft.revision = 7;

    // The registered record is the default-valued one; the mutated copy is
    // the caller's until the host's persistence flow stores it.
    let stored = Draft::fetch_one(
        &context,
        None,
        [(DraftKey::Revision, false), (DraftKey::Title, true)],
    )
    .unwrap()
    .unwrap();
    assert_eq!(stored, Draft::default());
}

#[test]
fn entity_description_names_the_entity_and_attributes() {
    let context = InMemoryContext::new();
    let description = Draft::entity_description(&context).unwrap();
    assert_eq!(description.name, "drafts");
    assert_eq!(description.attributes, vec!["body", "revision", "title"]);
}
