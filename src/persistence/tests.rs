// Copyright 2025 Cowboy AI, LLC.

//! Tests for the persistence layer

#[cfg(test)]
mod persistence_tests {
    use crate::{
        persistence::*, AggregateRoot, DomainError, Entity, FieldAccessors, Operator, Queryable,
        QueryBuilder, UuidIdentity,
    };
    use std::sync::OnceLock;
    use tokio_test::block_on;

    #[derive(Debug, Clone, Copy)]
    struct NoteMarker;

    type NoteId = UuidIdentity<NoteMarker>;

    #[derive(Debug, Clone, PartialEq)]
    struct Note {
        id: NoteId,
        title: String,
        pinned: bool,
    }

    impl Note {
        fn new(title: &str) -> Self {
            Self {
                id: NoteId::generate(),
                title: title.to_string(),
                pinned: false,
            }
        }
    }

    impl Queryable for Note {
        fn accessors() -> &'static FieldAccessors<Self> {
            static ACCESSORS: OnceLock<FieldAccessors<Note>> = OnceLock::new();
            ACCESSORS.get_or_init(|| {
                FieldAccessors::new()
                    .field("id", |n: &Note| (&n.id).into())
                    .field("title", |n: &Note| (&n.title).into())
                    .field("pinned", |n: &Note| n.pinned.into())
            })
        }
    }

    impl Entity for Note {
        type Id = NoteId;

        fn id(&self) -> &Self::Id {
            &self.id
        }
    }

    impl AggregateRoot for Note {}

    #[test]
    fn test_save_stores_a_copy() {
        let repo: InMemoryRepository<Note> = InMemoryRepository::new();
        let mut note = Note::new("groceries");

        block_on(repo.save(&note)).unwrap();
        note.title = "changed after save".to_string();

        let stored = block_on(repo.get(&note.id)).unwrap();
        assert_eq!(stored.title, "groceries");
    }

    #[test]
    fn test_save_replaces_in_place() {
        let first = Note::new("first");
        let second = Note::new("second");
        let repo = InMemoryRepository::with_aggregates([first.clone(), second.clone()]);

        let mut edited = first.clone();
        edited.pinned = true;
        block_on(repo.save(&edited)).unwrap();

        let all = block_on(repo.all(QueryOptions::new())).unwrap();
        assert_eq!(all.items, vec![edited, second]);
        assert_eq!(block_on(repo.len()), 2);
    }

    #[test]
    fn test_missing_identity_is_not_found() {
        let repo: InMemoryRepository<Note> = InMemoryRepository::new();
        let id = NoteId::generate();

        let err = block_on(repo.get(&id)).unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(
            err,
            DomainError::EntityNotFound {
                entity_type: "Note".to_string(),
                id: id.to_string(),
            }
        );
        assert!(block_on(repo.delete(&id)).unwrap_err().is_not_found());
        assert!(!block_on(repo.exists(&id)).unwrap());
    }

    #[test]
    fn test_delete_keeps_remaining_order() {
        let notes: Vec<Note> = ["a", "b", "c"].into_iter().map(Note::new).collect();
        let repo = InMemoryRepository::with_aggregates(notes.clone());

        block_on(repo.delete(&notes[1].id)).unwrap();

        let titles: Vec<String> = block_on(repo.all(QueryOptions::new()))
            .unwrap()
            .into_iter()
            .map(|n| n.title)
            .collect();
        assert_eq!(titles, vec!["a", "c"]);
    }

    #[test]
    fn test_find_filters_then_paginates() {
        let mut notes: Vec<Note> = (0..5).map(|i| Note::new(&format!("note {i}"))).collect();
        for note in notes.iter_mut().step_by(2) {
            note.pinned = true;
        }
        let repo = InMemoryRepository::with_aggregates(notes);
        let query = QueryBuilder::new().eq("pinned", true);

        let page = block_on(repo.find(&query, QueryOptions::new().skip(1).limit(1))).unwrap();
        assert_eq!(page.total_count, 3);
        assert!(page.has_more);
        assert_eq!(page.items[0].title, "note 2");
    }

    #[test]
    fn test_find_propagates_invalid_operator() {
        let repo = InMemoryRepository::with_aggregates([Note::new("x")]);
        let query = QueryBuilder::new().op("title", Operator::from("startsWith"), "x");

        let err = block_on(repo.find(&query, QueryOptions::new())).unwrap_err();
        assert_eq!(err.to_string(), "Invalid operator 'startsWith'");
    }

    #[test]
    fn test_clones_share_storage() {
        let repo: InMemoryRepository<Note> = InMemoryRepository::new();
        let other = repo.clone();
        let note = Note::new("shared");

        block_on(other.save(&note)).unwrap();
        assert!(block_on(repo.exists(&note.id)).unwrap());
    }
}
