//! Controller Tests
//!
//! Operations drive `ContactState` and execute its `Pending` writes the same
//! way `PhonebookContext` does, against a local repository over an in-memory
//! slot or against a repository whose every call fails.

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use async_trait::async_trait;

    use crate::controller::mutation::{Applied, Mutation, Origin, Settled};
    use crate::controller::state::DialogMode;
    use crate::controller::{ContactState, Pending};
    use crate::domain::{Contact, ContactFields, ContactId, DomainError, DomainResult, Field, REQUIRED};
    use crate::repository::{IdAllocation, LocalContactRepository, MemorySlot, Repository, Slot};

    /// Backing store that is always unreachable
    struct FailingRepository;

    #[async_trait(?Send)]
    impl Repository<Contact> for FailingRepository {
        async fn create(&self, _entity: &Contact) -> DomainResult<Contact> {
            Err(DomainError::StoreWrite("connection refused".to_string()))
        }

        async fn list(&self) -> DomainResult<Vec<Contact>> {
            Err(DomainError::StoreRead("connection refused".to_string()))
        }

        async fn update(&self, _entity: &Contact) -> DomainResult<Contact> {
            Err(DomainError::StoreWrite("connection refused".to_string()))
        }

        async fn delete(&self, _id: ContactId) -> DomainResult<()> {
            Err(DomainError::StoreWrite("connection refused".to_string()))
        }
    }

    fn local(slot: &MemorySlot, allocation: IdAllocation) -> LocalContactRepository {
        LocalContactRepository::new(Rc::new(slot.clone()), allocation)
    }

    fn two_contacts() -> Vec<Contact> {
        vec![Contact::new(1, "Ann", "Lee", "555"), Contact::new(2, "Bob", "Ray", "556")]
    }

    /// Execute a write and settle it into the state
    async fn run<R>(state: &mut ContactState, repo: &R, pending: Pending) -> DomainResult<()>
    where
        R: Repository<Contact> + ?Sized,
    {
        let settled = pending.execute(repo).await;
        state.settle(settled)
    }

    async fn load<R: Repository<Contact>>(state: &mut ContactState, repo: &R) {
        state.finish_load(repo.list().await);
    }

    /// Slot holding `contacts`, a repository over it and a loaded state
    async fn loaded_with(
        contacts: &[Contact],
        allocation: IdAllocation,
        confirm_deletes: bool,
    ) -> (ContactState, LocalContactRepository) {
        let slot = MemorySlot::with_value(&serde_json::to_string(contacts).unwrap());
        let repo = local(&slot, allocation);
        let mut state = ContactState::new(confirm_deletes);
        load(&mut state, &repo).await;
        (state, repo)
    }

    fn fill(state: &mut ContactState, name: &str, surname: &str, phone: &str) {
        state.set_field(Field::Name, name);
        state.set_field(Field::Surname, surname);
        state.set_field(Field::PhoneNumber, phone);
    }

    async fn submit<R: Repository<Contact>>(state: &mut ContactState, repo: &R) -> DomainResult<()> {
        let pending = state.submit()?;
        run(state, repo, pending).await
    }

    async fn create<R: Repository<Contact>>(
        state: &mut ContactState,
        repo: &R,
        name: &str,
        surname: &str,
        phone: &str,
    ) -> DomainResult<()> {
        state.begin_create();
        fill(state, name, surname, phone);
        submit(state, repo).await
    }

    async fn remove<R: Repository<Contact>>(state: &mut ContactState, repo: &R, id: ContactId) -> DomainResult<()> {
        match state.remove(id) {
            Some(pending) => run(state, repo, pending).await,
            None => Ok(()),
        }
    }

    async fn confirm_remove<R: Repository<Contact>>(state: &mut ContactState, repo: &R) -> DomainResult<()> {
        match state.confirm_remove() {
            Some(pending) => run(state, repo, pending).await,
            None => Ok(()),
        }
    }

    fn ids(state: &ContactState) -> Vec<ContactId> {
        state.contacts().iter().map(|c| c.id).collect()
    }

    #[test]
    fn test_initial_state() {
        let state = ContactState::new(true);
        assert!(state.contacts().is_empty());
        assert_eq!(state.dialog(), DialogMode::Closed);
        assert_eq!(state.pending_delete(), None);
        assert!(!state.is_loaded());
    }

    #[tokio::test]
    async fn test_create_on_empty_list() {
        let (mut state, repo) = loaded_with(&[], IdAllocation::NextAfterMax, true).await;

        create(&mut state, &repo, "Ann", "Lee", "555").await.expect("create failed");

        assert_eq!(state.contacts(), &[Contact::new(1, "Ann", "Lee", "555")]);
        assert_eq!(state.dialog(), DialogMode::Closed);
        assert_eq!(state.form(), &ContactFields::default());
    }

    #[tokio::test]
    async fn test_creates_get_distinct_ids() {
        let (mut state, repo) = loaded_with(&[], IdAllocation::NextAfterMax, true).await;

        for i in 0..5 {
            create(&mut state, &repo, &format!("N{}", i), "S", "1").await.unwrap();
        }

        let mut seen = ids(&state);
        assert_eq!(seen.len(), 5);
        seen.sort();
        seen.dedup();
        assert_eq!(seen.len(), 5);
    }

    #[tokio::test]
    async fn test_round_trip_through_store() {
        let slot = MemorySlot::new();
        let repo = local(&slot, IdAllocation::NextAfterMax);
        let mut writer = ContactState::new(false);
        load(&mut writer, &repo).await;
        create(&mut writer, &repo, "Ann", "Lee", "555").await.unwrap();
        create(&mut writer, &repo, "Bob", "Ray", "556").await.unwrap();
        remove(&mut writer, &repo, 1).await.unwrap();
        create(&mut writer, &repo, "Cat", "Day", "557").await.unwrap();

        let mut reader = ContactState::new(false);
        load(&mut reader, &local(&slot, IdAllocation::NextAfterMax)).await;

        assert_eq!(reader.contacts(), writer.contacts());
        assert!(reader.is_loaded());
    }

    #[tokio::test]
    async fn test_validation_rejects_empty_name() {
        let (mut state, _repo) =
            loaded_with(&[Contact::new(1, "Ann", "Lee", "555")], IdAllocation::NextAfterMax, true).await;
        let before = state.contacts().to_vec();

        state.begin_create();
        fill(&mut state, "", "B", "1");
        let err = state.submit().unwrap_err();

        assert_eq!(err.field_errors().and_then(|e| e.get(Field::Name)), Some(REQUIRED));
        assert_eq!(state.contacts(), before.as_slice());
        assert_eq!(state.dialog(), DialogMode::Create);
        assert_eq!(state.errors().get(Field::Name), Some(REQUIRED));
        assert_eq!(state.errors().get(Field::Surname), None);
    }

    #[test]
    fn test_untouched_form_reports_every_field_on_submit() {
        let mut state = ContactState::new(true);
        state.begin_create();
        assert!(state.errors().is_empty());

        assert!(state.submit().is_err());

        for field in Field::ALL {
            assert_eq!(state.errors().get(field), Some(REQUIRED));
        }
    }

    #[test]
    fn test_field_change_revalidates() {
        let mut state = ContactState::new(true);
        state.begin_create();

        state.set_field(Field::Surname, "x");
        state.set_field(Field::Surname, "");
        assert_eq!(state.errors().get(Field::Surname), Some(REQUIRED));

        state.set_field(Field::Surname, "Lee");
        assert_eq!(state.errors().get(Field::Surname), None);
    }

    #[tokio::test]
    async fn test_edit_keeps_id_and_length() {
        let (mut state, repo) =
            loaded_with(&[Contact::new(1, "Ann", "Lee", "555")], IdAllocation::NextAfterMax, true).await;

        state.begin_edit(1).unwrap();
        assert_eq!(state.form().name, "Ann");
        assert_eq!(state.dialog_title(), "Update Contact");
        state.set_field(Field::Name, "Annie");
        submit(&mut state, &repo).await.expect("edit failed");

        assert_eq!(state.contacts(), &[Contact::new(1, "Annie", "Lee", "555")]);
        assert_eq!(state.dialog(), DialogMode::Closed);
        assert!(!state.is_dialog_open());
        assert_eq!(repo.list().await.unwrap(), state.contacts());
    }

    #[tokio::test]
    async fn test_begin_edit_unknown_id() {
        let (mut state, _repo) =
            loaded_with(&[Contact::new(1, "Ann", "Lee", "555")], IdAllocation::NextAfterMax, true).await;
        assert_eq!(state.begin_edit(9), Err(DomainError::NotFound(9)));
        assert_eq!(state.dialog(), DialogMode::Closed);
    }

    #[tokio::test]
    async fn test_begin_create_leaves_edit_mode() {
        let (mut state, _repo) =
            loaded_with(&[Contact::new(1, "Ann", "Lee", "555")], IdAllocation::NextAfterMax, true).await;
        state.begin_edit(1).unwrap();

        state.begin_create();

        assert_eq!(state.dialog(), DialogMode::Create);
        assert_eq!(state.form(), &ContactFields::default());
        assert_eq!(state.dialog_title(), "New Contact");
    }

    #[tokio::test]
    async fn test_remove_without_confirmation_deletes() {
        let (mut state, repo) = loaded_with(&two_contacts(), IdAllocation::NextAfterMax, false).await;

        remove(&mut state, &repo, 1).await.unwrap();

        assert_eq!(state.contacts(), &[Contact::new(2, "Bob", "Ray", "556")]);
        assert_eq!(state.pending_delete(), None);
        assert_eq!(repo.list().await.unwrap(), state.contacts());
    }

    #[tokio::test]
    async fn test_remove_with_confirmation_only_marks() {
        let (mut state, repo) = loaded_with(&two_contacts(), IdAllocation::NextAfterMax, true).await;

        assert_eq!(state.remove(2), None);

        assert_eq!(state.pending_delete(), Some(2));
        assert_eq!(ids(&state), vec![1, 2]);
        assert_eq!(repo.list().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_length_plus_one_collides_after_remove() {
        let (mut state, repo) = loaded_with(&two_contacts(), IdAllocation::LengthPlusOne, false).await;

        remove(&mut state, &repo, 1).await.unwrap();
        create(&mut state, &repo, "Cat", "Day", "557").await.unwrap();

        assert_eq!(ids(&state), vec![2, 2]);
    }

    #[tokio::test]
    async fn test_next_after_max_avoids_collision() {
        let (mut state, repo) = loaded_with(&two_contacts(), IdAllocation::NextAfterMax, false).await;

        remove(&mut state, &repo, 1).await.unwrap();
        create(&mut state, &repo, "Cat", "Day", "557").await.unwrap();

        assert_eq!(ids(&state), vec![2, 3]);
    }

    #[tokio::test]
    async fn test_confirmation_flow() {
        let (mut state, repo) = loaded_with(&two_contacts(), IdAllocation::NextAfterMax, true).await;

        remove(&mut state, &repo, 2).await.unwrap();
        assert_eq!(state.pending_delete(), Some(2));
        assert_eq!(state.contacts().len(), 2);

        confirm_remove(&mut state, &repo).await.unwrap();

        assert_eq!(ids(&state), vec![1]);
        assert_eq!(state.pending_delete(), None);
    }

    #[tokio::test]
    async fn test_confirm_without_pending_is_noop() {
        let (mut state, _repo) =
            loaded_with(&[Contact::new(1, "Ann", "Lee", "555")], IdAllocation::NextAfterMax, true).await;
        assert_eq!(state.confirm_remove(), None);
        assert_eq!(ids(&state), vec![1]);
    }

    #[tokio::test]
    async fn test_cancels_never_mutate_list() {
        let (mut state, _repo) = loaded_with(&two_contacts(), IdAllocation::NextAfterMax, true).await;
        let before = state.contacts().to_vec();

        state.begin_edit(1).unwrap();
        state.set_field(Field::Name, "Changed");
        state.cancel_edit();
        state.cancel_edit();
        assert_eq!(state.remove(2), None);
        state.cancel_remove();
        state.cancel_remove();

        assert_eq!(state.contacts(), before.as_slice());
        assert_eq!(state.dialog(), DialogMode::Closed);
        assert_eq!(state.pending_delete(), None);
        assert_eq!(state.form(), &ContactFields::default());
    }

    #[tokio::test]
    async fn test_commit_row() {
        let (mut state, repo) =
            loaded_with(&[Contact::new(1, "Ann", "Lee", "555")], IdAllocation::NextAfterMax, true).await;

        let pending = state.commit_row(Contact::new(1, "Ann", "Lee", "999")).unwrap();
        run(&mut state, &repo, pending).await.unwrap();
        assert_eq!(state.contacts()[0].phone_number, "999");

        let err = state.commit_row(Contact::new(1, "Ann", "", "999")).unwrap_err();
        assert_eq!(err.field_errors().and_then(|e| e.get(Field::Surname)), Some(REQUIRED));
        assert_eq!(state.contacts()[0].surname, "Lee");

        assert_eq!(
            state.commit_row(Contact::new(5, "X", "Y", "Z")),
            Err(DomainError::NotFound(5))
        );
    }

    #[tokio::test]
    async fn test_row_commit_leaves_open_dialog_alone() {
        let (mut state, repo) = loaded_with(&two_contacts(), IdAllocation::NextAfterMax, true).await;
        state.begin_create();
        state.set_field(Field::Name, "Draft");

        let pending = state.commit_row(Contact::new(2, "Bob", "Ray", "000")).unwrap();
        assert_eq!(pending.origin, Origin::Direct);
        run(&mut state, &repo, pending).await.unwrap();

        assert_eq!(state.dialog(), DialogMode::Create);
        assert_eq!(state.form().name, "Draft");
        assert_eq!(state.contacts()[1].phone_number, "000");
    }

    #[tokio::test]
    async fn test_load_skips_records_with_empty_fields() {
        let (state, _repo) = loaded_with(
            &[Contact::new(1, "Ann", "Lee", "555"), Contact::new(2, "", "Ray", "556")],
            IdAllocation::NextAfterMax,
            true,
        )
        .await;
        assert_eq!(ids(&state), vec![1]);
    }

    #[tokio::test]
    async fn test_malformed_stored_record_keeps_list_usable() {
        let slot = MemorySlot::with_value(
            r#"[{"id":1,"name":"Ann","surname":"Lee","phoneNumber":"555"},{"id":2,"name":"Bob"}]"#,
        );
        let repo = local(&slot, IdAllocation::NextAfterMax);
        let mut state = ContactState::new(true);
        load(&mut state, &repo).await;

        assert_eq!(state.contacts(), &[Contact::new(1, "Ann", "Lee", "555")]);

        create(&mut state, &repo, "Cat", "Day", "557").await.expect("create failed");
        assert_eq!(ids(&state), vec![1, 2]);
        assert_eq!(repo.list().await.unwrap(), state.contacts());
    }

    #[tokio::test]
    async fn test_load_failure_leaves_list_empty() {
        let mut state = ContactState::new(true);
        load(&mut state, &FailingRepository).await;
        assert!(state.contacts().is_empty());
        assert!(state.is_loaded());
    }

    #[tokio::test]
    async fn test_store_failure_keeps_list_and_dialog() {
        let mut state = ContactState::new(true);
        state.begin_create();
        fill(&mut state, "Ann", "Lee", "555");

        let err = submit(&mut state, &FailingRepository).await.unwrap_err();

        assert!(matches!(err, DomainError::StoreWrite(_)));
        assert!(state.contacts().is_empty());
        assert_eq!(state.dialog(), DialogMode::Create);
        assert_eq!(state.form().name, "Ann");
    }

    #[tokio::test]
    async fn test_failed_delete_keeps_contact() {
        let mut state = ContactState::new(false);
        state.finish_load(Ok(vec![Contact::new(1, "Ann", "Lee", "555")]));

        assert!(remove(&mut state, &FailingRepository, 1).await.is_err());
        assert_eq!(state.contacts().len(), 1);
    }

    #[tokio::test]
    async fn test_failed_local_write_keeps_state() {
        struct FullSlot;
        impl Slot for FullSlot {
            fn read(&self) -> DomainResult<Option<String>> {
                Ok(Some("[]".to_string()))
            }
            fn write(&self, _value: &str) -> DomainResult<()> {
                Err(DomainError::StoreWrite("quota exceeded".to_string()))
            }
        }

        let repo = LocalContactRepository::new(Rc::new(FullSlot), IdAllocation::NextAfterMax);
        let mut state = ContactState::new(true);
        load(&mut state, &repo).await;

        assert!(create(&mut state, &repo, "Ann", "Lee", "555").await.is_err());
        assert!(state.contacts().is_empty());
        assert!(state.is_dialog_open());
    }

    #[tokio::test]
    async fn test_results_apply_in_resolution_order() {
        let repo = local(&MemorySlot::new(), IdAllocation::NextAfterMax);
        let mut state = ContactState::new(true);

        state.begin_create();
        fill(&mut state, "Ann", "Lee", "555");
        let first = state.submit().unwrap();
        state.begin_create();
        fill(&mut state, "Bob", "Ray", "556");
        let second = state.submit().unwrap();

        let first_done = first.execute(&repo).await;
        let second_done = second.execute(&repo).await;
        state.settle(second_done).unwrap();
        state.settle(first_done).unwrap();

        let names: Vec<&str> = state.contacts().iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Bob", "Ann"]);
    }

    #[test]
    fn test_settled_update_replaces_in_place() {
        let mut state = ContactState::new(true);
        state.finish_load(Ok(two_contacts()));

        let settled = Settled {
            origin: Origin::Direct,
            result: Ok(Applied::Updated(Contact::new(1, "Annie", "Lee", "555"))),
        };
        state.settle(settled).unwrap();

        let names: Vec<&str> = state.contacts().iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Annie", "Bob"]);
    }

    #[test]
    fn test_submit_builds_dialog_writes() {
        let mut state = ContactState::new(true);
        state.finish_load(Ok(two_contacts()));

        state.begin_create();
        fill(&mut state, "Cat", "Day", "557");
        let pending = state.submit().unwrap();
        assert_eq!(pending.origin, Origin::Dialog);
        assert_eq!(&pending.mutation, &Mutation::Create(ContactFields::new("Cat", "Day", "557")));

        state.begin_edit(2).unwrap();
        state.set_field(Field::PhoneNumber, "000");
        let pending = state.submit().unwrap();
        assert_eq!(&pending.mutation, &Mutation::Update(Contact::new(2, "Bob", "Ray", "000")));
    }
}
