use tasklist_domain::*;

fn assert_stats_consistent(store: &TaskListStore) {
    let stats = store.stats();
    assert_eq!(stats.completed + stats.pending, stats.total);
    assert_eq!(stats.total, store.tasks().len());
}

#[test]
fn test_total_counts_only_non_blank_adds() {
    let inputs = ["Buy milk", "", "Walk dog", "   ", "\t\n", " Call mom ", "x"];
    let mut store = TaskListStore::new();
    let mut expected = 0;

    for input in inputs {
        if !input.trim().is_empty() {
            expected += 1;
        }
        store.add_task(input);
        assert_eq!(store.stats().total, expected);
        assert_stats_consistent(&store);
    }
    assert_eq!(expected, 4);
}

#[test]
fn test_blank_adds_never_change_total() {
    let mut store = TaskListStore::new();
    store.add_task("keep");
    let before = store.stats();

    store.add_task("");
    store.add_task("   ");

    assert_eq!(store.stats(), before);
}

#[test]
fn test_double_toggle_restores_state() {
    let mut store = TaskListStore::new();
    let id = store.add_task("Buy milk").unwrap();
    let original = store.get(id).unwrap().clone();

    store.toggle_complete(id);
    assert_ne!(store.get(id).unwrap().completed, original.completed);
    store.toggle_complete(id);

    assert_eq!(store.get(id).unwrap(), &original);
}

#[test]
fn test_double_delete_is_idempotent() {
    let mut store = TaskListStore::new();
    let a = store.add_task("a").unwrap();
    store.add_task("b").unwrap();

    assert!(store.delete_task(a));
    let after_first = store.tasks().to_vec();
    assert!(!store.delete_task(a));

    assert_eq!(store.tasks(), after_first.as_slice());
}

#[test]
fn test_stats_stay_consistent_through_mixed_operations() {
    let mut store = TaskListStore::new();
    let ids: Vec<_> = (0..10)
        .filter_map(|i| store.add_task(&format!("task {i}")))
        .collect();

    for (i, id) in ids.iter().enumerate() {
        if i % 2 == 0 {
            store.toggle_complete(*id);
        }
        if i % 3 == 0 {
            store.delete_task(*id);
        }
        assert_stats_consistent(&store);
    }
    store.toggle_complete(TaskId(12345));
    assert_stats_consistent(&store);
}

#[test]
fn test_milk_and_dog_scenario() {
    let mut store = TaskListStore::new();
    let milk = store.add_task("Buy milk").unwrap();
    let dog = store.add_task("Walk dog").unwrap();
    assert_eq!(
        store.stats(),
        TaskStats {
            total: 2,
            completed: 0,
            pending: 2
        }
    );

    store.toggle_complete(milk);
    assert_eq!(
        store.stats(),
        TaskStats {
            total: 2,
            completed: 1,
            pending: 1
        }
    );

    store.delete_task(dog);
    assert_eq!(
        store.stats(),
        TaskStats {
            total: 1,
            completed: 1,
            pending: 0
        }
    );
}

#[test]
fn test_saving_empty_draft_keeps_editing() {
    let mut store = TaskListStore::new();
    let a = store.add_task("Buy milk").unwrap();

    store.start_editing(a);
    store.update_draft_text("");
    assert!(!store.save_edit());

    assert_eq!(store.get(a).unwrap().text, "Buy milk");
    assert_eq!(store.edit_cursor(), Some(&EditCursor::new(a, "")));
}

#[test]
fn test_saving_draft_updates_text_and_closes_edit() {
    let mut store = TaskListStore::new();
    let a = store.add_task("Buy milk").unwrap();

    store.start_editing(a);
    store.update_draft_text("Buy oat milk");
    assert!(store.save_edit());

    assert_eq!(store.get(a).unwrap().text, "Buy oat milk");
    assert!(store.edit_cursor().is_none());
}

#[test]
fn test_insertion_order_survives_edits_and_toggles() {
    let mut store = TaskListStore::new();
    let a = store.add_task("a").unwrap();
    let b = store.add_task("b").unwrap();
    let c = store.add_task("c").unwrap();

    store.toggle_complete(b);
    store.start_editing(a);
    store.update_draft_text("A");
    store.save_edit();

    let order: Vec<_> = store.tasks().iter().map(|t| t.id).collect();
    assert_eq!(order, vec![a, b, c]);
}
