use tasklist_domain::commands::*;
use tasklist_domain::*;

fn run(store: &mut TaskListStore, command: Box<dyn Command>) -> bool {
    command.execute(store)
}

#[test]
fn test_full_edit_flow_through_commands() {
    let mut store = TaskListStore::new();
    assert!(run(
        &mut store,
        Box::new(AddTask {
            text: "Buy milk".to_string()
        })
    ));
    let id = store.tasks()[0].id;

    assert!(run(&mut store, Box::new(StartEditing { id })));
    assert!(run(
        &mut store,
        Box::new(UpdateDraft {
            text: "Buy oat milk".to_string()
        })
    ));
    assert!(run(&mut store, Box::new(SaveEdit)));

    assert_eq!(store.get(id).unwrap().text, "Buy oat milk");
    assert!(!store.is_editing());
}

#[test]
fn test_rejected_commands_report_noop() {
    let mut store = TaskListStore::new();
    assert!(!run(
        &mut store,
        Box::new(AddTask {
            text: "  ".to_string()
        })
    ));
    assert!(!run(&mut store, Box::new(ToggleTask { id: TaskId(1) })));
    assert!(!run(&mut store, Box::new(DeleteTask { id: TaskId(1) })));
    assert!(!run(&mut store, Box::new(SaveEdit)));
    assert!(!run(&mut store, Box::new(CancelEdit)));
    assert!(store.is_empty());
}

#[test]
fn test_cancel_edit_command_discards_draft() {
    let mut store = TaskListStore::new();
    let id = store.add_task("Walk dog").unwrap();
    run(&mut store, Box::new(StartEditing { id }));
    run(
        &mut store,
        Box::new(UpdateDraft {
            text: "Walk cat".to_string(),
        }),
    );
    assert!(run(&mut store, Box::new(CancelEdit)));
    assert_eq!(store.get(id).unwrap().text, "Walk dog");
}

#[test]
fn test_descriptions() {
    assert_eq!(
        AddTask {
            text: "  Buy milk ".to_string()
        }
        .description(),
        "Add task: 'Buy milk'"
    );
    assert_eq!(DeleteTask { id: TaskId(3) }.description(), "Delete task #3");
    assert_eq!(ToggleTask { id: TaskId(3) }.description(), "Toggle task #3");
    assert_eq!(SaveEdit.description(), "Save edit");
}
