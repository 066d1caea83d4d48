use bounded_history::equality;
use bounded_history::{History, HistoryConfig, Snapshot};
use std::sync::Arc;

fn past<T: Clone>(history: &History<T>) -> Vec<T> {
    history.past().iter().cloned().collect()
}

fn future<T: Clone>(history: &History<T>) -> Vec<T> {
    history.future().iter().cloned().collect()
}

#[test]
fn undo_twice_then_assign_branches() {
    let mut history = History::new(0);
    history.assign(1);
    history.assign(2);
    history.assign(3);
    assert_eq!(past(&history), vec![0, 1, 2]);
    assert!(future(&history).is_empty());

    history.undo();
    history.undo();
    assert_eq!(*history.present(), 1);
    assert_eq!(past(&history), vec![0]);
    assert_eq!(future(&history), vec![2, 3]);

    history.assign(4);
    assert_eq!(*history.present(), 4);
    assert_eq!(past(&history), vec![0, 1]);
    assert!(future(&history).is_empty());
}

#[test]
fn bounded_history_evicts_oldest() {
    let mut history = History::with_config(0, HistoryConfig::bounded(2));
    history.assign(1);
    history.assign(2);
    history.assign(3);
    assert_eq!(past(&history), vec![1, 2]);
    assert_eq!(*history.present(), 3);
}

#[test]
fn repeated_assignment_recorded_once() {
    let mut history = History::new(0);
    history.assign(5);
    history.assign(5);
    assert_eq!(past(&history), vec![0]);
    assert_eq!(*history.present(), 5);
}

#[test]
fn clear_after_mixed_operations() {
    let mut history = History::with_config(0, HistoryConfig::bounded(3));
    for v in 1..10 {
        history.assign(v);
    }
    history.undo();
    history.undo();
    history.redo();
    history.batch_update(|v| v * 100);

    history.clear();
    assert_eq!(*history.present(), 0);
    assert!(past(&history).is_empty());
    assert!(future(&history).is_empty());
}

#[derive(Clone, Debug, PartialEq)]
struct Record {
    value: i32,
    text: String,
}

#[test]
fn records_undo_and_redo() {
    let mut history = History::new(Record {
        value: 0,
        text: "initial".to_string(),
    });
    history.assign(Record {
        value: 1,
        text: "first".to_string(),
    });
    history.assign(Record {
        value: 2,
        text: "second".to_string(),
    });

    history.undo();
    assert_eq!(history.present().text, "first");
    history.redo();
    assert_eq!(history.present().text, "second");
    assert_eq!(history.past()[0].value, 0);
}

#[test]
fn vectors_as_state() {
    let mut history: History<Vec<i32>> = History::new(Vec::new());
    history.assign(vec![1, 2, 3]);
    assert_eq!(past(&history), vec![Vec::<i32>::new()]);

    history.assign(vec![1, 2, 3, 4]);
    history.undo();
    assert_eq!(*history.present(), vec![1, 2, 3]);
    history.redo();
    assert_eq!(*history.present(), vec![1, 2, 3, 4]);
}

#[test]
fn identity_equality_keeps_structurally_equal_handles() {
    let mut history = History::with_equality(
        Arc::new(vec![1, 2]),
        HistoryConfig::default(),
        equality::arc_identity(),
    );
    let same = Arc::clone(history.present());
    assert!(!history.assign(same));

    // Equal contents, different allocation: recorded
    assert!(history.assign(Arc::new(vec![1, 2])));
    assert_eq!(history.past().len(), 1);
}

#[test]
fn snapshot_from_config_bounded_history_round_trip() {
    let config = HistoryConfig::from_json(r#"{"max_size": 3}"#).unwrap();
    let mut history = History::with_config("a".to_string(), config);
    history.assign("b".to_string());
    history.assign("c".to_string());
    history.undo();

    let json = serde_json::to_string(&history.take_snapshot()).unwrap();
    let snapshot: Snapshot<String> = serde_json::from_str(&json).unwrap();

    let mut other = History::with_config("z".to_string(), HistoryConfig::bounded(3));
    other.restore_snapshot(&snapshot);
    assert_eq!(other.present(), "b");
    assert_eq!(past(&other), vec!["a".to_string()]);
    assert_eq!(future(&other), vec!["c".to_string()]);

    other.clear();
    assert_eq!(other.present(), "z");
}
