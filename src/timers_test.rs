use super::*;

#[test]
fn pop_due_returns_nothing_before_deadline() {
    let mut timers = TimerQueue::new();
    timers.schedule(500, "search");
    assert_eq!(timers.pop_due(499), None);
    assert_eq!(timers.pop_due(500), Some((500, "search")));
    assert!(timers.is_empty());
}

#[test]
fn pop_due_orders_by_deadline_then_schedule_order() {
    let mut timers = TimerQueue::new();
    timers.schedule(300, "late");
    timers.schedule(100, "first");
    timers.schedule(100, "second");
    assert_eq!(timers.pop_due(1_000), Some((100, "first")));
    assert_eq!(timers.pop_due(1_000), Some((100, "second")));
    assert_eq!(timers.pop_due(1_000), Some((300, "late")));
    assert_eq!(timers.pop_due(1_000), None);
}

#[test]
fn restart_replaces_pending_equal_task() {
    let mut timers = TimerQueue::new();
    timers.restart(500, "search");
    timers.restart(700, "search");
    timers.restart(900, "search");
    assert_eq!(timers.len(), 1);
    assert_eq!(timers.next_deadline(), Some(900));
    assert_eq!(timers.pop_due(899), None);
    assert_eq!(timers.pop_due(900), Some((900, "search")));
}

#[test]
fn schedule_allows_equal_tasks_to_coexist() {
    let mut timers = TimerQueue::new();
    timers.schedule(10, 7);
    timers.schedule(20, 7);
    assert_eq!(timers.len(), 2);
}

#[test]
fn cancel_reports_whether_anything_was_removed() {
    let mut timers = TimerQueue::new();
    timers.schedule(10, 'a');
    assert!(timers.cancel(&'a'));
    assert!(!timers.cancel(&'a'));
    assert_eq!(timers.next_deadline(), None);
}
