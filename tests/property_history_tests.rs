use plot_zoom::core::HistoryStack;
use proptest::prelude::*;

proptest! {
    #[test]
    fn prev_then_next_returns_to_same_entry(
        pushes in proptest::collection::vec(-1_000i32..1_000, 1..24),
        back in 0usize..32
    ) {
        let mut history = HistoryStack::new(0i32);
        for state in &pushes {
            history.push(*state);
        }
        let newest = history.index();
        prop_assert_eq!(newest, pushes.len());

        let mut stepped = 0;
        for _ in 0..back {
            if history.step_prev() {
                stepped += 1;
            }
        }
        prop_assert_eq!(stepped, back.min(pushes.len()));
        for _ in 0..stepped {
            prop_assert!(history.step_next());
        }
        prop_assert_eq!(history.index(), newest);
        prop_assert_eq!(*history.current(), pushes[pushes.len() - 1]);
        prop_assert!(!history.step_next());
    }

    #[test]
    fn push_after_stepping_back_truncates_redo_branch(
        pushes in proptest::collection::vec(-1_000i32..1_000, 2..24),
        back in 1usize..24,
        replacement in -1_000i32..1_000
    ) {
        let mut history = HistoryStack::new(0i32);
        for state in &pushes {
            history.push(*state);
        }
        let back = back.min(pushes.len());
        for _ in 0..back {
            prop_assert!(history.step_prev());
        }
        let kept = history.index() + 1;
        history.push(replacement);

        prop_assert_eq!(history.len(), kept + 1);
        prop_assert_eq!(history.index(), kept);
        prop_assert_eq!(*history.current(), replacement);
        prop_assert_eq!(&history.entries()[1..kept], &pushes[..kept - 1]);
    }

    #[test]
    fn pop_never_removes_origin(
        pushes in proptest::collection::vec(-1_000i32..1_000, 0..16),
        pops in 0usize..32
    ) {
        let mut history = HistoryStack::new(7i32);
        for state in &pushes {
            history.push(*state);
        }
        for _ in 0..pops {
            history.pop();
        }
        prop_assert!(history.len() >= 1);
        prop_assert_eq!(*history.origin(), 7);
        prop_assert!(history.index() < history.len());
    }
}

#[test]
fn redo_branch_is_replaced() {
    let mut history = HistoryStack::new('A');
    history.push('B');
    history.push('C');
    assert!(history.step_prev());
    history.push('D');
    assert_eq!(history.entries(), &['A', 'B', 'D']);
    assert_eq!(history.index(), 2);
}
