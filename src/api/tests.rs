use super::*;

#[test]
fn positions_order_by_index() {
    assert!(SplitCursor::Position(1) < SplitCursor::Position(2));
    assert!(SplitCursor::Position(3) > SplitCursor::Position(2));
    assert!(SplitCursor::Position(2) == SplitCursor::Position(2));
}

#[test]
fn terminal_is_after_every_position() {
    assert!(SplitCursor::Position(0) < SplitCursor::Terminal);
    assert!(SplitCursor::Position(usize::MAX) < SplitCursor::Terminal);
    assert!(SplitCursor::<usize>::Terminal > SplitCursor::Position(usize::MAX));
}

#[test]
fn terminal_only_equals_itself() {
    let terminal = SplitCursor::<usize>::Terminal;

    assert!(!(terminal < terminal));
    assert!(terminal == terminal);
    assert!(terminal != SplitCursor::Position(0));
}

#[test]
fn sort_cursors() {
    let mut cursors = vec![SplitCursor::Terminal, SplitCursor::Position(4), SplitCursor::Position(0), SplitCursor::Position(4)];
    cursors.sort();

    assert!(cursors == vec![SplitCursor::Position(0), SplitCursor::Position(4), SplitCursor::Position(4), SplitCursor::Terminal]);
}

#[test]
fn cursor_position() {
    assert!(SplitCursor::Position(7).position() == Some(7));
    assert!(SplitCursor::<usize>::Terminal.position() == None);
    assert!(SplitCursor::<usize>::Terminal.is_terminal());
    assert!(!SplitCursor::Position(7).is_terminal());
}

#[test]
fn error_messages() {
    assert!(SplitError::TerminalCursor.to_string() == "the terminal cursor does not address a subsequence");
    assert!(SplitError::RetreatBeforeStart.to_string() == "cannot retreat before the first subsequence");
}
