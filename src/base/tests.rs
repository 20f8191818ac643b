use crate::api::*;

#[test]
fn slice_indexes() {
    let base = [1, 2, 3];

    assert!(base.start_index() == 0);
    assert!(base.end_index() == 3);
    assert!(base.index_after(1) == 2);
    assert!(base.index_before(1) == 0);
}

#[test]
fn slice_searches_from_index() {
    let base = [0, 1, 0, 1, 0];

    assert!(base.first_index_where(0, |item| *item == 1) == Some(1));
    assert!(base.first_index_where(1, |item| *item == 1) == Some(1));
    assert!(base.first_index_where(2, |item| *item == 1) == Some(3));
    assert!(base.first_index_where(4, |item| *item == 1) == None);
    assert!(base.first_index_where(5, |item| *item == 1) == None);
}

#[test]
fn slice_searches_backwards() {
    let base = [0, 1, 0, 1, 0];

    assert!(base.last_index_where(5, |item| *item == 1) == Some(3));
    assert!(base.last_index_where(3, |item| *item == 1) == Some(1));
    assert!(base.last_index_where(1, |item| *item == 1) == None);
    assert!(base.last_index_where(0, |item| *item == 1) == None);
}

#[test]
fn slice_reads_range() {
    let base = [1, 2, 3, 4];

    assert!(base.slice(1..3) == &[2, 3]);
    assert!(base.slice(4..4).is_empty());
}

#[test]
fn str_indexes_are_char_boundaries() {
    let base = "aé·b";

    assert!(base.end_index() == 1 + 2 + 2 + 1);
    assert!(base.index_after(0) == 1);
    assert!(base.index_after(1) == 3);
    assert!(base.index_after(3) == 5);
    assert!(base.index_before(5) == 3);
    assert!(base.index_before(3) == 1);
    assert!(base.index_before(1) == 0);
}

#[test]
fn str_searches_by_char() {
    let base = "aé·b·";

    assert!(base.first_index_where(0, |chr| *chr == '·') == Some(3));
    assert!(base.first_index_where(5, |chr| *chr == '·') == Some(6));
    assert!(base.last_index_where(base.len(), |chr| *chr == '·') == Some(6));
    assert!(base.last_index_where(6, |chr| *chr == '·') == Some(3));
    assert!(base.last_index_where(3, |chr| *chr == '·') == None);
}

#[test]
fn str_reads_range() {
    let base = "aé·b";

    assert!(base.slice(1..3) == "é");
    assert!(base.slice(6..6) == "");
}
