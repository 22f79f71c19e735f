use super::*;

#[test]
fn test_truncate() {
    assert_eq!(truncate("buy milk", 20), "buy milk");
    assert_eq!(truncate("buy milk", 8), "buy milk");
    assert_eq!(truncate("buy milk", 5), "buy …");
    assert_eq!(truncate("", 5), "");
}

#[test]
fn test_truncate_wide_chars() {
    // Each CJK character takes two cells
    assert_eq!(truncate("買牛奶", 4), "買…");
}

#[test]
fn test_wrap_words() {
    assert_eq!(
        wrap_words("Server error 500: database is locked", 16),
        vec!["Server error", "500: database is", "locked"]
    );
    assert_eq!(wrap_words("  spaced   out  ", 40), vec!["spaced out"]);
    assert_eq!(wrap_words("supercalifragilistic", 6), vec!["super…"]);
    assert!(wrap_words("", 10).is_empty());
}

#[test]
fn test_popup_area_is_centered() {
    let area = Rect::new(0, 0, 100, 40);
    let popup = popup_area(area, 50, 3);
    assert_eq!(popup.width, 50);
    assert_eq!(popup.height, 3);
    assert!((24..=26).contains(&popup.x));
    assert!((18..=19).contains(&popup.y));
}
