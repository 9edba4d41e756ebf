#![allow(clippy::unwrap_used)]

use super::util::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

// ── format_amount ─────────────────────────────────────────────

#[test]
fn test_format_amount_basic() {
    assert_eq!(format_amount(dec!(42.50)), "42.50");
    assert_eq!(format_amount(dec!(0)), "0.00");
}

#[test]
fn test_format_amount_thousands() {
    assert_eq!(format_amount(dec!(1234.56)), "1,234.56");
    assert_eq!(format_amount(dec!(1234567.89)), "1,234,567.89");
}

#[test]
fn test_format_amount_negative() {
    assert_eq!(format_amount(dec!(-1234.56)), "-1,234.56");
}

#[test]
fn test_format_amount_rounds_to_two_places() {
    assert_eq!(format_amount(dec!(10.1)), "10.10");
    assert_eq!(format_amount(dec!(10)), "10.00");
}

#[test]
fn test_format_aed() {
    assert_eq!(format_aed(dec!(150.50)), "150.50 AED");
    assert_eq!(format_aed(Decimal::ZERO), "0.00 AED");
}

// ── truncate ──────────────────────────────────────────────────

#[test]
fn test_truncate_short_string_unchanged() {
    assert_eq!(truncate("hello", 10), "hello");
    assert_eq!(truncate("hello", 5), "hello");
}

#[test]
fn test_truncate_long_string() {
    assert_eq!(truncate("hello world", 8), "hello w…");
}

#[test]
fn test_truncate_zero_max() {
    assert_eq!(truncate("hello", 0), "");
}

#[test]
fn test_truncate_multibyte() {
    let s = "café au lait";
    let t = truncate(s, 6);
    assert_eq!(t.chars().count(), 6);
    assert!(t.ends_with('…'));
}

// ── scroll helpers ────────────────────────────────────────────

#[test]
fn test_scroll_down_advances_and_scrolls() {
    let (mut index, mut scroll) = (0, 0);
    for _ in 0..5 {
        scroll_down(&mut index, &mut scroll, 10, 3);
    }
    assert_eq!(index, 5);
    assert_eq!(scroll, 3);
}

#[test]
fn test_scroll_down_stops_at_end() {
    let (mut index, mut scroll) = (9, 7);
    scroll_down(&mut index, &mut scroll, 10, 3);
    assert_eq!(index, 9);
}

#[test]
fn test_scroll_up_clamps_at_zero() {
    let (mut index, mut scroll) = (0, 0);
    scroll_up(&mut index, &mut scroll);
    assert_eq!(index, 0);
    assert_eq!(scroll, 0);
}

#[test]
fn test_scroll_to_top_and_bottom() {
    let (mut index, mut scroll) = (5, 3);
    scroll_to_top(&mut index, &mut scroll);
    assert_eq!((index, scroll), (0, 0));

    scroll_to_bottom(&mut index, &mut scroll, 10, 4);
    assert_eq!(index, 9);
    assert_eq!(scroll, 6);
}

#[test]
fn test_scroll_to_bottom_empty_list() {
    let (mut index, mut scroll) = (0, 0);
    scroll_to_bottom(&mut index, &mut scroll, 0, 4);
    assert_eq!((index, scroll), (0, 0));
}
