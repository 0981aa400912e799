//! Unit tests for numeric helpers

use nifty_signals::common::math::{alpha_from_span, mean, percent, trailing_sum};

#[test]
fn test_alpha_from_span() {
    assert_eq!(alpha_from_span(9), 0.2);
    assert_eq!(alpha_from_span(1), 1.0);
    assert!((alpha_from_span(12) - 2.0 / 13.0).abs() < 1e-15);
}

#[test]
fn test_mean() {
    assert!(mean(&[]).is_none());
    assert_eq!(mean(&[1.0, 2.0, 3.0]), Some(2.0));
}

#[test]
fn test_trailing_sum() {
    let values = [1.0, 2.0, 3.0, 4.0];
    assert_eq!(trailing_sum(&values, 3, 2), Some(7.0));
    assert_eq!(trailing_sum(&values, 3, 4), Some(10.0));
    assert_eq!(trailing_sum(&values, 0, 1), Some(1.0));
    assert!(trailing_sum(&values, 0, 2).is_none());
    assert!(trailing_sum(&values, 2, 0).is_none());
    assert!(trailing_sum(&values, 4, 1).is_none());
}

#[test]
fn test_percent() {
    assert_eq!(percent(1, 4), 25.0);
    assert_eq!(percent(3, 0), 0.0);
}
