use crate::digits::DigitHistogram;
use crate::factorials::{Function, Precision, evaluate};

#[test]
fn test_histogram_counts_digits() {
    let histogram = DigitHistogram::analyze("1210");
    assert_eq!(histogram.count(0), 1);
    assert_eq!(histogram.count(1), 2);
    assert_eq!(histogram.count(2), 1);
    for digit in 3..=9 {
        assert_eq!(histogram.count(digit), 0);
    }
    assert_eq!(histogram.total(), 4);
    assert_eq!(histogram.distinct(), 3);

    let mean = histogram.mean();
    assert!(mean.is_some());
    if let Some(value) = mean {
        assert!((value - 4.0 / 3.0).abs() < 1e-12);
    }
}

#[test]
fn test_histogram_ignores_non_digits() {
    let histogram = DigitHistogram::analyze("-1 2,3.4\tx٣");
    assert_eq!(histogram.total(), 4);
    assert_eq!(histogram.counts(), &[0, 1, 1, 1, 1, 0, 0, 0, 0, 0]);
}

#[test]
fn test_histogram_without_digits_has_no_mean() {
    for text in ["", "abc", "  -  "] {
        let histogram = DigitHistogram::analyze(text);
        assert_eq!(histogram.total(), 0);
        assert_eq!(histogram.distinct(), 0);
        assert_eq!(histogram.mean(), None);
    }
}

#[test]
fn test_histogram_count_out_of_range_digit() {
    let histogram = DigitHistogram::analyze("999");
    assert_eq!(histogram.count(9), 3);
    assert_eq!(histogram.count(10), 0);
}

#[test]
fn test_histogram_iter_is_ordered() {
    let histogram = DigitHistogram::analyze("9081");
    let digits: Vec<char> = histogram.iter().map(|(d, _)| d).collect();
    assert_eq!(digits, ('0'..='9').collect::<Vec<_>>());
    assert_eq!(histogram.iter().nth(8), Some(('8', 1)));
}

#[test]
fn test_histogram_display() {
    let rendered = DigitHistogram::analyze("1210").to_string();
    let lines: Vec<&str> = rendered.lines().collect();
    assert_eq!(lines.len(), 12);
    assert_eq!(lines[0], "0: 1");
    assert_eq!(lines[1], "1: 2");
    assert_eq!(lines[9], "9: 0");
    assert_eq!(lines[10], "Total: 4");
    assert_eq!(lines[11], "Mean: 1.33");

    let rendered = DigitHistogram::analyze("none").to_string();
    assert!(rendered.ends_with("Mean: n/a"));
}

#[test]
fn test_histogram_large_text_matches_sequential() {
    let text = "0123456789-".repeat(200_000);
    let histogram = DigitHistogram::analyze(&text);
    assert_eq!(histogram.counts(), &[200_000; 10]);
    assert_eq!(histogram.mean(), Some(200_000.0));
}

#[test]
fn test_histogram_of_computed_result() {
    let value = evaluate(Function::Factorial, &[10], Precision::Arbitrary);
    let text = value.map(|v| v.to_string()).unwrap_or_default();
    // 3628800
    let histogram = DigitHistogram::analyze(&text);
    assert_eq!(histogram.count(8), 2);
    assert_eq!(histogram.count(0), 2);
    assert_eq!(histogram.total(), 7);
    assert_eq!(histogram.distinct(), 5);
}
