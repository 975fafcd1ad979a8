use markline_rs::annotation::{GroupedFormatter, ValueFormatter};

#[test]
fn integers_group_thousands() {
    let formatter = GroupedFormatter::default();

    assert_eq!(formatter.format(1048.0), "1,048");
    assert_eq!(formatter.format(100.0), "100");
    assert_eq!(formatter.format(1_000_000.0), "1,000,000");
}

#[test]
fn fractions_keep_at_most_two_digits() {
    let formatter = GroupedFormatter::default();

    assert_eq!(formatter.format(629.4), "629.4");
    assert_eq!(formatter.format(1_234_567.891), "1,234,567.89");
    assert_eq!(formatter.format(0.5), "0.5");
}

#[test]
fn trailing_zeros_are_trimmed() {
    let formatter = GroupedFormatter::default();

    assert_eq!(formatter.format(12.10), "12.1");
    assert_eq!(formatter.format(80.0), "80");
    assert_eq!(formatter.format(7.00), "7");
}

#[test]
fn negative_values_group_after_the_sign() {
    let formatter = GroupedFormatter::default();

    assert_eq!(formatter.format(-1234.5), "-1,234.5");
    assert_eq!(formatter.format(-999.0), "-999");
}

#[test]
fn zero_digit_formatter_rounds_to_integers() {
    let formatter = GroupedFormatter::new(0);

    assert_eq!(formatter.format(1234.6), "1,235");
    assert_eq!(formatter.format(0.4), "0");
}

#[test]
fn non_finite_values_pass_through() {
    let formatter = GroupedFormatter::default();

    assert_eq!(formatter.format(f64::NAN), "NaN");
    assert_eq!(formatter.format(f64::INFINITY), "inf");
}
