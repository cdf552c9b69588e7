use super::*;

#[test]
fn zero_rating_is_all_empty() {
    assert_eq!(star_fills(0.0), [StarFill::Empty; 5]);
}

#[test]
fn rounds_to_half_star() {
    assert_eq!(
        star_fills(3.6),
        [StarFill::Full, StarFill::Full, StarFill::Full, StarFill::Half, StarFill::Empty]
    );
    assert_eq!(star_fills(3.8), [StarFill::Full, StarFill::Full, StarFill::Full, StarFill::Full, StarFill::Empty]);
}

#[test]
fn out_of_range_rating_is_clamped() {
    assert_eq!(star_fills(7.0), [StarFill::Full; 5]);
    assert_eq!(star_fills(-1.0), [StarFill::Empty; 5]);
}
