/// Number of major-arcana positions every card value is folded into
pub const CARD_COUNT: u64 = 22;

/// Fold an integer into the card range 1..=22
///
/// The sign is dropped, 0 maps to 22 and every multiple of 22 maps to 22.
#[inline]
pub fn reduce_to_22(n: i64) -> u8 {
    fold(n.unsigned_abs())
}

#[inline]
fn fold(n: u64) -> u8 {
    if n == 0 {
        return CARD_COUNT as u8;
    }
    ((n - 1) % CARD_COUNT + 1) as u8
}

/// Decimal digits of |n|, least significant first
fn digits(n: i64) -> impl Iterator<Item = u64> {
    std::iter::successors(Some(n.unsigned_abs()), |&v| (v >= 10).then_some(v / 10))
        .map(|v| v % 10)
}

/// Sum of the decimal digits of |n|
#[inline]
pub fn digit_sum(n: i64) -> u64 {
    digits(n).sum()
}

/// Sum of the decimal digits of |n| with zero digits skipped
#[inline]
pub fn digit_sum_no_zero(n: i64) -> u64 {
    digits(n).filter(|&d| d != 0).sum()
}

/// Base-9 digital root: 0 for 0, otherwise always in 1..=9
#[inline]
pub fn digital_root_9(n: i64) -> u64 {
    let n = n.unsigned_abs();
    if n == 0 {
        return 0;
    }
    1 + (n - 1) % 9
}

/// Card difference used for karma and stone cards
///
/// Takes |a - b| folded into 1..=22; equal inputs give 22.
#[inline]
pub fn wrap_diff(a: i64, b: i64) -> u8 {
    let d = a.abs_diff(b);
    if d == 0 {
        return CARD_COUNT as u8;
    }
    fold(d)
}
