use crate::core::cards::Card;
use crate::core::date::NormalizedDate;
use crate::core::reduction::{digit_sum, digit_sum_no_zero, digital_root_9};
use crate::models::PersonalCode;

/// Age at which the second life period starts before the digital-root offset
const SECOND_PERIOD_BASE_AGE: u32 = 36;

/// Length of the second and third life periods in years
const PERIOD_SPAN_YEARS: u32 = 9;

/// Sum of all non-zero digits of day, month and year
#[inline]
fn date_digit_total(date: &NormalizedDate) -> i64 {
    (digit_sum_no_zero(date.day() as i64)
        + digit_sum_no_zero(date.month() as i64)
        + digit_sum_no_zero(date.year() as i64)) as i64
}

/// Primary destiny card, the only value compatibility needs per person
pub fn main_destiny(date: &NormalizedDate) -> Card {
    Card::reduce(date_digit_total(date))
}

/// Compute the full tarot code for a birth date
///
/// Total over any valid date: every step is bounded integer arithmetic.
pub fn compute_code(date: &NormalizedDate) -> PersonalCode {
    let (d, m, y) = (date.day() as i64, date.month() as i64, date.year() as i64);

    // Base cards. The month is already within 1..=12 so the fold is an identity.
    let day_card = Card::reduce(d);
    let month_card = Card::reduce(m);
    let year_card = Card::reduce(digit_sum(y) as i64);

    let digit_total = date_digit_total(date);
    let destiny1 = Card::reduce(digit_total);
    let destiny2 = day_card + month_card + year_card;
    let destiny3 =
        Card::reduce((digital_root_9(d) + digital_root_9(m) + digital_root_9(y)) as i64);

    let p1 = day_card + month_card;
    let p2 = day_card + year_card;
    let p3 = p1 + p2;
    let p4 = month_card + year_card;

    let karma_cards = [
        Card::diff(month_card, day_card),
        Card::diff(day_card, year_card),
        Card::diff(p1, p2),
        Card::diff(month_card, year_card),
    ];

    let gift_cards = [day_card + destiny1, day_card + destiny2];
    let stone_cards = [Card::diff(destiny1, day_card), Card::diff(destiny2, day_card)];

    // digital_root_9 is at most 9, so the second period starts between 27 and 35
    let second_start = SECOND_PERIOD_BASE_AGE - digital_root_9(digit_total) as u32;
    let period_ages = [
        0,
        second_start,
        second_start + PERIOD_SPAN_YEARS,
        second_start + 2 * PERIOD_SPAN_YEARS,
    ];
    let period_start_dates = period_ages.map(|age| date.plus_years(age));

    PersonalCode {
        birth_date: *date,
        day_card,
        month_card,
        year_card,
        destiny1,
        destiny2,
        destiny3,
        period_cards: [p1, p2, p3, p4],
        period_ages,
        period_start_dates,
        karma_cards,
        gift_cards,
        stone_cards,
    }
}
