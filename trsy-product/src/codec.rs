//! US Treasury `whole-32nds-256ths` fractional price codec.
//!
//! `100-05+` decodes to `100 + 5/32 + 4/256`: the fractional part is always
//! three characters — two 32nds digits, then one 256ths digit, where a
//! trailing `+` stands for `4` (half of a 32nd). `encode` always renders the
//! digit form; `+` is only ever accepted on the way in.

use crate::error::ProductError;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

/// Encode a price to `whole-XXY` form. `price` is assumed non-negative and
/// representable exactly in 1/256ths (as every price in this system is,
/// having itself been produced by [`decode`] or simple arithmetic over
/// decoded values).
pub fn encode(price: Decimal) -> String {
    let total_256 = (price * Decimal::from(256))
        .round()
        .to_i64()
        .expect("price out of representable range");
    let whole = total_256.div_euclid(256);
    let remainder = total_256.rem_euclid(256);
    let thirty_seconds = remainder / 8;
    let two_fifty_sixths = remainder % 8;
    format!("{whole}-{thirty_seconds:02}{two_fifty_sixths}")
}

/// Decode a `whole-XXY` price string, accepting `+` as the 256ths digit
/// meaning `4`. Returns [`ProductError::MalformedPrice`] for anything else.
pub fn decode(text: &str) -> Result<Decimal, ProductError> {
    let malformed = || ProductError::MalformedPrice(text.to_string());

    let (whole_str, frac_str) = text.split_once('-').ok_or_else(malformed)?;
    if frac_str.len() != 3 {
        return Err(malformed());
    }

    let whole: i64 = whole_str.parse().map_err(|_| malformed())?;
    let thirty_seconds: i64 = frac_str[0..2].parse().map_err(|_| malformed())?;
    if !(0..32).contains(&thirty_seconds) {
        return Err(malformed());
    }

    let two_fifty_sixths: i64 = match frac_str.as_bytes()[2] {
        b'+' => 4,
        digit @ b'0'..=b'9' => i64::from(digit - b'0'),
        _ => return Err(malformed()),
    };

    let total_256 = whole * 256 + thirty_seconds * 8 + two_fifty_sixths;
    Ok(Decimal::new(total_256, 0) / Decimal::from(256))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn encodes_a_quarter_32nd_plus_notation_value() {
        assert_eq!(encode(dec!(100) + dec!(5) / dec!(32) + dec!(4) / dec!(256)), "100-054");
    }

    #[test]
    fn decodes_plus_notation_to_the_same_value_as_the_digit_form() {
        let via_plus = decode("100-05+").unwrap();
        let via_digit = decode("100-054").unwrap();
        assert_eq!(via_plus, via_digit);
        assert_eq!(via_plus, dec!(100) + dec!(5) / dec!(32) + dec!(4) / dec!(256));
    }

    #[test]
    fn round_trips_every_256th_increment_within_a_point() {
        for total in 0..256i64 {
            let price = Decimal::new(100 * 256 + total, 0) / Decimal::from(256);
            let encoded = encode(price);
            let decoded = decode(&encoded).unwrap();
            assert_eq!(decoded, price, "round-trip failed for {encoded}");
        }
    }

    #[test]
    fn rejects_a_fractional_part_that_is_not_three_characters() {
        assert!(decode("100-5").is_err());
        assert!(decode("100-0544").is_err());
    }

    #[test]
    fn rejects_missing_separator() {
        assert!(decode("100054").is_err());
    }

    #[test]
    fn rejects_out_of_range_32nds() {
        assert!(decode("100-32+").is_err());
    }
}
