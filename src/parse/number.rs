//! Number-word parsing
//!
//! Turns "twenty-one" or "two hundred and forty-five" into an integer so
//! indices can be given in words. Deliberately bounded: units, tens,
//! hundred and thousand, nothing above the low thousands.

/// Parses a base-10 numeral or a space/hyphen-delimited sequence of
/// English number words. The filler word "and" is ignored anywhere;
/// blank input, any unrecognized word, or a value past `u32` fails.
pub fn parse(input: &str) -> Option<u32> {
    let normalized = input.trim().to_lowercase().replace('-', " ");
    if normalized.is_empty() {
        return None;
    }
    if let Ok(numeral) = normalized.parse::<u32>() {
        return Some(numeral);
    }

    // `segment` accumulates the current hundred-block; "thousand"
    // flushes it into `total`. Repeated multipliers can exceed u32, so
    // every step is checked.
    let mut total = 0u32;
    let mut segment = 0u32;

    for word in normalized.split_whitespace() {
        if let Some(value) = unit_value(word).or_else(|| tens_value(word)) {
            segment = segment.checked_add(value)?;
        } else {
            match word {
                "hundred" => segment = segment.checked_mul(100)?,
                "thousand" => {
                    total = total.checked_add(segment.checked_mul(1000)?)?;
                    segment = 0;
                }
                "and" => {}
                _ => return None,
            }
        }
    }

    total.checked_add(segment)
}

/// Extracts a 1-based task index from an argument that is either a
/// numeral ("2") or a number word ("two").
pub fn parse_index(argument: &str) -> Option<usize> {
    parse(argument).map(|n| n as usize)
}

fn unit_value(word: &str) -> Option<u32> {
    let value = match word {
        "one" => 1,
        "two" => 2,
        "three" => 3,
        "four" => 4,
        "five" => 5,
        "six" => 6,
        "seven" => 7,
        "eight" => 8,
        "nine" => 9,
        "ten" => 10,
        "eleven" => 11,
        "twelve" => 12,
        "thirteen" => 13,
        "fourteen" => 14,
        "fifteen" => 15,
        "sixteen" => 16,
        "seventeen" => 17,
        "eighteen" => 18,
        "nineteen" => 19,
        _ => return None,
    };
    Some(value)
}

fn tens_value(word: &str) -> Option<u32> {
    let value = match word {
        "twenty" => 20,
        "thirty" => 30,
        "forty" => 40,
        "fifty" => 50,
        "sixty" => 60,
        "seventy" => 70,
        "eighty" => 80,
        "ninety" => 90,
        _ => return None,
    };
    Some(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compound_numbers() {
        assert_eq!(parse("two hundred and forty-five"), Some(245));
        assert_eq!(parse("three thousand one hundred"), Some(3100));
        assert_eq!(parse("nine hundred ninety-nine"), Some(999));
    }

    #[test]
    fn simple_words_and_casing() {
        assert_eq!(parse("one"), Some(1));
        assert_eq!(parse("Twenty-One"), Some(21));
        assert_eq!(parse("seventeen"), Some(17));
    }

    #[test]
    fn numerals_are_accepted_directly() {
        assert_eq!(parse("42"), Some(42));
        assert_eq!(parse(" 7 "), Some(7));
        assert_eq!(parse("2.5"), None);
    }

    #[test]
    fn invalid_input_fails() {
        assert_eq!(parse(""), None);
        assert_eq!(parse("   "), None);
        assert_eq!(parse("banana"), None);
        assert_eq!(parse("twenty banana"), None);
    }

    #[test]
    fn overflow_fails_instead_of_wrapping() {
        assert_eq!(parse("nine hundred hundred hundred hundred hundred"), None);
        assert_eq!(parse("forty hundred hundred hundred thousand"), None);
        assert_eq!(parse("99999999999999999999"), None);
    }

    #[test]
    fn index_accepts_numerals_and_words() {
        assert_eq!(parse_index("2"), Some(2));
        assert_eq!(parse_index("two"), Some(2));
        assert_eq!(parse_index("0"), Some(0));
        assert_eq!(parse_index("2.5"), None);
        assert_eq!(parse_index("elephant"), None);
    }
}
