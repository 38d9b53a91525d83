use super::{extract, extract_digits, word_occurrences, Error, Occurrence};

#[test]
fn digit_samples() {
    let lines = ["1abc2", "pqr3stu8vwx", "a1b2c3d4e5f", "treb7uchet"];
    let values = [12, 38, 15, 77];

    let mut total = 0;

    for (line, value) in lines.iter().zip(values) {
        assert_eq!(extract_digits(line), Ok(value), "{line}");
        total += value;
    }

    assert_eq!(total, 142);
}

#[test]
fn word_samples() {
    let lines = [
        "two1nine",
        "eightwothree",
        "abcone2threexyz",
        "xtwone3four",
        "4nineeightseven2",
        "zoneight234",
        "7pqrstsixteen",
    ];
    let values = [29, 83, 13, 24, 42, 14, 76];

    let mut total = 0;

    for (line, value) in lines.iter().zip(values) {
        assert_eq!(extract(line), Ok(value), "{line}");
        total += value;
    }

    assert_eq!(total, 281);
}

#[test]
fn overlapping_words() {
    let hits = word_occurrences("oneight").collect::<Vec<_>>();

    assert!(hits.contains(&Occurrence { at: 0, value: 1 }));
    assert!(hits.contains(&Occurrence { at: 2, value: 8 }));
    assert_eq!(hits.len(), 2);

    assert_eq!(extract("oneight"), Ok(18));
    assert_eq!(extract("xoneight"), Ok(18));
}

#[test]
fn no_digits() {
    assert_eq!(extract(""), Err(Error::NoDigits));
    assert_eq!(extract("pqrstuvwxyz"), Err(Error::NoDigits));
    assert_eq!(extract("zero"), Err(Error::NoDigits));
    assert_eq!(extract_digits("seven"), Err(Error::NoDigits));
}

#[test]
fn single_occurrence() {
    assert_eq!(extract_digits("7"), Ok(77));
    assert_eq!(extract("7"), Ok(77));
    assert_eq!(extract("seven"), Ok(77));
    assert_eq!(extract_digits("a3b"), Ok(33));
}

#[test]
fn literal_zero_digit() {
    // '0' counts in the digit scan even though "zero" is not a word.
    assert_eq!(extract("0abc"), Ok(0));
    assert_eq!(extract("zero1"), Ok(11));
    assert_eq!(extract_digits("a0b9"), Ok(9));
}

#[test]
fn extraction_is_pure() {
    let line = "xtwone3four";

    assert_eq!(extract(line), extract(line));
    assert_eq!(extract_digits(line), extract_digits(line));
}

#[test]
fn words_rank_by_position() {
    // "eightwothree": the "two" inside "eightwo" starts later than "eight",
    // but "three" starts last of all.
    assert_eq!(extract("eightwothree"), Ok(83));
    // Digit between two words, earliest occurrence is the word.
    assert_eq!(extract("one2"), Ok(12));
    assert_eq!(extract("2one"), Ok(21));
}
