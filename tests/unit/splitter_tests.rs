/*!
 * Tests for proportional splitting and word-break search
 */

use realign::DistributionError;
use realign::distribution::{
    find_closest_word_break, normalize, split_by_sentence_breaks, split_proportional,
    DEFAULT_SENTENCE_TOLERANCE,
};

const TEXTS: &[&str] = &[
    "",
    "a",
    "ab",
    "Hola mundo adios ahora",
    "Ein Satz ohne Ende aber mit vielen Wörtern darin",
    "短い文です。もう一つの文です。",
    "Wait—what? No, no, no… that's not right!",
    "nospacesatallinthisverylongtokenwithoutanybreaks",
];

const PORTIONS: &[&[f64]] = &[
    &[1.0, 1.0],
    &[0.7, 0.3],
    &[0.05, 0.05, 0.9],
    &[3.0, 0.0, 2.0, 5.0],
    &[0.2, 0.2, 0.2, 0.2, 0.2],
    &[1.0, 0.0, 0.0],
];

/// Splitting is a lossless partition with one piece per portion
#[test]
fn test_split_proportional_withManyInputs_shouldPartitionLosslessly() {
    for text in TEXTS {
        for portions in PORTIONS {
            let pieces = split_proportional(text, portions).unwrap();
            assert_eq!(pieces.len(), portions.len(), "text {:?} portions {:?}", text, portions);
            assert_eq!(pieces.concat(), *text);
        }
    }
}

/// The sentence-aware splitter is lossless as well
#[test]
fn test_split_by_sentence_breaks_withManyInputs_shouldPartitionLosslessly() {
    for text in TEXTS {
        let length = text.chars().count();
        let breaks = [length / 3, length / 2, length];
        for portions in PORTIONS {
            let pieces = split_by_sentence_breaks(text, &breaks, portions, DEFAULT_SENTENCE_TOLERANCE).unwrap();
            assert_eq!(pieces.len(), portions.len());
            assert_eq!(pieces.concat(), *text);
        }
    }
}

/// A single portion returns the text unchanged
#[test]
fn test_split_proportional_withSinglePortion_shouldReturnText() {
    for text in TEXTS {
        assert_eq!(split_proportional(text, &[0.42]).unwrap(), vec![text.to_string()]);
    }
}

/// Scenario: two cues of 11 and 7 characters
#[test]
fn test_split_proportional_withElevenAndSeven_shouldCutAtSpace() {
    let text = "Hola mundo adios ahora";
    let pieces = split_proportional(text, &[11.0, 7.0]).unwrap();

    assert_eq!(pieces.len(), 2);
    assert!(!pieces[0].is_empty() && !pieces[1].is_empty());
    assert_eq!(pieces.concat(), text);
    assert!(pieces[1].starts_with(' '));
    assert_eq!(pieces[0], "Hola mundo adios");
}

/// An all-zero distribution is a contract violation
#[test]
fn test_normalize_withAllZeros_shouldFail() {
    assert!(matches!(normalize(&[0.0, 0.0, 0.0]), Err(DistributionError::ZeroDistribution(_))));
    assert!(matches!(split_proportional("text", &[0.0, 0.0]), Err(DistributionError::ZeroDistribution(_))));
}

/// The word-break search never runs past the end of the text
#[test]
fn test_find_closest_word_break_withAnyTarget_shouldStayInBounds() {
    for text in TEXTS {
        let length = text.chars().count();
        for target in 0..length + 4 {
            let offset = find_closest_word_break(text, target);
            assert!(offset <= length);
            if length <= target + 2 {
                assert_eq!(offset, length);
            }
        }
    }
}

/// Full-width punctuation counts as a break
#[test]
fn test_find_closest_word_break_withCjkText_shouldCutAfterFullStop() {
    // "短い文です。" ends at char 5 with the full stop.
    assert_eq!(find_closest_word_break("短い文です。もう一つの文です。", 4), 5);
}
