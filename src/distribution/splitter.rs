/*!
 * Proportional text splitting.
 *
 * Both splitters cut greedily from the left. After each cut the remaining
 * weights are re-normalized against the remaining text only, so rounding
 * error is never corrected globally.
 */

use log::{debug, warn};

use crate::errors::DistributionError;
use super::word_break::{closest_break_in, split_at_char};

/// Default tolerance for sentence-boundary cuts, relative to the target offset
pub const DEFAULT_SENTENCE_TOLERANCE: f64 = 1.25;

/// Divide every weight by the sum of all weights.
///
/// A distribution without a strictly positive, finite sum cannot be
/// normalized and is reported as [`DistributionError::ZeroDistribution`].
pub fn normalize(distribution: &[f64]) -> Result<Vec<f64>, DistributionError> {
    let sum: f64 = distribution.iter().sum();
    if !sum.is_finite() || sum <= 0.0 {
        return Err(DistributionError::ZeroDistribution(sum));
    }
    Ok(distribution.iter().map(|weight| weight / sum).collect())
}

/// Split `text` into `portions.len()` pieces sized after `portions`, cutting at
/// word breaks where possible.
///
/// The pieces always concatenate back to `text`. Zero or one portion returns
/// the text unchanged as a single piece.
pub fn split_proportional(text: &str, portions: &[f64]) -> Result<Vec<String>, DistributionError> {
    if portions.len() <= 1 {
        return Ok(vec![text.to_string()]);
    }
    normalize(portions)?;

    let mut pieces = Vec::with_capacity(portions.len());
    split_into(text, portions, &mut pieces);
    Ok(pieces)
}

fn split_into(text: &str, portions: &[f64], pieces: &mut Vec<String>) {
    if portions.len() <= 1 {
        pieces.push(text.to_string());
        return;
    }

    // Only zero weights left: the earlier cuts already consumed their share.
    let Ok(normalized) = normalize(portions) else {
        push_zero_tail(text, portions.len(), pieces);
        return;
    };

    // A zero-weight member takes nothing, even where the word-break search would
    // hand it the whole of a short remainder.
    if portions[0] == 0.0 {
        pieces.push(String::new());
        split_into(text, &portions[1..], pieces);
        return;
    }

    let chars: Vec<char> = text.chars().collect();
    let target = (normalized[0] * chars.len() as f64).round() as usize;
    let cut = closest_break_in(&chars, target);
    debug!("Cutting {} chars at {} (target {})", chars.len(), cut, target);

    let (head, tail) = split_at_char(text, cut);
    pieces.push(head.to_string());
    split_into(tail, &portions[1..], pieces);
}

fn push_zero_tail(text: &str, count: usize, pieces: &mut Vec<String>) {
    pieces.push(text.to_string());
    pieces.extend(std::iter::repeat_n(String::new(), count.saturating_sub(1)));
}

/// Offset in `breaks` closest to `target`; ties go to the earlier offset.
pub fn find_closest_sentence_break(breaks: &[usize], target: usize) -> Option<usize> {
    breaks
        .iter()
        .copied()
        .min_by_key(|offset| offset.abs_diff(target))
}

/// Split `text` like [`split_proportional`], but prefer sentence boundaries.
///
/// `sentence_breaks` are cumulative end offsets of the sentences of `text`, in
/// characters. For every cut the sentence boundary closest to the target is
/// taken unless it deviates from the target by more than `tolerance` times the
/// target, in which case the nearest word break is used instead.
pub fn split_by_sentence_breaks(
    text: &str,
    sentence_breaks: &[usize],
    portions: &[f64],
    tolerance: f64,
) -> Result<Vec<String>, DistributionError> {
    if portions.len() <= 1 {
        return Ok(vec![text.to_string()]);
    }
    normalize(portions)?;

    let mut pieces = Vec::with_capacity(portions.len());
    let mut rest = text;
    let mut consumed = 0;

    for index in 0..portions.len() - 1 {
        let Ok(normalized) = normalize(&portions[index..]) else {
            push_zero_tail(rest, portions.len() - index, &mut pieces);
            return Ok(pieces);
        };
        if portions[index] == 0.0 {
            pieces.push(String::new());
            continue;
        }

        let chars: Vec<char> = rest.chars().collect();
        let target = (normalized[0] * chars.len() as f64).round() as usize;
        let local_breaks: Vec<usize> = sentence_breaks
            .iter()
            .filter(|&&offset| offset > consumed && offset <= consumed + chars.len())
            .map(|offset| offset - consumed)
            .collect();

        let cut = match find_closest_sentence_break(&local_breaks, target) {
            Some(offset) if offset.abs_diff(target) as f64 <= tolerance * target as f64 => offset,
            _ => {
                warn!("No sentence break within tolerance of {}, using word break", target);
                closest_break_in(&chars, target)
            }
        };

        let (head, tail) = split_at_char(rest, cut);
        pieces.push(head.to_string());
        rest = tail;
        consumed += cut;
    }

    pieces.push(rest.to_string());
    Ok(pieces)
}
