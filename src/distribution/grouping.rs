/*!
 * Group and portion assignment.
 *
 * A group is a maximal run of utterances closed by a separator (`lines == 0`)
 * or by the end of the sequence. The separator belongs to the group it closes.
 */

use log::debug;

use crate::utterance::Utterance;

/// Assign a group index to every utterance and return the summed content
/// length of each group, indexed by group.
///
/// Separators close the current group and do not add to its sum.
pub fn assign_groups(utterances: &mut [Utterance]) -> Vec<usize> {
    let mut group_sums = Vec::new();
    let mut running_sum = 0;
    let mut group = 0;

    for utterance in utterances.iter_mut() {
        utterance.group = group;
        if utterance.is_separator() {
            group_sums.push(running_sum);
            group += 1;
            running_sum = 0;
        } else {
            running_sum += utterance.content_len();
        }
    }

    if utterances.last().is_some_and(|utterance| !utterance.is_separator()) {
        group_sums.push(running_sum);
    }

    debug!("Assigned {} utterance(s) to {} group(s)", utterances.len(), group_sums.len());
    group_sums
}

/// Set each utterance's share of its group's length.
///
/// Empty utterances, separators and members of zero-length groups get a
/// portion of 0 and are marked as separators so they receive no text of their
/// own.
pub fn assign_portions(utterances: &mut [Utterance], group_sums: &[usize]) {
    for utterance in utterances.iter_mut() {
        let length = utterance.content_len();
        let group_sum = group_sums.get(utterance.group).copied().unwrap_or(0);

        if length == 0 || group_sum == 0 || utterance.is_separator() {
            utterance.portion = 0.0;
            utterance.lines = 0;
        } else {
            utterance.portion = length as f64 / group_sum as f64;
        }
    }
}

/// Number of groups the utterances form, without mutating them.
pub fn group_count(utterances: &[Utterance]) -> usize {
    let separators = utterances.iter().filter(|utterance| utterance.is_separator()).count();
    match utterances.last() {
        Some(last) if !last.is_separator() => separators + 1,
        _ => separators,
    }
}
