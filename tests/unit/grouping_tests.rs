/*!
 * Tests for group and portion assignment
 */

use realign::Utterance;
use realign::distribution::{assign_groups, assign_portions, group_count};

fn sequences() -> Vec<Vec<Utterance>> {
    vec![
        vec![],
        vec![Utterance::separator()],
        vec![Utterance::new("one", 1)],
        vec![Utterance::new("one", 1), Utterance::separator()],
        vec![Utterance::separator(), Utterance::separator(), Utterance::new("x", 1)],
        vec![
            Utterance::new("alpha beta", 1),
            Utterance::new("", 1),
            Utterance::new("gamma", 2),
            Utterance::separator(),
            Utterance::new("delta", 1),
            Utterance::separator(),
            Utterance::new("epsilon zeta", 1),
            Utterance::new("eta", 1),
        ],
    ]
}

/// Group count is the number of separators, plus one unless the sequence ends in one
#[test]
fn test_assign_groups_withVariousSequences_shouldCountSeparatorsPlusOpenGroup() {
    for mut utterances in sequences() {
        let separators = utterances.iter().filter(|u| u.is_separator()).count();
        let open_group = utterances.last().is_some_and(|u| !u.is_separator());
        let expected = separators + usize::from(open_group);

        let sums = assign_groups(&mut utterances);

        assert_eq!(sums.len(), expected);
        assert_eq!(group_count(&utterances), expected);
        for utterance in &utterances {
            assert!(utterance.group < sums.len());
        }
    }
}

/// Group indices never decrease from left to right
#[test]
fn test_assign_groups_withVariousSequences_shouldBeMonotonic() {
    for mut utterances in sequences() {
        assign_groups(&mut utterances);
        let groups: Vec<usize> = utterances.iter().map(|u| u.group).collect();
        assert!(groups.windows(2).all(|pair| pair[0] <= pair[1]));
    }
}

/// A separator resets the running sum and starts a new group
#[test]
fn test_assign_groups_withSeparator_shouldResetGroupSum() {
    let mut utterances = vec![
        Utterance::new("Hello world", 1),
        Utterance::separator(),
        Utterance::new("Bye", 1),
    ];

    let sums = assign_groups(&mut utterances);

    assert_eq!(sums, vec![11, 3]);
    assert_eq!(utterances[0].group, 0);
    assert_eq!(utterances[1].group, 0);
    assert_eq!(utterances[2].group, 1);
}

/// Portions of non-degenerate groups sum to one
#[test]
fn test_assign_portions_withNonDegenerateGroups_shouldSumToOne() {
    for mut utterances in sequences() {
        let sums = assign_groups(&mut utterances);
        assign_portions(&mut utterances, &sums);

        for (group, sum) in sums.iter().enumerate() {
            if *sum == 0 {
                continue;
            }
            let total: f64 = utterances
                .iter()
                .filter(|u| u.group == group)
                .map(|u| u.portion)
                .sum();
            assert!((total - 1.0).abs() < 1e-9, "group {} sums to {}", group, total);
        }
    }
}

/// Empty members and members of zero-length groups are excluded from allocation
#[test]
fn test_assign_portions_withEmptyContent_shouldZeroPortionAndLines() {
    let mut utterances = vec![
        Utterance::new("", 1),
        Utterance::separator(),
        Utterance::new("text", 1),
        Utterance::new("", 3),
    ];

    let sums = assign_groups(&mut utterances);
    assign_portions(&mut utterances, &sums);

    assert_eq!(utterances[0].portion, 0.0);
    assert_eq!(utterances[0].lines, 0);
    assert_eq!(utterances[3].portion, 0.0);
    assert_eq!(utterances[3].lines, 0);
    assert_eq!(utterances[2].portion, 1.0);
    assert_eq!(utterances[2].lines, 1);
}
