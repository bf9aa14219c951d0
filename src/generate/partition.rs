//! Integer partitions and subtree slot combinations

/// All partitions of `total` into non-increasing positive parts
///
/// Largest part first, each part bounded by the previous one, so every
/// multiset is produced exactly once. `partitions(0)` is the single empty
/// partition.
pub fn partitions(total: usize) -> Vec<Vec<usize>> {
    let mut result = Vec::new();
    let mut current = Vec::new();
    partitions_recursive(total, total, &mut current, &mut result);
    result
}

fn partitions_recursive(
    remaining: usize,
    max_part: usize,
    current: &mut Vec<usize>,
    result: &mut Vec<Vec<usize>>,
) {
    if remaining == 0 {
        result.push(current.clone());
        return;
    }

    for part in (1..=remaining.min(max_part)).rev() {
        current.push(part);
        partitions_recursive(remaining - part, part, current, result);
        current.pop();
    }
}

/// Index choices, one per slot, for filling a partition with subtrees
///
/// `parts[i]` is the size of slot `i` and `candidates[i]` how many distinct
/// subtrees of that size exist. Where two adjacent slots have the same size
/// the later index never drops below the earlier one, so permutations of
/// equal-sized subtrees are produced once.
pub fn slot_combinations(parts: &[usize], candidates: &[usize]) -> Vec<Vec<usize>> {
    debug_assert_eq!(parts.len(), candidates.len());

    let mut result = Vec::new();
    let mut indices = vec![0; parts.len()];
    combinations_recursive(parts, candidates, 0, &mut indices, &mut result);
    result
}

fn combinations_recursive(
    parts: &[usize],
    candidates: &[usize],
    slot: usize,
    indices: &mut Vec<usize>,
    result: &mut Vec<Vec<usize>>,
) {
    if slot == parts.len() {
        result.push(indices.clone());
        return;
    }

    let start = if slot > 0 && parts[slot] == parts[slot - 1] {
        indices[slot - 1]
    } else {
        0
    };

    for index in start..candidates[slot] {
        indices[slot] = index;
        combinations_recursive(parts, candidates, slot + 1, indices, result);
    }
}
