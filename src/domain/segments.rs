// Run segmentation of discrete per-sample labels

/// Maximal contiguous run of samples sharing one label.
/// Indices are inclusive; `end` of one segment equals `start` of the next
/// so the rendered polyline stays connected where the color changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment {
    pub label: usize,
    pub start: usize,
    pub end: usize,
}

/// Partition a label sequence into maximal contiguous runs.
///
/// Single forward scan. When the label changes at index `i`, the current
/// segment closes at `i - 1` and the next one opens at `i - 1`, duplicating
/// that boundary index in both traces. The final segment ends at `N - 1`
/// with no extension, so the segments cover `0..N` with exactly one shared
/// index per adjacent pair.
pub fn segment_runs(labels: &[usize]) -> Vec<Segment> {
    let mut segments = Vec::new();
    let Some(&first) = labels.first() else {
        return segments;
    };

    let mut current = first;
    let mut start = 0;
    for (i, &label) in labels.iter().enumerate().skip(1) {
        if label != current {
            segments.push(Segment {
                label: current,
                start,
                end: i - 1,
            });
            current = label;
            start = i - 1;
        }
    }
    segments.push(Segment {
        label: current,
        start,
        end: labels.len() - 1,
    });

    segments
}
