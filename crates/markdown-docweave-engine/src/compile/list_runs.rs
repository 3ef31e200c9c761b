use crate::span::Span;

/// Merges list item spans that touch into contiguous runs.
///
/// Two spans merge iff the first ends exactly where the second starts; any
/// gap, however small, starts a new run. Creating one list per run keeps
/// numbering sequential instead of restarting at 1 for every item.
pub fn merge_runs(spans: &[Span]) -> Vec<Span> {
    let mut merged: Vec<Span> = Vec::with_capacity(spans.len());
    for &span in spans {
        match merged.last_mut() {
            Some(prev) if prev.end == span.start => prev.end = span.end,
            _ => merged.push(span),
        }
    }
    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_input() {
        assert_eq!(merge_runs(&[]), vec![]);
    }

    #[test]
    fn contiguous_spans_merge_into_one() {
        let spans = [Span::new(1, 5), Span::new(5, 12), Span::new(12, 13)];
        assert_eq!(merge_runs(&spans), vec![Span::new(1, 13)]);
    }

    #[test]
    fn one_unit_gap_prevents_merge() {
        let spans = [Span::new(1, 5), Span::new(6, 9)];
        assert_eq!(merge_runs(&spans), spans.to_vec());
    }

    #[test]
    fn runs_restart_after_gap() {
        let spans = [
            Span::new(1, 4),
            Span::new(4, 8),
            Span::new(20, 25),
            Span::new(25, 30),
        ];
        assert_eq!(
            merge_runs(&spans),
            vec![Span::new(1, 8), Span::new(20, 30)]
        );
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn contiguous_lengths_merge_to_single_run(
                start in 0usize..1000,
                lens in prop::collection::vec(1usize..50, 1..20),
            ) {
                let mut spans = vec![];
                let mut at = start;
                for len in &lens {
                    spans.push(Span::new(at, at + len));
                    at += len;
                }
                prop_assert_eq!(merge_runs(&spans), vec![Span::new(start, at)]);
            }

            #[test]
            fn gapped_spans_never_merge(
                lens in prop::collection::vec((1usize..50, 1usize..5), 1..20),
            ) {
                let mut spans = vec![];
                let mut at = 1;
                for (len, gap) in &lens {
                    spans.push(Span::new(at, at + len));
                    at += len + gap;
                }
                prop_assert_eq!(merge_runs(&spans), spans);
            }
        }
    }
}
