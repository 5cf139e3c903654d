//! BIO tag decoding for token-classification output

use crate::model::ModelSpan;

/// A classified token: byte offsets into the source text and its tag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct TaggedToken<'a> {
    pub start: usize,
    pub end: usize,
    pub tag: &'a str,
}

/// Merge `B-X`/`I-X` runs into spans
///
/// `O` closes the open span. An `I-X` that does not continue an open `X`
/// starts a new span, and so does an unprefixed `X` unless it continues one.
pub(crate) fn decode(tokens: &[TaggedToken<'_>]) -> Vec<ModelSpan> {
    let mut spans = Vec::new();
    let mut open: Option<ModelSpan> = None;

    for token in tokens {
        let (begins, label) = match token.tag.split_once('-') {
            Some(("B", label)) => (true, label),
            Some(("I", label)) => (false, label),
            _ if token.tag == "O" => {
                spans.extend(open.take());
                continue;
            }
            _ => (false, token.tag),
        };

        match open.as_mut() {
            Some(span) if !begins && span.label == label => span.end = token.end,
            _ => {
                spans.extend(open.take());
                open = Some(ModelSpan::new(token.start, token.end, label));
            }
        }
    }

    spans.extend(open);
    spans
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tok(start: usize, end: usize, tag: &str) -> TaggedToken<'_> {
        TaggedToken { start, end, tag }
    }

    #[test]
    fn test_begin_inside_runs() {
        let tokens = [
            tok(0, 4, "B-PER"),
            tok(5, 7, "I-PER"),
            tok(8, 13, "I-PER"),
            tok(14, 16, "O"),
            tok(17, 23, "B-LOC"),
        ];
        assert_eq!(
            decode(&tokens),
            vec![ModelSpan::new(0, 13, "PER"), ModelSpan::new(17, 23, "LOC")]
        );
    }

    #[test]
    fn test_adjacent_begins_split() {
        let tokens = [tok(0, 3, "B-ORG"), tok(4, 8, "B-ORG")];
        assert_eq!(decode(&tokens).len(), 2);
    }

    #[test]
    fn test_orphan_inside_starts_span() {
        let tokens = [tok(0, 2, "O"), tok(3, 6, "I-MONEY"), tok(6, 9, "I-DATE")];
        assert_eq!(
            decode(&tokens),
            vec![ModelSpan::new(3, 6, "MONEY"), ModelSpan::new(6, 9, "DATE")]
        );
    }

    #[test]
    fn test_unprefixed_tags() {
        let tokens = [tok(0, 3, "ORG"), tok(4, 9, "ORG"), tok(10, 12, "O")];
        assert_eq!(decode(&tokens), vec![ModelSpan::new(0, 9, "ORG")]);
    }
}
