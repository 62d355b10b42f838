//! Lyric segmentation transform

/// Reformat raw transcript text into lyric-style lines.
///
/// Every terminal punctuation mark (`.`, `?`, `!`), together with any
/// whitespace immediately following it, is replaced by the mark plus a
/// single line break. All other characters pass through unchanged.
///
/// This is a deliberate heuristic for song/verse structure, not a
/// grammatical sentence splitter: abbreviations, decimal numbers, and
/// quoted punctuation get no special treatment. The translation prompt
/// depends on this exact shape, so the behavior is pinned by tests.
pub fn segment_lyrics(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 16);
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        out.push(c);
        if matches!(c, '.' | '?' | '!') {
            while chars.peek().is_some_and(|n| n.is_whitespace()) {
                chars.next();
            }
            out.push('\n');
        }
    }

    out
}
