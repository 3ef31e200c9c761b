pub mod blocks;
pub mod inline;

#[cfg(test)]
mod tests;

use blocks::{Block, BlockBuilder, MarkdownLineClassifier};

/// Parses markup text into an ordered sequence of blocks.
///
/// Never fails: anything that cannot be classified more specifically
/// becomes a paragraph, and unmatched emphasis stays literal.
pub fn parse_markdown(text: &str) -> Vec<Block> {
    let classifier = MarkdownLineClassifier;
    let mut builder = BlockBuilder::new();

    for line in text.lines() {
        let lc = classifier.classify(line);
        builder.push(&lc);
    }

    builder.finish()
}
