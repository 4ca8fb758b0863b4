//! Fenced code block extraction

/// Markdown code fence
pub const FENCE: &str = "```";

/// Collect every fenced code block in `text`, fences included
///
/// Blocks are the shortest non-overlapping regions that open and close with
/// a fence. Each block is trimmed and the blocks are joined by a blank line.
/// Text without a complete block is returned unchanged.
pub fn extract_block(text: &str) -> String {
    let blocks = fenced_blocks(text);
    if blocks.is_empty() {
        return text.to_string();
    }

    blocks
        .iter()
        .map(|block| block.trim())
        .collect::<Vec<_>>()
        .join("\n\n")
}

fn fenced_blocks(text: &str) -> Vec<&str> {
    let mut blocks = Vec::new();
    let mut cursor = 0;

    while let Some(open) = text[cursor..].find(FENCE) {
        let start = cursor + open;
        let body = start + FENCE.len();
        let Some(close) = text[body..].find(FENCE) else {
            break;
        };
        let end = body + close + FENCE.len();
        blocks.push(&text[start..end]);
        cursor = end;
    }

    blocks
}
