// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_markdown_content(size: usize) -> String {
    let base = "# Title\n\n## Section\n\nParagraph with **bold** and *italic* content.\n\n- Bullet point\n  - Nested item\n- Another item\n\n1. First\n2. Second\n\n| Name | Value |\n|------|-------|\n| a | 1 |\n\n===\n\n";
    base.repeat(size)
}

#[allow(dead_code)]
pub fn generate_emphasis_heavy(lines: usize) -> String {
    let mut content = String::new();
    for i in 0..lines {
        content.push_str(&format!(
            "Line {i} has ***both*** and **bold** and _under_ and * stray markers *\n"
        ));
    }
    content
}
