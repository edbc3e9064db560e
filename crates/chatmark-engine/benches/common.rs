// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_reply(sections: usize) -> String {
    let base = "## Section\n\nSome **bold** and *italic* text with `code`.\n\n- Bullet point\n  - Nested item\n- Another item\n1. First\n2. Second\n\n```rust\nfn example() {\n    println!(\"Hello\");\n}\n```\n\n---\n";
    base.repeat(sections)
}
