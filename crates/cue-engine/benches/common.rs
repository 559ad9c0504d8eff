// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_screenplay(acts: usize) -> String {
    let mut content = String::new();

    for act in 1..=acts {
        content.push_str(&format!("Act {act} - The *{act}th* Movement\n\n"));
        for scene in 1..=3 {
            content.push_str(&format!("Scene {scene}\n"));
            content.push_str("> INT. STAGE - NIGHT\n> Rain against the [windows].\n\n");
            content.push_str("JOHN: (quietly) Are you there?\n");
            content.push_str("MARY: I am. **Always.**\n");
            content.push_str("^JOHN: Always.\n");
            content.push_str("CHORUS: ~ (together) Over the *water*\n");
            content.push_str("~ under the sky\n~ home again\n");
            content.push_str("The lights dim. // fade over four counts\n\n");
        }
        content.push_str("---\n");
    }
    content.push_str("The End\n");
    content
}

#[allow(dead_code)]
pub fn generate_long_lines(lines: usize, width: usize) -> String {
    let unit = "*a* [b] (c) ";
    let line = format!("SPEAKER: {}", unit.repeat(width / unit.len()));
    let mut content = String::with_capacity((line.len() + 1) * lines);
    for _ in 0..lines {
        content.push_str(&line);
        content.push('\n');
    }
    content
}
