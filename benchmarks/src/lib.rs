//! Input generators shared by the benchmarks.

/// `num_lines` lines of code-like text with some multi-byte chars in each.
pub fn generate_source(num_lines: usize) -> String {
    (0..num_lines)
        .map(|i| format!("    let value_{i} = compute({i}, \"ünïcode\");\n"))
        .collect()
}

/// `num_lines` short lines alternating between `\r\n` and `\n` terminators.
pub fn generate_mixed_terminators(num_lines: usize) -> String {
    (0..num_lines)
        .map(|i| {
            if i % 2 == 0 {
                format!("line {i}\r\n")
            } else {
                format!("line {i}\n")
            }
        })
        .collect()
}
