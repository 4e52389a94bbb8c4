// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Serialization of the table blob handed to the crontab binary

/// Serialize head lines and job lines into the table file content
///
/// Both empty produces an empty blob, never blank padding alone. Otherwise:
/// each head line newline-terminated, one blank separator line, each job
/// line newline-terminated, one trailing blank line. The exact byte
/// placement is part of the contract (see `writer_tests`).
pub fn serialize(head_lines: &[String], lines: &[String]) -> String {
    if head_lines.is_empty() && lines.is_empty() {
        return String::new();
    }

    let mut blob = String::new();
    for line in head_lines {
        blob.push_str(line);
        blob.push('\n');
    }
    blob.push('\n');
    for line in lines {
        blob.push_str(line);
        blob.push('\n');
    }
    blob.push('\n');
    blob
}

#[cfg(test)]
#[path = "writer_tests.rs"]
mod tests;
