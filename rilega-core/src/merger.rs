//! Soft-wrap line merging
//!
//! Document extraction breaks sentences at the source document's visual line
//! width. The merger rejoins those fragments: a line continues the previous
//! one when the previous line did not end cleanly, the new line starts with a
//! lowercase letter, and the new line is not itself a section header.

use crate::vocabulary::Vocabulary;

/// Joins soft-wrapped raw lines back into logical lines
#[derive(Debug)]
pub struct LineMerger<'v> {
    vocabulary: &'v Vocabulary,
}

impl<'v> LineMerger<'v> {
    /// Create a merger using the given vocabulary's policy
    pub fn new(vocabulary: &'v Vocabulary) -> Self {
        Self { vocabulary }
    }

    /// Merge raw lines into logical lines
    ///
    /// Deterministic and order-preserving. Blank lines flush the current
    /// buffer and are otherwise dropped; every other line is either appended
    /// to the buffer with a single joining space or starts a new logical
    /// line. Output length never exceeds the number of non-blank inputs.
    pub fn merge<'s, I>(&self, lines: I) -> Vec<String>
    where
        I: IntoIterator<Item = &'s str>,
    {
        let mut merged: Vec<String> = Vec::new();
        let mut buffer = String::new();

        for line in lines {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                if !buffer.is_empty() {
                    merged.push(std::mem::take(&mut buffer));
                }
                continue;
            }

            if buffer.is_empty() {
                buffer.push_str(trimmed);
                continue;
            }

            if self.is_continuation(&buffer, trimmed) {
                buffer.push(' ');
                buffer.push_str(trimmed);
            } else {
                merged.push(std::mem::take(&mut buffer));
                buffer.push_str(trimmed);
            }
        }

        if !buffer.is_empty() {
            merged.push(buffer);
        }

        merged
    }

    fn is_continuation(&self, buffer: &str, trimmed: &str) -> bool {
        let ends_clean = buffer
            .chars()
            .next_back()
            .is_some_and(|ch| self.vocabulary.ends_clean(ch));
        let starts_lower = trimmed
            .chars()
            .next()
            .is_some_and(|ch| self.vocabulary.starts_lowercase(ch));

        // Headers always start a new logical line, even mid-sentence
        !ends_clean && starts_lower && !self.vocabulary.is_section_header(trimmed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vocabulary::get_vocabulary;

    fn merge(lines: &[&str]) -> Vec<String> {
        let vocab = get_vocabulary("multi").unwrap();
        LineMerger::new(&vocab).merge(lines.iter().copied())
    }

    #[test]
    fn test_lowercase_continuation_merges() {
        let merged = merge(&["I led a team of five", "engineers across three"]);
        assert_eq!(merged, vec!["I led a team of five engineers across three"]);
    }

    #[test]
    fn test_clean_ending_blocks_merge() {
        let merged = merge(&["The project shipped on time.", "we moved on"]);
        assert_eq!(merged, vec!["The project shipped on time.", "we moved on"]);
    }

    #[test]
    fn test_all_clean_endings_block_merge() {
        for ending in [".", ":", ";", "?", "!"] {
            let first = format!("First line{ending}");
            let merged = merge(&[&first, "continuation text"]);
            assert_eq!(merged.len(), 2, "ending {ending:?} should flush");
        }
    }

    #[test]
    fn test_uppercase_start_blocks_merge() {
        let merged = merge(&["Worked on backend services", "Designed the new API"]);
        assert_eq!(merged.len(), 2);
    }

    #[test]
    fn test_accented_lowercase_continues() {
        let merged = merge(&["Ha coordinato il gruppo", "è stato promosso"]);
        assert_eq!(merged, vec!["Ha coordinato il gruppo è stato promosso"]);
    }

    #[test]
    fn test_section_header_never_merges() {
        // "competenze" starts lowercase and would otherwise continue
        let merged = merge(&["Responsabile del team di backend", "competenze"]);
        assert_eq!(
            merged,
            vec!["Responsabile del team di backend", "competenze"]
        );
    }

    #[test]
    fn test_blank_line_flushes_buffer() {
        let merged = merge(&["First fragment", "", "second paragraph"]);
        assert_eq!(merged, vec!["First fragment", "second paragraph"]);
    }

    #[test]
    fn test_leading_blank_lines_skipped() {
        let merged = merge(&["", "   ", "Only line"]);
        assert_eq!(merged, vec!["Only line"]);
    }

    #[test]
    fn test_single_line_input() {
        assert_eq!(merge(&["Just one line"]), vec!["Just one line"]);
    }

    #[test]
    fn test_empty_input() {
        assert!(merge(&[]).is_empty());
    }

    #[test]
    fn test_whitespace_trimmed_per_line() {
        let merged = merge(&["  padded start", "   and padded continuation  "]);
        assert_eq!(merged, vec!["padded start and padded continuation"]);
    }

    #[test]
    fn test_chain_of_continuations() {
        let merged = merge(&["The service handled", "ten thousand requests", "per second"]);
        assert_eq!(
            merged,
            vec!["The service handled ten thousand requests per second"]
        );
    }

    #[test]
    fn test_digit_start_blocks_merge() {
        let merged = merge(&["Grew the team from", "2019 onwards"]);
        assert_eq!(merged.len(), 2);
    }
}
