//! Folding of long records into `88` continuation lines.
//!
//! Records are written field by field. Fields that may be long go through
//! [`LineWrapper::push_field`], which breaks the record before an element
//! that would overflow the configured width: the current line is closed
//! with `/` and writing resumes on a fresh `88,` line. Reading the result
//! back and folding the continuations yields the same record.

const CONTINUATION_HEAD: &str = "88,";

/// Greedy line breaker for a single record.
#[derive(Debug)]
pub(crate) struct LineWrapper {
    max_width: Option<usize>,
    done: String,
    line: String,
}

impl LineWrapper {
    /// Starts a record with `head` (e.g. `16,409,100,`).
    ///
    /// A width of `None` or zero disables wrapping.
    pub(crate) fn new(head: &str, max_width: Option<usize>) -> Self {
        Self {
            max_width: max_width.filter(|&width| width > 0),
            done: String::new(),
            line: head.to_string(),
        }
    }

    /// Appends literal text that never triggers a break, such as separators.
    pub(crate) fn push_str(&mut self, text: &str) {
        self.line.push_str(text);
    }

    /// Appends a field whose comma separated elements may be split across lines.
    pub(crate) fn push_field(&mut self, input: &str) {
        let Some(max_width) = self.max_width else {
            self.line.push_str(input);
            return;
        };

        let mut pending: Option<String> = None;
        for element in input.split(',') {
            let pending_len = pending.as_ref().map_or(0, String::len);
            let needed = self.line.len() + pending_len + element.len() + 2;
            let fresh_line = pending.is_none() && self.line == CONTINUATION_HEAD;

            if needed > max_width && !fresh_line {
                match pending.take() {
                    // Nothing of this field on the line yet: drop the separator.
                    None => {
                        self.line.pop();
                    }
                    Some(text) => self.line.push_str(&text),
                }
                self.line.push_str("/\n");
                self.done.push_str(&self.line);
                self.line.clear();
                self.line.push_str(CONTINUATION_HEAD);
                pending = Some(element.to_string());
            } else {
                match pending.as_mut() {
                    Some(text) => {
                        text.push(',');
                        text.push_str(element);
                    }
                    None => pending = Some(element.to_string()),
                }
            }
        }

        if let Some(text) = pending {
            self.line.push_str(&text);
        }
    }

    /// Returns the record text, lines joined by `\n`.
    pub(crate) fn finish(mut self) -> String {
        self.done.push_str(&self.line);
        self.done
    }
}
