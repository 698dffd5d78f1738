use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordCount {
    pub word: String,
    pub count: usize,
}

/// Line, word and character totals for a piece of text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextStats {
    pub lines: usize,
    pub words: usize,
    /// Unicode scalar values, whitespace included.
    pub chars: usize,
    pub most_common: Option<WordCount>,
}

/// Which counts to report. All false means all of them, like `wc`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CountSelection {
    pub lines: bool,
    pub words: bool,
    pub chars: bool,
}

impl CountSelection {
    pub fn resolved(self) -> Self {
        if self.lines || self.words || self.chars {
            self
        } else {
            Self {
                lines: true,
                words: true,
                chars: true,
            }
        }
    }
}

/// Scan `text` once, counting lines, whitespace-separated words and chars.
///
/// A trailing line without a newline still counts as a line. Ties for the
/// most common word go to the word that appeared first.
pub fn scan_text(text: &str) -> TextStats {
    let mut counts: HashMap<&str, (usize, usize)> = HashMap::new();
    let mut words = 0;

    for (position, word) in text.split_whitespace().enumerate() {
        counts.entry(word).or_insert((0, position)).0 += 1;
        words += 1;
    }

    let most_common = counts
        .into_iter()
        .max_by(|(_, (a_count, a_first)), (_, (b_count, b_first))| {
            a_count.cmp(b_count).then(b_first.cmp(a_first))
        })
        .map(|(word, (count, _))| WordCount {
            word: word.to_string(),
            count,
        });

    TextStats {
        lines: text.lines().count(),
        words,
        chars: text.chars().count(),
        most_common,
    }
}
