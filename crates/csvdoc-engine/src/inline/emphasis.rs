//! Emphasis and strikethrough scanning.
//!
//! These constructs need to look at the characters on both sides of a
//! delimiter (no match after whitespace, no single-delimiter match
//! inside a word), so they are hand-scanned rather than handled with
//! regular expressions. Each pass walks the text once and copies it to
//! an output buffer, splicing in the HTML wrapper wherever a complete
//! construct is found; anything incomplete is copied through verbatim.

/// A word character for delimiter-adjacency checks (ASCII, underscore
/// included, so `snake_case` never becomes italic).
fn is_word(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

fn run_len(chars: &[char], start: usize, delim: char) -> usize {
    chars[start..].iter().take_while(|&&c| c == delim).count()
}

/// `~~text~~` → `<del>text</del>`.
///
/// Delimiters are runs of two or more tildes; the inner text must be at
/// least two characters and start and end with something that is
/// neither whitespace nor a tilde.
pub(super) fn expand_strikethrough(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len());
    let mut i = 0;

    while i < chars.len() {
        if chars[i] == '~' && (i == 0 || chars[i - 1] != '~') {
            let run = run_len(&chars, i, '~');
            if run >= 2 {
                let inner_start = i + run;
                if inner_start < chars.len() && !chars[inner_start].is_whitespace() {
                    if let Some(close) = find_tilde_closer(&chars, inner_start) {
                        out.push_str("<del>");
                        out.extend(&chars[inner_start..close]);
                        out.push_str("</del>");
                        i = close + run_len(&chars, close, '~');
                        continue;
                    }
                }
                // no closer: the whole run is literal
                out.extend(&chars[i..i + run]);
                i += run;
                continue;
            }
        }
        out.push(chars[i]);
        i += 1;
    }
    out
}

/// First tilde run of length >= 2 whose preceding character is neither
/// whitespace nor a tilde, starting far enough in for a two-character
/// inner text.
fn find_tilde_closer(chars: &[char], inner_start: usize) -> Option<usize> {
    let mut j = inner_start + 2;
    while j < chars.len() {
        if chars[j] == '~' && chars[j - 1] != '~' && !chars[j - 1].is_whitespace() {
            let run = run_len(chars, j, '~');
            if run >= 2 {
                return Some(j);
            }
            j += run;
        } else {
            j += 1;
        }
    }
    None
}

/// `***text***` / `___text___` → `<strong><em>text</em></strong>`.
///
/// The inner text may be empty but may not start after whitespace, end
/// before whitespace, or span a line break.
pub(super) fn expand_bold_italic(text: &str, delim: char) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len());
    let mut i = 0;

    while i < chars.len() {
        if is_delim_seq(&chars, i, delim, 3) {
            let after = i + 3;
            if after < chars.len() && !chars[after].is_whitespace() {
                let mut j = after;
                let mut found = None;
                while j + 3 <= chars.len() {
                    if matches!(chars[j], '\n' | '\r') {
                        break;
                    }
                    if is_delim_seq(&chars, j, delim, 3) && !chars[j - 1].is_whitespace() {
                        found = Some(j);
                        break;
                    }
                    j += 1;
                }
                if let Some(close) = found {
                    out.push_str("<strong><em>");
                    out.extend(&chars[after..close]);
                    out.push_str("</em></strong>");
                    i = close + 3;
                    continue;
                }
            }
        }
        out.push(chars[i]);
        i += 1;
    }
    out
}

/// `**text**` / `__text__` → `<strong>text</strong>`.
///
/// The delimiter is a run of exactly two; the inner text needs at least
/// two characters, starting and ending with something that is neither
/// whitespace nor the delimiter.
pub(super) fn expand_bold(text: &str, delim: char) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len());
    let mut i = 0;

    while i < chars.len() {
        if chars[i] == delim && (i == 0 || chars[i - 1] != delim) {
            let run = run_len(&chars, i, delim);
            if run == 2 {
                let after = i + 2;
                if after < chars.len() && !chars[after].is_whitespace() {
                    if let Some(close) = find_bold_closer(&chars, after, delim) {
                        out.push_str("<strong>");
                        out.extend(&chars[after..close]);
                        out.push_str("</strong>");
                        i = close + 2;
                        continue;
                    }
                }
            }
            out.extend(&chars[i..i + run]);
            i += run;
            continue;
        }
        out.push(chars[i]);
        i += 1;
    }
    out
}

fn find_bold_closer(chars: &[char], inner_start: usize, delim: char) -> Option<usize> {
    let mut j = inner_start + 2;
    while j + 2 <= chars.len() {
        if chars[j] == delim
            && chars[j + 1] == delim
            && chars[j - 1] != delim
            && !chars[j - 1].is_whitespace()
            && (j + 2 == chars.len() || chars[j + 2] != delim)
        {
            return Some(j);
        }
        j += 1;
    }
    None
}

/// `*text*` / `_text_` → `<em>text</em>`.
///
/// Single delimiters additionally refuse to match against a word
/// character on the outside, so mid-word underscores and asterisks stay
/// literal.
pub(super) fn expand_italic(text: &str, delim: char) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len());
    let mut i = 0;

    while i < chars.len() {
        let opener = chars[i] == delim
            && (i == 0 || (chars[i - 1] != delim && !is_word(chars[i - 1])))
            && i + 1 < chars.len()
            && chars[i + 1] != delim
            && !chars[i + 1].is_whitespace();
        if opener {
            if let Some(close) = find_italic_closer(&chars, i + 1, delim) {
                out.push_str("<em>");
                out.extend(&chars[i + 1..close]);
                out.push_str("</em>");
                i = close + 1;
                continue;
            }
        }
        out.push(chars[i]);
        i += 1;
    }
    out
}

fn find_italic_closer(chars: &[char], inner_start: usize, delim: char) -> Option<usize> {
    let mut j = inner_start + 2;
    while j < chars.len() {
        if chars[j] == delim
            && chars[j - 1] != delim
            && !chars[j - 1].is_whitespace()
            && (j + 1 == chars.len() || (chars[j + 1] != delim && !is_word(chars[j + 1])))
        {
            return Some(j);
        }
        j += 1;
    }
    None
}

/// `len` consecutive delimiter characters starting at `start`.
fn is_delim_seq(chars: &[char], start: usize, delim: char, len: usize) -> bool {
    start + len <= chars.len() && chars[start..start + len].iter().all(|&c| c == delim)
}
