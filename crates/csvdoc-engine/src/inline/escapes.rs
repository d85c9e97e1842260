//! Backslash-escape protection: escaped punctuation is swapped for
//! private-use codepoints before any other pass runs, and swapped back
//! at the very end.

/// Characters that `\` can escape.
const ESCAPABLE: [char; 8] = ['*', '_', '`', '[', ']', '(', ')', '~'];

/// One private-use placeholder per escapable character.
const PLACEHOLDERS: [char; 8] = [
    '\u{E010}', '\u{E011}', '\u{E012}', '\u{E013}', '\u{E014}', '\u{E015}', '\u{E016}', '\u{E017}',
];

/// Replaces `\x` (for escapable `x`) with the placeholder for `x`.
pub(super) fn protect(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '\\'
            && let Some(&next) = chars.peek()
            && let Some(idx) = ESCAPABLE.iter().position(|&e| e == next)
        {
            out.push(PLACEHOLDERS[idx]);
            chars.next();
            continue;
        }
        out.push(c);
    }
    out
}

/// Swaps placeholders back to their literal characters.
pub(super) fn restore(text: &str) -> String {
    text.chars()
        .map(|c| match PLACEHOLDERS.iter().position(|&p| p == c) {
            Some(idx) => ESCAPABLE[idx],
            None => c,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn protect_and_restore_round_trip() {
        let text = r"a \* b \_ c \` d \[ e \] f \( g \) h \~ i";
        let protected = protect(text);
        assert!(!protected.contains('\\'));
        assert_eq!(restore(&protected), r"a * b _ c ` d [ e ] f ( g ) h ~ i");
    }

    #[test]
    fn unknown_escapes_keep_the_backslash() {
        assert_eq!(protect(r"a \n b \\"), r"a \n b \\");
    }

    #[test]
    fn trailing_backslash_is_literal() {
        assert_eq!(protect(r"end \"), r"end \");
    }
}
