//! Slang-to-canonical text rewriting.
//!
//! Pure text → text, applied before lexing. Maximal `[A-Za-z_]+` runs
//! outside string literals are looked up in the slang table and replaced
//! by their canonical keyword; everything else — string literal contents
//! included — passes through verbatim. The pipeline downstream treats
//! the output as ordinary source text and makes no assumption about
//! what was substituted.

/// The slang vocabulary and its canonical spellings.
const SLANG: &[(&str, &str)] = &[
    ("lowkey", "let"),
    ("deadass", "const"),
    ("cook", "fn"),
    ("vibecheck", "if"),
    ("nah", "else"),
    ("grind", "for"),
    ("bounce", "exit"),
];

fn canonical(word: &str) -> Option<&'static str> {
    SLANG
        .iter()
        .find(|(slang, _)| *slang == word)
        .map(|(_, keyword)| *keyword)
}

#[inline]
fn is_word_char(ch: char) -> bool {
    ch.is_ascii_alphabetic() || ch == '_'
}

/// Rewrite informal vocabulary into canonical keywords.
pub fn rewrite(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut pos = 0;
    while let Some(ch) = raw[pos..].chars().next() {
        if ch == '"' {
            // Copy the whole string literal through its closing quote
            // (or to end of input if unterminated — the lexer reports
            // that, not us).
            let start = pos;
            pos += 1;
            pos = match raw[pos..].find('"') {
                Some(rel) => pos + rel + 1,
                None => raw.len(),
            };
            out.push_str(&raw[start..pos]);
        } else if is_word_char(ch) {
            let start = pos;
            while let Some(ch) = raw[pos..].chars().next() {
                if !is_word_char(ch) {
                    break;
                }
                pos += ch.len_utf8();
            }
            let word = &raw[start..pos];
            out.push_str(canonical(word).unwrap_or(word));
        } else {
            out.push(ch);
            pos += ch.len_utf8();
        }
    }
    out
}
