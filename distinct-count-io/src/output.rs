use std::io::{self, BufWriter, Write};

/// Writes one answer per line, `\n`-terminated, through a buffer.
pub fn write_answers(writer: impl Write, answers: &[u32]) -> io::Result<()> {
    let mut out = BufWriter::new(writer);
    for answer in answers {
        writeln!(out, "{answer}")?;
    }
    out.flush()
}

/// Renders answers the way [`write_answers`] writes them.
pub fn format_answers(answers: &[u32]) -> String {
    let mut out = String::with_capacity(answers.len() * 4);
    for answer in answers {
        out.push_str(&answer.to_string());
        out.push('\n');
    }
    out
}
