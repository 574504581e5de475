// src/present/render.rs
//! Text layouts for sorted results.
//!
//! Both layouts are consumed by scripts, so the exact characters matter:
//! lists are written as Python list literals and long blocks are framed by
//! a ten-dash separator line.

use crate::error::Result;
use crate::graph::{Twitterverse, User};

pub const SEPARATOR: &str = "----------";

/// `['a', 'b']`
#[must_use]
pub fn render_short(usernames: &[String]) -> String {
    list_literal(usernames)
}

/// One block per user, each followed by a separator, with a leading
/// separator before the first block.
///
/// # Errors
/// Returns `UnknownUser` if a username has no profile.
pub fn render_long(graph: &Twitterverse, usernames: &[String]) -> Result<String> {
    let mut out = String::new();
    out.push_str(SEPARATOR);
    out.push('\n');
    for username in usernames {
        push_block(&mut out, graph.require(username)?);
    }
    Ok(out)
}

fn push_block(out: &mut String, user: &User) {
    out.push_str(&user.username);
    out.push('\n');
    out.push_str(&format!("name: {}\n", user.name));
    out.push_str(&format!("location: {}\n", user.location));
    out.push_str(&format!("website: {}\n", user.website));
    out.push_str("bio:\n");
    out.push_str(&user.bio);
    out.push('\n');
    out.push_str(&format!("following: {}\n", list_literal(&user.following)));
    out.push_str(SEPARATOR);
    out.push('\n');
}

/// Writes a list of strings the way Python's `repr` would.
#[must_use]
pub fn list_literal(items: &[String]) -> String {
    let quoted: Vec<String> = items.iter().map(|s| string_literal(s)).collect();
    format!("[{}]", quoted.join(", "))
}

/// Single quotes unless the text contains a single quote and no double quote.
///
/// Characters Python considers non-printable (controls, separators other than
/// the ASCII space, format and private-use characters, noncharacters) are
/// written as `\xhh`, `\uhhhh` or `\Uhhhhhhhh`. Unassigned code points are
/// written as-is.
#[must_use]
pub fn string_literal(s: &str) -> String {
    let quote = if s.contains('\'') && !s.contains('"') { '"' } else { '\'' };
    let mut out = String::with_capacity(s.len() + 2);
    out.push(quote);
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c == quote => {
                out.push('\\');
                out.push(c);
            }
            c if !is_printable(c) => out.push_str(&escape(c)),
            c => out.push(c),
        }
    }
    out.push(quote);
    out
}

fn escape(c: char) -> String {
    match u32::from(c) {
        n @ 0..=0xff => format!("\\x{n:02x}"),
        n @ 0x100..=0xffff => format!("\\u{n:04x}"),
        n => format!("\\U{n:08x}"),
    }
}

fn is_printable(c: char) -> bool {
    if c == ' ' {
        return true;
    }
    !(c.is_control() || c.is_whitespace() || is_format(c) || is_private_use(c) || is_noncharacter(c))
}

/// General category Cf.
fn is_format(c: char) -> bool {
    matches!(
        u32::from(c),
        0xad | 0x600..=0x605
            | 0x61c
            | 0x6dd
            | 0x70f
            | 0x890..=0x891
            | 0x8e2
            | 0x180e
            | 0x200b..=0x200f
            | 0x202a..=0x202e
            | 0x2060..=0x2064
            | 0x2066..=0x206f
            | 0xfeff
            | 0xfff9..=0xfffb
            | 0x110bd
            | 0x110cd
            | 0x13430..=0x1343f
            | 0x1bca0..=0x1bca3
            | 0x1d173..=0x1d17a
            | 0xe0001
            | 0xe0020..=0xe007f
    )
}

fn is_private_use(c: char) -> bool {
    matches!(u32::from(c), 0xe000..=0xf8ff | 0xf_0000..=0xf_fffd | 0x10_0000..=0x10_fffd)
}

fn is_noncharacter(c: char) -> bool {
    let n = u32::from(c);
    (0xfdd0..=0xfdef).contains(&n) || n & 0xfffe == 0xfffe
}
