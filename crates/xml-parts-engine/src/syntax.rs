//! Rendering [`Piece`]s into `regex` crate syntax.
//!
//! This is the second compilation stage. It only knows how to spell pieces in
//! the regex dialect; what counts as equivalent is decided in
//! [`crate::fragment`].

use crate::fragment::{Fragment, Piece};

/// Separator placed between consecutive tokens: any run of whitespace, or none.
pub const WHITESPACE_GAP: &str = r"\s*";

const QUOTE: &str = r#"(?:"|&quot;)"#;
const OPTIONAL_SPACE: &str = " ?";

/// Writes fragments as source for [`regex::Regex`].
#[derive(Debug, Clone, Copy, Default)]
pub struct RegexSyntax;

impl RegexSyntax {
    /// Renders a whole token sequence, joined by [`WHITESPACE_GAP`].
    pub fn render(&self, fragments: &[Fragment]) -> String {
        fragments
            .iter()
            .map(|fragment| self.render_fragment(fragment))
            .collect::<Vec<_>>()
            .join(WHITESPACE_GAP)
    }

    pub fn render_fragment(&self, fragment: &Fragment) -> String {
        self.render_pieces(&fragment.pieces())
    }

    pub fn render_pieces(&self, pieces: &[Piece]) -> String {
        let mut out = String::new();
        for piece in pieces {
            push_piece(&mut out, piece);
        }
        out
    }
}

fn push_piece(out: &mut String, piece: &Piece) {
    match piece {
        Piece::Text(text) => out.push_str(&regex::escape(text)),
        Piece::Quote => out.push_str(QUOTE),
        Piece::OptionalSpace => out.push_str(OPTIONAL_SPACE),
        Piece::Choice(branches) => {
            out.push_str("(?:");
            for (i, branch) in branches.iter().enumerate() {
                if i > 0 {
                    out.push('|');
                }
                for piece in branch {
                    push_piece(out, piece);
                }
            }
            out.push(')');
        }
    }
}
