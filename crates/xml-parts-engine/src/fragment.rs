//! # Fragments - Classifying Expected Tokens
//!
//! This is the first stage of compilation: each expected token is classified
//! on its own, without looking at its neighbours, and lowered into a list of
//! [`Piece`]s that say *what* counts as an equivalent rendering without saying
//! anything about regex syntax.
//!
//! ```
//! use xml_parts_engine::fragment::{Fragment, Piece};
//!
//! assert_eq!(
//!     Fragment::classify("<br/>"),
//!     Fragment::SelfClosingTag { name: "br".to_string() }
//! );
//!
//! let pieces = Fragment::classify(r#"id="x""#).pieces();
//! assert_eq!(
//!     pieces,
//!     vec![
//!         Piece::Text("id=".to_string()),
//!         Piece::Quote,
//!         Piece::Text("x".to_string()),
//!         Piece::Quote,
//!     ]
//! );
//! ```

/// A single expected token after classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fragment {
    /// `<name/>`: an empty element, which producers spell several ways.
    SelfClosingTag { name: String },
    /// Anything else. Matched verbatim apart from quote encoding.
    Literal { text: String },
}

/// Dialect-free building blocks of an equivalent rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Piece {
    /// Text that must appear exactly.
    Text(String),
    /// A double quote, written raw or as `&quot;`.
    Quote,
    /// Zero or one literal space.
    OptionalSpace,
    /// Any one of the branches.
    Choice(Vec<Vec<Piece>>),
}

impl Fragment {
    /// Classifies a token by shape alone. Only `<name/>` with a non-empty
    /// ASCII word-character name is a self-closing tag.
    pub fn classify(token: &str) -> Self {
        match self_closing_name(token) {
            Some(name) => Fragment::SelfClosingTag {
                name: name.to_string(),
            },
            None => Fragment::Literal {
                text: token.to_string(),
            },
        }
    }

    /// Lowers the fragment into the pieces every accepted rendering is made of.
    pub fn pieces(&self) -> Vec<Piece> {
        match self {
            Fragment::SelfClosingTag { name } => vec![Piece::Choice(vec![
                vec![
                    Piece::Text(format!("<{name}")),
                    Piece::OptionalSpace,
                    Piece::Text("/>".to_string()),
                ],
                vec![Piece::Text(format!("<{name}>"))],
                vec![Piece::Text(format!("<{name}></{name}>"))],
            ])],
            Fragment::Literal { text } => literal_pieces(text),
        }
    }
}

fn self_closing_name(token: &str) -> Option<&str> {
    let name = token.strip_prefix('<')?.strip_suffix("/>")?;
    let is_word = |c: char| c.is_ascii_alphanumeric() || c == '_';
    (!name.is_empty() && name.chars().all(is_word)).then_some(name)
}

// Each quote gets its own Piece so encodings can be mixed within a token.
fn literal_pieces(text: &str) -> Vec<Piece> {
    let mut pieces = Vec::new();
    for (i, segment) in text.split('"').enumerate() {
        if i > 0 {
            pieces.push(Piece::Quote);
        }
        if !segment.is_empty() {
            pieces.push(Piece::Text(segment.to_string()));
        }
    }
    pieces
}
