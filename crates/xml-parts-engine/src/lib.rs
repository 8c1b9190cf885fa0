//! # xml-parts-engine
//!
//! Checks that serialized XML/HTML contains an expected sequence of markup
//! fragments, ignoring differences that carry no meaning:
//!
//! - whitespace between fragments (`<div><br/></div>` vs pretty printed)
//! - empty element spelling (`<br/>`, `<br />`, `<br>`, `<br></br>`)
//! - attribute quote encoding (`"` vs `&quot;`)
//!
//! ## Pipeline
//!
//! ```text
//! tokens → classify → Fragment → pieces → RegexSyntax → Regex
//!          (fragment)                     (syntax)
//! ```
//!
//! Classification decides what counts as equivalent, rendering decides how to
//! say that in regex syntax. Both stages are plain functions over strings and
//! can be tested without building a regex.
//!
//! ## Quick Start
//!
//! ```
//! use xml_parts_engine::compile;
//!
//! let pattern = compile(["<div>", "<br/>", "</div>"]).unwrap();
//!
//! assert!(pattern.test("<div><br/></div>"));
//! assert!(pattern.test("<div>\n  <br />\n</div>"));
//! assert!(pattern.test("<div><br></br></div>"));
//! assert!(!pattern.test("<div><span/></div>"));
//!
//! let mismatch = pattern.explain("<div><span/></div>").unwrap();
//! assert_eq!(mismatch.index, 1);
//! ```

pub mod adapter;
pub mod error;
pub mod fragment;
pub mod pattern;
pub mod syntax;

pub use adapter::{
    Element, EmptyElement, MarkupAdapter, Node, QuoteStyle, RenderStyle, StyledAdapter, words,
};
pub use error::PatternError;
pub use fragment::{Fragment, Piece};
pub use pattern::{Mismatch, Pattern};
pub use syntax::RegexSyntax;

/// Compiles expected tokens into a [`Pattern`].
pub fn compile<I, S>(tokens: I) -> Result<Pattern, PatternError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    Pattern::compile(tokens)
}
