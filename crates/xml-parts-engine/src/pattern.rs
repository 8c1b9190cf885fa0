use std::fmt;
use std::ops::Range;

use regex::Regex;

use crate::error::PatternError;
use crate::fragment::Fragment;
use crate::syntax::RegexSyntax;

/// A compiled, order-preserving matcher for a list of expected tokens.
///
/// Tokens must appear in the candidate in the given order, separated by any
/// amount of whitespace. Self-closing tags match any of their usual spellings
/// and double quotes match `&quot;` too. The match is not anchored.
#[derive(Debug, Clone)]
pub struct Pattern {
    tokens: Vec<String>,
    fragments: Vec<Fragment>,
    regex: Regex,
}

/// Where a candidate stopped matching, as reported by [`Pattern::explain`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mismatch {
    /// Index of the first token that could not be matched.
    pub index: usize,
    pub token: String,
    /// Byte offset just past the leftmost match of all earlier tokens, or
    /// `None` when even the first token is missing.
    pub matched_until: Option<usize>,
}

impl fmt::Display for Mismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.matched_until {
            Some(offset) => write!(
                f,
                "token {} {:?} not found after byte {}",
                self.index, self.token, offset
            ),
            None => write!(f, "token {} {:?} not found", self.index, self.token),
        }
    }
}

impl Pattern {
    /// Compiles tokens into a pattern. Token lists are not validated; an
    /// unbalanced list simply matches nothing useful.
    pub fn compile<I, S>(tokens: I) -> Result<Self, PatternError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let tokens: Vec<String> = tokens.into_iter().map(Into::into).collect();
        let fragments: Vec<Fragment> = tokens.iter().map(|t| Fragment::classify(t)).collect();
        let regex = build(&RegexSyntax.render(&fragments))?;

        log::debug!(
            "Compiled {} tokens into /{}/",
            tokens.len(),
            regex.as_str()
        );

        Ok(Self {
            tokens,
            fragments,
            regex,
        })
    }

    /// Returns true if an equivalent rendering occurs anywhere in `candidate`.
    pub fn test(&self, candidate: &str) -> bool {
        self.regex.is_match(candidate)
    }

    /// Byte range of the leftmost equivalent rendering in `candidate`.
    pub fn find(&self, candidate: &str) -> Option<Range<usize>> {
        self.regex.find(candidate).map(|m| m.range())
    }

    /// Explains why `candidate` does not match, or returns `None` if it does.
    ///
    /// Finds the longest prefix of the token list that still matches and
    /// reports the token right after it.
    pub fn explain(&self, candidate: &str) -> Option<Mismatch> {
        if self.test(candidate) {
            return None;
        }

        // Matching prefixes are monotone: if k tokens match, so do k - 1.
        // `lo` always matches, `hi` never does.
        let (mut lo, mut hi) = (0, self.fragments.len());
        let mut matched_until = None;
        while hi - lo > 1 {
            let mid = lo + (hi - lo) / 2;
            match self.prefix_end(mid, candidate) {
                Some(end) => {
                    lo = mid;
                    matched_until = Some(end);
                }
                None => hi = mid,
            }
        }

        let mismatch = Mismatch {
            index: lo,
            token: self.tokens[lo].clone(),
            matched_until,
        };
        log::trace!("{mismatch} in {candidate:?}");
        Some(mismatch)
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    pub fn fragments(&self) -> &[Fragment] {
        &self.fragments
    }

    /// The generated regex source.
    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }

    fn prefix_end(&self, len: usize, candidate: &str) -> Option<usize> {
        let source = RegexSyntax.render(&self.fragments[..len]);
        match Regex::new(&source) {
            Ok(prefix) => prefix.find(candidate).map(|m| m.end()),
            Err(e) => {
                log::warn!("Failed to build prefix matcher /{source}/: {e}");
                None
            }
        }
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn build(source: &str) -> Result<Regex, PatternError> {
    Regex::new(source).map_err(|source_err| PatternError::RegexBuildError {
        pattern: source.to_string(),
        source: source_err,
    })
}
