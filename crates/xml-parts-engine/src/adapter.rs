//! Markup producers, seen from the matcher's side.
//!
//! A [`MarkupAdapter`] turns a build specification ([`Element`]) into a
//! serialized string. Different producers disagree on layout, on how empty
//! elements are spelled and on how attribute quotes are written; a
//! [`crate::Pattern`] has to accept all of them. [`StyledAdapter`] reproduces
//! those differences so the matcher can be checked against each one.

/// Nested description of the markup to build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub name: String,
    pub attributes: Vec<(String, String)>,
    pub children: Vec<Node>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    /// Text content, escaped on output.
    Text(String),
    /// Markup inserted verbatim.
    Raw(String),
}

impl Element {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push((name.into(), value.into()));
        self
    }

    pub fn child(mut self, element: Element) -> Self {
        self.children.push(Node::Element(element));
        self
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.children.push(Node::Text(text.into()));
        self
    }

    pub fn raw(mut self, markup: impl Into<String>) -> Self {
        self.children.push(Node::Raw(markup.into()));
        self
    }
}

/// Something that serializes a build specification.
pub trait MarkupAdapter {
    fn name(&self) -> &str;
    fn render(&self, spec: &Element) -> String;
}

/// How an element without children is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyElement {
    /// `<br/>`
    Slash,
    /// `<br />`
    SpacedSlash,
    /// `<br>`
    OpenOnly,
    /// `<br></br>`
    OpenClose,
}

/// How attribute values are delimited.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuoteStyle {
    /// `class="x"`
    Raw,
    /// `class=&quot;x&quot;`
    Entity,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderStyle {
    pub empty: EmptyElement,
    pub quotes: QuoteStyle,
    /// Indent width for pretty printing, `None` for compact output.
    pub indent: Option<usize>,
    /// Emit `<?xml version="1.0"?>` first.
    pub declaration: bool,
}

impl RenderStyle {
    /// Indented XML document with `<br/>`.
    pub fn xml() -> Self {
        Self {
            empty: EmptyElement::Slash,
            quotes: QuoteStyle::Raw,
            indent: Some(2),
            declaration: true,
        }
    }

    /// Compact HTML with `<br>`.
    pub fn html() -> Self {
        Self {
            empty: EmptyElement::OpenOnly,
            quotes: QuoteStyle::Raw,
            indent: None,
            declaration: false,
        }
    }

    /// Compact markup with `<br/>`.
    pub fn compact() -> Self {
        Self {
            empty: EmptyElement::Slash,
            quotes: QuoteStyle::Raw,
            indent: None,
            declaration: false,
        }
    }

    /// Indented markup with `<br />`.
    pub fn spaced() -> Self {
        Self {
            empty: EmptyElement::SpacedSlash,
            quotes: QuoteStyle::Raw,
            indent: Some(4),
            declaration: false,
        }
    }

    /// Compact markup with `<br></br>` and `&quot;` attribute quotes.
    pub fn entity_quoted() -> Self {
        Self {
            empty: EmptyElement::OpenClose,
            quotes: QuoteStyle::Entity,
            indent: None,
            declaration: false,
        }
    }
}

#[derive(Debug, Clone)]
pub struct StyledAdapter {
    name: String,
    style: RenderStyle,
}

impl StyledAdapter {
    pub fn new(name: impl Into<String>, style: RenderStyle) -> Self {
        Self {
            name: name.into(),
            style,
        }
    }

    /// One adapter per preset style.
    pub fn presets() -> Vec<Self> {
        vec![
            Self::new("xml", RenderStyle::xml()),
            Self::new("html", RenderStyle::html()),
            Self::new("compact", RenderStyle::compact()),
            Self::new("spaced", RenderStyle::spaced()),
            Self::new("entity-quoted", RenderStyle::entity_quoted()),
        ]
    }

    pub fn style(&self) -> &RenderStyle {
        &self.style
    }

    fn write_element(&self, out: &mut String, element: &Element, depth: usize) {
        out.push('<');
        out.push_str(&element.name);
        for (name, value) in &element.attributes {
            out.push(' ');
            out.push_str(name);
            out.push('=');
            out.push_str(self.quote());
            out.push_str(&html_escape::encode_double_quoted_attribute(value));
            out.push_str(self.quote());
        }

        if element.children.is_empty() {
            match self.style.empty {
                EmptyElement::Slash => out.push_str("/>"),
                EmptyElement::SpacedSlash => out.push_str(" />"),
                EmptyElement::OpenOnly => out.push('>'),
                EmptyElement::OpenClose => {
                    out.push_str("></");
                    out.push_str(&element.name);
                    out.push('>');
                }
            }
            return;
        }
        out.push('>');

        // Text-only elements stay on one line even when pretty printing.
        let block = self.style.indent.is_some()
            && element
                .children
                .iter()
                .any(|child| matches!(child, Node::Element(_)));

        for child in &element.children {
            if block {
                self.newline(out, depth + 1);
            }
            match child {
                Node::Element(child) => self.write_element(out, child, depth + 1),
                Node::Text(text) => out.push_str(&html_escape::encode_text(text)),
                Node::Raw(markup) => out.push_str(markup),
            }
        }
        if block {
            self.newline(out, depth);
        }

        out.push_str("</");
        out.push_str(&element.name);
        out.push('>');
    }

    fn newline(&self, out: &mut String, depth: usize) {
        if let Some(width) = self.style.indent {
            out.push('\n');
            out.push_str(&" ".repeat(width * depth));
        }
    }

    fn quote(&self) -> &'static str {
        match self.style.quotes {
            QuoteStyle::Raw => "\"",
            QuoteStyle::Entity => "&quot;",
        }
    }
}

impl MarkupAdapter for StyledAdapter {
    fn name(&self) -> &str {
        &self.name
    }

    fn render(&self, spec: &Element) -> String {
        let mut out = String::new();
        if self.style.declaration {
            out.push_str("<?xml version=\"1.0\"?>");
            out.push_str(if self.style.indent.is_some() { "\n" } else { "" });
        }
        self.write_element(&mut out, spec, 0);
        if self.style.indent.is_some() {
            out.push('\n');
        }
        out
    }
}

/// Splits a whitespace-separated list of expected tokens, the usual way of
/// writing short expectations: `words("<div> <br/> </div>")`.
pub fn words(expected: &str) -> Vec<&str> {
    expected.split_whitespace().collect()
}
