// src/shared/html/mod.rs
use std::borrow::Cow;

/// Escape text for use in element content and double-quoted attributes.
pub fn escape(input: &str) -> Cow<'_, str> {
    if !input.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(input);
    }

    let mut out = String::with_capacity(input.len() + 16);
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            c => out.push(c),
        }
    }
    Cow::Owned(out)
}

/// Append-only HTML writer. Text and attribute values are always escaped;
/// `raw` is reserved for trusted fragments such as inline SVG.
#[derive(Debug, Default)]
pub struct Markup {
    buf: String,
}

pub type Attrs<'a> = &'a [(&'a str, &'a str)];

impl Markup {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: String::with_capacity(capacity),
        }
    }

    pub fn raw(&mut self, fragment: &str) -> &mut Self {
        self.buf.push_str(fragment);
        self
    }

    pub fn text(&mut self, text: &str) -> &mut Self {
        self.buf.push_str(&escape(text));
        self
    }

    pub fn open(&mut self, tag: &str, attrs: Attrs<'_>) -> &mut Self {
        self.start_tag(tag, attrs);
        self
    }

    pub fn close(&mut self, tag: &str) -> &mut Self {
        self.buf.push_str("</");
        self.buf.push_str(tag);
        self.buf.push('>');
        self
    }

    /// Element without children or closing tag (`img`, `meta`, `link`).
    pub fn void(&mut self, tag: &str, attrs: Attrs<'_>) -> &mut Self {
        self.start_tag(tag, attrs);
        self
    }

    /// `<tag attrs>text</tag>`
    pub fn element(&mut self, tag: &str, attrs: Attrs<'_>, text: &str) -> &mut Self {
        self.start_tag(tag, attrs);
        self.text(text);
        self.close(tag)
    }

    pub fn open_tag(&mut self, tag: &Tag<'_>) -> &mut Self {
        self.buf.push('<');
        self.buf.push_str(tag.name);
        for (name, value) in &tag.attrs {
            self.push_attr(name, value);
        }
        self.buf.push('>');
        self
    }

    pub fn into_string(self) -> String {
        self.buf
    }

    fn start_tag(&mut self, tag: &str, attrs: Attrs<'_>) {
        self.buf.push('<');
        self.buf.push_str(tag);
        for (name, value) in attrs {
            self.push_attr(name, value);
        }
        self.buf.push('>');
    }

    fn push_attr(&mut self, name: &str, value: &str) {
        self.buf.push(' ');
        self.buf.push_str(name);
        self.buf.push_str("=\"");
        self.buf.push_str(&escape(value));
        self.buf.push('"');
    }
}

/// Opening tag assembled from attributes whose values are computed.
#[derive(Debug, Clone)]
pub struct Tag<'a> {
    name: &'a str,
    attrs: Vec<(&'a str, Cow<'a, str>)>,
}

impl<'a> Tag<'a> {
    pub fn new(name: &'a str) -> Self {
        Self {
            name,
            attrs: Vec::new(),
        }
    }

    pub fn attr(mut self, name: &'a str, value: impl Into<Cow<'a, str>>) -> Self {
        self.attrs.push((name, value.into()));
        self
    }

    pub fn attr_opt(self, name: &'a str, value: Option<impl Into<Cow<'a, str>>>) -> Self {
        match value {
            Some(value) => self.attr(name, value),
            None => self,
        }
    }

    /// Boolean attribute, written as `name=""` when set.
    pub fn flag(self, name: &'a str, on: bool) -> Self {
        if on {
            self.attr(name, "")
        } else {
            self
        }
    }
}
