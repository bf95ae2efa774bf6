// src/core/html.rs
//
// Tolerant tokenizer + tree builder for exported timetable pages.
// Not a general HTML parser: no implied end tags, no foster parenting.
// Byte scanning, quote-aware inside tags.

use super::sanitize::decode_entities;

/// Elements that never take children.
const VOID_TAGS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
    "wbr",
];

/// Elements whose body is skipped verbatim.
const RAW_TEXT_TAGS: &[&str] = &["script", "style"];

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Token<'a> {
    Open { tag: String, attrs: Vec<(String, String)>, self_closing: bool },
    Close(String),
    Text(&'a str),
}

pub struct Tokens<'a> {
    s: &'a str,
    b: &'a [u8],
    i: usize,
    n: usize,
    raw_end: Option<String>,
}

impl<'a> Tokens<'a> {
    pub fn new(s: &'a str) -> Self {
        Self { s, b: s.as_bytes(), i: 0, n: s.len(), raw_end: None }
    }

    #[inline]
    fn starts_with_ci(&self, at: usize, pat: &str) -> bool {
        let p = pat.as_bytes();
        at + p.len() <= self.n && self.b[at..at + p.len()].eq_ignore_ascii_case(p)
    }

    #[inline]
    fn find_from(&self, at: usize, pat: &str) -> Option<usize> {
        self.s.get(at..)?.find(pat).map(|k| k + at)
    }

    #[inline]
    fn find_lt(&self, at: usize) -> usize {
        self.b
            .get(at..)
            .and_then(|rest| rest.iter().position(|&c| c == b'<'))
            .map_or(self.n, |k| k + at)
    }

    /// Skip past the next unquoted '>' (or to the end).
    #[inline]
    fn skip_to_gt(&mut self) {
        let mut in_s = false; // '
        let mut in_d = false; // "
        while self.i < self.n {
            match self.b[self.i] {
                b'\'' if !in_d => in_s = !in_s,
                b'"' if !in_s => in_d = !in_d,
                b'>' if !in_s && !in_d => {
                    self.i += 1;
                    return;
                }
                _ => {}
            }
            self.i += 1;
        }
    }

    #[inline]
    fn skip_ws(&mut self) {
        while self.i < self.n && self.b[self.i].is_ascii_whitespace() {
            self.i += 1;
        }
    }

    fn read_name(&mut self) -> String {
        let start = self.i;
        while self.i < self.n {
            match self.b[self.i] {
                b'>' | b'/' | b'=' | b'"' | b'\'' => break,
                c if c.is_ascii_whitespace() => break,
                _ => self.i += 1,
            }
        }
        self.s[start..self.i].to_ascii_lowercase()
    }

    fn read_value(&mut self) -> String {
        let raw = match self.b.get(self.i) {
            Some(&q) if q == b'"' || q == b'\'' => {
                let start = self.i + 1;
                let end = self.b[start..]
                    .iter()
                    .position(|&c| c == q)
                    .map_or(self.n, |k| start + k);
                self.i = (end + 1).min(self.n);
                &self.s[start..end]
            }
            _ => {
                let start = self.i;
                while self.i < self.n && self.b[self.i] != b'>' && !self.b[self.i].is_ascii_whitespace() {
                    self.i += 1;
                }
                &self.s[start..self.i]
            }
        };
        decode_entities(raw)
    }

    /// Called with `self.i` just past '<' and a name byte ahead.
    fn read_open(&mut self) -> Token<'a> {
        let tag = self.read_name();
        let mut attrs = Vec::new();
        let mut self_closing = false;

        loop {
            self.skip_ws();
            match self.b.get(self.i) {
                None => break,
                Some(b'>') => {
                    self.i += 1;
                    break;
                }
                Some(b'/') => {
                    self.i += 1;
                    if self.b.get(self.i) == Some(&b'>') {
                        self_closing = true;
                        self.i += 1;
                        break;
                    }
                }
                Some(b'"') | Some(b'\'') => {
                    // stray quote: skip the quoted run
                    let _ = self.read_value();
                }
                Some(_) => {
                    let name = self.read_name();
                    if name.is_empty() {
                        self.i += 1;
                        continue;
                    }
                    self.skip_ws();
                    let value = if self.b.get(self.i) == Some(&b'=') {
                        self.i += 1;
                        self.skip_ws();
                        self.read_value()
                    } else {
                        s!()
                    };
                    attrs.push((name, value));
                }
            }
        }

        if !self_closing && RAW_TEXT_TAGS.contains(&tag.as_str()) {
            self.raw_end = Some(join!("</", &tag));
        }
        Token::Open { tag, attrs, self_closing }
    }

    fn read_close(&mut self) -> Token<'a> {
        // at "</"
        self.i += 2;
        let name = self.read_name();
        self.skip_to_gt();
        Token::Close(name)
    }

    /// Skip the body of a raw-text element; leaves `self.i` at its end tag.
    fn skip_raw(&mut self, end_tag: &str) {
        let mut at = self.i;
        loop {
            match self.find_from(at, "</") {
                Some(k) if self.starts_with_ci(k, end_tag) => {
                    self.i = k;
                    return;
                }
                Some(k) => at = k + 2,
                None => {
                    self.i = self.n;
                    return;
                }
            }
        }
    }
}

impl<'a> Iterator for Tokens<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(end_tag) = self.raw_end.take() {
            self.skip_raw(&end_tag);
        }

        while self.i < self.n {
            if self.b[self.i] != b'<' {
                let start = self.i;
                let end = self.find_lt(start + 1);
                self.i = end;
                let s = self.s;
                return Some(Token::Text(&s[start..end]));
            }

            match self.b.get(self.i + 1) {
                Some(b'!') => {
                    if self.starts_with_ci(self.i, "<!--") {
                        self.i = self.find_from(self.i + 4, "-->").map_or(self.n, |k| k + 3);
                    } else {
                        self.skip_to_gt(); // <!DOCTYPE ...>
                    }
                }
                Some(b'?') => self.skip_to_gt(),
                Some(b'/') => return Some(self.read_close()),
                Some(c) if c.is_ascii_alphabetic() => {
                    self.i += 1;
                    return Some(self.read_open());
                }
                _ => {
                    // lone '<' is text
                    let start = self.i;
                    let end = self.find_lt(start + 1);
                    self.i = end;
                    let s = self.s;
                    return Some(Token::Text(&s[start..end]));
                }
            }
        }
        None
    }
}

/* ---------------- Tree ---------------- */

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    Text(String),
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Element {
    pub tag: String,
    pub attrs: Vec<(String, String)>,
    pub children: Vec<Node>,
}

impl Element {
    fn new(tag: String, attrs: Vec<(String, String)>) -> Self {
        Self { tag, attrs, children: Vec::new() }
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs.iter().find(|(k, _)| k == name).map(|(_, v)| v.as_str())
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.attr("class")
            .is_some_and(|c| c.split_ascii_whitespace().any(|x| x == class))
    }

    /// Tag match plus optional class.
    pub fn is(&self, tag: &str, class: Option<&str>) -> bool {
        self.tag == tag && class.is_none_or(|c| self.has_class(c))
    }

    pub fn elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(|n| match n {
            Node::Element(e) => Some(e),
            Node::Text(_) => None,
        })
    }

    /// Direct children with this tag.
    pub fn children_by_tag<'a>(&'a self, tag: &'a str) -> impl Iterator<Item = &'a Element> + 'a {
        self.elements().filter(move |e| e.tag == tag)
    }

    /// Pre-order search, `self` included.
    pub fn find_all<'a, F>(&'a self, pred: F) -> Vec<&'a Element>
    where
        F: Fn(&Element) -> bool,
    {
        let mut out = Vec::new();
        self.collect_into(&pred, &mut out);
        out
    }

    fn collect_into<'a, F>(&'a self, pred: &F, out: &mut Vec<&'a Element>)
    where
        F: Fn(&Element) -> bool,
    {
        if pred(self) {
            out.push(self);
        }
        for child in self.elements() {
            child.collect_into(pred, out);
        }
    }

    pub fn find_first<F>(&self, pred: F) -> Option<&Element>
    where
        F: Fn(&Element) -> bool,
    {
        self.find_first_ref(&pred)
    }

    fn find_first_ref<F>(&self, pred: &F) -> Option<&Element>
    where
        F: Fn(&Element) -> bool,
    {
        if pred(self) {
            return Some(self);
        }
        self.elements().find_map(|c| c.find_first_ref(pred))
    }

    /// Concatenated descendant text, raw.
    pub fn raw_text(&self) -> String {
        let mut out = s!();
        self.push_text(&mut out);
        out
    }

    fn push_text(&self, out: &mut String) {
        for child in &self.children {
            match child {
                Node::Text(t) => out.push_str(t),
                Node::Element(e) => e.push_text(out),
            }
        }
    }

    /// Descendant text, trimmed. Inner whitespace is kept as written, so
    /// `A  B` and `A B` stay distinct course names.
    pub fn text(&self) -> String {
        s!(self.raw_text().trim())
    }
}

fn attach(stack: &mut [Element], node: Node) {
    if let Some(top) = stack.last_mut() {
        top.children.push(node);
    }
}

/// Build a tree under a synthetic `#root` element.
pub fn parse_tree(html: &str) -> Element {
    let mut stack: Vec<Element> = vec![Element::new(s!("#root"), Vec::new())];

    for tok in Tokens::new(html) {
        match tok {
            Token::Open { tag, attrs, self_closing } => {
                let el = Element::new(tag, attrs);
                if self_closing || VOID_TAGS.contains(&el.tag.as_str()) {
                    attach(&mut stack, Node::Element(el));
                } else {
                    stack.push(el);
                }
            }
            Token::Close(tag) => {
                // unmatched end tags are dropped
                if let Some(pos) = stack.iter().skip(1).rposition(|e| e.tag == tag) {
                    let target = pos + 1;
                    while stack.len() > target {
                        if let Some(done) = stack.pop() {
                            attach(&mut stack, Node::Element(done));
                        }
                    }
                }
            }
            Token::Text(t) => {
                if !t.trim().is_empty() {
                    attach(&mut stack, Node::Text(decode_entities(t)));
                }
            }
        }
    }

    while stack.len() > 1 {
        if let Some(done) = stack.pop() {
            attach(&mut stack, Node::Element(done));
        }
    }
    stack.pop().unwrap_or_default()
}
