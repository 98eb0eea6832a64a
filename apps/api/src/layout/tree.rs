//! Print-layout tree: an HTML-shaped document whose styling is carried as
//! explicit declarations instead of living in a browser's style engine.
//!
//! Templates build trees with the consuming builder methods on [`Element`];
//! the print snapshot pass clones a tree and edits it in place through
//! index paths (`&[usize]`, child positions from the root).

// ────────────────────────────────────────────────────────────────────────────
// Style declarations
// ────────────────────────────────────────────────────────────────────────────

/// Ordered list of CSS declarations. Setting an existing property replaces it
/// in place so the serialized order stays stable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Style {
    decls: Vec<(String, String)>,
}

impl Style {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, prop: &str) -> Option<&str> {
        self.decls
            .iter()
            .find(|(p, _)| p == prop)
            .map(|(_, v)| v.as_str())
    }

    pub fn contains(&self, prop: &str) -> bool {
        self.get(prop).is_some()
    }

    pub fn set(&mut self, prop: &str, value: impl Into<String>) {
        let value = value.into();
        match self.decls.iter_mut().find(|(p, _)| p == prop) {
            Some(slot) => slot.1 = value,
            None => self.decls.push((prop.to_string(), value)),
        }
    }

    /// Sets `prop` only when it is not declared yet.
    pub fn set_default(&mut self, prop: &str, value: impl Into<String>) {
        if !self.contains(prop) {
            self.set(prop, value);
        }
    }

    pub fn remove(&mut self, prop: &str) -> Option<String> {
        let pos = self.decls.iter().position(|(p, _)| p == prop)?;
        Some(self.decls.remove(pos).1)
    }

    pub fn is_empty(&self) -> bool {
        self.decls.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.decls.iter().map(|(p, v)| (p.as_str(), v.as_str()))
    }

    /// Serializes as an inline `style` attribute value: `a: 1; b: 2`.
    pub fn to_css(&self) -> String {
        self.decls
            .iter()
            .map(|(p, v)| format!("{p}: {v}"))
            .collect::<Vec<_>>()
            .join("; ")
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Nodes
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Element(Element),
    Text(String),
}

impl From<Element> for Node {
    fn from(el: Element) -> Self {
        Node::Element(el)
    }
}

impl From<&str> for Node {
    fn from(text: &str) -> Self {
        Node::Text(text.to_string())
    }
}

impl From<String> for Node {
    fn from(text: String) -> Self {
        Node::Text(text)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub tag: String,
    pub attrs: Vec<(String, String)>,
    pub classes: Vec<String>,
    pub style: Style,
    pub children: Vec<Node>,
}

impl Element {
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_string(),
            attrs: Vec::new(),
            classes: Vec::new(),
            style: Style::new(),
            children: Vec::new(),
        }
    }

    // ── builder ─────────────────────────────────────────────────────────────

    /// Adds whitespace-separated class tokens.
    pub fn class(mut self, classes: &str) -> Self {
        for token in classes.split_whitespace() {
            if !self.has_class(token) {
                self.classes.push(token.to_string());
            }
        }
        self
    }

    pub fn attr(mut self, name: &str, value: impl Into<String>) -> Self {
        self.set_attr(name, value);
        self
    }

    pub fn css(mut self, prop: &str, value: impl Into<String>) -> Self {
        self.style.set(prop, value);
        self
    }

    pub fn child(mut self, node: impl Into<Node>) -> Self {
        self.children.push(node.into());
        self
    }

    pub fn maybe_child(mut self, node: Option<Element>) -> Self {
        if let Some(el) = node {
            self.children.push(Node::Element(el));
        }
        self
    }

    pub fn children<I, N>(mut self, nodes: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<Node>,
    {
        self.children.extend(nodes.into_iter().map(Into::into));
        self
    }

    pub fn text(self, text: impl Into<String>) -> Self {
        self.child(Node::Text(text.into()))
    }

    // ── queries ─────────────────────────────────────────────────────────────

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn set_attr(&mut self, name: &str, value: impl Into<String>) {
        let value = value.into();
        match self.attrs.iter_mut().find(|(n, _)| n == name) {
            Some(slot) => slot.1 = value,
            None => self.attrs.push((name.to_string(), value)),
        }
    }

    /// Direct element children, skipping text nodes.
    pub fn child_elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(|n| match n {
            Node::Element(el) => Some(el),
            Node::Text(_) => None,
        })
    }

    /// Concatenated text of this subtree.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        collect_text(self, &mut out);
        out
    }

    /// Pre-order paths of every element in the subtree, root (`[]`) first.
    pub fn element_paths(&self) -> Vec<Vec<usize>> {
        let mut paths = Vec::new();
        let mut current = Vec::new();
        collect_paths(self, &mut current, &mut paths);
        paths
    }

    pub fn at(&self, path: &[usize]) -> Option<&Element> {
        let mut el = self;
        for &idx in path {
            el = match el.children.get(idx)? {
                Node::Element(child) => child,
                Node::Text(_) => return None,
            };
        }
        Some(el)
    }

    pub fn at_mut(&mut self, path: &[usize]) -> Option<&mut Element> {
        let mut el = self;
        for &idx in path {
            el = match el.children.get_mut(idx)? {
                Node::Element(child) => child,
                Node::Text(_) => return None,
            };
        }
        Some(el)
    }

    /// Path of the first element (pre-order) satisfying `pred`.
    pub fn find_path(&self, pred: impl Fn(&Element) -> bool) -> Option<Vec<usize>> {
        self.element_paths()
            .into_iter()
            .find(|p| self.at(p).is_some_and(&pred))
    }

    /// Number of elements in the subtree (including `self`) satisfying `pred`.
    pub fn count(&self, pred: impl Fn(&Element) -> bool) -> usize {
        count_matching(self, &pred)
    }
}

fn count_matching(el: &Element, pred: &dyn Fn(&Element) -> bool) -> usize {
    usize::from(pred(el))
        + el
            .child_elements()
            .map(|c| count_matching(c, pred))
            .sum::<usize>()
}

fn collect_text(el: &Element, out: &mut String) {
    for node in &el.children {
        match node {
            Node::Text(t) => out.push_str(t),
            Node::Element(child) => collect_text(child, out),
        }
    }
}

fn collect_paths(el: &Element, current: &mut Vec<usize>, out: &mut Vec<Vec<usize>>) {
    out.push(current.clone());
    for (idx, node) in el.children.iter().enumerate() {
        if let Node::Element(child) = node {
            current.push(idx);
            collect_paths(child, current, out);
            current.pop();
        }
    }
}
