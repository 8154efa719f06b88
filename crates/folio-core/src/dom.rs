//! Arena-backed document model.
//!
//! The page is a tree of [`Element`]s addressed by [`NodeId`]. Ids are
//! indices into the arena and are never reused, so controllers can hold
//! on to them for the lifetime of the page. Lookups taking a `NodeId`
//! that this document did not hand out degrade to `None` / no-op.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::selector::Selector;

/// Stable handle to an element in a [`Document`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeId(pub u32);

impl NodeId {
    fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "node#{}", self.0)
    }
}

/// A single element of the page.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    tag: String,
    id: Option<String>,
    classes: Vec<String>,
    attributes: BTreeMap<String, String>,
    text: String,
    hidden: bool,
    value: String,
    default_value: String,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

impl Element {
    fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_ascii_lowercase(),
            id: None,
            classes: Vec::new(),
            attributes: BTreeMap::new(),
            text: String::new(),
            hidden: false,
            value: String::new(),
            default_value: String::new(),
            parent: None,
            children: Vec::new(),
        }
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Attribute lookup. `id` and `class` are served from their dedicated
    /// fields so selectors can treat them like any other attribute.
    pub fn attribute(&self, name: &str) -> Option<String> {
        match name {
            "id" => self.id.clone(),
            "class" if !self.classes.is_empty() => Some(self.classes.join(" ")),
            "class" => None,
            _ => self.attributes.get(name).cloned(),
        }
    }

    pub fn attributes(&self) -> &BTreeMap<String, String> {
        &self.attributes
    }

    /// Own text, excluding descendants.
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn default_value(&self) -> &str {
        &self.default_value
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    /// Whether this element carries a user-editable value.
    pub fn is_form_control(&self) -> bool {
        matches!(self.tag.as_str(), "input" | "textarea" | "select")
    }
}

/// The page document.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    nodes: Vec<Element>,
    body: NodeId,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    /// Create an empty document holding only a `body` element.
    pub fn new() -> Self {
        Self {
            nodes: vec![Element::new("body")],
            body: NodeId(0),
        }
    }

    pub fn body(&self) -> NodeId {
        self.body
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.len() <= 1
    }

    pub fn get(&self, node: NodeId) -> Option<&Element> {
        self.nodes.get(node.index())
    }

    fn get_mut(&mut self, node: NodeId) -> Option<&mut Element> {
        self.nodes.get_mut(node.index())
    }

    /// Create a detached element.
    pub fn create_element(&mut self, tag: &str) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(Element::new(tag));
        id
    }

    /// Attach `child` as the last child of `parent`, detaching it first if
    /// it already had a parent.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) {
        if parent == child || self.get(parent).is_none() || self.get(child).is_none() {
            return;
        }
        if self.ancestors(parent).any(|a| a == child) {
            return;
        }
        self.detach(child);
        if let Some(el) = self.get_mut(child) {
            el.parent = Some(parent);
        }
        if let Some(el) = self.get_mut(parent) {
            el.children.push(child);
        }
    }

    /// Create an element under `parent` and return a builder for it.
    pub fn append(&mut self, parent: NodeId, tag: &str) -> ElementBuilder<'_> {
        let node = self.create_element(tag);
        self.append_child(parent, node);
        ElementBuilder { doc: self, node }
    }

    /// Remove `node` from its parent. The node and its subtree stay in the
    /// arena but are no longer reachable from `body`.
    pub fn detach(&mut self, node: NodeId) {
        let Some(parent) = self.get(node).and_then(Element::parent) else {
            return;
        };
        if let Some(p) = self.get_mut(parent) {
            p.children.retain(|c| *c != node);
        }
        if let Some(el) = self.get_mut(node) {
            el.parent = None;
        }
    }

    pub fn set_id(&mut self, node: NodeId, id: &str) {
        if let Some(el) = self.get_mut(node) {
            el.id = Some(id.to_string());
        }
    }

    pub fn add_class(&mut self, node: NodeId, class: &str) {
        if let Some(el) = self.get_mut(node) {
            if !el.has_class(class) {
                el.classes.push(class.to_string());
            }
        }
    }

    pub fn remove_class(&mut self, node: NodeId, class: &str) {
        if let Some(el) = self.get_mut(node) {
            el.classes.retain(|c| c != class);
        }
    }

    pub fn has_class(&self, node: NodeId, class: &str) -> bool {
        self.get(node).is_some_and(|el| el.has_class(class))
    }

    pub fn set_attribute(&mut self, node: NodeId, name: &str, value: &str) {
        match name {
            "id" => self.set_id(node, value),
            "class" => {
                if let Some(el) = self.get_mut(node) {
                    el.classes = value.split_whitespace().map(str::to_string).collect();
                }
            }
            _ => {
                if let Some(el) = self.get_mut(node) {
                    el.attributes.insert(name.to_string(), value.to_string());
                }
            }
        }
    }

    pub fn attribute(&self, node: NodeId, name: &str) -> Option<String> {
        self.get(node).and_then(|el| el.attribute(name))
    }

    pub fn is_hidden(&self, node: NodeId) -> bool {
        self.get(node).is_some_and(Element::is_hidden)
    }

    pub fn set_hidden(&mut self, node: NodeId, hidden: bool) {
        if let Some(el) = self.get_mut(node) {
            el.hidden = hidden;
        }
    }

    /// Concatenated text of the element and all its descendants, in
    /// document order.
    pub fn text_content(&self, node: NodeId) -> String {
        let mut out = String::new();
        for n in self.descendants_inclusive(node) {
            if let Some(el) = self.get(n) {
                out.push_str(&el.text);
            }
        }
        out
    }

    /// Replace the element's children with a single run of text.
    pub fn set_text_content(&mut self, node: NodeId, text: &str) {
        let children = self
            .get(node)
            .map(|el| el.children.clone())
            .unwrap_or_default();
        for child in children {
            self.detach(child);
        }
        if let Some(el) = self.get_mut(node) {
            el.text = text.to_string();
        }
    }

    pub fn value(&self, node: NodeId) -> Option<&str> {
        self.get(node)
            .filter(|el| el.is_form_control())
            .map(Element::value)
    }

    /// Set the current value of a form control. Other elements ignore it.
    pub fn set_value(&mut self, node: NodeId, value: &str) {
        if let Some(el) = self.get_mut(node).filter(|el| el.is_form_control()) {
            el.value = value.to_string();
        }
    }

    /// Set the value a control returns to when its form is reset. The
    /// current value follows.
    pub fn set_default_value(&mut self, node: NodeId, value: &str) {
        if let Some(el) = self.get_mut(node).filter(|el| el.is_form_control()) {
            el.default_value = value.to_string();
            el.value = value.to_string();
        }
    }

    /// Restore every form control under `form` to its default value.
    pub fn reset_form(&mut self, form: NodeId) {
        let controls: Vec<NodeId> = self
            .descendants(form)
            .filter(|n| self.get(*n).is_some_and(Element::is_form_control))
            .collect();
        for control in controls {
            if let Some(el) = self.get_mut(control) {
                el.value = el.default_value.clone();
            }
        }
    }

    /// Form controls under `form`, in document order.
    pub fn form_controls(&self, form: NodeId) -> Vec<NodeId> {
        self.descendants(form)
            .filter(|n| self.get(*n).is_some_and(Element::is_form_control))
            .collect()
    }

    pub fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.get(node).and_then(Element::parent)
    }

    /// Strict ancestors of `node`, nearest first.
    pub fn ancestors(&self, node: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        std::iter::successors(self.parent(node), move |n| self.parent(*n))
    }

    /// Strict descendants of `node` in document (pre-)order.
    pub fn descendants(&self, node: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.descendants_inclusive(node).skip(1)
    }

    /// `node` followed by its descendants in document order.
    pub fn descendants_inclusive(&self, node: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        let mut stack = if self.get(node).is_some() {
            vec![node]
        } else {
            Vec::new()
        };
        std::iter::from_fn(move || {
            let next = stack.pop()?;
            if let Some(el) = self.get(next) {
                stack.extend(el.children.iter().rev().copied());
            }
            Some(next)
        })
    }

    /// Whether `node` is reachable from `body`.
    pub fn is_connected(&self, node: NodeId) -> bool {
        node == self.body || self.ancestors(node).any(|a| a == self.body)
    }

    /// First connected element carrying `id`, in document order.
    pub fn element_by_id(&self, id: &str) -> Option<NodeId> {
        self.descendants_inclusive(self.body)
            .find(|n| self.get(*n).and_then(Element::id) == Some(id))
    }

    /// First descendant of `scope` matching `selector`.
    pub fn query_selector(&self, scope: NodeId, selector: &Selector) -> Option<NodeId> {
        self.descendants(scope).find(|n| selector.matches(self, *n))
    }

    /// All descendants of `scope` matching `selector`, in document order.
    pub fn query_selector_all(&self, scope: NodeId, selector: &Selector) -> Vec<NodeId> {
        self.descendants(scope)
            .filter(|n| selector.matches(self, *n))
            .collect()
    }

    /// Nearest inclusive ancestor of `node` matching `selector`.
    pub fn closest(&self, node: NodeId, selector: &Selector) -> Option<NodeId> {
        std::iter::once(node)
            .chain(self.ancestors(node))
            .find(|n| selector.matches(self, *n))
    }
}

/// Fluent helper returned by [`Document::append`].
pub struct ElementBuilder<'a> {
    doc: &'a mut Document,
    node: NodeId,
}

impl ElementBuilder<'_> {
    pub fn id(self, id: &str) -> Self {
        self.doc.set_id(self.node, id);
        self
    }

    pub fn class(self, class: &str) -> Self {
        for c in class.split_whitespace() {
            self.doc.add_class(self.node, c);
        }
        self
    }

    pub fn attr(self, name: &str, value: &str) -> Self {
        self.doc.set_attribute(self.node, name, value);
        self
    }

    pub fn text(self, text: &str) -> Self {
        self.doc.set_text_content(self.node, text);
        self
    }

    pub fn hidden(self, hidden: bool) -> Self {
        self.doc.set_hidden(self.node, hidden);
        self
    }

    pub fn default_value(self, value: &str) -> Self {
        self.doc.set_default_value(self.node, value);
        self
    }

    pub fn node(&self) -> NodeId {
        self.node
    }

    pub fn build(self) -> NodeId {
        self.node
    }
}
