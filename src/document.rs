//! Arena-backed document tree standing in for the live preview DOM.
//!
//! The hosting surface owns the real preview; this model carries just enough
//! of it for scanning and annotation: tags, text, classes, inline styles and
//! attributes. Node ids are plain arena indices, so holding one never keeps
//! a removed node alive, and every mutation on a stale id is a defensive
//! no-op.

use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

/// Index of a node inside its [`Document`]. Non-owning.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct NodeId(usize);

#[derive(Debug, Clone, Default)]
pub struct Node {
    pub tag: String,
    pub dom_id: Option<String>,
    pub text: String,
    pub classes: Vec<String>,
    pub attrs: BTreeMap<String, String>,
    pub styles: BTreeMap<String, String>,
    children: Vec<NodeId>,
    parent: Option<NodeId>,
}

pub struct Document {
    nodes: Vec<Option<Node>>,
    root: NodeId,
}

impl Document {
    pub fn new(root_tag: &str) -> Self {
        let root = Node {
            tag: root_tag.to_string(),
            ..Node::default()
        };
        Self {
            nodes: vec![Some(root)],
            root: NodeId(0),
        }
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.nodes.get(id.0).map(Option::is_some).unwrap_or(false)
    }

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0).and_then(Option::as_ref)
    }

    pub fn node_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(id.0).and_then(Option::as_mut)
    }

    /// Create a detached element. Attach it with [`Document::append_child`].
    pub fn create_element(&mut self, tag: &str) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Some(Node {
            tag: tag.to_string(),
            ..Node::default()
        }));
        id
    }

    pub fn append_child(&mut self, parent: NodeId, child: NodeId) {
        if !self.contains(parent) || !self.contains(child) || parent == child {
            return;
        }
        if let Some(node) = self.node_mut(child) {
            node.parent = Some(parent);
        }
        if let Some(node) = self.node_mut(parent) {
            node.children.push(child);
        }
    }

    /// Detach and drop a subtree. Removing an already-removed node is a
    /// no-op, never an error.
    pub fn remove_node(&mut self, id: NodeId) {
        if !self.contains(id) {
            return;
        }
        let parent = self.node(id).and_then(|n| n.parent);
        if let Some(parent) = parent {
            if let Some(node) = self.node_mut(parent) {
                node.children.retain(|c| *c != id);
            }
        }
        self.drop_subtree(id);
    }

    fn drop_subtree(&mut self, id: NodeId) {
        let children = self.children(id);
        for child in children {
            self.drop_subtree(child);
        }
        if let Some(slot) = self.nodes.get_mut(id.0) {
            *slot = None;
        }
    }

    pub fn children(&self, id: NodeId) -> Vec<NodeId> {
        self.node(id).map(|n| n.children.clone()).unwrap_or_default()
    }

    pub fn set_dom_id(&mut self, id: NodeId, dom_id: &str) {
        if let Some(node) = self.node_mut(id) {
            node.dom_id = Some(dom_id.to_string());
        }
    }

    pub fn set_text(&mut self, id: NodeId, text: &str) {
        if let Some(node) = self.node_mut(id) {
            node.text = text.to_string();
        }
    }

    /// Own text plus descendant text, in tree order, space-joined.
    pub fn text_content(&self, id: NodeId) -> String {
        let mut parts = Vec::new();
        self.collect_text(id, &mut parts);
        parts.join(" ")
    }

    fn collect_text(&self, id: NodeId, parts: &mut Vec<String>) {
        if let Some(node) = self.node(id) {
            if !node.text.is_empty() {
                parts.push(node.text.clone());
            }
            for child in &node.children {
                self.collect_text(*child, parts);
            }
        }
    }

    /// All live nodes in document (depth-first) order.
    pub fn traversal(&self) -> Vec<NodeId> {
        let mut order = Vec::new();
        self.walk(self.root, &mut order);
        order
    }

    fn walk(&self, id: NodeId, order: &mut Vec<NodeId>) {
        if let Some(node) = self.node(id) {
            order.push(id);
            for child in &node.children {
                self.walk(*child, order);
            }
        }
    }

    pub fn elements_by_tag(&self, tag: &str) -> Vec<NodeId> {
        self.traversal()
            .into_iter()
            .filter(|id| {
                self.node(*id)
                    .map(|n| n.tag.eq_ignore_ascii_case(tag))
                    .unwrap_or(false)
            })
            .collect()
    }

    /// Elements whose tag is in `tags`, in document order.
    pub fn block_elements(&self, tags: &[String]) -> Vec<NodeId> {
        self.traversal()
            .into_iter()
            .filter(|id| {
                self.node(*id)
                    .map(|n| tags.iter().any(|t| n.tag.eq_ignore_ascii_case(t)))
                    .unwrap_or(false)
            })
            .collect()
    }

    pub fn element_by_id(&self, dom_id: &str) -> Option<NodeId> {
        self.traversal().into_iter().find(|id| {
            self.node(*id)
                .and_then(|n| n.dom_id.as_deref())
                .map(|d| d == dom_id)
                .unwrap_or(false)
        })
    }

    pub fn elements_by_class(&self, class: &str) -> Vec<NodeId> {
        self.traversal()
            .into_iter()
            .filter(|id| self.has_class(*id, class))
            .collect()
    }

    pub fn set_attr(&mut self, id: NodeId, name: &str, value: &str) {
        if let Some(node) = self.node_mut(id) {
            node.attrs.insert(name.to_string(), value.to_string());
        }
    }

    pub fn attr(&self, id: NodeId, name: &str) -> Option<&str> {
        self.node(id).and_then(|n| n.attrs.get(name)).map(String::as_str)
    }

    pub fn set_style(&mut self, id: NodeId, property: &str, value: &str) {
        if let Some(node) = self.node_mut(id) {
            node.styles.insert(property.to_string(), value.to_string());
        }
    }

    pub fn style(&self, id: NodeId, property: &str) -> Option<&str> {
        self.node(id)
            .and_then(|n| n.styles.get(property))
            .map(String::as_str)
    }

    /// Snapshot of the inline styles, for restore after a hover highlight.
    pub fn styles(&self, id: NodeId) -> BTreeMap<String, String> {
        self.node(id).map(|n| n.styles.clone()).unwrap_or_default()
    }

    pub fn restore_styles(&mut self, id: NodeId, styles: BTreeMap<String, String>) {
        if let Some(node) = self.node_mut(id) {
            node.styles = styles;
        }
    }

    pub fn has_class(&self, id: NodeId, class: &str) -> bool {
        self.node(id)
            .map(|n| n.classes.iter().any(|c| c == class))
            .unwrap_or(false)
    }

    pub fn add_class(&mut self, id: NodeId, class: &str) {
        if self.has_class(id, class) {
            return;
        }
        if let Some(node) = self.node_mut(id) {
            node.classes.push(class.to_string());
        }
    }

    pub fn remove_class(&mut self, id: NodeId, class: &str) {
        if let Some(node) = self.node_mut(id) {
            node.classes.retain(|c| c != class);
        }
    }

    /// Count of live nodes, root included.
    pub fn live_node_count(&self) -> usize {
        self.nodes.iter().filter(|n| n.is_some()).count()
    }

    /// Build a document from its nested serde form.
    pub fn from_spec(spec: &NodeSpec) -> Self {
        let mut doc = Document::new(&spec.tag);
        let root = doc.root();
        if let Some(node) = doc.node_mut(root) {
            node.dom_id = spec.id.clone();
            node.text = spec.text.clone();
            node.classes = spec.classes.clone();
        }
        for child in &spec.children {
            Self::attach_spec(&mut doc, root, child);
        }
        doc
    }

    fn attach_spec(doc: &mut Document, parent: NodeId, spec: &NodeSpec) {
        let id = doc.create_element(&spec.tag);
        if let Some(node) = doc.node_mut(id) {
            node.dom_id = spec.id.clone();
            node.text = spec.text.clone();
            node.classes = spec.classes.clone();
        }
        doc.append_child(parent, id);
        for child in &spec.children {
            Self::attach_spec(doc, id, child);
        }
    }
}

/// Nested serde form for loading documents from JSON.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NodeSpec {
    pub tag: String,
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub classes: Vec<String>,
    #[serde(default)]
    pub children: Vec<NodeSpec>,
}

/// Shared handle to a document owned by the hosting surface.
pub type DocumentHandle = Rc<RefCell<Document>>;

pub fn shared(doc: Document) -> DocumentHandle {
    Rc::new(RefCell::new(doc))
}

/// Capability yielding the live preview document.
///
/// Returns `None` while the preview surface has not attached yet; the
/// widget's retry loop handles that case.
pub trait DocumentProvider {
    fn document(&self) -> Option<DocumentHandle>;
}

impl<F> DocumentProvider for F
where
    F: Fn() -> Option<DocumentHandle>,
{
    fn document(&self) -> Option<DocumentHandle> {
        self()
    }
}
