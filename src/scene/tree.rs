use crate::foundation::core::Vec2;
use crate::foundation::error::{UiScaleError, UiScaleResult};
use crate::foundation::ids::{NodeIdx, TreeId};
use crate::scene::model::{Dim, NodeDef};
use serde::Deserialize;
use serde_json::{Map, Value as JsonValue};
use std::fs::File;
use std::io::{BufReader, BufWriter, Write as _};
use std::path::Path;

/// One node of a [`UiTree`].
///
/// Geometry and text metrics are public so hosts can edit them between passes. Structure
/// (`parent`, `children`) is owned by the tree and only changes through [`UiTree::push_child`].
#[derive(Debug, Clone, PartialEq)]
pub struct UiNode {
    /// Informational identifier.
    pub name: String,
    /// Position record.
    pub position: Option<Dim>,
    /// Size record.
    pub size: Option<Dim>,
    /// Font size; its presence makes the node text-capable.
    pub text_font_size: Option<f64>,
    /// Line height.
    pub text_line_height: Option<f64>,
    /// Stroke thickness.
    pub text_stroke_thickness: Option<f64>,
    parent: Option<NodeIdx>,
    children: Vec<NodeIdx>,
    extra: Map<String, JsonValue>,
}

impl UiNode {
    fn from_owned(def: NodeDef, parent: Option<NodeIdx>, child_count: usize) -> Self {
        Self {
            name: def.name,
            position: def.position,
            size: def.size,
            text_font_size: def.text_font_size,
            text_line_height: def.text_line_height,
            text_stroke_thickness: def.text_stroke_thickness,
            parent,
            children: Vec::with_capacity(child_count),
            extra: def.extra,
        }
    }

    fn from_def(def: &NodeDef, parent: Option<NodeIdx>) -> Self {
        Self {
            name: def.name.clone(),
            position: def.position.clone(),
            size: def.size.clone(),
            text_font_size: def.text_font_size,
            text_line_height: def.text_line_height,
            text_stroke_thickness: def.text_stroke_thickness,
            parent,
            children: Vec::with_capacity(def.children.len()),
            extra: def.extra.clone(),
        }
    }

    /// A node is renderable when it carries both a position and a size record.
    pub fn is_renderable(&self) -> bool {
        self.position.is_some() && self.size.is_some()
    }

    /// Whether the node carries text metrics.
    pub fn is_text(&self) -> bool {
        self.text_font_size.is_some()
    }

    /// `position.offset`, if both levels are present.
    pub fn position_offset(&self) -> Option<Vec2> {
        self.position.as_ref().and_then(|d| d.offset)
    }

    /// `size.offset`, if both levels are present.
    pub fn size_offset(&self) -> Option<Vec2> {
        self.size.as_ref().and_then(|d| d.offset)
    }

    /// Parent slot; `None` for the root.
    pub fn parent(&self) -> Option<NodeIdx> {
        self.parent
    }

    /// Child slots in document order.
    pub fn children(&self) -> &[NodeIdx] {
        &self.children
    }

    /// Unrecognized JSON keys carried through from the input.
    pub fn extra(&self) -> &Map<String, JsonValue> {
        &self.extra
    }

    /// Overwrite `position.offset` if it exists; nodes without one are left alone.
    pub(crate) fn write_position_offset(&mut self, v: Vec2) -> bool {
        match self.position.as_mut().and_then(|d| d.offset.as_mut()) {
            Some(o) => {
                *o = v;
                true
            }
            None => false,
        }
    }

    /// Overwrite `size.offset` if it exists; nodes without one are left alone.
    pub(crate) fn write_size_offset(&mut self, v: Vec2) -> bool {
        match self.size.as_mut().and_then(|d| d.offset.as_mut()) {
            Some(o) => {
                *o = v;
                true
            }
            None => false,
        }
    }

    fn to_def_shallow(&self) -> NodeDef {
        NodeDef {
            name: self.name.clone(),
            position: self.position.clone(),
            size: self.size.clone(),
            text_font_size: self.text_font_size,
            text_line_height: self.text_line_height,
            text_stroke_thickness: self.text_stroke_thickness,
            children: Vec::with_capacity(self.children.len()),
            extra: self.extra.clone(),
        }
    }
}

/// Diagnostic counts over a tree.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TreeSummary {
    /// Total nodes.
    pub nodes: usize,
    /// Nodes with both position and size records.
    pub renderable: usize,
    /// Nodes carrying a font size.
    pub text_nodes: usize,
    /// Depth of the deepest node; the root is depth 0.
    pub max_depth: usize,
}

/// Arena-backed UI layout tree.
///
/// Nodes live in a flat vector and refer to each other by [`NodeIdx`]. Every tree carries a
/// process-unique [`TreeId`] (fresh on construction and on `clone`), which lets a scaler keep
/// identity-keyed side tables without holding on to the tree itself.
#[derive(Debug)]
pub struct UiTree {
    id: TreeId,
    nodes: Vec<UiNode>,
    root: NodeIdx,
}

impl Clone for UiTree {
    fn clone(&self) -> Self {
        Self {
            id: TreeId::fresh(),
            nodes: self.nodes.clone(),
            root: self.root,
        }
    }
}

impl UiTree {
    /// Build an arena from the nested form. Slots are assigned in DFS pre-order.
    pub fn from_def(def: &NodeDef) -> UiScaleResult<Self> {
        let mut nodes = Vec::new();
        let root = alloc_subtree(def, None, &mut nodes)?;
        Ok(Self {
            id: TreeId::fresh(),
            nodes,
            root,
        })
    }

    /// Parse a tree from a JSON string. Nesting depth is not limited.
    pub fn from_json_str(s: &str) -> UiScaleResult<Self> {
        let mut de = serde_json::Deserializer::from_str(s);
        Self::from_json_value(parse_unbounded(&mut de)?)
    }

    /// Parse a tree from a JSON reader. Nesting depth is not limited.
    pub fn from_reader<R: std::io::Read>(r: R) -> UiScaleResult<Self> {
        let mut de = serde_json::Deserializer::from_reader(r);
        Self::from_json_value(parse_unbounded(&mut de)?)
    }

    /// Parse a tree from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> UiScaleResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            UiScaleError::validation(format!("open UI tree JSON '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Lower a parsed document into the arena without recursing, so deep trees stay off the
    /// call stack. Slots come out in the same pre-order as [`UiTree::from_def`].
    fn from_json_value(value: JsonValue) -> UiScaleResult<Self> {
        let mut nodes: Vec<UiNode> = Vec::new();
        let mut pending = vec![(value, None)];
        while let Some((value, parent)) = pending.pop() {
            let (def, children) = NodeDef::split_json(value).map_err(|e| {
                UiScaleError::serde(format!("parse UI tree JSON: node {}: {e}", nodes.len()))
            })?;
            let idx = next_idx(&nodes)?;
            nodes.push(UiNode::from_owned(def, parent, children.len()));
            if let Some(p) = parent {
                nodes[p.as_usize()].children.push(idx);
            }
            pending.extend(children.into_iter().rev().map(|c| (c, Some(idx))));
        }
        Ok(Self {
            id: TreeId::fresh(),
            nodes,
            root: NodeIdx(0),
        })
    }

    /// Rebuild the nested form, including preserved unknown keys.
    pub fn to_def(&self) -> NodeDef {
        self.subtree_def(self.root)
    }

    /// Serialize the tree to a JSON string.
    pub fn to_json_string(&self, pretty: bool) -> UiScaleResult<String> {
        let def = self.to_def();
        let s = if pretty {
            serde_json::to_string_pretty(&def)?
        } else {
            serde_json::to_string(&def)?
        };
        Ok(s)
    }

    /// Serialize the tree as JSON into a writer.
    pub fn to_writer<W: std::io::Write>(&self, w: W, pretty: bool) -> UiScaleResult<()> {
        let def = self.to_def();
        let mut w = BufWriter::new(w);
        if pretty {
            serde_json::to_writer_pretty(&mut w, &def)?;
        } else {
            serde_json::to_writer(&mut w, &def)?;
        }
        w.flush()
            .map_err(|e| UiScaleError::serde(format!("flush UI tree JSON: {e}")))?;
        Ok(())
    }

    /// Identity of this tree instance.
    pub fn id(&self) -> TreeId {
        self.id
    }

    /// Root slot.
    pub fn root(&self) -> NodeIdx {
        self.root
    }

    /// Number of nodes in the arena.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always `false`: a tree has at least its root.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Whether `idx` addresses a node of this tree.
    pub fn contains(&self, idx: NodeIdx) -> bool {
        idx.as_usize() < self.nodes.len()
    }

    /// Node at `idx`.
    pub fn node(&self, idx: NodeIdx) -> Option<&UiNode> {
        self.nodes.get(idx.as_usize())
    }

    /// Mutable node at `idx`.
    pub fn node_mut(&mut self, idx: NodeIdx) -> Option<&mut UiNode> {
        self.nodes.get_mut(idx.as_usize())
    }

    /// Parent slot of `idx`.
    pub fn parent(&self, idx: NodeIdx) -> Option<NodeIdx> {
        self.node(idx).and_then(UiNode::parent)
    }

    /// Child slots of `idx`; empty for unknown slots.
    pub fn children(&self, idx: NodeIdx) -> &[NodeIdx] {
        self.node(idx).map(UiNode::children).unwrap_or(&[])
    }

    /// Pre-order walk starting at `start` (inclusive).
    pub fn preorder(&self, start: NodeIdx) -> Preorder<'_> {
        let stack = if self.contains(start) {
            vec![start]
        } else {
            Vec::new()
        };
        Preorder { tree: self, stack }
    }

    /// First node named `name` in pre-order.
    pub fn find_by_name(&self, name: &str) -> Option<NodeIdx> {
        self.preorder(self.root)
            .find(|&idx| self.node(idx).is_some_and(|n| n.name == name))
    }

    /// Attach a new subtree as the last child of `parent`, returning the new subtree's root.
    pub fn push_child(&mut self, parent: NodeIdx, def: &NodeDef) -> UiScaleResult<NodeIdx> {
        if !self.contains(parent) {
            return Err(UiScaleError::validation(format!(
                "parent node {} is not part of this tree ({} nodes)",
                parent.0,
                self.nodes.len()
            )));
        }
        let idx = alloc_subtree(def, Some(parent), &mut self.nodes)?;
        self.nodes[parent.as_usize()].children.push(idx);
        Ok(idx)
    }

    /// Counts over the whole tree.
    pub fn summary(&self) -> TreeSummary {
        let mut out = TreeSummary::default();
        let mut stack = vec![(self.root, 0usize)];
        while let Some((idx, depth)) = stack.pop() {
            let Some(node) = self.node(idx) else {
                continue;
            };
            out.nodes += 1;
            out.renderable += usize::from(node.is_renderable());
            out.text_nodes += usize::from(node.is_text());
            out.max_depth = out.max_depth.max(depth);
            stack.extend(node.children.iter().map(|&c| (c, depth + 1)));
        }
        out
    }

    fn subtree_def(&self, idx: NodeIdx) -> NodeDef {
        let node = &self.nodes[idx.as_usize()];
        let mut def = node.to_def_shallow();
        for &c in &node.children {
            def.children.push(self.subtree_def(c));
        }
        def
    }
}

/// Iterator returned by [`UiTree::preorder`].
pub struct Preorder<'a> {
    tree: &'a UiTree,
    stack: Vec<NodeIdx>,
}

impl Iterator for Preorder<'_> {
    type Item = NodeIdx;

    fn next(&mut self) -> Option<NodeIdx> {
        let idx = self.stack.pop()?;
        self.stack.extend(self.tree.children(idx).iter().rev().copied());
        Some(idx)
    }
}

fn alloc_subtree(
    def: &NodeDef,
    parent: Option<NodeIdx>,
    nodes: &mut Vec<UiNode>,
) -> UiScaleResult<NodeIdx> {
    let idx = next_idx(nodes)?;
    nodes.push(UiNode::from_def(def, parent));
    for child in &def.children {
        let c = alloc_subtree(child, Some(idx), nodes)?;
        nodes[idx.as_usize()].children.push(c);
    }
    Ok(idx)
}

fn next_idx(nodes: &[UiNode]) -> UiScaleResult<NodeIdx> {
    u32::try_from(nodes.len())
        .map(NodeIdx)
        .map_err(|_| UiScaleError::validation("too many nodes"))
}

/// Read one JSON document with serde_json's nesting limit lifted; `serde_stacker` grows the
/// stack on demand instead.
fn parse_unbounded<'de, R>(de: &mut serde_json::Deserializer<R>) -> UiScaleResult<JsonValue>
where
    R: serde_json::de::Read<'de>,
{
    de.disable_recursion_limit();
    let value = JsonValue::deserialize(serde_stacker::Deserializer::new(&mut *de))
        .map_err(|e| UiScaleError::serde(format!("parse UI tree JSON: {e}")))?;
    de.end()
        .map_err(|e| UiScaleError::serde(format!("parse UI tree JSON: {e}")))?;
    Ok(value)
}

#[cfg(test)]
#[path = "../../tests/unit/scene/tree.rs"]
mod tests;
