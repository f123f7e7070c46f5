use crate::foundation::core::Vec2;
use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use serde_json::{Map, Value as JsonValue};

const NAME: &str = "name";
const POSITION: &str = "position";
const SIZE: &str = "size";
const TEXT_FONT_SIZE: &str = "textFontSize";
const TEXT_LINE_HEIGHT: &str = "textLineHeight";
const TEXT_STROKE_THICKNESS: &str = "textStrokeThickness";
const CHILDREN: &str = "children";
const OFFSET: &str = "offset";

/// Largest magnitude below which every integer is exactly representable as `f64`.
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

/// A `position` or `size` record of a UI node.
///
/// Only `offset` is interpreted. Every other key (for instance a `scale` component sitting next
/// to `offset`, or extra components inside `offset` itself) is carried through untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dim {
    /// Absolute pixel-space offset; absent on records that only carry other representations.
    pub offset: Option<Vec2>,
    /// Unrecognized keys, preserved verbatim. An explicit `"offset": null` is kept here.
    pub extra: Map<String, JsonValue>,
    offset_extra: Map<String, JsonValue>,
}

impl Dim {
    /// A record holding only an offset.
    pub fn offset(x: f64, y: f64) -> Self {
        Self {
            offset: Some(Vec2::new(x, y)),
            ..Self::default()
        }
    }

    fn from_json(value: JsonValue) -> Result<Self, String> {
        let mut dim = Self {
            extra: into_object(value)?,
            ..Self::default()
        };
        match take_non_null(&mut dim.extra, OFFSET) {
            None => {}
            Some(JsonValue::Array(items)) => match items.as_slice() {
                [x, y] => dim.offset = Some(Vec2::new(number(x, "x")?, number(y, "y")?)),
                _ => {
                    return Err(format!(
                        "offset array must have 2 items, found {}",
                        items.len()
                    ));
                }
            },
            Some(JsonValue::Object(mut o)) => {
                let x = o.remove("x").ok_or("offset is missing `x`")?;
                let y = o.remove("y").ok_or("offset is missing `y`")?;
                dim.offset = Some(Vec2::new(number(&x, "x")?, number(&y, "y")?));
                dim.offset_extra = o;
            }
            Some(other) => {
                return Err(format!(
                    "offset must be an object or an array, found {}",
                    kind(&other)
                ));
            }
        }
        Ok(dim)
    }
}

impl Serialize for Dim {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        if let Some(v) = self.offset {
            map.serialize_entry(
                OFFSET,
                &OffsetOut {
                    v,
                    extra: &self.offset_extra,
                },
            )?;
        }
        for (k, v) in &self.extra {
            if self.offset.is_some() && k == OFFSET {
                continue;
            }
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Dim {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        Self::from_json(JsonValue::deserialize(deserializer)?).map_err(serde::de::Error::custom)
    }
}

struct OffsetOut<'a> {
    v: Vec2,
    extra: &'a Map<String, JsonValue>,
}

impl Serialize for OffsetOut<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry("x", &Px(self.v.x))?;
        map.serialize_entry("y", &Px(self.v.y))?;
        for (k, v) in self.extra {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

/// Pixel value written as a JSON integer when it holds one.
struct Px(f64);

impl Serialize for Px {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let v = self.0;
        if v.fract() == 0.0 && v.abs() <= MAX_SAFE_INTEGER {
            serializer.serialize_i64(v as i64)
        } else {
            serializer.serialize_f64(v)
        }
    }
}

/// JSON-facing form of a UI layout node and its subtree.
///
/// This is the nested, human-edited representation. It is turned into an arena
/// ([`crate::UiTree`]) before scaling so that nodes get stable identities and parent
/// back-references.
///
/// Keys whose value is `null` are uninterpreted and written back as `null`, except
/// `textFontSize`: a `null` font size still makes the node text-capable and is read as 0.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NodeDef {
    /// Informational identifier.
    pub name: String,
    /// Position record.
    pub position: Option<Dim>,
    /// Size record.
    pub size: Option<Dim>,
    /// Font size of text-capable nodes.
    pub text_font_size: Option<f64>,
    /// Line height of text-capable nodes.
    pub text_line_height: Option<f64>,
    /// Stroke thickness of text-capable nodes.
    pub text_stroke_thickness: Option<f64>,
    /// Ordered children.
    pub children: Vec<NodeDef>,
    /// Unrecognized keys, preserved verbatim.
    pub extra: Map<String, JsonValue>,
}

impl NodeDef {
    /// An empty, non-renderable node.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Set `position.offset`.
    pub fn with_position(mut self, x: f64, y: f64) -> Self {
        self.position = Some(Dim::offset(x, y));
        self
    }

    /// Set `size.offset`.
    pub fn with_size(mut self, w: f64, h: f64) -> Self {
        self.size = Some(Dim::offset(w, h));
        self
    }

    /// Set the font size, making the node text-capable.
    pub fn with_font_size(mut self, px: f64) -> Self {
        self.text_font_size = Some(px);
        self
    }

    /// Set the line height.
    pub fn with_line_height(mut self, px: f64) -> Self {
        self.text_line_height = Some(px);
        self
    }

    /// Set the stroke thickness.
    pub fn with_stroke_thickness(mut self, px: f64) -> Self {
        self.text_stroke_thickness = Some(px);
        self
    }

    /// Append a child subtree.
    pub fn with_child(mut self, child: NodeDef) -> Self {
        self.children.push(child);
        self
    }

    /// Decode one node, handing back its children still in JSON form.
    ///
    /// The returned definition has no children; callers decide how to walk them.
    pub(crate) fn split_json(value: JsonValue) -> Result<(Self, Vec<JsonValue>), String> {
        let mut extra = into_object(value)?;
        let mut def = Self::default();

        if let Some(v) = take_non_null(&mut extra, NAME) {
            def.name = match v {
                JsonValue::String(s) => s,
                other => return Err(format!("`name` must be a string, found {}", kind(&other))),
            };
        }
        def.position = take_non_null(&mut extra, POSITION)
            .map(Dim::from_json)
            .transpose()
            .map_err(|e| format!("`position`: {e}"))?;
        def.size = take_non_null(&mut extra, SIZE)
            .map(Dim::from_json)
            .transpose()
            .map_err(|e| format!("`size`: {e}"))?;
        def.text_font_size = match extra.remove(TEXT_FONT_SIZE) {
            None => None,
            Some(JsonValue::Null) => Some(0.0),
            Some(v) => Some(number(&v, TEXT_FONT_SIZE)?),
        };
        def.text_line_height = take_non_null(&mut extra, TEXT_LINE_HEIGHT)
            .map(|v| number(&v, TEXT_LINE_HEIGHT))
            .transpose()?;
        def.text_stroke_thickness = take_non_null(&mut extra, TEXT_STROKE_THICKNESS)
            .map(|v| number(&v, TEXT_STROKE_THICKNESS))
            .transpose()?;
        let children = match take_non_null(&mut extra, CHILDREN) {
            None => Vec::new(),
            Some(JsonValue::Array(items)) => items,
            Some(other) => {
                return Err(format!("`children` must be an array, found {}", kind(&other)));
            }
        };

        def.extra = extra;
        Ok((def, children))
    }

    fn from_json(value: JsonValue) -> Result<Self, String> {
        let (mut def, children) = Self::split_json(value)?;
        def.children = children
            .into_iter()
            .map(Self::from_json)
            .collect::<Result<_, _>>()?;
        Ok(def)
    }

    fn writes_key(&self, key: &str) -> bool {
        match key {
            NAME => self.writes_name(),
            POSITION => self.position.is_some(),
            SIZE => self.size.is_some(),
            TEXT_FONT_SIZE => self.text_font_size.is_some(),
            TEXT_LINE_HEIGHT => self.text_line_height.is_some(),
            TEXT_STROKE_THICKNESS => self.text_stroke_thickness.is_some(),
            CHILDREN => self.writes_children(),
            _ => false,
        }
    }

    fn writes_name(&self) -> bool {
        !self.name.is_empty() || !self.extra.contains_key(NAME)
    }

    fn writes_children(&self) -> bool {
        !self.children.is_empty() || !self.extra.contains_key(CHILDREN)
    }
}

impl Serialize for NodeDef {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        if self.writes_name() {
            map.serialize_entry(NAME, &self.name)?;
        }
        if let Some(p) = &self.position {
            map.serialize_entry(POSITION, p)?;
        }
        if let Some(s) = &self.size {
            map.serialize_entry(SIZE, s)?;
        }
        for (key, v) in [
            (TEXT_FONT_SIZE, self.text_font_size),
            (TEXT_LINE_HEIGHT, self.text_line_height),
            (TEXT_STROKE_THICKNESS, self.text_stroke_thickness),
        ] {
            if let Some(v) = v {
                map.serialize_entry(key, &Px(v))?;
            }
        }
        if self.writes_children() {
            map.serialize_entry(CHILDREN, &self.children)?;
        }
        for (k, v) in &self.extra {
            if !self.writes_key(k) {
                map.serialize_entry(k, v)?;
            }
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for NodeDef {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        Self::from_json(JsonValue::deserialize(deserializer)?).map_err(serde::de::Error::custom)
    }
}

fn into_object(value: JsonValue) -> Result<Map<String, JsonValue>, String> {
    match value {
        JsonValue::Object(m) => Ok(m),
        other => Err(format!("expected an object, found {}", kind(&other))),
    }
}

/// Remove `key` unless it is absent or `null`; `null` entries stay in the map.
fn take_non_null(map: &mut Map<String, JsonValue>, key: &str) -> Option<JsonValue> {
    if map.get(key).is_none_or(JsonValue::is_null) {
        return None;
    }
    map.remove(key)
}

fn number(v: &JsonValue, what: &str) -> Result<f64, String> {
    v.as_f64()
        .ok_or_else(|| format!("`{what}` must be a number, found {}", kind(v)))
}

fn kind(v: &JsonValue) -> &'static str {
    match v {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "a boolean",
        JsonValue::Number(_) => "a number",
        JsonValue::String(_) => "a string",
        JsonValue::Array(_) => "an array",
        JsonValue::Object(_) => "an object",
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/model.rs"]
mod tests;
