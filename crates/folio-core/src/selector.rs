//! Minimal CSS selector support.
//!
//! Enough of the selector grammar to address the portfolio page:
//! compound selectors built from `tag`, `#id`, `.class`, `[attr]`,
//! `[attr="v"]` and `[attr^="v"]`, joined by the descendant combinator.

use std::fmt;
use std::str::FromStr;

use crate::dom::{Document, NodeId};
use crate::error::{FolioError, FolioResult};

#[derive(Debug, Clone, PartialEq, Eq)]
enum AttrOp {
    Exists,
    Equals(String),
    Prefix(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct AttrMatch {
    name: String,
    op: AttrOp,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct Compound {
    tag: Option<String>,
    id: Option<String>,
    classes: Vec<String>,
    attrs: Vec<AttrMatch>,
}

impl Compound {
    fn matches(&self, doc: &Document, node: NodeId) -> bool {
        let Some(el) = doc.get(node) else {
            return false;
        };
        if let Some(tag) = &self.tag {
            if el.tag() != tag {
                return false;
            }
        }
        if let Some(id) = &self.id {
            if el.id() != Some(id.as_str()) {
                return false;
            }
        }
        if !self.classes.iter().all(|c| el.has_class(c)) {
            return false;
        }
        self.attrs.iter().all(|a| {
            let value = el.attribute(&a.name);
            match (&a.op, value) {
                (_, None) => false,
                (AttrOp::Exists, Some(_)) => true,
                (AttrOp::Equals(want), Some(v)) => v == *want,
                (AttrOp::Prefix(want), Some(v)) => v.starts_with(want.as_str()),
            }
        })
    }
}

/// A parsed selector: a chain of compounds, the last one being the
/// element the selector picks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selector {
    source: String,
    chain: Vec<Compound>,
}

impl Selector {
    pub fn parse(source: &str) -> FolioResult<Self> {
        let parts = split_descendants(source)?;
        if parts.is_empty() {
            return Err(FolioError::invalid_selector(source, "empty selector"));
        }
        let chain = parts
            .iter()
            .map(|p| parse_compound(source, p))
            .collect::<FolioResult<Vec<_>>>()?;
        Ok(Self {
            source: source.trim().to_string(),
            chain,
        })
    }

    /// `.name`
    pub fn class(name: &str) -> Self {
        Self::single(
            format!(".{name}"),
            Compound {
                classes: vec![name.to_string()],
                ..Compound::default()
            },
        )
    }

    /// `tag`
    pub fn tag(name: &str) -> Self {
        Self::single(
            name.to_string(),
            Compound {
                tag: Some(name.to_ascii_lowercase()),
                ..Compound::default()
            },
        )
    }

    /// Narrow the subject to elements carrying `name`.
    pub fn with_attr(self, name: &str) -> Self {
        self.push_attr(format!("[{name}]"), name, AttrOp::Exists)
    }

    /// Narrow the subject to elements whose `name` starts with `prefix`.
    pub fn with_attr_prefix(self, name: &str, prefix: &str) -> Self {
        self.push_attr(
            format!("[{name}^=\"{prefix}\"]"),
            name,
            AttrOp::Prefix(prefix.to_string()),
        )
    }

    fn single(source: String, compound: Compound) -> Self {
        Self {
            source,
            chain: vec![compound],
        }
    }

    fn push_attr(mut self, suffix: String, name: &str, op: AttrOp) -> Self {
        if let Some(subject) = self.chain.last_mut() {
            subject.attrs.push(AttrMatch {
                name: name.to_string(),
                op,
            });
            self.source.push_str(&suffix);
        }
        self
    }

    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Whether `node` is picked by this selector.
    pub fn matches(&self, doc: &Document, node: NodeId) -> bool {
        let Some((subject, rest)) = self.chain.split_last() else {
            return false;
        };
        if !subject.matches(doc, node) {
            return false;
        }
        // Descendant-only chains can be matched greedily against the
        // nearest qualifying ancestor.
        let mut ancestors = doc.ancestors(node);
        rest.iter()
            .rev()
            .all(|compound| ancestors.any(|a| compound.matches(doc, a)))
    }
}

impl FromStr for Selector {
    type Err = FolioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Selector::parse(s)
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

fn is_ident_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-' || c == '_'
}

/// Split on whitespace that is not inside `[...]`.
fn split_descendants(source: &str) -> FolioResult<Vec<String>> {
    let mut parts = Vec::new();
    let mut current = String::new();
    let mut in_brackets = false;
    let mut quote: Option<char> = None;

    for c in source.chars() {
        match (c, quote) {
            (q, Some(open)) if q == open => quote = None,
            (_, Some(_)) => {}
            ('"' | '\'', None) if in_brackets => quote = Some(c),
            ('[', None) => in_brackets = true,
            (']', None) => in_brackets = false,
            (w, None) if w.is_whitespace() && !in_brackets => {
                if !current.is_empty() {
                    parts.push(std::mem::take(&mut current));
                }
                continue;
            }
            _ => {}
        }
        current.push(c);
    }
    if in_brackets || quote.is_some() {
        return Err(FolioError::invalid_selector(source, "unterminated attribute"));
    }
    if !current.is_empty() {
        parts.push(current);
    }
    Ok(parts)
}

fn take_ident(chars: &[char], pos: &mut usize) -> String {
    let start = *pos;
    while *pos < chars.len() && is_ident_char(chars[*pos]) {
        *pos += 1;
    }
    chars[start..*pos].iter().collect()
}

fn parse_compound(source: &str, part: &str) -> FolioResult<Compound> {
    let chars: Vec<char> = part.chars().collect();
    let mut pos = 0;
    let mut compound = Compound::default();

    if chars.first() == Some(&'*') {
        pos = 1;
    } else {
        let tag = take_ident(&chars, &mut pos);
        if !tag.is_empty() {
            compound.tag = Some(tag.to_ascii_lowercase());
        }
    }

    while pos < chars.len() {
        match chars[pos] {
            '#' => {
                pos += 1;
                let id = take_ident(&chars, &mut pos);
                if id.is_empty() {
                    return Err(FolioError::invalid_selector(source, "empty id"));
                }
                compound.id = Some(id);
            }
            '.' => {
                pos += 1;
                let class = take_ident(&chars, &mut pos);
                if class.is_empty() {
                    return Err(FolioError::invalid_selector(source, "empty class"));
                }
                compound.classes.push(class);
            }
            '[' => {
                pos += 1;
                compound.attrs.push(parse_attr(source, &chars, &mut pos)?);
            }
            other => {
                return Err(FolioError::invalid_selector(
                    source,
                    format!("unexpected character `{other}`"),
                ));
            }
        }
    }
    Ok(compound)
}

fn parse_attr(source: &str, chars: &[char], pos: &mut usize) -> FolioResult<AttrMatch> {
    let name = take_ident(chars, pos);
    if name.is_empty() {
        return Err(FolioError::invalid_selector(source, "empty attribute name"));
    }
    let prefix = match chars.get(*pos) {
        Some(']') => {
            *pos += 1;
            return Ok(AttrMatch {
                name,
                op: AttrOp::Exists,
            });
        }
        Some('^') if chars.get(*pos + 1) == Some(&'=') => {
            *pos += 2;
            true
        }
        Some('=') => {
            *pos += 1;
            false
        }
        _ => {
            return Err(FolioError::invalid_selector(
                source,
                "unsupported attribute operator",
            ))
        }
    };

    let value = match chars.get(*pos) {
        Some(&q) if q == '"' || q == '\'' => {
            let start = *pos + 1;
            let end = chars[start..]
                .iter()
                .position(|c| *c == q)
                .map(|i| start + i)
                .ok_or_else(|| FolioError::invalid_selector(source, "unterminated string"))?;
            *pos = end + 1;
            chars[start..end].iter().collect()
        }
        _ => take_ident(chars, pos),
    };

    if chars.get(*pos) != Some(&']') {
        return Err(FolioError::invalid_selector(source, "expected `]`"));
    }
    *pos += 1;

    let op = if prefix {
        AttrOp::Prefix(value)
    } else {
        AttrOp::Equals(value)
    };
    Ok(AttrMatch { name, op })
}
