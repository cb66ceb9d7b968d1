//! Opaque DOT attribute fragments
//!
//! An [`Attribute`] is a raw piece of DOT text such as `color = blue`. It is
//! never parsed or validated; it is written out exactly as given.

use std::fmt;
use std::ops::Add;

use crate::graph::Attributed;

/// A single `key = value` (or free-form) DOT fragment
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Attribute {
    text: String,
}

impl Attribute {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// Builds a `key = value` fragment with the value left unquoted
    pub fn pair(key: &str, value: impl fmt::Display) -> Self {
        Self::new(format!("{key} = {value}"))
    }

    /// Builds a `key = "value"` fragment
    pub fn quoted(key: &str, value: impl fmt::Display) -> Self {
        Self::new(format!("{key} = \"{value}\""))
    }

    pub fn color(color: &str) -> Self {
        Self::pair("color", color)
    }

    pub fn fillcolor(color: &str) -> Self {
        Self::pair("fillcolor", color)
    }

    pub fn colorscheme(scheme: &str) -> Self {
        Self::pair("colorscheme", scheme)
    }

    /// `fontname = "<name>"`, followed by `, fontsize = <n>` when a size is
    /// given
    pub fn font(name: &str, size: Option<u32>) -> Self {
        let font = Self::quoted("fontname", name);
        match size {
            Some(size) => font + Self::pair("fontsize", size),
            None => font,
        }
    }

    pub fn shape(shape: &str) -> Self {
        Self::pair("shape", shape)
    }

    pub fn style(style: &str) -> Self {
        Self::pair("style", style)
    }

    pub fn label(text: &str) -> Self {
        Self::quoted("label", text)
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Joins two fragments into one comma-separated fragment
    pub fn merge(&self, other: &Attribute) -> Attribute {
        Attribute::new(format!("{}, {}", self.text, other.text))
    }

    /// Appends this attribute to a node or edge and hands the target back
    pub fn attach<T: Attributed>(self, mut target: T) -> T {
        target.attributes_mut().push(self);
        target
    }
}

impl Add for Attribute {
    type Output = Attribute;

    fn add(self, other: Attribute) -> Attribute {
        self.merge(&other)
    }
}

impl From<&str> for Attribute {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for Attribute {
    fn from(text: String) -> Self {
        Self::new(text)
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
