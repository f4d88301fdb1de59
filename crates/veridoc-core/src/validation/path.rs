//! Field path construction for error addressing
//!
//! Paths are built as segment sequences and rendered to the
//! `field[index].property` notation only when an error is constructed, so
//! validators never concatenate path strings by hand.
//!
//! Copyright (c) 2025 Veridoc Team
//! Licensed under the Apache-2.0 license

use std::fmt;

/// One step of a field path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathSegment {
    /// Top-level field name.
    Field(String),
    /// Array element index.
    Index(usize),
    /// Property of an object element.
    Property(String),
}

/// Address of a value within a document.
///
/// Renders as `serial_numbers[1]` for array elements and
/// `line_items[0].quantity` for properties of object elements.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldPath {
    segments: Vec<PathSegment>,
}

impl FieldPath {
    /// Path rooted at a top-level field.
    pub fn field<N: Into<String>>(name: N) -> Self {
        Self {
            segments: vec![PathSegment::Field(name.into())],
        }
    }

    /// Child path for an array element.
    pub fn index(&self, index: usize) -> Self {
        let mut segments = self.segments.clone();
        segments.push(PathSegment::Index(index));
        Self { segments }
    }

    /// Child path for an object property.
    pub fn property<N: Into<String>>(&self, name: N) -> Self {
        let mut segments = self.segments.clone();
        segments.push(PathSegment::Property(name.into()));
        Self { segments }
    }

}

/// Renders to the bracket/dot notation consumed by error reports.
impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for segment in &self.segments {
            match segment {
                PathSegment::Field(name) => write!(f, "{}", name)?,
                PathSegment::Index(i) => write!(f, "[{}]", i)?,
                PathSegment::Property(name) => write!(f, ".{}", name)?,
            }
        }
        Ok(())
    }
}
