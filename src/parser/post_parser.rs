//! JSON post loader.
//!
//! Accepts either a post object (`{"title": ..., "blocks": [...]}`) or a bare
//! array of blocks.

use std::fs;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::error::{Error, Result};
use crate::model::{ContentBlock, Post, PostMetadata};

use super::ParseOptions;

/// Loads posts from JSON sources.
pub struct PostParser {
    data: Vec<u8>,
    options: ParseOptions,
}

impl PostParser {
    /// Open a post file with default options.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::open_with_options(path, ParseOptions::default())
    }

    /// Open a post file with custom options.
    pub fn open_with_options<P: AsRef<Path>>(path: P, options: ParseOptions) -> Result<Self> {
        let data = fs::read(path.as_ref())?;
        Ok(Self { data, options })
    }

    /// Load from bytes with default options.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        Self::from_bytes_with_options(data, ParseOptions::default())
    }

    /// Load from bytes with custom options.
    pub fn from_bytes_with_options(data: &[u8], options: ParseOptions) -> Result<Self> {
        Ok(Self {
            data: data.to_vec(),
            options,
        })
    }

    /// Load from a reader with default options.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        Self::from_reader_with_options(reader, ParseOptions::default())
    }

    /// Load from a reader with custom options.
    pub fn from_reader_with_options<R: Read>(mut reader: R, options: ParseOptions) -> Result<Self> {
        let mut data = Vec::new();
        reader.read_to_end(&mut data)?;
        Ok(Self { data, options })
    }

    /// Parse the loaded source into a post.
    pub fn parse(&self) -> Result<Post> {
        if self.data.iter().all(u8::is_ascii_whitespace) {
            return Err(Error::InvalidDocument("empty input".into()));
        }

        let root: Value = serde_json::from_slice(&self.data)?;
        let (metadata, items) = match root {
            Value::Array(items) => (PostMetadata::default(), items),
            Value::Object(map) => self.split_post_object(map)?,
            other => {
                return Err(Error::InvalidDocument(format!(
                    "expected a post object or block array, found {}",
                    json_kind(&other)
                )))
            }
        };

        let blocks = items
            .iter()
            .enumerate()
            .map(|(index, item)| self.parse_block(index, item))
            .collect::<Result<Vec<_>>>()?;

        log::debug!(
            "Parsed post {:?} with {} blocks",
            metadata.title.as_deref().unwrap_or("(untitled)"),
            blocks.len()
        );

        Ok(Post { metadata, blocks })
    }

    fn split_post_object(&self, mut map: Map<String, Value>) -> Result<(PostMetadata, Vec<Value>)> {
        let items = match map.remove("blocks") {
            Some(Value::Array(items)) => items,
            None | Some(Value::Null) => Vec::new(),
            Some(other) => {
                return Err(Error::InvalidDocument(format!(
                    "`blocks` must be an array, found {}",
                    json_kind(&other)
                )))
            }
        };

        let metadata = match PostMetadata::deserialize(Value::Object(map)) {
            Ok(metadata) => metadata,
            Err(e) if self.options.is_lenient() => {
                log::warn!("Ignoring unreadable post metadata: {}", e);
                PostMetadata::default()
            }
            Err(e) => return Err(e.into()),
        };

        Ok((metadata, items))
    }

    fn parse_block(&self, index: usize, item: &Value) -> Result<ContentBlock> {
        match ContentBlock::deserialize(item) {
            Ok(block) => Ok(block),
            Err(e) if self.options.is_lenient() => {
                log::warn!("Repairing block {}: {}", index, e);
                Ok(ContentBlock::from_value_lenient(item))
            }
            Err(e) => Err(Error::InvalidBlock {
                index,
                reason: e.to_string(),
            }),
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
