use std::collections::BTreeMap;
use std::error::Error;

use crate::front_matter::types::Metadata;

type BoxResult<T> = Result<T, Box<dyn Error>>;

/// Split a document into its front matter and body.
///
/// Front matter is a YAML mapping delimited by `---` lines at the very start
/// of the document. A document without an opening delimiter has empty
/// metadata and its full text as body. A block that cannot be parsed as a
/// YAML mapping is an error.
pub fn parse(content: &str) -> BoxResult<(Metadata, String)> {
    // Check if content has front matter (starts with ---)
    if !(content.starts_with("---\n") || content.starts_with("---\r\n")) {
        return Ok((Metadata::default(), content.to_string()));
    }

    // Find the closing delimiter
    let end = match content[3..].find("\n---") {
        Some(pos) => pos,
        None => return Err("unterminated front matter block".into()),
    };

    let block = &content[3..end + 3];
    let body = content[end + 7..].trim_start().to_string();

    if block.trim().is_empty() {
        return Ok((Metadata::default(), body));
    }

    let values: BTreeMap<String, serde_yaml::Value> = serde_yaml::from_str(block)?;
    Ok((Metadata::new(values), body))
}
