// src/dataset/decoder.rs

// --- Imports ---
use std::io::Read;

use roxmltree::{Node, ParsingOptions};

use crate::dataset::models::{Document, Field, Record};
use crate::utils::error::DecodeError;

// --- Element / attribute names of the export ---
const RECORD_TAG: &str = "doc";
const FIELD_TAG: &str = "field";
const FIELD_NAME_ATTR: &str = "name";

/// Reads the whole stream and decodes it. Non UTF-8 input is a `DecodeError::Read`.
///
/// The export is held in memory as one string; roxmltree rejects documents
/// over 4 GiB, so larger exports have to be split before extraction.
pub fn decode_reader<R: Read>(mut reader: R) -> Result<Document, DecodeError> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    tracing::debug!("Read {} bytes of XML input", text.len());
    decode_str(&text)
}

/// Decodes an annotation export.
///
/// The root element may be named anything. Its `<doc>` children become records and
/// each record's `<field>` children become fields; everything else is skipped.
/// Malformed markup anywhere fails the whole decode.
pub fn decode_str(text: &str) -> Result<Document, DecodeError> {
    let options = ParsingOptions {
        allow_dtd: true,
        ..ParsingOptions::default()
    };
    let tree = roxmltree::Document::parse_with_options(text, options)?;

    let records: Vec<Record> = tree
        .root_element()
        .children()
        .filter(|n| is_element_named(n, RECORD_TAG))
        .map(decode_record)
        .collect();

    Ok(Document::new(records))
}

fn decode_record(node: Node) -> Record {
    let fields = node
        .children()
        .filter(|n| is_element_named(n, FIELD_TAG))
        .map(decode_field)
        .collect();
    Record::new(fields)
}

fn decode_field(node: Node) -> Field {
    let name = node
        .attributes()
        .find(|a| a.name() == FIELD_NAME_ATTR)
        .map(|a| a.value())
        .unwrap_or_default();

    // Only direct character data counts; text of nested elements is dropped.
    let value: String = node
        .children()
        .filter(|n| n.is_text())
        .filter_map(|n| n.text())
        .collect();

    Field::new(name, value)
}

/// Matches on the local name so namespaced exports decode the same way.
fn is_element_named(node: &Node, name: &str) -> bool {
    node.is_element() && node.tag_name().name() == name
}
