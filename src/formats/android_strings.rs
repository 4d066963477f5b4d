//! Android `strings.xml` serialization and parsing.
//!
//! Serializes a [`ResourceTree`] with an XML declaration and 4-space
//! indentation: one `<string>` element per plain entry and one `<plurals>`
//! element per group, items carrying a `quantity` attribute. Parsing (used
//! by the export direction) handles both element kinds.

use quick_xml::{
    Reader, Writer,
    escape::partial_escape,
    events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event},
};
use std::io::{BufRead, Write};

use crate::{
    error::Error,
    traits::Parser,
    types::{PluralGroup, PluralItem, ResourceTree, TranslationEntry},
};

impl Parser for ResourceTree {
    /// Parses `strings.xml` content.
    ///
    /// The file carries no locale metadata; callers fill in `locale` and
    /// `is_default_locale` from the containing directory name.
    fn from_reader<R: BufRead>(reader: R) -> Result<Self, Error> {
        let mut xml_reader = Reader::from_reader(reader);
        xml_reader.config_mut().trim_text(true);

        let mut tree = ResourceTree::new("", false);
        let mut buf = Vec::new();

        loop {
            match xml_reader.read_event_into(&mut buf) {
                Ok(Event::Start(ref e)) if e.name().as_ref() == b"string" => {
                    let entry = parse_string(e, &mut xml_reader)?;
                    tree.strings.push(entry);
                }
                Ok(Event::Start(ref e)) if e.name().as_ref() == b"plurals" => {
                    let group = parse_plurals(e, &mut xml_reader)?;
                    tree.plurals.push(group);
                }
                Ok(Event::Eof) => break,
                Ok(_) => {}
                Err(e) => return Err(Error::Xml(e)),
            }
            buf.clear();
        }
        Ok(tree)
    }

    /// Write to any writer (file, memory, etc.).
    fn to_writer<W: Write>(&self, mut writer: W) -> Result<(), Error> {
        let mut xml_writer = Writer::new_with_indent(&mut writer, b' ', 4);

        xml_writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("utf-8"), None)))?;
        xml_writer.write_event(Event::Start(BytesStart::new("resources")))?;

        for entry in &self.strings {
            let mut elem = BytesStart::new("string");
            elem.push_attribute(("name", entry.name.as_str()));
            xml_writer.write_event(Event::Start(elem))?;
            xml_writer.write_event(Event::Text(text_event(&entry.text)))?;
            xml_writer.write_event(Event::End(BytesEnd::new("string")))?;
        }

        for group in &self.plurals {
            let mut elem = BytesStart::new("plurals");
            elem.push_attribute(("name", group.name.as_str()));
            xml_writer.write_event(Event::Start(elem))?;
            for item in &group.items {
                let mut item_elem = BytesStart::new("item");
                item_elem.push_attribute(("quantity", item.quantity.as_str()));
                xml_writer.write_event(Event::Start(item_elem))?;
                xml_writer.write_event(Event::Text(text_event(&item.text)))?;
                xml_writer.write_event(Event::End(BytesEnd::new("item")))?;
            }
            xml_writer.write_event(Event::End(BytesEnd::new("plurals")))?;
        }

        xml_writer.write_event(Event::End(BytesEnd::new("resources")))?;
        writer.write_all(b"\n")?;
        Ok(())
    }
}

/// Escapes only `&`, `<` and `>` so normalized text like `l\'avion` is
/// emitted verbatim rather than as `l\&apos;avion`.
fn text_event(text: &str) -> BytesText<'_> {
    BytesText::from_escaped(partial_escape(text))
}

fn parse_string<R: BufRead>(
    e: &BytesStart,
    xml_reader: &mut Reader<R>,
) -> Result<TranslationEntry, Error> {
    let name = attr_value(e, b"name")?
        .ok_or_else(|| Error::InvalidResource("string tag missing 'name'".to_string()))?;
    let text = read_text(xml_reader)?;
    Ok(TranslationEntry { name, text })
}

fn parse_plurals<R: BufRead>(
    e: &BytesStart,
    xml_reader: &mut Reader<R>,
) -> Result<PluralGroup, Error> {
    let name = attr_value(e, b"name")?
        .ok_or_else(|| Error::InvalidResource("plurals tag missing 'name'".to_string()))?;

    let mut items = Vec::new();
    let mut buf = Vec::new();
    loop {
        match xml_reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref item)) if item.name().as_ref() == b"item" => {
                let quantity = attr_value(item, b"quantity")?.ok_or_else(|| {
                    Error::InvalidResource("item tag missing 'quantity'".to_string())
                })?;
                let text = read_text(xml_reader)?;
                items.push(PluralItem { quantity, text });
            }
            Ok(Event::End(ref end)) if end.name().as_ref() == b"plurals" => break,
            Ok(Event::Eof) => {
                return Err(Error::InvalidResource(
                    "unexpected EOF inside plurals".to_string(),
                ));
            }
            Ok(_) => {}
            Err(e) => return Err(Error::Xml(e)),
        }
        buf.clear();
    }
    Ok(PluralGroup { name, items })
}

fn attr_value(e: &BytesStart, key: &[u8]) -> Result<Option<String>, Error> {
    for attr in e.attributes().with_checks(false) {
        let attr = attr.map_err(|e| Error::InvalidResource(e.to_string()))?;
        if attr.key.as_ref() == key {
            return Ok(Some(attr.unescape_value()?.to_string()));
        }
    }
    Ok(None)
}

// Reads until text or the element's end tag.
fn read_text<R: BufRead>(xml_reader: &mut Reader<R>) -> Result<String, Error> {
    let mut buf = Vec::new();
    loop {
        match xml_reader.read_event_into(&mut buf) {
            Ok(Event::Text(e)) => {
                let text = e.unescape().map_err(Error::Xml)?.to_string();
                return Ok(text);
            }
            Ok(Event::End(_)) => return Ok(String::new()),
            Ok(Event::Eof) => return Err(Error::InvalidResource("unexpected EOF".to_string())),
            Ok(_) => (),
            Err(e) => return Err(Error::Xml(e)),
        }
        buf.clear();
    }
}
