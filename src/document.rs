//! Minimal reader for icon SVG documents.
//!
//! Only the root `<svg>` element's `viewBox`, and the `path` and `circle`
//! elements directly inside it, are of interest. Anything nested deeper
//! (groups, `<defs>`...) is skipped, since its placement depends on
//! ancestor transforms which are not applied.

use std::io::{BufRead, BufReader, Cursor};
use std::str::FromStr;

use quick_xml::events::{BytesStart, Event as XmlEvent};
use quick_xml::Reader;

use crate::errors::{Error, Result};

/// Raw attributes of a `<circle>` element
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CircleRecord {
    pub cx: Option<String>,
    pub cy: Option<String>,
    pub r: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SvgSource {
    pub view_box: Option<String>,
    /// `d` attribute of each path, in document order
    pub paths: Vec<String>,
    pub circles: Vec<CircleRecord>,
}

impl FromStr for SvgSource {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_reader(&mut BufReader::new(Cursor::new(s.as_bytes())))
    }
}

/// Attributes of an element as (local name, unescaped value) pairs.
fn attributes(e: &BytesStart) -> Result<Vec<(String, String)>> {
    e.attributes()
        .map(|a| {
            let aa = a.map_err(Error::from_err)?;
            let key = String::from_utf8(aa.key.local_name().as_ref().to_vec())?;
            let value = aa.unescape_value().map_err(Error::from_err)?.into_owned();
            Ok((key, value))
        })
        .collect()
}

fn take_attr(attrs: &mut Vec<(String, String)>, name: &str) -> Option<String> {
    let idx = attrs.iter().position(|(k, _)| k == name)?;
    Some(attrs.swap_remove(idx).1)
}

impl SvgSource {
    pub fn from_reader(reader: &mut dyn BufRead) -> Result<Self> {
        let mut reader = Reader::from_reader(reader);
        reader.config_mut().check_end_names = false;

        let mut source: Option<SvgSource> = None;
        // element nesting depth, counting the root as 1
        let mut depth = 0usize;
        let mut buf = Vec::new();
        loop {
            let ev = reader.read_event_into(&mut buf).map_err(|e| {
                Error::Document(format!(
                    "XML error near byte {}: {e}",
                    reader.error_position()
                ))
            })?;
            match ev {
                XmlEvent::Start(ref e) | XmlEvent::Empty(ref e) if source.is_none() => {
                    if e.local_name().as_ref() == b"svg" {
                        let mut attrs = attributes(e)?;
                        source = Some(SvgSource {
                            view_box: take_attr(&mut attrs, "viewBox"),
                            ..Default::default()
                        });
                        if matches!(ev, XmlEvent::Empty(_)) {
                            break;
                        }
                        depth = 1;
                    }
                }
                XmlEvent::Start(ref e) => {
                    if let (1, Some(src)) = (depth, source.as_mut()) {
                        src.add_element(e)?;
                    }
                    depth += 1;
                }
                XmlEvent::Empty(ref e) => {
                    if let (1, Some(src)) = (depth, source.as_mut()) {
                        src.add_element(e)?;
                    }
                }
                XmlEvent::End(_) if source.is_some() => {
                    depth -= 1;
                    if depth == 0 {
                        break;
                    }
                }
                XmlEvent::Eof => break,
                _ => {}
            }
            buf.clear();
        }

        source.ok_or_else(|| Error::Document("no <svg> root element".to_string()))
    }

    fn add_element(&mut self, e: &BytesStart) -> Result<()> {
        match e.local_name().as_ref() {
            b"path" => {
                let mut attrs = attributes(e)?;
                self.paths.push(take_attr(&mut attrs, "d").unwrap_or_default());
            }
            b"circle" => {
                let mut attrs = attributes(e)?;
                self.circles.push(CircleRecord {
                    cx: take_attr(&mut attrs, "cx"),
                    cy: take_attr(&mut attrs, "cy"),
                    r: take_attr(&mut attrs, "r"),
                });
            }
            _ => {}
        }
        Ok(())
    }
}
