use quick_xml::events::Event;
use quick_xml::name::{Namespace, ResolveResult};
use quick_xml::reader::NsReader;

use crate::error::PullError;

/// Namespace the sanctions-list service stamps on every element of the
/// published document.
pub const SDN_NAMESPACE: &str =
    "https://sanctionslistservice.ofac.treas.gov/api/PublicationPreview/exports/XML";

/// One `<id>` element from the SDN document.
///
/// Entries without an `<idType>` never become records. A missing
/// `<idNumber>` is kept as `None`; the classifier substitutes the `N/A`
/// sentinel so such entries still reach the output lists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentityRecord {
    pub id_type: String,
    pub id_number: Option<String>,
}

fn in_sdn_namespace(resolution: &ResolveResult) -> bool {
    matches!(resolution, ResolveResult::Bound(Namespace(ns)) if *ns == SDN_NAMESPACE.as_bytes())
}

/// Extract every identity record from the raw SDN XML, in document order.
///
/// `<id>` elements are matched at any depth, but only in the SDN namespace;
/// a document in the wrong namespace yields zero records rather than an
/// error. Malformed XML fails the whole parse.
pub fn identity_records(xml: &[u8]) -> Result<Vec<IdentityRecord>, PullError> {
    #[derive(Clone, Copy)]
    enum Field {
        None,
        IdType,
        IdNumber,
    }

    let mut reader = NsReader::from_reader(xml);
    reader.config_mut().trim_text(true);

    let mut records = Vec::new();
    let mut buf = Vec::new();

    let mut in_id = false;
    let mut field = Field::None;
    let mut id_type: Option<String> = None;
    let mut id_number: Option<String> = None;

    loop {
        let (resolution, event) = reader.read_resolved_event_into(&mut buf)?;
        match event {
            Event::Start(ref e) if in_sdn_namespace(&resolution) => {
                match e.local_name().as_ref() {
                    b"id" => {
                        in_id = true;
                        id_type = None;
                        id_number = None;
                    }
                    b"idType" if in_id => field = Field::IdType,
                    b"idNumber" if in_id => field = Field::IdNumber,
                    _ => {}
                }
            }
            Event::Text(ref t) => {
                let text = t.unescape()?;
                match field {
                    Field::IdType => id_type.get_or_insert_with(String::new).push_str(&text),
                    Field::IdNumber => id_number.get_or_insert_with(String::new).push_str(&text),
                    Field::None => {}
                }
            }
            Event::End(ref e) if in_sdn_namespace(&resolution) => match e.local_name().as_ref() {
                b"id" => {
                    in_id = false;
                    if let Some(id_type) = id_type.take() {
                        records.push(IdentityRecord {
                            id_type,
                            id_number: id_number.take(),
                        });
                    } else {
                        // no <idType>: not classifiable, drop it
                        id_number = None;
                    }
                }
                b"idType" | b"idNumber" => field = Field::None,
                _ => {}
            },
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    Ok(records)
}
