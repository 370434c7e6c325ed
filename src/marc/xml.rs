//! MARC-XML author extraction
//!
//! Koha stores each bibliographic record's full MARC serialization as a
//! MARC-XML blob in `biblio_metadata.metadata`. When the relational author
//! column is empty, an added-entry personal name may still be present in
//! datafield 700 subfield $a of that blob.

/// MARC21 slim XML namespace
pub const MARC21_NS: &str = "http://www.loc.gov/MARC21/slim";

/// Added entry - personal name
const TAG_ADDED_PERSONAL_NAME: &str = "700";

/// Recover an author name from a MARC-XML document.
///
/// Scans namespaced `datafield` elements for `tag="700"` and inspects the
/// first `subfield` child of each; the first one carrying `code="a"` with
/// non-empty text wins. Malformed XML is reported as `None`, never an
/// error: one bad metadata blob must not abort a whole label batch.
pub fn author_from_marc_xml(xml: &str) -> Option<String> {
    let doc = match roxmltree::Document::parse(xml) {
        Ok(doc) => doc,
        Err(e) => {
            tracing::warn!("Skipping unparseable MARC-XML metadata: {}", e);
            return None;
        }
    };

    for field in doc
        .descendants()
        .filter(|n| n.has_tag_name((MARC21_NS, "datafield")))
    {
        if field.attribute("tag") != Some(TAG_ADDED_PERSONAL_NAME) {
            continue;
        }

        let Some(subfield) = field
            .children()
            .find(|n| n.has_tag_name((MARC21_NS, "subfield")))
        else {
            continue;
        };

        if subfield.attribute("code") != Some("a") {
            continue;
        }

        match subfield.text() {
            Some(text) if !text.is_empty() => return Some(text.to_string()),
            _ => continue,
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(datafields: &str) -> String {
        format!(
            r#"<?xml version="1.0" encoding="UTF-8"?>
            <record xmlns="http://www.loc.gov/MARC21/slim">
              <leader>00000cam a2200000 a 4500</leader>
              <controlfield tag="001">42</controlfield>
              {datafields}
            </record>"#
        )
    }

    #[test]
    fn extracts_700a() {
        let xml = record(
            r#"<datafield tag="700" ind1="1" ind2=" ">
                 <subfield code="a">Doe, Jane</subfield>
                 <subfield code="e">editor</subfield>
               </datafield>"#,
        );
        assert_eq!(author_from_marc_xml(&xml).as_deref(), Some("Doe, Jane"));
    }

    #[test]
    fn no_700_field_yields_none() {
        let xml = record(
            r#"<datafield tag="245" ind1="0" ind2="0">
                 <subfield code="a">A title</subfield>
               </datafield>"#,
        );
        assert_eq!(author_from_marc_xml(&xml), None);
    }

    #[test]
    fn only_first_subfield_of_a_700_is_inspected() {
        // $a is present but is not the first subfield, so this 700 is skipped
        let xml = record(
            r#"<datafield tag="700" ind1="1" ind2=" ">
                 <subfield code="e">editor</subfield>
                 <subfield code="a">Doe, Jane</subfield>
               </datafield>"#,
        );
        assert_eq!(author_from_marc_xml(&xml), None);
    }

    #[test]
    fn scanning_continues_past_unusable_700s() {
        let xml = record(
            r#"<datafield tag="700" ind1="1" ind2=" ">
                 <subfield code="a"></subfield>
               </datafield>
               <datafield tag="700" ind1="1" ind2=" ">
                 <subfield code="a">Roe, Richard</subfield>
               </datafield>"#,
        );
        assert_eq!(author_from_marc_xml(&xml).as_deref(), Some("Roe, Richard"));
    }

    #[test]
    fn first_matching_700_wins() {
        let xml = record(
            r#"<datafield tag="700" ind1="1" ind2=" ">
                 <subfield code="a">Doe, Jane</subfield>
               </datafield>
               <datafield tag="700" ind1="1" ind2=" ">
                 <subfield code="a">Roe, Richard</subfield>
               </datafield>"#,
        );
        assert_eq!(author_from_marc_xml(&xml).as_deref(), Some("Doe, Jane"));
    }

    #[test]
    fn namespace_is_required() {
        let xml = r#"<record><datafield tag="700"><subfield code="a">Doe, Jane</subfield></datafield></record>"#;
        assert_eq!(author_from_marc_xml(xml), None);
    }

    #[test]
    fn malformed_xml_yields_none() {
        assert_eq!(author_from_marc_xml("<record><datafield"), None);
        assert_eq!(author_from_marc_xml(""), None);
    }
}
