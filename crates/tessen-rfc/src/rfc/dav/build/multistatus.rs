//! Multistatus XML serialization.

use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};

use crate::error::{RfcError, RfcResult};
use crate::rfc::dav::core::{Multistatus, StatusResponse};

/// ## Summary
/// Serializes a multistatus response to XML.
///
/// Every `StatusResponse` becomes one `D:response` element holding its
/// `D:href` and `D:status`, in input order.
///
/// ## Errors
/// Returns an error if XML writing fails or if the generated XML is not valid UTF-8.
pub fn serialize_multistatus(multistatus: &Multistatus) -> RfcResult<String> {
    let mut writer = Writer::new(Vec::new());
    write_document(&mut writer, multistatus)?;

    String::from_utf8(writer.into_inner()).map_err(|e| {
        tracing::error!(error = %e, "Generated invalid UTF-8 in multistatus XML");
        RfcError::ParseError("Invalid UTF-8 in XML output".to_string())
    })
}

fn write_document<W: std::io::Write>(
    writer: &mut Writer<W>,
    multistatus: &Multistatus,
) -> Result<(), quick_xml::Error> {
    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("utf-8"), None)))?;

    let mut elem = BytesStart::new("D:multistatus");
    elem.push_attribute(("xmlns:D", "DAV:"));
    writer.write_event(Event::Start(elem))?;

    for response in &multistatus.responses {
        write_response(writer, response)?;
    }

    writer.write_event(Event::End(BytesEnd::new("D:multistatus")))?;

    Ok(())
}

fn write_response<W: std::io::Write>(
    writer: &mut Writer<W>,
    response: &StatusResponse,
) -> Result<(), quick_xml::Error> {
    writer.write_event(Event::Start(BytesStart::new("D:response")))?;

    write_text_element(writer, "D:href", response.href.as_str())?;
    write_text_element(writer, "D:status", &response.status.status_line())?;

    writer.write_event(Event::End(BytesEnd::new("D:response")))?;

    Ok(())
}

fn write_text_element<W: std::io::Write>(
    writer: &mut Writer<W>,
    name: &str,
    text: &str,
) -> Result<(), quick_xml::Error> {
    writer.write_event(Event::Start(BytesStart::new(name)))?;
    writer.write_event(Event::Text(BytesText::new(text)))?;
    writer.write_event(Event::End(BytesEnd::new(name)))?;
    Ok(())
}
