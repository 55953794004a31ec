use salvo::http::StatusCode;
use salvo::http::header::{CONTENT_TYPE, HeaderValue};
use salvo::writing::Text;

use tessen_core::constants::MULTISTATUS_CONTENT_TYPE;
use tessen_rfc::rfc::dav::build::serialize_multistatus;
use tessen_service::dav::{DeleteBody, DeleteResponse};

/// ## Summary
/// Writes a terminal `DELETE` response.
///
/// Multistatus bodies are serialized as `DAV:` XML; a serialization failure
/// becomes a bare 500.
pub fn write_delete_response(res: &mut salvo::Response, response: DeleteResponse) {
    match response.body {
        DeleteBody::Empty => {
            res.status_code(response.status);
        }
        DeleteBody::Text(text) => {
            res.status_code(response.status);
            res.render(Text::Plain(text));
        }
        DeleteBody::Multistatus(multistatus) => {
            let xml = match serialize_multistatus(&multistatus) {
                Ok(xml) => xml,
                Err(e) => {
                    tracing::error!(error = %e, "Failed to serialize multistatus");
                    res.status_code(StatusCode::INTERNAL_SERVER_ERROR);
                    return;
                }
            };

            res.status_code(response.status);
            res.headers_mut().insert(
                CONTENT_TYPE,
                HeaderValue::from_static(MULTISTATUS_CONTENT_TYPE),
            );
            #[expect(
                clippy::let_underscore_must_use,
                reason = "Write body failure is non-fatal"
            )]
            let _ = res.write_body(xml);
        }
    }
}
