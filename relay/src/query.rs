use url::form_urlencoded;

/// First `message` value in a raw query string, form-decoded. A blank value
/// is returned as `Some("")` so the caller rejects `message=` the same way
/// as a missing parameter.
pub fn message_from_query(raw_query: Option<&str>) -> Option<String> {
    let raw = raw_query?;
    form_urlencoded::parse(raw.as_bytes())
        .find(|(key, _)| key == "message")
        .map(|(_, value)| value.into_owned())
}
