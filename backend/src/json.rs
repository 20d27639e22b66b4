use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

/// Serializes `value` as UTF-8 JSON indented with four spaces, non-ASCII kept as-is.
pub(crate) fn to_pretty_json<T: Serialize + ?Sized>(value: &T) -> serde_json::Result<Vec<u8>> {
    let mut out = Vec::new();
    let mut serializer = Serializer::with_formatter(&mut out, PrettyFormatter::with_indent(b"    "));
    value.serialize(&mut serializer)?;
    Ok(out)
}
