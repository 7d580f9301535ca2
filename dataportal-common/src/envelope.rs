use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

/// Outer wrapper: every portal endpoint nests its payload under `response`.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiResponse {
    pub response: Envelope,
}

/// The `{header, body}` structure shared by all portal endpoints.
#[derive(Debug, Clone, Deserialize)]
pub struct Envelope {
    pub header: EnvelopeHeader,
    #[serde(default)]
    pub body: Option<EnvelopeBody>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EnvelopeHeader {
    #[serde(rename = "resultCode")]
    pub result_code: String,
    #[serde(rename = "resultMsg", default)]
    pub result_msg: String,
}

/// Envelope body. `items` is kept as raw JSON because the portal emits it in
/// several shapes (see [`extract_items`]); the pagination fields are typed.
#[derive(Debug, Clone, Deserialize)]
pub struct EnvelopeBody {
    #[serde(default)]
    pub items: Option<Value>,
    #[serde(rename = "totalCount", default)]
    pub total_count: Option<u32>,
    #[serde(rename = "pageNo", default)]
    pub page_no: Option<u32>,
    #[serde(rename = "numOfRows", default)]
    pub num_of_rows: Option<u32>,
}

/// Outcome of interpreting `body.items`.
///
/// `Malformed` is distinct from `Empty` on purpose: a shape that matches
/// neither the list form nor a known empty form is reported, never silently
/// treated as "no results".
#[derive(Debug, Clone, PartialEq)]
pub enum ItemExtraction<T> {
    Items(Vec<T>),
    Empty,
    Malformed(String),
}

/// Interpret the portal's `body.items` node.
///
/// The portal serializes XML to JSON, which produces three shapes for the
/// same logical list: `{"items": {"item": [..]}}` for several rows,
/// `{"items": {"item": {..}}}` for exactly one row, and `{"items": ""}` for
/// none. A missing `body`, `items` or `item` also means no rows. Everything
/// else is `Malformed`.
pub fn extract_items<T: DeserializeOwned>(body: Option<&EnvelopeBody>) -> ItemExtraction<T> {
    let items = match body.and_then(|b| b.items.as_ref()) {
        None => return ItemExtraction::Empty,
        Some(items) => items,
    };

    match items {
        Value::Null => ItemExtraction::Empty,
        Value::String(s) if s.is_empty() => ItemExtraction::Empty,
        Value::Object(map) => match map.get("item") {
            None | Some(Value::Null) => ItemExtraction::Empty,
            Some(Value::Array(elements)) => collect_items(elements),
            Some(single @ Value::Object(_)) => match T::deserialize(single.clone()) {
                Ok(item) => ItemExtraction::Items(vec![item]),
                Err(e) => ItemExtraction::Malformed(format!(
                    "item object does not match the record schema: {}",
                    e
                )),
            },
            Some(other) => ItemExtraction::Malformed(format!(
                "item is neither a list nor an object: {}",
                shape_of(other)
            )),
        },
        other => ItemExtraction::Malformed(format!(
            "items is neither an object nor a known empty form: {}",
            shape_of(other)
        )),
    }
}

fn collect_items<T: DeserializeOwned>(elements: &[Value]) -> ItemExtraction<T> {
    let mut items = Vec::with_capacity(elements.len());
    for element in elements {
        match T::deserialize(element.clone()) {
            Ok(item) => items.push(item),
            Err(e) => {
                return ItemExtraction::Malformed(format!(
                    "item element does not match the record schema: {}",
                    e
                ))
            }
        }
    }
    ItemExtraction::Items(items)
}

fn shape_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// One page of results together with the envelope's pagination fields.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total_count: Option<u32>,
    pub page_no: Option<u32>,
    pub num_of_rows: Option<u32>,
}
