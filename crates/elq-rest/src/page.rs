//! List responses.

use serde_json::Value;

use crate::error::{Error, ErrorKind, Result};

/// A missing or `null` counter is `None`; anything but a non-negative
/// integer is a decode error.
fn counter(envelope: &serde_json::Map<String, Value>, key: &str) -> Result<Option<u64>> {
    match envelope.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(value) => value.as_u64().map(Some).ok_or_else(|| {
            Error::decode(format!("list response `{key}` is not a count: {value}"))
        }),
    }
}

/// One page of a list response: `{elements, total, page, pageSize}`.
///
/// Counters are copied from the envelope as they came; absent counters stay
/// `None`.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<R> {
    pub elements: Vec<R>,
    pub total: Option<u64>,
    pub page: Option<u64>,
    pub page_size: Option<u64>,
}

impl<R> Page<R> {
    /// Decode an envelope, turning each element into `R` with `decode`.
    ///
    /// The first failing element aborts the whole page; its position is
    /// reported in a `ListElement` error.
    pub fn decode_with<F>(body: Value, mut decode: F) -> Result<Self>
    where
        F: FnMut(Value) -> Result<R>,
    {
        let mut envelope = match body {
            Value::Object(map) => map,
            other => {
                return Err(Error::decode(format!(
                    "list response is not a JSON object: {other}"
                )))
            }
        };

        let total = counter(&envelope, "total")?;
        let page = counter(&envelope, "page")?;
        let page_size = counter(&envelope, "pageSize")?;

        let raw_elements = match envelope.remove("elements") {
            Some(Value::Array(elements)) => elements,
            Some(_) => return Err(Error::decode("list response `elements` is not a list")),
            None => return Err(Error::decode("list response has no `elements`")),
        };

        let mut elements = Vec::with_capacity(raw_elements.len());
        for (index, element) in raw_elements.into_iter().enumerate() {
            match decode(element) {
                Ok(record) => elements.push(record),
                Err(err) => {
                    let inner = Box::new(err.kind);
                    return Err(Error {
                        kind: ErrorKind::ListElement { index, inner },
                        source: err.source,
                    });
                }
            }
        }

        Ok(Self {
            elements,
            total,
            page,
            page_size,
        })
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, R> {
        self.elements.iter()
    }

    /// First element, if any.
    pub fn first(&self) -> Option<&R> {
        self.elements.first()
    }
}

impl<R> IntoIterator for Page<R> {
    type Item = R;
    type IntoIter = std::vec::IntoIter<R>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.into_iter()
    }
}
