use bytes::Bytes;
use std::collections::HashMap;

use crate::error::Error;

/// A single exchange passed from the transport layer through customizers to a producer.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Message {
    /// Transport headers in form of key-value pairs.
    ///
    /// Producers read their per-request options from here, e.g. the OData key predicate of an entity to delete.
    headers: HashMap<String, String>,

    body: Bytes,
}

impl Message {
    pub fn new(body: impl Into<Bytes>) -> Self {
        Message {
            body: body.into(),
            ..Default::default()
        }
    }

    pub fn body(&self) -> &[u8] {
        &self.body
    }

    /// View the body as UTF-8 text.
    ///
    /// # Errors
    /// Raise Error::MalformedInput if the body is not valid UTF-8.
    pub fn body_as_str(&self) -> Result<&str, Error> {
        std::str::from_utf8(&self.body)
            .map_err(|e| Error::MalformedInput(format!("Body is not valid UTF-8: {}", e)))
    }

    pub fn set_body(&mut self, body: impl Into<Bytes>) {
        self.body = body.into();
    }

    pub fn header(&self, key: &str) -> Option<&str> {
        self.headers.get(key).map(String::as_str)
    }

    pub fn headers(&self) -> &HashMap<String, String> {
        &self.headers
    }

    pub fn set_header(&mut self, key: &str, value: &str) {
        self.headers.insert(key.to_owned(), value.to_owned());
    }

    pub fn add_headers(&mut self, headers: impl Into<HashMap<String, String>>) {
        let map: HashMap<String, String> = headers.into();
        map.iter().for_each(|(k, v)| {
            self.set_header(k, v);
        });
    }
}
