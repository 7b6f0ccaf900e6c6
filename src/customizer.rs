//!
//! This module defines customizers that adjust a message right before it reaches a producer.
//!
//!

use bytes::Bytes;
use serde_json::Value;
use tracing::debug;

use crate::config::RouterConfig;
use crate::error::Error;
use crate::message::Message;

/// Hooks run around a producer invocation.
pub trait ProducerCustomizer: Send + Sync {
    fn before_producer(&self, message: &mut Message) -> Result<(), Error>;

    fn after_producer(&self, _message: &mut Message) -> Result<(), Error> {
        Ok(())
    }
}

/// Lifts one field of a JSON body into a header and empties the body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldToHeaderRouter {
    field: String,
    header: String,
}

/// The router as configured for OData delete: `keyPredicate` goes to `olingo4.keyPredicate`.
pub type ODataDeleteCustomizer = FieldToHeaderRouter;

impl Default for FieldToHeaderRouter {
    fn default() -> Self {
        FieldToHeaderRouter::from_config(&RouterConfig::default())
    }
}

impl FieldToHeaderRouter {
    pub fn new(field: &str, header: &str) -> Self {
        Self {
            field: field.to_owned(),
            header: header.to_owned(),
        }
    }

    pub fn from_config(config: &RouterConfig) -> Self {
        Self {
            field: config.field.clone(),
            header: config.header_name(),
        }
    }

    pub fn field(&self) -> &str {
        self.field.as_str()
    }

    pub fn header(&self) -> &str {
        self.header.as_str()
    }

    /// Copy the configured field into the configured header, then clear the body.
    ///
    /// A missing, null or blank field is skipped silently. The body is parsed before anything is
    /// written, so on error the message is left as it was.
    ///
    /// # Errors
    /// Raise Error::MalformedInput if the body is not a UTF-8 encoded JSON object.
    pub fn process(&self, message: &mut Message) -> Result<(), Error> {
        let node: Value = serde_json::from_str(message.body_as_str()?)
            .map_err(|e| Error::MalformedInput(e.to_string()))?;
        let object = node
            .as_object()
            .ok_or_else(|| Error::MalformedInput("Body is not a JSON object".to_owned()))?;

        match object.get(&self.field).and_then(as_text) {
            Some(text) => {
                debug!(field = %self.field, header = %self.header, value = %text, "Routing field to header");
                message.set_header(&self.header, &text);
            }
            None => {
                debug!(field = %self.field, "Field absent or empty, no header set");
            }
        }

        message.set_body(Bytes::new());
        Ok(())
    }
}

impl ProducerCustomizer for FieldToHeaderRouter {
    fn before_producer(&self, message: &mut Message) -> Result<(), Error> {
        self.process(message)
    }
}

// Containers and null have no textual value. Blank means only control characters and spaces.
fn as_text(node: &Value) -> Option<String> {
    let text = match node {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null | Value::Array(_) | Value::Object(_) => return None,
    };
    if text.trim_matches(|c: char| c <= '\u{20}').is_empty() {
        return None;
    }
    Some(text)
}
