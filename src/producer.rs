use async_trait::async_trait;
use tracing::warn;

use crate::customizer::ProducerCustomizer;
use crate::error::Error;
use crate::message::Message;

/// Downstream stage a message is handed to, e.g. an OData delete invocation.
#[async_trait]
pub trait Producer: Send + Sync {
    async fn send(&self, message: Message) -> Result<Message, Error>;
}

/// Runs a customizer's hooks around every call to the wrapped producer.
pub struct CustomizedProducer<P, C> {
    producer: P,
    customizer: C,
}

impl<P, C> CustomizedProducer<P, C>
where
    P: Producer,
    C: ProducerCustomizer,
{
    pub fn new(producer: P, customizer: C) -> Self {
        CustomizedProducer {
            producer,
            customizer,
        }
    }

    pub fn inner(&self) -> &P {
        &self.producer
    }
}

#[async_trait]
impl<P, C> Producer for CustomizedProducer<P, C>
where
    P: Producer,
    C: ProducerCustomizer,
{
    /// # Errors
    /// A failing `before_producer` hook is returned as is and the wrapped producer is not called.
    async fn send(&self, mut message: Message) -> Result<Message, Error> {
        if let Err(e) = self.customizer.before_producer(&mut message) {
            warn!(error = %e, "Customizer rejected message before producer");
            return Err(e);
        }
        let mut reply = self.producer.send(message).await?;
        if let Err(e) = self.customizer.after_producer(&mut reply) {
            warn!(error = %e, "Customizer rejected reply after producer");
            return Err(e);
        }
        Ok(reply)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::customizer::ODataDeleteCustomizer;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingProducer {
        sent: Mutex<Vec<Message>>,
    }

    #[async_trait]
    impl Producer for RecordingProducer {
        async fn send(&self, message: Message) -> Result<Message, Error> {
            let mut guard = self
                .sent
                .lock()
                .map_err(|e| Error::Producer(e.to_string()))?;
            guard.push(message);
            Ok(Message::new("204 No Content"))
        }
    }

    struct FailingProducer;

    #[async_trait]
    impl Producer for FailingProducer {
        async fn send(&self, _message: Message) -> Result<Message, Error> {
            Err(Error::Producer("entity not found".to_owned()))
        }
    }

    struct MarkingCustomizer;

    impl ProducerCustomizer for MarkingCustomizer {
        fn before_producer(&self, message: &mut Message) -> Result<(), Error> {
            message.set_header("stage", "before");
            Ok(())
        }

        fn after_producer(&self, message: &mut Message) -> Result<(), Error> {
            message.set_header("stage", "after");
            Ok(())
        }
    }

    struct RejectingReplyCustomizer;

    impl ProducerCustomizer for RejectingReplyCustomizer {
        fn before_producer(&self, _message: &mut Message) -> Result<(), Error> {
            Ok(())
        }

        fn after_producer(&self, _message: &mut Message) -> Result<(), Error> {
            Err(Error::MalformedInput("reply is not JSON".to_owned()))
        }
    }

    #[tokio::test]
    async fn test_send_customizes_before_producer() -> Result<(), Box<dyn std::error::Error>> {
        let producer = CustomizedProducer::new(
            RecordingProducer::default(),
            ODataDeleteCustomizer::default(),
        );
        let reply = producer
            .send(Message::new(r#"{"keyPredicate": "id eq 5"}"#))
            .await?;
        assert_eq!(reply.body(), b"204 No Content");

        let sent = producer.inner().sent.lock().map_err(|e| e.to_string())?;
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].header("olingo4.keyPredicate"), Some("id eq 5"));
        assert!(sent[0].body().is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn test_send_malformed_skips_producer() -> Result<(), Box<dyn std::error::Error>> {
        let producer = CustomizedProducer::new(
            RecordingProducer::default(),
            ODataDeleteCustomizer::default(),
        );
        let result = producer.send(Message::new("not json")).await;
        assert!(matches!(result, Err(Error::MalformedInput(_))));

        let sent = producer.inner().sent.lock().map_err(|e| e.to_string())?;
        assert!(sent.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn test_send_propagates_producer_error() {
        let producer = CustomizedProducer::new(FailingProducer, ODataDeleteCustomizer::default());
        let result = producer
            .send(Message::new(r#"{"keyPredicate": "id eq 5"}"#))
            .await;
        assert_eq!(
            result,
            Err(Error::Producer("entity not found".to_owned()))
        );
    }

    #[tokio::test]
    async fn test_after_producer_sees_reply() -> Result<(), Box<dyn std::error::Error>> {
        let producer = CustomizedProducer::new(RecordingProducer::default(), MarkingCustomizer);
        let reply = producer.send(Message::new("anything")).await?;
        assert_eq!(reply.header("stage"), Some("after"));

        let sent = producer.inner().sent.lock().map_err(|e| e.to_string())?;
        assert_eq!(sent[0].header("stage"), Some("before"));
        Ok(())
    }

    #[tokio::test]
    async fn test_after_producer_error_propagated() -> Result<(), Box<dyn std::error::Error>> {
        let producer =
            CustomizedProducer::new(RecordingProducer::default(), RejectingReplyCustomizer);
        let result = producer.send(Message::new("anything")).await;
        assert_eq!(
            result,
            Err(Error::MalformedInput("reply is not JSON".to_owned()))
        );

        let sent = producer.inner().sent.lock().map_err(|e| e.to_string())?;
        assert_eq!(sent.len(), 1);
        Ok(())
    }
}
