use async_trait::async_trait;

/// Outbound mail transport. Resolves on acceptance by the transport, not
/// on delivery.
#[async_trait]
pub trait EmailSender: Send + Sync {
    async fn send(
        &self,
        to: &str,
        subject: &str,
        text_body: &str,
        html_body: &str,
    ) -> Result<(), String>;
}
