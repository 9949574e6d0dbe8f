//! Logging notification adapter
//!
//! Stands in for a real mail gateway: records the notification in the log
//! and succeeds. Real delivery belongs to a deployment.

use async_trait::async_trait;
use uuid::Uuid;

use crate::application::ports::{EmailGateway, NotificationError};

#[derive(Debug, Default)]
pub struct LoggingEmailGateway;

#[async_trait]
impl EmailGateway for LoggingEmailGateway {
    async fn notify_about_winning_auction(
        &self,
        auction_id: Uuid,
        bidder_id: Uuid,
    ) -> Result<(), NotificationError> {
        tracing::info!(%auction_id, %bidder_id, "bidder is now winning the auction");
        Ok(())
    }
}
