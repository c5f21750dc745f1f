// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The receiving half of a topic subscription (§4.4).

use std::sync::Arc;

use ateam_core::BoardEvent;
use tokio::sync::mpsc;

use crate::topic::SubscriberId;

/// What travels down a subscriber's channel: a real event, or a heartbeat
/// with no payload (§4.4, §6.3).
#[derive(Debug, Clone)]
pub enum BrokerMessage {
    Event(Arc<BoardEvent>),
    Heartbeat,
}

/// What a caller observes from [`Subscription::next`].
#[derive(Debug, Clone)]
pub enum SubscriptionItem {
    Event(Arc<BoardEvent>),
    Heartbeat,
    /// The broker dropped this subscriber (full queue) or the topic closed.
    Closed,
}

/// A live subscription to one project's topic. Dropping it removes the
/// subscriber from the topic within the broker's next publish cycle.
pub struct Subscription {
    pub(crate) id: SubscriberId,
    pub(crate) project: ateam_core::ProjectId,
    pub(crate) rx: mpsc::Receiver<BrokerMessage>,
    pub(crate) unsubscribe: Box<dyn Fn(ateam_core::ProjectId, SubscriberId) + Send + Sync>,
}

impl Subscription {
    /// Await the next event, heartbeat, or closure notice.
    pub async fn next(&mut self) -> SubscriptionItem {
        match self.rx.recv().await {
            Some(BrokerMessage::Event(event)) => SubscriptionItem::Event(event),
            Some(BrokerMessage::Heartbeat) => SubscriptionItem::Heartbeat,
            None => SubscriptionItem::Closed,
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        (self.unsubscribe)(self.project.clone(), self.id);
    }
}
