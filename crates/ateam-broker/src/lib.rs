// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! ateam-broker: per-project pub/sub fan-out with bounded per-subscriber
//! queues and a drop-slow-subscriber backpressure policy (§4.4).
//!
//! Publishers never block on a slow subscriber: a subscriber whose queue is
//! full is dropped (its channel closed) rather than stalling the publish
//! path. Each subscriber otherwise sees its own events in strict FIFO
//! publish order; there is no ordering guarantee across subscribers.

mod subscription;
mod topic;

pub use subscription::{BrokerMessage, Subscription, SubscriptionItem};
pub use topic::SubscriberId;

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use ateam_core::{BoardEvent, ProjectId};
use parking_lot::Mutex;
use tokio::sync::mpsc;
use topic::Topic;

type Topics = Arc<Mutex<HashMap<ProjectId, Topic>>>;

/// Shared handle to the broker. Cheap to clone; every clone refers to the
/// same topic registry.
#[derive(Clone)]
pub struct EventBroker {
    topics: Topics,
    capacity: usize,
    heartbeat_interval: Duration,
}

impl EventBroker {
    /// `capacity` is the per-subscriber bounded queue size (`ATEAM_EVENT_QUEUE_CAPACITY`,
    /// default 256); `heartbeat_interval` is the idle heartbeat cadence
    /// (`ATEAM_HEARTBEAT_MS`, default 30s).
    pub fn new(capacity: usize, heartbeat_interval: Duration) -> Self {
        Self { topics: Arc::new(Mutex::new(HashMap::new())), capacity, heartbeat_interval }
    }

    /// Register a new subscriber on `project`'s topic.
    pub fn subscribe(&self, project: ProjectId) -> Subscription {
        let (tx, rx) = mpsc::channel(self.capacity.max(1));
        let id = {
            let mut topics = self.topics.lock();
            let topic = topics.entry(project.clone()).or_default();
            let id = topic.next_subscriber_id();
            topic.subscribers.push((id, tx));
            id
        };

        let topics = self.topics.clone();
        Subscription {
            id,
            project,
            rx,
            unsubscribe: Box::new(move |project, id| {
                let mut topics = topics.lock();
                if let Some(topic) = topics.get_mut(&project) {
                    topic.subscribers.retain(|(sub_id, _)| *sub_id != id);
                }
            }),
        }
    }

    /// Fan out `event` to every current subscriber of `project`. Subscribers
    /// with a full queue are dropped, never blocked on.
    pub fn publish(&self, project: &ProjectId, event: BoardEvent) {
        let event = Arc::new(event);
        let mut topics = self.topics.lock();
        let Some(topic) = topics.get_mut(project) else { return };
        send_to_all(project, topic, BrokerMessage::Event(event));
    }

    /// Drive the idle-heartbeat loop. Intended to be `tokio::spawn`ed once
    /// at server startup; runs until the process exits.
    pub async fn run_heartbeats(self) {
        let mut ticker = tokio::time::interval(self.heartbeat_interval);
        ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
        loop {
            ticker.tick().await;
            let mut topics = self.topics.lock();
            for (project, topic) in topics.iter_mut() {
                send_to_all(project, topic, BrokerMessage::Heartbeat);
            }
        }
    }

    /// Number of live subscribers across all projects (test/diagnostic use).
    pub fn subscriber_count(&self, project: &ProjectId) -> usize {
        self.topics.lock().get(project).map_or(0, |topic| topic.subscribers.len())
    }
}

fn send_to_all(project: &ProjectId, topic: &mut Topic, message: BrokerMessage) {
    topic.subscribers.retain(|(id, tx)| match tx.try_send(message.clone()) {
        Ok(()) => true,
        Err(mpsc::error::TrySendError::Full(_)) => {
            tracing::warn!(project = %project, subscriber = id, "dropping slow event subscriber");
            false
        }
        Err(mpsc::error::TrySendError::Closed(_)) => false,
    });
}

#[cfg(test)]
#[path = "broker_tests.rs"]
mod tests;
