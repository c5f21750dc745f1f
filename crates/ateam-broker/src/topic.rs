// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Per-project subscriber registry.

use tokio::sync::mpsc;

use crate::subscription::BrokerMessage;

pub type SubscriberId = u64;

/// All current subscribers of one project's topic.
#[derive(Default)]
pub struct Topic {
    next_id: SubscriberId,
    pub(crate) subscribers: Vec<(SubscriberId, mpsc::Sender<BrokerMessage>)>,
}

impl Topic {
    pub fn next_subscriber_id(&mut self) -> SubscriberId {
        self.next_id += 1;
        self.next_id
    }

    pub fn is_empty(&self) -> bool {
        self.subscribers.is_empty()
    }
}
