// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use ateam_core::test_support::test_project_id;
use ateam_core::ItemBuilder;

fn sample_event() -> BoardEvent {
    BoardEvent::ItemAdded { item: ItemBuilder::default().build() }
}

#[tokio::test]
async fn subscriber_receives_published_event_in_order() {
    let broker = EventBroker::new(8, Duration::from_secs(30));
    let project = test_project_id();
    let mut sub = broker.subscribe(project.clone());

    broker.publish(&project, sample_event());
    broker.publish(&project, BoardEvent::BoardUpdated);

    match sub.next().await {
        SubscriptionItem::Event(event) => assert_eq!(event.kind(), "item-added"),
        other => panic!("expected item-added event, got {other:?}"),
    }
    match sub.next().await {
        SubscriptionItem::Event(event) => assert_eq!(event.kind(), "board-updated"),
        other => panic!("expected board-updated event, got {other:?}"),
    }
}

#[tokio::test]
async fn events_published_to_other_projects_are_not_delivered() {
    let broker = EventBroker::new(8, Duration::from_secs(30));
    let project = test_project_id();
    let other = ateam_core::test_support::other_project_id();
    let mut sub = broker.subscribe(project.clone());

    broker.publish(&other, sample_event());

    // Give a yield point for any (incorrect) delivery to land, then confirm nothing arrived.
    tokio::task::yield_now().await;
    assert!(sub.rx.try_recv().is_err());
}

#[tokio::test]
async fn full_queue_drops_the_subscriber_without_blocking_publish() {
    let broker = EventBroker::new(1, Duration::from_secs(30));
    let project = test_project_id();
    let mut sub = broker.subscribe(project.clone());

    // Fill the bounded queue, then publish past capacity: the subscriber
    // should be dropped rather than the call blocking.
    broker.publish(&project, sample_event());
    broker.publish(&project, sample_event());

    assert_eq!(broker.subscriber_count(&project), 0);

    // One buffered event remains to drain, then the channel reports closed.
    assert!(matches!(sub.next().await, SubscriptionItem::Event(_)));
    assert!(matches!(sub.next().await, SubscriptionItem::Closed));
}

#[tokio::test]
async fn dropping_a_subscription_removes_it_from_the_topic() {
    let broker = EventBroker::new(8, Duration::from_secs(30));
    let project = test_project_id();
    let sub = broker.subscribe(project.clone());
    assert_eq!(broker.subscriber_count(&project), 1);

    drop(sub);
    assert_eq!(broker.subscriber_count(&project), 0);
}

#[tokio::test]
async fn heartbeat_loop_delivers_heartbeats_to_idle_subscribers() {
    let broker = EventBroker::new(8, Duration::from_millis(10));
    let project = test_project_id();
    let mut sub = broker.subscribe(project.clone());

    tokio::spawn(broker.clone().run_heartbeats());

    assert!(matches!(sub.next().await, SubscriptionItem::Heartbeat));
}
