// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[test]
fn defaults_apply_when_unset() {
    assert_eq!(bind_addr(), "127.0.0.1:4170");
    assert_eq!(log_filter(), "info");
    assert_eq!(event_queue_capacity(), 256);
    assert_eq!(heartbeat_interval(), Duration::from_secs(30));
    assert_eq!(db_max_retries(), 3);
    assert_eq!(db_retry_base(), Duration::from_millis(20));
}
