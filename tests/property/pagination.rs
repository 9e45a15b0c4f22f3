// Copyright (c) 2025 - Cowboy AI, Inc.
//! Property-Based Tests for Marker Pagination
//!
//! For any sequence of non-empty pages followed by the terminating empty
//! page, the enumeration returns every port exactly once, in order, and
//! issues one request per page with the previous page's last id as marker.

use cim_cloud_ports::{CloudError, Region};
use proptest::prelude::*;
use tokio_test::block_on;

use crate::fixtures::*;

proptest! {
    #[test]
    fn enumeration_collects_every_page(sizes in prop::collection::vec(1usize..50, 0..6)) {
        let mut script = sizes.clone();
        script.push(0);
        let region = Region::new(REGION_ID, ScriptedClient::with_replies(pages_of_sizes(&script)));

        let ports = block_on(region.get_ports("")).unwrap();

        let total: usize = sizes.iter().sum();
        let ids: Vec<String> = ports.iter().map(|port| port.id.clone()).collect();
        let expected: Vec<String> = (1..=total).map(port_id).collect();
        prop_assert_eq!(ids, expected);

        let calls = region.client().calls();
        prop_assert_eq!(calls.len(), script.len());

        let mut last_id = 0;
        for (call, size) in calls.iter().zip(&script) {
            let expected_marker = (last_id > 0).then(|| port_id(last_id));
            prop_assert_eq!(call.query.get("marker").map(str::to_string), expected_marker);
            last_id += size;
        }
    }

    #[test]
    fn failing_page_discards_everything(
        sizes in prop::collection::vec(1usize..20, 1..5),
        fail_at in 0usize..5,
    ) {
        let fail_at = fail_at % (sizes.len() + 1);
        let mut replies = pages_of_sizes(&sizes[..fail_at]);
        replies.push(Err(CloudError::Transport("reset".to_string())));
        let region = Region::new(REGION_ID, ScriptedClient::with_replies(replies));

        let result = block_on(region.get_ports("ecs-1"));

        prop_assert!(result.is_err());
        prop_assert_eq!(region.client().call_count(), fail_at + 1);
    }
}
