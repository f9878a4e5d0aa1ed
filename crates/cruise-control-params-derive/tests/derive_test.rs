// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! Tests for #[derive(Params)].

use std::collections::BTreeMap;
use std::fmt;

use cruise_control_params::{
    BoxError, EncodeError, Encoder, FieldDescriptor, MarshalParams, ParamFields, Params, to_params,
};
use cruise_control_params_derive::Params;

#[derive(Default, Params)]
struct Generic {
    #[param("json")]
    json: bool,
    #[param("get_response_schema,omitempty")]
    get_response_schema: bool,
    #[param("doAs,omitempty")]
    do_as: String,
}

#[derive(Default, Params)]
struct GenericWithReason {
    generic: Generic,
    #[param("reason,omitempty")]
    reason: String,
}

#[derive(Default, Params)]
struct RemoveBroker {
    common: GenericWithReason,
    #[param("brokerid")]
    broker_ids: Vec<i32>,
    #[param("dryrun,omitempty")]
    dry_run: bool,
    #[param("-")]
    #[allow(dead_code)]
    note: String,
    #[param("concurrent_leader_movements,omitempty=false")]
    concurrent_leader_movements: Option<i32>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Params)]
#[params(display)]
enum Substate {
    #[default]
    Undefined,
    Executor,
    Monitor,
}

impl fmt::Display for Substate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Substate::Undefined => "",
            Substate::Executor => "executor",
            Substate::Monitor => "monitor",
        };
        f.write_str(name)
    }
}

#[derive(Default, Params)]
struct State {
    #[param("substates,omitempty")]
    substates: Vec<Substate>,
    #[param("verbose,omitempty")]
    verbose: bool,
}

#[derive(Params)]
#[params(marshal)]
struct LogDirs(BTreeMap<i32, Vec<&'static str>>);

impl MarshalParams for LogDirs {
    fn marshal_params(&self, key: &str) -> Result<Params, BoxError> {
        let mut params = Params::new();
        for (broker, dirs) in &self.0 {
            params.add(key, dirs.iter().map(|dir| format!("{broker}-{dir}")));
        }
        Ok(params)
    }
}

#[derive(Params)]
struct RemoveDisks {
    #[param("brokerid_and_logdirs")]
    log_dirs: LogDirs,
}

#[derive(Params)]
struct Tuple(#[param("first")] i32, #[param("second,omitempty")] i32);

#[derive(Params)]
struct Labelled<T> {
    #[param("label")]
    label: String,
    #[param("items,omitempty")]
    items: Vec<T>,
}

#[derive(Params)]
struct Deep {
    #[param("nested")]
    nested: Vec<Vec<Vec<Vec<i32>>>>,
}

#[test]
fn test_field_table_is_generated() {
    let fields = RemoveBroker::FIELDS;
    assert_eq!(fields.len(), 5);
    assert_eq!(fields[0].name, "common");
    assert_eq!(fields[0].descriptor, FieldDescriptor::EMBEDDED);
    assert_eq!(fields[1].descriptor, FieldDescriptor::new("brokerid", false));
    assert_eq!(fields[2].descriptor, FieldDescriptor::new("dryrun", true));
    assert!(fields[3].descriptor.is_skipped());
    assert!(fields[4].descriptor.omit_empty);

    let field = RemoveBroker::field("broker_ids").unwrap();
    assert_eq!(field.descriptor.key, "brokerid");
    assert!(RemoveBroker::field("missing").is_none());
}

#[test]
fn test_embedded_structs_merge_flat() {
    let request = RemoveBroker {
        common: GenericWithReason {
            generic: Generic {
                json: true,
                ..Default::default()
            },
            reason: "decommission".to_string(),
        },
        broker_ids: vec![2, 3],
        dry_run: false,
        note: "not sent".to_string(),
        concurrent_leader_movements: None,
    };

    let params = to_params(&request).unwrap();
    assert_eq!(params.values("json"), ["true"]);
    assert_eq!(params.values("reason"), ["decommission"]);
    assert_eq!(params.values("brokerid"), ["2", "3"]);
    assert!(!params.contains_key("dryrun"));
    assert!(!params.contains_key("note"));
    assert!(!params.contains_key("concurrent_leader_movements"));
    assert!(!params.contains_key("get_response_schema"));
    assert!(!params.contains_key("doAs"));
}

#[test]
fn test_field_without_omit_empty_keeps_zero_value() {
    let params = to_params(&Generic::default()).unwrap();
    assert_eq!(params.values("json"), ["false"]);
    assert_eq!(params.len(), 1);
}

#[test]
fn test_display_enum() {
    let params = to_params(&State {
        substates: vec![Substate::Executor, Substate::Undefined, Substate::Monitor],
        verbose: true,
    })
    .unwrap();
    assert_eq!(params.values("substates"), ["executor", "monitor"]);
    assert_eq!(params.values("verbose"), ["true"]);
}

#[test]
fn test_marshal_container() {
    let mut dirs = BTreeMap::new();
    dirs.insert(101, vec!["/var/lib/kafka-1", "/var/lib/kafka-2"]);
    let params = to_params(&RemoveDisks {
        log_dirs: LogDirs(dirs),
    })
    .unwrap();
    assert_eq!(
        params.values("brokerid_and_logdirs"),
        ["101-/var/lib/kafka-1", "101-/var/lib/kafka-2"]
    );
}

#[test]
fn test_tuple_struct() {
    let params = to_params(&Tuple(0, 0)).unwrap();
    assert_eq!(params.values("first"), ["0"]);
    assert!(!params.contains_key("second"));
    assert_eq!(Tuple::FIELDS[1].name, "1");
}

#[test]
fn test_generic_struct() {
    let params = to_params(&Labelled {
        label: "goals".to_string(),
        items: vec!["RackAwareGoal", "CpuCapacityGoal"],
    })
    .unwrap();
    assert_eq!(params.values("label"), ["goals"]);
    assert_eq!(params.values("items"), ["RackAwareGoal", "CpuCapacityGoal"]);
}

#[test]
fn test_recursion_budget() {
    let deep = Deep {
        nested: vec![vec![vec![vec![7]]]],
    };
    assert_eq!(to_params(&deep).unwrap().values("nested"), ["7"]);

    let err = Encoder::new().with_max_depth(4).encode(&deep).unwrap_err();
    assert!(matches!(err, EncodeError::MaxRecursion { limit: 4 }));
}

#[test]
fn test_json_value_field() {
    #[derive(Params)]
    struct Review {
        #[param("approve,omitempty")]
        approve: serde_json::Value,
    }

    let params = to_params(&Review {
        approve: serde_json::json!([1, 2]),
    })
    .unwrap();
    assert_eq!(params.values("approve"), ["1", "2"]);

    let params = to_params(&Review {
        approve: serde_json::Value::Null,
    })
    .unwrap();
    assert!(params.is_empty());
}

#[test]
fn test_struct_with_only_skipped_fields() {
    #[derive(Params)]
    struct Credentials {
        #[param("-")]
        #[allow(dead_code)]
        password: String,
    }

    let credentials = Credentials {
        password: "hunter2".to_string(),
    };
    assert_eq!(Credentials::FIELDS.len(), 1);
    assert!(to_params(&credentials).unwrap().is_empty());
}
