#![cfg(feature = "serde")]

use wumpus_core::{Action, Percept};

#[test]
fn actions_serialize_as_lowercase_words() {
    let json = serde_json::to_string(&[Action::Forward, Action::Climb]).expect("serialize");
    assert_eq!(json, r#"["forward","climb"]"#);
}

#[test]
fn percept_fields_default_to_false() {
    let percept: Percept = serde_json::from_str(r#"{"breeze": true}"#).expect("deserialize");
    assert_eq!(percept, Percept::none().with_breeze());
}
