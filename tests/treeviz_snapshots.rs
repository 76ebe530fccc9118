//! Treeviz dumps of parsed abbreviations
//!
//! The outline makes the builder's placement decisions visible, so these
//! snapshots pin down where operators attach nodes, including the cases where
//! climbing stops at a group or the root.

use ennet::ennet::formats::to_treeviz_str;
use ennet::ennet::parse_tree;

fn treeviz(source: &str) -> String {
    to_treeviz_str(&parse_tree(source).expect("abbreviation to parse"))
}

#[test]
fn test_treeviz_climb_one_level() {
    insta::assert_snapshot!(treeviz("div+div>p>span+em^bq"), @r"
    ├─ Element: div
    └─ Element: div
      ├─ Element: p
      │ ├─ Element: span
      │ └─ Element: em
      └─ Element: bq
    ");
}

#[test]
fn test_treeviz_climb_stops_at_root() {
    insta::assert_snapshot!(treeviz("div+div>p>span+em^^^bq"), @r"
    ├─ Element: div
    ├─ Element: div
    │ └─ Element: p
    │   ├─ Element: span
    │   └─ Element: em
    └─ Element: bq
    ");
}

#[test]
fn test_treeviz_climb_stops_at_group() {
    insta::assert_snapshot!(treeviz("ul>(li>a^^^b)*2"), @r"
    └─ Element: ul
      └─ Group: () *2
        ├─ Element: li
        │ └─ Element: a
        └─ Element: b
    ");
}

#[test]
fn test_treeviz_nested_groups() {
    insta::assert_snapshot!(treeviz("(div>dl>(dt+dd)*3)+footer>p"), @r"
    ├─ Group: ()
    │ └─ Element: div
    │   └─ Element: dl
    │     └─ Group: () *3
    │       ├─ Element: dt
    │       └─ Element: dd
    └─ Element: footer
      └─ Element: p
    ");
}

#[test]
fn test_treeviz_attributes_and_text() {
    insta::assert_snapshot!(treeviz(r#"p>{Click }+a#go.btn[href="/next"]{here}+{ to continue}"#), @r#"
    └─ Element: p
      ├─ Text: "Click "
      ├─ Element: a @class=btn @href=/next @id=go
      │ └─ Text: "here"
      └─ Text: " to continue"
    "#);
}

#[test]
fn test_treeviz_placeholders_are_unexpanded() {
    insta::assert_snapshot!(treeviz("ul>li.item$@-*5"), @r"
    └─ Element: ul
      └─ Element: li @class=item$@- *5
    ");
}
