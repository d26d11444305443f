//! Parsed-resume analysis payload. The analysis engine returns nested
//! sections whose exact shape varies per resume, so the payload is modeled as
//! a recursive node instead of fixed per-section structs. Group keys render
//! in alphabetical order.

use serde::Deserialize;
use std::collections::BTreeMap;

/// One node of the analysis tree. Scalars render inline, lists as bullet
/// items, and groups as labeled sections of further nodes.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum AnalysisNode {
    Text(String),
    Number(f64),
    Flag(bool),
    Items(Vec<AnalysisNode>),
    Group(BTreeMap<String, AnalysisNode>),
    Empty,
}

impl AnalysisNode {
    /// Scalar text for inline rendering; `None` for lists and groups.
    pub fn scalar_text(&self) -> Option<String> {
        match self {
            AnalysisNode::Text(text) => Some(text.clone()),
            AnalysisNode::Number(number) => Some(trim_number(*number)),
            AnalysisNode::Flag(flag) => Some(if *flag { "yes" } else { "no" }.to_string()),
            AnalysisNode::Empty => Some(String::new()),
            AnalysisNode::Items(_) | AnalysisNode::Group(_) => None,
        }
    }
}

/// Section labels come back as snake_case field names; display them the way
/// the console always has, spaced and upper-cased.
pub fn humanize_key(key: &str) -> String {
    key.replace('_', " ").to_uppercase()
}

fn trim_number(number: f64) -> String {
    if number.fract() == 0.0 && number.abs() < 1e15 {
        format!("{}", number as i64)
    } else {
        format!("{number}")
    }
}

#[cfg(test)]
mod tests {
    use super::{humanize_key, AnalysisNode};

    #[test]
    fn nested_payload_deserializes_into_node_tree() {
        let raw = r#"{
            "technical_analysis": {
                "tech_stack": ["Rust", "Python"],
                "depth_evaluation": "solid systems background"
            },
            "experience_analysis": {
                "years": 5,
                "project_highlights": ["built a payments pipeline"]
            },
            "career_analysis": {
                "challenges": "scaling leadership"
            }
        }"#;

        let node: AnalysisNode = serde_json::from_str(raw).unwrap();
        let AnalysisNode::Group(sections) = node else {
            panic!("expected top-level group");
        };
        assert_eq!(sections.len(), 3);

        let AnalysisNode::Group(technical) = &sections["technical_analysis"] else {
            panic!("expected nested group");
        };
        assert_eq!(
            technical["tech_stack"],
            AnalysisNode::Items(vec![
                AnalysisNode::Text("Rust".to_string()),
                AnalysisNode::Text("Python".to_string()),
            ])
        );

        let AnalysisNode::Group(experience) = &sections["experience_analysis"] else {
            panic!("expected nested group");
        };
        assert_eq!(experience["years"], AnalysisNode::Number(5.0));
    }

    #[test]
    fn group_keys_iterate_alphabetically() {
        let raw = r#"{"zeta": "z", "alpha": "a", "mid": "m"}"#;
        let node: AnalysisNode = serde_json::from_str(raw).unwrap();
        let AnalysisNode::Group(group) = node else {
            panic!("expected group");
        };
        let keys: Vec<&str> = group.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["alpha", "mid", "zeta"]);
    }

    #[test]
    fn null_deserializes_as_empty() {
        let node: AnalysisNode = serde_json::from_str("null").unwrap();
        assert_eq!(node, AnalysisNode::Empty);
        assert_eq!(node.scalar_text().as_deref(), Some(""));
    }

    #[test]
    fn scalar_text_covers_each_scalar_shape() {
        assert_eq!(
            AnalysisNode::Text("ok".to_string()).scalar_text().as_deref(),
            Some("ok")
        );
        assert_eq!(AnalysisNode::Number(5.0).scalar_text().as_deref(), Some("5"));
        assert_eq!(
            AnalysisNode::Number(4.5).scalar_text().as_deref(),
            Some("4.5")
        );
        assert_eq!(AnalysisNode::Flag(true).scalar_text().as_deref(), Some("yes"));
        assert_eq!(AnalysisNode::Items(vec![]).scalar_text(), None);
    }

    #[test]
    fn labels_are_spaced_and_upper_cased() {
        assert_eq!(humanize_key("technical_analysis"), "TECHNICAL ANALYSIS");
        assert_eq!(humanize_key("years"), "YEARS");
    }
}
