use serde::Serialize;
use std::fmt;

/// Directed relationship between two nodes, classified from the first
/// node's perspective.
///
/// Classification precedence is `Same` > `Parent` > `Child` > `Ancestor` >
/// `Descendant` > `Unconnected`; the first matching category wins, so a
/// direct parent is reported as `Parent` even though it is also an
/// ancestor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Relationship {
    /// The two nodes are the same node.
    #[serde(rename = "self")]
    Same,
    /// First node directly causes the second.
    Parent,
    /// Second node directly causes the first.
    Child,
    /// First node transitively (not directly) causes the second.
    Ancestor,
    /// Second node transitively (not directly) causes the first.
    Descendant,
    /// No directed path exists in either direction.
    Unconnected,
}

impl fmt::Display for Relationship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Relationship::Same => "self",
            Relationship::Parent => "parent",
            Relationship::Child => "child",
            Relationship::Ancestor => "ancestor",
            Relationship::Descendant => "descendant",
            Relationship::Unconnected => "unconnected",
        };
        f.write_str(label)
    }
}
