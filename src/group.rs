//! Workspace groups.
//!
//! A [`Group`] is a named container for windows.  The set is fixed at load
//! time; assigning windows to groups happens in the host at runtime, never
//! in this document.

use serde::{Deserialize, Serialize};

/// A named workspace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    /// Group identifier, also the key symbol of its derived chords.
    pub name: String,
}

impl Group {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// The default group set: `"1"` through `"9"`.
pub fn default_groups() -> Vec<Group> {
    (1..=9).map(|n| Group::new(n.to_string())).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nine_default_groups() {
        let groups = default_groups();
        assert_eq!(groups.len(), 9);
        assert_eq!(groups[0].name, "1");
        assert_eq!(groups[8].name, "9");
    }
}
