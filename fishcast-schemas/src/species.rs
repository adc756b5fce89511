use serde::{Deserialize, Serialize};

/// The closed set of species the engine can score.
///
/// Deliberately an enum rather than a string id: the scorer set is fixed,
/// and a closed variant dispatch keeps every species exhaustively checked
/// at compile time. `Ord` is derived so score maps serialize in a stable
/// order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Species {
    Walleye,
    Pike,
    Perch,
    Bass,
}

impl Species {
    /// All supported species, in serialization order.
    pub const ALL: [Species; 4] = [
        Species::Walleye,
        Species::Pike,
        Species::Perch,
        Species::Bass,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Species::Walleye => "walleye",
            Species::Pike => "pike",
            Species::Perch => "perch",
            Species::Bass => "bass",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serde_ids_match_accessor() {
        for sp in Species::ALL {
            let json = serde_json::to_string(&sp).unwrap();
            assert_eq!(json, format!("\"{}\"", sp.id()));
        }
    }
}
