use serde::Deserialize;
use serde::Serialize;

/// One entry in the mention directory.
///
/// Records arriving from a host fixture may be sparse; every string field
/// falls back to empty rather than failing the whole load.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Candidate {
    pub id: u64,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub gender: String,
}

impl Candidate {
    /// The name shown in the suggestion list and spliced into the chip.
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}
