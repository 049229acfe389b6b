use serde::{Deserialize, Serialize};

/// Payload of the contract estimation form, exactly as it travels on the
/// wire: five required fields, all transmitted as text (numeric quantities
/// included, the backend does the parsing).
///
/// Callers are expected to hand over fields already validated as non-empty;
/// this type applies no transformation of its own.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ContractSubmission {
    pub contract_size:     String,
    pub distance:          String,
    pub project_size:      String,
    pub project_type:      String,
    pub other_contractors: String,
}

/// A named project paired with its historical win percentage, as returned by
/// the backend. Order of records is the server's insertion order and is
/// significant for the bar view, so it is never sorted on this side.
///
/// `win_percentage` is expected in [0, 100] but is taken at face value, the
/// backend owns that range.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BidRecord {
    pub name:           String,
    pub win_percentage: f64,
}
