//! Public holiday model

use serde::{Deserialize, Serialize};

/// One public holiday as returned by the holidays provider.
/// The date stays a plain `YYYY-MM-DD` string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Holiday {
    pub country: String,
    pub date: String,
    pub name: String,
}
