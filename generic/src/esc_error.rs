use serde::{Deserialize, Serialize};

#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum EscError {
    /// A speed command or re-attach was issued before any channel id was set.
    JagNotConfigured,

    ServoBindError,
    ServoPulseError,
}
