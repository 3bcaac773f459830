use serde::{Deserialize, Serialize};

/// the service id and weekday flags (monday..sunday, 0 or 1) a worksheet
/// runs on
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServicePattern {
    pub service_id: String,
    pub weekdays: [u8; 7],
}

impl ServicePattern {
    pub fn is_blank(&self) -> bool {
        self.service_id.is_empty() && self.weekdays.iter().all(|d| *d == 0)
    }
}
