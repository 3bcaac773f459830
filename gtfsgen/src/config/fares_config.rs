use crate::feed::{FareAttribute, FareRule};
use serde::{Deserialize, Serialize};

/// fare products shared by every route of the agency
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FaresConfig {
    pub currency_type: String,
    pub payment_method: String,
    pub fares: Vec<FareConfig>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FareConfig {
    pub fare_id: String,
    pub price: String,
    #[serde(default)]
    pub transfers: String,
    #[serde(default)]
    pub transfer_duration: String,
}

impl Default for FaresConfig {
    fn default() -> Self {
        Self {
            currency_type: String::from("USD"),
            payment_method: String::from("0"),
            fares: vec![],
        }
    }
}

impl FaresConfig {
    pub fn fare_attributes(&self) -> Vec<FareAttribute> {
        self.fares
            .iter()
            .map(|f| FareAttribute {
                fare_id: f.fare_id.clone(),
                price: f.price.clone(),
                currency_type: self.currency_type.clone(),
                payment_method: self.payment_method.clone(),
                transfers: f.transfers.clone(),
                transfer_duration: f.transfer_duration.clone(),
            })
            .collect()
    }

    pub fn fare_rules(&self) -> Vec<FareRule> {
        self.fares
            .iter()
            .map(|f| FareRule::for_fare(&f.fare_id))
            .collect()
    }
}
