//! The tokenized property shown on the storefront. Static demo data; the
//! preview action only surfaces it.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PropertyDetails {
    pub location: String,
    pub size: String,
    pub bedrooms: u32,
    pub bathrooms: u32,
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub kind: String,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Listing {
    pub token_id: String,
    pub contract: String,
    pub image: String,
    pub properties: PropertyDetails,
}

impl Default for Listing {
    fn default() -> Self {
        Self {
            token_id: "#RE-2024-001".to_string(),
            contract: "0x1234567890abcdef1234567890abcdef12345678".to_string(),
            image: "https://images.unsplash.com/photo-1560448204-e02f11c3d0e2?auto=format&fit=crop&w=1470&q=80"
                .to_string(),
            properties: PropertyDetails {
                location: "Manhattan, New York".to_string(),
                size: "1,850 sqft".to_string(),
                bedrooms: 3,
                bathrooms: 2,
                kind: "Luxury Apartment".to_string(),
            },
        }
    }
}

impl Listing {
    /// Abbreviated contract address, e.g. `0x1234…5678`.
    pub fn short_contract(&self) -> String {
        let c = self.contract.as_str();
        if c.len() <= 10 || !c.is_ascii() {
            return c.to_string();
        }
        format!("{}…{}", &c[..6], &c[c.len() - 4..])
    }

    /// Preview payload as JSON.
    #[cfg(feature = "serde")]
    pub fn preview_json(&self) -> Result<String, crate::error::StoreError> {
        Ok(serde_json::to_string(self)?)
    }
}
