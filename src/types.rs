use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;

/// Currency prefix shown before the price.
pub const CURRENCY: &str = "₹";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Badge {
    pub label: String,
}

impl Badge {
    pub fn new(label: impl Into<String>) -> Self {
        Self { label: label.into() }
    }
}

/// Everything the card shows. Immutable for the lifetime of a card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardProps {
    pub title: String,
    pub description: String,
    pub price: f64,
    pub image_src: String,
    #[serde(default)]
    pub discount: Option<String>,
    #[serde(default)]
    pub badges: Vec<Badge>,
    #[serde(default)]
    pub stock_left: Option<u32>,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PropsError {
    #[error("duplicate badge label: {label}")]
    DuplicateBadge { label: String },
}

impl CardProps {
    /// The card shown by the showcase page when no card is configured.
    pub fn alphonso() -> Self {
        Self {
            title: "Alphonso".to_string(),
            description: "Loved worldwide for their sweetness our Alphonso mangoes are a delicious delight wherever you are.".to_string(),
            price: 270.0,
            image_src: "/mango.jpg".to_string(),
            discount: Some("20% off".to_string()),
            badges: vec![Badge::new("Best Seller")],
            stock_left: Some(9),
        }
    }

    /// `₹270`, `₹270.5`: the price appended to the currency sign without padding.
    /// Negative zero prints as `₹0`. Prices of 1e21 and above print in plain digits,
    /// not exponent form.
    pub fn price_text(&self) -> String {
        // -0.0 == 0.0, so this folds the sign away
        let price = if self.price == 0.0 { 0.0 } else { self.price };
        format!("{CURRENCY}{price}")
    }

    /// Badge labels double as identities on screen, so they must be unique.
    /// Nothing else is checked: prices and titles are taken as given.
    pub fn validate(&self) -> Result<(), PropsError> {
        let mut seen = HashSet::new();
        for b in &self.badges {
            if !seen.insert(b.label.as_str()) {
                return Err(PropsError::DuplicateBadge {
                    label: b.label.clone(),
                });
            }
        }
        Ok(())
    }
}
