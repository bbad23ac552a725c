// Texts a card draws, derived from props before any painting happens.

use crate::localization::{translate, translate_with};
use crate::types::CardProps;

/// One pill in the badge row. `key` is positional so repeated labels still get
/// distinct widget ids.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pill {
    pub key: usize,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardContent {
    pub title: String,
    pub price: String,
    pub description: String,
    pub discount: Option<String>,
    pub pills: Vec<Pill>,
    pub stock: Option<String>,
    pub action: String,
}

impl CardContent {
    pub fn from_props(props: &CardProps) -> Self {
        let pills = props
            .badges
            .iter()
            .enumerate()
            .map(|(key, b)| Pill {
                key,
                label: b.label.clone(),
            })
            .collect();

        // Presence, not truthiness: 0 still shows "0 left".
        let stock = props
            .stock_left
            .map(|n| translate_with("card-stock-left", &[("count", n.to_string())]));

        Self {
            title: props.title.clone(),
            price: props.price_text(),
            description: props.description.clone(),
            discount: props.discount.clone(),
            pills,
            stock,
            action: translate("card-add-to-cart"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Badge;

    fn bare() -> CardProps {
        CardProps {
            title: "Kesar".into(),
            description: "Saffron mango".into(),
            price: 199.0,
            image_src: "/kesar.jpg".into(),
            discount: None,
            badges: vec![],
            stock_left: None,
        }
    }

    #[test]
    fn alphonso_renders_every_region() {
        let c = CardContent::from_props(&CardProps::alphonso());
        assert_eq!(c.title, "Alphonso");
        assert_eq!(
            c.description,
            "Loved worldwide for their sweetness our Alphonso mangoes are a delicious delight wherever you are."
        );
        assert_eq!(c.discount.as_deref(), Some("20% off"));
        assert_eq!(c.price, "₹270");
        assert_eq!(
            c.pills,
            vec![Pill {
                key: 0,
                label: "Best Seller".into()
            }]
        );
        assert_eq!(c.stock.as_deref(), Some("9 left"));
        assert_eq!(c.action, "Add to cart");
    }

    #[test]
    fn optional_regions_are_omitted() {
        let c = CardContent::from_props(&bare());
        assert!(c.discount.is_none());
        assert!(c.pills.is_empty());
        assert!(c.stock.is_none());
        assert_eq!(c.title, "Kesar");
        assert_eq!(c.description, "Saffron mango");
        assert_eq!(c.price, "₹199");
    }

    #[test]
    fn zero_stock_still_shows() {
        let mut p = bare();
        p.stock_left = Some(0);
        let c = CardContent::from_props(&p);
        assert_eq!(c.stock.as_deref(), Some("0 left"));
    }

    #[test]
    fn pills_keep_order_and_get_distinct_keys() {
        let mut p = bare();
        p.badges = vec![Badge::new("Organic"), Badge::new("Local"), Badge::new("Organic")];
        let c = CardContent::from_props(&p);
        let labels: Vec<_> = c.pills.iter().map(|p| p.label.as_str()).collect();
        assert_eq!(labels, ["Organic", "Local", "Organic"]);
        let keys: Vec<_> = c.pills.iter().map(|p| p.key).collect();
        assert_eq!(keys, [0, 1, 2]);
    }
}
