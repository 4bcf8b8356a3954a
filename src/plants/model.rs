//! Plant record and request payloads
//!
//! `Plant` is the stored row. `NewPlant` and `PlantPatch` are the
//! create and partial-update payloads; every field in them is optional.

use serde::{Deserialize, Deserializer, Serialize};
use sqlx::FromRow;

/// A stored plant
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Plant {
    pub id: i64,
    pub name: Option<String>,
    pub image: Option<String>,
    pub price: Option<f64>,
    pub is_in_stock: bool,
}

/// Create payload
///
/// `is_in_stock` falls back to `true` when absent or null.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct NewPlant {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub is_in_stock: Option<bool>,
}

impl NewPlant {
    /// Create a payload with only a name set
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Default::default()
        }
    }

    /// Stock flag with the default applied
    pub fn in_stock(&self) -> bool {
        self.is_in_stock.unwrap_or(true)
    }
}

/// Partial update payload
///
/// The outer `Option` tells whether the key was present in the request.
/// For the nullable columns the inner `Option` carries an explicit `null`,
/// which clears the column.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct PlantPatch {
    #[serde(default, deserialize_with = "present")]
    pub name: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    pub image: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    pub price: Option<Option<f64>>,
    #[serde(default)]
    pub is_in_stock: Option<bool>,
}

impl PlantPatch {
    /// Overwrite the fields present in the patch, leaving the rest alone
    pub fn apply(self, plant: &mut Plant) {
        if let Some(name) = self.name {
            plant.name = name;
        }
        if let Some(image) = self.image {
            plant.image = image;
        }
        if let Some(price) = self.price {
            plant.price = price;
        }
        if let Some(is_in_stock) = self.is_in_stock {
            plant.is_in_stock = is_in_stock;
        }
    }
}

/// Marks a key as present, keeping an explicit `null` as `Some(None)`.
fn present<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn fern() -> Plant {
        Plant {
            id: 1,
            name: Some("Fern".to_string()),
            image: Some("fern.png".to_string()),
            price: Some(12.5),
            is_in_stock: true,
        }
    }

    #[test]
    fn test_new_plant_defaults_in_stock() {
        let payload: NewPlant = serde_json::from_value(json!({"name": "Fern"})).unwrap();
        assert!(payload.in_stock());

        let payload: NewPlant =
            serde_json::from_value(json!({"name": "Fern", "is_in_stock": null})).unwrap();
        assert!(payload.in_stock());

        let payload: NewPlant =
            serde_json::from_value(json!({"name": "Fern", "is_in_stock": false})).unwrap();
        assert!(!payload.in_stock());
    }

    #[test]
    fn test_new_plant_without_name() {
        let payload: NewPlant = serde_json::from_value(json!({"price": 3})).unwrap();
        assert_eq!(payload.name, None);
        assert_eq!(payload.price, Some(3.0));
    }

    #[test]
    fn test_patch_absent_vs_null() {
        let patch: PlantPatch = serde_json::from_value(json!({"image": null})).unwrap();
        assert_eq!(patch.name, None);
        assert_eq!(patch.image, Some(None));
        assert_eq!(patch.price, None);
        assert_eq!(patch.is_in_stock, None);

        let patch: PlantPatch = serde_json::from_value(json!({})).unwrap();
        assert_eq!(patch, PlantPatch::default());
    }

    #[test]
    fn test_patch_only_touches_present_fields() {
        let mut plant = fern();
        let patch: PlantPatch = serde_json::from_value(json!({"price": 20})).unwrap();
        patch.apply(&mut plant);

        assert_eq!(plant.price, Some(20.0));
        assert_eq!(plant.name.as_deref(), Some("Fern"));
        assert_eq!(plant.image.as_deref(), Some("fern.png"));
        assert!(plant.is_in_stock);
        assert_eq!(plant.id, 1);
    }

    #[test]
    fn test_patch_null_clears_column() {
        let mut plant = fern();
        let patch: PlantPatch =
            serde_json::from_value(json!({"image": null, "is_in_stock": false})).unwrap();
        patch.apply(&mut plant);

        assert_eq!(plant.image, None);
        assert!(!plant.is_in_stock);
    }

    #[test]
    fn test_patch_rejects_wrong_type() {
        let result: Result<PlantPatch, _> = serde_json::from_value(json!({"price": "cheap"}));
        assert!(result.is_err());
    }

    #[test]
    fn test_plant_serialization_shape() {
        let value = serde_json::to_value(Plant {
            image: None,
            ..fern()
        })
        .unwrap();
        assert_eq!(
            value,
            json!({
                "id": 1,
                "name": "Fern",
                "image": null,
                "price": 12.5,
                "is_in_stock": true
            })
        );
    }
}
