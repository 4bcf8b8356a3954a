//! Sample data for a fresh catalogue

use tracing::info;

use super::errors::StoreResult;
use super::model::{NewPlant, Plant};
use super::repository::PlantRepository;

/// (name, image, price)
const SAMPLES: &[(&str, &str, f64)] = &[
    ("Aloe", "./images/aloe.jpg", 11.50),
    ("ZZ Plant", "./images/zz-plant.jpg", 25.98),
    ("Pilea Peperomioides", "./images/pilea.jpg", 5.99),
    ("Pothos", "./images/pothos.jpg", 12.11),
];

/// Payloads for the sample plants
pub fn sample_plants() -> Vec<NewPlant> {
    SAMPLES
        .iter()
        .map(|(name, image, price)| NewPlant {
            name: Some(name.to_string()),
            image: Some(image.to_string()),
            price: Some(*price),
            is_in_stock: None,
        })
        .collect()
}

/// Insert the sample plants, returning the stored rows
pub async fn seed(repo: &PlantRepository) -> StoreResult<Vec<Plant>> {
    let mut created = Vec::with_capacity(SAMPLES.len());
    for new_plant in sample_plants() {
        created.push(repo.create(new_plant).await?);
    }
    info!(count = created.len(), "seeded sample plants");
    Ok(created)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plants::DatabaseConfig;

    #[test]
    fn test_samples_are_named_and_priced() {
        let samples = sample_plants();
        assert_eq!(samples.len(), SAMPLES.len());
        assert!(samples.iter().all(|p| p.name.is_some() && p.price.is_some()));
        assert!(samples.iter().all(NewPlant::in_stock));
    }

    #[tokio::test]
    async fn test_seed_inserts_all_samples() {
        let repo = PlantRepository::connect(&DatabaseConfig::in_memory())
            .await
            .unwrap();
        let created = seed(&repo).await.unwrap();

        assert_eq!(created.len(), SAMPLES.len());
        assert_eq!(repo.list_all().await.unwrap(), created);
    }
}
