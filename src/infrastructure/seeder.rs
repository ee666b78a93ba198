//! Seeds a handful of sample product codes into an empty store.

use chrono::Utc;
use tracing::info;

use crate::domain::error::ProductError;
use crate::domain::repositories::ProductRepository;

const SAMPLE_CODES: [&str; 3] = [
    "ABCDE-FGHIJ-KLMNO-PQRST-UVWXY-Z1234",
    "1A2B3-C4D5E-F6G7H-I8J9K-L0M1N-O2P3Q",
    "ZXCVB-NMASD-FGHJK-LQWER-TYUIO-P1234",
];

/// Insert the sample codes when the store is empty; otherwise do nothing.
pub async fn seed_sample_products(
    repository: &dyn ProductRepository,
) -> Result<(), ProductError> {
    if !repository.find_all(None).await?.is_empty() {
        return Ok(());
    }

    let now = Utc::now();
    for code in SAMPLE_CODES {
        repository.insert(code, now).await?;
    }
    info!(count = SAMPLE_CODES.len(), "seeded sample product codes");
    Ok(())
}
