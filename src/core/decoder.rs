use crate::core::Pet;
use crate::utils::error::Result;

/// Parse a catalog response body into pets.
///
/// `null` and `[]` both yield an empty vector; anything that is not a JSON
/// array of pet objects is a decode error.
pub fn decode(raw_body: &str) -> Result<Vec<Pet>> {
    let pets: Option<Vec<Pet>> = serde_json::from_str(raw_body)?;

    match pets {
        Some(pets) if !pets.is_empty() => {
            tracing::debug!("Decoded {} pet records", pets.len());
            Ok(pets)
        }
        _ => {
            tracing::debug!("Catalog returned no pets");
            Ok(Vec::new())
        }
    }
}
