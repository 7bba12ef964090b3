// Helper functions for safe logging and serialization

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Masks email addresses for safe logging
/// Prevents sensitive data exposure while preserving debugging utility
///
/// # Example
/// ```
/// let masked = safe_email_log("user@example.com");
/// // Returns: "u***@example.com"
/// ```
pub fn safe_email_log(email: &str) -> String {
    if email.len() > 3 {
        let parts: Vec<&str> = email.split('@').collect();
        if parts.len() == 2 {
            format!("{}***@{}", &parts[0][..1.min(parts[0].len())], parts[1])
        } else {
            "***@***.***".to_string()
        }
    } else {
        "***@***.***".to_string()
    }
}

/// Serializes product images from JSON string to array for API responses
pub fn serialize_images<S>(images: &Option<String>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match images {
        Some(images_json) => {
            let images_vec: Vec<String> =
                serde_json::from_str(images_json).unwrap_or_else(|_| Vec::new());
            images_vec.serialize(serializer)
        }
        None => Vec::<String>::new().serialize(serializer),
    }
}

/// Deserializes product images from array to JSON string for database storage
pub fn deserialize_images<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let images_vec: Vec<String> = Vec::deserialize(deserializer)?;
    let images_json = serde_json::to_string(&images_vec).map_err(serde::de::Error::custom)?;
    Ok(Some(images_json))
}
