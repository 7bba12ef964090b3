// src/common/id_generator.rs
//! Crockford Base32 ID Generator
//!
//! Generates human-readable, prefixed IDs using Crockford Base32 encoding.
//! Format: PREFIX_XXXXXX (e.g., P_K7NP3X for products)
//!
//! Benefits:
//! - No ambiguous characters (excludes I, L, O, U)
//! - Case-insensitive
//! - ~1 billion combinations per entity type (32^6)
//! - Easy to read, type, and communicate verbally

use rand::Rng;

/// Crockford Base32 alphabet (excludes I, L, O, U to avoid confusion)
const CROCKFORD_ALPHABET: &[u8; 32] = b"0123456789ABCDEFGHJKMNPQRSTVWXYZ";

/// Entity type prefixes for ID generation
#[derive(Debug, Clone, Copy)]
pub enum EntityPrefix {
    /// User account (U_)
    User,
    /// Store (S_)
    Store,
    /// Product (P_)
    Product,
    /// Category (C_)
    Category,
    /// Color (K_)
    Color,
    /// Review (R_)
    Review,
    /// Order (O_)
    Order,
    /// Order item (T_) - T for Transaction line
    OrderItem,
}

impl EntityPrefix {
    /// Get the string prefix for this entity type
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityPrefix::User => "U",
            EntityPrefix::Store => "S",
            EntityPrefix::Product => "P",
            EntityPrefix::Category => "C",
            EntityPrefix::Color => "K",
            EntityPrefix::Review => "R",
            EntityPrefix::Order => "O",
            EntityPrefix::OrderItem => "T",
        }
    }
}

/// Generate a random Crockford Base32 string of the given length
pub fn generate_raw_id(length: usize) -> String {
    let mut rng = rand::thread_rng();
    (0..length)
        .map(|_| {
            let idx = rng.gen_range(0..CROCKFORD_ALPHABET.len());
            CROCKFORD_ALPHABET[idx] as char
        })
        .collect()
}

/// Generate a prefixed entity ID (e.g., "P_K7NP3X")
pub fn generate_id(prefix: EntityPrefix) -> String {
    format!("{}_{}", prefix.as_str(), generate_raw_id(6))
}

pub fn generate_user_id() -> String {
    generate_id(EntityPrefix::User)
}

pub fn generate_store_id() -> String {
    generate_id(EntityPrefix::Store)
}

pub fn generate_product_id() -> String {
    generate_id(EntityPrefix::Product)
}

pub fn generate_category_id() -> String {
    generate_id(EntityPrefix::Category)
}

pub fn generate_color_id() -> String {
    generate_id(EntityPrefix::Color)
}

pub fn generate_review_id() -> String {
    generate_id(EntityPrefix::Review)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_id_uses_crockford_alphabet() {
        let id = generate_raw_id(32);
        assert_eq!(id.len(), 32);
        for c in id.bytes() {
            assert!(CROCKFORD_ALPHABET.contains(&c), "unexpected char {}", c as char);
        }
    }

    #[test]
    fn test_prefixed_id_format() {
        let id = generate_product_id();
        assert!(id.starts_with("P_"));
        assert_eq!(id.len(), 8);
    }
}
