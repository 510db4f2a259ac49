use crate::models::CartItem;
use std::collections::HashMap;
use thiserror::Error;
use tokio::sync::RwLock;

/// Errors that can occur with cart operations
#[derive(Debug, Error)]
pub enum CartError {
    #[error("campground already in cart for overlapping dates")]
    OverlappingItem,
}

/// In-memory per-user cart
///
/// Carts live only for the process lifetime; checkout moves their contents
/// into the booking store.
#[derive(Default)]
pub struct CartStore {
    carts: RwLock<HashMap<String, Vec<CartItem>>>,
}

impl CartStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn items(&self, username: &str) -> Vec<CartItem> {
        self.carts
            .read()
            .await
            .get(username)
            .cloned()
            .unwrap_or_default()
    }

    /// Add an item, rejecting a second entry for the same campground with an
    /// overlapping date range
    pub async fn add(&self, username: &str, item: CartItem) -> Result<(), CartError> {
        let mut carts = self.carts.write().await;
        let cart = carts.entry(username.to_string()).or_default();

        if cart
            .iter()
            .any(|existing| existing.camp_id == item.camp_id && existing.range().overlaps(&item.range()))
        {
            return Err(CartError::OverlappingItem);
        }

        cart.push(item);
        Ok(())
    }

    pub async fn clear(&self, username: &str) {
        self.carts.write().await.remove(username);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(camp_id: &str, from: &str, to: &str) -> CartItem {
        CartItem {
            camp_id: camp_id.to_string(),
            camp_name: format!("Camp {}", camp_id),
            from_date: from.parse().unwrap(),
            to_date: to.parse().unwrap(),
        }
    }

    #[tokio::test]
    async fn test_add_and_clear() {
        let cart = CartStore::new();

        cart.add("meera", item("C1", "2024-06-01", "2024-06-05")).await.unwrap();
        assert_eq!(cart.items("meera").await.len(), 1);

        cart.clear("meera").await;
        assert!(cart.items("meera").await.is_empty());
    }

    #[tokio::test]
    async fn test_overlapping_duplicate_rejected() {
        let cart = CartStore::new();
        cart.add("meera", item("C1", "2024-06-01", "2024-06-05")).await.unwrap();

        let err = cart
            .add("meera", item("C1", "2024-06-05", "2024-06-08"))
            .await
            .unwrap_err();
        assert!(matches!(err, CartError::OverlappingItem));
    }

    #[tokio::test]
    async fn test_same_camp_disjoint_dates_allowed() {
        let cart = CartStore::new();
        cart.add("meera", item("C1", "2024-06-01", "2024-06-05")).await.unwrap();
        cart.add("meera", item("C1", "2024-06-06", "2024-06-08")).await.unwrap();

        assert_eq!(cart.items("meera").await.len(), 2);
    }

    #[tokio::test]
    async fn test_carts_are_per_user() {
        let cart = CartStore::new();
        cart.add("meera", item("C1", "2024-06-01", "2024-06-05")).await.unwrap();

        // Another user can hold the same campground and dates in their cart
        cart.add("arjun", item("C1", "2024-06-01", "2024-06-05")).await.unwrap();
        assert_eq!(cart.items("meera").await.len(), 1);
        assert_eq!(cart.items("arjun").await.len(), 1);
    }
}
