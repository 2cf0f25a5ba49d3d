//! In-memory product store.
//!
//! The store owns an ordered `Vec<Product>`; order reflects insertion history.
//! It has no internal locking: callers that share it across threads must wrap it
//! (the HTTP layer uses an `RwLock`).

use chrono::Utc;

use catalog_core::{DomainError, DomainResult, Entity, ProductId};

use crate::product::Product;

#[derive(Debug, Default)]
pub struct ProductStore {
    products: Vec<Product>,
}

impl ProductStore {
    /// Empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store holding the two sample coffee records (ids 1 and 2).
    pub fn seeded() -> Self {
        let now = Utc::now();
        let seed = [
            (1, "Latte", "Frothy milky coffee", 2.45, "cof-lat-tee"),
            (2, "Espresso", "Short and strong coffee without milk", 1.99, "cof-esp-sso"),
        ];

        let products = seed
            .into_iter()
            .map(|(id, name, description, price, sku)| {
                let mut p = Product::new(name, description, price, sku);
                p.id = ProductId::new(id);
                p.created_on = Some(now);
                p.updated_on = Some(now);
                p
            })
            .collect();

        Self { products }
    }

    /// Live view of the collection, in store order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Linear scan for `id`, returning the record and its position.
    pub fn find(&self, id: ProductId) -> DomainResult<(&Product, usize)> {
        self.products
            .iter()
            .enumerate()
            .find(|(_, p)| p.id() == id)
            .map(|(pos, p)| (p, pos))
            .ok_or_else(|| {
                tracing::debug!(product_id = %id, "product not found");
                DomainError::not_found()
            })
    }

    pub fn get(&self, id: ProductId) -> DomainResult<&Product> {
        self.find(id).map(|(p, _)| p)
    }

    /// Append `product` under a freshly assigned id.
    ///
    /// Any id carried by `product` is ignored. No validation happens here.
    pub fn add(&mut self, mut product: Product) -> ProductId {
        let id = self.next_id();
        let now = Utc::now();

        product.id = id;
        product.created_on = Some(now);
        product.updated_on = Some(now);
        product.deleted_on = None;
        self.products.push(product);

        tracing::info!(product_id = %id, "product added");
        id
    }

    /// Replace the record stored under `id`, keeping its id and position.
    ///
    /// All serialisable fields come from `product`; no field-level merge.
    pub fn update(&mut self, id: ProductId, mut product: Product) -> DomainResult<&Product> {
        let (existing, pos) = self.find(id)?;

        product.id = id;
        product.created_on = existing.created_on;
        product.updated_on = Some(Utc::now());
        product.deleted_on = None;

        let slot = &mut self.products[pos];
        *slot = product;

        tracing::info!(product_id = %id, "product updated");
        Ok(slot)
    }

    /// Remove the record stored under `id`; later records shift left.
    pub fn delete(&mut self, id: ProductId) -> DomainResult<Product> {
        let (_, pos) = self.find(id)?;

        let mut removed = self.products.remove(pos);
        removed.deleted_on = Some(Utc::now());

        tracing::info!(product_id = %id, remaining = self.products.len(), "product deleted");
        Ok(removed)
    }

    /// Highest id + 1, or 1 for an empty store.
    fn next_id(&self) -> ProductId {
        self.products
            .iter()
            .map(Entity::id)
            .max()
            .map(|id| id.next())
            .unwrap_or(ProductId::new(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(store: &ProductStore) -> Vec<i64> {
        store.products().iter().map(|p| p.id.value()).collect()
    }

    fn mocha() -> Product {
        Product::new("Mocha", "Chocolate and coffee", 3.25, "cof-moc-cha")
    }

    #[test]
    fn seeded_store_holds_two_products_in_order() {
        let store = ProductStore::seeded();
        assert_eq!(ids(&store), vec![1, 2]);
        assert!(store.products().iter().all(|p| p.validate().is_ok()));
        assert!(store.products().iter().all(|p| p.created_on().is_some()));
    }

    #[test]
    fn get_by_id_returns_matching_record() {
        let store = ProductStore::seeded();
        let p = store.get(ProductId::new(2)).unwrap();
        assert_eq!(p.name, "Espresso");
    }

    #[test]
    fn get_unknown_id_is_not_found() {
        let store = ProductStore::seeded();
        let err = store.get(ProductId::new(42)).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn find_reports_position() {
        let store = ProductStore::seeded();
        let (p, pos) = store.find(ProductId::new(2)).unwrap();
        assert_eq!(pos, 1);
        assert_eq!(p.id, ProductId::new(2));
    }

    #[test]
    fn add_assigns_next_id_and_appends() {
        let mut store = ProductStore::seeded();
        let id = store.add(mocha());

        assert_eq!(id, ProductId::new(3));
        assert_eq!(ids(&store), vec![1, 2, 3]);

        let added = store.get(id).unwrap();
        assert_eq!(added.name, "Mocha");
        assert!(added.created_on().is_some());
        assert_eq!(added.created_on(), added.updated_on());
    }

    #[test]
    fn add_ignores_client_supplied_id() {
        let mut store = ProductStore::seeded();
        let mut p = mocha();
        p.id = ProductId::new(1);

        let id = store.add(p);

        assert_eq!(id, ProductId::new(3));
        assert_eq!(ids(&store), vec![1, 2, 3]);
    }

    #[test]
    fn add_to_empty_store_starts_at_one() {
        let mut store = ProductStore::new();
        assert!(store.is_empty());
        assert_eq!(store.add(mocha()), ProductId::new(1));
        assert_eq!(store.add(mocha()), ProductId::new(2));
    }

    #[test]
    fn add_after_emptying_store_starts_at_one() {
        let mut store = ProductStore::seeded();
        store.delete(ProductId::new(1)).unwrap();
        store.delete(ProductId::new(2)).unwrap();
        assert!(store.is_empty());

        assert_eq!(store.add(mocha()), ProductId::new(1));
    }

    #[test]
    fn add_after_delete_and_update_continues_from_highest_id() {
        let mut store = ProductStore::seeded();
        store.add(mocha());
        store.delete(ProductId::new(1)).unwrap();
        store.update(ProductId::new(2), mocha()).unwrap();

        assert_eq!(store.add(mocha()), ProductId::new(4));
    }

    #[test]
    fn update_replaces_record_and_keeps_id_and_position() {
        let mut store = ProductStore::seeded();
        let created = store.get(ProductId::new(1)).unwrap().created_on();

        let mut replacement = mocha();
        replacement.id = ProductId::new(77);
        let updated = store.update(ProductId::new(1), replacement).unwrap();

        assert_eq!(updated.id, ProductId::new(1));
        assert_eq!(updated.name, "Mocha");
        assert_eq!(updated.description, "Chocolate and coffee");
        assert_eq!(updated.price, 3.25);
        assert_eq!(updated.sku, "cof-moc-cha");
        assert_eq!(updated.created_on(), created);
        assert!(updated.updated_on() >= created);

        assert_eq!(ids(&store), vec![1, 2]);
        assert_eq!(store.products()[0].name, "Mocha");
    }

    #[test]
    fn update_does_not_merge_fields() {
        let mut store = ProductStore::seeded();
        let sparse = Product {
            name: "Cortado".to_string(),
            price: 2.0,
            sku: "cof-cor-tad".to_string(),
            ..Product::default()
        };

        store.update(ProductId::new(1), sparse).unwrap();

        assert_eq!(store.get(ProductId::new(1)).unwrap().description, "");
    }

    #[test]
    fn update_unknown_id_is_not_found_and_leaves_store_untouched() {
        let mut store = ProductStore::seeded();
        let err = store.update(ProductId::new(999), mocha()).unwrap_err();

        assert!(err.is_not_found());
        assert_eq!(ids(&store), vec![1, 2]);
        assert_eq!(store.products()[0].name, "Latte");
    }

    #[test]
    fn delete_removes_exactly_one_and_preserves_order() {
        let mut store = ProductStore::seeded();
        store.add(mocha());
        store.add(mocha());

        let removed = store.delete(ProductId::new(2)).unwrap();

        assert_eq!(removed.name, "Espresso");
        assert!(removed.deleted_on().is_some());
        assert_eq!(ids(&store), vec![1, 3, 4]);
    }

    #[test]
    fn delete_first_record() {
        let mut store = ProductStore::seeded();
        store.delete(ProductId::new(1)).unwrap();
        assert_eq!(ids(&store), vec![2]);
        assert!(store.get(ProductId::new(1)).unwrap_err().is_not_found());
    }

    #[test]
    fn delete_unknown_id_is_not_found() {
        let mut store = ProductStore::seeded();
        let err = store.delete(ProductId::new(42)).unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(store.len(), 2);
    }
}
