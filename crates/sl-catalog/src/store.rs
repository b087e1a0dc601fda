//! In-memory listing store.

use sl_protocol::{CatalogQuery, Product, SortKey};
use uuid::Uuid;

use crate::error::{CatalogError, CatalogResult};

/// Product listings held in memory, in insertion order.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    products: Vec<Product>,
}

impl InMemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Catalog pre-filled with the sample listings from [`crate::sample`].
    pub fn with_sample_data() -> Self {
        Self {
            products: crate::sample::products(),
        }
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn get(&self, id: Uuid) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Add a listing. Rejects duplicate IDs, blank names and prices that are
    /// negative or not finite.
    pub fn insert(&mut self, product: Product) -> CatalogResult<Uuid> {
        if product.name.trim().is_empty() {
            return Err(CatalogError::Invalid("name is empty".into()));
        }
        if !product.price.is_finite() || product.price < 0.0 {
            return Err(CatalogError::Invalid(format!(
                "price {} is not a valid amount",
                product.price
            )));
        }
        if self.get(product.id).is_some() {
            return Err(CatalogError::Duplicate(product.id));
        }

        let id = product.id;
        tracing::debug!(%id, name = %product.name, "listing added");
        self.products.push(product);
        Ok(id)
    }

    /// Hide a listing from search without removing it.
    pub fn deactivate(&mut self, id: Uuid) -> CatalogResult<()> {
        let product = self
            .products
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(CatalogError::NotFound(id))?;
        product.is_active = false;
        Ok(())
    }

    /// Active listings matching every set field of `query`, sorted by `query.sort`.
    pub fn search(&self, query: &CatalogQuery) -> Vec<Product> {
        let name_term = non_blank(query.query.as_deref()).map(str::to_lowercase);
        let location_term = non_blank(query.location.as_deref()).map(str::to_lowercase);

        let mut results: Vec<Product> = self
            .products
            .iter()
            .filter(|p| p.is_active)
            .filter(|p| match &name_term {
                Some(term) => p.name.to_lowercase().contains(term),
                None => true,
            })
            .filter(|p| query.category.is_none() || p.category == query.category)
            .filter(|p| query.min_price.is_none_or(|min| p.price >= min))
            .filter(|p| query.max_price.is_none_or(|max| p.price <= max))
            .filter(|p| match &location_term {
                Some(term) => p
                    .seller
                    .location
                    .as_deref()
                    .is_some_and(|loc| loc.to_lowercase().contains(term)),
                None => true,
            })
            .filter(|p| !query.verified_only || p.seller.is_verified)
            .cloned()
            .collect();

        match query.sort {
            SortKey::PriceLow => results.sort_by(|a, b| a.price.total_cmp(&b.price)),
            SortKey::PriceHigh => results.sort_by(|a, b| b.price.total_cmp(&a.price)),
            SortKey::Oldest => results.sort_by_key(|p| p.created_at),
            SortKey::Newest => results.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
        }
        results
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};
    use sl_protocol::{Category, SellerProfile};

    fn seller(location: &str, verified: bool) -> SellerProfile {
        SellerProfile {
            name: "Seller".into(),
            phone: None,
            location: Some(location.into()),
            is_verified: verified,
        }
    }

    fn catalog() -> InMemoryCatalog {
        let now = Utc::now();
        let mut catalog = InMemoryCatalog::new();
        for (name, price, category, location, verified, age_days) in [
            ("Brake Pads", 15_000.0, Category::BrakeSystem, "Ikeja, Lagos", true, 1),
            ("Brake Disc", 40_000.0, Category::BrakeSystem, "Ladipo, Lagos", false, 5),
            ("Alternator", 65_000.0, Category::ElectricalLighting, "Abuja", true, 3),
            ("Radiator", 30_000.0, Category::CoolingSystem, "Ikeja, Lagos", false, 10),
        ] {
            let product = Product::new(name, price, seller(location, verified))
                .with_category(category)
                .listed_at(now - Duration::days(age_days));
            catalog.insert(product).unwrap();
        }
        catalog
    }

    fn names(products: &[Product]) -> Vec<&str> {
        products.iter().map(|p| p.name.as_str()).collect()
    }

    #[test]
    fn empty_query_returns_all_newest_first() {
        let results = catalog().search(&CatalogQuery::default());
        assert_eq!(
            names(&results),
            vec!["Brake Pads", "Alternator", "Brake Disc", "Radiator"]
        );
    }

    #[test]
    fn query_matches_name_case_insensitively() {
        let query = CatalogQuery {
            query: Some("BRAKE".into()),
            ..Default::default()
        };
        assert_eq!(names(&catalog().search(&query)), vec!["Brake Pads", "Brake Disc"]);
    }

    #[test]
    fn blank_query_does_not_filter() {
        let query = CatalogQuery {
            query: Some("   ".into()),
            ..Default::default()
        };
        assert_eq!(catalog().search(&query).len(), 4);
    }

    #[test]
    fn category_filter() {
        let query = CatalogQuery {
            category: Some(Category::CoolingSystem),
            ..Default::default()
        };
        assert_eq!(names(&catalog().search(&query)), vec!["Radiator"]);
    }

    #[test]
    fn price_bounds_are_inclusive() {
        let query = CatalogQuery {
            min_price: Some(15_000.0),
            max_price: Some(40_000.0),
            sort: SortKey::PriceLow,
            ..Default::default()
        };
        assert_eq!(
            names(&catalog().search(&query)),
            vec!["Brake Pads", "Radiator", "Brake Disc"]
        );
    }

    #[test]
    fn location_matches_seller_substring() {
        let query = CatalogQuery {
            location: Some("ikeja".into()),
            ..Default::default()
        };
        assert_eq!(names(&catalog().search(&query)), vec!["Brake Pads", "Radiator"]);
    }

    #[test]
    fn verified_only() {
        let query = CatalogQuery {
            verified_only: true,
            ..Default::default()
        };
        assert_eq!(names(&catalog().search(&query)), vec!["Brake Pads", "Alternator"]);
    }

    #[test]
    fn sort_orders() {
        let cat = catalog();
        let by = |sort| {
            let query = CatalogQuery {
                sort,
                ..Default::default()
            };
            cat.search(&query).into_iter().map(|p| p.name).collect::<Vec<_>>()
        };
        assert_eq!(by(SortKey::PriceHigh)[0], "Alternator");
        assert_eq!(by(SortKey::PriceLow)[0], "Brake Pads");
        assert_eq!(by(SortKey::Oldest)[0], "Radiator");
    }

    #[test]
    fn deactivated_listings_are_hidden() {
        let mut cat = catalog();
        let id = cat.search(&CatalogQuery::default())[0].id;
        cat.deactivate(id).unwrap();
        assert_eq!(cat.search(&CatalogQuery::default()).len(), 3);
        assert_eq!(cat.len(), 4);
    }

    #[test]
    fn insert_validates() {
        let mut cat = InMemoryCatalog::new();
        let product = Product::new("Spark Plug", 2_500.0, seller("Kano", false));
        let dup = product.clone();
        cat.insert(product).unwrap();

        assert!(matches!(cat.insert(dup), Err(CatalogError::Duplicate(_))));
        assert!(matches!(
            cat.insert(Product::new("", 10.0, seller("Kano", false))),
            Err(CatalogError::Invalid(_))
        ));
        assert!(matches!(
            cat.insert(Product::new("Fuse", -1.0, seller("Kano", false))),
            Err(CatalogError::Invalid(_))
        ));
    }

    #[test]
    fn deactivate_unknown_id() {
        let mut cat = InMemoryCatalog::new();
        assert!(matches!(
            cat.deactivate(Uuid::now_v7()),
            Err(CatalogError::NotFound(_))
        ));
    }
}
