//! In-memory product catalog.
//!
//! The catalog owns its products and hands out slices/references, so
//! filters downstream never copy or mutate items.

use crate::error::{DomainError, Result};
use crate::parser;
use crate::types::{Color, Product, Size};
use std::collections::HashMap;
use std::path::Path;
use tracing::info;

/// Ordered collection of uniquely named products.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: Vec<Product>,
    by_name: HashMap<String, usize>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a catalog file (see [`parser`] for the format).
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let products = parser::parse_catalog(path)?;
        let catalog = Self::from_products(products)?;
        info!("Loaded {} products from {}", catalog.len(), path.display());
        Ok(catalog)
    }

    /// Build a catalog from products, keeping their order.
    pub fn from_products(products: impl IntoIterator<Item = Product>) -> Result<Self> {
        let mut catalog = Self::new();
        for product in products {
            catalog.insert(product)?;
        }
        Ok(catalog)
    }

    /// The built-in inventory used when no catalog file is given.
    pub fn sample() -> Self {
        let mut catalog = Self::new();
        for product in [
            Product::new("Apple", Color::Green, Size::Small),
            Product::new("Tree", Color::Green, Size::Large),
            Product::new("House", Color::Blue, Size::Large),
        ] {
            // Names above are distinct.
            let index = catalog.products.len();
            catalog.by_name.insert(product.name.clone(), index);
            catalog.products.push(product);
        }
        catalog
    }

    /// Append a product. Names must be unique within a catalog.
    pub fn insert(&mut self, product: Product) -> Result<()> {
        if self.by_name.contains_key(&product.name) {
            return Err(DomainError::DuplicateProduct(product.name));
        }
        self.by_name.insert(product.name.clone(), self.products.len());
        self.products.push(product);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&Product> {
        self.by_name.get(name).map(|&idx| &self.products[idx])
    }

    /// All products in insertion order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Product> {
        self.products.iter()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Product;
    type IntoIter = std::slice::Iter<'a, Product>;

    fn into_iter(self) -> Self::IntoIter {
        self.products.iter()
    }
}
