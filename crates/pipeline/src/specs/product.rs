//! Specifications over catalog products.

use crate::traits::Specification;
use domain::{Color, Product, Size};

/// Matches products of one color.
#[derive(Debug, Clone, Copy)]
pub struct ColorSpecification {
    color: Color,
}

impl ColorSpecification {
    pub fn new(color: Color) -> Self {
        Self { color }
    }
}

impl Specification<Product> for ColorSpecification {
    fn is_satisfied(&self, item: &Product) -> bool {
        item.color == self.color
    }

    fn describe(&self) -> String {
        format!("color == {}", self.color)
    }
}

/// Matches products of one size.
#[derive(Debug, Clone, Copy)]
pub struct SizeSpecification {
    size: Size,
}

impl SizeSpecification {
    pub fn new(size: Size) -> Self {
        Self { size }
    }
}

impl Specification<Product> for SizeSpecification {
    fn is_satisfied(&self, item: &Product) -> bool {
        item.size == self.size
    }

    fn describe(&self) -> String {
        format!("size == {}", self.size)
    }
}

/// Case-insensitive substring match on the product name.
#[derive(Debug, Clone)]
pub struct NameContainsSpecification {
    needle: String,
}

impl NameContainsSpecification {
    pub fn new(needle: impl AsRef<str>) -> Self {
        Self {
            needle: needle.as_ref().to_lowercase(),
        }
    }
}

impl Specification<Product> for NameContainsSpecification {
    fn is_satisfied(&self, item: &Product) -> bool {
        item.name.to_lowercase().contains(&self.needle)
    }

    fn describe(&self) -> String {
        format!("name ~ {:?}", self.needle)
    }
}
