//! Display-name option lists for the ticket code fields.
//!
//! The four code fields on a ticket index into these lists. Statuses,
//! categories and priorities ship fixed; products are managed by admins at
//! runtime.

use crate::error::CatalogError;

#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<String>,
    statuses: Vec<String>,
    categories: Vec<String>,
    priorities: Vec<String>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::with_products(Vec::new())
    }
}

impl Catalog {
    pub fn with_products(products: Vec<String>) -> Self {
        Self {
            products,
            statuses: fixed(&["Not Started", "In Progress", "Paused"]),
            categories: fixed(&["New feature", "Bug", "Enhancement"]),
            priorities: fixed(&["High", "Medium", "Low"]),
        }
    }

    pub fn products(&self) -> &[String] {
        &self.products
    }

    pub fn statuses(&self) -> &[String] {
        &self.statuses
    }

    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    pub fn priorities(&self) -> &[String] {
        &self.priorities
    }

    pub fn product_name(&self, index: usize) -> Option<&str> {
        self.products.get(index).map(String::as_str)
    }

    pub fn status_name(&self, index: usize) -> Option<&str> {
        self.statuses.get(index).map(String::as_str)
    }

    pub fn category_name(&self, index: usize) -> Option<&str> {
        self.categories.get(index).map(String::as_str)
    }

    pub fn priority_name(&self, index: usize) -> Option<&str> {
        self.priorities.get(index).map(String::as_str)
    }

    /// Append a product option; names must be unique and non-blank.
    /// Returns the new option's index.
    pub fn add_product(&mut self, name: &str) -> Result<usize, CatalogError> {
        if name.is_empty() {
            return Err(CatalogError::BlankProduct);
        }
        if self.products.iter().any(|product| product == name) {
            return Err(CatalogError::DuplicateProduct(name.to_string()));
        }
        self.products.push(name.to_string());
        Ok(self.products.len() - 1)
    }

    /// Rename the product at `index`; the new name must be unique and
    /// non-blank.
    pub fn rename_product(&mut self, index: usize, name: &str) -> Result<(), CatalogError> {
        if index >= self.products.len() {
            return Err(CatalogError::UnknownProduct(index));
        }
        if name.is_empty() {
            return Err(CatalogError::BlankProduct);
        }
        let taken = self
            .products
            .iter()
            .enumerate()
            .any(|(i, product)| i != index && product == name);
        if taken {
            return Err(CatalogError::DuplicateProduct(name.to_string()));
        }
        self.products[index] = name.to_string();
        Ok(())
    }

    /// Drop the product option at `index` and return its name. Codes above
    /// the removed slot shift down by one; the cascade over stored tickets
    /// is the store's job.
    pub fn remove_product(&mut self, index: usize) -> Result<String, CatalogError> {
        if index >= self.products.len() {
            return Err(CatalogError::UnknownProduct(index));
        }
        Ok(self.products.remove(index))
    }
}

fn fixed(names: &[&str]) -> Vec<String> {
    names.iter().map(|name| name.to_string()).collect()
}
