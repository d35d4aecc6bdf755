use playlab_catalog::{Catalog, Category, Explanation, Lab, LabCategory};

use crate::Client;

/// Wrapper for catalog specific functionality. All accessors are pure reads
/// of the registry the client was constructed with.
pub struct CatalogClient {
    client: Client,
}

impl CatalogClient {
    fn new(client: Client) -> Self {
        Self { client }
    }

    fn inner(&self) -> &Catalog {
        &self.client.internal.catalog
    }

    /// Every lab, implemented or not, in display order.
    pub fn all_labs(&self) -> &[Lab] {
        self.inner().all_labs()
    }

    /// The labs that are actually implemented.
    pub fn available_labs(&self) -> Vec<&Lab> {
        self.inner().available_labs()
    }

    /// Looks a lab up by id.
    pub fn lab(&self, id: &str) -> Option<&Lab> {
        self.inner().lab(id)
    }

    /// The labs in one catalog section.
    pub fn labs_in(&self, category: LabCategory) -> Vec<&Lab> {
        self.inner().labs_in(category)
    }

    /// Every category, in display order.
    pub fn categories(&self) -> &[Category] {
        self.inner().categories()
    }

    /// Looks a category up by id.
    pub fn category(&self, id: LabCategory) -> Option<&Category> {
        self.inner().category(id)
    }

    /// How many labs a section holds.
    pub fn lab_count(&self, category: LabCategory) -> usize {
        self.inner().lab_count(category)
    }

    /// How many implemented labs a section holds.
    pub fn available_lab_count(&self, category: LabCategory) -> usize {
        self.inner().available_lab_count(category)
    }

    /// Case-insensitive match over title, description and tags.
    pub fn search(&self, query: &str) -> Vec<&Lab> {
        self.inner().search(query)
    }

    /// The explanation content for a lab, if it ships with one.
    pub fn explanation(&self, lab_id: &str) -> Option<&Explanation> {
        self.inner().explanation(lab_id)
    }
}

#[allow(missing_docs)]
pub trait CatalogClientExt {
    fn catalog(&self) -> CatalogClient;
}

impl CatalogClientExt for Client {
    fn catalog(&self) -> CatalogClient {
        CatalogClient::new(self.clone())
    }
}
