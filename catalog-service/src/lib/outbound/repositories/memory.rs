//! In-memory adapters.
//!
//! Back the integration tests and database-free local runs. They honor
//! the same contracts as the Postgres adapters, including the email
//! uniqueness the account directory owns.

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::PoisonError;
use std::sync::RwLock;

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::account::errors::AccountError;
use crate::domain::account::models::Account;
use crate::domain::account::ports::AccountRepository;
use crate::domain::product::errors::ProductError;
use crate::domain::product::models::Product;
use crate::domain::product::models::ProductWithProvider;
use crate::domain::product::ports::ProductRepository;
use crate::domain::provider::errors::ProviderError;
use crate::domain::provider::models::Provider;
use crate::domain::provider::models::ProviderFilter;
use crate::domain::provider::ports::ProviderRepository;

#[derive(Default)]
pub struct InMemoryAccountRepository {
    // Keyed by email, the unique lookup key.
    accounts: RwLock<HashMap<String, Account>>,
}

impl InMemoryAccountRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AccountRepository for InMemoryAccountRepository {
    async fn create(&self, account: Account) -> Result<Account, AccountError> {
        let mut accounts = self
            .accounts
            .write()
            .unwrap_or_else(PoisonError::into_inner);

        let email = account.email.as_str().to_string();
        if accounts.contains_key(&email) {
            return Err(AccountError::EmailAlreadyExists(email));
        }

        accounts.insert(email, account.clone());
        Ok(account)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, AccountError> {
        let accounts = self.accounts.read().unwrap_or_else(PoisonError::into_inner);
        Ok(accounts.get(email).cloned())
    }
}

#[derive(Default)]
pub struct InMemoryProviderRepository {
    providers: RwLock<HashMap<Uuid, Provider>>,
}

impl InMemoryProviderRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn get(&self, id: Uuid) -> Option<Provider> {
        self.providers
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&id)
            .cloned()
    }
}

#[async_trait]
impl ProviderRepository for InMemoryProviderRepository {
    async fn create(&self, provider: Provider) -> Result<Provider, ProviderError> {
        self.providers
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(provider.id, provider.clone());
        Ok(provider)
    }

    async fn find(&self, filter: ProviderFilter) -> Result<Vec<Provider>, ProviderError> {
        let providers = self
            .providers
            .read()
            .unwrap_or_else(PoisonError::into_inner);

        let mut matched: Vec<Provider> = providers
            .values()
            .filter(|provider| {
                filter
                    .name_contains
                    .as_deref()
                    .map_or(true, |name| provider.name.contains(name))
            })
            .filter(|provider| {
                filter
                    .country_code
                    .as_deref()
                    .map_or(true, |code| provider.country_code == code)
            })
            .cloned()
            .collect();

        matched.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(matched)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Provider>, ProviderError> {
        Ok(self.get(id))
    }

    async fn update(&self, provider: Provider) -> Result<Provider, ProviderError> {
        let mut providers = self
            .providers
            .write()
            .unwrap_or_else(PoisonError::into_inner);

        if !providers.contains_key(&provider.id) {
            return Err(ProviderError::NotFound(provider.id.to_string()));
        }

        providers.insert(provider.id, provider.clone());
        Ok(provider)
    }

    async fn delete(&self, id: Uuid) -> Result<(), ProviderError> {
        let removed = self
            .providers
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(&id);

        match removed {
            Some(_) => Ok(()),
            None => Err(ProviderError::NotFound(id.to_string())),
        }
    }
}

pub struct InMemoryProductRepository {
    products: RwLock<HashMap<Uuid, Product>>,
    // Shared with the provider adapter so listings can join.
    providers: Arc<InMemoryProviderRepository>,
}

impl InMemoryProductRepository {
    pub fn new(providers: Arc<InMemoryProviderRepository>) -> Self {
        Self {
            products: RwLock::new(HashMap::new()),
            providers,
        }
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn create(&self, product: Product) -> Result<Product, ProductError> {
        self.products
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(product.id, product.clone());
        Ok(product)
    }

    async fn find_with_provider(&self) -> Result<Vec<ProductWithProvider>, ProductError> {
        let products = self.products.read().unwrap_or_else(PoisonError::into_inner);

        let mut entries: Vec<ProductWithProvider> = products
            .values()
            .map(|product| ProductWithProvider {
                product: product.clone(),
                provider: self.providers.get(product.provider_id),
            })
            .collect();

        entries.sort_by(|a, b| b.product.created_at.cmp(&a.product.created_at));
        Ok(entries)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Product>, ProductError> {
        let products = self.products.read().unwrap_or_else(PoisonError::into_inner);
        Ok(products.get(&id).cloned())
    }

    async fn count(&self) -> Result<i64, ProductError> {
        let products = self.products.read().unwrap_or_else(PoisonError::into_inner);
        Ok(products.len() as i64)
    }

    async fn update(&self, product: Product) -> Result<Product, ProductError> {
        let mut products = self.products.write().unwrap_or_else(PoisonError::into_inner);

        if !products.contains_key(&product.id) {
            return Err(ProductError::NotFound(product.id.to_string()));
        }

        products.insert(product.id, product.clone());
        Ok(product)
    }

    async fn delete(&self, id: Uuid) -> Result<(), ProductError> {
        let removed = self
            .products
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(&id);

        match removed {
            Some(_) => Ok(()),
            None => Err(ProductError::NotFound(id.to_string())),
        }
    }
}
