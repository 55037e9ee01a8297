//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer: it dispatches
//! to the right command function and normalizes human-friendly references
//! (SKUs, customer names) into the stable ids the commands work with. It
//! holds the [`Store`] for the whole process lifetime, so every UI client
//! goes through one `LojinhaApi` value.
//!
//! What the API does NOT do: business logic (that belongs in `commands/*.rs`),
//! I/O formatting, or anything involving stdout/stderr.

use chrono::NaiveDate;
use std::path::Path;

use crate::commands::{
    self, helpers, CmdResult, CustomerDraft, ProductDraft, ProductPatch, PurchaseDraft, SaleDraft,
};
use crate::error::Result;
use crate::model::PaymentMethod;
use crate::money::Money;
use crate::store::{StorageBackend, Store};

pub struct LojinhaApi<B: StorageBackend> {
    store: Store<B>,
}

impl<B: StorageBackend> LojinhaApi<B> {
    /// Load the four collections from the backend and keep them for the
    /// lifetime of the process. Decode failures propagate: the application
    /// never starts over corrupt state.
    pub fn open(backend: B) -> Result<Self> {
        Ok(Self {
            store: Store::load(backend)?,
        })
    }

    pub fn dashboard(&self, today: NaiveDate) -> Result<CmdResult> {
        commands::dashboard::run(&self.store, today)
    }

    pub fn inventory(&self, search: Option<&str>) -> Result<CmdResult> {
        commands::inventory::list(&self.store, search)
    }

    pub fn add_product(&mut self, draft: ProductDraft) -> Result<CmdResult> {
        commands::inventory::add(&mut self.store, draft)
    }

    pub fn update_product(&mut self, reference: &str, patch: ProductPatch) -> Result<CmdResult> {
        let id = helpers::resolve_product_id(&self.store, reference)?;
        commands::inventory::update(&mut self.store, &id, patch)
    }

    pub fn remove_product(&mut self, reference: &str) -> Result<CmdResult> {
        let id = helpers::resolve_product_id(&self.store, reference)?;
        commands::inventory::remove(&mut self.store, &id)
    }

    pub fn record_sale(
        &mut self,
        product: &str,
        quantity: i64,
        payment_method: PaymentMethod,
        customer: Option<&str>,
    ) -> Result<CmdResult> {
        let product_id = helpers::resolve_product_id(&self.store, product)?;
        let customer_id = customer
            .map(|c| helpers::resolve_customer_id(&self.store, c))
            .transpose()?;
        commands::sell::run(
            &mut self.store,
            SaleDraft {
                product_id,
                quantity,
                payment_method,
                customer_id,
            },
        )
    }

    pub fn record_purchase(
        &mut self,
        product: &str,
        quantity: i64,
        unit_cost: Money,
        supplier: String,
    ) -> Result<CmdResult> {
        let product_id = helpers::resolve_product_id(&self.store, product)?;
        commands::restock::run(
            &mut self.store,
            PurchaseDraft {
                product_id,
                quantity,
                unit_cost,
                supplier,
            },
        )
    }

    pub fn sales_history(&self) -> Result<CmdResult> {
        commands::sell::history(&self.store)
    }

    pub fn purchases_history(&self) -> Result<CmdResult> {
        commands::restock::history(&self.store)
    }

    pub fn add_customer(&mut self, draft: CustomerDraft) -> Result<CmdResult> {
        commands::customers::add(&mut self.store, draft)
    }

    pub fn customers(&self) -> Result<CmdResult> {
        commands::customers::list(&self.store)
    }

    pub fn report(&self) -> Result<CmdResult> {
        commands::report::run(&self.store)
    }

    pub fn export(&self, path: &Path) -> Result<CmdResult> {
        commands::export::run(&self.store, path)
    }
}
