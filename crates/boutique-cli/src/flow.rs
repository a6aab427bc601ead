//! Delete Confirmation Flow
//!
//! Guards product deletion behind an explicit confirm/cancel step:
//!
//! ```text
//! Idle --request--> ConfirmPending --cancel--> Idle
//!                        |
//!                     confirm
//!                        v
//!                    Deleting --ok--> Deleted (navigate home)
//!                        |
//!                        +--err--> Failed (stay, show error)
//! ```
//!
//! Navigation only happens after a successful delete. A failed delete keeps
//! the user on the product with the error visible; from there they can retry
//! or dismiss.

use anyhow::{anyhow, bail, Context, Result};
use async_trait::async_trait;
use uuid::Uuid;

use crate::router::{Navigator, HOME_PATH};

/// Backend capability the flow uses to remove a product
#[async_trait]
pub trait ProductDeleter: Send + Sync {
    async fn delete_product(&self, id: Uuid) -> Result<()>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteState {
    Idle,
    ConfirmPending,
    Deleting,
    Deleted,
    Failed(String),
}

pub struct DeleteConfirmationFlow<'a, D: ?Sized, N: ?Sized> {
    product_id: Uuid,
    state: DeleteState,
    deleter: &'a D,
    navigator: &'a N,
}

impl<'a, D, N> DeleteConfirmationFlow<'a, D, N>
where
    D: ProductDeleter + ?Sized,
    N: Navigator + ?Sized,
{
    pub fn new(product_id: Uuid, deleter: &'a D, navigator: &'a N) -> Self {
        Self {
            product_id,
            state: DeleteState::Idle,
            deleter,
            navigator,
        }
    }

    pub fn state(&self) -> &DeleteState {
        &self.state
    }

    /// Open the confirmation step. No backend call is made.
    pub fn request_delete(&mut self) -> Result<()> {
        match self.state {
            DeleteState::Idle | DeleteState::Failed(_) => {
                self.state = DeleteState::ConfirmPending;
                Ok(())
            }
            _ => bail!("Cannot request delete while {:?}", self.state),
        }
    }

    /// Close the confirmation step (or dismiss a failure) without side effects
    pub fn cancel(&mut self) -> Result<()> {
        match self.state {
            DeleteState::ConfirmPending | DeleteState::Failed(_) => {
                self.state = DeleteState::Idle;
                Ok(())
            }
            _ => bail!("Nothing to cancel while {:?}", self.state),
        }
    }

    /// Issue the delete and, once it succeeds, navigate home.
    ///
    /// Takes the flow exclusively, so at most one delete is in flight.
    pub async fn confirm(&mut self) -> Result<()> {
        if self.state != DeleteState::ConfirmPending {
            bail!("Cannot confirm delete while {:?}", self.state);
        }

        self.state = DeleteState::Deleting;

        if let Err(e) = self.deleter.delete_product(self.product_id).await {
            let message = format!("{:#}", e);
            self.state = DeleteState::Failed(message.clone());
            return Err(anyhow!("Failed to delete product {}: {}", self.product_id, message));
        }

        // The product is gone even if the home page fails to load
        self.state = DeleteState::Deleted;
        let id = self.product_id;
        self.navigator
            .push(HOME_PATH)
            .await
            .with_context(|| format!("Product {} was deleted, but returning home failed", id))
    }
}
