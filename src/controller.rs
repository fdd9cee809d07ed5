//! Cart Line Controller
//!
//! Update and remove actions for one cart line. Each action does its
//! synchronous work (validation, optimistic hide, dispatch) immediately and
//! hands back a completion future that applies the server's answer.

use futures::future::{self, LocalBoxFuture};
use futures::FutureExt;

use crate::commands::{self, CartTransport, PendingResponse};
use crate::error::CartError;
use crate::models::{ItemId, Quantity};
use crate::page::{AlertBanner, LineItemView, HIDDEN_DISPLAY};

pub const UPDATE_FAILED_PREFIX: &str = "Error updating item: ";
pub const DELETE_FAILED_PREFIX: &str = "Error deleting item: ";

/// Resolves once the server answered and the page reflects it
pub type Completion = LocalBoxFuture<'static, Result<(), CartError>>;

#[derive(Clone)]
pub struct CartLineController<A, V, T> {
    alert: A,
    view: V,
    transport: T,
    api_base: String,
}

impl<A, V, T> CartLineController<A, V, T>
where
    A: AlertBanner + Clone + 'static,
    V: LineItemView + Clone + 'static,
    T: CartTransport,
{
    pub fn new(alert: A, view: V, transport: T, api_base: impl Into<String>) -> Self {
        Self {
            alert,
            view,
            transport,
            api_base: api_base.into(),
        }
    }

    /// Validate the typed quantity and PUT it.
    ///
    /// Invalid input shows its message and sends nothing. The input keeps
    /// whatever was typed no matter how the request ends.
    pub fn update_quantity(&self, item: &ItemId) -> Completion {
        let pending = match self.dispatch_update(item) {
            Ok(pending) => pending,
            Err(err) => return future::ready(Err(err)).boxed_local(),
        };

        let alert = self.alert.clone();
        let item = item.clone();
        async move {
            let result = pending.await.and_then(|response| response.into_result());
            match &result {
                Ok(()) => {
                    tracing::info!(item = %item, "quantity updated");
                    alert.clear();
                }
                Err(err) => {
                    tracing::warn!(item = %item, error = %err, "quantity update failed");
                    alert.set(&format!("{}{}", UPDATE_FAILED_PREFIX, err));
                }
            }
            result
        }
        .boxed_local()
    }

    fn dispatch_update(&self, item: &ItemId) -> Result<PendingResponse, CartError> {
        let typed = self.view.quantity_input(item).ok_or_else(|| {
            tracing::warn!(item = %item, "no quantity input for item");
            CartError::MissingElement(item.quantity_element_id())
        })?;
        let quantity = Quantity::parse(&typed).inspect_err(|err| {
            tracing::debug!(item = %item, input = %typed, "rejected quantity");
            self.alert.set(&err.to_string());
        })?;

        let request = commands::update_quantity(&self.api_base, item, quantity);
        tracing::debug!(item = %item, %quantity, path = %request.path, "sending quantity update");
        Ok(self.transport.send(request))
    }

    /// Hide the row, then DELETE it.
    ///
    /// The row's previous display style is captured by this call's
    /// completion, so concurrent removals each restore their own row.
    /// A row that is already hidden has a removal in flight; nothing is sent
    /// and that removal's completion keeps the display to restore.
    pub fn remove_item(&self, item: &ItemId) -> Completion {
        let Some(previous) = self.view.row_display(item) else {
            tracing::warn!(item = %item, "no row for item");
            return future::ready(Err(CartError::MissingElement(item.row_element_id()))).boxed_local();
        };
        if previous == HIDDEN_DISPLAY {
            tracing::debug!(item = %item, "removal already pending");
            return future::ready(Ok(())).boxed_local();
        }
        self.view.set_row_display(item, HIDDEN_DISPLAY);

        let request = commands::remove_item(&self.api_base, item);
        tracing::debug!(item = %item, path = %request.path, "sending removal");
        let pending = self.transport.send(request);

        let alert = self.alert.clone();
        let view = self.view.clone();
        let item = item.clone();
        async move {
            let result = pending.await.and_then(|response| response.into_result());
            match &result {
                Ok(()) => {
                    tracing::info!(item = %item, "item removed");
                    alert.clear();
                }
                Err(err) => {
                    tracing::warn!(item = %item, error = %err, "removal failed, restoring row");
                    alert.set(&format!("{}{}", DELETE_FAILED_PREFIX, err));
                    view.set_row_display(&item, &previous);
                }
            }
            result
        }
        .boxed_local()
    }
}
