//! Cart panel route handlers.
//!
//! The panel is session-scoped: the session holds a cart id, the registry in
//! [`AppState`] holds the cart. Prices are formatted server-side, and the
//! total is recomputed from the current items on every view.

use axum::{Json, extract::State, http::StatusCode};
use serde::{Deserialize, Serialize};
use tower_sessions::Session;
use tracing::instrument;

use mango_chili_checkout::CartStore;
use mango_chili_core::{CartItem, MenuItemId, Price};

use crate::error::Result;
use crate::session;
use crate::state::AppState;

/// Cart item display data.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItemView {
    pub id: MenuItemId,
    pub name: String,
    pub photo_url: String,
    pub price: String,
}

impl From<&CartItem> for CartItemView {
    fn from(item: &CartItem) -> Self {
        Self {
            id: item.id,
            name: item.name.clone(),
            photo_url: item.photo_url.clone(),
            price: Price::new(item.unit_price).display(),
        }
    }
}

/// Cart panel display data.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartPanelView {
    pub open: bool,
    pub items: Vec<CartItemView>,
    pub item_count: usize,
    pub total: String,
}

impl CartPanelView {
    pub(crate) fn of(cart: &impl CartStore) -> Self {
        let items = cart.items();
        Self {
            open: cart.is_open(),
            item_count: items.len(),
            total: Price::total_of(&items).display(),
            items: items.iter().map(CartItemView::from).collect(),
        }
    }
}

/// Remove from cart form data.
#[derive(Debug, Deserialize)]
pub struct RemoveItemForm {
    pub id: MenuItemId,
}

/// Cart panel view.
///
/// GET /cart
#[instrument(skip_all)]
pub async fn show(
    State(state): State<AppState>,
    session: Session,
) -> Result<Json<CartPanelView>> {
    let cart = session::cart_for(&session, &state).await?;
    Ok(Json(CartPanelView::of(&cart)))
}

/// Add a menu item to the cart and open the panel.
///
/// POST /cart/add
#[instrument(skip_all, fields(item_id = %item.id))]
pub async fn add(
    State(state): State<AppState>,
    session: Session,
    Json(item): Json<CartItem>,
) -> Result<(StatusCode, Json<CartPanelView>)> {
    let cart = session::cart_for(&session, &state).await?;
    cart.add(item);
    cart.set_open(true);
    Ok((StatusCode::CREATED, Json(CartPanelView::of(&cart))))
}

/// Remove an item from the cart by id.
///
/// POST /cart/remove
#[instrument(skip_all, fields(item_id = %form.id))]
pub async fn remove(
    State(state): State<AppState>,
    session: Session,
    Json(form): Json<RemoveItemForm>,
) -> Result<Json<CartPanelView>> {
    let cart = session::cart_for(&session, &state).await?;
    cart.remove(form.id);
    Ok(Json(CartPanelView::of(&cart)))
}

/// Open the cart side panel.
///
/// POST /cart/open
#[instrument(skip_all)]
pub async fn open(
    State(state): State<AppState>,
    session: Session,
) -> Result<Json<CartPanelView>> {
    let cart = session::cart_for(&session, &state).await?;
    cart.set_open(true);
    Ok(Json(CartPanelView::of(&cart)))
}

/// Close the cart side panel.
///
/// POST /cart/close
#[instrument(skip_all)]
pub async fn close(
    State(state): State<AppState>,
    session: Session,
) -> Result<Json<CartPanelView>> {
    let cart = session::cart_for(&session, &state).await?;
    cart.set_open(false);
    Ok(Json(CartPanelView::of(&cart)))
}
