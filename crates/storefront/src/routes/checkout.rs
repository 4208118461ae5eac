//! Checkout flow route handlers.
//!
//! Each action loads the session's flow, applies exactly one state-machine
//! action against the session's cart (and the order gateway, for submit), and
//! stores the flow back. Guarded transitions come back as a normal response
//! with `ok: false` and the blocking message; stage misuse (an action that
//! does not exist in the current stage, or a duplicate submit) surfaces as an
//! HTTP error via [`crate::error::AppError`].

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};
use serde::{Deserialize, Serialize};
use tower_sessions::Session;
use tracing::instrument;

use mango_chili_checkout::{
    CartStore, CheckoutFlow, Field, OrderGateway, Outcome, Stage, SubmitStart,
    flow::ORDER_RECEIVED_COPY,
};
use mango_chili_core::OrderId;

use crate::error::Result;
use crate::routes::cart::CartItemView;
use crate::session;
use crate::state::AppState;

/// One field's display state.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldView {
    pub field: Field,
    pub value: String,
    /// Set only when the field is touched and invalid.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<&'static str>,
}

/// Confirmation display data.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReceiptView {
    pub order_id: OrderId,
    pub copy: Vec<&'static str>,
}

/// The whole checkout panel as the client renders it.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutView {
    pub stage: Stage,
    pub items: Vec<CartItemView>,
    pub total: String,
    pub fields: Vec<FieldView>,
    pub pending: bool,
    pub submit_label: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub submit_error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub receipt: Option<ReceiptView>,
}

impl CheckoutView {
    fn of(flow: &CheckoutFlow, cart: &impl CartStore) -> Self {
        let items = cart.items();
        Self {
            stage: flow.stage(),
            total: flow.total(cart).display(),
            items: items.iter().map(CartItemView::from).collect(),
            fields: Field::ALL
                .into_iter()
                .map(|field| FieldView {
                    field,
                    value: flow.form().value(field).to_string(),
                    error: flow
                        .form()
                        .shows_error(field)
                        .then(|| flow.form().error(field))
                        .flatten(),
                })
                .collect(),
            pending: flow.is_pending(),
            submit_label: flow.submit_label(),
            submit_error: flow.submit_error().map(String::from),
            receipt: flow.receipt().map(|receipt| ReceiptView {
                order_id: receipt.order_id.clone(),
                copy: ORDER_RECEIVED_COPY.to_vec(),
            }),
        }
    }
}

/// Response for checkout actions.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionResponse {
    pub ok: bool,
    /// Blocking message, when a guard refused the transition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<&'static str>,
    pub checkout: CheckoutView,
}

fn respond(outcome: &Outcome, flow: &CheckoutFlow, cart: &impl CartStore) -> Response {
    let view = CheckoutView::of(flow, cart);
    let (status, ok, message) = match outcome {
        Outcome::Advanced(_) | Outcome::Completed(_) | Outcome::Finished => {
            (StatusCode::OK, true, None)
        }
        Outcome::Blocked { message, .. } => (StatusCode::UNPROCESSABLE_ENTITY, false, Some(*message)),
        Outcome::Failed { message } => (StatusCode::BAD_GATEWAY, false, Some(*message)),
    };
    (
        status,
        Json(ActionResponse {
            ok,
            message,
            checkout: view,
        }),
    )
        .into_response()
}

/// Field input payload.
#[derive(Debug, Deserialize)]
pub struct FieldInput {
    pub field: Field,
    pub value: String,
}

/// Field reference payload (blur).
#[derive(Debug, Deserialize)]
pub struct FieldRef {
    pub field: Field,
}

/// Current checkout view.
///
/// GET /checkout
#[instrument(skip_all)]
pub async fn show(State(state): State<AppState>, session: Session) -> Result<Json<CheckoutView>> {
    let cart = session::cart_for(&session, &state).await?;
    let flow = session::load_flow(&session).await?;
    Ok(Json(CheckoutView::of(&flow, &cart)))
}

/// Record input for one field; its mask is applied before storing.
///
/// POST /checkout/field
#[instrument(skip_all, fields(field = input.field.name()))]
pub async fn field(
    State(state): State<AppState>,
    session: Session,
    Json(input): Json<FieldInput>,
) -> Result<Json<CheckoutView>> {
    let cart = session::cart_for(&session, &state).await?;
    let mut flow = session::load_flow(&session).await?;
    flow.input(input.field, &input.value);
    session::save_flow(&session, &flow).await?;
    Ok(Json(CheckoutView::of(&flow, &cart)))
}

/// Mark a field touched (its input lost focus).
///
/// POST /checkout/blur
#[instrument(skip_all, fields(field = input.field.name()))]
pub async fn blur(
    State(state): State<AppState>,
    session: Session,
    Json(input): Json<FieldRef>,
) -> Result<Json<CheckoutView>> {
    let cart = session::cart_for(&session, &state).await?;
    let mut flow = session::load_flow(&session).await?;
    flow.blur(input.field);
    session::save_flow(&session, &flow).await?;
    Ok(Json(CheckoutView::of(&flow, &cart)))
}

/// Cart review -> delivery form. Blocked (panel closed) on an empty cart.
///
/// POST /checkout/continue
#[instrument(skip_all)]
pub async fn continue_to_delivery(
    State(state): State<AppState>,
    session: Session,
) -> Result<Response> {
    let cart = session::cart_for(&session, &state).await?;
    let mut flow = session::load_flow(&session).await?;
    let outcome = flow.continue_to_delivery(&cart)?;
    session::save_flow(&session, &flow).await?;
    Ok(respond(&outcome, &flow, &cart))
}

/// Delivery form -> payment form, after full delivery validation.
///
/// POST /checkout/payment
#[instrument(skip_all)]
pub async fn continue_to_payment(
    State(state): State<AppState>,
    session: Session,
) -> Result<Response> {
    let cart = session::cart_for(&session, &state).await?;
    let mut flow = session::load_flow(&session).await?;
    let outcome = flow.continue_to_payment()?;
    session::save_flow(&session, &flow).await?;
    Ok(respond(&outcome, &flow, &cart))
}

/// One stage back.
///
/// POST /checkout/back
#[instrument(skip_all)]
pub async fn back(State(state): State<AppState>, session: Session) -> Result<Response> {
    let cart = session::cart_for(&session, &state).await?;
    let mut flow = session::load_flow(&session).await?;
    let outcome = flow.back()?;
    session::save_flow(&session, &flow).await?;
    Ok(respond(&outcome, &flow, &cart))
}

/// Submit the order. Validation failures block; gateway failures leave the
/// user on the payment form with a visible notice; success moves the flow to
/// confirmation and clears the cart.
///
/// The flow is stored back with its pending flag set before the gateway call,
/// so a second submit on the same session loads the flag and is rejected with
/// 409 while the first is still in flight.
///
/// POST /checkout/submit
#[instrument(skip_all)]
pub async fn submit(State(state): State<AppState>, session: Session) -> Result<Response> {
    let cart = session::cart_for(&session, &state).await?;
    let mut flow = session::load_flow(&session).await?;

    let order = match flow.begin_submit(&cart)? {
        SubmitStart::Blocked { message } => {
            session::save_flow(&session, &flow).await?;
            let outcome = Outcome::Blocked {
                message,
                panel_closed: false,
            };
            return Ok(respond(&outcome, &flow, &cart));
        }
        SubmitStart::Accepted(order) => order,
    };
    session::save_flow(&session, &flow).await?;

    let result = state.gateway().place_order(&order).await;
    let outcome = flow.complete_submit(&cart, result);
    session::save_flow(&session, &flow).await?;
    Ok(respond(&outcome, &flow, &cart))
}

/// Acknowledge the confirmation: reset the flow, close the panel, go home.
///
/// POST /checkout/finish
#[instrument(skip_all)]
pub async fn finish(State(state): State<AppState>, session: Session) -> Result<Redirect> {
    let cart = session::cart_for(&session, &state).await?;
    let mut flow = session::load_flow(&session).await?;
    flow.finish(&cart)?;
    session::save_flow(&session, &flow).await?;
    Ok(Redirect::to("/"))
}
