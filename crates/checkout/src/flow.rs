//! The checkout stage state machine.
//!
//! Control flows strictly forward - cart review, delivery address, payment,
//! confirmation - with backward navigation at each form stage. Guarded
//! transitions surface a blocking message and stay put; the only asynchronous
//! action is [`CheckoutFlow::submit`], which calls the order gateway exactly
//! once per accepted submit and is explicitly non-re-entrant.
//!
//! The flow holds no collaborators. The cart store and gateway are passed into
//! each action, so the flow itself is plain serializable state that the
//! storefront parks in the session between requests.

use serde::{Deserialize, Serialize};

use mango_chili_core::{
    CardExpiry, CardInfo, DeliveryAddress, DeliveryInfo, OrderReceipt, OrderRequest, PaymentInfo,
    Price, ProductLine,
};

use crate::cart::CartStore;
use crate::field::Field;
use crate::form::CheckoutForm;
use crate::gateway::{GatewayError, OrderGateway};
use crate::mask;

/// Blocking message for a continue attempt with an empty cart.
pub const EMPTY_CART_MESSAGE: &str =
    "Your cart is empty. Add at least one item to continue with your order.";

/// Blocking message when delivery fields fail full validation.
pub const DELIVERY_INCOMPLETE_MESSAGE: &str =
    "Please fill in all required delivery fields before continuing to payment.";

/// Blocking message when the final submit fails validation.
pub const PAYMENT_INCOMPLETE_MESSAGE: &str =
    "Please check the highlighted fields before completing your payment.";

/// User-facing notice recorded when the order API call fails.
pub const SUBMIT_FAILED_MESSAGE: &str =
    "We could not place your order. Please try again in a moment.";

/// Idle and busy labels for the submit control.
pub const SUBMIT_LABEL: &str = "Complete payment";
pub const SUBMIT_PENDING_LABEL: &str = "Completing payment...";

/// Static confirmation copy shown with the order id.
pub const ORDER_RECEIVED_COPY: [&str; 4] = [
    "We're happy to let you know your order is already being prepared and will soon \
     be delivered to the address you provided.",
    "Please note that our couriers are not authorized to charge anything extra on delivery.",
    "Remember to wash your hands after receiving your order, for a safe and pleasant meal.",
    "We hope you enjoy a delicious meal. Bom apetite!",
];

/// The four mutually exclusive phases of the cart panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Stage {
    #[default]
    Cart,
    DeliveryForm,
    PaymentForm,
    Confirmation,
}

/// What an action did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The flow moved to a new stage.
    Advanced(Stage),
    /// A guard refused the transition; the user stays where they are.
    Blocked {
        message: &'static str,
        /// The empty-cart guard also asks the panel to close.
        panel_closed: bool,
    },
    /// The order was accepted; the flow is on the confirmation stage.
    Completed(OrderReceipt),
    /// The order API call failed; the flow stays on the payment stage
    /// with `submit_error` recorded, and the user may retry.
    Failed { message: &'static str },
    /// The confirmation was acknowledged; navigate home and reset.
    Finished,
}

/// Result of accepting (or refusing) a submission before the gateway call.
///
/// [`CheckoutFlow::begin_submit`] returns this so callers can persist the
/// flow, with its pending flag set, before awaiting the gateway. A second
/// submit against the persisted flow then fails the re-entrancy guard even
/// while the first is still in flight.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitStart {
    /// Validation passed: the order is built and the pending flag is set.
    Accepted(OrderRequest),
    /// Full-form validation failed; the flow stays on the payment form.
    Blocked { message: &'static str },
}

/// Errors for actions that do not apply at all (as opposed to guarded
/// transitions, which report a blocking [`Outcome`]).
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CheckoutError {
    /// The action does not exist in the current stage.
    #[error("action not available while in the {0:?} stage")]
    WrongStage(Stage),

    /// A submit arrived while a previous one was still pending.
    #[error("an order submission is already in flight")]
    SubmissionInFlight,

    /// A validated value failed numeric coercion while building the order.
    /// The rule table makes this unreachable in practice, but the build step
    /// still refuses to panic.
    #[error("field {0} is not a valid number")]
    InvalidNumber(&'static str),
}

/// The checkout flow: current stage, form state, and submission bookkeeping.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CheckoutFlow {
    stage: Stage,
    form: CheckoutForm,
    pending: bool,
    submit_error: Option<String>,
    receipt: Option<OrderReceipt>,
}

impl CheckoutFlow {
    /// A fresh flow on the cart stage.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current stage.
    #[must_use]
    pub const fn stage(&self) -> Stage {
        self.stage
    }

    /// The backing form.
    #[must_use]
    pub const fn form(&self) -> &CheckoutForm {
        &self.form
    }

    /// Receipt of a completed order, once on the confirmation stage.
    #[must_use]
    pub const fn receipt(&self) -> Option<&OrderReceipt> {
        self.receipt.as_ref()
    }

    /// Whether a submission is currently in flight.
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        self.pending
    }

    /// The recorded notice from a failed submission, if any.
    #[must_use]
    pub fn submit_error(&self) -> Option<&str> {
        self.submit_error.as_deref()
    }

    /// Label for the submit control; switches to the busy label while pending.
    #[must_use]
    pub const fn submit_label(&self) -> &'static str {
        if self.pending {
            SUBMIT_PENDING_LABEL
        } else {
            SUBMIT_LABEL
        }
    }

    /// Total of the current cart, recomputed from the store.
    pub fn total(&self, cart: &impl CartStore) -> Price {
        cart.total()
    }

    /// Record user input for a field, applying its mask if it has one.
    pub fn input(&mut self, field: Field, raw: &str) {
        let value = mask::for_field(field).map_or_else(|| raw.to_string(), |m| m.apply(raw));
        self.form.set_value(field, value);
    }

    /// Mark a field touched (focus left the input).
    pub fn blur(&mut self, field: Field) {
        self.form.touch(field);
    }

    /// Cart review to delivery form. Blocked (and the panel closed) when the
    /// cart is empty.
    ///
    /// # Errors
    ///
    /// [`CheckoutError::WrongStage`] unless the flow is on the cart stage.
    pub fn continue_to_delivery(
        &mut self,
        cart: &impl CartStore,
    ) -> Result<Outcome, CheckoutError> {
        self.expect_stage(Stage::Cart)?;

        if cart.items().is_empty() {
            cart.set_open(false);
            tracing::debug!("continue blocked: cart is empty");
            return Ok(Outcome::Blocked {
                message: EMPTY_CART_MESSAGE,
                panel_closed: true,
            });
        }

        self.stage = Stage::DeliveryForm;
        Ok(Outcome::Advanced(self.stage))
    }

    /// Delivery form to payment form. Force-touches every delivery field and
    /// runs full validation over the delivery group; blocked if any of those
    /// fields is invalid.
    ///
    /// # Errors
    ///
    /// [`CheckoutError::WrongStage`] unless the flow is on the delivery stage.
    pub fn continue_to_payment(&mut self) -> Result<Outcome, CheckoutError> {
        self.expect_stage(Stage::DeliveryForm)?;

        self.form.touch_fields(&Field::DELIVERY);
        if !self.form.all_valid(&Field::DELIVERY) {
            tracing::debug!(
                errors = ?self.form.errors_in(&Field::DELIVERY),
                "continue blocked: delivery fields invalid"
            );
            return Ok(Outcome::Blocked {
                message: DELIVERY_INCOMPLETE_MESSAGE,
                panel_closed: false,
            });
        }

        self.stage = Stage::PaymentForm;
        Ok(Outcome::Advanced(self.stage))
    }

    /// Unconditional back: payment to delivery, delivery to cart.
    ///
    /// # Errors
    ///
    /// [`CheckoutError::WrongStage`] on the cart and confirmation stages,
    /// which have no back action.
    pub fn back(&mut self) -> Result<Outcome, CheckoutError> {
        self.stage = match self.stage {
            Stage::DeliveryForm => Stage::Cart,
            Stage::PaymentForm => Stage::DeliveryForm,
            stage @ (Stage::Cart | Stage::Confirmation) => {
                return Err(CheckoutError::WrongStage(stage));
            }
        };
        Ok(Outcome::Advanced(self.stage))
    }

    /// Accept a submission from the payment form, without calling the
    /// gateway yet.
    ///
    /// Force-touches every field, validates the whole form, builds the order
    /// request and sets the pending flag. Callers that keep the flow in
    /// external storage must persist it between this and
    /// [`Self::complete_submit`], so a concurrent submit loads the pending
    /// flag and is rejected.
    ///
    /// # Errors
    ///
    /// [`CheckoutError::WrongStage`] outside the payment stage,
    /// [`CheckoutError::SubmissionInFlight`] while a previous submit is
    /// pending, and [`CheckoutError::InvalidNumber`] if a coercion fails.
    pub fn begin_submit(&mut self, cart: &impl CartStore) -> Result<SubmitStart, CheckoutError> {
        self.expect_stage(Stage::PaymentForm)?;
        if self.pending {
            return Err(CheckoutError::SubmissionInFlight);
        }

        self.form.touch_fields(&Field::ALL);
        if !self.form.all_valid(&Field::ALL) {
            tracing::debug!(
                errors = ?self.form.errors_in(&Field::ALL),
                "submit blocked: form invalid"
            );
            return Ok(SubmitStart::Blocked {
                message: PAYMENT_INCOMPLETE_MESSAGE,
            });
        }

        let order = self.build_order(cart)?;
        self.pending = true;
        self.submit_error = None;
        Ok(SubmitStart::Accepted(order))
    }

    /// Apply the gateway's answer to an accepted submission.
    ///
    /// Clears the pending flag. On success the flow moves to confirmation
    /// and clears the cart in the same step; on gateway failure it stays on
    /// the payment form with a visible notice and allows a retry.
    pub fn complete_submit(
        &mut self,
        cart: &impl CartStore,
        result: Result<OrderReceipt, GatewayError>,
    ) -> Outcome {
        self.pending = false;
        match result {
            Ok(receipt) => {
                // Confirmation and cart-clear are one reactive unit.
                cart.clear();
                self.receipt = Some(receipt.clone());
                self.stage = Stage::Confirmation;
                Outcome::Completed(receipt)
            }
            Err(error) => {
                tracing::warn!(%error, "order submission failed");
                self.submit_error = Some(SUBMIT_FAILED_MESSAGE.to_string());
                Outcome::Failed {
                    message: SUBMIT_FAILED_MESSAGE,
                }
            }
        }
    }

    /// Terminal submit from the payment form: [`Self::begin_submit`] and
    /// [`Self::complete_submit`] in one call, for callers that hold the flow
    /// in memory for the whole submission.
    ///
    /// # Errors
    ///
    /// Same as [`Self::begin_submit`].
    pub async fn submit(
        &mut self,
        cart: &impl CartStore,
        gateway: &impl OrderGateway,
    ) -> Result<Outcome, CheckoutError> {
        match self.begin_submit(cart)? {
            SubmitStart::Blocked { message } => Ok(Outcome::Blocked {
                message,
                panel_closed: false,
            }),
            SubmitStart::Accepted(order) => {
                let result = gateway.place_order(&order).await;
                Ok(self.complete_submit(cart, result))
            }
        }
    }

    /// Acknowledge the confirmation: close the panel and reset the flow for
    /// the next order. The caller navigates home.
    ///
    /// # Errors
    ///
    /// [`CheckoutError::WrongStage`] unless the flow is on confirmation.
    pub fn finish(&mut self, cart: &impl CartStore) -> Result<Outcome, CheckoutError> {
        self.expect_stage(Stage::Confirmation)?;
        cart.set_open(false);
        *self = Self::new();
        Ok(Outcome::Finished)
    }

    fn expect_stage(&self, expected: Stage) -> Result<(), CheckoutError> {
        if self.stage == expected {
            Ok(())
        } else {
            Err(CheckoutError::WrongStage(self.stage))
        }
    }

    /// Reshape form values and cart items into the order payload.
    fn build_order(&self, cart: &impl CartStore) -> Result<OrderRequest, CheckoutError> {
        let number = parse_number(self.form.value(Field::HouseNumber), "houseNumber")?;
        let code = parse_number(self.form.value(Field::SecurityCode), "securityCode")?;
        let month = parse_number(self.form.value(Field::ExpiryMonth), "expiryMonth")?;
        let year = parse_number(self.form.value(Field::ExpiryYear), "expiryYear")?;

        Ok(OrderRequest {
            delivery: DeliveryInfo {
                receiver: self.form.value(Field::Receiver).to_string(),
                address: DeliveryAddress {
                    description: self.form.value(Field::Address).to_string(),
                    city: self.form.value(Field::City).to_string(),
                    zip_code: self.form.value(Field::PostalCode).to_string(),
                    number,
                    complement: self.form.value(Field::Complement).to_string(),
                },
            },
            payment: PaymentInfo {
                card: CardInfo {
                    name: self.form.value(Field::CardholderName).to_string(),
                    number: self.form.value(Field::CardNumber).to_string(),
                    code,
                    expires: CardExpiry { month, year },
                },
            },
            products: cart
                .items()
                .iter()
                .map(|item| ProductLine {
                    id: item.id,
                    price: item.unit_price,
                })
                .collect(),
        })
    }
}

fn parse_number<T: std::str::FromStr>(
    value: &str,
    field: &'static str,
) -> Result<T, CheckoutError> {
    value
        .parse()
        .map_err(|_| CheckoutError::InvalidNumber(field))
}
