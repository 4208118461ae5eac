//! Full checkout flow scenarios: cart review through confirmation.

#![allow(clippy::unwrap_used)]

use mango_chili_checkout::{
    CartStore, CheckoutError, CheckoutFlow, Field, OrderGateway, Outcome, Stage, SubmitStart,
    flow::{DELIVERY_INCOMPLETE_MESSAGE, EMPTY_CART_MESSAGE},
};
use mango_chili_core::Price;
use mango_chili_integration_tests::{ScriptedGateway, cart_with};
use rust_decimal_macros::dec;

fn fill_delivery(flow: &mut CheckoutFlow) {
    flow.input(Field::Receiver, "Maria Souza");
    flow.input(Field::Address, "Rua das Flores");
    flow.input(Field::City, "Sao Paulo");
    flow.input(Field::PostalCode, "04538133");
    flow.input(Field::HouseNumber, "120");
    flow.input(Field::Complement, "apto 41");
}

fn fill_payment(flow: &mut CheckoutFlow) {
    flow.input(Field::CardholderName, "MARIA SOUZA");
    flow.input(Field::CardNumber, "4111111111111111");
    flow.input(Field::SecurityCode, "123");
    flow.input(Field::ExpiryMonth, "12");
    flow.input(Field::ExpiryYear, "28");
}

#[tokio::test]
async fn scenario_happy_path_places_order_and_confirms() {
    let cart = cart_with(&[(1, dec!(10)), (2, dec!(5.5))]);
    let gateway = ScriptedGateway::succeeding("a4f9");
    let mut flow = CheckoutFlow::new();

    assert_eq!(cart.total(), Price::new(dec!(15.5)));

    assert_eq!(
        flow.continue_to_delivery(&cart).unwrap(),
        Outcome::Advanced(Stage::DeliveryForm)
    );
    fill_delivery(&mut flow);
    assert_eq!(
        flow.continue_to_payment().unwrap(),
        Outcome::Advanced(Stage::PaymentForm)
    );
    fill_payment(&mut flow);

    let Outcome::Completed(receipt) = flow.submit(&cart, &gateway).await.unwrap() else {
        panic!("expected completion");
    };
    // The displayed order id is the one the gateway returned.
    assert_eq!(receipt.order_id.as_str(), "a4f9");
    assert_eq!(flow.receipt().unwrap().order_id.as_str(), "a4f9");
    assert_eq!(flow.stage(), Stage::Confirmation);
    // The cart is cleared in the same reactive unit.
    assert!(cart.items().is_empty());

    // The submitted payload carried one line per cart item.
    let requests = gateway.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].products.len(), 2);
    assert_eq!(requests[0].products[1].price, dec!(5.5));
    assert_eq!(requests[0].delivery.address.zip_code, "04538-133");

    // Finish closes the panel and resets for the next order.
    assert_eq!(flow.finish(&cart).unwrap(), Outcome::Finished);
    assert!(!cart.is_open());
    assert_eq!(flow.stage(), Stage::Cart);
}

#[tokio::test]
async fn scenario_empty_cart_cannot_start_checkout() {
    let cart = cart_with(&[]);
    let mut flow = CheckoutFlow::new();

    let outcome = flow.continue_to_delivery(&cart).unwrap();
    assert_eq!(
        outcome,
        Outcome::Blocked {
            message: EMPTY_CART_MESSAGE,
            panel_closed: true,
        }
    );
    assert_eq!(flow.stage(), Stage::Cart);
    assert!(!cart.is_open());
    assert_eq!(cart.total(), Price::ZERO);
}

#[tokio::test]
async fn scenario_invalid_delivery_field_keeps_user_on_delivery() {
    let cart = cart_with(&[(1, dec!(60.9))]);
    let mut flow = CheckoutFlow::new();
    flow.continue_to_delivery(&cart).unwrap();

    fill_delivery(&mut flow);
    // One bad postal code is enough to block.
    flow.input(Field::PostalCode, "1234-56");

    let outcome = flow.continue_to_payment().unwrap();
    assert_eq!(
        outcome,
        Outcome::Blocked {
            message: DELIVERY_INCOMPLETE_MESSAGE,
            panel_closed: false,
        }
    );
    assert_eq!(flow.stage(), Stage::DeliveryForm);
    // All delivery fields were force-touched; only the bad one shows an error.
    for field in Field::DELIVERY {
        assert!(flow.form().is_touched(field));
    }
    assert!(flow.form().shows_error(Field::PostalCode));
    assert!(!flow.form().shows_error(Field::Receiver));
}

#[tokio::test]
async fn scenario_removal_during_review_updates_total() {
    let cart = cart_with(&[(1, dec!(10)), (2, dec!(5.5))]);
    cart.remove(mango_chili_core::MenuItemId::new(1));
    assert_eq!(cart.items().len(), 1);
    assert_eq!(cart.total(), Price::new(dec!(5.5)));
}

#[tokio::test]
async fn scenario_gateway_failure_then_successful_retry() {
    let cart = cart_with(&[(1, dec!(60.9))]);
    let gateway = ScriptedGateway::failing();
    let mut flow = CheckoutFlow::new();
    flow.continue_to_delivery(&cart).unwrap();
    fill_delivery(&mut flow);
    flow.continue_to_payment().unwrap();
    fill_payment(&mut flow);

    let outcome = flow.submit(&cart, &gateway).await.unwrap();
    assert!(matches!(outcome, Outcome::Failed { .. }));
    assert_eq!(flow.stage(), Stage::PaymentForm);
    assert!(flow.submit_error().is_some());
    assert!(!cart.items().is_empty());

    gateway.push_ok("second-try");
    let Outcome::Completed(receipt) = flow.submit(&cart, &gateway).await.unwrap() else {
        panic!("expected completion on retry");
    };
    assert_eq!(receipt.order_id.as_str(), "second-try");
    assert_eq!(gateway.calls(), 2);
    assert!(flow.submit_error().is_none());
}

#[tokio::test]
async fn scenario_duplicate_submit_while_first_in_flight_is_rejected() {
    let cart = cart_with(&[(1, dec!(10))]);
    let gateway = ScriptedGateway::succeeding("only-once");
    let mut flow = CheckoutFlow::new();
    flow.continue_to_delivery(&cart).unwrap();
    fill_delivery(&mut flow);
    flow.continue_to_payment().unwrap();
    fill_payment(&mut flow);

    let SubmitStart::Accepted(order) = flow.begin_submit(&cart).unwrap() else {
        panic!("expected acceptance");
    };

    // Between acceptance and completion a second submit hits the guard.
    assert_eq!(
        flow.begin_submit(&cart),
        Err(CheckoutError::SubmissionInFlight)
    );

    let outcome = flow.complete_submit(&cart, gateway.place_order(&order).await);
    let Outcome::Completed(receipt) = outcome else {
        panic!("expected completion");
    };
    assert_eq!(receipt.order_id.as_str(), "only-once");
    assert_eq!(gateway.calls(), 1);
}

#[tokio::test]
async fn scenario_back_navigation_preserves_entered_values() {
    let cart = cart_with(&[(1, dec!(10))]);
    let mut flow = CheckoutFlow::new();
    flow.continue_to_delivery(&cart).unwrap();
    fill_delivery(&mut flow);
    flow.continue_to_payment().unwrap();

    flow.back().unwrap();
    assert_eq!(flow.stage(), Stage::DeliveryForm);
    assert_eq!(flow.form().value(Field::Receiver), "Maria Souza");

    // Forward again without retyping anything.
    assert_eq!(
        flow.continue_to_payment().unwrap(),
        Outcome::Advanced(Stage::PaymentForm)
    );
}

#[tokio::test]
async fn scenario_confirmation_unreachable_without_submission() {
    let cart = cart_with(&[(1, dec!(10))]);
    let mut flow = CheckoutFlow::new();
    flow.continue_to_delivery(&cart).unwrap();

    // No action on the form stages leads to Confirmation directly.
    assert_eq!(
        flow.finish(&cart),
        Err(CheckoutError::WrongStage(Stage::DeliveryForm))
    );
}
