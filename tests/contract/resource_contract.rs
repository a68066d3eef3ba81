//! Contract tests: every resource operation issues the documented verb and
//! URL with the right credential.
//!
//! The transport answers 404 so the checks do not depend on response decoding.

#[path = "../common/mod.rs"]
mod common;

use std::fmt::Debug;
use std::sync::Arc;

use moip_core::{
    Account, BankAccount, Boleto, ClientError, Customer, FundingInstrument, HttpMethod, Item,
    Order, OrderCustomer, Payment, Plan, Subscriber, Subscription, Transfer, WebhookEvent,
};
use serde_json::json;

use common::{ScriptedTransport, BASIC_AUTH};

const SANDBOX_V2: &str = "https://sandbox.moip.com.br/v2";
const SANDBOX_V1: &str = "https://sandbox.moip.com.br/assinaturas/v1";
const SELLER_TOKEN: &str = "7d1f0f1b6f3c4b5c8f1e2a3b4c5d6e7f_v2";

fn not_found() -> Arc<ScriptedTransport> {
    ScriptedTransport::status(
        404,
        r#"{"errors":[{"code":"REG-001","path":"id","description":"not found"}]}"#,
    )
}

fn assert_rejected<T: Debug>(result: Result<T, ClientError>) {
    let error = result.expect_err("404 should surface as an error");
    assert_eq!(error.status(), Some(404));
}

fn assert_sent(transport: &ScriptedTransport, method: HttpMethod, url: &str, auth: &str) {
    let request = transport.last_request();
    assert_eq!(request.method, method, "verb for {url}");
    assert_eq!(request.url, url);
    assert_eq!(request.header("authorization"), Some(auth), "credential for {url}");
}

fn order() -> Order {
    Order::new(
        "pedido-0001",
        vec![Item::new("Camiseta", 1, 2990)],
        OrderCustomer::Existing {
            id: String::from("CUS-7ABC123DEF45"),
        },
    )
}

fn boleto_payment() -> Payment {
    Payment::new(FundingInstrument::boleto(Boleto {
        expiration_date: String::from("2030-12-31"),
        instruction_lines: Default::default(),
        logo_uri: None,
        line_code: None,
    }))
}

fn bank_account() -> BankAccount {
    serde_json::from_value(json!({
        "type": "CHECKING",
        "bankNumber": "237",
        "agencyNumber": 12345,
        "agencyCheckNumber": 0,
        "accountNumber": 12345678,
        "accountCheckNumber": 7,
        "holder": {
            "fullname": "Demo Moip",
            "taxDocument": {"type": "CPF", "number": "622.134.533-22"}
        }
    }))
    .expect("bank account fixture is valid")
}

fn account() -> Account {
    serde_json::from_value(json!({
        "type": "MERCHANT",
        "email": {"address": "dev.moip@labs.moip.com.br"},
        "person": {
            "name": "Runscope",
            "lastName": "Random",
            "birthDate": "1990-01-01",
            "taxDocument": {"type": "CPF", "number": "123.456.798-91"},
            "phone": {"countryCode": "55", "areaCode": "11", "number": "965213244"},
            "address": {
                "street": "Av. Brigadeiro Faria Lima",
                "streetNumber": "2927",
                "district": "Itaim",
                "city": "Sao Paulo",
                "state": "SP",
                "country": "BRA",
                "zipCode": "01234000"
            }
        }
    }))
    .expect("account fixture is valid")
}

fn plan() -> Plan {
    serde_json::from_value(json!({
        "code": "plano01",
        "name": "Plano Especial",
        "amount": 990,
        "interval": {"length": 1, "unit": "MONTH"}
    }))
    .expect("plan fixture is valid")
}

fn subscriber() -> Subscriber {
    serde_json::from_value(json!({
        "code": "cliente01",
        "email": "nome@exemplo.com.br",
        "fullname": "Nome Sobrenome",
        "billing_info": {
            "credit_card": {
                "holder_name": "Nome Completo",
                "number": "4111111111111111",
                "expiration_month": "06",
                "expiration_year": "30"
            }
        }
    }))
    .expect("subscriber fixture is valid")
}

fn subscription() -> Subscription {
    serde_json::from_value(json!({
        "code": "assinatura01",
        "plan": {"code": "plano01"},
        "customer": {"code": "cliente01"}
    }))
    .expect("subscription fixture is valid")
}

// =============================================================================
// Merchant resources (Basic credential, v2)
// =============================================================================

#[tokio::test]
async fn customer_order_and_payment_operations_follow_the_contract() {
    let transport = not_found();
    let moip = common::sandbox_client(transport.clone());

    let customer = Customer::new("cliente-01", "Joao Sousa", "joao@example.com");
    assert_rejected(moip.create_customer(&customer).await);
    assert_sent(&transport, HttpMethod::Post, &format!("{SANDBOX_V2}/customers"), BASIC_AUTH);

    assert_rejected(moip.get_customer("CUS-1").await);
    assert_sent(&transport, HttpMethod::Get, &format!("{SANDBOX_V2}/customers/CUS-1"), BASIC_AUTH);

    assert_rejected(moip.create_order(&order()).await);
    assert_sent(&transport, HttpMethod::Post, &format!("{SANDBOX_V2}/orders"), BASIC_AUTH);

    assert_rejected(moip.get_order("ORD-1").await);
    assert_sent(&transport, HttpMethod::Get, &format!("{SANDBOX_V2}/orders/ORD-1"), BASIC_AUTH);

    assert_rejected(moip.create_payment("ORD-1", &boleto_payment()).await);
    assert_sent(
        &transport,
        HttpMethod::Post,
        &format!("{SANDBOX_V2}/orders/ORD-1/payments"),
        BASIC_AUTH,
    );

    assert_rejected(moip.get_payment("PAY-1").await);
    assert_sent(&transport, HttpMethod::Get, &format!("{SANDBOX_V2}/payments/PAY-1"), BASIC_AUTH);
}

#[tokio::test]
async fn request_bodies_carry_the_serialized_resource() {
    let transport = not_found();
    let moip = common::sandbox_client(transport.clone());

    assert_rejected(moip.create_order(&order()).await);

    let body = common::json_body(&transport.last_request());
    assert_eq!(body["ownId"], "pedido-0001");
    assert_eq!(body["amount"]["currency"], "BRL");
    assert_eq!(body["items"][0]["price"], 2990);
    assert_eq!(body["customer"]["id"], "CUS-7ABC123DEF45");
}

#[tokio::test]
async fn notification_operations_follow_the_contract() {
    let transport = not_found();
    let moip = common::sandbox_client(transport.clone());

    assert_rejected(
        moip.set_notification(
            vec![WebhookEvent::OrderPaid, WebhookEvent::from("PAYMENT.*")],
            "https://shop.example/hooks",
        )
        .await,
    );
    assert_sent(
        &transport,
        HttpMethod::Post,
        &format!("{SANDBOX_V2}/preferences/notifications"),
        BASIC_AUTH,
    );
    let body = common::json_body(&transport.last_request());
    assert_eq!(body["events"], json!(["ORDER.PAID", "PAYMENT.*"]));
    assert_eq!(body["media"], "WEBHOOK");

    assert_rejected(moip.get_notifications().await);
    assert_sent(
        &transport,
        HttpMethod::Get,
        &format!("{SANDBOX_V2}/preferences/notifications"),
        BASIC_AUTH,
    );

    assert_rejected(moip.delete_notification("NPR-1").await);
    assert_sent(
        &transport,
        HttpMethod::Delete,
        &format!("{SANDBOX_V2}/preferences/notifications/NPR-1"),
        BASIC_AUTH,
    );

    assert_rejected(moip.resend_webhook("PAY-1", Some(WebhookEvent::PaymentAuthorized)).await);
    assert_sent(&transport, HttpMethod::Post, &format!("{SANDBOX_V2}/webhooks/"), BASIC_AUTH);
    let body = common::json_body(&transport.last_request());
    assert_eq!(body, json!({"resourceId": "PAY-1", "event": "PAYMENT.AUTHORIZED"}));
}

// =============================================================================
// Seller resources (OAuth credential, v2)
// =============================================================================

#[tokio::test]
async fn seller_operations_use_the_oauth_credential() {
    let transport = not_found();
    let moip = common::sandbox_client(transport.clone());
    let seller = moip.oauth(SELLER_TOKEN).expect("token is valid");
    let auth = format!("OAuth {SELLER_TOKEN}");

    assert_rejected(seller.create_account(&account()).await);
    assert_sent(&transport, HttpMethod::Post, &format!("{SANDBOX_V2}/accounts"), &auth);

    assert_rejected(seller.get_account("MPA-1").await);
    assert_sent(&transport, HttpMethod::Get, &format!("{SANDBOX_V2}/accounts/MPA-1"), &auth);

    assert_rejected(seller.create_bank_account("MPA-1", &bank_account()).await);
    assert_sent(
        &transport,
        HttpMethod::Post,
        &format!("{SANDBOX_V2}/accounts/MPA-1/bankaccounts"),
        &auth,
    );

    assert_rejected(seller.get_bank_accounts("MPA-1").await);
    assert_sent(
        &transport,
        HttpMethod::Get,
        &format!("{SANDBOX_V2}/accounts/MPA-1/bankaccounts"),
        &auth,
    );

    assert_rejected(seller.get_bank_account("BKA-1").await);
    assert_sent(&transport, HttpMethod::Get, &format!("{SANDBOX_V2}/bankaccounts/BKA-1"), &auth);

    assert_rejected(seller.update_bank_account("BKA-1", &bank_account()).await);
    assert_sent(&transport, HttpMethod::Put, &format!("{SANDBOX_V2}/bankaccounts/BKA-1"), &auth);

    assert_rejected(seller.delete_bank_account("BKA-1").await);
    assert_sent(&transport, HttpMethod::Delete, &format!("{SANDBOX_V2}/bankaccounts/BKA-1"), &auth);

    assert_rejected(seller.create_transfer(&Transfer::to_moip_account(500, "MPA-2")).await);
    assert_sent(&transport, HttpMethod::Post, &format!("{SANDBOX_V2}/transfers"), &auth);
}

#[tokio::test]
async fn merchant_client_keeps_basic_credential_after_deriving_seller_client() {
    let transport = not_found();
    let moip = common::sandbox_client(transport.clone());
    let _seller = moip.oauth(SELLER_TOKEN).expect("token is valid");

    assert_rejected(moip.get_order("ORD-1").await);
    assert_sent(&transport, HttpMethod::Get, &format!("{SANDBOX_V2}/orders/ORD-1"), BASIC_AUTH);
}

// =============================================================================
// Recurring billing (Basic credential, /assinaturas/v1)
// =============================================================================

#[tokio::test]
async fn plan_operations_follow_the_contract() {
    let transport = not_found();
    let billing = common::sandbox_client(transport.clone()).subscriptions();

    assert_rejected(billing.create_plan(&plan()).await);
    assert_sent(&transport, HttpMethod::Post, &format!("{SANDBOX_V1}/plans"), BASIC_AUTH);

    assert_rejected(billing.get_plans().await);
    assert_sent(&transport, HttpMethod::Get, &format!("{SANDBOX_V1}/plans"), BASIC_AUTH);

    assert_rejected(billing.get_plan("plano01").await);
    assert_sent(&transport, HttpMethod::Get, &format!("{SANDBOX_V1}/plans/plano01"), BASIC_AUTH);

    assert_rejected(billing.activate_plan("plano01").await);
    assert_sent(
        &transport,
        HttpMethod::Put,
        &format!("{SANDBOX_V1}/plans/plano01/activate"),
        BASIC_AUTH,
    );

    assert_rejected(billing.inactivate_plan("plano01").await);
    assert_sent(
        &transport,
        HttpMethod::Put,
        &format!("{SANDBOX_V1}/plans/plano01/inactivate"),
        BASIC_AUTH,
    );

    assert_rejected(billing.update_plan("plano01", &plan()).await);
    assert_sent(&transport, HttpMethod::Put, &format!("{SANDBOX_V1}/plans/plano01"), BASIC_AUTH);
}

#[tokio::test]
async fn subscriber_operations_follow_the_contract() {
    let transport = not_found();
    let billing = common::sandbox_client(transport.clone()).subscriptions();

    assert_rejected(billing.create_customer(&subscriber(), false).await);
    assert_sent(
        &transport,
        HttpMethod::Post,
        &format!("{SANDBOX_V1}/customers?new_vault=false"),
        BASIC_AUTH,
    );

    assert_rejected(billing.get_customers().await);
    assert_sent(&transport, HttpMethod::Get, &format!("{SANDBOX_V1}/customers"), BASIC_AUTH);

    assert_rejected(billing.get_customer("cliente01").await);
    assert_sent(
        &transport,
        HttpMethod::Get,
        &format!("{SANDBOX_V1}/customers/cliente01"),
        BASIC_AUTH,
    );

    assert_rejected(billing.update_customer("cliente01", &subscriber()).await);
    assert_sent(
        &transport,
        HttpMethod::Put,
        &format!("{SANDBOX_V1}/customers/cliente01"),
        BASIC_AUTH,
    );

    let billing_info = subscriber().billing_info.expect("fixture carries billing info");
    assert_rejected(billing.update_customer_billing("cliente01", &billing_info).await);
    assert_sent(
        &transport,
        HttpMethod::Put,
        &format!("{SANDBOX_V1}/customers/cliente01/billing_infos"),
        BASIC_AUTH,
    );
}

#[tokio::test]
async fn subscription_operations_follow_the_contract() {
    let transport = not_found();
    let billing = common::sandbox_client(transport.clone()).subscriptions();

    assert_rejected(billing.create_subscription(&subscription(), true).await);
    assert_sent(
        &transport,
        HttpMethod::Post,
        &format!("{SANDBOX_V1}/subscriptions?new_customer=true"),
        BASIC_AUTH,
    );

    assert_rejected(billing.get_subscriptions().await);
    assert_sent(&transport, HttpMethod::Get, &format!("{SANDBOX_V1}/subscriptions"), BASIC_AUTH);

    assert_rejected(billing.get_subscription("assinatura01").await);
    assert_sent(
        &transport,
        HttpMethod::Get,
        &format!("{SANDBOX_V1}/subscriptions/assinatura01"),
        BASIC_AUTH,
    );

    assert_rejected(billing.suspend_subscription("assinatura01").await);
    assert_sent(
        &transport,
        HttpMethod::Put,
        &format!("{SANDBOX_V1}/subscriptions/assinatura01/suspend"),
        BASIC_AUTH,
    );

    assert_rejected(billing.activate_subscription("assinatura01").await);
    assert_sent(
        &transport,
        HttpMethod::Put,
        &format!("{SANDBOX_V1}/subscriptions/assinatura01/activate"),
        BASIC_AUTH,
    );

    assert_rejected(billing.update_subscription("assinatura01", &subscription()).await);
    assert_sent(
        &transport,
        HttpMethod::Put,
        &format!("{SANDBOX_V1}/subscriptions/assinatura01"),
        BASIC_AUTH,
    );

    assert_rejected(billing.get_subscription_invoices("assinatura01").await);
    assert_sent(
        &transport,
        HttpMethod::Get,
        &format!("{SANDBOX_V1}/subscriptions/assinatura01/invoices"),
        BASIC_AUTH,
    );

    assert_rejected(billing.get_invoice("13").await);
    assert_sent(&transport, HttpMethod::Get, &format!("{SANDBOX_V1}/invoices/13"), BASIC_AUTH);

    assert_rejected(billing.get_invoice_payments("13").await);
    assert_sent(
        &transport,
        HttpMethod::Get,
        &format!("{SANDBOX_V1}/invoices/13/payments"),
        BASIC_AUTH,
    );

    assert_rejected(billing.get_payment("PAY-1").await);
    assert_sent(&transport, HttpMethod::Get, &format!("{SANDBOX_V1}/payments/PAY-1"), BASIC_AUTH);
}
