//! # Order With Boleto
//!
//! Creates a customer, an order for that customer and a boleto payment in
//! the sandbox, then prints the payment status.
//!
//! ## Usage
//!
//! ```bash
//! export MOIP_TOKEN=your_token MOIP_KEY=your_key
//! cargo run -p moip-core --example order_with_boleto
//! ```

use moip_core::{
    Boleto, BoletoInstructionLines, ClientError, Customer, FundingInstrument, Item, Moip, Order,
    OrderCustomer, Payment, Phone, TaxDocument,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let moip = Moip::builder(std::env::var("MOIP_TOKEN")?, std::env::var("MOIP_KEY")?)
        .diagnostics(true)
        .build()?;

    let mut customer = Customer::new("cliente-demo-01", "Joao Sousa", "joao.sousa@example.com");
    customer.tax_document = TaxDocument::cpf("22222222222");
    customer.phone = Some(Phone::brazil("11", "66778899"));
    let customer = moip.create_customer(&customer).await?;
    let customer_id = customer.customer.id.unwrap_or_default();
    println!("customer {customer_id}");

    let order = Order::new(
        "pedido-demo-01",
        vec![Item::new("Camiseta", 2, 2990)],
        OrderCustomer::Existing { id: customer_id },
    );
    let order = moip.create_order(&order).await?;
    println!("order {} ({:?})", order.id, order.status);

    let payment = Payment::new(FundingInstrument::boleto(Boleto {
        expiration_date: String::from("2030-12-31"),
        instruction_lines: BoletoInstructionLines {
            first: Some(String::from("Nao receber apos o vencimento")),
            second: None,
            third: None,
        },
        logo_uri: None,
        line_code: None,
    }));

    match moip.create_payment(&order.id, &payment).await {
        Ok(payment) => println!("payment {} ({:?})", payment.id, payment.status),
        Err(ClientError::Api(error)) => {
            for detail in error.errors() {
                eprintln!("rejected: {detail}");
            }
        }
        Err(error) => return Err(error.into()),
    }

    Ok(())
}
