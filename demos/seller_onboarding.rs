//! # Seller Onboarding
//!
//! Walks through the marketplace OAuth flow: prints the authorization URL,
//! exchanges the code from the redirect and lists the seller's bank accounts.
//!
//! ## Usage
//!
//! ```bash
//! export MOIP_TOKEN=... MOIP_KEY=... MOIP_APP_ID=... MOIP_APP_SECRET=...
//! cargo run -p moip-core --example seller_onboarding
//! # open the printed URL, authorize, then:
//! cargo run -p moip-core --example seller_onboarding -- '?code=...&scope=...'
//! ```

use moip_core::{Moip, OAuthGrant, OAuthScope};

const REDIRECT_URI: &str = "https://shop.example/moip/callback";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let moip = Moip::builder(std::env::var("MOIP_TOKEN")?, std::env::var("MOIP_KEY")?)
        .app_id(std::env::var("MOIP_APP_ID")?)
        .app_secret(std::env::var("MOIP_APP_SECRET")?)
        .build()?;

    let Some(query) = std::env::args().nth(1) else {
        let url = moip.oauth_url(
            REDIRECT_URI,
            &[OAuthScope::ViewOrders, OAuthScope::from("RECEIVE_FUNDS")],
        )?;
        println!("{url}");
        return Ok(());
    };

    let grant = OAuthGrant::from_query(&query);
    let token = moip.access_token(&grant, REDIRECT_URI).await?;
    let Some(account_id) = token.account_id().map(str::to_owned) else {
        eprintln!("token response did not name the seller account");
        return Ok(());
    };

    let seller = moip.oauth(&token.access_token)?;
    let accounts = seller.get_bank_accounts(&account_id).await?;
    for account in accounts.bank_accounts {
        println!("{} {} {:?}", account.id, account.bank_name, account.status);
    }

    Ok(())
}
