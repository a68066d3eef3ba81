use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::credentials::Credential;
use crate::dispatch::{Dispatcher, RequestOptions};
use crate::error::{ClientError, ValidationError};
use crate::http_client::HttpMethod;
use crate::models::{
    Account, AccountResponse, BankAccount, BankAccountResponse, BankAccountsResponse, Transfer,
    TransferResponse,
};
use crate::oauth::AccessTokenResponse;

/// Seller-scoped client for accounts, bank accounts and transfers.
///
/// Shares the merchant client's transport and base URL; every call replaces
/// the authorization header with `OAuth <access token>`. The token is fixed at
/// construction, so concurrent calls never observe a half-updated credential.
#[derive(Debug, Clone)]
pub struct OAuthClient {
    dispatcher: Arc<Dispatcher>,
    options: RequestOptions,
}

impl OAuthClient {
    pub fn new(dispatcher: Arc<Dispatcher>, access_token: &str) -> Result<Self, ValidationError> {
        let credential = Credential::oauth(access_token)?;
        Ok(Self {
            dispatcher,
            options: RequestOptions::new().with_headers(credential.headers()),
        })
    }

    pub fn from_token(
        dispatcher: Arc<Dispatcher>,
        token: &AccessTokenResponse,
    ) -> Result<Self, ValidationError> {
        Self::new(dispatcher, &token.access_token)
    }

    /// Options attached to every call (the `OAuth` header override).
    pub fn request_options(&self) -> &RequestOptions {
        &self.options
    }

    async fn call<T, B>(&self, method: HttpMethod, path: &str, body: Option<&B>) -> Result<T, ClientError>
    where
        T: DeserializeOwned,
        B: Serialize + Sync + ?Sized,
    {
        self.dispatcher
            .request(method, path, body, &self.options)
            .await
    }

    pub async fn get_account(&self, account_id: &str) -> Result<AccountResponse, ClientError> {
        self.call(HttpMethod::Get, &format!("/accounts/{account_id}"), None::<&Value>)
            .await
    }

    pub async fn create_account(&self, account: &Account) -> Result<AccountResponse, ClientError> {
        self.call(HttpMethod::Post, "/accounts", Some(account)).await
    }

    pub async fn create_bank_account(
        &self,
        account_id: &str,
        bank_account: &BankAccount,
    ) -> Result<BankAccountResponse, ClientError> {
        self.call(
            HttpMethod::Post,
            &format!("/accounts/{account_id}/bankaccounts"),
            Some(bank_account),
        )
        .await
    }

    pub async fn get_bank_account(
        &self,
        bank_account_id: &str,
    ) -> Result<BankAccountResponse, ClientError> {
        self.call(
            HttpMethod::Get,
            &format!("/bankaccounts/{bank_account_id}"),
            None::<&Value>,
        )
        .await
    }

    pub async fn get_bank_accounts(
        &self,
        account_id: &str,
    ) -> Result<BankAccountsResponse, ClientError> {
        self.call(
            HttpMethod::Get,
            &format!("/accounts/{account_id}/bankaccounts"),
            None::<&Value>,
        )
        .await
    }

    pub async fn delete_bank_account(&self, bank_account_id: &str) -> Result<Value, ClientError> {
        self.call(
            HttpMethod::Delete,
            &format!("/bankaccounts/{bank_account_id}"),
            None::<&Value>,
        )
        .await
    }

    pub async fn update_bank_account(
        &self,
        bank_account_id: &str,
        bank_account: &BankAccount,
    ) -> Result<BankAccountResponse, ClientError> {
        self.call(
            HttpMethod::Put,
            &format!("/bankaccounts/{bank_account_id}"),
            Some(bank_account),
        )
        .await
    }

    pub async fn create_transfer(&self, transfer: &Transfer) -> Result<TransferResponse, ClientError> {
        self.call(HttpMethod::Post, "/transfers", Some(transfer)).await
    }
}
