//! Request and response shapes of the Moip v2 API.
//!
//! These mirror the remote JSON (camelCase members) and carry no invariants
//! of their own. Unknown members are ignored on decode, optional members are
//! omitted on encode.

pub mod account;
pub mod bank_account;
pub mod common;
pub mod customer;
pub mod order;
pub mod payment;
pub mod subscription;
pub mod transfer;
pub mod webhook;

pub use account::{
    Account, AccountResponse, AccountType, BusinessSegment, Company, EmailAddress, MainActivity,
    Person, TosAcceptance,
};
pub use bank_account::{
    BankAccount, BankAccountHolder, BankAccountResponse, BankAccountStatus, BankAccountType,
    BankAccountsResponse,
};
pub use common::{
    Address, Amount, Event, Hateoas, Links, MoipAccount, Phone, Receiver, ReceiverAmount,
    ResponseAmount, Subtotals, Summary, TaxDocument, TaxDocumentType,
};
pub use customer::{Customer, CustomerResponse};
pub use order::{Item, Order, OrderAmount, OrderCustomer, OrderResponse, OrderStatus};
pub use payment::{
    Boleto, BoletoInstructionLines, CardHolder, CreditCard, Fee, FeeType, FundingInstrument,
    OnlineBankDebit, Payment, PaymentMethod, PaymentResponse, PaymentStatus,
};
pub use subscription::{
    BillingCard, BillingInfo, BillingMethod, CodeRef, IntervalUnit, Invoice,
    InvoicePaymentsResponse, InvoiceStatus, InvoicesResponse, Plan, PlanInterval, PlanStatus,
    PlansResponse, Subscriber, SubscriberAddress, SubscribersResponse, Subscription,
    SubscriptionStatus, SubscriptionsResponse, Trial,
};
pub use transfer::{
    Transfer, TransferInstrument, TransferMethod, TransferResponse, TransferStatus,
};
pub use webhook::{
    NotificationResource, Webhook, WebhookEvent, WebhookNotification, WebhookResendRequest,
    WebhookResendResponse, WebhookResponse, WEBHOOK_MEDIA,
};
