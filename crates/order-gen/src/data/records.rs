use std::fmt;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Catalog product identifier. The catalog file may use either strings or
/// integers; both compare by value and serialize as written.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ProductId {
    Number(u64),
    Text(String),
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum PaymentMethod {
    #[serde(rename = "Credit Card")]
    CreditCard,
    #[serde(rename = "Debit Card")]
    DebitCard,
    #[serde(rename = "PayPal")]
    PayPal,
    #[serde(rename = "Digital Wallet")]
    DigitalWallet,
    #[serde(rename = "Bank Transfer")]
    BankTransfer,
    #[serde(rename = "Cash on Delivery")]
    CashOnDelivery,
}

impl PaymentMethod {
    pub const ALL: [PaymentMethod; 6] = [
        Self::CreditCard,
        Self::DebitCard,
        Self::PayPal,
        Self::DigitalWallet,
        Self::BankTransfer,
        Self::CashOnDelivery,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::CreditCard => "Credit Card",
            Self::DebitCard => "Debit Card",
            Self::PayPal => "PayPal",
            Self::DigitalWallet => "Digital Wallet",
            Self::BankTransfer => "Bank Transfer",
            Self::CashOnDelivery => "Cash on Delivery",
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum ShippingMethod {
    #[serde(rename = "Standard")]
    Standard,
    #[serde(rename = "Expedited")]
    Expedited,
    #[serde(rename = "Next Day")]
    NextDay,
}

impl ShippingMethod {
    pub const ALL: [ShippingMethod; 3] = [Self::Standard, Self::Expedited, Self::NextDay];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Standard => "Standard",
            Self::Expedited => "Expedited",
            Self::NextDay => "Next Day",
        }
    }
}

/// Relative selection weights, one field per [`PaymentMethod`] variant.
/// `as_slice` keeps the same order as [`PaymentMethod::ALL`].
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaymentWeights {
    pub credit_card: u32,
    pub debit_card: u32,
    pub paypal: u32,
    pub digital_wallet: u32,
    pub bank_transfer: u32,
    pub cash_on_delivery: u32,
}

impl Default for PaymentWeights {
    fn default() -> Self {
        Self {
            credit_card: 75,
            debit_card: 5,
            paypal: 5,
            digital_wallet: 5,
            bank_transfer: 5,
            cash_on_delivery: 5,
        }
    }
}

impl PaymentWeights {
    pub const fn as_slice(&self) -> [u32; 6] {
        [
            self.credit_card,
            self.debit_card,
            self.paypal,
            self.digital_wallet,
            self.bank_transfer,
            self.cash_on_delivery,
        ]
    }

    pub fn total(&self) -> u64 {
        self.as_slice().iter().map(|w| u64::from(*w)).sum()
    }
}

/// Same shape as [`PaymentWeights`], ordered as [`ShippingMethod::ALL`].
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShippingWeights {
    pub standard: u32,
    pub expedited: u32,
    pub next_day: u32,
}

impl Default for ShippingWeights {
    fn default() -> Self {
        Self {
            standard: 70,
            expedited: 20,
            next_day: 10,
        }
    }
}

impl ShippingWeights {
    pub const fn as_slice(&self) -> [u32; 3] {
        [self.standard, self.expedited, self.next_day]
    }

    pub fn total(&self) -> u64 {
        self.as_slice().iter().map(|w| u64::from(*w)).sum()
    }
}

/// Coupon codes and their discount rate, applied as a fraction of the
/// order total.
pub const DISCOUNT_COUPONS: [(&str, f64); 4] = [
    ("FRIDAYFIVEOFF", 0.05),
    ("BLACK10", 0.10),
    ("BF15DISCOUNT", 0.15),
    ("20OFFFORYOUBF", 0.20),
];

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AppliedCoupon {
    pub code: String,
    pub rate: f64,
    pub value: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    pub product_id: ProductId,
    pub quantity: u32,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub order_number: u64,
    pub user_id: u32,
    pub ordered_at: DateTime<Utc>,
    pub items: Vec<OrderItem>,
    pub payment_method: PaymentMethod,
    pub shipping_method: ShippingMethod,
    pub total: f64,
    pub subscriber: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coupon: Option<AppliedCoupon>,
    pub sales_tax: f64,
    pub gift_wrap: bool,
    pub shipping_cost: f64,
    pub estimated_delivery: NaiveDate,
    pub net_total: f64,
}
