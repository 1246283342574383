use soroban_sdk::{contracttype, symbol_short, Address, Symbol};

// Symbol for order creation events.
pub const CREATED: Symbol = symbol_short!("created");

// Symbol for shipment events.
pub const SHIPPED: Symbol = symbol_short!("shipped");

// Symbol for delivery confirmation events.
pub const DELIVERED: Symbol = symbol_short!("delivered");

// Symbol for refund events.
pub const REFUNDED: Symbol = symbol_short!("refunded");

// Symbol for dispute events.
pub const DISPUTED: Symbol = symbol_short!("disputed");

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct OrderCreated {
    pub order_id: u64,
    pub customer: Address,
    pub provider: Address,
    pub total_amount: i128,
    pub deadline: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct OrderShipped {
    pub order_id: u64,
    pub amount: i128,
    pub timestamp: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct OrderDelivered {
    pub order_id: u64,
    pub amount: i128,
    pub timestamp: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct OrderRefunded {
    pub order_id: u64,
    pub amount: i128,
    pub timestamp: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct OrderDisputed {
    pub order_id: u64,
    pub timestamp: u64,
}
