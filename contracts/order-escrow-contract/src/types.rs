use soroban_sdk::{contracttype, Address};

#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    Order(u64),
    OrderCounter,
    CustomerOrders(Address),
    ProviderOrders(Address),
}

/// Lifecycle stage of an order. Transitions form a one-way DAG:
/// Created -> Shipped -> Delivered
/// Created -> Shipped -> Disputed
/// Created -> Refunded
/// Delivered, Disputed and Refunded are terminal.
#[contracttype]
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum OrderStatus {
    Created,
    Shipped,
    Delivered,
    Disputed,
    Refunded,
}

/// An escrowed order. The contract holds `total_amount` in custody at
/// creation and releases it in two tranches: `first_payment` (70%) when the
/// provider ships, `second_payment` (the remainder, so the two always sum to
/// `total_amount` exactly) when the customer confirms delivery.
#[contracttype]
#[derive(Clone, Debug)]
pub struct Order {
    pub id: u64,
    pub customer: Address,
    pub provider: Address,
    pub token: Address,
    pub total_amount: i128,
    pub first_payment: i128,
    pub second_payment: i128,
    pub status: OrderStatus,
    pub created_at: u64,
    pub deadline: u64,
    pub first_payment_released: bool,
    pub second_payment_released: bool,
}

/// Action availability for an order, derived from status and current time.
/// At most one of the flags is true for any (status, time) combination.
#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct OrderActions {
    pub status: OrderStatus,
    pub can_ship: bool,
    pub can_confirm: bool,
    pub can_refund: bool,
    pub can_dispute: bool,
}

#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct PaymentSummary {
    pub total_amount: i128,
    pub paid_amount: i128,
    pub remaining_amount: i128,
    pub first_payment_released: bool,
    pub second_payment_released: bool,
}

impl Order {
    /// Value released to the provider so far.
    pub fn paid_amount(&self) -> i128 {
        let mut paid = 0;
        if self.first_payment_released {
            paid += self.first_payment;
        }
        if self.second_payment_released {
            paid += self.second_payment;
        }
        paid
    }

    pub fn actions_at(&self, now: u64) -> OrderActions {
        OrderActions {
            status: self.status,
            can_ship: self.status == OrderStatus::Created && now <= self.deadline,
            can_confirm: self.status == OrderStatus::Shipped,
            can_refund: self.status == OrderStatus::Created && now > self.deadline,
            can_dispute: self.status == OrderStatus::Shipped && now <= self.deadline,
        }
    }
}
