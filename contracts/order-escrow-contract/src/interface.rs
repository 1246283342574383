use crate::errors::EscrowError;
use crate::types::{Order, OrderActions, OrderStatus, PaymentSummary};
use soroban_sdk::{Address, Env, Vec};

/// OrderInterface covers order creation and the registry counter.
pub trait OrderInterface {
    /// Total number of orders ever created. Also the id of the most recent
    /// order, since ids are assigned sequentially starting at 1.
    fn get_order_count(env: &Env) -> u64;

    /// Creates a new escrowed order between a customer and a provider.
    ///
    /// # Arguments
    /// * `customer` - The paying party; must authorize the call
    /// * `provider` - The party expected to ship; must differ from `customer`
    /// * `token` - The token contract the order is funded and settled in
    /// * `amount` - The total order value, pulled into contract custody
    ///
    /// # Returns
    /// * `Result<u64, EscrowError>` - The new order id on success
    ///
    /// # Business Logic
    /// * Transfers `amount` from the customer to the contract
    /// * Splits the amount into a 70% shipment tranche and a 30% delivery
    ///   tranche (the split is exact: the second tranche absorbs rounding)
    /// * Fixes the order deadline at creation time + 7 days
    /// * Records the order id in both parties' order lists
    fn create_order(
        env: Env,
        customer: Address,
        provider: Address,
        token: Address,
        amount: i128,
    ) -> Result<u64, EscrowError>;
}

/// ShippingInterface covers the provider's side of fulfillment.
pub trait ShippingInterface {
    /// Provider marks the order as shipped and receives the first tranche.
    ///
    /// Only valid while the order is `Created` and the deadline has not
    /// passed. Releases 70% of the total to the provider and moves the
    /// order to `Shipped`.
    fn mark_as_shipped(env: Env, caller: Address, order_id: u64) -> Result<(), EscrowError>;
}

/// DeliveryInterface covers the customer's delivery confirmation.
pub trait DeliveryInterface {
    /// Customer confirms delivery and releases the second tranche.
    ///
    /// Only valid while the order is `Shipped`. There is no deadline gate:
    /// confirmation is always permitted once shipped. Moves the order to
    /// `Delivered`, which is terminal.
    fn confirm_delivery(env: Env, caller: Address, order_id: u64) -> Result<(), EscrowError>;
}

/// RefundInterface covers recovery of funds from never-shipped orders.
pub trait RefundInterface {
    /// Customer reclaims the full amount of an order that was never shipped.
    ///
    /// Only valid while the order is `Created` and only after the deadline
    /// has elapsed. Returns the entire custody balance to the customer and
    /// moves the order to `Refunded`, which is terminal. Neither tranche
    /// flag is set: no tranche was ever released.
    fn request_refund(env: Env, caller: Address, order_id: u64) -> Result<(), EscrowError>;
}

/// DisputeInterface covers freezing a shipped order.
pub trait DisputeInterface {
    /// Customer disputes a shipped order before the deadline.
    ///
    /// Moves no funds: the delivery tranche stays frozen in contract custody
    /// indefinitely. Resolution of disputed funds is out of scope for this
    /// contract. Moves the order to `Disputed`, which is terminal.
    ///
    /// The dispute window closes at the order's original deadline, the same
    /// cutoff that gates shipping; it is not reset when the order ships.
    fn dispute_order(env: Env, caller: Address, order_id: u64) -> Result<(), EscrowError>;
}

/// ViewInterface covers read-only queries. None of these mutate state or
/// touch the token contract.
pub trait ViewInterface {
    /// Full order record by id.
    fn get_order(env: Env, order_id: u64) -> Result<Order, EscrowError>;

    /// Current status of an order.
    fn get_order_status(env: Env, order_id: u64) -> Result<OrderStatus, EscrowError>;

    /// Which actions are currently available on an order, derived from its
    /// status and the current ledger time. All flags are false for terminal
    /// orders.
    fn get_order_actions(env: Env, order_id: u64) -> Result<OrderActions, EscrowError>;

    /// Payment bookkeeping for an order: total, released so far, and the
    /// amount still held in custody.
    fn get_payment_summary(env: Env, order_id: u64) -> Result<PaymentSummary, EscrowError>;

    /// Ids of every order placed by the given customer, in creation order.
    fn get_customer_orders(env: Env, customer: Address) -> Vec<u64>;

    /// Ids of every order assigned to the given provider, in creation order.
    fn get_provider_orders(env: Env, provider: Address) -> Vec<u64>;
}
