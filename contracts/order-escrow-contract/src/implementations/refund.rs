use crate::{
    errors::EscrowError,
    event::{self, OrderRefunded},
    interface::RefundInterface,
    types::{DataKey, Order, OrderStatus},
    OrderEscrowContract, OrderEscrowContractArgs, OrderEscrowContractClient,
};
use soroban_sdk::token::Client as TokenClient;
use soroban_sdk::{contractimpl, Address, Env};

/// Implementation of the RefundInterface trait for OrderEscrowContract.
/// Refunds exist for orders the provider never shipped: once the deadline
/// elapses the customer can pull the full amount back out of custody.
#[contractimpl]
impl RefundInterface for OrderEscrowContract {
    fn request_refund(env: Env, caller: Address, order_id: u64) -> Result<(), EscrowError> {
        // Authentication - the caller must authorize this transaction
        caller.require_auth();

        let order: Order = env
            .storage()
            .persistent()
            .get(&DataKey::Order(order_id))
            .ok_or(EscrowError::OrderNotFound)?;

        // Authorization check: only the order's customer may request a refund
        if order.customer != caller {
            return Err(EscrowError::Unauthorized);
        }

        // Status validation: refund is only for never-shipped orders
        if order.status != OrderStatus::Created {
            return Err(EscrowError::InvalidOrderState);
        }

        // Deadline check: the provider keeps the full shipping window
        // before the customer can reclaim the funds
        let now = env.ledger().timestamp();
        if now <= order.deadline {
            return Err(EscrowError::DeadlineNotReached);
        }

        // Return the entire custody balance to the customer. The tranche
        // flags stay false: no tranche was ever released for this order.
        let token_client = TokenClient::new(&env, &order.token);
        if token_client
            .try_transfer(
                &env.current_contract_address(),
                &order.customer,
                &order.total_amount,
            )
            .is_err()
        {
            return Err(EscrowError::TransferFailed);
        }

        let total_amount = order.total_amount;
        let updated_order = Order {
            status: OrderStatus::Refunded,
            ..order
        };

        env.storage()
            .persistent()
            .set(&DataKey::Order(order_id), &updated_order);

        env.events().publish(
            (event::REFUNDED, order_id),
            OrderRefunded {
                order_id,
                amount: total_amount,
                timestamp: now,
            },
        );

        Ok(())
    }
}
