use crate::{
    errors::EscrowError,
    event::{self, OrderDisputed},
    interface::DisputeInterface,
    types::{DataKey, Order, OrderStatus},
    OrderEscrowContract, OrderEscrowContractArgs, OrderEscrowContractClient,
};
use soroban_sdk::{contractimpl, Address, Env};

/// Implementation of the DisputeInterface trait for OrderEscrowContract.
/// A dispute freezes a shipped order: the delivery tranche never leaves
/// custody and no operation on this contract can release it afterwards.
#[contractimpl]
impl DisputeInterface for OrderEscrowContract {
    fn dispute_order(env: Env, caller: Address, order_id: u64) -> Result<(), EscrowError> {
        // Authentication - the caller must authorize this transaction
        caller.require_auth();

        let order: Order = env
            .storage()
            .persistent()
            .get(&DataKey::Order(order_id))
            .ok_or(EscrowError::OrderNotFound)?;

        // Authorization check: only the order's customer may dispute
        if order.customer != caller {
            return Err(EscrowError::Unauthorized);
        }

        // Status validation: only shipped orders can be disputed
        if order.status != OrderStatus::Shipped {
            return Err(EscrowError::InvalidOrderState);
        }

        // Deadline check: the dispute window closes at the order's original
        // deadline, the same cutoff that gated shipping. It is not reset at
        // shipment, so a late shipment leaves a short window.
        let now = env.ledger().timestamp();
        if now > order.deadline {
            return Err(EscrowError::DeadlinePassed);
        }

        // No fund movement: the delivery tranche stays in contract custody
        let updated_order = Order {
            status: OrderStatus::Disputed,
            ..order
        };

        env.storage()
            .persistent()
            .set(&DataKey::Order(order_id), &updated_order);

        env.events().publish(
            (event::DISPUTED, order_id),
            OrderDisputed {
                order_id,
                timestamp: now,
            },
        );

        Ok(())
    }
}
