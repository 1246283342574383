use crate::{
    errors::EscrowError,
    event::{self, OrderShipped},
    interface::ShippingInterface,
    types::{DataKey, Order, OrderStatus},
    OrderEscrowContract, OrderEscrowContractArgs, OrderEscrowContractClient,
};
use soroban_sdk::token::Client as TokenClient;
use soroban_sdk::{contractimpl, Address, Env};

/// Implementation of the ShippingInterface trait for OrderEscrowContract.
/// Shipping is the only provider-initiated transition and releases the
/// first of the two payment tranches.
#[contractimpl]
impl ShippingInterface for OrderEscrowContract {
    fn mark_as_shipped(env: Env, caller: Address, order_id: u64) -> Result<(), EscrowError> {
        // Authentication - the caller must authorize this transaction
        caller.require_auth();

        let order: Order = env
            .storage()
            .persistent()
            .get(&DataKey::Order(order_id))
            .ok_or(EscrowError::OrderNotFound)?;

        // Authorization check: only the order's provider may ship
        if order.provider != caller {
            return Err(EscrowError::Unauthorized);
        }

        // Status validation: shipping is only valid from Created
        if order.status != OrderStatus::Created {
            return Err(EscrowError::InvalidOrderState);
        }

        // Deadline check: the shipping window closes at the order deadline
        let now = env.ledger().timestamp();
        if now > order.deadline {
            return Err(EscrowError::DeadlinePassed);
        }

        // Release the shipment tranche from custody to the provider. The
        // transfer runs before any storage write so a failure rejects the
        // whole call with the order unchanged.
        let token_client = TokenClient::new(&env, &order.token);
        if token_client
            .try_transfer(
                &env.current_contract_address(),
                &order.provider,
                &order.first_payment,
            )
            .is_err()
        {
            return Err(EscrowError::TransferFailed);
        }

        let first_payment = order.first_payment;
        let updated_order = Order {
            status: OrderStatus::Shipped,
            first_payment_released: true,
            ..order
        };

        env.storage()
            .persistent()
            .set(&DataKey::Order(order_id), &updated_order);

        env.events().publish(
            (event::SHIPPED, order_id),
            OrderShipped {
                order_id,
                amount: first_payment,
                timestamp: now,
            },
        );

        Ok(())
    }
}
