use crate::{
    errors::EscrowError,
    event::{self, OrderDelivered},
    interface::DeliveryInterface,
    types::{DataKey, Order, OrderStatus},
    OrderEscrowContract, OrderEscrowContractArgs, OrderEscrowContractClient,
};
use soroban_sdk::token::Client as TokenClient;
use soroban_sdk::{contractimpl, Address, Env};

/// Implementation of the DeliveryInterface trait for OrderEscrowContract.
/// Delivery confirmation is the final step of the happy path: it releases
/// the remaining tranche and closes the order.
#[contractimpl]
impl DeliveryInterface for OrderEscrowContract {
    fn confirm_delivery(env: Env, caller: Address, order_id: u64) -> Result<(), EscrowError> {
        // Authentication - the caller must authorize this transaction
        caller.require_auth();

        let order: Order = env
            .storage()
            .persistent()
            .get(&DataKey::Order(order_id))
            .ok_or(EscrowError::OrderNotFound)?;

        // Authorization check: only the order's customer may confirm
        if order.customer != caller {
            return Err(EscrowError::Unauthorized);
        }

        // Status validation: confirmation is only valid once shipped.
        // No deadline check here: a shipped order can always be confirmed.
        if order.status != OrderStatus::Shipped {
            return Err(EscrowError::InvalidOrderState);
        }

        // Release the delivery tranche from custody to the provider
        let token_client = TokenClient::new(&env, &order.token);
        if token_client
            .try_transfer(
                &env.current_contract_address(),
                &order.provider,
                &order.second_payment,
            )
            .is_err()
        {
            return Err(EscrowError::TransferFailed);
        }

        let second_payment = order.second_payment;
        let updated_order = Order {
            status: OrderStatus::Delivered,
            second_payment_released: true,
            ..order
        };

        env.storage()
            .persistent()
            .set(&DataKey::Order(order_id), &updated_order);

        env.events().publish(
            (event::DELIVERED, order_id),
            OrderDelivered {
                order_id,
                amount: second_payment,
                timestamp: env.ledger().timestamp(),
            },
        );

        Ok(())
    }
}
