use crate::{
    errors::EscrowError,
    interface::ViewInterface,
    types::{DataKey, Order, OrderActions, OrderStatus, PaymentSummary},
    OrderEscrowContract, OrderEscrowContractArgs, OrderEscrowContractClient,
};
use soroban_sdk::{contractimpl, Address, Env, Vec};

fn load_order(env: &Env, order_id: u64) -> Result<Order, EscrowError> {
    env.storage()
        .persistent()
        .get(&DataKey::Order(order_id))
        .ok_or(EscrowError::OrderNotFound)
}

#[contractimpl]
impl ViewInterface for OrderEscrowContract {
    fn get_order(env: Env, order_id: u64) -> Result<Order, EscrowError> {
        load_order(&env, order_id)
    }

    fn get_order_status(env: Env, order_id: u64) -> Result<OrderStatus, EscrowError> {
        Ok(load_order(&env, order_id)?.status)
    }

    fn get_order_actions(env: Env, order_id: u64) -> Result<OrderActions, EscrowError> {
        let order = load_order(&env, order_id)?;
        Ok(order.actions_at(env.ledger().timestamp()))
    }

    fn get_payment_summary(env: Env, order_id: u64) -> Result<PaymentSummary, EscrowError> {
        let order = load_order(&env, order_id)?;
        let paid_amount = order.paid_amount();

        Ok(PaymentSummary {
            total_amount: order.total_amount,
            paid_amount,
            remaining_amount: order.total_amount - paid_amount,
            first_payment_released: order.first_payment_released,
            second_payment_released: order.second_payment_released,
        })
    }

    fn get_customer_orders(env: Env, customer: Address) -> Vec<u64> {
        env.storage()
            .persistent()
            .get(&DataKey::CustomerOrders(customer))
            .unwrap_or_else(|| Vec::new(&env))
    }

    fn get_provider_orders(env: Env, provider: Address) -> Vec<u64> {
        env.storage()
            .persistent()
            .get(&DataKey::ProviderOrders(provider))
            .unwrap_or_else(|| Vec::new(&env))
    }
}
