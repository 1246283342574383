use crate::{
    errors::EscrowError,
    event::{self, OrderCreated},
    interface::OrderInterface,
    types::{DataKey, Order, OrderStatus},
    OrderEscrowContract, OrderEscrowContractArgs, OrderEscrowContractClient,
};
use soroban_sdk::token::Client as TokenClient;
use soroban_sdk::{contractimpl, Address, Env, Vec};

const SHIPMENT_TRANCHE_PERCENT: i128 = 70;
const ORDER_WINDOW_SECONDS: u64 = 7 * 24 * 60 * 60;

#[contractimpl]
impl OrderInterface for OrderEscrowContract {
    fn get_order_count(env: &Env) -> u64 {
        env.storage()
            .persistent()
            .get(&DataKey::OrderCounter)
            .unwrap_or(0)
    }

    fn create_order(
        env: Env,
        customer: Address,
        provider: Address,
        token: Address,
        amount: i128,
    ) -> Result<u64, EscrowError> {
        // Authentication
        customer.require_auth();

        // Validate inputs
        if provider == customer {
            return Err(EscrowError::InvalidProvider);
        }

        if amount <= 0 {
            return Err(EscrowError::InvalidAmount);
        }

        let token_client = TokenClient::new(&env, &token);

        // Check the customer can actually fund the order
        let customer_balance = token_client.balance(&customer);
        if customer_balance < amount {
            return Err(EscrowError::InsufficientFunds);
        }

        // Pull the full amount into contract custody. Nothing has been
        // written to storage yet, so a failed transfer rejects the whole
        // call and no order comes into existence.
        if token_client
            .try_transfer(&customer, &env.current_contract_address(), &amount)
            .is_err()
        {
            return Err(EscrowError::TransferFailed);
        }

        // Allocate the next sequential order id
        let order_id = Self::get_order_count(&env) + 1;

        // 70% released at shipment; the remainder at delivery, so the two
        // tranches always sum to the exact total even when the floor
        // division rounds down.
        let first_payment = amount * SHIPMENT_TRANCHE_PERCENT / 100;
        let second_payment = amount - first_payment;

        let created_at = env.ledger().timestamp();
        let deadline = created_at + ORDER_WINDOW_SECONDS;

        let order = Order {
            id: order_id,
            customer: customer.clone(),
            provider: provider.clone(),
            token,
            total_amount: amount,
            first_payment,
            second_payment,
            status: OrderStatus::Created,
            created_at,
            deadline,
            first_payment_released: false,
            second_payment_released: false,
        };

        env.storage()
            .persistent()
            .set(&DataKey::OrderCounter, &order_id);

        env.storage()
            .persistent()
            .set(&DataKey::Order(order_id), &order);

        // Append to both parties' order lists
        let customer_key = DataKey::CustomerOrders(customer.clone());
        let mut customer_orders: Vec<u64> = env
            .storage()
            .persistent()
            .get(&customer_key)
            .unwrap_or_else(|| Vec::new(&env));
        customer_orders.push_back(order_id);
        env.storage().persistent().set(&customer_key, &customer_orders);

        let provider_key = DataKey::ProviderOrders(provider.clone());
        let mut provider_orders: Vec<u64> = env
            .storage()
            .persistent()
            .get(&provider_key)
            .unwrap_or_else(|| Vec::new(&env));
        provider_orders.push_back(order_id);
        env.storage().persistent().set(&provider_key, &provider_orders);

        env.events().publish(
            (event::CREATED, order_id),
            OrderCreated {
                order_id,
                customer,
                provider,
                total_amount: amount,
                deadline,
            },
        );

        Ok(order_id)
    }
}
