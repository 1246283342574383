#![no_std]
use soroban_sdk::{contract, contractimpl};

#[contract]
pub struct OrderEscrowContract;

#[contractimpl]
impl OrderEscrowContract {
    pub fn version() -> u32 {
        1
    }
}

pub use implementations::*;

// Declare modules
pub mod errors;
pub mod event;
pub mod types;
mod implementations;
mod interface;
