use soroban_sdk::{token, Address, Env};

pub fn transfer(env: &Env, token: &Address, from: &Address, to: &Address, amount: &i128) {
    let client = token::Client::new(env, token);
    client.transfer(from, to, amount);
}
