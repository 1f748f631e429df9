/*
[INPUT]:  UQPAY_CLIENT_ID / UQPAY_API_KEY and a card id argument
[OUTPUT]: Card details and recent transactions
[POS]:    Examples - card issuing queries with a request deadline
[UPDATE]: When issuing endpoints change
*/

use std::time::Duration;

use uqpay_sdk::*;

/// Example: inspect a card with a 5 second deadline per request
#[tokio::main]
async fn main() {
    println!("=== UQPAY Cards Example ===\n");

    let Some(card_id) = std::env::args().nth(1) else {
        eprintln!("usage: cards_example <card_id>");
        return;
    };
    let client_id = std::env::var("UQPAY_CLIENT_ID").unwrap_or_default();
    let api_key = std::env::var("UQPAY_API_KEY").unwrap_or_default();

    let client = match UqpayClient::new(Configuration::new(client_id, api_key, Environment::sandbox())) {
        Ok(c) => c.with_context(RequestContext::new().with_timeout(Duration::from_secs(5))),
        Err(e) => {
            eprintln!("Failed to create client: {}", e);
            return;
        }
    };

    match client.issuing.cards.get(&card_id).await {
        Ok(card) => println!("✓ {} {} balance {}", card.card_number, card.card_status, card.available_balance),
        Err(e) if e.is_not_found() => println!("✗ No card {}", card_id),
        Err(e) => println!("✗ Error: {}", e),
    }

    let req = ListTransactionsRequest {
        page: PageRequest::default(),
        card_id: Some(card_id),
    };
    match client.issuing.transactions.list(&req).await {
        Ok(page) => {
            println!("\n{} transactions", page.total_items);
            for tx in &page.data {
                println!(
                    "  {} {} {} {}",
                    tx.transaction_time, tx.merchant_name, tx.transaction_amount, tx.transaction_currency
                );
            }
        }
        Err(e) => println!("✗ Error: {}", e),
    }
}
