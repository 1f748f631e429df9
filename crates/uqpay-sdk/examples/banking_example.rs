/*
[INPUT]:  UQPAY_CLIENT_ID / UQPAY_API_KEY environment variables
[OUTPUT]: Balances, rates and a conversion quote from the sandbox
[POS]:    Examples - read-only banking queries
[UPDATE]: When banking endpoints change
*/

use rust_decimal::Decimal;
use uqpay_sdk::*;

/// Example: query balances and FX against the sandbox
#[tokio::main]
async fn main() {
    println!("=== UQPAY Banking Example ===\n");

    let (Ok(client_id), Ok(api_key)) = (
        std::env::var("UQPAY_CLIENT_ID"),
        std::env::var("UQPAY_API_KEY"),
    ) else {
        eprintln!("Set UQPAY_CLIENT_ID and UQPAY_API_KEY first");
        return;
    };

    let client = match UqpayClient::new(Configuration::new(
        client_id,
        api_key,
        Environment::sandbox(),
    )) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to create client: {}", e);
            return;
        }
    };
    println!("✓ Client created for sandbox\n");

    println!("Listing balances...");
    match client.banking.balances.list(&ListBalancesRequest::default()).await {
        Ok(page) => {
            for balance in &page.data {
                println!("✓ {} available {}", balance.currency, balance.available_balance);
            }
        }
        Err(e) => println!("✗ Error: {}", e),
    }

    println!("\nQuerying USD/EUR rate...");
    let req = ListRatesRequest {
        currency_pairs: vec!["USD/EUR".to_string()],
    };
    match client.banking.exchange_rates.list(&req).await {
        Ok(rates) => match rates.rate("USD/EUR") {
            Some(rate) => println!("✓ buy {} sell {}", rate.buy_price, rate.sell_price),
            None => println!("✗ USD/EUR not quoted"),
        },
        Err(e) => println!("✗ Error: {}", e),
    }

    println!("\nLocking a quote for 100 USD -> EUR...");
    let req = CreateQuoteRequest {
        currency_from: "USD".to_string(),
        currency_to: "EUR".to_string(),
        amount_from: Decimal::new(100, 0),
        settlement_date: None,
    };
    match client.banking.conversions.create_quote(&req).await {
        Ok(quote) => println!("✓ Quote {} at {} until {}", quote.quote_id, quote.rate, quote.expires_at),
        Err(e) if e.is_unauthorized() => println!("✗ Credentials rejected: {}", e),
        Err(e) => println!("✗ Error: {}", e),
    }

    println!("\n✓ Banking example complete");
}
