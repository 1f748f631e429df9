/*
[INPUT]:  Parsed subcommand and a configured UqpayClient
[OUTPUT]: JSON value of the API response
[POS]:    Command layer - maps CLI subcommands onto SDK operations
[UPDATE]: When adding or changing subcommands
*/

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Subcommand;
use rust_decimal::Decimal;
use serde::Serialize;
use serde_json::Value;
use tracing::info;
use uqpay_sdk::UqpayClient;
use uqpay_sdk::types::{
    CreateQuoteRequest, DownloadLinksRequest, FileUpload, ListBalancesRequest, ListRatesRequest,
    ListTransfersRequest, PageRequest,
};

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Account balances
    #[command(subcommand)]
    Balances(BalancesCommand),
    /// Recent transfers
    Transfers {
        #[command(flatten)]
        page: PageArgs,
    },
    /// Current exchange rates, optionally filtered by pair (e.g. USD/EUR)
    Rates {
        #[arg(value_name = "PAIR")]
        pairs: Vec<String>,
    },
    /// Lock a conversion quote
    Quote {
        #[arg(long)]
        from: String,
        #[arg(long)]
        to: String,
        #[arg(long)]
        amount: Decimal,
    },
    /// Look up a card
    Card { card_id: String },
    /// File storage
    #[command(subcommand)]
    Files(FilesCommand),
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum BalancesCommand {
    List {
        #[command(flatten)]
        page: PageArgs,
    },
    Get { currency: String },
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum FilesCommand {
    /// Upload a jpeg/png/pdf/doc(x) file
    Upload {
        path: PathBuf,
        #[arg(long)]
        notes: Option<String>,
    },
    /// Signed download URLs for stored files
    Links {
        #[arg(required = true, value_name = "FILE_ID")]
        file_ids: Vec<String>,
    },
}

#[derive(clap::Args, Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageArgs {
    #[arg(long, default_value_t = 10)]
    pub page_size: u32,
    #[arg(long, default_value_t = 1)]
    pub page_number: u32,
}

impl From<PageArgs> for PageRequest {
    fn from(args: PageArgs) -> Self {
        PageRequest::new(args.page_size, args.page_number)
    }
}

/// Run one command and return its response as JSON
pub async fn execute(client: &UqpayClient, command: Command) -> Result<Value> {
    match command {
        Command::Balances(BalancesCommand::List { page }) => {
            let req = ListBalancesRequest { page: page.into() };
            to_json(client.banking.balances.list(&req).await?)
        }
        Command::Balances(BalancesCommand::Get { currency }) => {
            to_json(client.banking.balances.get(&currency).await?)
        }
        Command::Transfers { page } => {
            let req = ListTransfersRequest {
                page: page.into(),
                ..Default::default()
            };
            to_json(client.banking.transfers.list(&req).await?)
        }
        Command::Rates { pairs } => {
            let req = ListRatesRequest {
                currency_pairs: pairs,
            };
            to_json(client.banking.exchange_rates.list(&req).await?)
        }
        Command::Quote { from, to, amount } => {
            let req = CreateQuoteRequest {
                currency_from: from,
                currency_to: to,
                amount_from: amount,
                settlement_date: None,
            };
            let quote = client.banking.conversions.create_quote(&req).await?;
            info!(quote_id = %quote.quote_id, rate = %quote.rate, expires_at = %quote.expires_at, "quote locked");
            to_json(quote)
        }
        Command::Card { card_id } => to_json(client.issuing.cards.get(&card_id).await?),
        Command::Files(FilesCommand::Upload { path, notes }) => {
            let mut upload = FileUpload::from_path(&path)
                .await
                .with_context(|| format!("read {}", path.display()))?;
            if let Some(notes) = notes {
                upload = upload.with_notes(notes);
            }
            to_json(client.supporting.files.upload(upload).await?)
        }
        Command::Files(FilesCommand::Links { file_ids }) => {
            let req = DownloadLinksRequest { file_ids };
            to_json(client.supporting.files.get_download_links(&req).await?)
        }
    }
}

fn to_json<T: Serialize>(value: T) -> Result<Value> {
    serde_json::to_value(value).context("encode response")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use uqpay_sdk::{Configuration, Environment};
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> UqpayClient {
        UqpayClient::new(Configuration::new(
            "cid",
            "key",
            Environment::custom(server.uri(), server.uri()),
        ))
        .unwrap()
    }

    #[tokio::test]
    async fn test_balances_list_passes_page() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/balances"))
            .and(query_param("page_size", "25"))
            .and(query_param("page_number", "2"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "total_pages": 2,
                "total_items": 26,
                "data": []
            })))
            .expect(1)
            .mount(&server)
            .await;

        let command = Command::Balances(BalancesCommand::List {
            page: PageArgs {
                page_size: 25,
                page_number: 2,
            },
        });
        let value = execute(&client_for(&server), command).await.unwrap();
        assert_eq!(value["total_items"], 26);
    }

    #[tokio::test]
    async fn test_api_error_surfaces_operation() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/issuing/cards/card_x"))
            .respond_with(ResponseTemplate::new(404).set_body_json(json!({
                "code": "NOT_FOUND",
                "message": "card not found"
            })))
            .mount(&server)
            .await;

        let command = Command::Card {
            card_id: "card_x".to_string(),
        };
        let err = execute(&client_for(&server), command).await.unwrap_err();
        let sdk_err = err.downcast_ref::<uqpay_sdk::UqpayError>().expect("sdk error");
        assert!(sdk_err.is_not_found());
    }
}
