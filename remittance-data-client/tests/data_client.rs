use mockito::{Matcher, Server};
use remittance_data_client::HttpTransactionDataClient;
use remittance_types::{
    ClientId, DataClientError, Transaction, TransactionDataClient, TransactionId,
    TransactionStatus,
};
use rust_decimal_macros::dec;

const STORED: &str = r#"{
    "transactionId": 7,
    "sendingPrincipal": 100.0,
    "payoutPrincipal": 98.0,
    "fees": 2.0,
    "commission": 1.6,
    "agentCommission": 0.4,
    "senderId": 3,
    "beneficiaryId": 4,
    "status": "NEW"
}"#;

fn json_mock(server: &mut Server, method: &str, path: &str) -> mockito::Mock {
    server
        .mock(method, path)
        .with_status(200)
        .with_header("content-type", "application/json")
}

#[tokio::test]
async fn test_get_transaction() {
    let mut server = Server::new_async().await;
    let mock = json_mock(&mut server, "GET", "/transactions/7")
        .with_body(STORED)
        .create_async()
        .await;

    let client = HttpTransactionDataClient::new(server.url());
    let transaction = client.get_transaction(TransactionId::new(7)).await.unwrap();

    mock.assert_async().await;
    assert_eq!(transaction.transaction_id, Some(TransactionId::new(7)));
    assert_eq!(transaction.sending_principal, dec!(100));
    assert_eq!(transaction.agent_commission, Some(dec!(0.4)));
    assert_eq!(transaction.status, Some(TransactionStatus::New));
}

#[tokio::test]
async fn test_get_missing_transaction_maps_404() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/transactions/55")
        .with_status(404)
        .create_async()
        .await;

    let client = HttpTransactionDataClient::new(server.url());
    let result = client.get_transaction(TransactionId::new(55)).await;

    assert_eq!(result.unwrap_err(), DataClientError::NotFound);
}

#[tokio::test]
async fn test_create_posts_priced_transaction() {
    let mut server = Server::new_async().await;
    let mock = json_mock(&mut server, "POST", "/transactions")
        .match_body(Matcher::PartialJson(serde_json::json!({
            "sendingPrincipal": 100.0,
            "payoutPrincipal": 98.0,
            "senderId": 3,
            "status": "NEW"
        })))
        .with_status(201)
        .with_body(STORED)
        .create_async()
        .await;

    let mut transaction =
        Transaction::new(dec!(100.0), dec!(98.0), ClientId::new(3), ClientId::new(4));
    transaction.status = Some(TransactionStatus::New);

    let client = HttpTransactionDataClient::new(server.url());
    let created = client.create_transaction(&transaction).await.unwrap();

    mock.assert_async().await;
    assert_eq!(created.transaction_id, Some(TransactionId::new(7)));
}

#[tokio::test]
async fn test_create_rejected_maps_400_with_body() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", "/transactions")
        .with_status(400)
        .with_body("beneficiary unknown")
        .create_async()
        .await;

    let transaction =
        Transaction::new(dec!(100.0), dec!(98.0), ClientId::new(3), ClientId::new(4));

    let client = HttpTransactionDataClient::new(server.url());
    let result = client.create_transaction(&transaction).await;

    assert_eq!(
        result.unwrap_err(),
        DataClientError::BadRequest("beneficiary unknown".to_string())
    );
}

#[tokio::test]
async fn test_open_transactions_query() {
    let mut server = Server::new_async().await;
    let mock = json_mock(&mut server, "GET", "/transactions")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("senderId".into(), "3".into()),
            Matcher::UrlEncoded("status".into(), "NEW".into()),
        ]))
        .with_body(format!("[{}, {}]", STORED, STORED))
        .create_async()
        .await;

    let client = HttpTransactionDataClient::new(server.url());
    let open = client
        .get_open_transactions_by_sender(ClientId::new(3), TransactionStatus::New)
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(open.len(), 2);
}

#[tokio::test]
async fn test_period_query() {
    let mut server = Server::new_async().await;
    let mock = json_mock(&mut server, "GET", "/transactions")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("senderId".into(), "3".into()),
            Matcher::UrlEncoded("days".into(), "30".into()),
        ]))
        .with_body("[]")
        .create_async()
        .await;

    let client = HttpTransactionDataClient::new(server.url());
    let history = client
        .get_transactions_by_sender_within_period(ClientId::new(3), 30)
        .await
        .unwrap();

    mock.assert_async().await;
    assert!(history.is_empty());
}

#[tokio::test]
async fn test_payout_puts_updated_record() {
    let mut server = Server::new_async().await;
    let mock = json_mock(&mut server, "PUT", "/transactions/7/payout")
        .match_body(Matcher::PartialJson(serde_json::json!({ "status": "PAY_OUT" })))
        .with_body(STORED.replace("\"NEW\"", "\"PAY_OUT\""))
        .create_async()
        .await;

    let mut transaction =
        Transaction::new(dec!(100.0), dec!(98.0), ClientId::new(3), ClientId::new(4));
    transaction.status = Some(TransactionStatus::PayOut);

    let client = HttpTransactionDataClient::new(server.url());
    let paid = client
        .payout(TransactionId::new(7), &transaction)
        .await
        .unwrap();

    mock.assert_async().await;
    assert!(paid.is_paid_out());
}

#[tokio::test]
async fn test_server_error_keeps_status_and_body() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/transactions/7")
        .with_status(503)
        .with_body("maintenance")
        .create_async()
        .await;

    let client = HttpTransactionDataClient::new(server.url());
    let result = client.get_transaction(TransactionId::new(7)).await;

    assert_eq!(
        result.unwrap_err(),
        DataClientError::Server {
            status: 503,
            message: "maintenance".to_string()
        }
    );
}

#[tokio::test]
async fn test_malformed_body_is_transport_error() {
    let mut server = Server::new_async().await;
    let _mock = json_mock(&mut server, "GET", "/transactions/7")
        .with_body("not json")
        .create_async()
        .await;

    let client = HttpTransactionDataClient::new(server.url());
    let result = client.get_transaction(TransactionId::new(7)).await;

    assert!(matches!(result, Err(DataClientError::Transport(_))));
}

#[tokio::test]
async fn test_unreachable_service_is_transport_error() {
    let client = HttpTransactionDataClient::new("http://127.0.0.1:1");
    let result = client.get_transaction(TransactionId::new(7)).await;

    assert!(matches!(result, Err(DataClientError::Transport(_))));
}
