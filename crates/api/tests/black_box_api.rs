use reqwest::StatusCode;
use serde_json::json;

struct TestServer {
    base_url: String,
    handle: tokio::task::JoinHandle<()>,
}

impl TestServer {
    async fn spawn() -> Self {
        // Build app (same router as prod), but bind to an ephemeral port.
        let app = smartlocal_api::app::build_app();
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind ephemeral port");
        let addr = listener.local_addr().unwrap();
        let base_url = format!("http://{}", addr);

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { base_url, handle }
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

#[tokio::test]
async fn health_endpoint_responds() {
    let server = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let res = client
        .get(format!("{}/health", server.base_url))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn cash_session_start_update_close_flow() {
    let server = TestServer::spawn().await;
    let client = reqwest::Client::new();
    let url = format!("{}/cash-session", server.base_url);

    // Start a session with a ₹5000 float.
    let res = client
        .post(&url)
        .json(&json!({ "action": "start", "openingCash": 5000 }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let started: serde_json::Value = res.json().await.unwrap();
    assert_eq!(started["success"], true);
    assert_eq!(started["session"]["openingCash"], 5000);
    assert_eq!(started["session"]["status"], "open");
    assert_eq!(started["session"]["difference"], -5000);

    // Client counts the drawer and reports sales; server recomputes totals.
    let mut session = started["session"].clone();
    session["denominations"] = json!({
        "2000": 2, "500": 4, "200": 3, "100": 8,
        "50": 6, "20": 10, "10": 15, "5": 20, "2": 0, "1": 0
    });

    let res = client
        .post(&url)
        .json(&json!({
            "action": "update",
            "session": session,
            "cashSales": 2300,
            "upiSales": 1800,
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let updated: serde_json::Value = res.json().await.unwrap();
    let s = &updated["session"];
    assert_eq!(s["totalCounted"], 8150);
    assert_eq!(s["expectedCash"], 7300);
    assert_eq!(s["actualCash"], 8150);
    assert_eq!(s["difference"], 850);
    assert_eq!(s["totalSales"], 4100);

    // Close it and check the reconciliation verdict.
    let res = client
        .post(&url)
        .json(&json!({
            "action": "close",
            "session": updated["session"],
            "notes": "evening count",
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let closed: serde_json::Value = res.json().await.unwrap();
    assert_eq!(closed["success"], true);
    assert_eq!(closed["message"], "Cash session closed successfully");

    let summary = &closed["summary"];
    assert_eq!(summary["status"], "closed");
    assert_eq!(summary["notes"], "evening count");
    assert_eq!(summary["reconciliation"]["difference"], 850);
    assert_eq!(
        summary["reconciliation"]["status"],
        "significant_discrepancy"
    );
    assert_eq!(summary["reconciliation"]["percentageError"], 11.64);
    assert_eq!(summary["salesBreakdown"]["cash"]["percentage"], 56.1);
    assert_eq!(summary["salesBreakdown"]["upi"]["percentage"], 43.9);
}

#[tokio::test]
async fn update_discards_denominations_outside_the_table() {
    let server = TestServer::spawn().await;
    let client = reqwest::Client::new();
    let url = format!("{}/cash-session", server.base_url);

    let started: serde_json::Value = client
        .post(&url)
        .json(&json!({ "action": "start", "openingCash": 1000 }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    let mut session = started["session"].clone();
    session["denominations"]["2500"] = json!(3);
    session["denominations"]["500"] = json!(2);

    let res = client
        .post(&url)
        .json(&json!({ "action": "update", "session": session }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let updated: serde_json::Value = res.json().await.unwrap();

    assert!(updated["session"]["denominations"]["2500"].is_null());
    assert_eq!(updated["session"]["totalCounted"], 1000);
    assert_eq!(updated["session"]["difference"], 0);
}

#[tokio::test]
async fn cash_session_update_without_session_is_rejected() {
    let server = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let res = client
        .post(format!("{}/cash-session", server.base_url))
        .json(&json!({ "action": "update", "cashSales": 100 }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["error"], "validation_error");

    let res = client
        .post(format!("{}/cash-session", server.base_url))
        .json(&json!({ "action": "reopen" }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn demo_session_is_served_on_get() {
    let server = TestServer::spawn().await;

    let res = reqwest::Client::new()
        .get(format!("{}/cash-session", server.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["session"]["totalCounted"], 8150);
    assert_eq!(body["session"]["expectedCash"], 7300);
}

#[tokio::test]
async fn catalog_endpoints_serve_demo_data() {
    let server = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let res = client
        .get(format!("{}/products", server.base_url))
        .send()
        .await
        .unwrap();
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["products"].as_array().unwrap().len(), 10);

    let res = client
        .get(format!("{}/shop/demo", server.base_url))
        .send()
        .await
        .unwrap();
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["shop"]["upiId"], "shreeganesha@paytm");

    let res = client
        .get(format!("{}/analytics/dashboard", server.base_url))
        .send()
        .await
        .unwrap();
    let body: serde_json::Value = res.json().await.unwrap();
    assert!(body["analytics"]["totalSales"].is_i64());
}

#[tokio::test]
async fn pricing_suggest_is_deterministic_for_a_product() {
    let server = TestServer::spawn().await;
    let client = reqwest::Client::new();
    let url = format!("{}/pricing/suggest?productId=p1", server.base_url);

    let first: serde_json::Value = client.get(&url).send().await.unwrap().json().await.unwrap();
    let second: serde_json::Value = client.get(&url).send().await.unwrap().json().await.unwrap();

    assert_eq!(first["success"], true);
    assert_eq!(first["suggestion"], second["suggestion"]);
    assert!(first["suggestion"]["confidence"].as_f64().unwrap() >= 0.7);

    let res = client
        .get(format!("{}/pricing/suggest?productId=nope", server.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn voice_parse_extracts_add_command() {
    let server = TestServer::spawn().await;

    let res = reqwest::Client::new()
        .get(format!(
            "{}/voice/parse?text=add%205%20kg%20rice%20at%2070%20rupees",
            server.base_url
        ))
        .send()
        .await
        .unwrap();
    let body: serde_json::Value = res.json().await.unwrap();

    assert_eq!(body["parsed"]["action"], "ADD_PRODUCT");
    assert_eq!(body["parsed"]["data"]["quantity"], 5.0);
    assert_eq!(body["parsed"]["data"]["unit"], "kg");
    assert_eq!(body["parsed"]["data"]["name"], "rice");
    assert_eq!(body["parsed"]["data"]["price"], 70);
}

#[tokio::test]
async fn festival_bundle_round_trip() {
    let server = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let res = client
        .get(format!(
            "{}/festivals/bundles?festival=ramzan",
            server.base_url
        ))
        .send()
        .await
        .unwrap();
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["festival"]["name"], "Ramzan");
    assert_eq!(body["bundle"]["name"], "Sehri Essentials");
    assert_eq!(body["bundle"]["discount"], 8);

    let res = client
        .post(format!("{}/festivals/create-bundle", server.base_url))
        .json(&json!({
            "festival": "ramzan",
            "customName": "Iftar Mega Pack",
            "customDiscount": 20,
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["bundle"]["name"], "Iftar Mega Pack");
    assert_eq!(body["bundle"]["discount"], 20);
    assert_eq!(body["offerQr"]["offerName"], "Iftar Mega Pack");
    assert_eq!(body["offerQr"]["discount"], 20);
    assert!(body["offerQr"]["url"]
        .as_str()
        .unwrap()
        .contains("/offer/"));

    let res = client
        .get(format!(
            "{}/festivals/bundles?festival=christmas",
            server.base_url
        ))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn gst_invoice_and_monthly_summary() {
    let server = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let res = client
        .get(format!("{}/gst/invoice?orderId=o1", server.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body: serde_json::Value = res.json().await.unwrap();
    let invoice = &body["invoice"];
    assert_eq!(invoice["invoiceNumber"], "INV-O1");
    assert_eq!(invoice["subtotal"], 420);
    assert_eq!(invoice["totalGst"], 21);
    assert_eq!(invoice["grandTotal"], 441);
    assert_eq!(invoice["gstBreakdown"]["cgst"], 11);
    assert_eq!(invoice["items"][0]["gstAmount"], 18);
    assert_eq!(invoice["shop"]["gstNumber"], "27AADCS1234F1Z5");

    let res = client
        .get(format!("{}/gst/invoice?orderId=nope", server.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    let res = client
        .get(format!("{}/gst/summary?month=3&year=2026", server.base_url))
        .send()
        .await
        .unwrap();
    let body: serde_json::Value = res.json().await.unwrap();
    let summary = &body["summary"];
    assert_eq!(summary["month"], 3);
    assert_eq!(summary["totalSales"], 970);
    assert_eq!(summary["gstCollected"], 49);
    assert_eq!(summary["gstOrders"], 3);
    assert_eq!(summary["averageGstOrder"], 323);
    assert_eq!(summary["gstBreakdown"]["sgst"], 24);
}

#[tokio::test]
async fn qr_endpoints_build_tags() {
    let server = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let res = client
        .get(format!("{}/qr/product?productId=p1", server.base_url))
        .send()
        .await
        .unwrap();
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(
        body["qr"]["displayUrl"],
        "https://shreeganesha.smartlocal.in/product/p1?shop=demo-shop-123"
    );

    let res = client
        .get(format!("{}/qr/product?productId=missing", server.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    let res = client
        .post(format!("{}/qr/generate", server.base_url))
        .json(&json!({ "type": "bulk-products", "productIds": ["p1", "p3"] }))
        .send()
        .await
        .unwrap();
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["count"], 2);

    let res = client
        .post(format!("{}/qr/generate", server.base_url))
        .json(&json!({ "type": "posters" }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
}
