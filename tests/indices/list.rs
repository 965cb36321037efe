use crate::common;

#[tokio::test]
async fn index_list_entries_are_named_and_flagged() {
    let server = common::setup_server();
    let mock = common::mock_json(
        &server,
        "/api/equity-masterOR",
        &common::fixture("index_master", "all", "json"),
    );
    let client = common::client_for(&server);

    let list = nse_rs::index_list(&client).await.unwrap();
    mock.assert();

    let names: Vec<_> = list.iter().map(|d| d.index_name.as_str()).collect();
    assert_eq!(
        names,
        vec![
            "NIFTY 50",
            "NIFTY NEXT 50",
            "NIFTY MIDCAP 50",
            "NIFTY BANK",
            "NIFTY IT",
            "NIFTY MIDCAP SELECT"
        ]
    );
    assert!(list.iter().all(|d| !d.index_name.is_empty()));

    let find = |n: &str| list.iter().find(|d| d.index_name == n).unwrap();
    assert!(find("NIFTY 50").derivatives_eligibility);
    assert_eq!(find("NIFTY 50").sub_type, "Broad Market Indices");
    assert!(find("NIFTY BANK").derivatives_eligibility);
    assert_eq!(find("NIFTY BANK").sub_type, "Sectoral Indices");
    assert!(!find("NIFTY IT").derivatives_eligibility);
    assert_eq!(find("NIFTY MIDCAP SELECT").sub_type, "Broad Market Indices");
}

#[tokio::test]
async fn index_list_serializes_provider_key_names() {
    let server = common::setup_server();
    common::mock_json(
        &server,
        "/api/equity-masterOR",
        r#"{"Indices Eligible in Derivatives": ["NIFTY FIN SERVICE"]}"#,
    );
    let client = common::client_for(&server);

    let list = nse_rs::index_list(&client).await.unwrap();
    let json = serde_json::to_value(&list).unwrap();

    assert_eq!(
        json,
        serde_json::json!([{
            "indexName": "NIFTY FIN SERVICE",
            "subType": "Sectoral Indices",
            "derivativesEligiblity": true
        }])
    );
}
