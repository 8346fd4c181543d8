use super::*;
use httpmock::prelude::*;
use serde_json::json;

fn admin_user_json() -> serde_json::Value {
    json!({
        "id": 1,
        "name": "常用名字",
        "email": "a@jwt.com",
        "roles": [{ "role": "admin" }]
    })
}

fn diner_user_json() -> serde_json::Value {
    json!({
        "id": 3,
        "name": "Kai Chen",
        "email": "d@jwt.com",
        "roles": [{ "role": "diner" }]
    })
}

fn lota_pizza_json() -> serde_json::Value {
    json!({
        "id": 2,
        "name": "LotaPizza",
        "admins": [{ "id": 4, "name": "pizza franchisee", "email": "f@jwt.com" }],
        "stores": [
            { "id": 4, "name": "Lehi", "totalRevenue": 0.008 },
            { "id": 5, "name": "Springville", "totalRevenue": 0.019 }
        ]
    })
}

fn menu_item_json() -> serde_json::Value {
    json!({
        "id": 1,
        "title": "Veggie",
        "image": "pizza1.png",
        "price": 0.0038,
        "description": "A garden of delight"
    })
}

fn api_client(server: &MockServer) -> ApiClient {
    ApiClient::new_with_base_url(server.url("/api"))
}

#[tokio::test]
async fn login_stores_token_and_later_calls_carry_it() {
    let server = MockServer::start_async().await;

    server
        .mock_async(|when, then| {
            when.method(PUT).path("/api/auth");
            then.status(200)
                .json_body(json!({ "user": admin_user_json(), "token": "ttttt" }));
        })
        .await;
    let me_mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/api/user/me")
                .header("authorization", "Bearer ttttt");
            then.status(200).json_body(admin_user_json());
        })
        .await;

    let client = api_client(&server);
    let login = client
        .login(LoginRequest {
            email: "a@jwt.com".into(),
            password: "admin".into(),
        })
        .await
        .unwrap();
    assert_eq!(login.user.name, "常用名字");
    assert!(login.user.has_role(Role::Admin));

    let me = client.get_me().await.unwrap();
    assert_eq!(me.email, "a@jwt.com");
    me_mock.assert_async().await;
}

#[tokio::test]
async fn failed_login_surfaces_the_service_message() {
    let server = MockServer::start_async().await;

    server
        .mock_async(|when, then| {
            when.method(PUT).path("/api/auth");
            then.status(404).json_body(json!({ "message": "unknown user" }));
        })
        .await;

    let client = api_client(&server);
    let err = client
        .login(LoginRequest {
            email: "a@jwt.com".into(),
            password: "wrong".into(),
        })
        .await
        .unwrap_err();
    assert!(err.is_not_found());
    assert_eq!(err.to_string(), "unknown user");
}

#[tokio::test]
async fn logout_clears_the_stored_token() {
    let server = MockServer::start_async().await;

    server
        .mock_async(|when, then| {
            when.method(PUT).path("/api/auth");
            then.status(200)
                .json_body(json!({ "user": admin_user_json(), "token": "ttttt" }));
        })
        .await;
    server
        .mock_async(|when, then| {
            when.method(DELETE).path("/api/auth");
            then.status(200).json_body(json!({ "message": "logout successful" }));
        })
        .await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/user/me");
            then.status(401).json_body(json!({ "message": "unauthorized" }));
        })
        .await;

    let client = api_client(&server);
    client
        .login(LoginRequest {
            email: "a@jwt.com".into(),
            password: "admin".into(),
        })
        .await
        .unwrap();
    assert!(!client.get_auth_headers().unwrap().is_empty());

    client.logout().await.unwrap();
    assert!(client.get_auth_headers().unwrap().is_empty());

    let err = client.get_me().await.unwrap_err();
    assert!(err.is_unauthorized());
}

#[tokio::test]
async fn franchise_listing_sends_page_limit_and_filter() {
    let server = MockServer::start_async().await;

    let list_mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/api/franchise")
                .query_param("page", "0")
                .query_param("limit", "3")
                .query_param("name", "*");
            then.status(200)
                .json_body(json!({ "franchises": [lota_pizza_json()], "more": true }));
        })
        .await;

    let client = api_client(&server);
    let page = client
        .get_franchises(0, 3, &NameFilter::any())
        .await
        .unwrap();
    assert_eq!(page.franchises.len(), 1);
    assert_eq!(page.franchises[0].stores[0].name, "Lehi");
    assert!(page.more);
    list_mock.assert_async().await;
}

#[tokio::test]
async fn user_listing_sends_the_wildcard_wrapped_filter() {
    let server = MockServer::start_async().await;

    let list_mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/api/user")
                .query_param("page", "1")
                .query_param("limit", "10")
                .query_param("name", "*kai*");
            then.status(200)
                .json_body(json!({ "users": [diner_user_json()], "more": false }));
        })
        .await;

    let client = api_client(&server);
    let page = client
        .list_users(1, 10, &NameFilter::contains("kai"))
        .await
        .unwrap();
    assert_eq!(page.users[0].name, "Kai Chen");
    assert!(!page.more);
    list_mock.assert_async().await;
}

#[tokio::test]
async fn deleting_a_user_twice_reports_not_found() {
    let server = MockServer::start_async().await;

    let mut delete_mock = server
        .mock_async(|when, then| {
            when.method(DELETE).path("/api/user/3");
            then.status(200).json_body(json!({ "message": "user deleted" }));
        })
        .await;

    let client = api_client(&server);
    client.delete_user(3).await.unwrap();
    delete_mock.delete_async().await;

    server
        .mock_async(|when, then| {
            when.method(DELETE).path("/api/user/3");
            then.status(404).json_body(json!({ "message": "user not found" }));
        })
        .await;

    let err = client.delete_user(3).await.unwrap_err();
    assert!(err.is_not_found());
    assert_eq!(err.to_string(), "user not found");
}

#[tokio::test]
async fn franchise_create_and_close_endpoints_succeed() {
    let server = MockServer::start_async().await;

    let create_mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/api/franchise")
                .json_body(json!({
                    "name": "PizzaCorp",
                    "admins": [{ "email": "f@jwt.com" }]
                }));
            then.status(200).json_body(json!({
                "id": 7,
                "name": "PizzaCorp",
                "admins": [{ "id": 4, "name": "pizza franchisee", "email": "f@jwt.com" }],
                "stores": []
            }));
        })
        .await;
    server
        .mock_async(|when, then| {
            when.method(DELETE).path("/api/franchise/2");
            then.status(200).json_body(json!({ "message": "franchise deleted" }));
        })
        .await;
    server
        .mock_async(|when, then| {
            when.method(DELETE).path("/api/franchise/2/store/4");
            then.status(200).json_body(json!({ "message": "store deleted" }));
        })
        .await;

    let client = api_client(&server);
    let created = client
        .create_franchise(&CreateFranchiseRequest {
            name: "PizzaCorp".into(),
            admins: vec![FranchiseAdminRef {
                email: "f@jwt.com".into(),
            }],
        })
        .await
        .unwrap();
    assert_eq!(created.id, Some(7));
    create_mock.assert_async().await;

    client.close_franchise(2).await.unwrap();
    client.close_store(2, 4).await.unwrap();
}

#[tokio::test]
async fn order_endpoints_round_trip() {
    let server = MockServer::start_async().await;

    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/order/menu");
            then.status(200).json_body(json!([menu_item_json()]));
        })
        .await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/order");
            then.status(200).json_body(json!({
                "dinerId": 3,
                "orders": [{
                    "id": 1,
                    "franchiseId": 2,
                    "storeId": 4,
                    "date": "2024-06-05T05:14:40.000Z",
                    "items": [{ "menuId": 1, "description": "Veggie", "price": 0.0038 }]
                }],
                "page": 1
            }));
        })
        .await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/api/order");
            then.status(200).json_body(json!({
                "order": {
                    "franchiseId": 2,
                    "storeId": 4,
                    "items": [{ "menuId": 1, "description": "Veggie", "price": 0.0038 }]
                },
                "jwt": "eyJpYXQ"
            }));
        })
        .await;

    let client = api_client(&server);
    let menu = client.get_menu().await.unwrap();
    assert_eq!(menu[0].title, "Veggie");

    let history = client.get_orders().await.unwrap();
    assert_eq!(history.diner_id, Some(3));
    assert_eq!(history.orders[0].items[0].menu_id, 1);

    let receipt = client
        .create_order(&OrderRequest {
            franchise_id: 2,
            store_id: 4,
            items: vec![OrderItem {
                menu_id: 1,
                description: "Veggie".into(),
                price: 0.0038,
            }],
        })
        .await
        .unwrap();
    assert_eq!(receipt.jwt, "eyJpYXQ");
}

#[tokio::test]
async fn service_errors_map_to_the_service_variant() {
    let server = MockServer::start_async().await;

    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/franchise");
            then.status(500)
                .json_body(json!({ "message": "service unavailable" }));
        })
        .await;

    let client = api_client(&server);
    let err = client
        .get_franchises(0, 3, &NameFilter::any())
        .await
        .unwrap_err();
    assert_eq!(err, ApiError::Service("service unavailable".into()));
}
