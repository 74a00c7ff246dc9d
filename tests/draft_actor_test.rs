use patisserie_orders::clients::{ActorClient, CatalogClient};
use patisserie_orders::framework::mock::MockClient;
use patisserie_orders::model::{Category, Product, Step, SubmissionState};

/// Real Draft actor with a mocked catalog dependency.
///
/// This exercises the wizard logic inside the actor while scripting exactly
/// what the catalog returns.
#[tokio::test]
async fn test_draft_actor_with_mocked_catalog() {
    let mut catalog_mock = MockClient::<Product>::new();

    // AddItem performs one catalog lookup per call
    let cupcake = Product::new("product_1", "Cupcake Vanille", 1500, Category::Cupcakes, "");
    catalog_mock.expect_get("product_1".to_string()).return_ok(Some(cupcake.clone()));
    catalog_mock.expect_get("product_1".to_string()).return_ok(Some(cupcake));

    let catalog_client = CatalogClient::new(catalog_mock.client());

    let (draft_actor, draft_client) = patisserie_orders::draft_actor::new();
    let actor_handle = tokio::spawn(draft_actor.run(catalog_client));

    let draft_id = draft_client.open_draft().await.expect("Failed to open draft");

    let first = draft_client
        .add_item(draft_id.clone(), "product_1".to_string())
        .await
        .expect("Failed to add item");
    assert_eq!(first.quantity, 1);
    assert_eq!(first.unit_price, 1500);

    let second = draft_client
        .add_item(draft_id.clone(), "product_1".to_string())
        .await
        .expect("Failed to add item");
    assert_eq!(second.quantity, 2, "Same product merges into one line");

    let draft = draft_client
        .get(draft_id.clone())
        .await
        .expect("Failed to get draft")
        .expect("Draft not found");
    assert_eq!(draft.lines.len(), 1);
    assert_eq!(draft.total(), 3000);

    catalog_mock.verify();

    drop(draft_client);
    actor_handle.await.unwrap();
}

/// The catalog says no: the add is rejected and the draft stays untouched.
#[tokio::test]
async fn test_unknown_product_is_rejected() {
    let mut catalog_mock = MockClient::<Product>::new();
    catalog_mock.expect_get("product_404".to_string()).return_ok(None);

    let catalog_client = CatalogClient::new(catalog_mock.client());

    let (draft_actor, draft_client) = patisserie_orders::draft_actor::new();
    let actor_handle = tokio::spawn(draft_actor.run(catalog_client));

    let draft_id = draft_client.open_draft().await.unwrap();
    let result = draft_client
        .add_item(draft_id.clone(), "product_404".to_string())
        .await;
    assert!(result.is_err(), "Unknown products must be rejected");

    let draft = draft_client.get(draft_id).await.unwrap().unwrap();
    assert!(draft.lines.is_empty());
    assert_eq!(draft.step, Step::Products);

    catalog_mock.verify();

    drop(draft_client);
    actor_handle.await.unwrap();
}

/// Raw two-phase submission against the actor: the Submitting state is what
/// blocks the duplicate, independent of any client-side delay.
#[tokio::test]
async fn test_begin_submit_guards_duplicates() {
    let mut catalog_mock = MockClient::<Product>::new();
    let beignets = Product::new("product_3", "Beignets (6 pièces)", 3000, Category::Donuts, "");
    catalog_mock.expect_get("product_3".to_string()).return_ok(Some(beignets));

    let catalog_client = CatalogClient::new(catalog_mock.client());

    let (draft_actor, draft_client) = patisserie_orders::draft_actor::new();
    let actor_handle = tokio::spawn(draft_actor.run(catalog_client));

    let draft_id = draft_client.open_draft().await.unwrap();
    draft_client.add_item(draft_id.clone(), "product_3".to_string()).await.unwrap();
    draft_client.advance(draft_id.clone()).await.unwrap();
    draft_client.advance(draft_id.clone()).await.unwrap();
    draft_client
        .set_fulfillment(
            draft_id.clone(),
            patisserie_orders::model::Fulfillment {
                mode: patisserie_orders::model::FulfillmentMode::Pickup,
                date: "2024-06-01".to_string(),
                time: "09:00".to_string(),
            },
        )
        .await
        .unwrap();
    draft_client.advance(draft_id.clone()).await.unwrap();
    draft_client.advance(draft_id.clone()).await.unwrap();
    draft_client
        .set_contact(
            draft_id.clone(),
            patisserie_orders::model::ContactInfo {
                full_name: "Moussa Fall".to_string(),
                phone: "70 555 00 11".to_string(),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    draft_client.begin_submit(draft_id.clone()).await.unwrap();
    let duplicate = draft_client.begin_submit(draft_id.clone()).await;
    assert!(duplicate.is_err(), "Second begin must bounce off Submitting");

    draft_client.finish_submit(draft_id.clone()).await.unwrap();

    let draft = draft_client.get(draft_id).await.unwrap().unwrap();
    assert_eq!(draft.submission, SubmissionState::Succeeded);
    assert_eq!(draft.step, Step::Confirmation);

    catalog_mock.verify();

    drop(draft_client);
    actor_handle.await.unwrap();
}
