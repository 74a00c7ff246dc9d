use patisserie_orders::clients::ActorClient;
use patisserie_orders::draft_actor::DraftError;
use patisserie_orders::lifecycle::BakerySystem;
use patisserie_orders::model::{
    Category, ContactInfo, Fulfillment, FulfillmentMode, ProductCreate, Step, SubmissionState,
};

/// Seeds the storefront's sample range, returns the assigned product ids.
async fn seed_catalog(system: &BakerySystem) -> Vec<String> {
    let range = [
        ("Cupcake Vanille", 1500, Category::Cupcakes),
        ("Gâteau Chocolat", 15000, Category::Cakes),
        ("Beignets (6 pièces)", 3000, Category::Donuts),
        ("Tarte aux Fruits", 8000, Category::Tarts),
    ];
    let mut ids = Vec::new();
    for (name, price, category) in range {
        let id = system
            .catalog_client
            .create_product(ProductCreate {
                name: name.to_string(),
                price,
                category,
                description: String::new(),
            })
            .await
            .expect("Failed to seed product");
        ids.push(id);
    }
    ids
}

/// Full end-to-end walkthrough with all real actors: select products,
/// complete every step, submit, land on the confirmation step.
#[tokio::test(start_paused = true)]
async fn test_full_order_walkthrough() {
    let system = BakerySystem::new();
    let product_ids = seed_catalog(&system).await;
    let drafts = &system.draft_client;

    let draft_id = drafts.open_draft().await.expect("Failed to open draft");

    // An empty draft cannot leave step 1
    let blocked = drafts.advance(draft_id.clone()).await;
    assert!(blocked.is_err(), "Advance must be blocked on an empty draft");

    // Step 1: two cupcakes and a cake
    drafts
        .add_item(draft_id.clone(), product_ids[0].clone())
        .await
        .expect("Failed to add item");
    let line = drafts
        .add_item(draft_id.clone(), product_ids[0].clone())
        .await
        .expect("Failed to add item");
    assert_eq!(line.quantity, 2, "Re-adding a product merges into one line");
    drafts
        .add_item(draft_id.clone(), product_ids[1].clone())
        .await
        .expect("Failed to add item");

    // Total is derived, 2 × 1500 + 15000
    let total = drafts.total(draft_id.clone()).await.expect("Failed to total");
    assert_eq!(total, 18_000);

    assert_eq!(drafts.advance(draft_id.clone()).await.unwrap(), Step::Customization);

    // Step 2 is optional; go back and forward again to exercise retreat
    assert_eq!(drafts.retreat(draft_id.clone()).await.unwrap(), Step::Products);
    assert_eq!(drafts.advance(draft_id.clone()).await.unwrap(), Step::Customization);
    assert_eq!(drafts.advance(draft_id.clone()).await.unwrap(), Step::Fulfillment);

    // Step 3 requires a date and time
    let blocked = drafts.advance(draft_id.clone()).await;
    assert!(blocked.is_err(), "Fulfillment needs date and time");
    drafts
        .set_fulfillment(
            draft_id.clone(),
            Fulfillment {
                mode: FulfillmentMode::Delivery,
                date: "2024-06-01".to_string(),
                time: "14:00".to_string(),
            },
        )
        .await
        .expect("Failed to set fulfillment");
    assert_eq!(drafts.advance(draft_id.clone()).await.unwrap(), Step::Event);
    assert_eq!(drafts.advance(draft_id.clone()).await.unwrap(), Step::Contact);

    // Step 5: delivery mode needs the full address
    let premature = drafts.begin_submit(draft_id.clone()).await;
    assert!(premature.is_err(), "Submission requires contact fields");
    drafts
        .set_contact(
            draft_id.clone(),
            ContactInfo {
                full_name: "Awa Diop".to_string(),
                phone: "77 123 45 67".to_string(),
                address: "12 Route des Almadies".to_string(),
                city: "Dakar".to_string(),
                directions: String::new(),
            },
        )
        .await
        .expect("Failed to set contact");

    // There is no advancing past step 5; submission is the only way
    let blocked = drafts.advance(draft_id.clone()).await;
    assert!(blocked.is_err(), "Step 6 is only reachable by submitting");

    drafts.submit(draft_id.clone()).await.expect("Failed to submit");

    let draft = drafts
        .get(draft_id.clone())
        .await
        .expect("Failed to get draft")
        .expect("Draft not found");
    assert_eq!(draft.submission, SubmissionState::Succeeded);
    assert_eq!(draft.step, Step::Confirmation);
    assert_eq!(draft.step.number(), 6);
    assert_eq!(draft.total(), 18_000);

    // A confirmed order cannot be submitted again
    let again = drafts.submit(draft_id).await;
    assert!(matches!(again, Err(DraftError::ValidationError(_))));

    system.shutdown().await.expect("Failed to shutdown system");
}

/// Two concurrent submissions: the second bounces off the Submitting state
/// while the first waits out the simulated delay.
#[tokio::test(start_paused = true)]
async fn test_duplicate_submission_is_blocked() {
    let system = BakerySystem::new();
    let product_ids = seed_catalog(&system).await;
    let drafts = &system.draft_client;

    let draft_id = drafts.open_draft().await.unwrap();
    drafts.add_item(draft_id.clone(), product_ids[2].clone()).await.unwrap();
    drafts.advance(draft_id.clone()).await.unwrap();
    drafts.advance(draft_id.clone()).await.unwrap();
    drafts
        .set_fulfillment(
            draft_id.clone(),
            Fulfillment {
                mode: FulfillmentMode::Pickup,
                date: "2024-06-01".to_string(),
                time: "09:00".to_string(),
            },
        )
        .await
        .unwrap();
    drafts.advance(draft_id.clone()).await.unwrap();
    drafts.advance(draft_id.clone()).await.unwrap();
    drafts
        .set_contact(
            draft_id.clone(),
            ContactInfo {
                full_name: "Moussa Fall".to_string(),
                phone: "70 555 00 11".to_string(),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    let (first, second) = tokio::join!(
        drafts.submit(draft_id.clone()),
        drafts.submit(draft_id.clone()),
    );

    // Exactly one submission goes through; the other is rejected while the
    // first is in flight.
    assert!(first.is_ok() != second.is_ok(), "Exactly one submit must win");

    let draft = drafts.get(draft_id).await.unwrap().unwrap();
    assert_eq!(draft.submission, SubmissionState::Succeeded);
    assert_eq!(draft.step, Step::Confirmation);

    system.shutdown().await.unwrap();
}

/// Reset restores a pristine draft at step 1, whatever the previous state.
#[tokio::test]
async fn test_reset_restores_empty_draft() {
    let system = BakerySystem::new();
    let product_ids = seed_catalog(&system).await;
    let drafts = &system.draft_client;

    let draft_id = drafts.open_draft().await.unwrap();
    drafts.add_item(draft_id.clone(), product_ids[0].clone()).await.unwrap();
    drafts.advance(draft_id.clone()).await.unwrap();

    drafts.reset(draft_id.clone()).await.unwrap();

    let draft = drafts.get(draft_id.clone()).await.unwrap().unwrap();
    assert_eq!(draft.step, Step::Products);
    assert_eq!(draft.step.number(), 1);
    assert!(draft.lines.is_empty());
    assert_eq!(draft.submission, SubmissionState::Idle);
    assert_eq!(drafts.total(draft_id).await.unwrap(), 0);

    system.shutdown().await.unwrap();
}

/// Line edits: quantities update the derived total, zero removes the line.
#[tokio::test]
async fn test_line_edits_and_derived_total() {
    let system = BakerySystem::new();
    let product_ids = seed_catalog(&system).await;
    let drafts = &system.draft_client;

    let draft_id = drafts.open_draft().await.unwrap();
    drafts.add_item(draft_id.clone(), product_ids[3].clone()).await.unwrap();

    let line = drafts
        .set_item_quantity(draft_id.clone(), product_ids[3].clone(), 3)
        .await
        .unwrap()
        .expect("Line should still exist");
    assert_eq!(line.quantity, 3);
    assert_eq!(drafts.total(draft_id.clone()).await.unwrap(), 24_000);

    let removed = drafts
        .set_item_quantity(draft_id.clone(), product_ids[3].clone(), 0)
        .await
        .unwrap();
    assert!(removed.is_none(), "Quantity zero removes the line");
    assert_eq!(drafts.total(draft_id.clone()).await.unwrap(), 0);

    // Unknown products never make it into the draft
    let unknown = drafts
        .add_item(draft_id.clone(), "product_999".to_string())
        .await;
    assert!(matches!(unknown, Err(DraftError::ValidationError(_))));

    system.shutdown().await.unwrap();
}

/// Removing a line drops it from the draft; removing it again is a no-op.
#[tokio::test]
async fn test_remove_item_drops_the_line() {
    let system = BakerySystem::new();
    let product_ids = seed_catalog(&system).await;
    let drafts = &system.draft_client;

    let draft_id = drafts.open_draft().await.unwrap();
    drafts.add_item(draft_id.clone(), product_ids[0].clone()).await.unwrap();
    drafts.add_item(draft_id.clone(), product_ids[1].clone()).await.unwrap();

    drafts.remove_item(draft_id.clone(), product_ids[1].clone()).await.unwrap();
    assert_eq!(drafts.total(draft_id.clone()).await.unwrap(), 1500);

    let draft = drafts.get(draft_id.clone()).await.unwrap().unwrap();
    assert!(draft.line(&product_ids[1]).is_none());
    assert_eq!(draft.line(&product_ids[0]).map(|l| l.quantity), Some(1));

    drafts.remove_item(draft_id.clone(), product_ids[1].clone()).await.unwrap();
    assert_eq!(drafts.get(draft_id).await.unwrap().unwrap().lines.len(), 1);

    system.shutdown().await.unwrap();
}

/// A bulk order whose total exceeds u32 still totals correctly.
#[tokio::test]
async fn test_total_survives_bulk_quantities() {
    let system = BakerySystem::new();
    let product_ids = seed_catalog(&system).await;
    let drafts = &system.draft_client;

    let draft_id = drafts.open_draft().await.unwrap();
    drafts.add_item(draft_id.clone(), product_ids[1].clone()).await.unwrap();
    drafts
        .set_item_quantity(draft_id.clone(), product_ids[1].clone(), 300_000)
        .await
        .unwrap();

    assert_eq!(drafts.total(draft_id).await.unwrap(), 4_500_000_000);

    system.shutdown().await.unwrap();
}

/// Catalog browsing: the category filter only returns matching products.
#[tokio::test]
async fn test_catalog_category_filter() {
    let system = BakerySystem::new();
    seed_catalog(&system).await;

    let all = system.catalog_client.list().await.unwrap();
    assert_eq!(all.len(), 4);

    let cakes = system
        .catalog_client
        .products_in_category(Category::Cakes)
        .await
        .unwrap();
    assert_eq!(cakes.len(), 1);
    assert_eq!(cakes[0].name, "Gâteau Chocolat");

    system.shutdown().await.unwrap();
}
