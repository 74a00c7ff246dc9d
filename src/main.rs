//! Demo: one order walked through the wizard end to end.
//!
//! Seeds the catalog with the storefront's sample range, opens a draft,
//! fills in each step, checks the delivery address against the zone list,
//! submits, and prints the recap.

use patisserie_orders::clients::ActorClient;
use patisserie_orders::delivery;
use patisserie_orders::lifecycle::{setup_tracing, BakerySystem};
use patisserie_orders::model::{
    Category, ContactInfo, Customization, EventDetails, Fulfillment, FulfillmentMode,
    ProductCreate,
};
use tracing::{info, warn, Instrument};

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();

    info!("Starting Mariama Pâtisserie order desk");

    let system = BakerySystem::new();

    // The storefront's sample range (prices in FCFA).
    let range = [
        ("Cupcake Vanille", 1500, Category::Cupcakes),
        ("Gâteau Chocolat", 15000, Category::Cakes),
        ("Beignets (6 pièces)", 3000, Category::Donuts),
        ("Tarte aux Fruits", 8000, Category::Tarts),
    ];
    let mut product_ids = Vec::new();
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
            .map_err(|e| e.to_string())?;
        product_ids.push(id);
    }
    info!(count = product_ids.len(), "Catalog seeded");

    let draft_client = &system.draft_client;
    let span = tracing::info_span!("order_wizard");
    async {
        let draft_id = draft_client.open_draft().await.map_err(|e| e.to_string())?;

        // Step 1: products — two cupcakes and one cake
        draft_client
            .add_item(draft_id.clone(), product_ids[0].clone())
            .await
            .map_err(|e| e.to_string())?;
        draft_client
            .add_item(draft_id.clone(), product_ids[0].clone())
            .await
            .map_err(|e| e.to_string())?;
        draft_client
            .add_item(draft_id.clone(), product_ids[1].clone())
            .await
            .map_err(|e| e.to_string())?;
        let total = draft_client.total(draft_id.clone()).await.map_err(|e| e.to_string())?;
        info!(total_fcfa = total, "Products selected");
        draft_client.advance(draft_id.clone()).await.map_err(|e| e.to_string())?;

        // Step 2: customization
        draft_client
            .set_customization(
                draft_id.clone(),
                Customization {
                    special_instructions: "Gâteau en forme de cœur".to_string(),
                    allergy_info: "Allergie aux noix".to_string(),
                    decoration_preferences: "Thème doré".to_string(),
                },
            )
            .await
            .map_err(|e| e.to_string())?;
        draft_client.advance(draft_id.clone()).await.map_err(|e| e.to_string())?;

        // Step 3: delivery on a chosen date
        draft_client
            .set_fulfillment(
                draft_id.clone(),
                Fulfillment {
                    mode: FulfillmentMode::Delivery,
                    date: "2024-06-01".to_string(),
                    time: "14:00".to_string(),
                },
            )
            .await
            .map_err(|e| e.to_string())?;
        draft_client.advance(draft_id.clone()).await.map_err(|e| e.to_string())?;

        // Step 4: event details
        draft_client
            .set_event(
                draft_id.clone(),
                EventDetails {
                    event_type: "birthday".to_string(),
                    guest_count: Some(20),
                    special_occasion: true,
                },
            )
            .await
            .map_err(|e| e.to_string())?;
        draft_client.advance(draft_id.clone()).await.map_err(|e| e.to_string())?;

        // Step 5: contact and address, with the zone check
        let address = "12 Route des Almadies";
        if delivery::in_default_zone(address) {
            info!(address, "Address is inside the delivery zones");
        } else {
            warn!(address, "Address is outside the delivery zones");
        }
        draft_client
            .set_contact(
                draft_id.clone(),
                ContactInfo {
                    full_name: "Awa Diop".to_string(),
                    phone: "77 123 45 67".to_string(),
                    address: address.to_string(),
                    city: "Dakar".to_string(),
                    directions: "Près de la station".to_string(),
                },
            )
            .await
            .map_err(|e| e.to_string())?;

        // Submit (simulated network delay, then confirmation)
        draft_client.submit(draft_id.clone()).await.map_err(|e| e.to_string())?;

        // Recap
        let draft = draft_client
            .get(draft_id)
            .await
            .map_err(|e| e.to_string())?
            .ok_or_else(|| "draft vanished".to_string())?;
        for line in &draft.lines {
            info!(
                quantity = line.quantity,
                name = %line.name,
                subtotal_fcfa = line.subtotal(),
                "Order line"
            );
        }
        info!(
            step = draft.step.number(),
            total_fcfa = draft.total(),
            "Order confirmed"
        );
        Ok::<(), String>(())
    }
    .instrument(span)
    .await?;

    system.shutdown().await?;

    info!("Application completed successfully");
    Ok(())
}
