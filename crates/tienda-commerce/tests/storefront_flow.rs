//! End-to-end flows across repositories, search and the cart.

use std::sync::Arc;

use serde_json::json;
use tienda_cache::{Cache, FileBackend};
use tienda_commerce::cart::{CartAggregate, CartNotice, LineItem, RecordingNotifier};
use tienda_commerce::catalog::{LiveStock, ProductForm, ProductPatch};
use tienda_commerce::config::SearchSettings;
use tienda_commerce::search::SearchIndex;
use tienda_commerce::services::{
    initial_structure, ServiceContent, ServiceForm, ServicePatch, ServiceType, TourList,
};
use tienda_commerce::store::{ProductRepository, ServiceRepository};
use tienda_commerce::{CommerceError, ProductId};
use tienda_db::{DocumentStore, MemoryObjectStore, MemoryStore, ObjectUpload, UploadLimits, SERVICES};

fn product_form(name: &str, category: &str, price: &str, stock: &str) -> ProductForm {
    ProductForm {
        name: name.to_string(),
        category: category.to_string(),
        price: price.to_string(),
        stock: stock.to_string(),
        ..Default::default()
    }
}

fn cart_over(store: Arc<MemoryStore>, cache: Cache) -> (CartAggregate, Arc<RecordingNotifier>) {
    let notices = Arc::new(RecordingNotifier::new());
    let cart = CartAggregate::new(cache, Arc::new(LiveStock::new(store)), notices.clone());
    (cart, notices)
}

#[tokio::test]
async fn test_service_form_to_repository() {
    let store = Arc::new(MemoryStore::new());
    let objects = MemoryObjectStore::new("https://cdn.example.com");
    let mut services = ServiceRepository::new(store.clone());

    let mut form = ServiceForm::create(ServiceType::Shipping);
    form.select_type(ServiceType::Tours).unwrap();
    form.title = "  Valle Sagrado  ".to_string();
    if let ServiceContent::Tours(tours) = form.content_mut() {
        tours.add(TourList::Destinos, "Cusco");
        tours.add(TourList::Incluye, "Guía bilingüe");
    }
    form.upload_main_image(
        &objects,
        ObjectUpload {
            file_name: "portada.jpg".to_string(),
            content_type: "image/jpeg".to_string(),
            bytes: vec![0; 64],
        },
        &UploadLimits::default(),
    )
    .await
    .unwrap();

    let created = form.submit(&mut services).await.unwrap();
    assert_eq!(created.title, "Valle Sagrado");
    assert!(created.main_image.starts_with("https://cdn.example.com"));
    assert_eq!(services.items()[0].id, created.id);

    let stored = store.get(SERVICES, created.id.as_str()).await.unwrap().unwrap();
    assert_eq!(stored.get("type"), Some(&json!("tours")));
    assert_eq!(stored.get("content").unwrap()["destinos"], json!(["Cusco"]));

    // A fresh repository sees the same record.
    let mut reloaded = ServiceRepository::new(store.clone());
    reloaded.load().await.unwrap();
    assert_eq!(reloaded.items()[0].content, created.content);

    // Editing locks the type.
    let mut edit = ServiceForm::edit(&created);
    assert!(matches!(
        edit.select_type(ServiceType::Visas),
        Err(CommerceError::ServiceTypeChange { .. })
    ));
    edit.subtitle = "Tres días".to_string();
    let updated = edit.submit(&mut services).await.unwrap();
    assert_eq!(updated.subtitle, "Tres días");
    assert_eq!(updated.service_type(), ServiceType::Tours);

    // A subtitle-only patch leaves everything else alone.
    let patched = services
        .update(created.id.as_str(), ServicePatch::subtitle("Cuatro días"))
        .await
        .unwrap();
    assert_eq!(patched.title, "Valle Sagrado");
    assert_eq!(patched.content, created.content);
}

#[tokio::test]
async fn test_tours_initial_structure_is_exact() {
    assert_eq!(
        initial_structure("tours"),
        json!({"destinos": [], "incluye": [], "noIncluye": [], "recomendaciones": []})
    );
}

#[tokio::test]
async fn test_products_search_and_cart() {
    let store = Arc::new(MemoryStore::new());
    let mut products = ProductRepository::new(store.clone());

    let cafe = products
        .create_from_form(&product_form("Café Orgánico", "Bebidas", "12,50", "10"))
        .await
        .unwrap();
    let poncho = products
        .create_from_form(&product_form("Poncho de Alpaca", "Ropa", "80", "2"))
        .await
        .unwrap();
    assert_eq!(cafe.price, 12.5);

    let mut index = SearchIndex::new(SearchSettings::default());
    index.load_products(store.as_ref()).await.unwrap();
    assert!(index.search("", 10).is_empty());
    assert!(index.search("a", 10).is_empty());

    let hits = index.search("cafe organico", 10);
    assert_eq!(hits[0].product.id, cafe.id);

    let (mut cart, notices) = cart_over(store.clone(), Cache::in_memory());
    assert!(cart.add_to_cart(&hits[0].product, 2).await);
    assert!(cart.add_to_cart(&poncho, 2).await);
    assert!(!cart.add_to_cart(&poncho, 1).await);
    assert_eq!(cart.cart_count(), 4);
    assert_eq!(cart.cart_total(), 185.0);
    assert!(notices
        .notices()
        .contains(&CartNotice::InsufficientStock { name: "Poncho de Alpaca".into(), available: 2 }));
}

#[tokio::test]
async fn test_update_quantity_clamps_to_live_stock() {
    let store = Arc::new(MemoryStore::new());
    let mut products = ProductRepository::new(store.clone());
    let p1 = products
        .create_from_form(&product_form("Mate", "Hogar", "10", "5"))
        .await
        .unwrap();

    let (mut cart, _) = cart_over(store.clone(), Cache::in_memory());
    assert!(cart.add_to_cart(&p1, 2).await);

    products
        .update(
            p1.id.as_str(),
            ProductPatch {
                stock: Some(1),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    cart.update_quantity(&p1.id, 3).await;
    assert_eq!(cart.item(&p1.id).unwrap().quantity, 1);
    assert_eq!(cart.cart_total(), 10.0);
    assert_eq!(cart.cart_count(), 1);
}

#[tokio::test]
async fn test_add_to_cart_rejected_when_sold_out() {
    let store = Arc::new(MemoryStore::new());
    let mut products = ProductRepository::new(store.clone());
    let p2 = products
        .create_from_form(&product_form("Chullo", "Ropa", "5", "0"))
        .await
        .unwrap();

    let (mut cart, _) = cart_over(store, Cache::in_memory());
    assert!(!cart.add_to_cart(&p2, 1).await);
    assert!(cart.is_empty());
    assert_eq!(cart.cart_total(), 0.0);
}

#[tokio::test]
async fn test_persisted_cart_survives_restart_and_drops_sold_out() {
    let dir = tempfile::tempdir().unwrap();
    let store = Arc::new(MemoryStore::new());
    let mut products = ProductRepository::new(store.clone());
    let p1 = products
        .create_from_form(&product_form("Taza", "Hogar", "8", "4"))
        .await
        .unwrap();
    let p3 = products
        .create_from_form(&product_form("Manta", "Hogar", "30", "5"))
        .await
        .unwrap();

    {
        let cache = Cache::new(Arc::new(FileBackend::open(dir.path()).unwrap()));
        let (mut cart, _) = cart_over(store.clone(), cache);
        cart.add_to_cart(&p1, 1).await;
        cart.add_to_cart(&p3, 5).await;
        assert_eq!(cart.cart_count(), 6);
    }

    products
        .update(
            p3.id.as_str(),
            ProductPatch {
                stock: Some(0),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    let cache = Cache::new(Arc::new(FileBackend::open(dir.path()).unwrap()));
    let (mut cart, notices) = cart_over(store.clone(), cache.clone());
    cart.load_cart().await;

    let ids: Vec<&ProductId> = cart.items().iter().map(|i| &i.id).collect();
    assert_eq!(ids, vec![&p1.id]);
    assert_eq!(cart.cart_total(), 8.0);
    assert_eq!(
        notices.take(),
        vec![CartNotice::Dropped { name: "Manta".into() }]
    );

    let persisted: Vec<LineItem> = cache.get("cart:guest").unwrap().unwrap();
    assert_eq!(persisted.len(), 1);
}
