//! Sample catalog used to populate a fresh database.

use std::collections::HashMap;

use chrono::{NaiveDateTime, TimeDelta, Utc};

use crate::domain::category::NewCategory;
use crate::domain::product::NewProduct;
use crate::domain::types::{
    CategoryId, CategoryName, ProductDescription, ProductName, ProductQuantity,
};
use crate::repository::{
    CategoryReader, CategoryWriter, ProductWriter, RepositoryError, RepositoryResult,
};

const ELECTRONICS: &str = "Electronics";
const CLOTHING: &str = "Clothing";
const BOOKS: &str = "Books";
const HOME_KITCHEN: &str = "Home & Kitchen";
const TOYS_GAMES: &str = "Toys & Games";
const SPORTS: &str = "Sports";
const BEAUTY_HEALTH: &str = "Beauty & Health";
const AUTOMOTIVE: &str = "Automotive";
const OFFICE: &str = "Office Supplies";
const FOOD: &str = "Food & Beverages";

pub const CATEGORIES: [&str; 10] = [
    ELECTRONICS,
    CLOTHING,
    BOOKS,
    HOME_KITCHEN,
    TOYS_GAMES,
    SPORTS,
    BEAUTY_HEALTH,
    AUTOMOTIVE,
    OFFICE,
    FOOD,
];

/// A sample product and the names of the categories it belongs to.
pub struct SeedProduct {
    pub name: &'static str,
    pub description: &'static str,
    pub quantity: i32,
    pub categories: &'static [&'static str],
}

const fn product(
    name: &'static str,
    description: &'static str,
    quantity: i32,
    categories: &'static [&'static str],
) -> SeedProduct {
    SeedProduct {
        name,
        description,
        quantity,
        categories,
    }
}

pub const PRODUCTS: [SeedProduct; 50] = [
    product(
        "iPhone 13 Pro",
        "Latest Apple smartphone with advanced camera system",
        50,
        &[ELECTRONICS],
    ),
    product(
        "Samsung Galaxy S22",
        "Flagship Android smartphone with stunning display",
        45,
        &[ELECTRONICS],
    ),
    product(
        "Sony PlayStation 5",
        "Next-generation gaming console with stunning graphics",
        30,
        &[ELECTRONICS],
    ),
    product(
        "Dell XPS 15 Laptop",
        "Premium laptop with 4K display and powerful performance",
        25,
        &[ELECTRONICS],
    ),
    product(
        "Apple Watch Series 7",
        "Advanced smartwatch with health monitoring features",
        60,
        &[ELECTRONICS],
    ),
    product(
        "Nike Air Max",
        "Comfortable athletic shoes with air cushioning",
        100,
        &[CLOTHING, SPORTS],
    ),
    product(
        "Levi's 501 Original Jeans",
        "Classic straight fit jeans with button fly",
        80,
        &[CLOTHING],
    ),
    product(
        "Adidas Originals T-Shirt",
        "Cotton t-shirt with iconic trefoil logo",
        120,
        &[CLOTHING],
    ),
    product(
        "North Face Puffer Jacket",
        "Warm winter jacket with down insulation",
        45,
        &[CLOTHING],
    ),
    product(
        "Zara Slim Fit Blazer",
        "Modern tailored blazer for professional occasions",
        35,
        &[CLOTHING],
    ),
    product(
        "Harry Potter Complete Collection",
        "All seven books in the Harry Potter series",
        30,
        &[BOOKS],
    ),
    product(
        "To Kill a Mockingbird",
        "Classic novel by Harper Lee exploring racial injustice",
        50,
        &[BOOKS],
    ),
    product(
        "The Alchemist",
        "Paulo Coelho's masterpiece about following your dreams",
        65,
        &[BOOKS],
    ),
    product(
        "Atomic Habits",
        "James Clear's guide to building good habits and breaking bad ones",
        70,
        &[BOOKS],
    ),
    product(
        "1984",
        "George Orwell's dystopian social science fiction classic",
        40,
        &[BOOKS],
    ),
    product(
        "Kitchen Aid Mixer",
        "Professional stand mixer for baking enthusiasts",
        20,
        &[HOME_KITCHEN],
    ),
    product(
        "Ninja Air Fryer",
        "Versatile air fryer for healthier cooking",
        35,
        &[HOME_KITCHEN],
    ),
    product(
        "Dyson V11 Vacuum",
        "Cordless vacuum cleaner with powerful suction",
        25,
        &[HOME_KITCHEN],
    ),
    product(
        "Le Creuset Dutch Oven",
        "Premium enameled cast iron cookware for slow cooking",
        15,
        &[HOME_KITCHEN],
    ),
    product(
        "Nespresso Coffee Machine",
        "Automatic coffee maker for barista-quality espresso",
        40,
        &[HOME_KITCHEN, FOOD],
    ),
    product(
        "LEGO Star Wars Millennium Falcon",
        "Detailed building set of the iconic Star Wars spaceship",
        25,
        &[TOYS_GAMES],
    ),
    product(
        "Nintendo Switch",
        "Versatile gaming console for home and portable play",
        35,
        &[ELECTRONICS, TOYS_GAMES],
    ),
    product(
        "Monopoly Board Game",
        "Classic property trading game for the whole family",
        50,
        &[TOYS_GAMES],
    ),
    product(
        "Barbie Dreamhouse",
        "Luxurious doll house with multiple rooms and accessories",
        20,
        &[TOYS_GAMES],
    ),
    product(
        "Hot Wheels 50-Pack",
        "Collection of die-cast toy cars in various designs",
        30,
        &[TOYS_GAMES],
    ),
    product(
        "Wilson Basketball",
        "Official size and weight basketball for indoor/outdoor play",
        40,
        &[SPORTS],
    ),
    product(
        "Yoga Mat Premium",
        "Thick non-slip exercise mat for yoga and fitness",
        75,
        &[SPORTS],
    ),
    product(
        "Fitbit Charge 5",
        "Advanced fitness tracker with heart rate monitoring",
        50,
        &[SPORTS],
    ),
    product(
        "Coleman Camping Tent",
        "4-person weatherproof tent for outdoor adventures",
        20,
        &[SPORTS],
    ),
    product(
        "Titleist Pro V1 Golf Balls",
        "Professional quality golf balls for distance and control",
        100,
        &[SPORTS],
    ),
    product(
        "Dyson Airwrap",
        "Multi-styling tool for different hair types and styles",
        15,
        &[BEAUTY_HEALTH],
    ),
    product(
        "SK-II Facial Treatment Essence",
        "Luxury skincare product with pitera for skin renewal",
        25,
        &[BEAUTY_HEALTH],
    ),
    product(
        "Electric Toothbrush Pro",
        "Sonic toothbrush with multiple cleaning modes",
        45,
        &[BEAUTY_HEALTH],
    ),
    product(
        "Massage Gun Deep Tissue",
        "Percussion massager for muscle recovery and pain relief",
        30,
        &[BEAUTY_HEALTH],
    ),
    product(
        "Digital Bathroom Scale",
        "Precise weight measurement with smartphone connectivity",
        40,
        &[BEAUTY_HEALTH],
    ),
    product(
        "Car Dash Cam",
        "4K resolution dashboard camera with night vision",
        35,
        &[AUTOMOTIVE],
    ),
    product(
        "OBD2 Scanner Tool",
        "Diagnostic scanner for checking engine codes and performance",
        50,
        &[ELECTRONICS, AUTOMOTIVE, OFFICE],
    ),
    product(
        "Leather Seat Covers",
        "Premium seat covers for car interior upgrade",
        25,
        &[AUTOMOTIVE],
    ),
    product(
        "Portable Car Jump Starter",
        "Emergency battery booster with USB charging ports",
        40,
        &[AUTOMOTIVE],
    ),
    product(
        "Premium Car Wax",
        "Long-lasting protective wax for vehicle exterior",
        60,
        &[AUTOMOTIVE],
    ),
    product(
        "Mechanical Keyboard",
        "Ergonomic keyboard with customizable RGB lighting",
        30,
        &[ELECTRONICS, OFFICE],
    ),
    product(
        "Adjustable Standing Desk",
        "Electric height-adjustable desk for work comfort",
        15,
        &[OFFICE],
    ),
    product(
        "Moleskine Notebook",
        "Classic hardcover notebook with premium paper",
        100,
        &[BOOKS, OFFICE],
    ),
    product(
        "Document Scanner Portable",
        "Compact scanner for digitizing documents on the go",
        20,
        &[ELECTRONICS, OFFICE],
    ),
    product(
        "Ergonomic Office Chair",
        "Adjustable chair with lumbar support for long work hours",
        25,
        &[OFFICE],
    ),
    product(
        "Single Origin Coffee Beans",
        "Specialty grade coffee beans from Ethiopia",
        40,
        &[FOOD],
    ),
    product(
        "Artisanal Chocolate Box",
        "Assorted handmade chocolates with various flavors",
        30,
        &[FOOD],
    ),
    product(
        "Organic Matcha Green Tea",
        "Premium grade Japanese matcha powder",
        25,
        &[FOOD],
    ),
    product(
        "Truffle Infused Olive Oil",
        "Gourmet olive oil with black truffle essence",
        20,
        &[FOOD],
    ),
    product(
        "Aged Balsamic Vinegar",
        "Traditional Italian balsamic aged in wooden barrels",
        15,
        &[FOOD],
    ),
];

/// Removes every product and category.
pub fn destroy_catalog<R>(repo: &R) -> RepositoryResult<()>
where
    R: ProductWriter + CategoryWriter,
{
    let products = repo.delete_all_products()?;
    let categories = repo.delete_all_categories()?;
    log::info!("Removed {products} products and {categories} categories");
    Ok(())
}

/// Replaces the stored catalog with the sample categories and products.
///
/// Products are stamped one second apart in list order, so the last sample
/// product is the newest.
pub fn import_catalog<R>(repo: &R) -> RepositoryResult<()>
where
    R: ProductWriter + CategoryReader + CategoryWriter,
{
    destroy_catalog(repo)?;

    let now = Utc::now().naive_utc();
    let categories = CATEGORIES
        .iter()
        .map(|name| Ok(NewCategory::new(CategoryName::new(*name)?, now)))
        .collect::<RepositoryResult<Vec<_>>>()?;
    repo.create_categories(&categories)?;

    let ids: HashMap<String, CategoryId> = repo
        .list_categories()?
        .into_iter()
        .map(|c| (c.name.into_inner(), c.id))
        .collect();

    let start = now - TimeDelta::seconds(PRODUCTS.len() as i64);
    for (index, sample) in PRODUCTS.iter().enumerate() {
        let created_at = start + TimeDelta::seconds(index as i64);
        repo.create_product(&new_product(sample, &ids, created_at)?)?;
    }

    log::info!(
        "Imported {} categories and {} products",
        CATEGORIES.len(),
        PRODUCTS.len()
    );
    Ok(())
}

fn new_product(
    sample: &SeedProduct,
    ids: &HashMap<String, CategoryId>,
    created_at: NaiveDateTime,
) -> RepositoryResult<NewProduct> {
    let categories = sample
        .categories
        .iter()
        .map(|name| {
            ids.get(*name).copied().ok_or_else(|| {
                RepositoryError::ValidationError(format!("unknown seed category {name}"))
            })
        })
        .collect::<RepositoryResult<Vec<_>>>()?;

    Ok(NewProduct {
        name: ProductName::new(sample.name)?,
        description: ProductDescription::new(sample.description)?,
        quantity: ProductQuantity::new(sample.quantity)?,
        categories,
        created_at,
    })
}
