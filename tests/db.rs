use diesel::connection::SimpleConnection;
use diesel::prelude::*;
use diesel::sql_types::Integer;

mod common;

#[derive(QueryableByName)]
struct Flag {
    #[diesel(sql_type = Integer)]
    foreign_keys: i32,
}

#[test]
fn migrations_create_catalog_tables() {
    let test_db = common::TestDb::new();
    let mut conn = test_db.pool().get().expect("should get connection");

    conn.batch_execute(
        "SELECT id, name_key FROM products LIMIT 0;
         SELECT id, name FROM categories LIMIT 0;
         SELECT product_id, category_id, position FROM product_categories LIMIT 0;",
    )
    .expect("catalog tables should exist");
}

#[test]
fn pooled_connections_enforce_foreign_keys() {
    let test_db = common::TestDb::new();
    let mut conn = test_db.pool().get().expect("should get connection");

    let flag = diesel::sql_query("PRAGMA foreign_keys")
        .get_result::<Flag>(&mut conn)
        .expect("should read pragma");
    assert_eq!(flag.foreign_keys, 1);

    let orphan = conn.batch_execute(
        "INSERT INTO product_categories (product_id, category_id, position) VALUES (42, 1, 0);",
    );
    assert!(orphan.is_err());
}

#[test]
fn negative_quantity_is_rejected_by_storage() {
    let test_db = common::TestDb::new();
    let mut conn = test_db.pool().get().expect("should get connection");

    let result = conn.batch_execute(
        "INSERT INTO products
             (name, name_key, name_folded, description, quantity, created_at, updated_at)
         VALUES ('Widget', 'widget', 'widget', 'd', -1,
                 '2025-01-01 00:00:00', '2025-01-01 00:00:00');",
    );
    assert!(result.is_err());
}
