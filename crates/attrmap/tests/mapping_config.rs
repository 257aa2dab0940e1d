mod support;

use attrmap::annotation::Column;
use attrmap::{Annotation, Annotations, ColumnNaming, Mapping};
use pretty_assertions::assert_eq;
use std_util::assert_ok;
use support::*;

fn configured(f: &Fixture, prefix: Option<&str>, naming: ColumnNaming) -> Mapping {
    init_logging();

    let mut builder = Mapping::builder();
    if let Some(prefix) = prefix {
        builder.table_name_prefix(prefix);
    }
    builder
        .column_naming(naming)
        .build(f.types.clone(), annotations(f), f.db)
}

#[test]
fn explicit_column_names_win() {
    let f = fixture();

    for naming in [
        ColumnNaming::AsDeclared,
        ColumnNaming::SnakeCase,
        ColumnNaming::UpperSnakeCase,
    ] {
        let mapping = configured(&f, None, naming);
        let customers = assert_ok!(mapping.entity(f.customer));
        assert_eq!(assert_ok!(mapping.column_name(&customers, "Id")), "CustomerId");
    }
}

#[test]
fn default_column_names_follow_naming() {
    let f = fixture();

    let cases = [
        (ColumnNaming::AsDeclared, "OrderDate"),
        (ColumnNaming::SnakeCase, "order_date"),
        (ColumnNaming::UpperSnakeCase, "ORDER_DATE"),
        (ColumnNaming::CamelCase, "orderDate"),
    ];

    for (naming, expect) in cases {
        let mapping = configured(&f, None, naming);
        let orders = assert_ok!(mapping.entity(f.order));
        assert_eq!(assert_ok!(mapping.column_name(&orders, "orderdate")), expect);
    }
}

#[test]
fn unmapped_members_use_default_naming() {
    let f = fixture();
    let mapping = configured(&f, None, ColumnNaming::SnakeCase);
    let orders = assert_ok!(mapping.entity(f.order));

    assert_eq!(assert_ok!(mapping.column_name(&orders, "Notes")), "notes");
    assert_eq!(assert_ok!(mapping.column_name(&orders, "CUSTOMERID")), "customer_id");
}

#[test]
fn column_types_and_aliases() {
    let f = fixture();
    let mapping = default_mapping(&f);
    let customers = assert_ok!(mapping.entity(f.customer));

    assert_eq!(
        assert_ok!(mapping.column_db_type(&customers, "Name")),
        Some("varchar(100)")
    );
    assert_eq!(
        assert_ok!(mapping.column_alias(&customers, "name")),
        Some("customer_name")
    );
    assert_eq!(assert_ok!(mapping.column_db_type(&customers, "Id")), None);
    assert_eq!(assert_ok!(mapping.column_alias(&customers, "Id")), None);
    assert!(assert_ok!(mapping.is_generated(&customers, "Id")));
}

#[test]
fn table_name_prefix_applies_to_every_table_name() {
    let f = fixture();
    let mapping = configured(&f, Some("app_"), ColumnNaming::AsDeclared);

    let customers = assert_ok!(mapping.entity(f.customer));
    assert_eq!(assert_ok!(mapping.table_name(&customers)), "app_Customers");

    let tables: Vec<_> = assert_ok!(mapping.tables(&customers))
        .iter()
        .map(|table| assert_ok!(mapping.table_name_of(table)))
        .collect();
    assert_eq!(tables, ["app_CustomerDetails", "app_Customers"]);

    // Aliases and the display name are left alone
    let details = &customers.tables()[0];
    assert_eq!(assert_ok!(mapping.table_alias(details)), Some("cd"));
    assert_eq!(customers.display_name(), "Customers");
}

#[test]
fn table_name_prefix_applies_to_derived_names() {
    let f = fixture();
    let mut annotations = Annotations::new();
    annotations.declare("Orders", Annotation::column("Id", Column::new()));
    let mapping = Mapping::builder()
        .table_name_prefix("app_")
        .build(f.types.clone(), annotations, f.db);

    let orders = assert_ok!(mapping.entity(f.order));
    assert!(orders.tables().is_empty());
    assert_eq!(assert_ok!(mapping.table_name(&orders)), "app_Orders");
}

#[test]
fn debug_output_names_the_context() {
    let f = fixture();
    let mapping = default_mapping(&f);
    assert_ok!(mapping.entity(f.order));

    let debug = format!("{mapping:?}");
    assert!(debug.contains("context: \"Db\""), "{debug}");
    assert!(debug.contains("cached_entities: 1"), "{debug}");
}
