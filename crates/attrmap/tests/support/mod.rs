#![allow(dead_code)]

use attrmap::annotation::{Association, Column, Extension, TableAnnotation};
use attrmap::ty::{Member, Ty};
use attrmap::{Annotation, AnnotationSource, Annotations, Mapping, TypeId, TypeRegistry};

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Types:
///   Db { Customers: [Customer], Orders: [Order], Premium: [Customer], audit: [AuditRow] (private) }
///   Customer { Id, Name, Address: Address, Orders: [Order] }
///   PremiumCustomer { Id, Name, Tier }
///   Order { Id, CustomerId, Customer: Customer, OrderDate, Total, Notes }
///   Address { Street, City, Geo: Geo }
///   Geo { Lat, Lng }
///   AuditRow { Id }
pub struct Fixture {
    pub types: Arc<TypeRegistry>,
    pub db: TypeId,
    pub customer: TypeId,
    pub premium_customer: TypeId,
    pub order: TypeId,
    pub address: TypeId,
    pub geo: TypeId,
    pub audit_row: TypeId,
}

fn string() -> Ty {
    Ty::primitive("String")
}

fn int() -> Ty {
    Ty::primitive("i64")
}

pub fn fixture() -> Fixture {
    let mut types = TypeRegistry::new();

    let customer = types.declare("Customer");
    let order = types.declare("Order");

    let geo = types.register(
        "Geo",
        [
            Member::new("Lat", Ty::primitive("f64")),
            Member::new("Lng", Ty::primitive("f64")),
        ],
    );
    let address = types.register(
        "Address",
        [
            Member::new("Street", string()),
            Member::new("City", string()),
            Member::new("Geo", geo),
        ],
    );
    let premium_customer = types.register(
        "PremiumCustomer",
        [
            Member::new("Id", int()),
            Member::new("Name", string()),
            Member::new("Tier", string()),
        ],
    );
    let audit_row = types.register("AuditRow", [Member::new("Id", int())]);

    types.define(
        customer,
        [
            Member::new("Id", int()),
            Member::new("Name", string()),
            Member::new("Address", address),
            Member::new("Orders", Ty::list(order)),
        ],
    );
    types.define(
        order,
        [
            Member::new("Id", int()),
            Member::new("CustomerId", int()),
            Member::new("Customer", customer),
            Member::new("OrderDate", Ty::primitive("DateTime")),
            Member::new("Total", Ty::primitive("Decimal")),
            Member::new("Notes", string()),
        ],
    );

    let db = types.register(
        "Db",
        [
            Member::new("Customers", Ty::list(customer)),
            Member::new("Orders", Ty::list(order)),
            Member::new("Premium", Ty::list(customer)),
            Member::new("audit", Ty::list(audit_row)).private(),
        ],
    );

    Fixture {
        types: Arc::new(types),
        db,
        customer,
        premium_customer,
        order,
        address,
        geo,
        audit_row,
    }
}

/// The annotation set most tests run against.
pub fn annotations(f: &Fixture) -> Annotations {
    let mut annotations = Annotations::new();

    annotations.declare_all(
        "Customers",
        [
            TableAnnotation::new("Customers").alias("c").into(),
            TableAnnotation::extension(
                "CustomerDetails",
                Extension::new("Id", "CustomerId").related_alias("c"),
            )
            .alias("cd")
            .into(),
            Annotation::column("Id", Column::named("CustomerId").primary_key().generated()),
            Annotation::column("Name", Column::new().db_ty("varchar(100)").alias("customer_name")),
            Annotation::column("Address.Street", Column::named("street")),
            Annotation::column("Address.City", Column::new()),
            Annotation::column("Address.Geo.Lat", Column::new()),
            Annotation::column("Address.Geo.Lng", Column::new()),
            Annotation::association("Orders", Association::new("Id", "CustomerId")),
        ],
    );

    annotations.declare_all(
        "Orders",
        [
            Annotation::table("Orders"),
            Annotation::column("Id", Column::new().primary_key()),
            Annotation::column("CustomerId", Column::new()),
            Annotation::column("OrderDate", Column::new().db_ty("datetime")),
            Annotation::column("Total", Column::new().computed()),
            Annotation::association(
                "Customer",
                Association::new("CustomerId", "Id")
                    .related_entity_id("Customers")
                    .foreign_key(),
            ),
        ],
    );

    annotations.declare_all(
        "Premium",
        [
            Annotation::table_of("Customers", f.premium_customer),
            Annotation::column("Id", Column::new().primary_key()),
            Annotation::column("Tier", Column::new()),
        ],
    );

    annotations.declare_all(
        "audit",
        [
            Annotation::table("AuditLog"),
            Annotation::column("Id", Column::new().primary_key()),
        ],
    );

    annotations
}

pub fn mapping(f: &Fixture, annotations: impl AnnotationSource + 'static) -> Mapping {
    init_logging();
    Mapping::builder().build(f.types.clone(), annotations, f.db)
}

pub fn default_mapping(f: &Fixture) -> Mapping {
    mapping(f, annotations(f))
}

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Counts how often each build asks for annotations.
pub struct CountingSource<S> {
    pub inner: S,
    pub calls: Arc<AtomicUsize>,
}

impl<S> CountingSource<S> {
    pub fn new(inner: S) -> (CountingSource<S>, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        (
            CountingSource {
                inner,
                calls: calls.clone(),
            },
            calls,
        )
    }
}

impl<S: AnnotationSource> AnnotationSource for CountingSource<S> {
    fn annotations(&self, member: &str) -> attrmap::Result<Vec<Annotation>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.inner.annotations(member)
    }
}

pub fn calls(counter: &AtomicUsize) -> usize {
    counter.load(Ordering::SeqCst)
}
