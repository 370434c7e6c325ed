//! Repository layer for database operations
//!
//! Two databases are in play: the externally owned Koha catalog (read-only)
//! and the application's own database (users, sessions). Every query is
//! routed to one of the two pools by the schema its entity belongs to.

pub mod catalog;

use sqlx::{Pool, Postgres};

/// Which schema an entity belongs to, for query routing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaOwner {
    /// Koha catalog tables (biblio, biblio_metadata, branches, items)
    Catalog,
    /// Application-owned tables (users, sessions)
    App,
}

/// Selects a connection pool by schema ownership.
///
/// The catalog pool never receives writes or schema migrations; Koha owns
/// that schema outright and this service only reads it.
#[derive(Clone)]
pub struct DbRouter {
    catalog: Pool<Postgres>,
    app: Pool<Postgres>,
}

impl DbRouter {
    pub fn new(catalog: Pool<Postgres>, app: Pool<Postgres>) -> Self {
        Self { catalog, app }
    }

    /// Pool to use for queries against entities of the given schema
    pub fn pool_for(&self, owner: SchemaOwner) -> &Pool<Postgres> {
        match owner {
            SchemaOwner::Catalog => &self.catalog,
            SchemaOwner::App => &self.app,
        }
    }

    /// Whether schema migrations may run against the given schema.
    /// Only the application schema is ever migrated.
    pub fn allow_migrate(&self, owner: SchemaOwner) -> bool {
        owner == SchemaOwner::App
    }

    /// Whether entities of the two schemas may be joined in one query.
    /// Cross-database joins are impossible; relations stay within a schema.
    pub fn allow_relation(&self, a: SchemaOwner, b: SchemaOwner) -> bool {
        a == b
    }
}

/// Main repository struct holding the router and per-domain repositories
#[derive(Clone)]
pub struct Repository {
    pub router: DbRouter,
    pub catalog: catalog::CatalogRepository,
}

impl Repository {
    /// Create a new repository over the two connection pools
    pub fn new(router: DbRouter) -> Self {
        Self {
            catalog: catalog::CatalogRepository::new(router.clone()),
            router,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::postgres::PgPoolOptions;

    // connect_lazy builds pools without touching a server, which is all the
    // routing predicates need.
    fn router() -> DbRouter {
        let catalog = PgPoolOptions::new()
            .connect_lazy("postgres://koha@localhost/koha")
            .unwrap();
        let app = PgPoolOptions::new()
            .connect_lazy("postgres://kohalabel@localhost/kohalabel")
            .unwrap();
        DbRouter::new(catalog, app)
    }

    #[tokio::test]
    async fn only_app_schema_is_migratable() {
        let r = router();
        assert!(r.allow_migrate(SchemaOwner::App));
        assert!(!r.allow_migrate(SchemaOwner::Catalog));
    }

    #[tokio::test]
    async fn relations_stay_within_a_schema() {
        let r = router();
        assert!(r.allow_relation(SchemaOwner::Catalog, SchemaOwner::Catalog));
        assert!(r.allow_relation(SchemaOwner::App, SchemaOwner::App));
        assert!(!r.allow_relation(SchemaOwner::Catalog, SchemaOwner::App));
        assert!(!r.allow_relation(SchemaOwner::App, SchemaOwner::Catalog));
    }
}
