/// Maps a member to a physical column.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Column {
    /// Column name. When unset the mapping derives one from the member name.
    pub name: Option<String>,

    pub alias: Option<String>,

    /// Database storage type, passed through verbatim (`numeric(10,2)`, ...).
    pub db_ty: Option<String>,

    pub primary_key: bool,

    /// The database assigns the value on insert.
    pub generated: bool,

    /// The value is computed by the database and never written.
    pub computed: bool,
}

impl Column {
    pub fn new() -> Column {
        Column::default()
    }

    pub fn named(name: impl Into<String>) -> Column {
        Column {
            name: Some(name.into()),
            ..Column::default()
        }
    }

    pub fn alias(mut self, alias: impl Into<String>) -> Column {
        self.alias = Some(alias.into());
        self
    }

    pub fn db_ty(mut self, db_ty: impl Into<String>) -> Column {
        self.db_ty = Some(db_ty.into());
        self
    }

    pub fn primary_key(mut self) -> Column {
        self.primary_key = true;
        self
    }

    pub fn generated(mut self) -> Column {
        self.generated = true;
        self
    }

    pub fn computed(mut self) -> Column {
        self.computed = true;
        self
    }
}
