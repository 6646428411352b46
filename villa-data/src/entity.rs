/// Static schema description for a persisted row type.
///
/// The generic layer builds its SQL from these constants and nothing else
/// about the concrete shape leaks through. Row types implement this by hand;
/// `Unpin` keeps them usable across the sqlx fetch futures.
pub trait Entity: Send + Sync + Unpin + 'static {
    /// Identity type, stringified when bound into a query.
    type Id: Send + Sync + ToString + 'static;

    fn table_name() -> &'static str;

    fn id_column() -> &'static str;

    /// Every column of the table, in declaration order.
    fn columns() -> &'static [&'static str];

    /// The column list joined into a SELECT projection.
    fn select_list() -> String {
        Self::columns().join(", ")
    }

    fn id(&self) -> &Self::Id;
}
