/// Detail view snapshot.
pub mod detail_view;
/// List view snapshot.
pub mod list_view;
