use serde::Serialize;
use crate::structs::view::detail_view::DetailView;
use crate::structs::view::list_view::ListView;

/// What the page shows right now.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "view", rename_all = "snake_case")]
pub enum PageView {
    /// Collection or catalog not fetched yet.
    Loading,
    /// Webhook list, with the create dialog if open.
    List(ListView),
    /// Edit form of the selected webhook.
    Detail(DetailView),
}
