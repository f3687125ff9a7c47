/// State of the "New webhook" modal while it is open.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreateModal {
    /// URL typed so far.
    pub url: String,
    /// Backend message from the last failed submit.
    pub error: Option<String>,
}
