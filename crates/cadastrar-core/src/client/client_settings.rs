use serde::{Deserialize, Serialize};

/// Basic client behavior settings. These settings specify the targets and behavior of the
/// CadastRAR client. They are optional and uneditable once the client is initialized.
///
/// Defaults to
///
/// ```
/// # use cadastrar_core::ClientSettings;
/// let settings = ClientSettings {
///     users_collection: "users".to_string(),
/// };
/// let default = ClientSettings::default();
/// ```
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct ClientSettings {
    /// The document-store collection that holds user profile records. Defaults to `users`
    pub users_collection: String,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            users_collection: "users".into(),
        }
    }
}
