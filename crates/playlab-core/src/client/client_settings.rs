use serde::{Deserialize, Serialize};

/// Basic client behavior settings. They are optional and uneditable once the
/// client is initialized.
///
/// Defaults to
///
/// ```
/// # use playlab_core::{ClientSettings, DeviceType};
/// let settings = ClientSettings {
///     app_name: "PlayLab".to_string(),
///     device_type: DeviceType::Sdk,
///     app_version: None,
/// };
/// let default = ClientSettings::default();
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct ClientSettings {
    /// Display name of the host application. Defaults to `PlayLab`.
    pub app_name: String,
    /// The host platform the client runs on. Defaults to `Sdk`.
    pub device_type: DeviceType,
    /// Version of the host application, if it reports one.
    pub app_version: Option<String>,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            app_name: "PlayLab".into(),
            device_type: DeviceType::Sdk,
            app_version: None,
        }
    }
}

/// The host platform a client runs on.
#[allow(missing_docs)]
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum DeviceType {
    Ios,
    Android,
    Web,
    Desktop,
    Sdk,
}

impl DeviceType {
    /// Whether the platform ships a keychain the secure backend can use.
    /// Only the web lacks one.
    pub fn supports_secure_store(&self) -> bool {
        !matches!(self, DeviceType::Web)
    }
}
